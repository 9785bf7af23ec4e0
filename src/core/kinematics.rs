pub const EARTH_GRAVITY_MPS2: f64 = 9.8;

/// Sampling interval for trajectory points (50 ms).
pub const SAMPLE_STEP_S: f64 = 0.05;

/// Heights within this distance of the ground count as "on the ground".
const GROUND_EPSILON_M: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Upward,
    Downward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionType {
    FreeFall,
    VerticalThrow,
}

#[derive(Clone, Copy, Debug)]
pub struct InitialConditions {
    pub initial_velocity_mps: f64,
    pub initial_height_m: f64,
    pub gravity_mps2: f64,
    pub direction: Direction,
    pub motion_type: MotionType,
}

impl InitialConditions {
    pub fn free_fall(height_m: f64) -> Self {
        Self {
            initial_velocity_mps: 0.0,
            initial_height_m: height_m,
            gravity_mps2: EARTH_GRAVITY_MPS2,
            direction: Direction::Downward,
            motion_type: MotionType::FreeFall,
        }
    }

    pub fn vertical_throw(velocity_mps: f64, height_m: f64, direction: Direction) -> Self {
        Self {
            initial_velocity_mps: velocity_mps,
            initial_height_m: height_m,
            gravity_mps2: EARTH_GRAVITY_MPS2,
            direction,
            motion_type: MotionType::VerticalThrow,
        }
    }
}

/// One instant of the motion. `vy` is signed, positive upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub y: f64,
    pub vy: f64,
}

/// Trajectory samples plus the closed-form scalars, built once by
/// [`solve`] and read-only afterwards.
#[derive(Clone, Debug)]
pub struct Trajectory {
    samples: Vec<Sample>,
    max_height_m: f64,
    time_to_max_height_s: f64,
    total_time_s: f64,
}

impl Trajectory {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.samples.len() - 1
    }

    pub fn sample(&self, index: usize) -> Sample {
        self.samples[index.min(self.last_index())]
    }

    pub fn max_height_m(&self) -> f64 {
        self.max_height_m
    }

    pub fn time_to_max_height_s(&self) -> f64 {
        self.time_to_max_height_s
    }

    pub fn total_time_s(&self) -> f64 {
        self.total_time_s
    }

    /// Velocity at ground impact (signed; equals `vy` of the final sample).
    pub fn impact_velocity_mps(&self) -> f64 {
        self.samples[self.last_index()].vy
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Clamp out-of-domain inputs instead of rejecting them: negative
/// magnitudes become zero and an unusable gravity falls back to Earth's.
/// Keeps the solver total over anything a caller might hand it.
fn sanitized(conditions: InitialConditions) -> InitialConditions {
    let mut c = conditions;
    if !c.initial_velocity_mps.is_finite() || c.initial_velocity_mps < 0.0 {
        c.initial_velocity_mps = 0.0;
    }
    if !c.initial_height_m.is_finite() || c.initial_height_m < 0.0 {
        c.initial_height_m = 0.0;
    }
    if !c.gravity_mps2.is_finite() || c.gravity_mps2 <= 0.0 {
        c.gravity_mps2 = EARTH_GRAVITY_MPS2;
    }
    c
}

fn signed_initial_velocity(conditions: InitialConditions) -> f64 {
    match conditions.motion_type {
        MotionType::FreeFall => 0.0,
        MotionType::VerticalThrow => match conditions.direction {
            Direction::Upward => conditions.initial_velocity_mps,
            Direction::Downward => -conditions.initial_velocity_mps,
        },
    }
}

/// Compute the full vertical-motion trajectory for the given initial
/// conditions.
///
/// Scalars come from the closed-form equations; samples are emitted every
/// [`SAMPLE_STEP_S`] until ground impact, with a terminal sample appended
/// at exactly `t = total_time` so the buffer always ends at `y = 0`
/// whenever the object was airborne at all. All emitted values are
/// rounded to three decimals.
pub fn solve(conditions: InitialConditions) -> Trajectory {
    let c = sanitized(conditions);
    let v0 = signed_initial_velocity(c);
    let g = c.gravity_mps2;
    let h0 = c.initial_height_m;

    let time_to_max_height_s = (v0 / g).max(0.0);
    let max_above_start = if v0 > 0.0 { (v0 * v0) / (2.0 * g) } else { 0.0 };
    let max_height_m = h0 + max_above_start;

    // Positive root of h0 + v0*t - g*t^2/2 = 0; the discriminant cannot go
    // negative with h0 >= 0.
    let discriminant = v0 * v0 + 2.0 * g * h0;
    let mut total_time_s = (v0 + discriminant.sqrt()) / g;
    if !total_time_s.is_finite() || total_time_s < 0.0 {
        total_time_s = 0.0;
    }

    let mut samples = Vec::new();
    if total_time_s > 0.0 {
        let mut i = 0u32;
        loop {
            let t = f64::from(i) * SAMPLE_STEP_S;
            if t > total_time_s {
                break;
            }
            let y = h0 + v0 * t - 0.5 * g * t * t;
            if y < 0.0 {
                break;
            }
            samples.push(Sample {
                t: round3(t),
                y: round3(y.max(0.0)),
                vy: round3(v0 - g * t),
            });
            i += 1;
        }

        let landing_t = round3(total_time_s);
        let past_ground = samples
            .last()
            .is_some_and(|last| last.y > GROUND_EPSILON_M && last.t < landing_t);
        if past_ground {
            samples.push(Sample {
                t: landing_t,
                y: 0.0,
                vy: round3(v0 - g * total_time_s),
            });
        }
    }

    if samples.is_empty() {
        // Never airborne: a single resting sample at the starting point.
        let sample = if h0 > 0.0 {
            Sample {
                t: 0.0,
                y: round3(h0),
                vy: round3(v0),
            }
        } else {
            Sample {
                t: 0.0,
                y: 0.0,
                vy: 0.0,
            }
        };
        samples.push(sample);
    }

    Trajectory {
        samples,
        max_height_m: round3(max_height_m),
        time_to_max_height_s: round3(time_to_max_height_s),
        total_time_s: round3(total_time_s),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{Direction, InitialConditions, MotionType, solve};

    fn assert_buffer_invariants(trajectory: &super::Trajectory) {
        let samples = trajectory.samples();
        assert!(!samples.is_empty());
        assert_abs_diff_eq!(samples[0].t, 0.0);
        for pair in samples.windows(2) {
            assert!(pair[1].t > pair[0].t, "t not strictly increasing");
        }
        for sample in samples {
            assert!(sample.y >= 0.0, "negative height emitted");
            assert!(sample.t.is_finite() && sample.y.is_finite() && sample.vy.is_finite());
        }
        if trajectory.total_time_s() > 0.0 {
            assert_abs_diff_eq!(samples[samples.len() - 1].y, 0.0);
        }
    }

    #[test]
    fn free_fall_from_building() {
        let trajectory = solve(InitialConditions::free_fall(45.0));

        assert_abs_diff_eq!(trajectory.total_time_s(), 3.03, epsilon = 0.005);
        assert_abs_diff_eq!(trajectory.max_height_m(), 45.0);
        assert_abs_diff_eq!(trajectory.time_to_max_height_s(), 0.0);
        assert_buffer_invariants(&trajectory);

        for pair in trajectory.samples().windows(2) {
            assert!(pair[1].y < pair[0].y, "free fall must descend monotonically");
        }
    }

    #[test]
    fn upward_throw_from_ground() {
        let trajectory = solve(InitialConditions::vertical_throw(
            20.0,
            0.0,
            Direction::Upward,
        ));

        assert_abs_diff_eq!(trajectory.time_to_max_height_s(), 2.041, epsilon = 0.001);
        assert_abs_diff_eq!(trajectory.max_height_m(), 20.408, epsilon = 0.001);
        assert_abs_diff_eq!(trajectory.total_time_s(), 4.082, epsilon = 0.001);
        assert_buffer_invariants(&trajectory);
    }

    #[test]
    fn downward_throw_from_height() {
        let trajectory = solve(InitialConditions::vertical_throw(
            15.0,
            30.0,
            Direction::Downward,
        ));

        // Positive root of 30 - 15t - 4.9t^2 = 0.
        assert_abs_diff_eq!(trajectory.total_time_s(), 1.379, epsilon = 0.001);
        assert_abs_diff_eq!(trajectory.time_to_max_height_s(), 0.0);
        assert_abs_diff_eq!(trajectory.max_height_m(), 30.0);
        assert!(trajectory.impact_velocity_mps() < -15.0);
        assert_buffer_invariants(&trajectory);
    }

    #[test]
    fn object_resting_on_ground_yields_single_sample() {
        let trajectory = solve(InitialConditions::vertical_throw(
            0.0,
            0.0,
            Direction::Downward,
        ));

        assert_eq!(trajectory.len(), 1);
        assert_abs_diff_eq!(trajectory.total_time_s(), 0.0);
        let only = trajectory.sample(0);
        assert_abs_diff_eq!(only.t, 0.0);
        assert_abs_diff_eq!(only.y, 0.0);
        assert_abs_diff_eq!(only.vy, 0.0);
    }

    #[test]
    fn trajectory_ends_exactly_at_ground() {
        let trajectory = solve(InitialConditions::vertical_throw(
            12.5,
            7.3,
            Direction::Upward,
        ));

        let last = trajectory.sample(trajectory.last_index());
        assert_abs_diff_eq!(last.y, 0.0);
        assert_abs_diff_eq!(last.t, trajectory.total_time_s(), epsilon = 1e-9);
        assert_buffer_invariants(&trajectory);
    }

    #[test]
    fn free_fall_ignores_supplied_velocity() {
        let mut conditions = InitialConditions::free_fall(10.0);
        conditions.initial_velocity_mps = 99.0;

        let trajectory = solve(conditions);

        assert_abs_diff_eq!(trajectory.max_height_m(), 10.0);
        assert_abs_diff_eq!(trajectory.time_to_max_height_s(), 0.0);
    }

    #[test]
    fn clamps_out_of_domain_inputs() {
        // Negative magnitudes clamp to zero, broken gravity falls back to 9.8.
        let trajectory = solve(InitialConditions {
            initial_velocity_mps: -5.0,
            initial_height_m: -2.0,
            gravity_mps2: 0.0,
            direction: Direction::Upward,
            motion_type: MotionType::VerticalThrow,
        });

        assert_eq!(trajectory.len(), 1);
        assert_abs_diff_eq!(trajectory.total_time_s(), 0.0);
        assert_buffer_invariants(&trajectory);

        let reference = solve(InitialConditions::free_fall(45.0));
        let nan_gravity = solve(InitialConditions {
            gravity_mps2: f64::NAN,
            ..InitialConditions::free_fall(45.0)
        });
        assert_abs_diff_eq!(nan_gravity.total_time_s(), reference.total_time_s());
    }

    #[test]
    fn scalars_match_buffer_extremes() {
        let trajectory = solve(InitialConditions::vertical_throw(
            20.0,
            0.0,
            Direction::Upward,
        ));

        let buffer_peak = trajectory
            .samples()
            .iter()
            .fold(0.0f64, |acc, s| acc.max(s.y));
        assert_abs_diff_eq!(buffer_peak, trajectory.max_height_m(), epsilon = 0.05);

        let buffer_end = trajectory.sample(trajectory.last_index()).t;
        assert_abs_diff_eq!(buffer_end, trajectory.total_time_s(), epsilon = 0.05);
    }
}
