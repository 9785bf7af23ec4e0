use freefall_rust::core::kinematics::{
    Direction, EARTH_GRAVITY_MPS2, InitialConditions, MotionType,
};

const MOON_GRAVITY_MPS2: f64 = 1.62;

pub(crate) struct Scenario {
    pub(crate) code: &'static str,
    pub(crate) title: &'static str,
    pub(crate) conditions: InitialConditions,
}

impl Scenario {
    pub(crate) fn catalog() -> Vec<Self> {
        vec![
            Self {
                code: "DROP 1",
                title: "Free Fall From A Building",
                conditions: InitialConditions::free_fall(45.0),
            },
            Self {
                code: "THROW 1",
                title: "Straight Up From The Ground",
                conditions: InitialConditions::vertical_throw(20.0, 0.0, Direction::Upward),
            },
            Self {
                code: "THROW 2",
                title: "Hurled Down From A Cliff",
                conditions: InitialConditions::vertical_throw(15.0, 30.0, Direction::Downward),
            },
            Self {
                code: "THROW 3",
                title: "High Toss From A Balcony",
                conditions: InitialConditions::vertical_throw(12.0, 25.0, Direction::Upward),
            },
            Self {
                code: "MOON 1",
                title: "Lunar Throw",
                conditions: InitialConditions {
                    initial_velocity_mps: 20.0,
                    initial_height_m: 0.0,
                    gravity_mps2: MOON_GRAVITY_MPS2,
                    direction: Direction::Upward,
                    motion_type: MotionType::VerticalThrow,
                },
            },
        ]
    }
}

/// Slider-friendly copy of the initial conditions. The macroquad panel
/// edits these f32 fields; the runtime converts back to
/// [`InitialConditions`] and re-solves whenever something changed.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct ConditionsDraft {
    pub(crate) velocity_mps: f32,
    pub(crate) height_m: f32,
    pub(crate) gravity_mps2: f32,
    pub(crate) upward: bool,
    pub(crate) free_fall: bool,
}

impl ConditionsDraft {
    pub(crate) fn from_conditions(conditions: InitialConditions) -> Self {
        Self {
            velocity_mps: conditions.initial_velocity_mps as f32,
            height_m: conditions.initial_height_m as f32,
            gravity_mps2: conditions.gravity_mps2 as f32,
            upward: conditions.direction == Direction::Upward,
            free_fall: conditions.motion_type == MotionType::FreeFall,
        }
    }

    pub(crate) fn to_conditions(self) -> InitialConditions {
        if self.free_fall {
            InitialConditions {
                initial_velocity_mps: 0.0,
                initial_height_m: f64::from(self.height_m),
                gravity_mps2: f64::from(self.gravity_mps2),
                direction: Direction::Downward,
                motion_type: MotionType::FreeFall,
            }
        } else {
            InitialConditions {
                initial_velocity_mps: f64::from(self.velocity_mps),
                initial_height_m: f64::from(self.height_m),
                gravity_mps2: f64::from(self.gravity_mps2),
                direction: if self.upward {
                    Direction::Upward
                } else {
                    Direction::Downward
                },
                motion_type: MotionType::VerticalThrow,
            }
        }
    }
}
