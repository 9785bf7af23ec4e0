use crate::core::kinematics::{Sample, Trajectory};

/// Floor for the domain spans so a grounded trajectory (zero height or
/// zero duration) still yields positive scales.
const MIN_DOMAIN_SPAN: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Affine mapping from the simulation domain (seconds, meters) into
/// display coordinates. Height grows upward in the domain and downward on
/// screen, so `map` inverts the y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub scale_x: f64,
    pub scale_y: f64,
    pub origin_offset_x: f64,
    pub origin_offset_y: f64,
}

impl Projection {
    pub fn map(&self, sample: Sample) -> (f64, f64) {
        (
            self.origin_offset_x + sample.t * self.scale_x,
            self.origin_offset_y - sample.y * self.scale_y,
        )
    }
}

/// Derive the domain-to-display mapping for a trajectory. Pure: callers
/// recompute only when the buffer or the viewport changes.
pub fn project(trajectory: &Trajectory, viewport: Viewport, margins: Margins) -> Projection {
    let plot_width = (viewport.width - margins.left - margins.right).max(1.0);
    let plot_height = (viewport.height - margins.top - margins.bottom).max(1.0);

    Projection {
        scale_x: plot_width / trajectory.total_time_s().max(MIN_DOMAIN_SPAN),
        scale_y: plot_height / trajectory.max_height_m().max(MIN_DOMAIN_SPAN),
        origin_offset_x: margins.left,
        origin_offset_y: viewport.height - margins.bottom,
    }
}
