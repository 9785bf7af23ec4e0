pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 800;
pub const MSAA_SAMPLES: i32 = 4;

pub const TITLE_Y: f32 = 42.0;
pub const CONTROLS_Y: f32 = 84.0;

// Reserved display margins around the plot area; the projection scales
// the time/height domain into what is left.
pub const LEFT_MARGIN: f32 = 90.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 150.0;
pub const BOTTOM_MARGIN: f32 = 110.0;

pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const BALL_RADIUS_PX: f32 = 11.0;
pub const VELOCITY_VECTOR_PX_PER_MPS: f32 = 3.0;
pub const VELOCITY_VECTOR_MIN_MPS: f64 = 0.1;
pub const INFO_BOX_WIDTH: f32 = 170.0;
pub const INFO_BOX_HEIGHT: f32 = 64.0;

pub const VELOCITY_SLIDER_MAX_MPS: f32 = 80.0;
pub const HEIGHT_SLIDER_MAX_M: f32 = 200.0;
pub const GRAVITY_SLIDER_MIN_MPS2: f32 = 0.5;
pub const GRAVITY_SLIDER_MAX_MPS2: f32 = 25.0;
