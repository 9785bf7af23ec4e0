pub mod kinematics;
pub mod playback;
pub mod projection;
