pub mod camera_state;
pub mod fit;

pub use camera_state::CameraState;
pub use fit::*;
