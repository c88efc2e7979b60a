pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;

pub use super::error::*;
pub use super::geometry::{Bounds2, Bounds3, Vector2, Vector3, Vector4};
pub use super::quaternion::Quaternion;
pub use super::transform::Matrix4x4;
