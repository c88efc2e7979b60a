pub mod matrix4x4;

pub use matrix4x4::Matrix4x4;
