pub mod gaussian;
pub mod point;
pub mod primitive;
pub mod procedural;
pub mod scene_data;

pub use gaussian::Gaussian3D;
pub use point::ScenePoint;
pub use primitive::*;
pub use procedural::procedural_cloud;
pub use scene_data::*;
