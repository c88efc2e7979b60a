pub mod bounds2;
pub mod bounds3;
pub mod numeric_traits;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use bounds2::*;
pub use bounds3::*;
pub use vector2::*;
pub use vector3::*;
pub use vector4::*;
