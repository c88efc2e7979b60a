use super::primitive::Primitive;
use crate::core::base::*;

/// A bare coloured point.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct ScenePoint {
    pub p: Point3f,
    pub rgb: [u8; 3],
}

impl ScenePoint {
    pub fn new(p: Point3f, rgb: [u8; 3]) -> Self {
        ScenePoint { p, rgb }
    }
}

impl Primitive for ScenePoint {
    fn position(&self) -> Point3f {
        self.p
    }

    fn rgb(&self) -> [u8; 3] {
        self.rgb
    }
}
