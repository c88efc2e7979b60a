use crate::core::base::*;

/// A renderable splat primitive as seen by the rasteriser.
pub trait Primitive: Sync + Send {
    /// World space position.
    fn position(&self) -> Point3f;
    /// Colour written to the framebuffer.
    fn rgb(&self) -> [u8; 3];
    /// World space 3D covariance, `None` for primitives without extent.
    fn covariance(&self) -> Option<[[Float; 3]; 3]> {
        return None;
    }
}

/// Bounds of the positions of a non-empty primitive collection.
pub fn primitive_bounds<P: Primitive>(primitives: &[P]) -> Result<Bounds3f, SplatError> {
    let positions: Vec<Point3f> = primitives.iter().map(|p| p.position()).collect();
    return Bounds3f::from_points(positions.iter());
}

#[inline]
pub(crate) fn to_byte(v: Float) -> u8 {
    return Float::clamp(255.0 * v, 0.0, 255.0) as u8;
}
