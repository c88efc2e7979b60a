use crate::core::base::*;
use crate::core::framebuffer::Viewport;

/// Pixel position of a clip space point, or `None` when the point is
/// behind the eye (`w <= 0`), outside the depth range `[-1, 1]`, or off
/// the viewport. Rasterisation and every histogram go through this one
/// predicate.
#[inline]
pub fn clip_to_pixel(clip: &Vector4f, viewport: &Viewport) -> Option<Point2f> {
    if !(clip.w > 0.0) {
        return None;
    }
    let ndc = clip.dehomogenize();
    if !(ndc.z >= -1.0 && ndc.z <= 1.0) {
        return None;
    }
    let p = viewport.ndc_to_pixel(ndc.x, ndc.y);
    if !viewport.contains(&p) {
        return None;
    }
    return Some(p);
}

/// Integer pixel coordinates of a visible pixel position.
#[inline]
pub fn pixel_coords(p: &Point2f) -> Point2i {
    return Point2i::new(p.x.floor() as i32, p.y.floor() as i32);
}
