use super::types::Float;

pub const PI: Float = std::f32::consts::PI;

/// Degree zero real spherical-harmonics coefficient, `1 / (2 * sqrt(pi))`.
pub const SH_C0: Float = 0.28209479177387814;

/// Padding added around the eye-space depth extent when fitting a frustum.
pub const FRUSTUM_EPSILON: Float = 1e-3;
/// Smallest near (and far) plane distance a fitted frustum may use.
pub const MIN_NEAR_PLANE: Float = 1e-3;

/// Added to the diagonal of every projected 2D covariance.
pub const FILTER_LOW_PASS: Float = 0.3;

pub const DEFAULT_IMAGE_WIDTH: u32 = 1280;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 720;
pub const DEFAULT_TILE_WIDTH: u32 = 32;
pub const DEFAULT_TILE_HEIGHT: u32 = 16;
pub const DEFAULT_FOV_DEGREES: Float = 40.0;

/// Colour of primitives that carry no spherical-harmonics attributes.
pub const DEFAULT_POINT_COLOUR: [Float; 4] = [0.05, 0.05, 0.05, 1.0];

#[inline]
pub fn radians(deg: Float) -> Float {
    return deg * (PI / 180.0);
}
