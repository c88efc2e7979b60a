use crate::core::base::*;

use log::*;

/// World-to-eye transform that frames `bounds`.
///
/// The eye is placed `diagonal_length * distance_factor` away from the box
/// centroid along world +z made orthogonal to `up` (world +y when `up` is
/// parallel to z), looking back at the centroid.
pub fn look_at_bounding_box(
    bounds: &Bounds3f,
    up: &Vector3f,
    distance_factor: Float,
) -> Result<Matrix4x4, SplatError> {
    if up.length_squared() == 0.0 {
        return Err(SplatError::invalid_argument("up vector has zero length"));
    }
    if !(distance_factor > 0.0) {
        return Err(SplatError::invalid_argument("distance factor must be positive"));
    }
    let diagonal = bounds.diagonal().length();
    if !(diagonal > 0.0) {
        return Err(SplatError::invalid_argument("bounding box is degenerate"));
    }

    let up = up.normalize();
    let z = Vector3f::new(0.0, 0.0, 1.0);
    let axis = z - up * z.dot(&up);
    let axis = if axis.length_squared() < 1e-12 {
        Vector3f::new(0.0, 1.0, 0.0)
    } else {
        axis.normalize()
    };

    let target = bounds.centroid();
    let eye = target + axis * (diagonal * distance_factor);
    debug!("look_at_bounding_box: eye {:?} target {:?}", eye, target);
    return Matrix4x4::look_at(&eye, &target, &up)
        .ok_or_else(|| SplatError::invalid_argument("view direction is parallel to up"));
}

/// Perspective projection whose near and far planes enclose `bounds_eye`
/// (eye space, camera looking down -z) with a small margin. `vertical_fov`
/// is in radians.
pub fn fit_frustum_to_bounding_box(
    bounds_eye: &Bounds3f,
    vertical_fov: Float,
    aspect: Float,
) -> Result<Matrix4x4, SplatError> {
    if !(vertical_fov > 0.0 && vertical_fov < PI) {
        return Err(SplatError::invalid_argument("vertical fov must be in (0, pi)"));
    }
    if !(aspect > 0.0) {
        return Err(SplatError::invalid_argument("aspect ratio must be positive"));
    }
    let (near, far) = frustum_planes(bounds_eye);
    if !(near > 0.0 && far > 0.0) || near >= far {
        let msg = format!("degenerate frustum: near {} far {}", near, far);
        return Err(SplatError::InvalidArgument(msg));
    }
    return Ok(Matrix4x4::perspective(vertical_fov, aspect, near, far));
}

/// `(near, far)` distances for `bounds_eye`, both clamped to
/// `MIN_NEAR_PLANE`.
pub fn frustum_planes(bounds_eye: &Bounds3f) -> (Float, Float) {
    let near = Float::max(-bounds_eye.max.z - FRUSTUM_EPSILON, MIN_NEAR_PLANE);
    let far = Float::max(-bounds_eye.min.z + FRUSTUM_EPSILON, MIN_NEAR_PLANE);
    return (near, far);
}

/// Pixel focal lengths `(fx, fy)` for a vertical field of view over an
/// image `height` pixels tall. Pixels are square.
pub fn focal_lengths(vertical_fov: Float, height: u32) -> (Float, Float) {
    let fy = height as Float / (2.0 * Float::tan(vertical_fov * 0.5));
    return (fy, fy);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> Bounds3f {
        Bounds3f::from(((-1.0, -2.0, -3.0), (3.0, 2.0, 1.0)))
    }

    #[test]
    fn test_001() {
        let b = cube();
        let mv = look_at_bounding_box(&b, &Vector3f::new(0.0, 1.0, 0.0), 1.0).unwrap();
        let c = mv.transform_point(&b.centroid());
        let d = b.diagonal().length();
        assert!(c.x.abs() < 1e-5);
        assert!(c.y.abs() < 1e-5);
        assert!((c.z + d).abs() < 1e-4);
    }

    #[test]
    fn up_parallel_to_z_falls_back_to_y_axis() {
        let b = cube();
        let mv = look_at_bounding_box(&b, &Vector3f::new(0.0, 0.0, 1.0), 2.0).unwrap();
        let eye = mv.inverse().unwrap().transform_point(&Point3f::zero());
        let expected = b.centroid() + Vector3f::new(0.0, 1.0, 0.0) * (2.0 * b.diagonal().length());
        assert!(Vector3f::distance(&eye, &expected) < 1e-4);
    }

    #[test]
    fn invalid_inputs() {
        let b = cube();
        let up = Vector3f::new(0.0, 1.0, 0.0);
        assert!(look_at_bounding_box(&b, &Vector3f::zero(), 1.0).unwrap_err().is_invalid_argument());
        assert!(look_at_bounding_box(&b, &up, 0.0).unwrap_err().is_invalid_argument());
        let p = Point3f::new(1.0, 1.0, 1.0);
        let flat = Bounds3f::new(&p, &p);
        assert!(look_at_bounding_box(&flat, &up, 1.0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn frustum_encloses_eye_space_box() {
        let eye = Bounds3f::from(((-1.0, -1.0, -6.0), (1.0, 1.0, -2.0)));
        let (near, far) = frustum_planes(&eye);
        assert!((near - (2.0 - FRUSTUM_EPSILON)).abs() < 1e-6);
        assert!((far - (6.0 + FRUSTUM_EPSILON)).abs() < 1e-6);
        let proj = fit_frustum_to_bounding_box(&eye, radians(40.0), 16.0 / 9.0).unwrap();
        for z in [-2.0, -4.0, -6.0] {
            let ndc = (proj * Vector4f::new(0.0, 0.0, z, 1.0)).dehomogenize();
            assert!(ndc.z > -1.0 && ndc.z < 1.0);
        }
    }

    #[test]
    fn box_behind_camera_is_degenerate() {
        let eye = Bounds3f::from(((-1.0, -1.0, 2.0), (1.0, 1.0, 5.0)));
        let err = fit_frustum_to_bounding_box(&eye, radians(40.0), 1.0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn bad_fov_or_aspect() {
        let eye = Bounds3f::from(((-1.0, -1.0, -6.0), (1.0, 1.0, -2.0)));
        assert!(fit_frustum_to_bounding_box(&eye, 0.0, 1.0).is_err());
        assert!(fit_frustum_to_bounding_box(&eye, PI, 1.0).is_err());
        assert!(fit_frustum_to_bounding_box(&eye, 1.0, 0.0).is_err());
    }

    #[test]
    fn focal_length_of_90_degrees_is_half_height() {
        let (fx, fy) = focal_lengths(radians(90.0), 720);
        assert!((fy - 360.0).abs() < 1e-3);
        assert_eq!(fx, fy);
    }
}
