use tilesplat::core::base::*;
use tilesplat::core::camera::*;
use tilesplat::core::framebuffer::*;
use tilesplat::core::rasteriser::*;
use tilesplat::core::scene::*;

fn framed(up: Vector3f) -> (Bounds3f, Matrix4x4, Matrix4x4) {
    let mut scene = procedural_cloud(2000, 5);
    for p in scene.positions.iter_mut() {
        *p = Point3f::new(p.x * 1.5 + 1.0, p.y - 0.5, p.z * 0.5 + 2.0);
    }
    let bounds = scene.bounds().unwrap();
    let mv = look_at_bounding_box(&bounds, &up, 1.0).unwrap();
    let eye = bounds.transform(&mv);
    let proj = fit_frustum_to_bounding_box(&eye, radians(40.0), 16.0 / 9.0).unwrap();
    (bounds, mv, proj)
}

#[test]
fn look_at_target_projects_to_clip_origin() {
    for up in [
        Vector3f::new(0.0, 1.0, 0.0),
        Vector3f::new(0.0, 1.0, 1.0),
        Vector3f::new(0.0, 0.0, 1.0),
    ] {
        let (bounds, mv, proj) = framed(up);
        let clip = proj * (mv * Vector4f::from_point(&bounds.centroid(), 1.0));
        assert!(clip.x.abs() < 1e-5, "{:?}", clip);
        assert!(clip.y.abs() < 1e-5, "{:?}", clip);
        assert!(clip.w > 0.0);
    }
}

#[test]
fn fitted_frustum_contains_every_corner_depth() {
    let (bounds, mv, proj) = framed(Vector3f::new(0.0, 1.0, 1.0));
    for i in 0..8 {
        let clip = proj * (mv * Vector4f::from_point(&bounds.corner(i), 1.0));
        let ndc = clip.dehomogenize();
        assert!(clip.w > 0.0);
        assert!(ndc.z > -1.0 && ndc.z < 1.0, "corner {} depth {}", i, ndc.z);
    }
}

#[test]
fn plane_classification_is_stable() {
    let eye = Bounds3f::from(((-1.0, -1.0, -5.0), (1.0, 1.0, -1.0)));
    let (near, far) = frustum_planes(&eye);
    let proj = fit_frustum_to_bounding_box(&eye, radians(90.0), 1.0).unwrap();
    let vp = Viewport::from_size(16, 16);
    for z in [-near, -far] {
        let clip = proj * Vector4f::new(0.1, 0.1, z, 1.0);
        let first = clip_to_pixel(&clip, &vp);
        for _ in 0..10 {
            assert_eq!(clip_to_pixel(&clip, &vp), first);
        }
    }
}

#[test]
fn degenerate_inputs_are_rejected() {
    let up = Vector3f::new(0.0, 1.0, 0.0);
    let p = Point3f::new(1.0, 2.0, 3.0);
    let point_box = Bounds3f::new(&p, &p);
    assert!(look_at_bounding_box(&point_box, &up, 1.0).unwrap_err().is_invalid_argument());

    let behind = Bounds3f::from(((-1.0, -1.0, 1.0), (1.0, 1.0, 3.0)));
    assert!(fit_frustum_to_bounding_box(&behind, 1.0, 1.0).unwrap_err().is_invalid_argument());
}
