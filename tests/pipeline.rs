use tilesplat::backends::*;
use tilesplat::core::backend::*;
use tilesplat::core::base::*;
use tilesplat::core::camera::*;
use tilesplat::core::framebuffer::*;
use tilesplat::core::options::RenderOptions;
use tilesplat::core::rasteriser::*;
use tilesplat::core::render::*;
use tilesplat::core::scene::*;

use image::{Rgb, RgbImage};
use std::sync::Arc;

/// One point per screen quadrant of an 8x8 image, at depths 1 to 4 in
/// front of an identity camera with a 90 degree field of view.
fn quadrant_points() -> Vec<ScenePoint> {
    vec![
        ScenePoint::new(Point3f::new(-0.375, 0.375, -1.0), [255, 0, 0]),
        ScenePoint::new(Point3f::new(0.75, 0.75, -2.0), [0, 255, 0]),
        ScenePoint::new(Point3f::new(-1.125, -1.125, -3.0), [0, 0, 255]),
        ScenePoint::new(Point3f::new(1.5, -1.5, -4.0), [255, 255, 255]),
    ]
}

fn quadrant_projection(points: &[ScenePoint]) -> Matrix4x4 {
    let bounds = primitive_bounds(points).unwrap();
    fit_frustum_to_bounding_box(&bounds, radians(90.0), 1.0).unwrap()
}

#[test]
fn four_points_land_in_four_quadrants() {
    let points = quadrant_points();
    let projection = quadrant_projection(&points);
    let model_view = Matrix4x4::identity();
    let tiling = TiledFramebuffer::new(8, 8, 4, 4).unwrap();
    let viewport = Viewport::from_size(8, 8);

    let clip = project_points(&points, &projection, &model_view);
    assert_eq!(clip.len(), 4);

    let mut image = RgbImage::new(8, 8);
    let drawn = splat_points(&mut image, &clip, &points, &viewport).unwrap();
    assert_eq!(drawn, 4);
    assert_eq!(image.get_pixel(2, 2), &Rgb([255, 0, 0]));
    assert_eq!(image.get_pixel(5, 2), &Rgb([0, 255, 0]));
    assert_eq!(image.get_pixel(2, 5), &Rgb([0, 0, 255]));
    assert_eq!(image.get_pixel(5, 5), &Rgb([255, 255, 255]));
    let lit = image.pixels().filter(|p| p.0 != [0, 0, 0]).count();
    assert_eq!(lit, 4);

    let mut counts = Vec::new();
    build_tile_histogram(&mut counts, &clip, &tiling, &viewport);
    assert_eq!(counts, vec![1, 1, 1, 1]);
    assert_eq!(counts.iter().sum::<u32>(), drawn);
}

#[test]
fn rejected_points_are_neither_drawn_nor_counted() {
    let mut points = quadrant_points();
    // behind the eye, beyond the far plane, off to the side
    points.push(ScenePoint::new(Point3f::new(0.0, 0.0, 1.0), [9, 9, 9]));
    points.push(ScenePoint::new(Point3f::new(0.0, 0.0, -50.0), [9, 9, 9]));
    points.push(ScenePoint::new(Point3f::new(5.0, 0.0, -2.0), [9, 9, 9]));
    let projection = quadrant_projection(&quadrant_points());
    let tiling = TiledFramebuffer::new(8, 8, 4, 4).unwrap();
    let viewport = Viewport::from_size(8, 8);

    let clip = project_points(&points, &projection, &Matrix4x4::identity());
    let mut image = RgbImage::new(8, 8);
    let drawn = splat_points(&mut image, &clip, &points, &viewport).unwrap();
    let mut counts = Vec::new();
    build_tile_histogram(&mut counts, &clip, &tiling, &viewport);
    assert_eq!(drawn, 4);
    assert_eq!(counts.iter().sum::<u32>(), 4);
}

#[test]
fn histogram_sum_matches_drawn_count() {
    let scene = procedural_cloud(3000, 21);
    let points = scene.to_points().unwrap();
    let bounds = primitive_bounds(&points).unwrap();
    let mv = look_at_bounding_box(&bounds, &Vector3f::new(0.0, 1.0, 1.0), 0.6).unwrap();
    let proj = fit_frustum_to_bounding_box(&bounds.transform(&mv), radians(40.0), 1.5).unwrap();
    let tiling = TiledFramebuffer::new(90, 60, 16, 16).unwrap();
    let viewport = Viewport::from_size(90, 60);

    let clip = project_points(&points, &proj, &mv);
    let mut image = RgbImage::new(90, 60);
    let drawn = splat_points(&mut image, &clip, &points, &viewport).unwrap();
    let mut counts = Vec::new();
    build_tile_histogram(&mut counts, &clip, &tiling, &viewport);
    assert!(drawn > 0);
    assert_eq!(counts.iter().sum::<u32>(), drawn);
    let bins = bin_visible_points(&clip, &tiling, &viewport);
    let bin_counts: Vec<u32> = bins.iter().map(|b| b.len() as u32).collect();
    assert_eq!(bin_counts, counts);
}

fn run_backend(backend: &mut dyn SplatBackend, mv: &Matrix4x4, proj: &Matrix4x4) -> (u32, RgbImage, Vec<u32>, Vec<u32>) {
    backend.update_model_view(mv);
    backend.update_projection(proj);
    backend.update_focal_lengths(60.0, 60.0);
    let drawn = backend.execute().unwrap();
    let mut image = RgbImage::new(1, 1);
    let mut counts = Vec::new();
    let mut footprints = Vec::new();
    backend.frame_buffer(&mut image);
    backend.histogram(&mut counts);
    backend.footprint_histogram(&mut footprints);
    (drawn, image, counts, footprints)
}

#[test]
fn tiled_backend_matches_sequential_pass() {
    let scene = procedural_cloud(4000, 2);
    let gaussians = Arc::new(scene.to_gaussians().unwrap());
    let bounds = primitive_bounds(&gaussians).unwrap();
    let mv = look_at_bounding_box(&bounds, &Vector3f::new(0.0, 1.0, 1.0), 1.0).unwrap();
    let proj = fit_frustum_to_bounding_box(&bounds.transform(&mv), radians(40.0), 100.0 / 70.0).unwrap();
    // partial tiles on both the right and bottom edges
    let tiling = TiledFramebuffer::new(100, 70, 16, 16).unwrap();
    let viewport = Viewport::from_size(100, 70);

    let mut cpu = create_backend("cpu", &gaussians, &tiling, &viewport).unwrap();
    let mut tiled = create_backend("tiled", &gaussians, &tiling, &viewport).unwrap();
    let a = run_backend(cpu.as_mut(), &mv, &proj);
    let b = run_backend(tiled.as_mut(), &mv, &proj);
    assert!(a.0 > 0);
    assert_eq!(a.0, b.0);
    assert_eq!(a.1, b.1);
    assert_eq!(a.2, b.2);
    assert_eq!(a.3, b.3);

    // a second frame from another angle starts from a clean image
    let turned = mv * Matrix4x4::rotate_y(75.0);
    let a = run_backend(cpu.as_mut(), &turned, &proj);
    let b = run_backend(tiled.as_mut(), &turned, &proj);
    assert_eq!(a, b);
}

#[test]
fn footprints_of_points_match_point_histogram() {
    let points = Arc::new(procedural_cloud(1000, 8).to_points().unwrap());
    let bounds = primitive_bounds(&points).unwrap();
    let mv = look_at_bounding_box(&bounds, &Vector3f::new(0.0, 1.0, 0.0), 1.0).unwrap();
    let proj = fit_frustum_to_bounding_box(&bounds.transform(&mv), radians(40.0), 1.0).unwrap();
    let tiling = TiledFramebuffer::new(64, 64, 8, 8).unwrap();
    let viewport = Viewport::from_size(64, 64);
    let mut backend = CpuBackend::new(&points, &tiling, &viewport);
    let (_, _, counts, footprints) = run_backend(&mut backend, &mv, &proj);
    assert_eq!(counts, footprints);
}

#[test]
fn gaussian_footprints_cover_at_least_their_centre_tile() {
    let gaussians = Arc::new(procedural_cloud(1000, 8).to_gaussians().unwrap());
    let bounds = primitive_bounds(&gaussians).unwrap();
    let mv = look_at_bounding_box(&bounds, &Vector3f::new(0.0, 1.0, 0.0), 1.0).unwrap();
    let proj = fit_frustum_to_bounding_box(&bounds.transform(&mv), radians(40.0), 1.0).unwrap();
    let tiling = TiledFramebuffer::new(64, 64, 8, 8).unwrap();
    let viewport = Viewport::from_size(64, 64);
    let mut backend = TiledBackend::new(&gaussians, &tiling, &viewport);
    let (_, _, counts, footprints) = run_backend(&mut backend, &mv, &proj);
    for (c, f) in counts.iter().zip(footprints.iter()) {
        assert!(f >= c);
    }
}

#[test]
fn session_devices_agree() {
    let gaussians = procedural_cloud(2500, 13).to_gaussians().unwrap();
    let options = RenderOptions {
        image_width: 120,
        image_height: 80,
        tile_width: 32,
        tile_height: 16,
        ..Default::default()
    };
    let mut session = RenderSession::new(gaussians, &options).unwrap();
    let mut state = session.initial_state();
    state.rotation_x_degrees = 15.0;
    state.rotation_y_degrees = 40.0;
    let cpu = session.render_once(&state).unwrap();
    state.device = String::from("tiled");
    let tiled = session.render_once(&state).unwrap();
    assert_eq!(cpu.image.dimensions(), (120, 80));
    assert_eq!(cpu.histogram.len(), session.tiling().num_tiles as usize);
    assert_eq!(cpu, tiled);
    assert_eq!(cpu.histogram.iter().sum::<u32>(), cpu.drawn);

    state.device = String::from("quantum");
    assert!(session.render_once(&state).unwrap_err().is_invalid_argument());
}
