use super::visibility::*;
use crate::core::base::*;
use crate::core::framebuffer::{TiledFramebuffer, Viewport};
use crate::core::scene::Primitive;

use image::{Rgb, RgbImage};

/// `projection * model_view * (p, 1)` for every primitive, in input order.
pub fn project_points<P: Primitive>(
    points: &[P],
    projection: &Matrix4x4,
    model_view: &Matrix4x4,
) -> Vec<Vector4f> {
    let mut clip = Vec::with_capacity(points.len());
    project_points_into(points, projection, model_view, &mut clip);
    return clip;
}

/// As `project_points`, reusing the allocation of `clip`.
pub fn project_points_into<P: Primitive>(
    points: &[P],
    projection: &Matrix4x4,
    model_view: &Matrix4x4,
    clip: &mut Vec<Vector4f>,
) {
    let mvp = *projection * *model_view;
    clip.clear();
    clip.extend(
        points
            .iter()
            .map(|p| mvp.transform(&Vector4f::from_point(&p.position(), 1.0))),
    );
}

/// Paints every visible point into `framebuffer` with its primitive colour
/// and returns how many were drawn. Later points overwrite earlier ones on
/// the same pixel. `framebuffer` must cover `viewport`, so every visible
/// point is drawn.
pub fn splat_points<P: Primitive>(
    framebuffer: &mut RgbImage,
    clip: &[Vector4f],
    points: &[P],
    viewport: &Viewport,
) -> Result<u32, SplatError> {
    if clip.len() != points.len() {
        let msg = format!(
            "{} clip space points for {} primitives",
            clip.len(),
            points.len()
        );
        return Err(SplatError::InvalidArgument(msg));
    }
    let (width, height) = framebuffer.dimensions();
    if !viewport.fits(width, height) {
        let msg = format!(
            "{}x{} framebuffer does not cover viewport {:?}",
            width, height, viewport
        );
        return Err(SplatError::InvalidArgument(msg));
    }
    let mut count = 0;
    for (c, point) in clip.iter().zip(points.iter()) {
        if let Some(p) = clip_to_pixel(c, viewport) {
            let pixel = pixel_coords(&p);
            framebuffer.put_pixel(pixel.x as u32, pixel.y as u32, Rgb(point.rgb()));
            count += 1;
        }
    }
    return Ok(count);
}

/// Resets `counts` to one zero per tile, then counts the visible points
/// falling in each tile.
pub fn build_tile_histogram(
    counts: &mut Vec<u32>,
    clip: &[Vector4f],
    tiling: &TiledFramebuffer,
    viewport: &Viewport,
) {
    counts.clear();
    counts.resize(tiling.num_tiles as usize, 0);
    for c in clip.iter() {
        if let Some(tile) = visible_tile(c, tiling, viewport) {
            counts[tile as usize] += 1;
        }
    }
}

/// Adds the per-tile counts of `clip` on top of `counts`.
pub fn accumulate_tile_histogram(
    counts: &mut [u32],
    clip: &[Vector4f],
    tiling: &TiledFramebuffer,
    viewport: &Viewport,
) -> Result<(), SplatError> {
    if counts.len() != tiling.num_tiles as usize {
        let msg = format!(
            "histogram has {} bins for {} tiles",
            counts.len(),
            tiling.num_tiles
        );
        return Err(SplatError::InvalidArgument(msg));
    }
    for c in clip.iter() {
        if let Some(tile) = visible_tile(c, tiling, viewport) {
            counts[tile as usize] += 1;
        }
    }
    return Ok(());
}

/// Tile of a visible clip space point. Visible pixels outside the tiled
/// image are not counted.
#[inline]
pub fn visible_tile(clip: &Vector4f, tiling: &TiledFramebuffer, viewport: &Viewport) -> Option<u32> {
    let p = clip_to_pixel(clip, viewport)?;
    return tiling.pixel_to_tile(p.x, p.y).ok();
}
