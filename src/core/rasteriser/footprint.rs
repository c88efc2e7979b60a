use super::visibility::*;
use crate::core::base::*;
use crate::core::framebuffer::{TiledFramebuffer, Viewport};
use crate::core::scene::Primitive;

/// Screen space extent of a projected splat.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Footprint {
    pub centre: Point2f,
    /// 3 sigma radius in pixels, rounded up. Zero for primitives without
    /// covariance.
    pub radius: Float,
}

/// Upper left 2D covariance `(a, b, c)` of a world space covariance seen
/// from `model_view`, with the low-pass filter added to the diagonal.
pub fn project_covariance(
    cov3d: &[[Float; 3]; 3],
    p_world: &Point3f,
    model_view: &Matrix4x4,
    fx: Float,
    fy: Float,
) -> Option<[Float; 3]> {
    let t = model_view.transform_point(p_world);
    let depth = -t.z;
    if !(depth > 0.0) {
        return None;
    }
    let inv_d = 1.0 / depth;
    let j = [
        [fx * inv_d, 0.0, fx * t.x * inv_d * inv_d],
        [0.0, fy * inv_d, fy * t.y * inv_d * inv_d],
    ];
    let w = model_view.linear_part();

    // T = J W
    let mut jw = [[0.0; 3]; 2];
    for r in 0..2 {
        for c in 0..3 {
            jw[r][c] = (0..3).map(|k| j[r][k] * w[k][c]).sum();
        }
    }
    let quad = |a: &[Float; 3], b: &[Float; 3]| -> Float {
        let mut s = 0.0;
        for i in 0..3 {
            for k in 0..3 {
                s += a[i] * cov3d[i][k] * b[k];
            }
        }
        s
    };
    return Some([
        quad(&jw[0], &jw[0]) + FILTER_LOW_PASS,
        quad(&jw[0], &jw[1]),
        quad(&jw[1], &jw[1]) + FILTER_LOW_PASS,
    ]);
}

/// `ceil(3 * sqrt(lambda_max))` of a symmetric 2x2 covariance.
pub fn radius_from_covariance(cov: &[Float; 3]) -> Float {
    let [a, b, c] = *cov;
    let mid = 0.5 * (a + c);
    let det = a * c - b * b;
    let lambda = mid + Float::sqrt(Float::max(mid * mid - det, 0.0));
    return Float::ceil(3.0 * Float::sqrt(Float::max(lambda, 0.0)));
}

/// Footprint of a visible primitive, `None` when `clip` fails the
/// visibility predicate.
pub fn primitive_footprint<P: Primitive>(
    primitive: &P,
    clip: &Vector4f,
    model_view: &Matrix4x4,
    focal_lengths: (Float, Float),
    viewport: &Viewport,
) -> Option<Footprint> {
    let centre = clip_to_pixel(clip, viewport)?;
    let radius = match primitive.covariance() {
        Some(cov3d) => {
            let (fx, fy) = focal_lengths;
            project_covariance(&cov3d, &primitive.position(), model_view, fx, fy)
                .map(|cov| radius_from_covariance(&cov))
                .unwrap_or(0.0)
        }
        None => 0.0,
    };
    return Some(Footprint { centre, radius });
}

/// Half-open range of tile coordinates `[min, max)` touched by a footprint,
/// clipped to the image.
pub fn footprint_tiles(footprint: &Footprint, tiling: &TiledFramebuffer) -> Option<Bounds2i> {
    let w = tiling.image_width as i32;
    let h = tiling.image_height as i32;
    let x0 = i32::max((footprint.centre.x - footprint.radius).floor() as i32, 0);
    let y0 = i32::max((footprint.centre.y - footprint.radius).floor() as i32, 0);
    let x1 = i32::min((footprint.centre.x + footprint.radius).floor() as i32, w - 1);
    let y1 = i32::min((footprint.centre.y + footprint.radius).floor() as i32, h - 1);
    if x0 > x1 || y0 > y1 {
        return None;
    }
    let tw = tiling.tile_width as i32;
    let th = tiling.tile_height as i32;
    return Some(Bounds2i::from(((x0 / tw, y0 / th), (x1 / tw + 1, y1 / th + 1))));
}

/// Per tile, the number of primitive footprints overlapping it. `counts` is
/// reset to one bin per tile.
pub fn build_footprint_histogram<P: Primitive>(
    counts: &mut Vec<u32>,
    primitives: &[P],
    clip: &[Vector4f],
    model_view: &Matrix4x4,
    focal_lengths: (Float, Float),
    tiling: &TiledFramebuffer,
    viewport: &Viewport,
) -> Result<(), SplatError> {
    if clip.len() != primitives.len() {
        return Err(SplatError::invalid_argument(
            "clip space points and primitives differ in length",
        ));
    }
    counts.clear();
    counts.resize(tiling.num_tiles as usize, 0);
    for (prim, c) in primitives.iter().zip(clip.iter()) {
        let range = primitive_footprint(prim, c, model_view, focal_lengths, viewport)
            .and_then(|fp| footprint_tiles(&fp, tiling));
        if let Some(range) = range {
            for ty in range.min.y..range.max.y {
                for tx in range.min.x..range.max.x {
                    counts[(ty as u32 * tiling.num_tiles_x + tx as u32) as usize] += 1;
                }
            }
        }
    }
    return Ok(());
}
