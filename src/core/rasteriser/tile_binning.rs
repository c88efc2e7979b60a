use super::visibility::*;
use crate::core::base::*;
use crate::core::framebuffer::{TiledFramebuffer, Viewport};

/// A visible primitive assigned to a tile.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct BinEntry {
    /// Index into the primitive collection.
    pub index: u32,
    pub pixel: Point2i,
}

/// Per tile, the visible primitives whose pixel falls in that tile, in
/// input order. Uses the same predicate as `visible_tile`, so
/// `bins[t].len()` is the histogram count of tile `t`.
pub fn bin_visible_points(
    clip: &[Vector4f],
    tiling: &TiledFramebuffer,
    viewport: &Viewport,
) -> Vec<Vec<BinEntry>> {
    let mut bins = vec![Vec::new(); tiling.num_tiles as usize];
    for (i, c) in clip.iter().enumerate() {
        let Some(p) = clip_to_pixel(c, viewport) else {
            continue;
        };
        if let Ok(tile) = tiling.pixel_to_tile(p.x, p.y) {
            bins[tile as usize].push(BinEntry {
                index: i as u32,
                pixel: pixel_coords(&p),
            });
        }
    }
    return bins;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let tiling = TiledFramebuffer::new(4, 4, 2, 2).unwrap();
        let vp = Viewport::from_size(4, 4);
        let clip = vec![
            Vector4f::new(0.9, 0.9, 0.0, 1.0),
            Vector4f::new(-0.9, -0.9, 0.0, 1.0),
            Vector4f::new(0.6, 0.6, 0.0, 1.0),
            Vector4f::new(0.0, 0.0, 3.0, 1.0),
        ];
        let bins = bin_visible_points(&clip, &tiling, &vp);
        assert_eq!(bins.len(), 4);
        let tile1: Vec<u32> = bins[1].iter().map(|e| e.index).collect();
        assert_eq!(tile1, vec![0, 2]);
        assert_eq!(bins[2][0].pixel, Point2i::new(0, 3));
        assert!(bins[0].is_empty() && bins[3].is_empty());
    }
}
