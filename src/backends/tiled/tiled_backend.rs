use crate::core::backend::*;
use crate::core::base::*;
use crate::core::framebuffer::{TiledFramebuffer, Viewport};
use crate::core::rasteriser::*;
use crate::core::scene::Primitive;

use image::{Rgb, RgbImage};
use log::*;
use rayon::iter::IndexedParallelIterator;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;
use std::sync::Arc;

/// Pixels of one tile rendered by one worker.
struct TileImage {
    bounds: Bounds2i,
    pixels: Vec<[u8; 3]>,
}

/// Renders each tile independently on the rayon pool.
///
/// Visible primitives are binned per tile in input order; every worker
/// writes only its own tile, later primitives overwriting earlier ones, and
/// the tiles are copied into the frame afterwards. The result is identical
/// to the sequential pass.
pub struct TiledBackend<P: Primitive> {
    primitives: Arc<Vec<P>>,
    tiling: TiledFramebuffer,
    viewport: Viewport,
    uniforms: CameraUniforms,
    image: RgbImage,
    histogram: Vec<u32>,
    footprints: Vec<u32>,
}

impl<P: Primitive> TiledBackend<P> {
    pub fn new(primitives: &Arc<Vec<P>>, tiling: &TiledFramebuffer, viewport: &Viewport) -> Self {
        debug!(
            "TiledBackend: {} primitives over {} tiles",
            primitives.len(),
            tiling.num_tiles
        );
        TiledBackend {
            primitives: Arc::clone(primitives),
            tiling: *tiling,
            viewport: *viewport,
            uniforms: CameraUniforms::default(),
            image: RgbImage::new(tiling.image_width, tiling.image_height),
            histogram: vec![0; tiling.num_tiles as usize],
            footprints: vec![0; tiling.num_tiles as usize],
        }
    }

    fn render_tile(&self, tile_id: usize, bin: &[BinEntry]) -> Result<TileImage, SplatError> {
        let bounds = self.tiling.tile_bounds(tile_id as u32)?;
        let width = bounds.diagonal().x;
        let mut pixels = vec![[0u8; 3]; bounds.area() as usize];
        for entry in bin {
            let x = entry.pixel.x - bounds.min.x;
            let y = entry.pixel.y - bounds.min.y;
            pixels[(y * width + x) as usize] = self.primitives[entry.index as usize].rgb();
        }
        return Ok(TileImage { bounds, pixels });
    }

    fn merge_tile(&mut self, tile: &TileImage) {
        let width = tile.bounds.diagonal().x;
        for y in tile.bounds.min.y..tile.bounds.max.y {
            for x in tile.bounds.min.x..tile.bounds.max.x {
                let src = ((y - tile.bounds.min.y) * width + (x - tile.bounds.min.x)) as usize;
                self.image.put_pixel(x as u32, y as u32, Rgb(tile.pixels[src]));
            }
        }
    }
}

impl<P: Primitive> SplatBackend for TiledBackend<P> {
    fn name(&self) -> &str {
        "tiled"
    }

    fn update_model_view(&mut self, model_view: &Matrix4x4) {
        self.uniforms.model_view = *model_view;
    }

    fn update_projection(&mut self, projection: &Matrix4x4) {
        self.uniforms.projection = *projection;
    }

    fn update_focal_lengths(&mut self, fx: Float, fy: Float) {
        self.uniforms.focal_lengths = (fx, fy);
    }

    fn execute(&mut self) -> Result<u32, SplatError> {
        let u = self.uniforms;
        let mvp = u.projection * u.model_view;
        let clip: Vec<Vector4f> = self
            .primitives
            .par_iter()
            .map(|p| mvp.transform(&Vector4f::from_point(&p.position(), 1.0)))
            .collect();
        let bins = bin_visible_points(&clip, &self.tiling, &self.viewport);

        let tiles = bins
            .par_iter()
            .enumerate()
            .map(|(tile_id, bin)| self.render_tile(tile_id, bin))
            .collect::<Result<Vec<TileImage>, SplatError>>()?;
        for tile in tiles.iter() {
            self.merge_tile(tile);
        }

        self.histogram.clear();
        self.histogram.extend(bins.iter().map(|b| b.len() as u32));
        build_footprint_histogram(
            &mut self.footprints,
            self.primitives.as_slice(),
            &clip,
            &u.model_view,
            u.focal_lengths,
            &self.tiling,
            &self.viewport,
        )?;
        return Ok(self.histogram.iter().sum());
    }

    fn frame_buffer(&self, image: &mut RgbImage) {
        image.clone_from(&self.image);
    }

    fn histogram(&self, counts: &mut Vec<u32>) {
        counts.clone_from(&self.histogram);
    }

    fn footprint_histogram(&self, counts: &mut Vec<u32>) {
        counts.clone_from(&self.footprints);
    }
}
