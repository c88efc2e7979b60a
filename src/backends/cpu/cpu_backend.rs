use crate::core::backend::*;
use crate::core::base::*;
use crate::core::framebuffer::{TiledFramebuffer, Viewport};
use crate::core::rasteriser::*;
use crate::core::scene::Primitive;

use image::{Rgb, RgbImage};
use std::sync::Arc;

/// Single pass sequential renderer built on the CPU rasteriser. The
/// reference the parallel backends are checked against.
pub struct CpuBackend<P: Primitive> {
    primitives: Arc<Vec<P>>,
    tiling: TiledFramebuffer,
    viewport: Viewport,
    uniforms: CameraUniforms,
    clip: Vec<Vector4f>,
    image: RgbImage,
    histogram: Vec<u32>,
    footprints: Vec<u32>,
}

impl<P: Primitive> CpuBackend<P> {
    pub fn new(primitives: &Arc<Vec<P>>, tiling: &TiledFramebuffer, viewport: &Viewport) -> Self {
        CpuBackend {
            primitives: Arc::clone(primitives),
            tiling: *tiling,
            viewport: *viewport,
            uniforms: CameraUniforms::default(),
            clip: Vec::with_capacity(primitives.len()),
            image: RgbImage::new(tiling.image_width, tiling.image_height),
            histogram: vec![0; tiling.num_tiles as usize],
            footprints: vec![0; tiling.num_tiles as usize],
        }
    }
}

impl<P: Primitive> SplatBackend for CpuBackend<P> {
    fn name(&self) -> &str {
        "cpu"
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
        let u = &self.uniforms;
        let prims = self.primitives.as_slice();
        for p in self.image.pixels_mut() {
            *p = Rgb([0, 0, 0]);
        }
        project_points_into(prims, &u.projection, &u.model_view, &mut self.clip);
        let count = splat_points(&mut self.image, &self.clip, prims, &self.viewport)?;
        build_tile_histogram(&mut self.histogram, &self.clip, &self.tiling, &self.viewport);
        build_footprint_histogram(
            &mut self.footprints,
            prims,
            &self.clip,
            &u.model_view,
            u.focal_lengths,
            &self.tiling,
            &self.viewport,
        )?;
        return Ok(count);
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
