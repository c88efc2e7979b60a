use crate::core::base::*;

use image::RgbImage;

/// Camera parameters shared by every backend for one frame.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct CameraUniforms {
    pub model_view: Matrix4x4,
    pub projection: Matrix4x4,
    pub focal_lengths: (Float, Float),
}

impl Default for CameraUniforms {
    fn default() -> Self {
        CameraUniforms {
            model_view: Matrix4x4::identity(),
            projection: Matrix4x4::identity(),
            focal_lengths: (1.0, 1.0),
        }
    }
}

/// A device that renders the primitive collection it was created with.
///
/// Camera state is pushed through the `update_*` calls, `execute` renders a
/// frame and the results are read back with `frame_buffer` and the
/// histogram getters. Every implementation applies the same visibility
/// predicate and tile partition as the sequential CPU rasteriser.
pub trait SplatBackend: Send {
    fn name(&self) -> &str;
    fn update_model_view(&mut self, model_view: &Matrix4x4);
    fn update_projection(&mut self, projection: &Matrix4x4);
    /// Pixel focal lengths used for splat footprints.
    fn update_focal_lengths(&mut self, fx: Float, fy: Float);
    /// Renders one frame, returning the number of primitives drawn.
    fn execute(&mut self) -> Result<u32, SplatError>;
    /// Copies the last rendered image into `image`.
    fn frame_buffer(&self, image: &mut RgbImage);
    /// Per tile visible primitive counts of the last frame.
    fn histogram(&self, counts: &mut Vec<u32>);
    /// Per tile counts of overlapping splat footprints of the last frame.
    fn footprint_histogram(&self, counts: &mut Vec<u32>);
}
