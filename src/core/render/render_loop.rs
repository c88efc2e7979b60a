use super::control::ControlChannel;
use super::double_buffer::DoubleBuffer;
use super::frame::Frame;
use super::observer::{FrameStats, RenderObserver};
use crate::backends::create_backend;
use crate::core::backend::SplatBackend;
use crate::core::base::*;
use crate::core::camera::*;
use crate::core::framebuffer::{TiledFramebuffer, Viewport};
use crate::core::options::RenderOptions;
use crate::core::scene::{primitive_bounds, Primitive};

use log::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Everything fixed for the lifetime of a render: the primitives, their
/// bounds, the framing view and the tile partition. Backends are created on
/// first use of their device name.
pub struct RenderSession<P: Primitive> {
    primitives: Arc<Vec<P>>,
    options: RenderOptions,
    tiling: TiledFramebuffer,
    viewport: Viewport,
    bounds: Bounds3f,
    bounds_eye: Bounds3f,
    model_view: Matrix4x4,
    backends: HashMap<String, Box<dyn SplatBackend>>,
}

impl<P: Primitive + 'static> RenderSession<P> {
    pub fn new(primitives: Vec<P>, options: &RenderOptions) -> Result<Self, SplatError> {
        let tiling = TiledFramebuffer::new(
            options.image_width,
            options.image_height,
            options.tile_width,
            options.tile_height,
        )?;
        let viewport = Viewport::from_size(options.image_width, options.image_height);
        let bounds = primitive_bounds(&primitives)?;
        let model_view =
            look_at_bounding_box(&bounds, &options.up_vector(), options.distance_factor)?;
        let bounds_eye = bounds.transform(&model_view);
        info!("Point bounds (eye space): {}", bounds_eye);
        info!(
            "Number of tiles in framebuffer: {} ({} x {})",
            tiling.num_tiles, tiling.num_tiles_x, tiling.num_tiles_y
        );
        Ok(RenderSession {
            primitives: Arc::new(primitives),
            options: options.clone(),
            tiling,
            viewport,
            bounds,
            bounds_eye,
            model_view,
            backends: HashMap::new(),
        })
    }

    pub fn bounds(&self) -> &Bounds3f {
        return &self.bounds;
    }

    pub fn model_view(&self) -> &Matrix4x4 {
        return &self.model_view;
    }

    pub fn tiling(&self) -> &TiledFramebuffer {
        return &self.tiling;
    }

    /// Camera state the loop starts from.
    pub fn initial_state(&self) -> CameraState {
        CameraState {
            fov: radians(self.options.fov_degrees),
            device: self.options.device.clone(),
            ..Default::default()
        }
    }

    pub fn projection_for(&self, state: &CameraState) -> Result<Matrix4x4, SplatError> {
        return fit_frustum_to_bounding_box(&self.bounds_eye, state.fov, self.options.aspect());
    }

    fn backend(&mut self, device: &str) -> Result<&mut Box<dyn SplatBackend>, SplatError> {
        if !self.backends.contains_key(device) {
            let backend = create_backend(device, &self.primitives, &self.tiling, &self.viewport)?;
            self.backends.insert(device.to_string(), backend);
        }
        return self
            .backends
            .get_mut(device)
            .ok_or_else(|| SplatError::invalid_argument("backend was not created"));
    }

    /// Renders one frame with `view` and `projection` on `state.device`
    /// into `frame`.
    pub fn render_frame(
        &mut self,
        state: &CameraState,
        view: &Matrix4x4,
        projection: &Matrix4x4,
        index: u64,
        frame: &mut Frame,
    ) -> Result<FrameStats, SplatError> {
        let start = Instant::now();
        let (fx, fy) = focal_lengths(state.fov, self.options.image_height);
        let backend = self.backend(&state.device)?;
        backend.update_model_view(view);
        backend.update_projection(projection);
        backend.update_focal_lengths(fx, fy);
        let drawn = backend.execute()?;
        backend.frame_buffer(&mut frame.image);
        backend.histogram(&mut frame.histogram);
        frame.index = index;
        frame.drawn = drawn;
        Ok(FrameStats {
            index,
            device: state.device.clone(),
            primitives: self.primitives.len(),
            drawn,
            elapsed: start.elapsed(),
        })
    }

    /// Renders a single frame for `state`.
    pub fn render_once(&mut self, state: &CameraState) -> Result<Frame, SplatError> {
        let projection = self.projection_for(state)?;
        let view = state.dynamic_view(&self.model_view);
        let mut frame = Frame::new(self.options.image_width, self.options.image_height);
        self.render_frame(state, &view, &projection, 0, &mut frame)?;
        return Ok(frame);
    }

    /// Runs the render loop, publishing every frame to `buffer`.
    ///
    /// Without a control channel one frame is rendered. Otherwise the state
    /// is consumed after each frame and the loop ends when it asks to stop
    /// or the consumer closes the buffer. `buffer` is closed on return.
    pub fn run(
        &mut self,
        control: Option<&mut dyn ControlChannel>,
        buffer: &DoubleBuffer<Frame>,
        observer: &mut dyn RenderObserver,
    ) -> Result<u64, SplatError> {
        observer.on_start(self.primitives.len(), &self.bounds);
        let result = self.run_frames(control, buffer, observer);
        buffer.close();
        if let Ok(frames) = result.as_ref() {
            observer.on_finish(*frames);
        }
        return result;
    }

    fn run_frames(
        &mut self,
        mut control: Option<&mut dyn ControlChannel>,
        buffer: &DoubleBuffer<Frame>,
        observer: &mut dyn RenderObserver,
    ) -> Result<u64, SplatError> {
        let mut state = self.initial_state();
        let mut projection = self.projection_for(&state)?;
        let mut view = self.model_view;
        let mut front = Frame::new(self.options.image_width, self.options.image_height);
        let mut frames = 0;
        loop {
            let stats = self.render_frame(&state, &view, &projection, frames, &mut front)?;
            observer.on_frame(&stats);
            frames += 1;

            front = match buffer.publish(front) {
                Some(back) => back,
                None => {
                    warn!("Frame consumer closed the buffer, stopping");
                    break;
                }
            };

            let Some(control) = control.as_deref_mut() else {
                break;
            };
            state = control.consume_state();
            if state.stop {
                break;
            }
            projection = self.projection_for(&state)?;
            view = state.dynamic_view(&self.model_view);
        }
        return Ok(frames);
    }
}
