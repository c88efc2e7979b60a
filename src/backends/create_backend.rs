use super::cpu::CpuBackend;
use super::tiled::TiledBackend;
use crate::core::backend::SplatBackend;
use crate::core::base::*;
use crate::core::framebuffer::{TiledFramebuffer, Viewport};
use crate::core::scene::Primitive;

use log::*;
use std::sync::Arc;

pub const DEVICE_NAMES: &[&str] = &["cpu", "tiled"];

/// Backend for `device`: `"cpu"` for the sequential rasteriser, `"tiled"`
/// for the rayon tile workers.
pub fn create_backend<P: Primitive + 'static>(
    device: &str,
    primitives: &Arc<Vec<P>>,
    tiling: &TiledFramebuffer,
    viewport: &Viewport,
) -> Result<Box<dyn SplatBackend>, SplatError> {
    info!("Creating {} backend", device);
    match device {
        "cpu" => Ok(Box::new(CpuBackend::new(primitives, tiling, viewport))),
        "tiled" => Ok(Box::new(TiledBackend::new(primitives, tiling, viewport))),
        _ => {
            let msg = format!("unknown device \"{}\", expected one of {:?}", device, DEVICE_NAMES);
            Err(SplatError::InvalidArgument(msg))
        }
    }
}
