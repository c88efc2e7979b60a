use crate::core::base::*;
use crate::core::render::Frame;

/// Consumer of rendered frames.
pub trait FrameSink: Send {
    fn start(&mut self, title: &str, resolution: &[u32; 2]) -> Result<(), SplatError>;
    fn update(&mut self, frame: &Frame) -> Result<(), SplatError>;
    fn end(&mut self) -> Result<(), SplatError>;
}
