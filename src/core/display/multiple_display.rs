use super::display::FrameSink;
use crate::core::base::*;
use crate::core::render::Frame;

/// Forwards every call to each of its sinks in order, stopping at the
/// first error.
#[derive(Default)]
pub struct MultipleSink {
    pub sinks: Vec<Box<dyn FrameSink>>,
}

impl MultipleSink {
    pub fn new() -> Self {
        MultipleSink { sinks: Vec::new() }
    }

    pub fn add_sink(&mut self, sink: Box<dyn FrameSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        return self.sinks.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.sinks.is_empty();
    }
}

impl FrameSink for MultipleSink {
    fn start(&mut self, title: &str, resolution: &[u32; 2]) -> Result<(), SplatError> {
        for sink in self.sinks.iter_mut() {
            sink.start(title, resolution)?;
        }
        return Ok(());
    }

    fn update(&mut self, frame: &Frame) -> Result<(), SplatError> {
        for sink in self.sinks.iter_mut() {
            sink.update(frame)?;
        }
        return Ok(());
    }

    fn end(&mut self) -> Result<(), SplatError> {
        for sink in self.sinks.iter_mut() {
            sink.end()?;
        }
        return Ok(());
    }
}
