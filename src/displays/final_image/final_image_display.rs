use crate::core::base::*;
use crate::core::display::*;
use crate::core::imageio::*;
use crate::core::render::Frame;

use image::RgbImage;
use log::*;
use std::path::{Path, PathBuf};

/// Keeps the latest frame and writes it to `path` when the run ends.
pub struct FinalImageDisplay {
    path: PathBuf,
    last: Option<RgbImage>,
}

impl FinalImageDisplay {
    pub fn new(path: &Path) -> Self {
        FinalImageDisplay {
            path: path.to_path_buf(),
            last: None,
        }
    }
}

impl FrameSink for FinalImageDisplay {
    fn start(&mut self, _title: &str, _resolution: &[u32; 2]) -> Result<(), SplatError> {
        self.last = None;
        Ok(())
    }

    fn update(&mut self, frame: &Frame) -> Result<(), SplatError> {
        match self.last.as_mut() {
            Some(image) => image.clone_from(&frame.image),
            None => self.last = Some(frame.image.clone()),
        }
        Ok(())
    }

    fn end(&mut self) -> Result<(), SplatError> {
        match self.last.as_ref() {
            Some(image) => {
                write_image(&self.path, image)?;
                info!("Wrote {}", self.path.display());
            }
            None => warn!("No frame rendered, {} not written", self.path.display()),
        }
        Ok(())
    }
}
