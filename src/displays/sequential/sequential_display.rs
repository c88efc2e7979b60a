use crate::core::base::*;
use crate::core::display::*;
use crate::core::imageio::*;
use crate::core::render::Frame;

use log::*;
use std::path::{Path, PathBuf};

/// Writes every frame it receives as a numbered PNG in `output_dir`.
pub struct SequentialDisplay {
    count: u64,
    resolution: [u32; 2],
    output_dir: PathBuf,
}

impl SequentialDisplay {
    pub fn new(output_dir: &Path) -> Self {
        SequentialDisplay {
            count: 0,
            resolution: [0, 0],
            output_dir: output_dir.to_path_buf(),
        }
    }

    pub fn frame_path(&self, count: u64) -> PathBuf {
        return self.output_dir.join(format!("{:08}.png", count));
    }

    pub fn count(&self) -> u64 {
        return self.count;
    }
}

impl FrameSink for SequentialDisplay {
    fn start(&mut self, title: &str, resolution: &[u32; 2]) -> Result<(), SplatError> {
        std::fs::create_dir_all(&self.output_dir)?;
        self.resolution = *resolution;
        self.count = 0;
        info!(
            "{}: writing {}x{} frames to {}",
            title,
            resolution[0],
            resolution[1],
            self.output_dir.display()
        );
        Ok(())
    }

    fn update(&mut self, frame: &Frame) -> Result<(), SplatError> {
        if frame.image.dimensions() != (self.resolution[0], self.resolution[1]) {
            let msg = format!(
                "frame is {:?}, display expects {:?}",
                frame.image.dimensions(),
                self.resolution
            );
            return Err(SplatError::InvalidArgument(msg));
        }
        let path = self.frame_path(self.count);
        write_image(&path, &frame.image)?;
        self.count += 1;
        Ok(())
    }

    fn end(&mut self) -> Result<(), SplatError> {
        debug!("SequentialDisplay::end(): {} frames", self.count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let dir = tempfile::tempdir().unwrap();
        let mut display = SequentialDisplay::new(&dir.path().join("frames"));
        display.start("test", &[4, 2]).unwrap();
        let frame = Frame::new(4, 2);
        display.update(&frame).unwrap();
        display.update(&frame).unwrap();
        display.end().unwrap();
        assert_eq!(display.count(), 2);
        assert!(display.frame_path(0).exists());
        assert!(display.frame_path(1).exists());
        assert!(!display.frame_path(2).exists());
    }

    #[test]
    fn wrong_resolution_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut display = SequentialDisplay::new(dir.path());
        display.start("test", &[4, 4]).unwrap();
        let err = display.update(&Frame::new(4, 2)).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
