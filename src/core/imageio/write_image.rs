use crate::core::base::*;

use image::RgbImage;
use log::*;
use std::path::Path;

/// Saves `image`, the format following the file extension. Missing parent
/// directories are created.
pub fn write_image(path: &Path, image: &RgbImage) -> Result<(), SplatError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    debug!("writing {}x{} image to {}", image.width(), image.height(), path.display());
    image.save(path)?;
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_001() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.png");
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(2, 1, Rgb([10, 20, 30]));
        write_image(&path, &img).unwrap();
        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(back, img);
    }

    #[test]
    fn unknown_extension_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::new(1, 1);
        let err = write_image(&dir.path().join("out.unknown"), &img).unwrap_err();
        assert!(matches!(err, SplatError::Image(_)));
    }
}
