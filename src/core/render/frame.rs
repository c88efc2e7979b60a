use image::RgbImage;

/// One rendered frame as handed to a consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: u64,
    pub image: RgbImage,
    pub histogram: Vec<u32>,
    pub drawn: u32,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Frame {
            index: 0,
            image: RgbImage::new(width, height),
            histogram: Vec::new(),
            drawn: 0,
        }
    }
}
