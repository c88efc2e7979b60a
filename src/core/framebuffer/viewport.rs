use crate::core::base::*;

/// Maps normalised device coordinates onto a pixel rectangle. NDC `y = +1`
/// is the top row.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Viewport {
    pub x: Float,
    pub y: Float,
    pub width: Float,
    pub height: Float,
}

impl Viewport {
    pub fn new(x: Float, y: Float, width: Float, height: Float) -> Self {
        Viewport {
            x,
            y,
            width,
            height,
        }
    }

    /// Viewport covering a whole `width` x `height` image.
    pub fn from_size(width: u32, height: u32) -> Self {
        Viewport::new(0.0, 0.0, width as Float, height as Float)
    }

    pub fn ndc_to_pixel(&self, ndc_x: Float, ndc_y: Float) -> Point2f {
        let px = self.x + (ndc_x + 1.0) * 0.5 * self.width;
        let py = self.y + (1.0 - ndc_y) * 0.5 * self.height;
        return Point2f::new(px, py);
    }

    /// True when every pixel of the viewport lies inside a `width` x
    /// `height` image.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        return self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.width <= width as Float
            && self.y + self.height <= height as Float;
    }

    pub fn contains(&self, p: &Point2f) -> bool {
        return p.x >= self.x
            && p.y >= self.y
            && p.x < self.x + self.width
            && p.y < self.y + self.height;
    }
}
