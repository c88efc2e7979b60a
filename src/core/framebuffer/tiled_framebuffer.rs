use crate::core::base::*;

/// One step in tile-grid space. `Up` moves towards row 0.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Partition of an image into fixed size tiles with row-major ids.
///
/// Tiles on the right and bottom edges are clipped to the image when the
/// image size is not a multiple of the tile size, so every pixel belongs to
/// exactly one tile.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct TiledFramebuffer {
    pub image_width: u32,
    pub image_height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub num_tiles_x: u32,
    pub num_tiles_y: u32,
    pub num_tiles: u32,
}

impl TiledFramebuffer {
    pub fn new(
        image_width: u32,
        image_height: u32,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<Self, SplatError> {
        if image_width == 0 || image_height == 0 {
            return Err(SplatError::invalid_argument("image size must be non-zero"));
        }
        if tile_width == 0 || tile_height == 0 {
            return Err(SplatError::invalid_argument("tile size must be non-zero"));
        }
        // tile and pixel bounds are Bounds2i
        if image_width > i32::MAX as u32 || image_height > i32::MAX as u32 {
            let msg = format!(
                "image size {}x{} exceeds {}",
                image_width,
                image_height,
                i32::MAX
            );
            return Err(SplatError::InvalidArgument(msg));
        }
        let num_tiles_x = image_width.div_ceil(tile_width);
        let num_tiles_y = image_height.div_ceil(tile_height);
        let num_tiles = match num_tiles_x.checked_mul(num_tiles_y) {
            Some(n) => n,
            None => {
                let msg = format!(
                    "{} x {} tiles do not fit a u32 tile id",
                    num_tiles_x, num_tiles_y
                );
                return Err(SplatError::InvalidArgument(msg));
            }
        };
        Ok(TiledFramebuffer {
            image_width,
            image_height,
            tile_width,
            tile_height,
            num_tiles_x,
            num_tiles_y,
            num_tiles,
        })
    }

    pub fn image_bounds(&self) -> Bounds2i {
        return Bounds2i::from((
            (0, 0),
            (self.image_width as i32, self.image_height as i32),
        ));
    }

    /// Tile id of the pixel containing `(x, y)`.
    pub fn pixel_to_tile(&self, x: Float, y: Float) -> Result<u32, SplatError> {
        let inside = x >= 0.0
            && y >= 0.0
            && x < self.image_width as Float
            && y < self.image_height as Float;
        if !inside {
            let msg = format!(
                "pixel ({}, {}) outside {}x{} image",
                x, y, self.image_width, self.image_height
            );
            return Err(SplatError::OutOfRange(msg));
        }
        let tile_x = (x.floor() as u32) / self.tile_width;
        let tile_y = (y.floor() as u32) / self.tile_height;
        return Ok(tile_y * self.num_tiles_x + tile_x);
    }

    /// `(tile_x, tile_y)` grid coordinates of `tile_id`.
    pub fn tile_coords(&self, tile_id: u32) -> Result<(u32, u32), SplatError> {
        self.check_tile(tile_id)?;
        return Ok((tile_id % self.num_tiles_x, tile_id / self.num_tiles_x));
    }

    pub fn tile_bounds(&self, tile_id: u32) -> Result<Bounds2i, SplatError> {
        let (tx, ty) = self.tile_coords(tile_id)?;
        // tx * tile_width < image_width <= i32::MAX
        let x0 = tx * self.tile_width;
        let y0 = ty * self.tile_height;
        let x1 = u32::min(x0.saturating_add(self.tile_width), self.image_width);
        let y1 = u32::min(y0.saturating_add(self.tile_height), self.image_height);
        return Ok(Bounds2i::from((
            (x0 as i32, y0 as i32),
            (x1 as i32, y1 as i32),
        )));
    }

    pub fn tile_centroid(&self, tile_id: u32) -> Result<Point2i, SplatError> {
        let bounds = self.tile_bounds(tile_id)?;
        return Ok(bounds.centroid());
    }

    /// Neighbouring tile one step in `direction`. Stepping off the grid is
    /// an error rather than a wrap or a clamp.
    pub fn nearby_tile(&self, tile_id: u32, direction: Direction) -> Result<u32, SplatError> {
        let (tx, ty) = self.tile_coords(tile_id)?;
        let (nx, ny) = match direction {
            Direction::Up => (Some(tx), ty.checked_sub(1)),
            Direction::Down => (Some(tx), Some(ty + 1)),
            Direction::Left => (tx.checked_sub(1), Some(ty)),
            Direction::Right => (Some(tx + 1), Some(ty)),
        };
        match (nx, ny) {
            (Some(nx), Some(ny)) if nx < self.num_tiles_x && ny < self.num_tiles_y => {
                return Ok(ny * self.num_tiles_x + nx);
            }
            _ => {
                let msg = format!("no tile {:?} of tile {}", direction, tile_id);
                return Err(SplatError::OutOfRange(msg));
            }
        }
    }

    fn check_tile(&self, tile_id: u32) -> Result<(), SplatError> {
        if tile_id >= self.num_tiles {
            let msg = format!("tile id {} >= {} tiles", tile_id, self.num_tiles);
            return Err(SplatError::OutOfRange(msg));
        }
        return Ok(());
    }
}
