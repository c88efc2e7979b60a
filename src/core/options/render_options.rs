use crate::core::base::*;

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Settings of one render session. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub image_width: u32,
    pub image_height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    /// Vertical field of view in degrees.
    pub fov_degrees: Float,
    pub up: [Float; 3],
    pub distance_factor: Float,
    pub device: String,
    pub outfile: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            image_width: DEFAULT_IMAGE_WIDTH,
            image_height: DEFAULT_IMAGE_HEIGHT,
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            fov_degrees: DEFAULT_FOV_DEGREES,
            up: [0.0, 1.0, 1.0],
            distance_factor: 1.0,
            device: String::from("cpu"),
            outfile: String::from("test.png"),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        RenderOptions::default()
    }

    pub fn from_json_file(path: &Path) -> Result<Self, SplatError> {
        let reader = BufReader::new(File::open(path)?);
        let options: RenderOptions = serde_json::from_reader(reader)?;
        return Ok(options);
    }

    pub fn from_json_str(s: &str) -> Result<Self, SplatError> {
        return Ok(serde_json::from_str(s)?);
    }

    pub fn aspect(&self) -> Float {
        return self.image_width as Float / self.image_height as Float;
    }

    pub fn up_vector(&self) -> Vector3f {
        return Vector3f::from(self.up);
    }
}
