use crate::core::base::*;

use serde::{Deserialize, Serialize};

/// Camera parameters supplied once per frame by a control channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraState {
    /// Vertical field of view in radians.
    pub fov: Float,
    pub rotation_x_degrees: Float,
    pub rotation_y_degrees: Float,
    pub translation: [Float; 3],
    /// Render device, `"cpu"` or a backend name understood by
    /// `create_backend`.
    pub device: String,
    pub stop: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        CameraState {
            fov: radians(DEFAULT_FOV_DEGREES),
            rotation_x_degrees: 0.0,
            rotation_y_degrees: 0.0,
            translation: [0.0; 3],
            device: String::from("cpu"),
            stop: false,
        }
    }
}

impl CameraState {
    /// `model_view * Rx * Ry * T`: the scene is translated, rotated about y
    /// and then x before the fitted view is applied.
    pub fn dynamic_view(&self, model_view: &Matrix4x4) -> Matrix4x4 {
        let t = &self.translation;
        return *model_view
            * Matrix4x4::rotate_x(self.rotation_x_degrees)
            * Matrix4x4::rotate_y(self.rotation_y_degrees)
            * Matrix4x4::translate(t[0], t[1], t[2]);
    }
}
