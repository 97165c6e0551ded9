use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Projection;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera start pose, projection and control parameters.
pub struct CameraOptions {
    /// World-space position the camera starts at.
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub move_speed: f32,
    /// Keyboard turn speed in degrees per second.
    #[schemars(title = "Turn Speed", range(min = 10.0, max = 360.0), extend("step" = 5.0))]
    pub turn_speed: f32,
    /// Mouse-look sensitivity in degrees per pixel.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub rotate_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            start_position: [1.0, 1.0, 0.5],
            fovy: 60.0,
            znear: 0.1,
            zfar: 100.0,
            move_speed: 2.0,
            turn_speed: 90.0,
            rotate_speed: 0.2,
        }
    }
}

impl CameraOptions {
    /// Start position as a vector.
    #[must_use]
    pub fn start_position(&self) -> Vec3 {
        Vec3::from_array(self.start_position)
    }

    /// Projection for a viewport of the given aspect ratio.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Projection {
        Projection {
            fovy: self.fovy,
            aspect,
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}
