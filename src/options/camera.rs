use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and start pose.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(
        title = "Field of View",
        range(min = 1.0, max = 90.0),
        extend("step" = 1.0)
    )]
    pub fovy: f32,
    /// Upper bound for scroll zoom, in degrees.
    #[schemars(skip)]
    pub max_fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Start eye position.
    #[schemars(skip)]
    pub eye: [f32; 3],
    /// Start look-at target.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Camera-mode look sensitivity in degrees per pixel.
    #[schemars(
        title = "Look Speed",
        range(min = 0.01, max = 1.0),
        extend("step" = 0.01)
    )]
    pub look_sensitivity: f32,
    /// Camera-mode distance moved per key press.
    #[schemars(
        title = "Move Step",
        range(min = 0.01, max = 1.0),
        extend("step" = 0.01)
    )]
    pub move_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            max_fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            eye: [0.0, 0.0, 3.0],
            target: [0.0, 0.0, 0.0],
            look_sensitivity: 0.1,
            move_step: 0.05,
        }
    }
}
