use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Single point lamp used by the fill pass.
pub struct LightingOptions {
    /// Lamp position in world space.
    #[schemars(skip)]
    pub lamp_position: [f32; 3],
    /// Uniform scale of the lamp marker.
    #[schemars(skip)]
    pub lamp_scale: f32,
    /// Ambient term.
    #[schemars(
        title = "Ambient",
        range(min = 0.0, max = 1.0),
        extend("step" = 0.01)
    )]
    pub ambient: f32,
    /// Diffuse term.
    #[schemars(
        title = "Diffuse",
        range(min = 0.0, max = 1.0),
        extend("step" = 0.01)
    )]
    pub diffuse: f32,
    /// Specular term.
    #[schemars(
        title = "Specular",
        range(min = 0.0, max = 1.0),
        extend("step" = 0.01)
    )]
    pub specular: f32,
    /// Constant attenuation.
    #[schemars(
        title = "Constant",
        range(min = 0.0, max = 1.0),
        extend("step" = 0.001)
    )]
    pub constant: f32,
    /// Linear attenuation.
    #[schemars(
        title = "Linear",
        range(min = 0.0, max = 0.2),
        extend("step" = 0.001)
    )]
    pub linear: f32,
    /// Quadratic attenuation.
    #[schemars(
        title = "Quadratic",
        range(min = 0.0, max = 0.1),
        extend("step" = 0.001)
    )]
    pub quadratic: f32,
    /// Specular exponent.
    #[schemars(skip)]
    pub shininess: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            lamp_position: [3.0, 8.0, 5.0],
            lamp_scale: 0.3,
            ambient: 0.3,
            diffuse: 0.5,
            specular: 1.0,
            constant: 1.0,
            linear: 0.027,
            quadratic: 0.0028,
            shininess: 64.0,
        }
    }
}
