use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Initial view-mode toggles and base pass raster state.
pub struct DisplayOptions {
    /// Draw the shaded fill pass.
    #[schemars(title = "Fill")]
    pub show_fill: bool,
    /// Draw the wireframe pass.
    #[schemars(title = "Lines")]
    pub show_lines: bool,
    /// Draw the vertex pass.
    #[schemars(title = "Points")]
    pub show_points: bool,
    /// Draw the lamp marker.
    #[schemars(title = "Lamp")]
    pub show_lamp: bool,
    /// Wireframe line width in pixels.
    #[schemars(
        title = "Line Width",
        range(min = 0.5, max = 5.0),
        extend("step" = 0.5)
    )]
    pub line_width: f32,
    /// Vertex pass point size in pixels.
    #[schemars(
        title = "Point Size",
        range(min = 1.0, max = 10.0),
        extend("step" = 0.5)
    )]
    pub point_size: f32,
    /// Depth offset of the wireframe pass.
    #[schemars(skip)]
    pub line_offset: f32,
    /// Depth offset of the vertex pass.
    #[schemars(skip)]
    pub point_offset: f32,
    /// RGB background color.
    #[schemars(skip)]
    pub clear_color: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_fill: true,
            show_lines: false,
            show_points: false,
            show_lamp: true,
            line_width: 1.0,
            point_size: 2.5,
            line_offset: -1.0,
            point_offset: -1.5,
            clear_color: [0.5, 0.5, 0.5],
        }
    }
}
