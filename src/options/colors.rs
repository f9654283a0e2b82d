use serde::{Deserialize, Serialize};

/// Overlay and base pass color palette.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB color of the wireframe pass.
    pub line: [f32; 3],
    /// RGB color of the vertex pass.
    pub point: [f32; 3],
    /// RGB color of the previewed vertex.
    pub select_point: [f32; 3],
    /// RGB color of the previewed triangle.
    pub select_triangle: [f32; 3],
    /// RGB color of highlighted vertices.
    pub highlight_point: [f32; 3],
    /// RGB color of highlighted triangles.
    pub highlight_triangle: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            line: [0.121_568_63, 0.886_274_5, 0.603_921_6],
            point: [0.356_862_75, 0.078_431_375, 0.831_372_56],
            select_point: [0.058_823_53, 0.733_333_35, 0.835_294_1],
            select_triangle: [0.821_568_63, 0.086_274_5, 0.203_921_6],
            highlight_point: [0.021_568_63, 0.986_274_5, 0.903_921_6],
            highlight_triangle: [0.690_196_1, 0.141_176_48, 0.898_039_2],
        }
    }
}
