use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::picking::{DEFAULT_PARALLEL_THRESHOLD, POINT_PICK_EPSILON};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
/// Ray picking and overlay parameters.
pub struct PickingOptions {
    /// Vertex snap tolerance per unit of hit distance.
    #[schemars(
        title = "Point Snap",
        range(min = 0.0, max = 0.2),
        extend("step" = 0.005)
    )]
    pub point_pick_epsilon: f32,
    /// Face count above which the face scan runs in parallel.
    #[schemars(skip)]
    pub parallel_threshold: usize,
    /// Depth offset of the live preview overlay.
    #[schemars(skip)]
    pub preview_offset: f32,
    /// Depth offset of highlighted vertices.
    #[schemars(skip)]
    pub highlight_point_offset: f32,
    /// Depth offset of highlighted triangles.
    #[schemars(skip)]
    pub highlight_triangle_offset: f32,
    /// Pixel size of previewed and highlighted vertices.
    #[schemars(
        title = "Marker Size",
        range(min = 1.0, max = 15.0),
        extend("step" = 0.5)
    )]
    pub overlay_point_size: f32,
}

impl Default for PickingOptions {
    fn default() -> Self {
        Self {
            point_pick_epsilon: POINT_PICK_EPSILON,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            preview_offset: -1.1,
            highlight_point_offset: -1.15,
            highlight_triangle_offset: -1.25,
            overlay_point_size: 5.0,
        }
    }
}
