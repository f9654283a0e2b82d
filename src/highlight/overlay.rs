//! The draw-call seam between highlight sets and the renderer.

use crate::geometry::MeshHandle;

/// Primitive an overlay element is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// One point per index, sized by [`OverlayStyle::size`].
    Points,
    /// One filled triangle per three indices.
    Triangles,
}

/// Per-overlay raster state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// Polygon depth offset (negative pulls toward the camera so the overlay
    /// does not z-fight with the base mesh).
    pub offset: f32,
    /// Point size in pixels; ignored for triangles.
    pub size: f32,
}

/// Receives overlay draw calls. Implemented by the host renderer.
pub trait OverlaySink {
    /// Set raster state for the draws that follow.
    fn begin_overlay(&mut self, style: OverlayStyle);

    /// Draw one element from the vertex buffer behind `mesh`.
    fn draw_element(
        &mut self,
        mesh: MeshHandle,
        mode: DrawMode,
        indices: &[u32],
    );

    /// Restore raster state after the overlay.
    fn end_overlay(&mut self);
}
