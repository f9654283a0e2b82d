//! The per-frame draw-call seam between the viewer and a renderer.

use glam::{Mat4, Vec3};

use crate::geometry::MeshHandle;
use crate::highlight::OverlaySink;
use crate::options::LightingOptions;

/// Rasterization of a whole-model pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BasePass {
    /// Lit, filled triangles.
    Fill,
    /// Wireframe.
    Line {
        /// Line width in pixels.
        width: f32,
        /// Depth offset.
        offset: f32,
    },
    /// One point per vertex.
    Point {
        /// Point size in pixels.
        size: f32,
        /// Depth offset.
        offset: f32,
    },
}

/// Matrices shared by every draw in a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    /// Model-to-world.
    pub model: Mat4,
    /// World-to-view.
    pub view: Mat4,
    /// View-to-clip.
    pub projection: Mat4,
    /// Camera eye in world space, for specular terms.
    pub eye: Vec3,
}

/// Receives one frame of draw calls. Implemented by the host renderer.
///
/// Overlay draws arrive through the [`OverlaySink`] supertrait, each
/// preceded by [`set_color`](Self::set_color).
pub trait FrameSink: OverlaySink {
    /// Clear color and the frame's matrices.
    fn begin_frame(&mut self, clear_color: [f32; 3], uniforms: &FrameUniforms);

    /// Flat color for the draws that follow.
    fn set_color(&mut self, rgb: [f32; 3]);

    /// Draw every face of the mesh behind `mesh`.
    ///
    /// `lighting` is set for [`BasePass::Fill`] only.
    fn draw_mesh(
        &mut self,
        mesh: MeshHandle,
        pass: BasePass,
        lighting: Option<&LightingOptions>,
    );

    /// Draw the lamp marker with its own model matrix.
    fn draw_lamp(&mut self, transform: Mat4);
}
