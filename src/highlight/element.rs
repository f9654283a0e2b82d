use std::fmt;

use glam::Vec3;

use super::overlay::DrawMode;
use crate::geometry::Vertex;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Point {}
    impl Sealed for super::Triangle {}
}

/// Hashable identity of a model-space position.
///
/// Built from the IEEE bit patterns of the coordinates with `-0.0` folded
/// into `0.0`, so two vertices compare equal exactly when their positions
/// compare equal as floats (NaN aside).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey([u32; 3]);

impl PositionKey {
    /// Key for `position`.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        // x + 0.0 turns -0.0 into +0.0 and leaves every other value alone
        let p = position + Vec3::ZERO;
        Self([p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
    }
}

/// A highlightable element shape. Implemented by [`Point`] and
/// [`Triangle`] only.
pub trait Element: sealed::Sealed + Copy + PartialEq + fmt::Debug {
    /// Primitive used to draw the element.
    const MODE: DrawMode;

    /// Mesh-local vertex indices making up the element.
    fn indices(&self) -> &[u32];

    /// Position identity for elements deduplicated by position.
    ///
    /// Points return the key of their vertex; triangles return `None` and
    /// are matched by exact ordered indices instead.
    fn position_key(&self, vertices: &[Vertex]) -> Option<PositionKey>;

    /// One-line description for listings.
    fn describe(&self, mesh_index: usize, vertices: &[Vertex]) -> String;
}

/// A single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point(pub u32);

/// An ordered vertex triple. `(a, b, c)` and `(b, c, a)` are different
/// triangles for membership purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle(pub [u32; 3]);

fn fmt_position(p: Vec3) -> String {
    format!("{:.4}, {:.4}, {:.4}", p.x, p.y, p.z)
}

impl Element for Point {
    const MODE: DrawMode = DrawMode::Points;

    fn indices(&self) -> &[u32] {
        std::slice::from_ref(&self.0)
    }

    fn position_key(&self, vertices: &[Vertex]) -> Option<PositionKey> {
        vertices
            .get(self.0 as usize)
            .map(|v| PositionKey::new(v.position))
    }

    fn describe(&self, mesh_index: usize, vertices: &[Vertex]) -> String {
        let position = vertices
            .get(self.0 as usize)
            .map_or_else(String::new, |v| fmt_position(v.position));
        format!("mesh {mesh_index} point ({}): {position}", self.0)
    }
}

impl Element for Triangle {
    const MODE: DrawMode = DrawMode::Triangles;

    fn indices(&self) -> &[u32] {
        &self.0
    }

    fn position_key(&self, _vertices: &[Vertex]) -> Option<PositionKey> {
        None
    }

    fn describe(&self, mesh_index: usize, vertices: &[Vertex]) -> String {
        let [a, b, c] = self.0;
        let corners = self
            .0
            .iter()
            .filter_map(|&i| vertices.get(i as usize))
            .map(|v| format!("({})", fmt_position(v.position)))
            .collect::<Vec<_>>()
            .join(" ");
        format!("mesh {mesh_index} triangle ({a}, {b}, {c}): {corners}")
    }
}
