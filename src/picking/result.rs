//! The per-pick selection state: what the ray is over right now.

use std::fmt;

use glam::Vec3;

use crate::geometry::Vertex;

/// The nearest triangle along the pick ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceHit {
    /// Index of the owning mesh in the model.
    pub mesh_index: usize,
    /// Index of the face within its mesh.
    pub face_index: usize,
    /// Mesh-local vertex indices of the face.
    pub indices: [u32; 3],
    /// Vertex data of the face, in `indices` order.
    pub vertices: [Vertex; 3],
    /// Distance from the ray origin to the crossing point.
    pub distance: f32,
    /// World-space point where the ray crosses the face.
    pub crossing: Vec3,
}

/// A face vertex that the pick snapped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHit {
    /// Mesh-local vertex index.
    pub index: u32,
    /// Vertex data.
    pub vertex: Vertex,
    /// Clip-space distance between the vertex and the crossing point.
    pub screen_distance: f32,
}

/// Typed summary of a [`PickResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    /// Nothing under the cursor.
    None,
    /// A single vertex.
    Point {
        /// Owning mesh.
        mesh_index: usize,
        /// Mesh-local vertex index.
        index: u32,
    },
    /// A whole triangle.
    Triangle {
        /// Owning mesh.
        mesh_index: usize,
        /// Mesh-local vertex indices.
        indices: [u32; 3],
    },
}

impl PickTarget {
    /// Returns `true` if this target is `None`.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Result of one pick. Recomputed from scratch on every pick request.
///
/// A point hit always comes with the face it was refined from, so the face
/// indices stay available after a vertex snap. For display only one of the
/// two is valid: the point takes precedence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PickResult {
    face: Option<FaceHit>,
    point: Option<PointHit>,
}

impl PickResult {
    /// Nothing under the cursor.
    #[must_use]
    pub fn nothing() -> Self {
        Self::default()
    }

    /// A face hit, optionally refined to one of its vertices.
    #[must_use]
    pub fn hit(face: FaceHit, point: Option<PointHit>) -> Self {
        Self {
            face: Some(face),
            point,
        }
    }

    /// The intersected face, also present when a point was snapped to.
    #[must_use]
    pub fn face(&self) -> Option<&FaceHit> {
        self.face.as_ref()
    }

    /// The snapped vertex, if any.
    #[must_use]
    pub fn point(&self) -> Option<&PointHit> {
        self.point.as_ref()
    }

    /// A vertex was snapped to.
    #[must_use]
    pub fn point_valid(&self) -> bool {
        self.point.is_some()
    }

    /// A face was hit and no vertex snap suppresses it.
    #[must_use]
    pub fn face_valid(&self) -> bool {
        self.face.is_some() && self.point.is_none()
    }

    /// Neither a point nor a face.
    #[must_use]
    pub fn is_nothing(&self) -> bool {
        self.face.is_none()
    }

    /// Typed target honoring point precedence.
    #[must_use]
    pub fn target(&self) -> PickTarget {
        match (self.face, self.point) {
            (Some(face), Some(point)) => PickTarget::Point {
                mesh_index: face.mesh_index,
                index: point.index,
            },
            (Some(face), None) => PickTarget::Triangle {
                mesh_index: face.mesh_index,
                indices: face.indices,
            },
            _ => PickTarget::None,
        }
    }
}

impl fmt::Display for PickResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.face, &self.point) {
            (_, Some(point)) => {
                let p = point.vertex.position;
                write!(
                    f,
                    "Point ({}): {:.4}, {:.4}, {:.4}",
                    point.index, p.x, p.y, p.z
                )
            }
            (Some(face), None) => {
                write!(f, "Face:")?;
                for (i, (index, vertex)) in
                    face.indices.iter().zip(&face.vertices).enumerate()
                {
                    let p = vertex.position;
                    write!(
                        f,
                        "\n  Point({i}) ({index}): {:.4}, {:.4}, {:.4}",
                        p.x, p.y, p.z
                    )?;
                }
                Ok(())
            }
            (None, None) => write!(f, "Nothing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_hit() -> FaceHit {
        FaceHit {
            mesh_index: 1,
            face_index: 4,
            indices: [7, 8, 9],
            vertices: [
                Vertex::new(Vec3::ZERO, Vec3::Z),
                Vertex::new(Vec3::X, Vec3::Z),
                Vertex::new(Vec3::Y, Vec3::Z),
            ],
            distance: 2.0,
            crossing: Vec3::new(0.25, 0.25, 0.0),
        }
    }

    #[test]
    fn nothing_has_no_valid_part() {
        let r = PickResult::nothing();
        assert!(!r.face_valid());
        assert!(!r.point_valid());
        assert!(r.target().is_none());
        assert_eq!(r.to_string(), "Nothing");
    }

    #[test]
    fn point_takes_precedence_over_face() {
        let face = face_hit();
        let r = PickResult::hit(
            face,
            Some(PointHit {
                index: 8,
                vertex: face.vertices[1],
                screen_distance: 0.0,
            }),
        );
        assert!(r.point_valid());
        assert!(!r.face_valid());
        assert_eq!(r.face().unwrap().indices, [7, 8, 9]);
        assert_eq!(
            r.target(),
            PickTarget::Point {
                mesh_index: 1,
                index: 8
            }
        );
        assert_eq!(r.to_string(), "Point (8): 1.0000, 0.0000, 0.0000");
    }

    #[test]
    fn face_text_lists_corners() {
        let r = PickResult::hit(face_hit(), None);
        assert!(r.face_valid());
        let text = r.to_string();
        assert!(text.starts_with("Face:"));
        assert!(text.contains("Point(2) (9): 0.0000, 1.0000, 0.0000"));
    }
}
