//! Live preview and persistent highlight state for one loaded model.
//!
//! The preview sets always mirror the latest pick (at most one element
//! each). The highlight sets accumulate confirmed picks and toggle them off
//! again on a second confirmation.

use crate::error::ViewerError;
use crate::geometry::Model;
use crate::highlight::{Point, PointSet, Triangle, TriangleSet};
use crate::picking::PickResult;

/// Result of toggling a pick into the persistent sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The pick was empty.
    Nothing,
    /// A vertex was toggled.
    Point {
        /// Mesh of the vertex.
        mesh_index: usize,
        /// The toggled vertex.
        point: Point,
        /// Whether it is now highlighted.
        highlighted: bool,
    },
    /// A triangle was toggled.
    Triangle {
        /// Mesh of the triangle.
        mesh_index: usize,
        /// The toggled triangle.
        triangle: Triangle,
        /// Whether it is now highlighted.
        highlighted: bool,
    },
}

/// Preview and highlight sets built for the same model.
#[derive(Debug, Clone)]
pub struct SelectionState {
    preview_point: PointSet,
    preview_triangle: TriangleSet,
    points: PointSet,
    triangles: TriangleSet,
}

impl SelectionState {
    /// Empty state covering every mesh of `model`.
    #[must_use]
    pub fn new(model: &Model) -> Self {
        Self {
            preview_point: PointSet::new(model),
            preview_triangle: TriangleSet::new(model),
            points: PointSet::new(model),
            triangles: TriangleSet::new(model),
        }
    }

    /// Persistent vertex highlights.
    #[must_use]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Persistent triangle highlights.
    #[must_use]
    pub fn triangles(&self) -> &TriangleSet {
        &self.triangles
    }

    /// Vertex preview (the last snapped vertex, if any).
    #[must_use]
    pub fn preview_point(&self) -> &PointSet {
        &self.preview_point
    }

    /// Triangle preview (the last hit triangle, if any).
    #[must_use]
    pub fn preview_triangle(&self) -> &TriangleSet {
        &self.preview_triangle
    }

    /// Point the preview at `pick`. A vertex hit replaces the vertex
    /// preview, a plain face hit replaces the triangle preview, and a miss
    /// leaves both alone.
    ///
    /// # Errors
    ///
    /// Fails if the pick addresses geometry outside the model these sets
    /// were built for.
    pub fn preview(&mut self, pick: &PickResult) -> Result<(), ViewerError> {
        let Some(face) = pick.face() else {
            return Ok(());
        };
        match pick.point() {
            Some(point) => self
                .preview_point
                .reset_to(face.mesh_index, Point(point.index)),
            None => self
                .preview_triangle
                .reset_to(face.mesh_index, Triangle(face.indices)),
        }
    }

    /// Toggle `pick` in the persistent sets.
    ///
    /// # Errors
    ///
    /// Same as [`preview`](Self::preview).
    pub fn confirm(
        &mut self,
        pick: &PickResult,
    ) -> Result<Confirmation, ViewerError> {
        let Some(face) = pick.face() else {
            log::info!("highlight nothing");
            return Ok(Confirmation::Nothing);
        };
        let mesh_index = face.mesh_index;

        if let Some(hit) = pick.point() {
            let point = Point(hit.index);
            let highlighted = self.points.toggle(mesh_index, point)?;
            log::info!(
                "{}highlight point ({}) in mesh {mesh_index}",
                if highlighted { "" } else { "un" },
                hit.index
            );
            return Ok(Confirmation::Point {
                mesh_index,
                point,
                highlighted,
            });
        }

        let triangle = Triangle(face.indices);
        let highlighted = self.triangles.toggle(mesh_index, triangle)?;
        log::info!(
            "{}highlight face {:?} in mesh {mesh_index}",
            if highlighted { "" } else { "un" },
            face.indices
        );
        Ok(Confirmation::Triangle {
            mesh_index,
            triangle,
            highlighted,
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::geometry::{primitives, Vertex};
    use crate::picking::{FaceHit, PointHit};

    fn cube() -> Model {
        Model::new(vec![primitives::unit_cube()]).unwrap()
    }

    fn face_hit(indices: [u32; 3]) -> FaceHit {
        FaceHit {
            mesh_index: 0,
            face_index: 0,
            indices,
            vertices: [Vertex::new(Vec3::ZERO, Vec3::Z); 3],
            distance: 4.5,
            crossing: Vec3::ZERO,
        }
    }

    fn point_pick(index: u32) -> PickResult {
        PickResult::hit(
            face_hit([4, 5, 7]),
            Some(PointHit {
                index,
                vertex: Vertex::new(Vec3::splat(0.5), Vec3::Z),
                screen_distance: 0.0,
            }),
        )
    }

    #[test]
    fn preview_tracks_the_latest_pick() {
        let mut state = SelectionState::new(&cube());
        state.preview(&PickResult::hit(face_hit([4, 5, 7]), None)).unwrap();
        state.preview(&PickResult::hit(face_hit([4, 7, 6]), None)).unwrap();
        assert_eq!(
            state.preview_triangle().elements(0),
            &[Triangle([4, 7, 6])]
        );
        assert!(state.preview_point().is_empty());

        state.preview(&point_pick(7)).unwrap();
        assert_eq!(state.preview_point().elements(0), &[Point(7)]);

        // A miss keeps the previous preview
        state.preview(&PickResult::nothing()).unwrap();
        assert_eq!(state.preview_point().len(), 1);
        assert!(state.points().is_empty());
    }

    #[test]
    fn confirm_toggles_points_and_faces() {
        let mut state = SelectionState::new(&cube());
        assert_eq!(
            state.confirm(&point_pick(7)).unwrap(),
            Confirmation::Point {
                mesh_index: 0,
                point: Point(7),
                highlighted: true
            }
        );
        let face = PickResult::hit(face_hit([4, 5, 7]), None);
        assert!(matches!(
            state.confirm(&face).unwrap(),
            Confirmation::Triangle {
                highlighted: true,
                ..
            }
        ));
        assert_eq!(state.points().len(), 1);
        assert_eq!(state.triangles().len(), 1);

        assert!(matches!(
            state.confirm(&point_pick(7)).unwrap(),
            Confirmation::Point {
                highlighted: false,
                ..
            }
        ));
        assert!(state.points().is_empty());
        assert_eq!(
            state.confirm(&PickResult::nothing()).unwrap(),
            Confirmation::Nothing
        );
        assert_eq!(state.triangles().len(), 1);
    }

    #[test]
    fn foreign_pick_is_rejected() {
        let mut state = SelectionState::new(&cube());
        let pick = PickResult::hit(face_hit([4, 5, 70]), None);
        assert!(state.confirm(&pick).is_err());
        assert!(state.preview(&pick).is_err());
        assert!(state.triangles().is_empty());
    }
}
