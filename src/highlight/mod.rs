//! Toggleable sets of highlighted points and triangles.
//!
//! A [`HighlightSet`] keeps, per mesh, the list of highlighted elements.
//! Point sets also keep a model-wide table from vertex position to the
//! `(mesh, index)` that was stored for it. Two vertex indices can share a
//! position (UV seams, split normals), and the table makes a point at that
//! position toggle as one element no matter which index was picked.
//!
//! The table and the per-mesh lists always agree: a position is in the
//! table exactly when the point stored for it is in its mesh's list.
//!
//! Triangles are matched by exact ordered index triple, with no position
//! deduplication and no rotation canonicalization.

mod element;
mod overlay;

use std::sync::Arc;

pub use element::{Element, Point, PositionKey, Triangle};
#[cfg(test)]
pub(crate) use overlay::recording;
pub use overlay::{DrawMode, OverlaySink, OverlayStyle};
use rustc_hash::FxHashMap;

use crate::error::ViewerError;
use crate::geometry::{MeshHandle, Model, Vertex};

/// Highlighted vertices.
pub type PointSet = HighlightSet<Point>;
/// Highlighted triangles.
pub type TriangleSet = HighlightSet<Triangle>;

#[derive(Debug, Clone)]
struct MeshSlot<E> {
    handle: MeshHandle,
    vertices: Arc<[Vertex]>,
    elements: Vec<E>,
}

/// Per-mesh highlighted elements of one shape, built for one loaded model.
///
/// Discard and rebuild on model reload; indices from another model are
/// meaningless here.
#[derive(Debug, Clone)]
pub struct HighlightSet<E: Element> {
    meshes: Vec<MeshSlot<E>>,
    positions: FxHashMap<PositionKey, (usize, E)>,
}

impl<E: Element> HighlightSet<E> {
    /// Empty set covering every mesh of `model`.
    #[must_use]
    pub fn new(model: &Model) -> Self {
        Self {
            meshes: model
                .meshes()
                .iter()
                .map(|mesh| MeshSlot {
                    handle: mesh.handle(),
                    vertices: mesh.shared_vertices(),
                    elements: Vec::new(),
                })
                .collect(),
            positions: FxHashMap::default(),
        }
    }

    /// Number of highlighted elements across all meshes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meshes.iter().map(|m| m.elements.len()).sum()
    }

    /// Whether nothing is highlighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.iter().all(|m| m.elements.is_empty())
    }

    /// Highlighted elements of one mesh in insertion order (empty for an
    /// unknown mesh).
    #[must_use]
    pub fn elements(&self, mesh_index: usize) -> &[E] {
        self.meshes
            .get(mesh_index)
            .map_or(&[], |m| m.elements.as_slice())
    }

    /// All highlighted elements with their mesh index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &E)> {
        self.meshes
            .iter()
            .enumerate()
            .flat_map(|(i, m)| m.elements.iter().map(move |e| (i, e)))
    }

    /// Whether exactly `element` is stored for `mesh_index`.
    #[must_use]
    pub fn contains(&self, mesh_index: usize, element: &E) -> bool {
        self.elements(mesh_index).contains(element)
    }

    /// Flip the highlight state of `element`.
    ///
    /// Returns `true` if the element is now highlighted, `false` if it was
    /// removed. Point elements are matched by vertex position, so picking a
    /// different index at an already highlighted position removes the entry
    /// that was stored for it, wherever it lives.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidMeshIndex`] or
    /// [`ViewerError::InvalidVertexIndex`] for out-of-range input; the set
    /// is left unchanged.
    pub fn toggle(
        &mut self,
        mesh_index: usize,
        element: E,
    ) -> Result<bool, ViewerError> {
        self.validate(mesh_index, &element)?;

        let key = element.position_key(&self.meshes[mesh_index].vertices);
        let removed = match key {
            Some(key) => self
                .positions
                .remove(&key)
                .is_some_and(|(m, stored)| self.remove_element(m, &stored)),
            None => self.remove_element(mesh_index, &element),
        };
        if removed {
            return Ok(false);
        }

        self.insert(mesh_index, element);
        Ok(true)
    }

    /// Replace the whole set with the single `element`.
    ///
    /// Used by preview sets, which always hold exactly the element under
    /// the cursor.
    ///
    /// # Errors
    ///
    /// Same as [`toggle`](Self::toggle); the set is left unchanged on
    /// error.
    pub fn reset_to(
        &mut self,
        mesh_index: usize,
        element: E,
    ) -> Result<(), ViewerError> {
        self.validate(mesh_index, &element)?;
        self.clear();
        self.insert(mesh_index, element);
        Ok(())
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        for slot in &mut self.meshes {
            slot.elements.clear();
        }
        self.positions.clear();
    }

    /// Issue one draw call per element, bracketed by the overlay style.
    pub fn render<S: OverlaySink + ?Sized>(
        &self,
        sink: &mut S,
        offset: f32,
        size: f32,
    ) {
        sink.begin_overlay(OverlayStyle { offset, size });
        for slot in &self.meshes {
            for element in &slot.elements {
                sink.draw_element(slot.handle, E::MODE, element.indices());
            }
        }
        sink.end_overlay();
    }

    /// Human-readable listing, one line per element, or `"None"`.
    #[must_use]
    pub fn indices_as_text(&self) -> String {
        if self.is_empty() {
            return "None".to_owned();
        }
        self.meshes
            .iter()
            .enumerate()
            .flat_map(|(i, slot)| {
                slot.elements
                    .iter()
                    .map(move |e| e.describe(i, &slot.vertices))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check that `mesh_index` and every index of `element` are in range.
    fn validate(
        &self,
        mesh_index: usize,
        element: &E,
    ) -> Result<(), ViewerError> {
        let slot = self.meshes.get(mesh_index).ok_or(
            ViewerError::InvalidMeshIndex {
                mesh_index,
                mesh_count: self.meshes.len(),
            },
        )?;
        let vertex_count = slot.vertices.len();
        if let Some(&bad) = element
            .indices()
            .iter()
            .find(|&&i| i as usize >= vertex_count)
        {
            log::warn!(
                "rejected highlight of vertex {bad} in mesh {mesh_index}"
            );
            return Err(ViewerError::InvalidVertexIndex {
                mesh_index,
                vertex_index: bad,
                vertex_count,
            });
        }
        Ok(())
    }

    /// Append without any membership check.
    fn insert(&mut self, mesh_index: usize, element: E) {
        let slot = &mut self.meshes[mesh_index];
        if let Some(key) = element.position_key(&slot.vertices) {
            let _ = self.positions.insert(key, (mesh_index, element));
        }
        slot.elements.push(element);
    }

    /// Drop the first occurrence of `element` from a mesh's list.
    fn remove_element(&mut self, mesh_index: usize, element: &E) -> bool {
        let Some(slot) = self.meshes.get_mut(mesh_index) else {
            return false;
        };
        match slot.elements.iter().position(|e| e == element) {
            Some(at) => {
                let _ = slot.elements.remove(at);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let table_matches = self.positions.iter().all(|(key, (m, e))| {
            self.contains(*m, e)
                && e.position_key(&self.meshes[*m].vertices) == Some(*key)
        });
        let lists_match = self.iter().all(|(m, e)| {
            e.position_key(&self.meshes[m].vertices)
                .is_none_or(|key| self.positions.get(&key) == Some(&(m, *e)))
        });
        table_matches && lists_match
    }
}

impl PointSet {
    /// Toggle the vertex `index` of mesh `mesh_index`.
    ///
    /// # Errors
    ///
    /// See [`HighlightSet::toggle`].
    pub fn toggle_point(
        &mut self,
        mesh_index: usize,
        index: u32,
    ) -> Result<bool, ViewerError> {
        self.toggle(mesh_index, Point(index))
    }

    /// Whether the position of vertex `index` in mesh `mesh_index` is
    /// highlighted, under any index in any mesh.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidMeshIndex`] or
    /// [`ViewerError::InvalidVertexIndex`] for out-of-range input.
    pub fn contains_by_position(
        &self,
        mesh_index: usize,
        index: u32,
    ) -> Result<bool, ViewerError> {
        let point = Point(index);
        self.validate(mesh_index, &point)?;
        Ok(point
            .position_key(&self.meshes[mesh_index].vertices)
            .is_some_and(|key| self.positions.contains_key(&key)))
    }
}

impl TriangleSet {
    /// Toggle the ordered triangle `indices` of mesh `mesh_index`.
    ///
    /// # Errors
    ///
    /// See [`HighlightSet::toggle`].
    pub fn toggle_triangle(
        &mut self,
        mesh_index: usize,
        indices: [u32; 3],
    ) -> Result<bool, ViewerError> {
        self.toggle(mesh_index, Triangle(indices))
    }
}
