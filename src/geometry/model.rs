use glam::Mat4;

use super::{Bounds, Mesh};
use crate::error::ViewerError;

/// A loaded model: an ordered list of sub-meshes plus a basis transform.
///
/// Mesh order is the mesh index used by picking and highlighting.
#[derive(Debug, Clone)]
pub struct Model {
    meshes: Vec<Mesh>,
    /// Transform applied before the interactive model transform.
    pub basis_transform: Mat4,
}

impl Model {
    /// Wrap `meshes` with an identity basis transform.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::EmptyModel`] when `meshes` is empty.
    pub fn new(meshes: Vec<Mesh>) -> Result<Self, ViewerError> {
        if meshes.is_empty() {
            return Err(ViewerError::EmptyModel);
        }
        Ok(Self {
            meshes,
            basis_transform: Mat4::IDENTITY,
        })
    }

    /// Replace the basis transform.
    #[must_use]
    pub fn with_basis(mut self, basis: Mat4) -> Self {
        self.basis_transform = basis;
        self
    }

    /// Sub-meshes in index order.
    #[must_use]
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Mesh at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidMeshIndex`] when out of range.
    pub fn mesh(&self, index: usize) -> Result<&Mesh, ViewerError> {
        self.meshes.get(index).ok_or(ViewerError::InvalidMeshIndex {
            mesh_index: index,
            mesh_count: self.meshes.len(),
        })
    }

    /// Total triangle count across all meshes.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.meshes.iter().map(|m| m.faces().len()).sum()
    }

    /// Model-space bounds of every mesh combined.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.meshes
            .iter()
            .filter_map(Mesh::bounds)
            .reduce(|a, b| a.union(&b))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::geometry::primitives;

    #[test]
    fn empty_model_is_rejected() {
        assert!(matches!(Model::new(Vec::new()), Err(ViewerError::EmptyModel)));
    }

    #[test]
    fn bounds_merge_across_meshes() {
        let model = Model::new(vec![
            primitives::unit_cube(),
            primitives::quad(4.0),
        ])
        .unwrap();
        let b = model.bounds().unwrap();
        assert_eq!(b.min, Vec3::new(-2.0, -2.0, -0.5));
        assert_eq!(b.max, Vec3::new(2.0, 2.0, 0.5));
        assert_eq!(model.face_count(), 14);
    }

    #[test]
    fn mesh_lookup_reports_range() {
        let model = Model::new(vec![primitives::unit_cube()]).unwrap();
        assert!(model.mesh(0).is_ok());
        assert!(matches!(
            model.mesh(1),
            Err(ViewerError::InvalidMeshIndex {
                mesh_index: 1,
                mesh_count: 1
            })
        ));
    }
}
