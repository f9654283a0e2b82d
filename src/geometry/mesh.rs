use std::sync::Arc;

use glam::{Vec2, Vec3};

use super::Bounds;
use crate::error::ViewerError;

/// Per-vertex attributes, laid out for direct GPU upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Model-space position.
    pub position: Vec3,
    /// Unit surface normal.
    pub normal: Vec3,
    /// Texture coordinate.
    pub tex_coord: Vec2,
    /// Tangent for normal mapping.
    pub tangent: Vec3,
    /// Bitangent for normal mapping.
    pub bitangent: Vec3,
}

impl Vertex {
    /// Vertex with only position and normal set.
    #[must_use]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            normal,
            tex_coord: Vec2::ZERO,
            tangent: Vec3::ZERO,
            bitangent: Vec3::ZERO,
        }
    }
}

/// Triangle as three indices into the owning mesh's vertex list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    /// Vertex indices in winding order.
    pub vertex: [u32; 3],
}

impl Face {
    /// Face from three vertex indices.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { vertex: [a, b, c] }
    }
}

/// Opaque handle naming the GPU vertex buffer that backs a mesh.
///
/// The buffer itself belongs to the renderer; the core only passes the
/// handle back when it asks for overlay draws.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct MeshHandle(pub u32);

/// One sub-mesh of a model: immutable vertices and faces.
///
/// Geometry lives behind `Arc` so highlight sets and pick results can hold
/// on to it without copying.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Arc<[Vertex]>,
    faces: Arc<[Face]>,
    handle: MeshHandle,
}

impl Mesh {
    /// Build a mesh, rejecting faces that index past the vertex list.
    ///
    /// The handle value doubles as the mesh label in the error.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidFace`] for the first face with an
    /// out-of-range vertex index.
    pub fn new(
        vertices: Vec<Vertex>,
        faces: Vec<Face>,
        handle: MeshHandle,
    ) -> Result<Self, ViewerError> {
        let count = vertices.len();
        for (face_index, face) in faces.iter().enumerate() {
            if let Some(&bad) =
                face.vertex.iter().find(|&&i| i as usize >= count)
            {
                return Err(ViewerError::InvalidFace {
                    face_index,
                    vertex_index: bad,
                    vertex_count: count,
                });
            }
        }
        Ok(Self::from_validated(vertices, faces, handle))
    }

    /// Build a mesh whose faces are known to be in range.
    pub(crate) fn from_validated(
        vertices: Vec<Vertex>,
        faces: Vec<Face>,
        handle: MeshHandle,
    ) -> Self {
        debug_assert!(faces
            .iter()
            .all(|f| f.vertex.iter().all(|&i| (i as usize) < vertices.len())));
        Self {
            vertices: vertices.into(),
            faces: faces.into(),
            handle,
        }
    }

    /// Same geometry under a different buffer handle.
    #[must_use]
    pub fn with_handle(mut self, handle: MeshHandle) -> Self {
        self.handle = handle;
        self
    }

    /// All vertices in load order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Shared handle to the vertex list.
    #[must_use]
    pub fn shared_vertices(&self) -> Arc<[Vertex]> {
        Arc::clone(&self.vertices)
    }

    /// All faces in load order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// GPU buffer handle.
    #[must_use]
    pub fn handle(&self) -> MeshHandle {
        self.handle
    }

    /// Vertex at `index`, if in range.
    #[must_use]
    pub fn vertex(&self, index: u32) -> Option<&Vertex> {
        self.vertices.get(index as usize)
    }

    /// The three vertices of `face`.
    ///
    /// Faces are validated on construction, so indexing cannot fail for a
    /// face taken from this mesh.
    #[must_use]
    pub fn face_vertices(&self, face: &Face) -> [Vertex; 3] {
        face.vertex.map(|i| self.vertices[i as usize])
    }

    /// Model-space bounding box, `None` for a mesh without vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.vertices.iter().map(|v| v.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Vec<Vertex> {
        vec![
            Vertex::new(Vec3::ZERO, Vec3::Z),
            Vertex::new(Vec3::X, Vec3::Z),
            Vertex::new(Vec3::Y, Vec3::Z),
        ]
    }

    #[test]
    fn rejects_out_of_range_face() {
        let faces = vec![Face::new(0, 1, 2), Face::new(0, 1, 3)];
        let err = Mesh::new(tri(), faces, MeshHandle(7)).unwrap_err();
        assert!(matches!(
            err,
            ViewerError::InvalidFace {
                face_index: 1,
                vertex_index: 3,
                vertex_count: 3,
            }
        ));
    }

    #[test]
    fn face_vertices_follow_winding() {
        let mesh =
            Mesh::new(tri(), vec![Face::new(2, 0, 1)], MeshHandle(0)).unwrap();
        let [a, b, c] = mesh.face_vertices(&mesh.faces()[0]);
        assert_eq!(a.position, Vec3::Y);
        assert_eq!(b.position, Vec3::ZERO);
        assert_eq!(c.position, Vec3::X);
    }

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(size_of::<Vertex>(), 14 * 4);
        let verts = tri();
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 3 * 14 * 4);
    }
}
