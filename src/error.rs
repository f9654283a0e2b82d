//! Crate-level error types.

use std::fmt;

/// Errors produced by the model-viewer crate.
#[derive(Debug)]
pub enum ViewerError {
    /// A mesh index outside the loaded model's mesh list.
    InvalidMeshIndex {
        /// Requested mesh index.
        mesh_index: usize,
        /// Number of meshes in the model.
        mesh_count: usize,
    },
    /// A vertex index outside its mesh's vertex list.
    InvalidVertexIndex {
        /// Mesh the index was addressed to.
        mesh_index: usize,
        /// Requested vertex index.
        vertex_index: u32,
        /// Number of vertices in that mesh.
        vertex_count: usize,
    },
    /// A face refers to a vertex its mesh does not have.
    InvalidFace {
        /// Position of the face in the mesh's face list.
        face_index: usize,
        /// Offending vertex index.
        vertex_index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
    /// A model with no meshes was offered for loading.
    EmptyModel,
    /// An operation that needs a loaded model ran without one.
    NoModelLoaded,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMeshIndex {
                mesh_index,
                mesh_count,
            } => write!(
                f,
                "mesh index {mesh_index} out of range ({mesh_count} meshes)"
            ),
            Self::InvalidVertexIndex {
                mesh_index,
                vertex_index,
                vertex_count,
            } => write!(
                f,
                "vertex index {vertex_index} out of range for mesh \
                 {mesh_index} ({vertex_count} vertices)"
            ),
            Self::InvalidFace {
                face_index,
                vertex_index,
                vertex_count,
            } => write!(
                f,
                "face {face_index} refers to vertex {vertex_index} \
                 ({vertex_count} vertices)"
            ),
            Self::EmptyModel => write!(f, "model contains no meshes"),
            Self::NoModelLoaded => write!(f, "no model loaded"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
