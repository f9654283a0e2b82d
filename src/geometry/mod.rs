//! Immutable per-load geometry: vertices, triangular faces, meshes and the
//! model that owns them.
//!
//! A [`Model`] is produced once by an external loader and never mutated
//! afterwards. Mesh indices are positional and stay valid for the lifetime
//! of the loaded model; replacing the model invalidates every index that was
//! derived from it.

mod bounds;
mod mesh;
mod model;
pub mod primitives;

pub use bounds::Bounds;
pub use mesh::{Face, Mesh, MeshHandle, Vertex};
pub use model::Model;
