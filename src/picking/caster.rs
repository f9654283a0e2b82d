//! Nearest-triangle ray casting across every mesh of a model.

use glam::{Mat4, Vec2, Vec3};
use rayon::prelude::*;

use super::ray::Ray;
use super::refine::{refine, POINT_PICK_EPSILON};
use super::result::{FaceHit, PickResult};
use crate::geometry::{Face, Mesh};
use crate::options::PickingOptions;

/// Face count above which the scan fans out across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// Camera pose and transforms a pick is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Camera eye in world space (the ray origin).
    pub camera_position: Vec3,
    /// Model-to-world transform of the loaded model.
    pub model: Mat4,
    /// World-to-view transform.
    pub view: Mat4,
    /// View-to-clip transform.
    pub projection: Mat4,
}

/// Nearest intersection found by the face scan.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    mesh_index: usize,
    face_index: usize,
    t: f32,
}

/// Keep the nearer candidate. `later` wins ties, so equal distances resolve
/// to whichever face comes last in (mesh, face) order. Rayon's reduce keeps
/// operand order, so the parallel scan resolves ties the same way.
fn nearer(earlier: Candidate, later: Candidate) -> Candidate {
    if later.t <= earlier.t {
        later
    } else {
        earlier
    }
}

/// Casts pick rays against a model's meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCaster {
    point_epsilon: f32,
    parallel_threshold: usize,
}

impl Default for RayCaster {
    fn default() -> Self {
        Self {
            point_epsilon: POINT_PICK_EPSILON,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl RayCaster {
    /// Caster configured from the picking options.
    #[must_use]
    pub fn from_options(options: &PickingOptions) -> Self {
        Self {
            point_epsilon: options.point_pick_epsilon,
            parallel_threshold: options.parallel_threshold,
        }
    }

    /// Vertex snap tolerance per unit of hit distance.
    #[must_use]
    pub fn point_epsilon(&self) -> f32 {
        self.point_epsilon
    }

    /// Pick under the cursor.
    ///
    /// `cursor` is in window pixels (origin top-left). An empty viewport
    /// yields [`PickResult::nothing`].
    #[must_use]
    pub fn pick(
        &self,
        meshes: &[Mesh],
        view: &ViewState,
        cursor: Vec2,
        viewport: (u32, u32),
    ) -> PickResult {
        Ray::from_screen(
            view.camera_position,
            view.view,
            view.projection,
            cursor,
            viewport,
        )
        .map_or_else(PickResult::nothing, |ray| {
            self.pick_ray(meshes, view, &ray)
        })
    }

    /// Pick along an explicit world-space ray.
    #[must_use]
    pub fn pick_ray(
        &self,
        meshes: &[Mesh],
        view: &ViewState,
        ray: &Ray,
    ) -> PickResult {
        let Some(nearest) = self.nearest_face(meshes, view.model, ray) else {
            log::debug!("pick: nothing under cursor");
            return PickResult::nothing();
        };

        let mesh = &meshes[nearest.mesh_index];
        let face = mesh.faces()[nearest.face_index];
        let hit = FaceHit {
            mesh_index: nearest.mesh_index,
            face_index: nearest.face_index,
            indices: face.vertex,
            vertices: mesh.face_vertices(&face),
            distance: nearest.t,
            crossing: ray.at(nearest.t),
        };
        let point = refine(&hit, view, self.point_epsilon);

        log::debug!(
            "pick: mesh {} face {} at t={:.4}, point {:?}",
            hit.mesh_index,
            hit.face_index,
            hit.distance,
            point.map(|p| p.index)
        );
        PickResult::hit(hit, point)
    }

    /// Scan every face of every mesh and keep the smallest positive `t`.
    ///
    /// Each face test is independent; workers keep their own nearest
    /// candidate and the candidates are reduced at the end.
    fn nearest_face(
        &self,
        meshes: &[Mesh],
        model: Mat4,
        ray: &Ray,
    ) -> Option<Candidate> {
        let face_count: usize = meshes.iter().map(|m| m.faces().len()).sum();

        if face_count < self.parallel_threshold {
            meshes
                .iter()
                .enumerate()
                .flat_map(|(mesh_index, mesh)| {
                    mesh.faces().iter().enumerate().filter_map(
                        move |(face_index, face)| {
                            test_face(mesh, face, model, ray).map(|t| {
                                Candidate {
                                    mesh_index,
                                    face_index,
                                    t,
                                }
                            })
                        },
                    )
                })
                .reduce(nearer)
        } else {
            meshes
                .par_iter()
                .enumerate()
                .flat_map(|(mesh_index, mesh)| {
                    mesh.faces().par_iter().enumerate().filter_map(
                        move |(face_index, face)| {
                            test_face(mesh, face, model, ray).map(|t| {
                                Candidate {
                                    mesh_index,
                                    face_index,
                                    t,
                                }
                            })
                        },
                    )
                })
                .reduce_with(nearer)
        }
    }
}

/// Distance along `ray` to `face` after moving it into world space.
fn test_face(mesh: &Mesh, face: &Face, model: Mat4, ray: &Ray) -> Option<f32> {
    let [a, b, c] = mesh
        .face_vertices(face)
        .map(|v| model.transform_point3(v.position));
    ray.intersect_triangle(a, b, c).map(|hit| hit.t)
}
