//! Snapping a face hit to one of its vertices.

use glam::{Mat4, Vec2, Vec3};

use super::caster::ViewState;
use super::result::{FaceHit, PointHit};

/// Default pick tolerance per unit of hit distance.
pub const POINT_PICK_EPSILON: f32 = 0.02;

/// Whether a vertex `screen_distance` away from the crossing point is close
/// enough to snap to, for a hit `hit_distance` along the ray.
///
/// The tolerance grows linearly with hit distance so the pick radius stays
/// roughly constant on screen under perspective.
#[must_use]
pub fn within_tolerance(
    screen_distance: f32,
    hit_distance: f32,
    epsilon: f32,
) -> bool {
    screen_distance <= epsilon * hit_distance
}

fn clip_xy(clip_from_world: Mat4, world: Vec3) -> Vec2 {
    let clip = clip_from_world * world.extend(1.0);
    Vec2::new(clip.x, clip.y)
}

/// Pick the face vertex nearest to the crossing point on screen, if it lies
/// within the distance-scaled tolerance.
///
/// Vertices go through model, view and projection; the crossing point is
/// already in world space and only goes through view and projection. The
/// distance is taken between clip-space `xy` before the perspective divide.
/// On equal distances the earlier vertex in face order wins.
#[must_use]
pub fn refine(
    face: &FaceHit,
    view: &ViewState,
    epsilon: f32,
) -> Option<PointHit> {
    let clip_from_world = view.projection * view.view;
    let clip_from_model = clip_from_world * view.model;
    let crossing = clip_xy(clip_from_world, face.crossing);

    let (corner, screen_distance) = face
        .vertices
        .iter()
        .map(|v| clip_xy(clip_from_model, v.position).distance(crossing))
        .enumerate()
        .fold(None, |best: Option<(usize, f32)>, (i, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((i, d)),
        })?;

    within_tolerance(screen_distance, face.distance, epsilon).then(|| {
        PointHit {
            index: face.indices[corner],
            vertex: face.vertices[corner],
            screen_distance,
        }
    })
}
