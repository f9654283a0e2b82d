//! CPU ray picking against the loaded model.
//!
//! A pick turns a cursor position into a world-space ray, finds the nearest
//! triangle across every mesh, and then tries to snap that hit to one of the
//! triangle's vertices under a screen-space tolerance that scales with hit
//! distance. The result is a pure function of geometry, camera and cursor;
//! nothing is carried between picks.

mod caster;
mod ray;
mod refine;
mod result;

pub use caster::{RayCaster, ViewState, DEFAULT_PARALLEL_THRESHOLD};
pub use ray::{Ray, TriangleHit, EPSILON};
pub use refine::{refine, within_tolerance, POINT_PICK_EPSILON};
pub use result::{FaceHit, PickResult, PickTarget, PointHit};
