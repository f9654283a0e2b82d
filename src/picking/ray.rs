//! World-space rays and ray–triangle intersection.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Determinant and barycentric slack for the intersection test.
pub const EPSILON: f32 = 1e-7;

/// A half-line from `origin` along the unit vector `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point (the camera eye for picking rays).
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

/// Where a ray crosses a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Distance along the ray.
    pub t: f32,
    /// Barycentric weight of the second vertex.
    pub u: f32,
    /// Barycentric weight of the third vertex.
    pub v: f32,
}

impl Ray {
    /// Ray from `origin` toward `direction`, or `None` if the direction is
    /// zero or not finite.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Ray from `origin` through the cursor pixel.
    ///
    /// The cursor is unprojected onto the far clip plane (NDC z = 1) and the
    /// ray points from `origin` toward that world-space point. Cursor
    /// coordinates are window pixels with the origin at the top-left.
    /// Returns `None` for an empty viewport or a degenerate unprojection.
    #[must_use]
    pub fn from_screen(
        origin: Vec3,
        view: Mat4,
        projection: Mat4,
        cursor: Vec2,
        viewport: (u32, u32),
    ) -> Option<Self> {
        let (width, height) = viewport;
        if width == 0 || height == 0 {
            return None;
        }
        let x = 2.0 * cursor.x / width as f32 - 1.0;
        let y = 1.0 - 2.0 * cursor.y / height as f32;

        let world =
            (projection * view).inverse() * Vec4::new(x, y, 1.0, 1.0);
        if world.w.abs() < EPSILON {
            return None;
        }
        let far_point = world.truncate() / world.w;
        Self::new(origin, far_point - origin)
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Möller–Trumbore intersection against the triangle `(v0, v1, v2)`.
    ///
    /// Two-sided and edge-inclusive. A near-zero determinant (ray parallel
    /// to the triangle plane) and hits at or behind the origin yield `None`.
    #[must_use]
    pub fn intersect_triangle(
        &self,
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
    ) -> Option<TriangleHit> {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let p = self.direction.cross(edge2);
        let det = edge1.dot(p);
        if det.abs() < EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = self.origin - v0;
        let u = s.dot(p) * inv_det;
        if !(-EPSILON..=1.0 + EPSILON).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = self.direction.dot(q) * inv_det;
        if v < -EPSILON || u + v > 1.0 + EPSILON {
            return None;
        }

        let t = edge2.dot(q) * inv_det;
        (t > 0.0).then_some(TriangleHit { t, u, v })
    }
}
