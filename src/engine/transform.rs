//! Interactive model placement driven by mouse drags and the wheel.

use glam::{Mat4, Vec2, Vec3};

/// Radians of rotation per pixel of drag at unit scale.
const ROTATE_PER_PIXEL: f32 = 0.005;
/// World units of translation per pixel of drag at unit scale.
const PAN_PER_PIXEL: f32 = 0.0004;
/// Scale change per unit of scroll.
const SCALE_PER_SCROLL: f32 = 0.03;
/// Smallest reachable uniform scale.
const MIN_SCALE: f32 = 0.1;

/// Translation, uniform scale and XYZ Euler rotation of the loaded model.
///
/// Drag sensitivity is divided by the current scale so a magnified model
/// does not spin or slide faster on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    /// Translation.
    pub position: Vec3,
    /// Uniform scale, never below 0.1.
    pub scale: f32,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            rotation: Vec3::ZERO,
        }
    }
}

impl ModelTransform {
    /// Model-to-world matrix: `basis * T * S * Rx * Ry * Rz`.
    #[must_use]
    pub fn matrix(&self, basis: Mat4) -> Mat4 {
        basis
            * Mat4::from_translation(self.position)
            * Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
    }

    /// Rotate by a drag `delta` (pixels, y up): horizontal motion spins
    /// around Y, vertical motion tilts around X.
    pub fn rotate(&mut self, delta: Vec2) {
        let k = ROTATE_PER_PIXEL / self.scale;
        self.rotation.x -= delta.y * k;
        self.rotation.y += delta.x * k;
    }

    /// Translate in the XY plane by a drag `delta` (pixels, y up).
    pub fn pan(&mut self, delta: Vec2) {
        let k = PAN_PER_PIXEL / self.scale;
        self.position.x += delta.x * k;
        self.position.y += delta.y * k;
    }

    /// Grow (positive) or shrink the model, clamped at 0.1.
    pub fn scroll(&mut self, delta: f32) {
        self.scale = (self.scale + delta * SCALE_PER_SCROLL).max(MIN_SCALE);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn identity_by_default() {
        let t = ModelTransform::default();
        assert_eq!(t.matrix(Mat4::IDENTITY), Mat4::IDENTITY);
    }

    #[test]
    fn composition_order() {
        let t = ModelTransform {
            position: Vec3::new(1.0, 0.0, 0.0),
            scale: 2.0,
            rotation: Vec3::new(0.0, FRAC_PI_2, 0.0),
        };
        // Rotate (1,0,0) to (0,0,-1), scale to (0,0,-2), then translate
        let p = t.matrix(Mat4::IDENTITY).transform_point3(Vec3::X);
        assert!((p - Vec3::new(1.0, 0.0, -2.0)).length() < 1e-5, "{p:?}");

        let basis = Mat4::from_translation(Vec3::Y);
        let q = t.matrix(basis).transform_point3(Vec3::X);
        assert!((q - Vec3::new(1.0, 1.0, -2.0)).length() < 1e-5);
    }

    #[test]
    fn drag_sensitivity_scales_inversely() {
        let mut t = ModelTransform::default();
        t.rotate(Vec2::new(100.0, 100.0));
        assert!((t.rotation.y - 0.5).abs() < 1e-6);
        assert!((t.rotation.x + 0.5).abs() < 1e-6);

        let mut big = ModelTransform {
            scale: 2.0,
            ..ModelTransform::default()
        };
        big.pan(Vec2::new(1000.0, -500.0));
        assert!((big.position.x - 0.2).abs() < 1e-6);
        assert!((big.position.y + 0.1).abs() < 1e-6);
    }

    #[test]
    fn scroll_clamps_scale() {
        let mut t = ModelTransform::default();
        t.scroll(10.0);
        assert!((t.scale - 1.3).abs() < 1e-6);
        t.scroll(-1000.0);
        assert_eq!(t.scale, MIN_SCALE);
    }
}
