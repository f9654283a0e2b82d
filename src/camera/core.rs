use glam::{Mat4, Quat, Vec2, Vec3};

use crate::options::CameraOptions;

/// Narrowest field of view reachable by zooming, in degrees.
const MIN_FOVY: f32 = 1.0;

/// Steepest look angle above or below the horizon, in degrees.
const MAX_PITCH: f32 = 89.0;

/// Free-fly camera translation directions, relative to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMove {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Toward the view's left.
    Left,
    /// Toward the view's right.
    Right,
    /// Along world up.
    Up,
    /// Against world up.
    Down,
}

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at the configured start pose.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(options.eye),
            target: Vec3::from_array(options.target),
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// View-to-clip matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses [0,1] depth; the far plane is still NDC z = 1
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.view_matrix()
    }

    /// Update the aspect ratio after a viewport resize. Zero-sized viewports
    /// keep the previous aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Turn the view direction in place. `delta` is cursor motion with y
    /// pointing up: x yaws around world up, y pitches around the view's
    /// right axis. Pitch stays within 89° of the horizon.
    pub fn look(&mut self, delta: Vec2, degrees_per_pixel: f32) {
        let forward = self.target - self.eye;
        let distance = forward.length();
        let Some(dir) = forward.try_normalize() else {
            return;
        };

        let yaw = Quat::from_axis_angle(
            self.up,
            (-delta.x * degrees_per_pixel).to_radians(),
        );
        let dir = yaw * dir;

        let pitch = dir.dot(self.up).clamp(-1.0, 1.0).asin().to_degrees();
        let step = (delta.y * degrees_per_pixel)
            .clamp(-MAX_PITCH - pitch, MAX_PITCH - pitch);
        let right = dir.cross(self.up).normalize_or_zero();
        let dir = Quat::from_axis_angle(right, step.to_radians()) * dir;

        self.target = self.eye + dir * distance;
    }

    /// Translate eye and target together.
    pub fn fly(&mut self, direction: CameraMove, distance: f32) {
        let forward = (self.target - self.eye).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let offset = match direction {
            CameraMove::Forward => forward,
            CameraMove::Backward => -forward,
            CameraMove::Left => -right,
            CameraMove::Right => right,
            CameraMove::Up => self.up,
            CameraMove::Down => -self.up,
        } * distance;
        self.eye += offset;
        self.target += offset;
    }

    /// Narrow (positive delta) or widen the field of view, clamped to
    /// `[1°, max_fovy]`.
    pub fn zoom(&mut self, delta: f32, max_fovy: f32) {
        self.fovy = (self.fovy - delta).clamp(MIN_FOVY, max_fovy);
    }
}
