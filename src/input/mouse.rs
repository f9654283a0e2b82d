use glam::Vec2;

use super::event::MouseButton;

/// Tracks cursor position and which buttons are held.
#[derive(Debug, Clone, Default)]
pub(crate) struct MouseState {
    position: Option<Vec2>,
    left: bool,
    right: bool,
}

impl MouseState {
    /// Record a new cursor position and return the motion since the last
    /// one, with y pointing up. The first sample after startup has no
    /// motion.
    pub(crate) fn move_to(&mut self, x: f32, y: f32) -> Vec2 {
        let next = Vec2::new(x, y);
        let offset = self.position.map_or(Vec2::ZERO, |prev| next - prev);
        self.position = Some(next);
        Vec2::new(offset.x, -offset.y)
    }

    /// Last known cursor position in window pixels.
    pub(crate) fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub(crate) fn set_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Right => self.right = pressed,
            MouseButton::Middle => {}
        }
    }

    pub(crate) fn left_held(&self) -> bool {
        self.left
    }

    pub(crate) fn right_held(&self) -> bool {
        self.right
    }
}
