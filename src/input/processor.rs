//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held buttons, the control modifier) and the key-binding map. It is the
//! only thing that sits between raw window events and the viewer's
//! [`execute`](crate::ModelViewer::execute) method.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::mouse::MouseState;
use crate::camera::CameraMove;
use crate::engine::{ViewMode, ViewerCommand};

/// Maps physical key strings to [`ViewerCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyF"`, `"Escape"`, etc.
///
/// Only *discrete* commands make sense as key bindings. Parameterized
/// commands like `RotateModel` come from the mouse, not key lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`ViewerCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Toggle the fill pass.
    ToggleFill,
    /// Toggle the wireframe pass.
    ToggleLine,
    /// Toggle the vertex pass.
    TogglePoint,
    /// Toggle the lamp marker.
    ToggleLamp,
    /// Toggle free-fly camera mode.
    ToggleCameraMode,
    /// Reset camera pose and model transform.
    ResetView,
    /// Leave the innermost mode.
    Cancel,
    /// Step the camera forward.
    MoveForward,
    /// Step the camera backward.
    MoveBackward,
    /// Step the camera left.
    MoveLeft,
    /// Step the camera right.
    MoveRight,
    /// Step the camera up.
    MoveUp,
    /// Step the camera down.
    MoveDown,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`ViewerCommand`].
    fn to_command(self) -> ViewerCommand {
        let step = |direction| ViewerCommand::MoveCamera { direction };
        match self {
            Self::ToggleFill => ViewerCommand::ToggleFill,
            Self::ToggleLine => ViewerCommand::ToggleLine,
            Self::TogglePoint => ViewerCommand::TogglePoint,
            Self::ToggleLamp => ViewerCommand::ToggleLamp,
            Self::ToggleCameraMode => ViewerCommand::ToggleCameraMode,
            Self::ResetView => ViewerCommand::ResetView,
            Self::Cancel => ViewerCommand::Cancel,
            Self::MoveForward => step(CameraMove::Forward),
            Self::MoveBackward => step(CameraMove::Backward),
            Self::MoveLeft => step(CameraMove::Left),
            Self::MoveRight => step(CameraMove::Right),
            Self::MoveUp => step(CameraMove::Up),
            Self::MoveDown => step(CameraMove::Down),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyF".into(), KeyCommandTag::ToggleFill),
            ("KeyL".into(), KeyCommandTag::ToggleLine),
            ("KeyP".into(), KeyCommandTag::TogglePoint),
            ("KeyG".into(), KeyCommandTag::ToggleLamp),
            ("KeyC".into(), KeyCommandTag::ToggleCameraMode),
            ("KeyR".into(), KeyCommandTag::ResetView),
            ("Escape".into(), KeyCommandTag::Cancel),
            ("KeyW".into(), KeyCommandTag::MoveForward),
            ("KeyS".into(), KeyCommandTag::MoveBackward),
            ("KeyA".into(), KeyCommandTag::MoveLeft),
            ("KeyD".into(), KeyCommandTag::MoveRight),
            ("KeyQ".into(), KeyCommandTag::MoveUp),
            ("KeyE".into(), KeyCommandTag::MoveDown),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ViewerCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event, viewer.mode()) {
///     viewer.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyF") {
///     viewer.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Cursor and button tracking.
    mouse: MouseState,
    /// Whether a control modifier is currently held.
    ctrl_pressed: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current cursor position in physical pixels, once known.
    #[must_use]
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.mouse.position().map(|p| (p.x, p.y))
    }

    /// Whether a control modifier is held.
    #[must_use]
    pub fn ctrl_pressed(&self) -> bool {
        self.ctrl_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewerCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// `mode` is the viewer's current mode; it decides whether cursor
    /// motion picks, drags the model, or turns the camera.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        mode: ViewMode,
    ) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(x, y, mode)
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed, mode)
            }
            InputEvent::Scroll { delta } => {
                Some(ViewerCommand::Scroll { delta })
            }
            InputEvent::ModifiersChanged { ctrl } => {
                if ctrl == self.ctrl_pressed {
                    return None;
                }
                self.ctrl_pressed = ctrl;
                Some(ViewerCommand::SetSelectMode { enabled: ctrl })
            }
        }
    }

    /// Cursor moved: camera look, model drag, or a pick, in that order.
    fn handle_cursor_moved(
        &mut self,
        x: f32,
        y: f32,
        mode: ViewMode,
    ) -> Option<ViewerCommand> {
        let delta = self.mouse.move_to(x, y);

        if mode.camera {
            return Some(ViewerCommand::LookCamera { delta });
        }
        if self.mouse.left_held() {
            return Some(ViewerCommand::RotateModel { delta });
        }
        if self.mouse.right_held() {
            return Some(ViewerCommand::PanModel { delta });
        }
        mode.select.then_some(ViewerCommand::PickAt { x, y })
    }

    /// Button change. Held buttons always drive drags; in select mode a
    /// press also inspects (left) or confirms (right) the current pick.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        mode: ViewMode,
    ) -> Option<ViewerCommand> {
        self.mouse.set_button(button, pressed);
        if !pressed || !mode.select || mode.camera {
            return None;
        }
        match button {
            MouseButton::Left => Some(ViewerCommand::InspectSelection),
            MouseButton::Right => Some(ViewerCommand::ConfirmHighlight),
            MouseButton::Middle => None,
        }
    }
}
