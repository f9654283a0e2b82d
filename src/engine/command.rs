//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture, a GUI control or a programmatic call, is represented as a
//! `ViewerCommand`. Consumers construct commands and pass them to
//! [`ModelViewer::execute`](super::ModelViewer::execute).

use glam::Vec2;

use crate::camera::CameraMove;
use crate::selection::Confirmation;

// ── Commands ─────────────────────────────────────────────────────────────

/// A discrete or parameterized operation the viewer can perform.
///
/// The viewer never cares *how* a command was triggered:
///
/// ```ignore
/// viewer.execute(ViewerCommand::ToggleLine);
/// viewer.execute(ViewerCommand::Scroll { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    // ── Selection ───────────────────────────────────────────────────
    /// Pick under the cursor and refresh the live preview.
    PickAt {
        /// Cursor x in window pixels.
        x: f32,
        /// Cursor y in window pixels (origin top-left).
        y: f32,
    },

    /// Toggle the current pick in the persistent highlight sets.
    ConfirmHighlight,

    /// Report the current pick without changing any set.
    InspectSelection,

    /// Enter or leave select mode.
    SetSelectMode {
        /// Whether select mode is on.
        enabled: bool,
    },

    // ── View mode ───────────────────────────────────────────────────
    /// Toggle the shaded fill pass.
    ToggleFill,
    /// Toggle the wireframe pass.
    ToggleLine,
    /// Toggle the vertex pass.
    TogglePoint,
    /// Toggle the lamp marker.
    ToggleLamp,
    /// Toggle free-fly camera mode.
    ToggleCameraMode,

    /// Leave select mode, else camera mode, else ask the host to close.
    Cancel,

    /// Restore the start camera pose and the identity model transform.
    ResetView,

    // ── Model transform ─────────────────────────────────────────────
    /// Rotate the model by `delta` pixels of mouse movement.
    RotateModel {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the model by `delta` pixels of mouse movement.
    PanModel {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Scroll wheel: zooms in camera mode, scales the model otherwise.
    Scroll {
        /// Scroll amount (positive = closer / larger).
        delta: f32,
    },

    // ── Camera ──────────────────────────────────────────────────────
    /// Turn the camera in camera mode.
    LookCamera {
        /// Cursor delta in pixels.
        delta: Vec2,
    },

    /// Step the camera along a view-relative direction.
    MoveCamera {
        /// View-relative direction.
        direction: CameraMove,
    },

    /// The window's drawable area changed.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

/// What a command did, for hosts that react to state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing observable changed.
    Ignored,
    /// View state changed; redraw and refresh the title.
    Updated,
    /// A highlight toggle ran.
    Confirmed(Confirmation),
    /// The select-panel text of the current pick.
    Inspected(String),
    /// `Cancel` ran with no mode left to leave.
    CloseRequested,
}
