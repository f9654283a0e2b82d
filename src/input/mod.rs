//! Input handling: event types, mouse tracking, and the input processor
//! that converts raw window events into viewer commands.

/// Platform-agnostic input events.
pub mod event;
/// Cursor position and button tracking.
pub(crate) mod mouse;
/// Converts raw events into viewer commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
