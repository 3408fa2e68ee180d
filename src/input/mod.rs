//! Input handling: pointer/modifier event types, key presses for the
//! calibration console and double-click recognition.

/// Platform-agnostic input events.
pub mod event;
/// Key presses and bindable calibration actions.
pub mod keyboard;
/// Cursor tracking and double-click recognition.
pub mod mouse;
/// winit window-event adapter.
#[cfg(feature = "viewer")]
pub mod window;

pub use event::{InputEvent, MouseButton};
pub use keyboard::{scene_slot, CalibrationAction, KeyPress};
pub use mouse::ClickTracker;
#[cfg(feature = "viewer")]
pub use window::WindowInput;
