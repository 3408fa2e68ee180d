//! Pointer navigation: orbit around a lazily resolved pivot, pan in the
//! screen plane, zoom towards the cursor, double-click focus, fit and
//! reset.
//!
//! [`NavigationEngine`] consumes [`InputEvent`](crate::input::InputEvent)s
//! and moves the camera held by a [`Viewport`](crate::camera::Viewport).

mod engine;
mod state;

pub use engine::NavigationEngine;
pub use state::{GestureState, Modifiers, PivotState};
