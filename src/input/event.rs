/// Platform-agnostic pointer and modifier events.
///
/// These are fed into a
/// [`NavigationEngine`](crate::navigation::NavigationEngine), which turns
/// them into orbit, pan, zoom and focus operations.
///
/// Coordinates are in physical pixels with the origin at the top-left
/// corner of the viewport.
///
/// # Example
///
/// ```ignore
/// let changed = engine.handle_event(
///     InputEvent::PointerMove { x: 100.0, y: 200.0 },
///     &mut viewport,
///     &scene,
/// )?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button went down.
    PointerDown {
        /// Which button.
        button: MouseButton,
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Cursor moved to an absolute position.
    PointerMove {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// A button went up.
    PointerUp {
        /// Which button.
        button: MouseButton,
    },
    /// Scroll wheel at a cursor position.
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
        /// Horizontal cursor position.
        x: f32,
        /// Vertical cursor position.
        y: f32,
    },
    /// Two primary clicks in quick succession.
    DoubleClick {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
        /// Whether ctrl (or the platform command key) is held.
        ctrl: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl MouseButton {
    /// Map a winit button; extra buttons have no navigation role.
    #[must_use]
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Right => Some(Self::Right),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            _ => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::ModifiersState> for InputEvent {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        Self::ModifiersChanged {
            shift: state.shift_key(),
            ctrl: state.control_key() || state.super_key(),
        }
    }
}
