use glam::{Vec2, Vec3};

use crate::input::MouseButton;

/// Pointer gesture in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GestureState {
    /// No button held.
    #[default]
    Idle,
    /// A button is held; deltas are measured from `last`.
    Dragging {
        /// Button that started the drag.
        button: MouseButton,
        /// Cursor position of the previous event.
        last: Vec2,
    },
}

impl GestureState {
    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Rotation center cached across orbit deltas.
///
/// Resolved on the first orbit delta after an invalidation and then held,
/// across pointer releases too, until a pan, zoom, focus, fit or reset
/// moves the view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PivotState {
    /// Nothing cached; the next orbit delta asks the resolver.
    #[default]
    Unresolved,
    /// Orbit around this point.
    Resolved(Vec3),
    /// The resolver found no point; orbit around the pivot target in
    /// spherical coordinates until the next invalidation.
    Fallback,
}

impl PivotState {
    /// The cached point, if any.
    #[must_use]
    pub fn point(&self) -> Option<Vec3> {
        match self {
            Self::Resolved(point) => Some(*point),
            Self::Unresolved | Self::Fallback => None,
        }
    }
}

/// Modifier keys as last reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift held.
    pub shift: bool,
    /// Ctrl or command held.
    pub ctrl: bool,
}
