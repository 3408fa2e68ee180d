use serde::{Deserialize, Serialize};

/// Calibration console actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// reset_camera = "KeyR"
/// next_scene = "KeyS"
/// ```
///
/// Scene slots `Digit1`..`Digit9` are not bindable; see
/// [`scene_slot`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationAction {
    /// Start the axis-remap test at the first candidate.
    StartTransformTest,
    /// Put the camera back at the two-point-perspective default.
    ResetCamera,
    /// Apply the next scene of the loaded config.
    NextScene,
    /// Step through transform candidates (backwards with shift).
    CycleTransform,
    /// Log the current transform and live camera values.
    ShowTransformInfo,
    /// Log source values next to live camera values.
    CompareValues,
    /// Log the key reference.
    ShowHelp,
}

/// A key press as seen by the calibration console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Physical key in `winit::keyboard::KeyCode` debug format (`"KeyR"`,
    /// `"Digit3"`, ...).
    pub code: String,
    /// Whether shift was held.
    pub shift: bool,
    /// Whether keyboard focus is inside a text field or other form
    /// control.
    pub in_form_control: bool,
}

impl KeyPress {
    /// Press of `code` with no modifiers, outside any form control.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            shift: false,
            in_form_control: false,
        }
    }

    /// Same press with shift held.
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Same press while a form control has focus.
    #[must_use]
    pub fn in_form_control(mut self) -> Self {
        self.in_form_control = true;
        self
    }
}

#[cfg(feature = "viewer")]
impl KeyPress {
    /// Convert a winit key press; releases and unidentified keys give
    /// `None`.
    #[must_use]
    pub fn from_winit(
        event: &winit::event::KeyEvent,
        shift: bool,
    ) -> Option<Self> {
        use winit::keyboard::PhysicalKey;

        if event.state != winit::event::ElementState::Pressed {
            return None;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        Some(Self {
            code: format!("{code:?}"),
            shift,
            in_form_control: false,
        })
    }
}

/// Zero-based scene index for `Digit1`..`Digit9`.
#[must_use]
pub fn scene_slot(code: &str) -> Option<usize> {
    let digit = code.strip_prefix("Digit")?.parse::<usize>().ok()?;
    (1..=9).contains(&digit).then(|| digit - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_slots_cover_one_to_nine() {
        assert_eq!(scene_slot("Digit1"), Some(0));
        assert_eq!(scene_slot("Digit9"), Some(8));
        assert_eq!(scene_slot("Digit0"), None);
        assert_eq!(scene_slot("KeyS"), None);
        assert_eq!(scene_slot("Digit10"), None);
    }

    #[test]
    fn builder_flags() {
        let press = KeyPress::new("KeyT").with_shift().in_form_control();
        assert!(press.shift && press.in_form_control);
        assert_eq!(press.code, "KeyT");
    }
}
