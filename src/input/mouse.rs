use std::time::{Duration, Instant};

/// Two primary presses closer than this count as a double-click.
pub const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(400);

/// Cursor travel (pixels) beyond which two presses are separate clicks.
const DOUBLE_CLICK_SLOP: f32 = 4.0;

/// Tracks the cursor and recognises double-clicks from raw presses.
///
/// Window systems that do not report double-clicks themselves feed every
/// primary press through [`press`](Self::press).
#[derive(Debug, Clone)]
pub struct ClickTracker {
    /// Last known cursor position in physical pixels.
    pub cursor: (f32, f32),
    last_press: Option<(Instant, (f32, f32))>,
}

impl ClickTracker {
    /// Tracker with no press history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: (0.0, 0.0),
            last_press: None,
        }
    }

    /// Update the cursor position.
    pub fn moved(&mut self, x: f32, y: f32) {
        self.cursor = (x, y);
    }

    /// Record a primary press at the current cursor position and return
    /// whether it completes a double-click.
    pub fn press(&mut self) -> bool {
        self.press_at(Instant::now())
    }

    fn press_at(&mut self, now: Instant) -> bool {
        let (x, y) = self.cursor;
        let double = self.last_press.is_some_and(|(then, (px, py))| {
            now.duration_since(then) < DOUBLE_CLICK_THRESHOLD
                && (x - px).hypot(y - py) <= DOUBLE_CLICK_SLOP
        });
        // A completed double-click does not start the next one.
        self.last_press = (!double).then_some((now, self.cursor));
        double
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new()
    }
}
