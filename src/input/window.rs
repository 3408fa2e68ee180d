use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

use super::event::{InputEvent, MouseButton};
use super::mouse::ClickTracker;

/// Turns winit window events into [`InputEvent`]s.
///
/// winit reports button presses without a position and has no
/// double-click event, so the adapter tracks the cursor and synthesises
/// [`InputEvent::DoubleClick`] from primary presses.
#[derive(Debug, Clone, Default)]
pub struct WindowInput {
    clicks: ClickTracker,
}

impl WindowInput {
    /// Adapter with no cursor history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for one window event, in the order they should be handled.
    pub fn translate(&mut self, event: &WindowEvent) -> Vec<InputEvent> {
        let (x, y) = self.clicks.cursor;
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                self.clicks.moved(x, y);
                vec![InputEvent::PointerMove { x, y }]
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = MouseButton::from_winit(*button) else {
                    return Vec::new();
                };
                if *state == ElementState::Released {
                    return vec![InputEvent::PointerUp { button }];
                }
                let mut events = vec![InputEvent::PointerDown { button, x, y }];
                if button == MouseButton::Left && self.clicks.press() {
                    events.push(InputEvent::DoubleClick { x, y });
                }
                events
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                vec![InputEvent::Scroll { delta, x, y }]
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                vec![InputEvent::from(modifiers.state())]
            }
            _ => Vec::new(),
        }
    }
}
