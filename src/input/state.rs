//! Held input state sampled once per tick.
//!
//! Key presses are set inserts, so auto-repeat presses from the window
//! system are harmless.

use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::{InputEvent, MouseButton};

/// Keys and mouse buttons currently held, plus cursor motion accumulated
/// since the last [`take_mouse_delta`](InputState::take_mouse_delta).
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: FxHashSet<String>,
    buttons: FxHashSet<MouseButton>,
    last_cursor: Option<Vec2>,
    mouse_delta: Vec2,
}

impl InputState {
    /// Create an empty state (nothing held, no motion).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the state.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Key { code, pressed } => {
                if *pressed {
                    let _ = self.keys.insert(code.clone());
                } else {
                    let _ = self.keys.remove(code);
                }
            }
            InputEvent::CursorMoved { x, y } => {
                let cursor = Vec2::new(*x, *y);
                if let Some(last) = self.last_cursor {
                    self.mouse_delta += cursor - last;
                }
                self.last_cursor = Some(cursor);
            }
            InputEvent::MouseButton { button, pressed } => {
                if *pressed {
                    let _ = self.buttons.insert(*button);
                } else {
                    let _ = self.buttons.remove(button);
                }
            }
            InputEvent::FocusLost => {
                self.keys.clear();
                self.buttons.clear();
                self.last_cursor = None;
                self.mouse_delta = Vec2::ZERO;
            }
        }
    }

    /// Whether the key with this code string is held.
    #[must_use]
    pub fn is_key_pressed(&self, code: &str) -> bool {
        self.keys.contains(code)
    }

    /// Whether the mouse button is held.
    #[must_use]
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    /// Return the cursor motion since the previous call and reset it.
    pub fn take_mouse_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.mouse_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_press_and_release() {
        let mut state = InputState::new();
        state.handle_event(&InputEvent::key_pressed("KeyW"));
        state.handle_event(&InputEvent::key_pressed("KeyW"));
        assert!(state.is_key_pressed("KeyW"));
        state.handle_event(&InputEvent::key_released("KeyW"));
        assert!(!state.is_key_pressed("KeyW"));
    }

    #[test]
    fn first_cursor_sample_produces_no_delta() {
        let mut state = InputState::new();
        state.handle_event(&InputEvent::CursorMoved { x: 100.0, y: 50.0 });
        assert_eq!(state.take_mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn cursor_motion_accumulates_until_taken() {
        let mut state = InputState::new();
        state.handle_event(&InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        state.handle_event(&InputEvent::CursorMoved { x: 3.0, y: 1.0 });
        state.handle_event(&InputEvent::CursorMoved { x: 5.0, y: -2.0 });
        assert_eq!(state.take_mouse_delta(), Vec2::new(5.0, -2.0));
        assert_eq!(state.take_mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut state = InputState::new();
        state.handle_event(&InputEvent::key_pressed("KeyA"));
        state.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        state.handle_event(&InputEvent::FocusLost);
        assert!(!state.is_key_pressed("KeyA"));
        assert!(!state.is_mouse_button_pressed(MouseButton::Left));
    }
}
