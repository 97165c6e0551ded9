/// Platform-agnostic input events.
///
/// Hosts translate their window-system events into these and feed them to
/// an [`InputState`](super::InputState). Keys are identified by the
/// `winit::keyboard::KeyCode` debug string (`"KeyW"`, `"ArrowLeft"`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key went down or up.
    Key {
        /// Physical key code string.
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The window lost focus; everything held is released.
    FocusLost,
}

impl InputEvent {
    /// Shorthand for a key press.
    #[must_use]
    pub fn key_pressed(code: &str) -> Self {
        Self::Key {
            code: code.to_owned(),
            pressed: true,
        }
    }

    /// Shorthand for a key release.
    #[must_use]
    pub fn key_released(code: &str) -> Self {
        Self::Key {
            code: code.to_owned(),
            pressed: false,
        }
    }
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
