use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// turn_left = "ArrowLeft"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Turn left (increase yaw).
    TurnLeft,
    /// Turn right (decrease yaw).
    TurnRight,
    /// Tilt the view up (decrease pitch).
    LookUp,
    /// Tilt the view down (increase pitch).
    LookDown,
    /// Move along the view direction.
    MoveForward,
    /// Move against the view direction.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
}

impl KeyAction {
    /// Every bindable action.
    pub const ALL: [Self; 8] = [
        Self::TurnLeft,
        Self::TurnRight,
        Self::LookUp,
        Self::LookDown,
        Self::MoveForward,
        Self::MoveBackward,
        Self::MoveLeft,
        Self::MoveRight,
    ];

    /// Whether this action rotates rather than translates the camera.
    #[must_use]
    pub const fn is_rotation(self) -> bool {
        matches!(
            self,
            Self::TurnLeft | Self::TurnRight | Self::LookUp | Self::LookDown
        )
    }
}
