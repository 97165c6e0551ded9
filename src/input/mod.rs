//! Input handling: platform-agnostic events, held-key/mouse state, and the
//! camera actions keys can be bound to.

/// Platform-agnostic input events.
pub mod event;
/// Bindable camera actions.
pub mod keyboard;
/// Held keys, held buttons and accumulated cursor motion.
pub mod state;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use state::InputState;
