//! First-person camera for a Z-up world.
//!
//! [`Camera`] owns yaw/pitch orientation and a cached view matrix,
//! [`Projection`] the perspective parameters, and [`CameraController`]
//! maps held input onto camera motion each tick.

/// Keyboard and mouse-look controller.
pub mod controller;
/// Yaw/pitch camera and perspective projection.
pub mod core;

pub use controller::CameraController;
pub use core::{view_direction, Camera, Projection, MAX_PITCH, MIN_PITCH};
