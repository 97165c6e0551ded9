use glam::Vec2;

use super::core::Camera;
use crate::input::{InputState, KeyAction, MouseButton};
use crate::options::{CameraOptions, KeybindingOptions};

/// Drives a [`Camera`] from held keys and mouse drags.
///
/// Speeds are per second (keys) or per pixel (mouse), so the same input
/// covers the same distance regardless of frame rate.
#[derive(Debug, Clone)]
pub struct CameraController {
    move_speed: f32,
    turn_speed: f32,
    rotate_speed: f32,
    bindings: KeybindingOptions,
}

impl CameraController {
    /// Build a controller from camera options and a key map.
    #[must_use]
    pub fn new(options: &CameraOptions, bindings: KeybindingOptions) -> Self {
        Self {
            move_speed: options.move_speed,
            turn_speed: options.turn_speed,
            rotate_speed: options.rotate_speed,
            bindings,
        }
    }

    /// Replace the key map, e.g. after reloading options.
    pub fn set_bindings(&mut self, bindings: KeybindingOptions) {
        self.bindings = bindings;
    }

    /// Apply one tick of input to `camera`.
    ///
    /// Held rotations are applied before held movement, so a tick that both
    /// turns and walks moves along the new heading. Accumulated mouse motion
    /// is always consumed; it only turns the camera while the left button is
    /// held.
    pub fn update(&self, camera: &mut Camera, input: &mut InputState, dt: f32) {
        let (rotations, moves): (Vec<KeyAction>, Vec<KeyAction>) =
            KeyAction::ALL
                .into_iter()
                .filter(|&action| {
                    self.bindings
                        .key_for(action)
                        .is_some_and(|key| input.is_key_pressed(key))
                })
                .partition(|action| action.is_rotation());
        for action in rotations.into_iter().chain(moves) {
            self.apply(camera, action, dt);
        }

        let delta = input.take_mouse_delta();
        let dragging = input.is_mouse_button_pressed(MouseButton::Left);
        if dragging && delta != Vec2::ZERO {
            camera.change_yaw(-delta.x * self.rotate_speed);
            camera.change_pitch(delta.y * self.rotate_speed);
        }
    }

    fn apply(&self, camera: &mut Camera, action: KeyAction, dt: f32) {
        let turn = self.turn_speed * dt;
        let step = self.move_speed * dt;
        match action {
            KeyAction::TurnLeft => camera.change_yaw(turn),
            KeyAction::TurnRight => camera.change_yaw(-turn),
            KeyAction::LookUp => camera.change_pitch(-turn),
            KeyAction::LookDown => camera.change_pitch(turn),
            KeyAction::MoveForward => camera.move_forward(step),
            KeyAction::MoveBackward => camera.move_backward(step),
            KeyAction::MoveLeft => camera.move_left(step),
            KeyAction::MoveRight => camera.move_right(step),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::input::InputEvent;

    fn controller() -> CameraController {
        CameraController::new(
            &CameraOptions::default(),
            KeybindingOptions::default(),
        )
    }

    #[test]
    fn idle_input_leaves_camera_alone() {
        let mut camera = Camera::new(Vec3::ZERO);
        let before = camera.clone();
        controller().update(&mut camera, &mut InputState::new(), 0.016);
        assert_eq!(camera, before);
    }

    #[test]
    fn forward_key_moves_by_speed_times_dt() {
        let mut camera = Camera::new(Vec3::ZERO);
        let mut input = InputState::new();
        input.handle_event(&InputEvent::key_pressed("KeyW"));
        controller().update(&mut camera, &mut input, 0.5);
        // Default move speed is 2 units/s, camera looks along +Y.
        assert!((camera.position() - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn turn_key_changes_yaw() {
        let mut camera = Camera::new(Vec3::ZERO);
        let mut input = InputState::new();
        input.handle_event(&InputEvent::key_pressed("ArrowLeft"));
        controller().update(&mut camera, &mut input, 1.0);
        assert!((camera.yaw() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn mouse_motion_only_turns_while_dragging() {
        let ctrl = controller();
        let mut camera = Camera::new(Vec3::ZERO);
        let mut input = InputState::new();
        input.handle_event(&InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        input.handle_event(&InputEvent::CursorMoved { x: 10.0, y: 5.0 });
        ctrl.update(&mut camera, &mut input, 0.016);
        assert_eq!(camera.yaw(), 90.0);
        // The undragged motion was consumed, not saved for later.
        assert_eq!(input.take_mouse_delta(), Vec2::ZERO);

        input.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        input.handle_event(&InputEvent::CursorMoved { x: 20.0, y: 10.0 });
        ctrl.update(&mut camera, &mut input, 0.016);
        assert!((camera.yaw() - 88.0).abs() < 1e-4);
        assert!((camera.pitch() - 91.0).abs() < 1e-4);
    }

    #[test]
    fn turning_applies_before_walking() {
        let mut camera = Camera::new(Vec3::ZERO);
        let mut input = InputState::new();
        input.handle_event(&InputEvent::key_pressed("KeyW"));
        input.handle_event(&InputEvent::key_pressed("ArrowLeft"));
        controller().update(&mut camera, &mut input, 1.0);
        // Yaw 90 -> 180 first, then 2 units along -X.
        assert!((camera.position() - Vec3::new(-2.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn replaced_bindings_take_effect() {
        let mut ctrl = controller();
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveForward, "KeyI");
        ctrl.set_bindings(bindings);

        let mut camera = Camera::new(Vec3::ZERO);
        let mut input = InputState::new();
        input.handle_event(&InputEvent::key_pressed("KeyW"));
        ctrl.update(&mut camera, &mut input, 1.0);
        assert_eq!(camera.position(), Vec3::ZERO);

        input.handle_event(&InputEvent::key_pressed("KeyI"));
        ctrl.update(&mut camera, &mut input, 0.5);
        assert!((camera.position() - Vec3::Y).length() < 1e-5);
    }
}
