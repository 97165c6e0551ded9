use glam::{Mat4, Vec3};

/// Smallest allowed pitch in degrees. Pitch is measured from +Z, so this is
/// just shy of looking straight up.
pub const MIN_PITCH: f32 = 0.1;
/// Largest allowed pitch in degrees (just shy of looking straight down).
pub const MAX_PITCH: f32 = 179.9;

/// Yaw and pitch a camera starts with: looking along +Y, level with the
/// ground plane.
const DEFAULT_YAW: f32 = 90.0;
const DEFAULT_PITCH: f32 = 90.0;

const WORLD_UP: Vec3 = Vec3::Z;

/// First-person camera in a Z-up world.
///
/// Orientation is stored as yaw (degrees around +Z, counter-clockwise from
/// +X) and pitch (degrees down from +Z, so 90 is level). Every mutating call
/// recomputes the cached view direction and view matrix before returning.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    view_direction: Vec3,
    view: Mat4,
}

impl Camera {
    /// Create a camera at `position`, looking level along +Y.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Create a camera with an explicit orientation. `pitch` is clamped to
    /// [`MIN_PITCH`]..=[`MAX_PITCH`].
    #[must_use]
    pub fn with_orientation(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            yaw,
            pitch: pitch.clamp(MIN_PITCH, MAX_PITCH),
            view_direction: Vec3::Y,
            view: Mat4::IDENTITY,
        };
        camera.update_view();
        camera
    }

    /// Turn around the world up axis. Yaw is not wrapped.
    pub fn change_yaw(&mut self, delta: f32) {
        self.yaw += delta;
        self.update_view();
    }

    /// Tilt up or down; the result is clamped away from the poles.
    pub fn change_pitch(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta).clamp(MIN_PITCH, MAX_PITCH);
        self.update_view();
    }

    /// Move along the full 3D view direction.
    pub fn move_forward(&mut self, dist: f32) {
        self.position += self.view_direction * dist;
        self.update_view();
    }

    /// Move against the full 3D view direction.
    pub fn move_backward(&mut self, dist: f32) {
        self.position -= self.view_direction * dist;
        self.update_view();
    }

    /// Strafe left. Strafing only uses yaw, so it stays level whatever the
    /// pitch.
    pub fn move_left(&mut self, dist: f32) {
        self.strafe(self.yaw + 90.0, dist);
    }

    /// Strafe right, level with the ground.
    pub fn move_right(&mut self, dist: f32) {
        self.strafe(self.yaw - 90.0, dist);
    }

    /// Teleport the camera without changing its orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_view();
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit vector the camera looks along.
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        self.view_direction
    }

    /// Current yaw in degrees (unbounded).
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees, always within the clamp range.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// World-to-eye transform for the current state.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// Combined projection-view matrix.
    #[must_use]
    pub fn view_projection(&self, projection: &Projection) -> Mat4 {
        projection.matrix() * self.view
    }

    fn strafe(&mut self, heading: f32, dist: f32) {
        let (sin, cos) = heading.to_radians().sin_cos();
        self.position += Vec3::new(cos, sin, 0.0) * dist;
        self.update_view();
    }

    fn update_view(&mut self) {
        self.view_direction = view_direction(self.yaw, self.pitch);

        let target = self.position + self.view_direction;
        let forward = (self.position - target).normalize();
        let right = forward.cross(WORLD_UP);
        // Unreachable while pitch stays clamped.
        assert!(
            right.length_squared() > f32::EPSILON * f32::EPSILON,
            "view direction is parallel to world up"
        );
        let up = right.cross(forward).normalize();

        self.view = Mat4::look_at_rh(self.position, target, up);
    }
}

/// Spherical-to-Cartesian view direction for yaw/pitch in degrees, with
/// pitch measured from +Z.
#[must_use]
pub fn view_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.to_radians().sin_cos();
    let (sin_pitch, cos_pitch) = pitch.to_radians().sin_cos();
    Vec3::new(sin_pitch * cos_yaw, sin_pitch * sin_yaw, cos_pitch)
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            aspect: 16.0 / 9.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Projection {
    /// Build the projection matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        // OpenGL clip space: depth in [-1, 1]
        Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Update the aspect ratio for a new viewport size. A zero height
    /// (minimized window) keeps the previous aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}
