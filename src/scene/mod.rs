//! Render objects composed from meshes, transforms and draw state.
//!
//! The scene owns every [`RenderObject`] in draw order and advances their
//! idle animation once per tick. It never touches GPU state; a renderer
//! walks [`Scene::objects`] and uploads each mesh via
//! [`Mesh::to_buffers`](crate::mesh::Mesh::to_buffers).

mod object;

use std::path::Path;

use glam::Vec3;

pub use object::{RenderObject, ShaderProgram};

use crate::camera::Camera;
use crate::mesh::Mesh;
use crate::options::PathOptions;

/// Degrees an animated sphere turns per tick.
pub const ANIMATION_SPEED: f32 = 5.0;

/// Ordered render objects plus the global animation switch.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<RenderObject>,
    animating: bool,
    paths: PathOptions,
}

impl Scene {
    /// Empty scene resolving shaders and textures through `paths`.
    #[must_use]
    pub fn new(paths: PathOptions) -> Self {
        Self {
            objects: Vec::new(),
            animating: false,
            paths,
        }
    }

    /// Add a textured ground plane of the given half extent, laid flat in
    /// the XY plane.
    pub fn add_ground_plane(&mut self, half_extent: f32, texture: Option<&Path>) {
        let shader = ShaderProgram::textured(&self.paths);
        let mut plane = RenderObject::new(Mesh::plane(half_extent), shader);
        plane.rotate(90.0);
        plane.set_texture(texture.map(|t| self.paths.asset_path(t)));
        self.objects.push(plane);
    }

    /// Add a spinning icosphere centred at `center`.
    pub fn add_sphere(&mut self, size: f32, level: u8, center: Vec3) {
        let shader = ShaderProgram::normals(&self.paths);
        let mut sphere =
            RenderObject::new(Mesh::sub_div_sphere(size, level), shader);
        sphere.translate(center);
        sphere.set_anim_rotation(ANIMATION_SPEED);
        sphere.set_cull_faces(true);
        self.objects.push(sphere);
    }

    /// Place imported meshes one unit in front of `camera`, turned upright.
    ///
    /// Meshes with a material are textured with the material file resolved
    /// against the asset root; the rest get normal shading.
    pub fn add_meshes_in_front_of(&mut self, meshes: Vec<Mesh>, camera: &Camera) {
        let anchor = camera.position() + camera.view_direction();
        let count = meshes.len();
        for mesh in meshes {
            let texture = mesh.material().map(|m| self.paths.asset_path(m));
            let shader = if texture.is_some() {
                ShaderProgram::textured(&self.paths)
            } else {
                ShaderProgram::normals(&self.paths)
            };
            let mut object = RenderObject::new(mesh, shader);
            object.translate(anchor);
            object.rotate(90.0);
            object.set_texture(texture);
            self.objects.push(object);
        }
        log::debug!("placed {count} meshes at {anchor}");
    }

    /// Advance every object's animation if animation is on.
    pub fn tick(&mut self) {
        if self.animating {
            for object in &mut self.objects {
                object.animate();
            }
        }
    }

    /// Turn the idle animation on or off.
    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// Whether [`tick`](Self::tick) animates objects.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Switch every object between wireframe and filled drawing.
    pub fn set_wireframe(&mut self, wireframe: bool) {
        for object in &mut self.objects {
            object.set_wireframe(wireframe);
        }
    }

    /// Objects in draw order.
    #[must_use]
    pub fn objects(&self) -> &[RenderObject] {
        &self.objects
    }

    /// Total vertices across all objects.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.objects.iter().map(|o| o.mesh().vertex_count()).sum()
    }

    /// Total triangles across all objects.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.objects.iter().map(|o| o.mesh().face_count()).sum()
    }
}
