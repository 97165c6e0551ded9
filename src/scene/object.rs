use std::path::{Path, PathBuf};

use glam::{Mat4, Vec3};

use crate::mesh::Mesh;
use crate::options::PathOptions;

/// Vertex and fragment shader sources an object is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderProgram {
    /// Vertex stage source file.
    pub vertex: PathBuf,
    /// Fragment stage source file.
    pub fragment: PathBuf,
}

impl ShaderProgram {
    /// Unlit textured shading.
    #[must_use]
    pub fn textured(paths: &PathOptions) -> Self {
        Self {
            vertex: paths.shader_path("texture_noshade_vs.glsl"),
            fragment: paths.shader_path("texture_noshade_fs.glsl"),
        }
    }

    /// Normal-visualising shading for untextured meshes.
    #[must_use]
    pub fn normals(paths: &PathOptions) -> Self {
        Self {
            vertex: paths.shader_path("normal_vs.glsl"),
            fragment: paths.shader_path("normal_fs.glsl"),
        }
    }
}

/// A mesh placed in the world with its draw state.
///
/// Transforms compose in object space: each `rotate`/`translate`
/// post-multiplies the model matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderObject {
    mesh: Mesh,
    model: Mat4,
    shader: ShaderProgram,
    texture: Option<PathBuf>,
    anim_rotation: f32,
    cull_faces: bool,
    wireframe: bool,
}

impl RenderObject {
    /// Wrap `mesh` with an identity transform.
    #[must_use]
    pub fn new(mesh: Mesh, shader: ShaderProgram) -> Self {
        Self {
            mesh,
            model: Mat4::IDENTITY,
            shader,
            texture: None,
            anim_rotation: 0.0,
            cull_faces: false,
            wireframe: false,
        }
    }

    /// Rotate by `degrees` about the object's X axis.
    pub fn rotate(&mut self, degrees: f32) {
        self.model *= Mat4::from_rotation_x(degrees.to_radians());
    }

    /// Move by `offset` in object space.
    pub fn translate(&mut self, offset: Vec3) {
        self.model *= Mat4::from_translation(offset);
    }

    /// Advance the idle animation by one step.
    pub fn animate(&mut self) {
        if self.anim_rotation != 0.0 {
            self.rotate(self.anim_rotation);
        }
    }

    /// Degrees to rotate per [`animate`](Self::animate) call.
    pub fn set_anim_rotation(&mut self, degrees: f32) {
        self.anim_rotation = degrees;
    }

    /// Texture image file, already resolved against the asset root.
    pub fn set_texture(&mut self, texture: Option<PathBuf>) {
        self.texture = texture;
    }

    /// Enable back-face culling.
    pub fn set_cull_faces(&mut self, cull: bool) {
        self.cull_faces = cull;
    }

    /// Draw edges only.
    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.wireframe = wireframe;
    }

    /// Clip-space transform for this object given `projection * view`.
    #[must_use]
    pub fn model_view_projection(&self, pv: Mat4) -> Mat4 {
        pv * self.model
    }

    /// Geometry drawn by this object.
    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Object-to-world transform.
    #[must_use]
    pub fn model(&self) -> Mat4 {
        self.model
    }

    /// Shader sources.
    #[must_use]
    pub fn shader(&self) -> &ShaderProgram {
        &self.shader
    }

    /// Resolved texture path, if textured.
    #[must_use]
    pub fn texture(&self) -> Option<&Path> {
        self.texture.as_deref()
    }

    /// Whether back faces are culled.
    #[must_use]
    pub fn cull_faces(&self) -> bool {
        self.cull_faces
    }

    /// Whether the object draws as lines.
    #[must_use]
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }
}
