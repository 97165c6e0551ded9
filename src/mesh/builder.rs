use glam::{Vec2, Vec3};

use super::MeshError;

/// Indexed triangle mesh with optional per-vertex normals and texture
/// coordinates.
///
/// Normals and texture coordinates are all-or-nothing: when present their
/// arrays are parallel to the position array. The builder methods trust
/// their callers; [`validate`](Self::validate) checks the invariants before
/// the mesh is handed to a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    faces: Vec<[u32; 3]>,
    material: Option<String>,
}

impl Mesh {
    /// Create an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position without touching the other attribute arrays.
    pub fn add_vertex_position(&mut self, x: f32, y: f32, z: f32) {
        self.positions.push(Vec3::new(x, y, z));
    }

    /// Append several positions.
    pub fn add_vertex_positions(&mut self, positions: &[Vec3]) {
        self.positions.extend_from_slice(positions);
    }

    /// Append a normal without touching the other attribute arrays.
    pub fn add_vertex_normal(&mut self, x: f32, y: f32, z: f32) {
        self.normals.push(Vec3::new(x, y, z));
    }

    /// Append a texture coordinate.
    pub fn add_vertex_tex_coord(&mut self, u: f32, v: f32) {
        self.tex_coords.push(Vec2::new(u, v));
    }

    /// Append several texture coordinates.
    pub fn add_vertex_tex_coords(&mut self, tex_coords: &[Vec2]) {
        self.tex_coords.extend_from_slice(tex_coords);
    }

    /// Append a position and its normal together, returning the new vertex
    /// index.
    ///
    /// # Panics
    ///
    /// If the normal array is not parallel to the position array.
    pub fn add_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        assert_eq!(
            self.normals.len(),
            self.positions.len(),
            "add_vertex on a mesh whose normals are not parallel to positions"
        );
        let index = self.next_index();
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    /// Append `position` projected onto the unit sphere, returning the new
    /// vertex index.
    ///
    /// # Panics
    ///
    /// If `position` has zero length.
    pub fn add_normalized_vertex(&mut self, position: Vec3) -> u32 {
        assert!(
            position.length_squared() > 0.0,
            "cannot normalize a zero-length vertex"
        );
        let index = self.next_index();
        self.positions.push(position.normalize());
        index
    }

    /// Append a triangle.
    ///
    /// # Panics
    ///
    /// If any index does not refer to an existing vertex.
    pub fn add_face(&mut self, face: [u32; 3]) {
        let vertex_count = self.positions.len();
        assert!(
            face.iter().all(|&i| (i as usize) < vertex_count),
            "face {face:?} references a vertex past {vertex_count}"
        );
        self.faces.push(face);
    }

    /// Uniformly scale every position about the origin.
    pub fn scale(&mut self, factor: f32) {
        for position in &mut self.positions {
            *position *= factor;
        }
    }

    /// Vertex positions.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Vertex normals (empty when the mesh carries none).
    #[must_use]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Texture coordinates (empty when the mesh carries none).
    #[must_use]
    pub fn tex_coords(&self) -> &[Vec2] {
        &self.tex_coords
    }

    /// Triangles as vertex index triples.
    #[must_use]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh carries per-vertex normals.
    #[must_use]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Whether the mesh carries texture coordinates.
    #[must_use]
    pub fn has_tex_coords(&self) -> bool {
        !self.tex_coords.is_empty()
    }

    /// Material (texture) name, relative to the asset root.
    #[must_use]
    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// Set or clear the material name.
    pub fn set_material(&mut self, material: Option<String>) {
        self.material = material;
    }

    /// Check the attribute-parity and face-index invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`MeshError`] describing the first violation.
    pub fn validate(&self) -> Result<(), MeshError> {
        let positions = self.positions.len();
        if self.has_normals() && self.normals.len() != positions {
            return Err(MeshError::NormalCountMismatch {
                normals: self.normals.len(),
                positions,
            });
        }
        if self.has_tex_coords() && self.tex_coords.len() != positions {
            return Err(MeshError::TexCoordCountMismatch {
                tex_coords: self.tex_coords.len(),
                positions,
            });
        }
        for (face_idx, face) in self.faces.iter().enumerate() {
            if let Some(&index) =
                face.iter().find(|&&i| i as usize >= positions)
            {
                return Err(MeshError::FaceIndexOutOfRange {
                    face: face_idx,
                    index,
                    vertex_count: positions,
                });
            }
        }
        Ok(())
    }

    pub(super) fn next_index(&self) -> u32 {
        self.positions.len() as u32
    }

    pub(super) fn push_tex_coord(&mut self, tex_coord: Vec2) {
        self.tex_coords.push(tex_coord);
    }

    pub(super) fn take_faces(&mut self) -> Vec<[u32; 3]> {
        std::mem::take(&mut self.faces)
    }

    pub(super) fn set_faces(&mut self, faces: Vec<[u32; 3]>) {
        self.faces = faces;
    }
}
