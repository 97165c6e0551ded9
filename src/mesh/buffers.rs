use super::{Mesh, MeshError};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Interleaved vertex layout handed to the renderer.
///
/// Attributes a mesh does not carry are zero-filled; the renderer picks a
/// shader from [`MeshBuffers::has_normals`] / [`MeshBuffers::has_tex_coords`].
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit normal, or zero.
    pub normal: [f32; 3],
    /// Texture coordinate, or zero.
    pub tex_coord: [f32; 2],
}

/// Upload-ready copy of a validated [`Mesh`].
///
/// Building this is a one-way step: the buffers hold no reference back to
/// the mesh and the mesh never learns about renderer handles.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    /// One interleaved vertex per mesh vertex.
    pub vertices: Vec<Vertex>,
    /// Flattened face indices, three per triangle.
    pub indices: Vec<u32>,
    /// Whether `Vertex::normal` carries data.
    pub has_normals: bool,
    /// Whether `Vertex::tex_coord` carries data.
    pub has_tex_coords: bool,
}

impl MeshBuffers {
    /// Raw vertex bytes for a `GL_ARRAY_BUFFER`-style upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for a `GL_ELEMENT_ARRAY_BUFFER`-style upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Number of indices to draw.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

impl Mesh {
    /// Validate the mesh and interleave it for upload.
    ///
    /// # Errors
    ///
    /// Returns the first [`MeshError`] found by [`Mesh::validate`].
    pub fn to_buffers(&self) -> Result<MeshBuffers, MeshError> {
        self.validate()?;

        let has_normals = self.has_normals();
        let has_tex_coords = self.has_tex_coords();
        let vertices = self
            .positions()
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex {
                position: position.to_array(),
                normal: if has_normals {
                    self.normals()[i].to_array()
                } else {
                    [0.0; 3]
                },
                tex_coord: if has_tex_coords {
                    self.tex_coords()[i].to_array()
                } else {
                    [0.0; 2]
                },
            })
            .collect();
        let indices = self.faces().iter().flatten().copied().collect();

        Ok(MeshBuffers {
            vertices,
            indices,
            has_normals,
            has_tex_coords,
        })
    }
}
