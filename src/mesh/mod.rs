//! Indexed triangle meshes.
//!
//! A [`Mesh`] is built with append-only operations (vertices, then faces),
//! optionally refined with [`Mesh::subdivide`], and finally compiled into
//! upload-ready [`MeshBuffers`]. Meshes never hold renderer handles.

/// Interleaved, upload-ready vertex and index buffers.
pub mod buffers;
/// The mesh data model and its builder operations.
pub mod builder;
/// Procedural meshes: icosphere and ground plane.
pub mod primitives;
/// Edge-midpoint subdivision.
pub mod subdivide;

use std::fmt;

pub use buffers::{MeshBuffers, Vertex};
pub use builder::Mesh;

/// Structural problems found by [`Mesh::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Normals are present but not parallel to positions.
    NormalCountMismatch {
        /// Number of normals.
        normals: usize,
        /// Number of positions.
        positions: usize,
    },
    /// Texture coordinates are present but not parallel to positions.
    TexCoordCountMismatch {
        /// Number of texture coordinates.
        tex_coords: usize,
        /// Number of positions.
        positions: usize,
    },
    /// A face references a vertex that does not exist.
    FaceIndexOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NormalCountMismatch { normals, positions } => write!(
                f,
                "{normals} normals for {positions} positions"
            ),
            Self::TexCoordCountMismatch {
                tex_coords,
                positions,
            } => write!(
                f,
                "{tex_coords} texture coordinates for {positions} positions"
            ),
            Self::FaceIndexOutOfRange {
                face,
                index,
                vertex_count,
            } => write!(
                f,
                "face {face} references vertex {index} but the mesh has \
                 {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for MeshError {}
