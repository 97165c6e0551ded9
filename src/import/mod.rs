//! Mesh import from externally parsed geometry.
//!
//! A parser hands over [`RawShape`]s: flat attribute arrays plus triangles
//! whose corners index those arrays independently (position, optional
//! texture coordinate, optional normal). [`import_shape`] turns each shape
//! into a compact [`Mesh`](crate::mesh::Mesh) holding exactly one vertex per
//! distinct attribute combination. The [`obj`] submodule wires this to the
//! Wavefront OBJ parser.

mod dedup;
/// Wavefront OBJ parsing and loading.
pub mod obj;
mod raw;

use std::fmt;

pub use dedup::{import_shape, import_shapes};
pub use obj::{apply_diffuse_maps, load_obj, parse_mtl, parse_obj, DiffuseMaps};
pub use raw::{RawIndex, RawShape};

/// Inconsistent data at the import boundary.
///
/// These come from untrusted file content and are always recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// A flat attribute array is not a whole number of tuples.
    RaggedAttribute {
        /// Attribute name (`"position"`, `"normal"`, `"texture coordinate"`).
        attribute: &'static str,
        /// Length of the flat array.
        len: usize,
        /// Floats per tuple.
        stride: usize,
    },
    /// A face corner points past the end of an attribute array.
    IndexOutOfRange {
        /// Attribute name.
        attribute: &'static str,
        /// The offending index.
        index: usize,
        /// Number of tuples available.
        count: usize,
    },
    /// Some face corners carry an attribute and others do not.
    MixedAttributes {
        /// Attribute name.
        attribute: &'static str,
    },
    /// The source contained no triangles at all.
    NoMeshes,
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedAttribute {
                attribute,
                len,
                stride,
            } => write!(
                f,
                "{attribute} array of {len} floats is not a multiple of \
                 {stride}"
            ),
            Self::IndexOutOfRange {
                attribute,
                index,
                count,
            } => write!(f, "{attribute} index {index} out of range ({count})"),
            Self::MixedAttributes { attribute } => {
                write!(f, "only some face vertices have a {attribute}")
            }
            Self::NoMeshes => write!(f, "no triangles found"),
        }
    }
}

impl std::error::Error for ImportError {}
