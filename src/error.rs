//! Crate-level error types.

use std::fmt;

use crate::import::ImportError;
use crate::mesh::MeshError;

/// Errors produced by the meshcam crate.
///
/// Only file, parse and import failures are recoverable. Geometric
/// precondition violations (zero subdivision levels, out-of-range face
/// indices, normalizing a zero vector) are programmer errors and panic.
#[derive(Debug)]
pub enum MeshcamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The OBJ text could not be parsed.
    ObjParse {
        /// 1-based line of the offending statement.
        line: usize,
        /// Parser message.
        message: String,
    },
    /// The OBJ's material library could not be parsed.
    MtlParse {
        /// 1-based line of the offending statement.
        line: usize,
        /// Parser message.
        message: String,
    },
    /// Parsed OBJ data was inconsistent or produced no meshes.
    Import(ImportError),
    /// A mesh failed validation before upload.
    Mesh(MeshError),
}

impl fmt::Display for MeshcamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ObjParse { line, message } => {
                write!(f, "OBJ parse error on line {line}: {message}")
            }
            Self::MtlParse { line, message } => {
                write!(f, "MTL parse error on line {line}: {message}")
            }
            Self::Import(e) => write!(f, "import error: {e}"),
            Self::Mesh(e) => write!(f, "mesh error: {e}"),
        }
    }
}

impl std::error::Error for MeshcamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Import(e) => Some(e),
            Self::Mesh(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MeshcamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ImportError> for MeshcamError {
    fn from(e: ImportError) -> Self {
        Self::Import(e)
    }
}

impl From<MeshError> for MeshcamError {
    fn from(e: MeshError) -> Self {
        Self::Mesh(e)
    }
}
