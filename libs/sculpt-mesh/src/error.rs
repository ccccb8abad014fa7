//! # Mesh Errors
//!
//! Error types for mesh assembly, tessellation, combination and export.

use thiserror::Error;

/// Errors that can occur while building or exporting meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A triangle has no defined normal (zero-length cross product).
    ///
    /// Recoverable: exporters skip the facet or substitute a fallback normal.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A face references a vertex that does not exist.
    ///
    /// Always an assembler defect, never a user error.
    #[error("Face {face} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    /// Invalid mesh or grid topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Primitive dimensions or resolution that cannot be tessellated
    #[error("Invalid primitive: {message}")]
    InvalidPrimitive { message: String },

    /// Solid combination failed
    #[error("Combine failed: {message}")]
    CombineFailed { message: String },

    /// Coordinate transform that would not produce a usable solid
    #[error("Invalid transform: {message}")]
    InvalidTransform { message: String },

    /// Writing exported text failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates an invalid primitive error.
    pub fn invalid_primitive(message: impl Into<String>) -> Self {
        Self::InvalidPrimitive {
            message: message.into(),
        }
    }

    /// Creates a combine failed error.
    pub fn combine_failed(message: impl Into<String>) -> Self {
        Self::CombineFailed {
            message: message.into(),
        }
    }

    /// Returns true for errors an exporter may recover from.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DegenerateGeometry { .. })
    }
}
