//! Error types for mesh buffer validation.

use thiserror::Error;

/// Ways a [`MeshBuffer`](crate::MeshBuffer) can break its layout invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// The flat triangle index list cannot be split into triples.
    #[error("Triangle index list has {len} entries, which is not a multiple of 3")]
    TriangleListLength {
        /// Length of the index list.
        len: usize,
    },

    /// A triangle references a vertex that does not exist.
    #[error("Triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfBounds {
        /// Triangle number (position in the list divided by 3).
        triangle: usize,
        /// Offending vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A per-vertex attribute array only partially covers the vertices.
    #[error("{attribute} array has {len} entries, expected 0 or {vertex_count}")]
    AttributeLength {
        /// Attribute name (`normals` or `uvs`).
        attribute: &'static str,
        /// Length of the attribute array.
        len: usize,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}

/// Result type for mesh buffer operations.
pub type MeshResult<T> = std::result::Result<T, MeshError>;
