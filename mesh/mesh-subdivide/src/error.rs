//! Error types for mesh subdivision operations.

use mesh_types::MeshError;
use thiserror::Error;

/// Errors that can occur during subdivision operations.
///
/// Every error is raised before the mesh buffer is modified.
#[derive(Debug, Error)]
pub enum SubdivideError {
    /// The input buffer breaks a layout invariant.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),

    /// A signed iteration count below zero was requested.
    #[error("Invalid iteration count: {0} (must be >= 0)")]
    NegativeIterationCount(i64),

    /// Mesh would exceed maximum size.
    #[error("Subdivision would exceed maximum mesh size ({current} -> {projected} faces, max {max})")]
    MeshTooLarge {
        /// Current face count.
        current: usize,
        /// Projected face count after subdivision.
        projected: usize,
        /// Maximum allowed face count.
        max: usize,
    },

    /// One mesh of a batch failed its pre-flight checks.
    #[error("Mesh {index} in batch: {source}")]
    InBatch {
        /// Position of the mesh in the batch.
        index: usize,
        /// The underlying failure.
        #[source]
        source: Box<SubdivideError>,
    },
}

/// Result type for subdivision operations.
pub type SubdivideResult<T> = std::result::Result<T, SubdivideError>;
