//! Subdivision parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{SubdivideError, SubdivideResult};

/// Parameters for mesh subdivision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SubdivideParams {
    /// Number of subdivision passes. Zero leaves the mesh untouched.
    pub iterations: u32,

    /// Maximum faces allowed in result (prevents memory issues).
    pub max_faces: usize,

    /// Subdivide the meshes of a batch on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SubdivideParams {
    fn default() -> Self {
        Self {
            iterations: 4,
            max_faces: 10_000_000, // 10M faces max
            parallel: true,
        }
    }
}

impl SubdivideParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create parameters for a single pass.
    #[must_use]
    pub fn single_pass() -> Self {
        Self {
            iterations: 1,
            ..Self::default()
        }
    }

    /// Create parameters from a signed pass count, as handed over by hosts
    /// that store the count in a signed integer.
    ///
    /// Counts beyond `u32::MAX` saturate; the face cap rejects them for any
    /// mesh that has faces.
    ///
    /// # Errors
    ///
    /// Returns [`SubdivideError::NegativeIterationCount`] if `count < 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesh_subdivide::SubdivideParams;
    ///
    /// let params = SubdivideParams::from_count(3)?;
    /// assert_eq!(params.iterations, 3);
    ///
    /// assert!(SubdivideParams::from_count(-1).is_err());
    /// # Ok::<(), mesh_subdivide::SubdivideError>(())
    /// ```
    pub fn from_count(count: i64) -> SubdivideResult<Self> {
        if count < 0 {
            return Err(SubdivideError::NegativeIterationCount(count));
        }
        let iterations = u32::try_from(count).unwrap_or(u32::MAX);
        Ok(Self::default().with_iterations(iterations))
    }

    /// Set number of iterations.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set maximum faces allowed.
    #[must_use]
    pub const fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }

    /// Set whether batches run in parallel.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Calculate expected face count after subdivision.
    ///
    /// Each subdivision iteration multiplies face count by 4. The result
    /// saturates at `usize::MAX`.
    #[must_use]
    pub const fn expected_faces(&self, current_faces: usize) -> usize {
        let mut faces = current_faces;
        let mut i = 0;
        while i < self.iterations && faces != 0 && faces != usize::MAX {
            faces = faces.saturating_mul(4);
            i += 1;
        }
        faces
    }
}
