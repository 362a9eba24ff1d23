//! Subdivision of several independent meshes with one parameter set.
//!
//! Meshes share no state, so with `params.parallel` set each one is
//! subdivided on its own rayon task. The whole batch is checked up front:
//! either every mesh is subdivided or none is touched.

use mesh_types::MeshBuffer;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{SubdivideError, SubdivideResult};
use crate::params::SubdivideParams;
use crate::result::SubdivisionResult;
use crate::subdivide::{preflight, run_passes};

/// Subdivide every mesh in `meshes` in place.
///
/// Returns one [`SubdivisionResult`] per mesh, in input order.
///
/// # Errors
///
/// Returns [`SubdivideError::InBatch`] naming the first mesh that is
/// malformed or would exceed `max_faces`. No mesh is modified in that case.
///
/// # Examples
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_subdivide::{subdivide_batch, SubdivideParams};
///
/// let mut meshes = vec![unit_cube(), unit_cube()];
/// let results = subdivide_batch(&mut meshes, &SubdivideParams::single_pass())?;
///
/// assert_eq!(results.len(), 2);
/// assert!(results.iter().all(|r| r.final_faces == 48));
/// # Ok::<(), mesh_subdivide::SubdivideError>(())
/// ```
pub fn subdivide_batch(
    meshes: &mut [MeshBuffer],
    params: &SubdivideParams,
) -> SubdivideResult<Vec<SubdivisionResult>> {
    for (index, mesh) in meshes.iter().enumerate() {
        preflight(mesh, params).map_err(|source| SubdivideError::InBatch {
            index,
            source: Box::new(source),
        })?;
    }

    debug!(
        meshes = meshes.len(),
        parallel = params.parallel,
        "Dispatching subdivision batch"
    );

    let results: Vec<SubdivisionResult> = if params.parallel {
        meshes
            .par_iter_mut()
            .map(|mesh| run_passes(mesh, params))
            .collect()
    } else {
        meshes
            .iter_mut()
            .map(|mesh| run_passes(mesh, params))
            .collect()
    };

    Ok(results)
}
