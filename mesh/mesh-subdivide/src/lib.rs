//! Midpoint mesh subdivision.
//!
//! Every pass splits each triangle into four by inserting a vertex at the
//! midpoint of each edge:
//!
//! ```text
//!         i3                    i3
//!        /  \                  /  \
//!       /    \               m31--m23
//!      /      \      →       / \  / \
//!     /        \            /   \/   \
//!   i1 -------- i2        i1----m12---i2
//! ```
//!
//! - Midpoints are shared by both triangles adjacent to an edge, so the
//!   refined mesh stays connected.
//! - Original vertices keep their index and their attributes. Nothing is
//!   smoothed.
//! - Midpoint normals are the renormalized sum of the endpoint normals,
//!   midpoint UVs the average of the endpoint UVs.
//! - Meshes without normals get area-weighted normals computed from the
//!   refined faces.
//!
//! Each pass multiplies the face count by 4; [`SubdivideParams::max_faces`]
//! guards against runaway growth.
//!
//! # Examples
//!
//! ```
//! use mesh_types::{MeshBuffer, Point3};
//! use mesh_subdivide::subdivide;
//!
//! let mut mesh = MeshBuffer::from_parts(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.5, 1.0, 0.0),
//!     ],
//!     vec![0, 1, 2],
//! );
//!
//! let result = subdivide(&mut mesh, 2)?;
//!
//! // 1 * 4^2 = 16 faces after 2 iterations
//! assert_eq!(result.final_faces, 16);
//! assert_eq!(mesh.triangle_count(), 16);
//! # Ok::<(), mesh_subdivide::SubdivideError>(())
//! ```
//!
//! Several meshes at once, with a preset:
//!
//! ```
//! use mesh_types::unit_cube;
//! use mesh_subdivide::{subdivide_batch, SubdivideParams};
//!
//! let mut meshes = vec![unit_cube(); 3];
//! let params = SubdivideParams::new().with_iterations(3);
//! let results = subdivide_batch(&mut meshes, &params)?;
//!
//! for result in &results {
//!     println!("{result}");
//! }
//! # Ok::<(), mesh_subdivide::SubdivideError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod batch;
mod error;
mod params;
mod result;
mod subdivide;

pub use batch::subdivide_batch;
pub use error::{SubdivideError, SubdivideResult};
pub use params::SubdivideParams;
pub use result::SubdivisionResult;
pub use subdivide::{subdivide, subdivide_mesh, subdivide_once};
