//! Core subdivision algorithm.

// Vertex indices are u32; every pass runs behind the face cap, which keeps
// vertex counts far below u32::MAX
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashMap;
use mesh_types::{MeshBuffer, Point3, Vector2, Vector3, canonical_edge};
use tracing::{debug, info};

use crate::error::{SubdivideError, SubdivideResult};
use crate::params::SubdivideParams;
use crate::result::SubdivisionResult;

/// Subdivide a mesh `iterations` times, in place.
///
/// Each pass splits every triangle into four by inserting one vertex at
/// the midpoint of every edge. Midpoints are shared between the triangles
/// adjacent to an edge, and original vertices are never moved.
///
/// Zero iterations leaves the mesh unchanged.
///
/// # Errors
///
/// Returns an error, without touching the mesh, if:
/// - `iterations` is negative
/// - the buffer is malformed (see [`MeshBuffer::validate`])
/// - the result would exceed the default face cap
///
/// # Examples
///
/// ```
/// use mesh_types::{MeshBuffer, Point3};
/// use mesh_subdivide::subdivide;
///
/// let mut mesh = MeshBuffer::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![0, 1, 2],
/// );
///
/// subdivide(&mut mesh, 1)?;
///
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.triangles, vec![0, 3, 5, 3, 1, 4, 5, 4, 2, 3, 4, 5]);
/// assert_eq!(mesh.positions[4], Point3::new(0.5, 0.5, 0.0));
/// # Ok::<(), mesh_subdivide::SubdivideError>(())
/// ```
pub fn subdivide(mesh: &mut MeshBuffer, iterations: i64) -> SubdivideResult<SubdivisionResult> {
    let params = SubdivideParams::from_count(iterations)?;
    subdivide_mesh(mesh, &params)
}

/// Subdivide a mesh in place using the specified parameters.
///
/// # Errors
///
/// Returns an error, without touching the mesh, if:
/// - the buffer is malformed (see [`MeshBuffer::validate`])
/// - the resulting mesh would exceed `max_faces`
///
/// # Examples
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_subdivide::{subdivide_mesh, SubdivideParams};
///
/// let mut cube = unit_cube();
/// let params = SubdivideParams::new().with_iterations(2);
/// let result = subdivide_mesh(&mut cube, &params)?;
///
/// // 12 * 4^2
/// assert_eq!(result.final_faces, 192);
/// assert_eq!(cube.normals.len(), cube.vertex_count());
/// # Ok::<(), mesh_subdivide::SubdivideError>(())
/// ```
pub fn subdivide_mesh(
    mesh: &mut MeshBuffer,
    params: &SubdivideParams,
) -> SubdivideResult<SubdivisionResult> {
    preflight(mesh, params)?;
    Ok(run_passes(mesh, params))
}

/// Apply exactly one subdivision pass, in place.
///
/// The default face cap applies.
///
/// # Errors
///
/// Returns an error, without touching the mesh, if:
/// - the buffer is malformed (see [`MeshBuffer::validate`])
/// - the result would exceed the default face cap
pub fn subdivide_once(mesh: &mut MeshBuffer) -> SubdivideResult<()> {
    preflight(mesh, &SubdivideParams::single_pass())?;
    subdivide_pass(mesh);
    Ok(())
}

/// Check everything that can fail before any pass runs.
pub(crate) fn preflight(mesh: &MeshBuffer, params: &SubdivideParams) -> SubdivideResult<()> {
    mesh.validate()?;

    if params.iterations == 0 {
        return Ok(());
    }

    let current = mesh.triangle_count();
    let projected = params.expected_faces(current);
    if projected > params.max_faces {
        return Err(SubdivideError::MeshTooLarge {
            current,
            projected,
            max: params.max_faces,
        });
    }

    Ok(())
}

/// Run all passes on a mesh that passed [`preflight`].
pub(crate) fn run_passes(mesh: &mut MeshBuffer, params: &SubdivideParams) -> SubdivisionResult {
    let original_faces = mesh.triangle_count();
    let original_vertices = mesh.vertex_count();

    if params.iterations > 0 {
        info!(
            faces = original_faces,
            vertices = original_vertices,
            iterations = params.iterations,
            "Starting mesh subdivision"
        );
    }

    for i in 0..params.iterations {
        subdivide_pass(mesh);
        debug!(
            "Iteration {}: {} faces, {} vertices",
            i + 1,
            mesh.triangle_count(),
            mesh.vertex_count()
        );

        // Without faces the first pass is a fixed point
        if mesh.triangle_count() == 0 {
            break;
        }
    }

    SubdivisionResult {
        original_faces,
        final_faces: mesh.triangle_count(),
        original_vertices,
        final_vertices: mesh.vertex_count(),
        iterations: params.iterations,
    }
}

/// One 1-to-4 pass. The mesh must already be valid.
fn subdivide_pass(mesh: &mut MeshBuffer) {
    let mut pass = MidpointPass::new(mesh);
    let mut new_triangles = Vec::with_capacity(mesh.triangles.len() * 4);

    for tri in mesh.triangles.chunks_exact(3) {
        let (i1, i2, i3) = (tri[0], tri[1], tri[2]);

        let m12 = pass.midpoint(i1, i2);
        let m23 = pass.midpoint(i2, i3);
        let m31 = pass.midpoint(i3, i1);

        // Corner triangles
        new_triangles.extend_from_slice(&[i1, m12, m31]);
        new_triangles.extend_from_slice(&[m12, i2, m23]);
        new_triangles.extend_from_slice(&[m31, m23, i3]);
        // Center triangle
        new_triangles.extend_from_slice(&[m12, m23, m31]);
    }

    let MidpointPass {
        positions,
        normals,
        uvs,
        ..
    } = pass;
    let vertex_count = positions.len();

    mesh.positions = positions;
    mesh.triangles = new_triangles;

    if normals.len() == vertex_count {
        mesh.normals = normals;
    } else {
        debug!(vertex_count, "Recomputing vertex normals from faces");
        mesh.recalculate_normals();
    }

    if uvs.len() == vertex_count {
        mesh.uvs = uvs;
    } else {
        mesh.uvs.clear();
    }

    mesh.recalculate_bounds();
}

/// Output arrays of one pass plus its edge → midpoint cache.
///
/// The arrays start as copies of the input, so original indices stay valid
/// and midpoints are appended after them.
struct MidpointPass {
    positions: Vec<Point3<f64>>,
    normals: Vec<Vector3<f64>>,
    uvs: Vec<Vector2<f64>>,
    edge_midpoints: HashMap<(u32, u32), u32>,
}

impl MidpointPass {
    fn new(mesh: &MeshBuffer) -> Self {
        // A closed mesh has 1.5 edges per triangle
        let edge_estimate = mesh.triangles.len() / 2;
        let capacity = mesh.positions.len() + edge_estimate;

        Self {
            positions: copy_with_capacity(&mesh.positions, capacity),
            normals: copy_with_capacity(&mesh.normals, capacity),
            uvs: copy_with_capacity(&mesh.uvs, capacity),
            edge_midpoints: HashMap::with_capacity(edge_estimate),
        }
    }

    /// Index of the midpoint vertex of edge `(a, b)`, created on first use.
    fn midpoint(&mut self, a: u32, b: u32) -> u32 {
        let edge = canonical_edge(a, b);

        if let Some(&midpoint_idx) = self.edge_midpoints.get(&edge) {
            return midpoint_idx;
        }

        let (a, b) = (a as usize, b as usize);

        let pa = self.positions[a];
        let pb = self.positions[b];
        self.positions.push(Point3::from((pa.coords + pb.coords) * 0.5));

        if !self.normals.is_empty() {
            // Renormalize: the plain average of two unit vectors is shorter than 1
            let n = (self.normals[a] + self.normals[b])
                .try_normalize(f64::EPSILON)
                .unwrap_or_else(Vector3::zeros);
            self.normals.push(n);
        }

        if !self.uvs.is_empty() {
            let uv = (self.uvs[a] + self.uvs[b]) * 0.5;
            self.uvs.push(uv);
        }

        let new_idx = (self.positions.len() - 1) as u32;
        self.edge_midpoints.insert(edge, new_idx);
        new_idx
    }
}

fn copy_with_capacity<T: Copy>(items: &[T], capacity: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut copy = Vec::with_capacity(capacity);
    copy.extend_from_slice(items);
    copy
}
