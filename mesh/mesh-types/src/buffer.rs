//! Mesh buffer: parallel per-vertex arrays plus a flat triangle index list.

use hashbrown::HashSet;
use nalgebra::{Point3, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::{Aabb, compute_vertex_normals};

/// Geometry of one triangle mesh, laid out as parallel arrays.
///
/// # Layout
///
/// - `positions`: one point per vertex, addressed by index
/// - `normals`: empty, or exactly one unit vector per vertex
/// - `uvs`: empty, or exactly one texture coordinate per vertex
/// - `triangles`: flat index list; each consecutive triple `(v0, v1, v2)`
///   is one triangle, wound counter-clockwise when viewed from the front
/// - `bounds`: cached bounding box of `positions`
///
/// The fields are public so hosts can move data in and out without copies.
/// [`validate`](Self::validate) checks the layout invariants, and
/// [`recalculate_bounds`](Self::recalculate_bounds) must be called after
/// editing `positions` directly.
///
/// # Example
///
/// ```
/// use mesh_types::{MeshBuffer, Point3};
///
/// let mesh = MeshBuffer::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![0, 1, 2],
/// );
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// assert!(!mesh.has_normals());
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshBuffer {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,

    /// Vertex normals (empty when absent).
    pub normals: Vec<Vector3<f64>>,

    /// Vertex texture coordinates (empty when absent).
    pub uvs: Vec<Vector2<f64>>,

    /// Triangle vertex indices, three per triangle.
    pub triangles: Vec<u32>,

    /// Bounding box of `positions`.
    pub bounds: Aabb,
}

impl MeshBuffer {
    /// Create a new empty buffer.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from positions and a flat triangle index list.
    ///
    /// Bounds are computed immediately; the input is not validated.
    #[must_use]
    pub fn from_parts(positions: Vec<Point3<f64>>, triangles: Vec<u32>) -> Self {
        let bounds = Aabb::from_points(&positions);
        Self {
            positions,
            normals: Vec::new(),
            uvs: Vec::new(),
            triangles,
            bounds,
        }
    }

    /// Attach per-vertex normals.
    #[must_use]
    pub fn with_normals(mut self, normals: Vec<Vector3<f64>>) -> Self {
        self.normals = normals;
        self
    }

    /// Attach per-vertex texture coordinates.
    #[must_use]
    pub fn with_uvs(mut self, uvs: Vec<Vector2<f64>>) -> Self {
        self.uvs = uvs;
        self
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of complete triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// True when normals are present.
    #[inline]
    #[must_use]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// True when texture coordinates are present.
    #[inline]
    #[must_use]
    pub fn has_uvs(&self) -> bool {
        !self.uvs.is_empty()
    }

    /// Iterate over all triangles as index triples.
    pub fn triangle_indices(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.triangles.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Number of distinct undirected edges referenced by the triangles.
    #[must_use]
    pub fn unique_edge_count(&self) -> usize {
        let mut edges = HashSet::with_capacity(self.triangles.len());
        for [a, b, c] in self.triangle_indices() {
            edges.insert(canonical_edge(a, b));
            edges.insert(canonical_edge(b, c));
            edges.insert(canonical_edge(c, a));
        }
        edges.len()
    }

    /// Check the buffer layout invariants.
    ///
    /// # Errors
    ///
    /// - [`MeshError::TriangleListLength`] if the index list length is not a
    ///   multiple of 3
    /// - [`MeshError::AttributeLength`] if `normals` or `uvs` is neither empty
    ///   nor one entry per vertex
    /// - [`MeshError::IndexOutOfBounds`] for the first index that does not
    ///   address a vertex
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.positions.len();

        if self.triangles.len() % 3 != 0 {
            return Err(MeshError::TriangleListLength {
                len: self.triangles.len(),
            });
        }

        check_attribute("normals", self.normals.len(), vertex_count)?;
        check_attribute("uvs", self.uvs.len(), vertex_count)?;

        if let Some(pos) = self
            .triangles
            .iter()
            .position(|&i| i as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfBounds {
                triangle: pos / 3,
                index: self.triangles[pos],
                vertex_count,
            });
        }

        Ok(())
    }

    /// Replace all normals with area-weighted normals derived from the
    /// triangles.
    ///
    /// # Panics
    ///
    /// Panics if a triangle index is out of range; validate first.
    pub fn recalculate_normals(&mut self) {
        self.normals = compute_vertex_normals(&self.positions, &self.triangles);
    }

    /// Recompute `bounds` from the current positions.
    pub fn recalculate_bounds(&mut self) {
        self.bounds = Aabb::from_points(&self.positions);
    }
}

/// Order an edge's endpoints so the smaller index comes first.
///
/// Both triangles adjacent to an edge produce the same key this way.
#[inline]
#[must_use]
pub const fn canonical_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 <= v1 { (v0, v1) } else { (v1, v0) }
}

fn check_attribute(attribute: &'static str, len: usize, vertex_count: usize) -> MeshResult<()> {
    if len == 0 || len == vertex_count {
        Ok(())
    } else {
        Err(MeshError::AttributeLength {
            attribute,
            len,
            vertex_count,
        })
    }
}

/// Create a unit cube buffer.
///
/// Spans (0,0,0) to (1,1,1) with 8 shared vertices and 12 outward-facing
/// triangles. No normals or UVs are attached.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.triangle_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> MeshBuffer {
    let positions = vec![
        Point3::new(0.0, 0.0, 0.0), // 0
        Point3::new(1.0, 0.0, 0.0), // 1
        Point3::new(1.0, 1.0, 0.0), // 2
        Point3::new(0.0, 1.0, 0.0), // 3
        Point3::new(0.0, 0.0, 1.0), // 4
        Point3::new(1.0, 0.0, 1.0), // 5
        Point3::new(1.0, 1.0, 1.0), // 6
        Point3::new(0.0, 1.0, 1.0), // 7
    ];

    #[rustfmt::skip]
    let triangles = vec![
        0, 2, 1,  0, 3, 2, // bottom (-Z)
        4, 5, 6,  4, 6, 7, // top (+Z)
        0, 1, 5,  0, 5, 4, // front (-Y)
        3, 7, 6,  3, 6, 2, // back (+Y)
        0, 4, 7,  0, 7, 3, // left (-X)
        1, 2, 6,  1, 6, 5, // right (+X)
    ];

    MeshBuffer::from_parts(positions, triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MeshBuffer {
        MeshBuffer::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn from_parts_computes_bounds() {
        let mesh = triangle();
        assert_eq!(mesh.bounds.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(mesh.bounds.max, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn triangle_indices_walks_triples() {
        let mesh = unit_cube();
        let tris: Vec<[u32; 3]> = mesh.triangle_indices().collect();
        assert_eq!(tris.len(), 12);
        assert_eq!(tris[0], [0, 2, 1]);
        assert_eq!(tris[11], [1, 6, 5]);
    }

    #[test]
    fn validate_accepts_well_formed_buffers() {
        assert!(MeshBuffer::new().validate().is_ok());
        assert!(unit_cube().validate().is_ok());

        let with_attrs = triangle()
            .with_normals(vec![Vector3::z(); 3])
            .with_uvs(vec![Vector2::zeros(); 3]);
        assert!(with_attrs.validate().is_ok());
    }

    #[test]
    fn validate_rejects_partial_triangle() {
        let mut mesh = triangle();
        mesh.triangles.push(0);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::TriangleListLength { len: 4 })
        );
    }

    #[test]
    fn validate_rejects_out_of_range_index() {
        let mut mesh = triangle();
        mesh.triangles.extend([0, 2, 3]);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfBounds {
                triangle: 1,
                index: 3,
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn validate_rejects_partial_attributes() {
        let mesh = triangle().with_normals(vec![Vector3::z(); 2]);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::AttributeLength {
                attribute: "normals",
                len: 2,
                vertex_count: 3,
            })
        ));

        let mesh = triangle().with_uvs(vec![Vector2::zeros(); 4]);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::AttributeLength { attribute: "uvs", .. })
        ));
    }

    #[test]
    fn canonical_edge_orders_endpoints() {
        assert_eq!(canonical_edge(0, 1), (0, 1));
        assert_eq!(canonical_edge(1, 0), (0, 1));
        assert_eq!(canonical_edge(5, 3), (3, 5));
        assert_eq!(canonical_edge(4, 4), (4, 4));
    }

    #[test]
    fn unique_edges() {
        assert_eq!(triangle().unique_edge_count(), 3);
        // Closed cube: E = V + F - 2 = 8 + 12 - 2
        assert_eq!(unit_cube().unique_edge_count(), 18);
    }

    #[test]
    fn recalculate_normals_on_cube() {
        let mut cube = unit_cube();
        cube.recalculate_normals();

        assert_eq!(cube.normals.len(), 8);
        let corner = cube.normals[6]; // (1,1,1) corner
        assert!(corner.x > 0.0 && corner.y > 0.0 && corner.z > 0.0);
        assert!((corner.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn recalculate_bounds_after_edit() {
        let mut mesh = triangle();
        mesh.positions.push(Point3::new(-3.0, 2.0, 7.0));
        mesh.recalculate_bounds();
        assert_eq!(mesh.bounds.min, Point3::new(-3.0, 0.0, 0.0));
        assert_eq!(mesh.bounds.max, Point3::new(1.0, 2.0, 7.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let mesh = triangle().with_uvs(vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
        ]);
        let json = serde_json::to_string(&mesh).ok();
        assert!(json.is_some());

        let parsed: Result<MeshBuffer, _> = serde_json::from_str(&json.unwrap_or_default());
        assert_eq!(parsed.ok(), Some(mesh));
    }
}
