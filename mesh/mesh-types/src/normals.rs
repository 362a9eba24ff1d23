//! Vertex normal computation from triangle geometry.
//!
//! Each triangle's cross-product normal (its magnitude is twice the area)
//! is accumulated at its three corners, then every sum is normalized.
//! Large triangles therefore dominate the shading direction of a vertex.

use nalgebra::{Point3, Vector3};

use crate::Triangle;

/// Compute area-weighted vertex normals for a flat triangle index list.
///
/// Returns one normal per position. Vertices not referenced by any
/// non-degenerate triangle get the zero vector.
///
/// Trailing indices that do not form a full triple are ignored.
///
/// # Panics
///
/// Panics if a triangle index is out of range for `positions`.
/// Call [`MeshBuffer::validate`](crate::MeshBuffer::validate) first for
/// untrusted input.
///
/// # Example
///
/// ```
/// use mesh_types::{compute_vertex_normals, Point3, Vector3};
///
/// let positions = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
///
/// assert_eq!(normals, vec![Vector3::z(); 3]);
/// ```
#[must_use]
pub fn compute_vertex_normals(positions: &[Point3<f64>], triangles: &[u32]) -> Vec<Vector3<f64>> {
    let mut normals = vec![Vector3::zeros(); positions.len()];

    for tri in triangles.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let weighted = Triangle::new(positions[a], positions[b], positions[c]).normal_unnormalized();

        normals[a] += weighted;
        normals[b] += weighted;
        normals[c] += weighted;
    }

    for normal in &mut normals {
        *normal = normal.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros);
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn flat_quad_normals_point_up() {
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2, 0, 2, 3]);

        assert_eq!(normals.len(), 4);
        for n in &normals {
            assert_relative_eq!(*n, Vector3::z(), epsilon = 1e-12);
        }
    }

    #[test]
    fn shared_vertex_is_area_weighted() {
        // Big triangle facing +Z, small triangle facing +X, sharing vertex 0.
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2, 0, 3, 4]);

        let n = normals[0];
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
        assert!(n.z > n.x, "larger face should dominate: {n:?}");
        assert!(n.x > 0.0);
    }

    #[test]
    fn unreferenced_vertex_gets_zero_normal() {
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(5.0, 5.0, 5.0),
        ];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals[3], Vector3::zeros());
    }

    #[test]
    fn degenerate_triangle_contributes_nothing() {
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        assert!(normals.iter().all(|n| *n == Vector3::zeros()));
    }
}
