//! Core mesh buffer types.
//!
//! This crate provides the data side of the subdivision stack:
//!
//! - [`MeshBuffer`] - Positions, normals, UVs and a flat triangle index list
//! - [`Aabb`] - Axis-aligned bounding box cached on every buffer
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`MeshError`] - Layout invariant violations reported by [`MeshBuffer::validate`]
//! - [`compute_vertex_normals`] - Area-weighted normals from triangle geometry
//!
//! # Layer 0 Crate
//!
//! This crate has no engine dependencies. Hosts own mesh I/O and hand their
//! geometry over as plain arrays.
//!
//! # Units
//!
//! This library is **unit-agnostic**. Positions and normals are `f64`,
//! texture coordinates are `f64` pairs.
//!
//! # Winding
//!
//! Triangles are wound **counter-clockwise (CCW) when viewed from the front**.
//! Recomputed normals follow the right-hand rule.
//!
//! # Example
//!
//! ```
//! use mesh_types::{MeshBuffer, Point3, Vector3};
//!
//! let mut mesh = MeshBuffer::from_parts(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     vec![0, 1, 2],
//! );
//! mesh.validate()?;
//!
//! mesh.recalculate_normals();
//! assert_eq!(mesh.normals, vec![Vector3::z(); 3]);
//! # Ok::<(), mesh_types::MeshError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod buffer;
mod error;
mod normals;
mod triangle;

pub use bounds::Aabb;
pub use buffer::{MeshBuffer, canonical_edge, unit_cube};
pub use error::{MeshError, MeshResult};
pub use normals::compute_vertex_normals;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector2, Vector3};
