//! Core data types for ReliefForge.
//!
//! This crate provides the foundational types for converting a heightfield
//! (a rectangular grid of normalized elevation samples) into a triangle mesh:
//!
//! - [`HeightField`] - Validated, immutable grid of elevation samples
//! - [`SurfaceMesh`] - Indexed triangle mesh covering the grid footprint
//! - [`SolidExtension`] - Side-wall and bottom geometry for solid formats
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Coordinate System
//!
//! Right-handed, with x and y in grid units (one unit per sample) and z the
//! normalized elevation in `0..=1`. Face winding is **counter-clockwise when
//! viewed from +z**, so surface normals point up/outward by the right-hand
//! rule.
//!
//! # Example
//!
//! ```
//! use relief_types::{BitDepth, HeightField};
//!
//! let field = HeightField::from_samples(2, 2, vec![0.0, 0.5, 0.5, 1.0], BitDepth::Eight)?;
//! assert_eq!(field.width(), 2);
//! assert!((field.sample(1, 1) - 1.0).abs() < f64::EPSILON);
//! # Ok::<(), relief_types::FieldError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod field;
mod mesh;
mod solid;
mod triangle;

pub use bounds::Aabb;
pub use field::{BitDepth, FieldError, HeightField};
pub use mesh::SurfaceMesh;
pub use solid::{SolidExtension, SolidFacet};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
