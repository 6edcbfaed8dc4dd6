//! Geometry synthesis for ReliefForge.
//!
//! Turns a validated [`HeightField`](relief_types::HeightField) into an
//! indexed triangle mesh, in three stages:
//!
//! 1. [`select_variants`] - per-cell, contrast-driven choice between the
//!    [`GeometryVariant`]s (stateless, row-parallel)
//! 2. [`build_mesh`] - crack-free [`SurfaceMesh`](relief_types::SurfaceMesh)
//!    covering every cell exactly once, +z winding throughout
//! 3. [`extrude_solid`] - optional side walls and bottom closing the surface
//!    into a watertight solid, for printable formats
//!
//! # Example
//!
//! ```
//! use relief_mesh::{build_mesh, extrude_solid, select_variants, DEFAULT_THRESHOLD};
//! use relief_types::{BitDepth, HeightField};
//!
//! let field = HeightField::from_samples(3, 3, vec![0.5; 9], BitDepth::Eight)?;
//! let variants = select_variants(&field, DEFAULT_THRESHOLD);
//! let mesh = build_mesh(&field, &variants)?;
//! assert_eq!(mesh.face_count(), 8); // 2x2 cells, all Standard
//!
//! let solid = extrude_solid(&mesh, 0.0);
//! assert_eq!(solid.bottom.len(), 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod builder;
mod error;
mod extrude;
mod select;

pub use builder::build_mesh;
pub use error::{MeshError, MeshResult};
pub use extrude::extrude_solid;
pub use select::{cell_contrast, select_variants, GeometryVariant, DEFAULT_THRESHOLD};
