//! Heightfield to triangle-mesh conversion toolkit.
//!
//! This umbrella crate re-exports the relief-* crates and provides the
//! one-call conversion [`pipeline`]: a validated elevation grid goes in,
//! deterministic POV / OBJ / STL / DXF text comes out.
//!
//! # Quick Start
//!
//! ```
//! use relief::io::MeshFormat;
//! use relief::pipeline::{convert, ConvertConfig};
//! use relief::types::{BitDepth, HeightField};
//!
//! let field = HeightField::from_samples(3, 3, vec![0.5; 9], BitDepth::Eight)?;
//!
//! let mut stl = Vec::new();
//! convert(&field, &ConvertConfig::new(MeshFormat::Stl), &mut stl)?;
//! assert!(stl.starts_with(b"solid relief"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - `HeightField`, `BitDepth`, `SurfaceMesh`, `SolidExtension`
//! - [`mesh`] - variant selection, surface construction, solid extrusion
//! - [`io`] - the four serializers, format detection, atomic path export
//! - [`pipeline`] - `ConvertConfig` and the end-to-end entry points

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub use relief_io as io;
pub use relief_mesh as mesh;
pub use relief_types as types;

pub mod pipeline;

pub use pipeline::{convert, convert_to_path, ConvertConfig, ConvertError};
