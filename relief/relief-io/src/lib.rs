//! Text export for ReliefForge meshes.
//!
//! Serializes a [`SurfaceMesh`] (plus its [`SolidExtension`] for the solid
//! formats) into one of four deterministic text formats:
//!
//! - **POV** - renderable POV-Ray scene, CSG-closed solid
//! - **OBJ** - Wavefront surface geometry
//! - **STL** - ASCII stereolithography, watertight solid
//! - **DXF** - `3DFACE` drawing entities
//!
//! Output is byte-for-byte reproducible: no timestamps, no environment
//! dependence, identical input always serializes identically.
//!
//! # Example
//!
//! ```
//! use relief_io::{export_mesh, MeshFormat};
//! use relief_types::{BitDepth, HeightField};
//! # use relief_mesh::{build_mesh, select_variants, DEFAULT_THRESHOLD};
//!
//! let field = HeightField::from_samples(3, 3, vec![0.5; 9], BitDepth::Eight)?;
//! let mesh = build_mesh(&field, &select_variants(&field, DEFAULT_THRESHOLD))?;
//!
//! let mut obj = Vec::new();
//! export_mesh(&mesh, None, MeshFormat::Obj, &mut obj)?;
//! assert!(obj.starts_with(b"# Heightfield relief surface"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod dxf;
mod error;
mod fmt;
mod obj;
mod pov;
mod stl;

pub use error::{ExportError, ExportResult};

use std::io::Write;
use std::path::Path;

use relief_types::{SolidExtension, SurfaceMesh};
use tracing::debug;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// POV-Ray scene file. Solid output via CSG intersection.
    Pov,
    /// Wavefront OBJ. Surface geometry only.
    Obj,
    /// ASCII STL. Watertight solid with explicit facet normals.
    Stl,
    /// DXF drawing. Surface geometry as `3DFACE` entities.
    Dxf,
}

impl MeshFormat {
    /// Detect format from file extension.
    ///
    /// Returns `None` if the extension is not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pov" => Some(Self::Pov),
            "obj" => Some(Self::Obj),
            "stl" => Some(Self::Stl),
            "dxf" => Some(Self::Dxf),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Pov => "pov",
            Self::Obj => "obj",
            Self::Stl => "stl",
            Self::Dxf => "dxf",
        }
    }

    /// Display name used in error messages and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pov => "POV",
            Self::Obj => "OBJ",
            Self::Stl => "STL",
            Self::Dxf => "DXF",
        }
    }

    /// Whether this format serializes a closed solid and therefore needs
    /// the solid extension.
    #[must_use]
    pub const fn requires_solid(&self) -> bool {
        matches!(self, Self::Pov | Self::Stl)
    }
}

/// Serialize a mesh into `writer` in the given format.
///
/// `solid` is required for the solid formats ([`MeshFormat::Pov`],
/// [`MeshFormat::Stl`]) and ignored by the surface formats.
///
/// # Errors
///
/// - [`ExportError::MissingSolid`] if a solid format is invoked without a
///   solid extension
/// - [`ExportError::Unrepresentable`] if a coordinate is not finite
/// - [`ExportError::Io`] if the sink fails
pub fn export_mesh<W: Write>(
    mesh: &SurfaceMesh,
    solid: Option<&SolidExtension>,
    format: MeshFormat,
    writer: &mut W,
) -> ExportResult<()> {
    match format {
        MeshFormat::Pov => pov::encode_pov(mesh, solid, writer)?,
        MeshFormat::Obj => obj::encode_obj(mesh, writer)?,
        MeshFormat::Stl => stl::encode_stl(mesh, solid, writer)?,
        MeshFormat::Dxf => dxf::encode_dxf(mesh, writer)?,
    }
    debug!(
        format = format.name(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "mesh serialized"
    );
    Ok(())
}

/// Serialize a mesh to a file, detecting the format from the extension.
///
/// The output is staged in a temporary file in the destination directory
/// and moved into place only after serialization succeeds, so a failed
/// export never leaves a truncated file that looks complete.
///
/// # Errors
///
/// - [`ExportError::UnknownFormat`] if the extension is not recognized
/// - any [`export_mesh`] error
/// - [`ExportError::Persist`] if the finished file cannot be moved into
///   place
pub fn export_to_path<P: AsRef<Path>>(
    mesh: &SurfaceMesh,
    solid: Option<&SolidExtension>,
    path: P,
) -> ExportResult<()> {
    let path = path.as_ref();
    let format = MeshFormat::from_path(path).ok_or_else(|| ExportError::UnknownFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut staged = match dir {
        Some(dir) => tempfile::NamedTempFile::new_in(dir),
        None => tempfile::NamedTempFile::new(),
    }
    .map_err(ExportError::io(format.name()))?;

    export_mesh(mesh, solid, format, &mut staged)?;
    staged.flush().map_err(ExportError::io(format.name()))?;
    staged.persist(path).map_err(|e| ExportError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!(path = %path.display(), format = format.name(), "mesh exported");
    Ok(())
}
