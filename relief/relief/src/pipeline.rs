//! The heightfield-to-bytes conversion pipeline.

use std::io::Write;
use std::path::Path;

use relief_io::{export_mesh, export_to_path, ExportError, MeshFormat};
use relief_mesh::{build_mesh, extrude_solid, select_variants, MeshError, DEFAULT_THRESHOLD};
use relief_types::{HeightField, SolidExtension, SurfaceMesh};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from the conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Geometry construction failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Serialization or file output failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Conversion parameters. Plain value, no global state.
///
/// # Example
///
/// ```
/// use relief::pipeline::ConvertConfig;
/// use relief::io::MeshFormat;
///
/// let config = ConvertConfig::new(MeshFormat::Stl).with_threshold(0.1);
/// assert!((config.base_elevation - 0.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertConfig {
    /// Local-contrast threshold above which a cell goes Hybrid.
    pub threshold: f64,
    /// Bottom elevation of the extruded solid, for the solid formats.
    pub base_elevation: f64,
    /// Output format.
    pub format: MeshFormat,
}

impl ConvertConfig {
    /// Config with the default threshold and a base elevation of zero.
    #[must_use]
    pub const fn new(format: MeshFormat) -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            base_elevation: 0.0,
            format,
        }
    }

    /// Override the geometry-selection threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Override the solid base elevation.
    #[must_use]
    pub const fn with_base_elevation(mut self, base_elevation: f64) -> Self {
        self.base_elevation = base_elevation;
        self
    }
}

/// Run selector, builder and (for solid formats) extruder.
fn synthesize(
    field: &HeightField,
    config: &ConvertConfig,
) -> Result<(SurfaceMesh, Option<SolidExtension>), ConvertError> {
    let variants = select_variants(field, config.threshold);
    debug!(cells = variants.len(), "variants selected");

    let mesh = build_mesh(field, &variants)?;

    let solid = if config.format.requires_solid() {
        Some(extrude_solid(&mesh, config.base_elevation))
    } else {
        None
    };

    Ok((mesh, solid))
}

/// Convert a heightfield and write the serialized result into `writer`.
///
/// Stages run sequentially: variant selection, surface construction, solid
/// extrusion (solid formats only), serialization. Errors propagate upward;
/// nothing is retried and no partial state is kept.
///
/// # Errors
///
/// Returns [`ConvertError`] if geometry construction or serialization
/// fails.
///
/// # Example
///
/// ```
/// use relief::pipeline::{convert, ConvertConfig};
/// use relief::io::MeshFormat;
/// use relief::types::{BitDepth, HeightField};
///
/// let field = HeightField::from_samples(3, 3, vec![0.5; 9], BitDepth::Eight)?;
/// let mut obj = Vec::new();
/// convert(&field, &ConvertConfig::new(MeshFormat::Obj), &mut obj)?;
/// assert!(!obj.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn convert<W: Write>(
    field: &HeightField,
    config: &ConvertConfig,
    writer: &mut W,
) -> Result<(), ConvertError> {
    let (mesh, solid) = synthesize(field, config)?;
    export_mesh(&mesh, solid.as_ref(), config.format, writer)?;

    info!(
        width = field.width(),
        height = field.height(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        format = config.format.name(),
        "conversion finished"
    );
    Ok(())
}

/// Convert a heightfield and write the result to `path` atomically.
///
/// The format in `config` must agree with the path extension; the
/// extension wins for detection, exactly as [`export_to_path`] documents.
///
/// # Errors
///
/// Returns [`ConvertError`] if geometry construction, serialization or
/// the final file move fails.
pub fn convert_to_path<P: AsRef<Path>>(
    field: &HeightField,
    config: &ConvertConfig,
    path: P,
) -> Result<(), ConvertError> {
    let (mesh, solid) = synthesize(field, config)?;
    export_to_path(&mesh, solid.as_ref(), path.as_ref())?;

    info!(
        path = %path.as_ref().display(),
        format = config.format.name(),
        "conversion finished"
    );
    Ok(())
}
