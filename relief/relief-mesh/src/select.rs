//! Per-cell geometry variant selection.
//!
//! Each grid cell (a 2x2 block of samples) is triangulated one of two ways,
//! chosen from the cell's local contrast:
//!
//! - **Standard** - two triangles along a fixed diagonal. Cheap, fine for
//!   smooth areas.
//! - **Hybrid** - four triangles sharing a synthesized centre vertex. The
//!   pyramid contains both diagonals, so a sharp diagonal transition is
//!   never folded the wrong way.
//!
//! Selection is purely local and stateless, so cells are processed
//! row-parallel and collected in row-major order.

use rayon::prelude::*;
use relief_types::HeightField;

/// Default local-contrast threshold above which a cell goes Hybrid.
///
/// Empirically tuned on scanned relief images; callers can override it per
/// conversion.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Triangulation variant for one grid cell, decided once and never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryVariant {
    /// Uniform two-triangle split along the fixed cell diagonal.
    Standard,
    /// Four sub-triangles around a centre vertex at the corner average.
    Hybrid,
}

/// Local contrast of the cell whose top-left sample is (x, y).
///
/// The measure is the larger absolute difference between the two cell
/// diagonals, which reacts to exactly the sharp diagonal transitions the
/// Hybrid variant exists for. Uses only the cell's own four corners, so
/// every cell of a valid field has a full neighborhood.
#[inline]
#[must_use]
pub fn cell_contrast(field: &HeightField, x: usize, y: usize) -> f64 {
    let v1 = field.sample(x, y);
    let v2 = field.sample(x + 1, y);
    let v3 = field.sample(x + 1, y + 1);
    let v4 = field.sample(x, y + 1);
    (v1 - v3).abs().max((v2 - v4).abs())
}

/// Select a [`GeometryVariant`] for every cell of the field.
///
/// Returns one variant per cell in row-major order,
/// `(width - 1) * (height - 1)` entries total. Contrast strictly above
/// `threshold` selects Hybrid; at or below selects Standard.
///
/// # Example
///
/// ```
/// use relief_mesh::{select_variants, GeometryVariant};
/// use relief_types::{BitDepth, HeightField};
///
/// let field = HeightField::from_samples(2, 2, vec![0.0, 0.0, 0.0, 1.0], BitDepth::Eight)?;
/// assert_eq!(select_variants(&field, 0.5), vec![GeometryVariant::Hybrid]);
/// assert_eq!(select_variants(&field, 1.0), vec![GeometryVariant::Standard]);
/// # Ok::<(), relief_types::FieldError>(())
/// ```
#[must_use]
pub fn select_variants(field: &HeightField, threshold: f64) -> Vec<GeometryVariant> {
    let cells_x = field.width() - 1;
    let cells_y = field.height() - 1;

    (0..cells_y)
        .into_par_iter()
        .flat_map_iter(|y| {
            (0..cells_x).map(move |x| {
                if cell_contrast(field, x, y) > threshold {
                    GeometryVariant::Hybrid
                } else {
                    GeometryVariant::Standard
                }
            })
        })
        .collect()
}
