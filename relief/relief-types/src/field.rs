//! Validated heightfield grid.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors produced while constructing a [`HeightField`].
///
/// All of these are input-validation failures: the grid handed over by the
/// image decoder was malformed, and no geometry is built from it.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Grid smaller than the 2x2 minimum needed for one full cell.
    #[error("height field too small: {width}x{height}, need at least 2x2")]
    TooSmall {
        /// Grid width in samples.
        width: usize,
        /// Grid height in samples.
        height: usize,
    },

    /// Sample buffer length does not match `width * height`.
    #[error("sample count mismatch: expected {expected}, got {got}")]
    SampleCount {
        /// Expected number of samples.
        expected: usize,
        /// Actual number of samples supplied.
        got: usize,
    },

    /// A sample is NaN or infinite.
    #[error("non-finite sample at ({x}, {y})")]
    NonFinite {
        /// Column of the offending sample.
        x: usize,
        /// Row of the offending sample.
        y: usize,
    },
}

/// Bit depth of the source raster the heightfield was decoded from.
///
/// Output precision follows the source depth where a text format exposes it:
/// 8-bit sources have 256 distinct levels, so five decimal places are plenty,
/// while 16-bit sources need seven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BitDepth {
    /// 8 bits per channel (256 levels).
    #[default]
    Eight,
    /// 16 bits per channel (65536 levels).
    Sixteen,
}

impl BitDepth {
    /// Decimal places used when writing coordinates in fixed-point formats.
    #[inline]
    #[must_use]
    pub const fn decimal_places(self) -> usize {
        match self {
            Self::Eight => 5,
            Self::Sixteen => 7,
        }
    }

    /// Number of representable levels per channel.
    #[inline]
    #[must_use]
    pub const fn levels(self) -> u32 {
        match self {
            Self::Eight => 256,
            Self::Sixteen => 65536,
        }
    }
}

/// An immutable rectangular grid of normalized elevation samples.
///
/// Produced by an external image decoder, consumed by the mesh builder.
/// Samples are stored row-major, normalized to `0..=1`, with a uniform grid
/// spacing of one unit per sample in x and y.
///
/// # Invariants
///
/// Enforced by [`HeightField::from_samples`]:
///
/// - `width >= 2` and `height >= 2` (a mesh needs at least one full cell)
/// - `samples.len() == width * height`
/// - every sample is finite
///
/// # Example
///
/// ```
/// use relief_types::{BitDepth, FieldError, HeightField};
///
/// let field = HeightField::from_samples(3, 2, vec![0.0; 6], BitDepth::Sixteen)?;
/// assert_eq!(field.cell_count(), 2);
///
/// // A 1xN grid cannot hold a single cell
/// let bad = HeightField::from_samples(1, 5, vec![0.0; 5], BitDepth::Eight);
/// assert!(matches!(bad, Err(FieldError::TooSmall { .. })));
/// # Ok::<(), FieldError>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeightField {
    width: usize,
    height: usize,
    samples: Vec<f64>,
    depth: BitDepth,
}

impl HeightField {
    /// Create a heightfield from row-major samples, validating all invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError`] if the grid is smaller than 2x2, the buffer
    /// length does not match the dimensions, or any sample is non-finite.
    pub fn from_samples(
        width: usize,
        height: usize,
        samples: Vec<f64>,
        depth: BitDepth,
    ) -> Result<Self, FieldError> {
        if width < 2 || height < 2 {
            return Err(FieldError::TooSmall { width, height });
        }
        if samples.len() != width * height {
            return Err(FieldError::SampleCount {
                expected: width * height,
                got: samples.len(),
            });
        }
        if let Some(i) = samples.iter().position(|s| !s.is_finite()) {
            return Err(FieldError::NonFinite {
                x: i % width,
                y: i / width,
            });
        }

        Ok(Self {
            width,
            height,
            samples,
            depth,
        })
    }

    /// Grid width in samples.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in samples.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Source raster bit depth.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Number of grid cells, `(width - 1) * (height - 1)`.
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        (self.width - 1) * (self.height - 1)
    }

    /// Elevation sample at grid position (x, y).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the position is out of range. Construction
    /// guarantees the buffer covers every in-range position.
    #[inline]
    #[must_use]
    pub fn sample(&self, x: usize, y: usize) -> f64 {
        debug_assert!(x < self.width && y < self.height);
        self.samples[y * self.width + x]
    }

    /// All samples in row-major order.
    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_field() {
        let field =
            HeightField::from_samples(2, 3, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5], BitDepth::Eight);
        assert!(field.is_ok());
        if let Ok(f) = field {
            assert_eq!(f.width(), 2);
            assert_eq!(f.height(), 3);
            assert_eq!(f.cell_count(), 2);
            assert!((f.sample(1, 2) - 0.5).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn too_small_rejected() {
        let r = HeightField::from_samples(1, 2, vec![0.0, 0.0], BitDepth::Eight);
        assert!(matches!(r, Err(FieldError::TooSmall { width: 1, height: 2 })));

        let r = HeightField::from_samples(2, 1, vec![0.0, 0.0], BitDepth::Eight);
        assert!(matches!(r, Err(FieldError::TooSmall { .. })));
    }

    #[test]
    fn sample_count_mismatch_rejected() {
        let r = HeightField::from_samples(2, 2, vec![0.0; 3], BitDepth::Eight);
        assert!(matches!(
            r,
            Err(FieldError::SampleCount {
                expected: 4,
                got: 3
            })
        ));
    }

    #[test]
    fn non_finite_rejected_with_position() {
        let r = HeightField::from_samples(2, 2, vec![0.0, 0.5, f64::NAN, 1.0], BitDepth::Eight);
        assert!(matches!(r, Err(FieldError::NonFinite { x: 0, y: 1 })));

        let r = HeightField::from_samples(2, 2, vec![0.0, f64::INFINITY, 0.0, 1.0], BitDepth::Eight);
        assert!(matches!(r, Err(FieldError::NonFinite { x: 1, y: 0 })));
    }

    #[test]
    fn depth_precision() {
        assert_eq!(BitDepth::Eight.decimal_places(), 5);
        assert_eq!(BitDepth::Sixteen.decimal_places(), 7);
        assert_eq!(BitDepth::Eight.levels(), 256);
        assert_eq!(BitDepth::Sixteen.levels(), 65536);
    }
}
