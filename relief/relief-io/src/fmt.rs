//! Coordinate text formatting shared by the fixed-point formats.

use crate::error::{ExportError, ExportResult};

/// Reject non-finite values before they reach a text sink.
pub(crate) fn check_finite(format: &'static str, value: f64) -> ExportResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExportError::Unrepresentable { format, value })
    }
}

/// Fixed-point coordinate text with trailing zeros (and a bare trailing
/// dot) trimmed, so `1.50000` becomes `1.5` and `2.00000` becomes `2`.
///
/// POV, OBJ and DXF all use this rule; the precision comes from the source
/// bit depth.
pub(crate) fn coord(format: &'static str, value: f64, decimals: usize) -> ExportResult<String> {
    let value = check_finite(format, value)?;
    let text = format!("{value:.decimals$}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    // "-0" collapses to "0" so identical geometry always serializes
    // identically
    if trimmed == "-0" {
        return Ok("0".to_string());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros_and_dot() {
        let cases = [
            (1.5, "1.5"),
            (2.0, "2"),
            (0.25, "0.25"),
            (-0.5, "-0.5"),
            (0.0, "0"),
            (-0.0, "0"),
        ];
        for (value, expected) in cases {
            match coord("TEST", value, 5) {
                Ok(s) => assert_eq!(s, expected, "formatting {value}"),
                Err(e) => panic!("unexpected error for {value}: {e}"),
            }
        }
    }

    #[test]
    fn respects_precision() {
        match coord("TEST", 0.123_456_789, 5) {
            Ok(s) => assert_eq!(s, "0.12346"),
            Err(e) => panic!("unexpected error: {e}"),
        }
        match coord("TEST", 0.123_456_789, 7) {
            Ok(s) => assert_eq!(s, "0.1234568"),
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(matches!(
            coord("TEST", f64::NAN, 5),
            Err(ExportError::Unrepresentable { format: "TEST", .. })
        ));
        assert!(matches!(
            coord("TEST", f64::INFINITY, 5),
            Err(ExportError::Unrepresentable { .. })
        ));
    }
}
