//! End-to-end smoke tests for the conversion pipeline.

use relief::io::MeshFormat;
use relief::pipeline::{convert, convert_to_path, ConvertConfig};
use relief::types::{BitDepth, HeightField};

fn ramp_field() -> HeightField {
    #[allow(clippy::cast_precision_loss)]
    let samples: Vec<f64> = (0..16).map(|i| f64::from(i) / 15.0).collect();
    match HeightField::from_samples(4, 4, samples, BitDepth::Eight) {
        Ok(f) => f,
        Err(e) => panic!("test field invalid: {e}"),
    }
}

#[test]
fn every_format_converts_without_error() {
    let field = ramp_field();
    for format in [
        MeshFormat::Pov,
        MeshFormat::Obj,
        MeshFormat::Stl,
        MeshFormat::Dxf,
    ] {
        let mut out = Vec::new();
        if let Err(e) = convert(&field, &ConvertConfig::new(format), &mut out) {
            panic!("{} conversion failed: {e}", format.name());
        }
        assert!(!out.is_empty(), "{} produced no output", format.name());
    }
}

#[test]
fn conversion_is_deterministic_end_to_end() {
    let field = ramp_field();
    let config = ConvertConfig::new(MeshFormat::Pov);

    let mut first = Vec::new();
    let mut second = Vec::new();
    if let Err(e) = convert(&field, &config, &mut first) {
        panic!("conversion failed: {e}");
    }
    if let Err(e) = convert(&field, &config, &mut second) {
        panic!("conversion failed: {e}");
    }
    assert_eq!(first, second);
}

#[test]
fn path_conversion_matches_writer_conversion() {
    let field = ramp_field();
    let config = ConvertConfig::new(MeshFormat::Dxf);
    let dir = match tempfile::tempdir() {
        Ok(d) => d,
        Err(e) => panic!("tempdir failed: {e}"),
    };
    let path = dir.path().join("relief.dxf");

    if let Err(e) = convert_to_path(&field, &config, &path) {
        panic!("path conversion failed: {e}");
    }
    let from_path = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => panic!("could not read output: {e}"),
    };

    let mut from_writer = Vec::new();
    if let Err(e) = convert(&field, &config, &mut from_writer) {
        panic!("conversion failed: {e}");
    }

    assert_eq!(from_path, from_writer);
}
