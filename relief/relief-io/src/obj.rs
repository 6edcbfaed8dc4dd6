//! Wavefront OBJ serialization.
//!
//! Surface geometry only: one `v` line per vertex, one `f` line per face
//! with 1-based indices. No materials, no normals, no solid geometry.

use std::io::Write;

use relief_types::SurfaceMesh;

use crate::error::{ExportError, ExportResult};
use crate::fmt::coord;

const FORMAT: &str = "OBJ";

pub(crate) fn encode_obj<W: Write>(mesh: &SurfaceMesh, writer: &mut W) -> ExportResult<()> {
    let decimals = mesh.depth.decimal_places();

    writeln!(writer, "# Heightfield relief surface").map_err(ExportError::io(FORMAT))?;
    writeln!(writer, "o relief").map_err(ExportError::io(FORMAT))?;

    for v in &mesh.vertices {
        writeln!(
            writer,
            "v {} {} {}",
            coord(FORMAT, v.x, decimals)?,
            coord(FORMAT, v.y, decimals)?,
            coord(FORMAT, v.z, decimals)?
        )
        .map_err(ExportError::io(FORMAT))?;
    }

    for &[a, b, c] in &mesh.faces {
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1).map_err(ExportError::io(FORMAT))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_types::{BitDepth, Point3};

    fn single_cell_mesh() -> SurfaceMesh {
        let mut mesh = SurfaceMesh::with_capacity(4, 2, 2, 2, BitDepth::Eight);
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
            mesh.vertices.push(Point3::new(x, y, 0.5));
        }
        mesh.faces.push([0, 1, 3]);
        mesh.faces.push([0, 3, 2]);
        mesh
    }

    #[test]
    fn indices_are_one_based() {
        let mesh = single_cell_mesh();
        let mut out = Vec::new();
        if let Err(e) = encode_obj(&mesh, &mut out) {
            panic!("encode failed: {e}");
        }
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("f 1 2 4"));
        assert!(text.contains("f 1 4 3"));
        assert!(!text.contains("f 0"));
    }

    #[test]
    fn vertices_use_trimmed_fixed_point() {
        let mesh = single_cell_mesh();
        let mut out = Vec::new();
        if let Err(e) = encode_obj(&mesh, &mut out) {
            panic!("encode failed: {e}");
        }
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("v 0 0 0.5"));
        assert!(text.contains("v 1 1 0.5"));
    }
}
