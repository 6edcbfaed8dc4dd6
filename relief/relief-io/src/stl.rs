//! ASCII STL serialization.
//!
//! Writes the complete watertight solid: surface facets first with unit
//! normals computed from their winding, then wall facets, then bottom
//! facets with the normals stored on the solid extension (zero-height
//! walls are degenerate, so their normals cannot be recomputed).

use std::io::Write;

use relief_types::{Point3, SolidExtension, SurfaceMesh, Vector3};

use crate::error::{ExportError, ExportResult};
use crate::fmt::check_finite;

const FORMAT: &str = "STL";

fn write_facet<W: Write>(
    writer: &mut W,
    normal: Vector3<f64>,
    corners: [Point3<f64>; 3],
) -> ExportResult<()> {
    for value in normal.iter().chain(corners.iter().flat_map(|p| p.iter())) {
        check_finite(FORMAT, *value)?;
    }

    writeln!(
        writer,
        "  facet normal {:.6e} {:.6e} {:.6e}",
        normal.x, normal.y, normal.z
    )
    .map_err(ExportError::io(FORMAT))?;
    writeln!(writer, "    outer loop").map_err(ExportError::io(FORMAT))?;
    for p in corners {
        writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", p.x, p.y, p.z)
            .map_err(ExportError::io(FORMAT))?;
    }
    writeln!(writer, "    endloop").map_err(ExportError::io(FORMAT))?;
    writeln!(writer, "  endfacet").map_err(ExportError::io(FORMAT))?;
    Ok(())
}

pub(crate) fn encode_stl<W: Write>(
    mesh: &SurfaceMesh,
    solid: Option<&SolidExtension>,
    writer: &mut W,
) -> ExportResult<()> {
    let solid = solid.ok_or(ExportError::MissingSolid { format: FORMAT })?;

    writeln!(writer, "solid relief").map_err(ExportError::io(FORMAT))?;

    for tri in mesh.triangles() {
        // Surface triangles always project onto the grid plane with
        // positive area, so a unit normal always exists
        let normal = tri.normal().unwrap_or_else(Vector3::zeros);
        write_facet(writer, normal, [tri.v0, tri.v1, tri.v2])?;
    }

    for facet in solid.facets() {
        // Extruder output always resolves against its own mesh
        let resolved = solid.resolve(mesh, facet);
        debug_assert!(resolved.is_some(), "solid facet index out of range");
        if let Some(tri) = resolved {
            write_facet(writer, facet.normal, [tri.v0, tri.v1, tri.v2])?;
        }
    }

    writeln!(writer, "endsolid relief").map_err(ExportError::io(FORMAT))?;
    Ok(())
}
