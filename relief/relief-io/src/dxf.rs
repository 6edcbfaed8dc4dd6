//! DXF serialization.
//!
//! Minimal deterministic drawing: a HEADER/TABLES skeleton declaring one
//! `RELIEF` layer, then one `3DFACE` entity per surface triangle. 3DFACE
//! carries four corners, so the third corner is repeated in the fourth
//! slot (group codes 13/23/33) to express a triangle.

use std::io::Write;

use relief_types::SurfaceMesh;

use crate::error::{ExportError, ExportResult};
use crate::fmt::coord;

const FORMAT: &str = "DXF";

/// Group-code/value pair on its own two lines, as the DXF text grammar
/// requires.
fn pair<W: Write>(writer: &mut W, code: u16, value: &str) -> ExportResult<()> {
    writeln!(writer, "{code}\n{value}").map_err(ExportError::io(FORMAT))
}

fn preamble<W: Write>(writer: &mut W) -> ExportResult<()> {
    pair(writer, 999, "Heightfield relief export")?;

    pair(writer, 0, "SECTION")?;
    pair(writer, 2, "HEADER")?;
    pair(writer, 9, "$ACADVER")?;
    pair(writer, 1, "AC1006")?;
    pair(writer, 0, "ENDSEC")?;

    pair(writer, 0, "SECTION")?;
    pair(writer, 2, "TABLES")?;
    pair(writer, 0, "TABLE")?;
    pair(writer, 2, "LAYER")?;
    pair(writer, 70, "1")?;
    pair(writer, 0, "LAYER")?;
    pair(writer, 2, "RELIEF")?;
    pair(writer, 70, "0")?;
    pair(writer, 62, "7")?;
    pair(writer, 6, "CONTINUOUS")?;
    pair(writer, 0, "ENDTAB")?;
    pair(writer, 0, "ENDSEC")?;
    Ok(())
}

pub(crate) fn encode_dxf<W: Write>(mesh: &SurfaceMesh, writer: &mut W) -> ExportResult<()> {
    let decimals = mesh.depth.decimal_places();

    preamble(writer)?;

    pair(writer, 0, "SECTION")?;
    pair(writer, 2, "ENTITIES")?;

    for tri in mesh.triangles() {
        pair(writer, 0, "3DFACE")?;
        pair(writer, 8, "RELIEF")?;
        for (offset, p) in [(0, tri.v0), (1, tri.v1), (2, tri.v2), (3, tri.v2)] {
            pair(writer, 10 + offset, &coord(FORMAT, p.x, decimals)?)?;
            pair(writer, 20 + offset, &coord(FORMAT, p.y, decimals)?)?;
            pair(writer, 30 + offset, &coord(FORMAT, p.z, decimals)?)?;
        }
        pair(writer, 62, "0")?;
    }

    pair(writer, 0, "ENDSEC")?;
    pair(writer, 0, "EOF")?;
    Ok(())
}
