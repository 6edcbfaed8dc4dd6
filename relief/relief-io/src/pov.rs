//! POV-Ray scene serialization.
//!
//! The output is a self-contained renderable scene and, at the same time,
//! an includable asset: the camera, lights and texture are wrapped in
//! `#ifndef` guards, so a host scene that pre-declares `Main`,
//! `relief_texture` or `relief_transform` takes over those decisions and
//! only the geometry is contributed.
//!
//! Geometry is emitted as a `mesh2` surface with an `inside_vector`, then
//! closed into a solid by `boxedthing`, a CSG intersection with the
//! bounding box inset slightly in x/y and extended above in z. The box
//! bottom sits at the extension's base elevation.

use std::io::Write;

use relief_types::{SolidExtension, SurfaceMesh};

use crate::error::{ExportError, ExportResult};
use crate::fmt::coord;

const FORMAT: &str = "POV";

/// x/y inset of the clipping box, in grid units. Keeps the box faces off
/// the outermost mesh vertices so the intersection is numerically stable.
const BOX_INSET: f64 = 0.005;

/// How far above the highest vertex the clipping box extends.
const BOX_HEADROOM: f64 = 1.0;

pub(crate) fn encode_pov<W: Write>(
    mesh: &SurfaceMesh,
    solid: Option<&SolidExtension>,
    writer: &mut W,
) -> ExportResult<()> {
    let solid = solid.ok_or(ExportError::MissingSolid { format: FORMAT })?;
    let io = || ExportError::io(FORMAT);
    let decimals = mesh.depth.decimal_places();
    let c = |v: f64| coord(FORMAT, v, decimals);

    let bounds = mesh.bounds();
    let center = bounds.center();
    let size = bounds.size();

    writeln!(writer, "// Heightfield relief scene").map_err(io())?;
    writeln!(
        writer,
        "// Renderable on its own; #declare Main before including to supply"
    )
    .map_err(io())?;
    writeln!(writer, "// your own camera and lights.\n").map_err(io())?;
    writeln!(writer, "#version 3.7;\n").map_err(io())?;

    writeln!(writer, "global_settings {{").map_err(io())?;
    writeln!(writer, "    max_trace_level 3").map_err(io())?;
    writeln!(writer, "    adc_bailout 0.01").map_err(io())?;
    writeln!(writer, "    ambient_light <0.5, 0.5, 0.5>").map_err(io())?;
    writeln!(writer, "    assumed_gamma 1.0").map_err(io())?;
    writeln!(writer, "}}\n").map_err(io())?;

    // Elevation-to-color transfer spline, overridable like the texture
    writeln!(writer, "#ifndef (Map)").map_err(io())?;
    writeln!(writer, "    #declare Map = spline {{").map_err(io())?;
    writeln!(writer, "        linear_spline").map_err(io())?;
    writeln!(writer, "        0.0, <0.1, 0.1, 0.1>").map_err(io())?;
    writeln!(writer, "        0.5, <0.5, 0.5, 0.5>").map_err(io())?;
    writeln!(writer, "        1.0, <0.9, 0.9, 0.9>").map_err(io())?;
    writeln!(writer, "    }}").map_err(io())?;
    writeln!(writer, "#end\n").map_err(io())?;

    writeln!(writer, "#ifndef (relief_texture)").map_err(io())?;
    writeln!(writer, "    #declare relief_texture = texture {{").map_err(io())?;
    writeln!(
        writer,
        "        pigment {{ function {{ z }} color_map {{ [0 rgb Map(0)] [0.5 rgb Map(0.5)] [1 rgb Map(1)] }} }}"
    )
    .map_err(io())?;
    writeln!(writer, "        finish {{ phong 0.2 phong_size 5 }}").map_err(io())?;
    writeln!(writer, "    }}").map_err(io())?;
    writeln!(writer, "#end\n").map_err(io())?;

    // Default transform centers the relief on the origin
    writeln!(writer, "#ifndef (relief_transform)").map_err(io())?;
    writeln!(writer, "    #declare relief_transform = transform {{").map_err(io())?;
    writeln!(
        writer,
        "        translate <-{}, -{}, 0>",
        c(center.x)?,
        c(center.y)?
    )
    .map_err(io())?;
    writeln!(writer, "    }}").map_err(io())?;
    writeln!(writer, "#end\n").map_err(io())?;

    // Camera straight above the relief, two key lights and a dim headlamp
    writeln!(writer, "#ifndef (Main)").map_err(io())?;
    writeln!(writer, "    camera {{").map_err(io())?;
    writeln!(writer, "        perspective").map_err(io())?;
    writeln!(
        writer,
        "        location <0, 0, {}>",
        c(bounds.max.z + size.x.max(size.y) * 1.5)?
    )
    .map_err(io())?;
    writeln!(writer, "        look_at <0, 0, 0>").map_err(io())?;
    writeln!(writer, "        right x * image_width / image_height").map_err(io())?;
    writeln!(writer, "        up y").map_err(io())?;
    writeln!(writer, "        angle 40").map_err(io())?;
    writeln!(writer, "    }}\n").map_err(io())?;
    let light_z = c(bounds.max.z + size.x.max(size.y))?;
    writeln!(
        writer,
        "    light_source {{ <-{}, -{}, {}> rgb <1, 1, 1> }}",
        c(size.x)?,
        c(size.y)?,
        light_z
    )
    .map_err(io())?;
    writeln!(
        writer,
        "    light_source {{ <{}, -{}, {}> rgb <1, 1, 1> }}",
        c(size.x)?,
        c(size.y)?,
        light_z
    )
    .map_err(io())?;
    writeln!(
        writer,
        "    light_source {{ <0, 0, {light_z}> rgb <0.1, 0.1, 0.1> }}"
    )
    .map_err(io())?;
    writeln!(writer, "#end\n").map_err(io())?;

    // Surface geometry
    writeln!(writer, "#declare thething = mesh2 {{").map_err(io())?;
    writeln!(writer, "    vertex_vectors {{").map_err(io())?;
    writeln!(writer, "        {},", mesh.vertex_count()).map_err(io())?;
    for v in &mesh.vertices {
        writeln!(writer, "        <{}, {}, {}>,", c(v.x)?, c(v.y)?, c(v.z)?).map_err(io())?;
    }
    writeln!(writer, "    }}").map_err(io())?;
    writeln!(writer, "    face_indices {{").map_err(io())?;
    writeln!(writer, "        {},", mesh.face_count()).map_err(io())?;
    for &[i0, i1, i2] in &mesh.faces {
        writeln!(writer, "        <{i0}, {i1}, {i2}>,").map_err(io())?;
    }
    writeln!(writer, "    }}").map_err(io())?;
    writeln!(writer, "    inside_vector <0, 0, 1>").map_err(io())?;
    writeln!(writer, "}}\n").map_err(io())?;

    // Close the open surface into a solid by clipping against its bounding
    // box, bottom at the base elevation
    writeln!(writer, "#declare boxedthing = intersection {{").map_err(io())?;
    writeln!(writer, "    object {{ thething }}").map_err(io())?;
    writeln!(
        writer,
        "    box {{ <{}, {}, {}>, <{}, {}, {}> }}",
        c(bounds.min.x + BOX_INSET)?,
        c(bounds.min.y + BOX_INSET)?,
        c(solid.base_elevation)?,
        c(bounds.max.x - BOX_INSET)?,
        c(bounds.max.y - BOX_INSET)?,
        c(bounds.max.z + BOX_HEADROOM)?
    )
    .map_err(io())?;
    writeln!(writer, "}}\n").map_err(io())?;

    writeln!(writer, "object {{").map_err(io())?;
    writeln!(writer, "    boxedthing").map_err(io())?;
    writeln!(writer, "    texture {{ relief_texture }}").map_err(io())?;
    writeln!(writer, "    transform {{ relief_transform }}").map_err(io())?;
    writeln!(writer, "}}").map_err(io())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_types::{BitDepth, Point3};

    fn mesh_and_solid() -> (SurfaceMesh, SolidExtension) {
        let mut mesh = SurfaceMesh::with_capacity(4, 2, 2, 2, BitDepth::Eight);
        for (x, y, z) in [
            (0.0, 0.0, 0.25),
            (1.0, 0.0, 0.25),
            (0.0, 1.0, 0.25),
            (1.0, 1.0, 0.25),
        ] {
            mesh.vertices.push(Point3::new(x, y, z));
        }
        mesh.faces.push([0, 1, 3]);
        mesh.faces.push([0, 3, 2]);
        let solid = SolidExtension {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ],
            walls: Vec::new(),
            bottom: Vec::new(),
            surface_vertex_count: 4,
            base_elevation: 0.0,
        };
        (mesh, solid)
    }

    #[test]
    fn scene_declares_guarded_blocks_and_mesh2() {
        let (mesh, solid) = mesh_and_solid();
        let mut out = Vec::new();
        if let Err(e) = encode_pov(&mesh, Some(&solid), &mut out) {
            panic!("encode failed: {e}");
        }
        let text = String::from_utf8_lossy(&out);

        assert!(text.starts_with("// Heightfield relief scene"));
        assert!(text.contains("#version 3.7;"));
        assert!(text.contains("#ifndef (Main)"));
        assert!(text.contains("#ifndef (relief_texture)"));
        assert!(text.contains("mesh2 {"));
        assert!(text.contains("inside_vector <0, 0, 1>"));
        assert!(text.contains("#declare boxedthing = intersection {"));
    }

    #[test]
    fn clipping_box_bottom_sits_at_base_elevation() {
        let (mesh, mut solid) = mesh_and_solid();
        solid.base_elevation = -0.5;
        let mut out = Vec::new();
        if let Err(e) = encode_pov(&mesh, Some(&solid), &mut out) {
            panic!("encode failed: {e}");
        }
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("box { <0.005, 0.005, -0.5>"));
    }

    #[test]
    fn missing_solid_is_rejected() {
        let (mesh, _) = mesh_and_solid();
        let mut out = Vec::new();
        assert!(matches!(
            encode_pov(&mesh, None, &mut out),
            Err(ExportError::MissingSolid { format: "POV" })
        ));
    }
}
