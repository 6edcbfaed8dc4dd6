//! Surface mesh construction.

use relief_types::{HeightField, Point3, SurfaceMesh};
use tracing::debug;

use crate::error::{MeshError, MeshResult};
use crate::select::GeometryVariant;

/// Build the elevation-surface mesh from a field and its per-cell variants.
///
/// Every grid sample becomes exactly one vertex at index
/// `y * width + x`, emitted up front, so neighboring cells always share
/// vertex identity along their common edge regardless of variant - the
/// surface is crack-free by construction. Hybrid centre vertices are
/// appended after the grid vertices.
///
/// Cell corners are numbered clockwise from the top-left sample:
///
/// ```text
/// 1 --- 2
/// |     |      1 = (x, y)    2 = (x+1, y)
/// 4 --- 3      4 = (x, y+1)  3 = (x+1, y+1)
/// ```
///
/// A Standard cell splits along the 1-3 diagonal into `[1 2 3]` and
/// `[1 3 4]`. A Hybrid cell gets a centre vertex at (x+0.5, y+0.5) with the
/// mean elevation of the four corners and four faces `[1 2 c]`, `[2 3 c]`,
/// `[3 4 c]`, `[4 1 c]`. All faces wind counter-clockwise viewed from +z.
///
/// # Errors
///
/// - [`MeshError::InvalidInput`] if the field is smaller than 2x2 (cannot
///   happen for a [`HeightField`] built through its validating constructor)
/// - [`MeshError::VariantCount`] if `variants` does not hold exactly one
///   entry per cell
pub fn build_mesh(field: &HeightField, variants: &[GeometryVariant]) -> MeshResult<SurfaceMesh> {
    let (w, h) = (field.width(), field.height());
    if w < 2 || h < 2 {
        return Err(MeshError::InvalidInput {
            width: w,
            height: h,
        });
    }
    if variants.len() != field.cell_count() {
        return Err(MeshError::VariantCount {
            expected: field.cell_count(),
            got: variants.len(),
        });
    }

    let hybrid_cells = variants
        .iter()
        .filter(|v| **v == GeometryVariant::Hybrid)
        .count();
    let mut mesh = SurfaceMesh::with_capacity(
        w * h + hybrid_cells,
        (field.cell_count() - hybrid_cells) * 2 + hybrid_cells * 4,
        w,
        h,
        field.depth(),
    );

    // Grid vertices, row-major
    #[allow(clippy::cast_precision_loss)]
    // Grid coordinates are small integers, exactly representable in f64
    for y in 0..h {
        for x in 0..w {
            mesh.vertices
                .push(Point3::new(x as f64, y as f64, field.sample(x, y)));
        }
    }

    #[allow(clippy::cast_precision_loss)]
    for cy in 0..h - 1 {
        for cx in 0..w - 1 {
            let i1 = mesh.grid_index(cx, cy);
            let i2 = mesh.grid_index(cx + 1, cy);
            let i3 = mesh.grid_index(cx + 1, cy + 1);
            let i4 = mesh.grid_index(cx, cy + 1);

            match variants[cy * (w - 1) + cx] {
                GeometryVariant::Standard => {
                    mesh.faces.push([i1, i2, i3]);
                    mesh.faces.push([i1, i3, i4]);
                }
                GeometryVariant::Hybrid => {
                    let z0 = (field.sample(cx, cy)
                        + field.sample(cx + 1, cy)
                        + field.sample(cx + 1, cy + 1)
                        + field.sample(cx, cy + 1))
                        / 4.0;
                    #[allow(clippy::cast_possible_truncation)]
                    // Truncation: vertex indices are u32 by design
                    let ic = mesh.vertices.len() as u32;
                    mesh.vertices
                        .push(Point3::new(cx as f64 + 0.5, cy as f64 + 0.5, z0));
                    mesh.faces.push([i1, i2, ic]);
                    mesh.faces.push([i2, i3, ic]);
                    mesh.faces.push([i3, i4, ic]);
                    mesh.faces.push([i4, i1, ic]);
                }
            }
        }
    }

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        hybrid_cells,
        "surface mesh built"
    );

    Ok(mesh)
}
