//! Solid extrusion: side walls and bottom plate.

use relief_types::{Point3, SolidExtension, SolidFacet, SurfaceMesh, Vector3};
use tracing::debug;

/// Close a surface mesh into a watertight solid.
///
/// Adds a base vertex under every grid position at `base_elevation`, two
/// wall triangles per perimeter grid edge, and two bottom triangles per
/// cell. Wall triangles reference the surface's own boundary vertices, so
/// the seam between surface and walls shares vertex identity and every edge
/// of the combined mesh ends up on exactly two triangles.
///
/// The perimeter is walked counter-clockwise viewed from +z, which keeps
/// wall normals outward (-y, +x, +y, -x in walk order); bottom normals
/// point -z. Normals are stored on the facets because a flat field at base
/// elevation produces zero-height, degenerate walls whose normals could not
/// be recovered from their vertices.
///
/// # Example
///
/// ```
/// use relief_mesh::{build_mesh, extrude_solid, select_variants};
/// use relief_types::{BitDepth, HeightField};
///
/// let field = HeightField::from_samples(2, 2, vec![0.0; 4], BitDepth::Eight)?;
/// let mesh = build_mesh(&field, &select_variants(&field, 0.05))?;
/// let solid = extrude_solid(&mesh, 0.0);
///
/// // One cell: 4 perimeter edges x 2 wall triangles, 2 bottom triangles
/// assert_eq!(solid.walls.len(), 8);
/// assert_eq!(solid.bottom.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn extrude_solid(mesh: &SurfaceMesh, base_elevation: f64) -> SolidExtension {
    let (w, h) = (mesh.grid_width, mesh.grid_height);
    let surface_vertex_count = mesh.vertex_count();

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: vertex indices are u32 by design
    let base = |x: usize, y: usize| (surface_vertex_count + y * w + x) as u32;

    #[allow(clippy::cast_precision_loss)]
    // Grid coordinates are small integers, exactly representable in f64
    let vertices: Vec<Point3<f64>> = (0..h)
        .flat_map(|y| (0..w).map(move |x| Point3::new(x as f64, y as f64, base_elevation)))
        .collect();

    let mut walls = Vec::with_capacity((2 * (w - 1) + 2 * (h - 1)) * 2);
    let mut wall = |a: u32, b: u32, a0: u32, b0: u32, normal: Vector3<f64>| {
        walls.push(SolidFacet {
            indices: [a, a0, b0],
            normal,
        });
        walls.push(SolidFacet {
            indices: [a, b0, b],
            normal,
        });
    };

    // Perimeter walk, CCW from +z: near row, right column, far row, left column
    for x in 0..w - 1 {
        let n = Vector3::new(0.0, -1.0, 0.0);
        wall(
            mesh.grid_index(x, 0),
            mesh.grid_index(x + 1, 0),
            base(x, 0),
            base(x + 1, 0),
            n,
        );
    }
    for y in 0..h - 1 {
        let n = Vector3::new(1.0, 0.0, 0.0);
        wall(
            mesh.grid_index(w - 1, y),
            mesh.grid_index(w - 1, y + 1),
            base(w - 1, y),
            base(w - 1, y + 1),
            n,
        );
    }
    for x in (0..w - 1).rev() {
        let n = Vector3::new(0.0, 1.0, 0.0);
        wall(
            mesh.grid_index(x + 1, h - 1),
            mesh.grid_index(x, h - 1),
            base(x + 1, h - 1),
            base(x, h - 1),
            n,
        );
    }
    for y in (0..h - 1).rev() {
        let n = Vector3::new(-1.0, 0.0, 0.0);
        wall(
            mesh.grid_index(0, y + 1),
            mesh.grid_index(0, y),
            base(0, y + 1),
            base(0, y),
            n,
        );
    }

    // Bottom plate, two triangles per cell, wound to face -z
    let down = Vector3::new(0.0, 0.0, -1.0);
    let mut bottom = Vec::with_capacity((w - 1) * (h - 1) * 2);
    for y in 0..h - 1 {
        for x in 0..w - 1 {
            let b1 = base(x, y);
            let b2 = base(x + 1, y);
            let b3 = base(x + 1, y + 1);
            let b4 = base(x, y + 1);
            bottom.push(SolidFacet {
                indices: [b1, b3, b2],
                normal: down,
            });
            bottom.push(SolidFacet {
                indices: [b1, b4, b3],
                normal: down,
            });
        }
    }

    debug!(
        walls = walls.len(),
        bottom = bottom.len(),
        base_elevation,
        "solid extension built"
    );

    SolidExtension {
        vertices,
        walls,
        bottom,
        surface_vertex_count,
        base_elevation,
    }
}
