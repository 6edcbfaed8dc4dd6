//! Solid extension: side walls and bottom closing a surface into a solid.

use crate::{SurfaceMesh, Triangle};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A wall or bottom facet of the solid extension.
///
/// Unlike surface faces, extension facets carry their outward normal
/// explicitly: walls and bottom are axis-aligned by construction, and a
/// zero-height wall (flat field at base elevation) is degenerate, so the
/// normal cannot always be recovered from the vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolidFacet {
    /// Vertex indices into the combined arena (surface vertices first,
    /// extension vertices after), CCW viewed from outside.
    pub indices: [u32; 3],
    /// Outward unit normal.
    pub normal: Vector3<f64>,
}

/// Side-wall and bottom geometry that closes a [`SurfaceMesh`] into a
/// watertight solid.
///
/// Kept separate from the surface mesh so mesh-only formats (OBJ, DXF) can
/// ignore it entirely; it is never merged back. Facet indices address the
/// combined vertex arena: indices below `surface_vertex_count` refer to the
/// surface mesh, the rest to [`SolidExtension::vertices`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolidExtension {
    /// Base-plate vertices, one per grid position, at `base_elevation`.
    pub vertices: Vec<Point3<f64>>,

    /// Perimeter wall facets, outward normals in the xy plane.
    pub walls: Vec<SolidFacet>,

    /// Bottom facets, normals pointing -z.
    pub bottom: Vec<SolidFacet>,

    /// Number of surface vertices the indices were built against.
    pub surface_vertex_count: usize,

    /// Elevation of the base plate.
    pub base_elevation: f64,
}

impl SolidExtension {
    /// Total number of extension facets (walls + bottom).
    #[inline]
    #[must_use]
    pub fn facet_count(&self) -> usize {
        self.walls.len() + self.bottom.len()
    }

    /// Resolve a facet against the combined arena of `mesh` and `self`.
    ///
    /// Returns `None` if any index is out of range for the combined arena.
    #[must_use]
    pub fn resolve(&self, mesh: &SurfaceMesh, facet: &SolidFacet) -> Option<Triangle> {
        let pos = |i: u32| -> Option<Point3<f64>> {
            let i = i as usize;
            if i < self.surface_vertex_count {
                mesh.vertices.get(i).copied()
            } else {
                self.vertices.get(i - self.surface_vertex_count).copied()
            }
        };
        Some(Triangle {
            v0: pos(facet.indices[0])?,
            v1: pos(facet.indices[1])?,
            v2: pos(facet.indices[2])?,
        })
    }

    /// Iterate over all facets, walls first, then bottom.
    pub fn facets(&self) -> impl Iterator<Item = &SolidFacet> {
        self.walls.iter().chain(self.bottom.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BitDepth;

    #[test]
    fn resolve_spans_both_arenas() {
        let mut mesh = SurfaceMesh::with_capacity(2, 0, 2, 2, BitDepth::Eight);
        mesh.vertices.push(Point3::new(0.0, 0.0, 0.5));
        mesh.vertices.push(Point3::new(1.0, 0.0, 0.5));

        let ext = SolidExtension {
            vertices: vec![Point3::new(0.0, 0.0, 0.0)],
            walls: vec![SolidFacet {
                indices: [0, 1, 2],
                normal: Vector3::new(0.0, -1.0, 0.0),
            }],
            bottom: Vec::new(),
            surface_vertex_count: 2,
            base_elevation: 0.0,
        };

        let tri = ext.resolve(&mesh, &ext.walls[0]);
        assert!(tri.is_some());
        if let Some(tri) = tri {
            assert_eq!(tri.v2, Point3::new(0.0, 0.0, 0.0));
        }

        let bad = SolidFacet {
            indices: [0, 1, 9],
            normal: Vector3::zeros(),
        };
        assert!(ext.resolve(&mesh, &bad).is_none());
    }

    #[test]
    fn facet_count_sums_walls_and_bottom() {
        let facet = SolidFacet {
            indices: [0, 0, 0],
            normal: Vector3::zeros(),
        };
        let ext = SolidExtension {
            vertices: Vec::new(),
            walls: vec![facet; 3],
            bottom: vec![facet; 2],
            surface_vertex_count: 0,
            base_elevation: 0.0,
        };
        assert_eq!(ext.facet_count(), 5);
    }
}
