//! Indexed elevation-surface mesh.

use crate::{Aabb, BitDepth, Triangle};
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh covering a heightfield's footprint.
///
/// Vertices and faces are stored separately, with faces referencing vertices
/// by index. The vertex for grid position (x, y) is always at index
/// `y * grid_width + x`, so cells sharing an edge reference identical
/// vertices and the surface has no cracks. Centre vertices synthesized for
/// Hybrid cells are appended after all grid vertices.
///
/// A mesh is built once per conversion and never mutated afterwards; the
/// solid extruder and the serializers consume it read-only.
///
/// # Winding Order
///
/// Faces use **counter-clockwise winding viewed from +z**, so surface
/// normals point up by the right-hand rule.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceMesh {
    /// Vertex positions. Grid vertices first, then Hybrid centres.
    pub vertices: Vec<Point3<f64>>,

    /// Triangle faces as indices into the vertex array, CCW from +z.
    pub faces: Vec<[u32; 3]>,

    /// Width in samples of the source grid.
    pub grid_width: usize,

    /// Height in samples of the source grid.
    pub grid_height: usize,

    /// Bit depth of the source raster, governs text output precision.
    pub depth: BitDepth,
}

impl SurfaceMesh {
    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(
        vertex_count: usize,
        face_count: usize,
        grid_width: usize,
        grid_height: usize,
        depth: BitDepth,
    ) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            grid_width,
            grid_height,
            depth,
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Vertex index of grid position (x, y).
    ///
    /// Valid for `x < grid_width`, `y < grid_height`; centre vertices have
    /// no grid position.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: vertex indices are u32, grids beyond 4B samples are unsupported
    pub const fn grid_index(&self, x: usize, y: usize) -> u32 {
        (y * self.grid_width + x) as u32
    }

    /// Resolve a face to a concrete [`Triangle`].
    ///
    /// Returns `None` if the face index is out of bounds.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces.get(face_index).map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize],
            v1: self.vertices[i1 as usize],
            v2: self.vertices[i2 as usize],
        })
    }

    /// Iterate over all faces as concrete [`Triangle`]s.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize],
            v1: self.vertices[i1 as usize],
            v2: self.vertices[i2 as usize],
        })
    }

    /// Axis-aligned bounds of the surface.
    ///
    /// Returns an empty AABB for a mesh with no vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }
}
