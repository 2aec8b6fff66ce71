//! Grid layout and tessellation.
//!
//! The heightfield is a `div × div` cell grid of `(div+1)²` vertices evenly
//! spaced over a rectangle in the XY plane. Heights (z) start at zero and
//! are the only coordinate that ever changes. Cells are tessellated into two
//! counter-clockwise triangles each, so every interior vertex is shared by
//! six faces.

use glam::Vec3;

use crate::error::HeightfieldError;

/// Construction parameters for a [`Heightfield`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    /// Number of cells along each axis. Vertex count per axis is `divisions + 1`.
    pub divisions: u32,
    /// Minimum x coordinate of the rectangle.
    pub min_x: f32,
    /// Maximum x coordinate of the rectangle.
    pub max_x: f32,
    /// Minimum y coordinate of the rectangle.
    pub min_y: f32,
    /// Maximum y coordinate of the rectangle.
    pub max_y: f32,
}

impl GridParams {
    /// Validate the parameters, rejecting degenerate grids up front.
    pub fn validate(&self) -> Result<(), HeightfieldError> {
        if self.divisions < 1 {
            return Err(HeightfieldError::TooFewDivisions(self.divisions));
        }
        if !(self.min_x.is_finite() && self.max_x.is_finite()) || self.min_x >= self.max_x {
            return Err(HeightfieldError::InvalidExtent {
                axis: 'x',
                min: self.min_x,
                max: self.max_x,
            });
        }
        if !(self.min_y.is_finite() && self.max_y.is_finite()) || self.min_y >= self.max_y {
            return Err(HeightfieldError::InvalidExtent {
                axis: 'y',
                min: self.min_y,
                max: self.max_y,
            });
        }
        Ok(())
    }

    /// Vertices per axis: `divisions + 1`.
    pub fn width(&self) -> u32 {
        self.divisions + 1
    }
}

/// A grid mesh whose vertex heights are the only free coordinate.
///
/// Built flat by [`new`](Self::new), perturbed by
/// [`displace`](Self::displace), finalized by
/// [`compute_normals`](Self::compute_normals). Normals are `None` until the
/// finalization pass has run.
#[derive(Clone, Debug)]
pub struct Heightfield {
    params: GridParams,
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    normals: Option<Vec<Vec3>>,
}

impl Heightfield {
    /// Lay out a flat grid over the given rectangle and build its triangle
    /// index list.
    ///
    /// Vertex `(i, j)` sits at
    /// `(min_x + j·dx, min_y + i·dy, 0)` with `dx = (max_x−min_x)/divisions`
    /// and `dy = (max_y−min_y)/divisions`. Cell `(i, j)` with base vertex
    /// `v = i·W + j` (row-major, `W = divisions+1`) produces triangles
    /// `{v, v+1, v+W}` and `{v+1, v+1+W, v+W}`.
    pub fn new(params: GridParams) -> Result<Self, HeightfieldError> {
        params.validate()?;

        let div = params.divisions;
        let w = params.width();
        let dx = (params.max_x - params.min_x) / div as f32;
        let dy = (params.max_y - params.min_y) / div as f32;

        let mut positions = Vec::with_capacity((w * w) as usize);
        for i in 0..w {
            for j in 0..w {
                positions.push(Vec3::new(
                    params.min_x + dx * j as f32,
                    params.min_y + dy * i as f32,
                    0.0,
                ));
            }
        }

        let mut indices = Vec::with_capacity((div * div * 6) as usize);
        for i in 0..div {
            for j in 0..div {
                let v = i * w + j;
                indices.extend_from_slice(&[v, v + 1, v + w]);
                indices.extend_from_slice(&[v + 1, v + 1 + w, v + w]);
            }
        }

        tracing::debug!(
            vertices = positions.len(),
            faces = indices.len() / 3,
            "heightfield grid built"
        );

        Ok(Self {
            params,
            positions,
            indices,
            normals: None,
        })
    }

    /// The parameters the grid was built with.
    pub fn params(&self) -> &GridParams {
        &self.params
    }

    /// Vertex positions, row-major. `(divisions+1)²` entries.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Triangle index list, three indices per face.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Unit vertex normals, or `None` before
    /// [`compute_normals`](Self::compute_normals) has run.
    pub fn normals(&self) -> Option<&[Vec3]> {
        self.normals.as_deref()
    }

    /// The vertex at grid location `(i, j)`: row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` exceeds `divisions`.
    pub fn vertex(&self, i: u32, j: u32) -> Vec3 {
        let w = self.params.width();
        assert!(i < w && j < w, "vertex ({i}, {j}) outside {w}x{w} grid");
        self.positions[(i * w + j) as usize]
    }

    /// Number of vertices: `(divisions+1)²`.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles: `2·divisions²`.
    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Deduplicated undirected edges, for wireframe line buffers.
    ///
    /// Each pair is ordered `(lo, hi)` and appears once even though interior
    /// edges are shared by two triangles. A `d × d` grid has `3d² + 2d`
    /// unique edges.
    pub fn edges(&self) -> Vec<(u32, u32)> {
        let mut edges: Vec<(u32, u32)> = self
            .indices
            .chunks_exact(3)
            .flat_map(|tri| {
                [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])]
                    .map(|(a, b)| (a.min(b), a.max(b)))
            })
            .collect();
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// Minimum and maximum height across all vertices, a single linear scan.
    ///
    /// Used downstream to normalize height-based shading. On the flat grid
    /// this is exactly `(0.0, 0.0)`.
    pub fn height_range(&self) -> (f32, f32) {
        let mut min_z = f32::INFINITY;
        let mut max_z = f32::NEG_INFINITY;
        for p in &self.positions {
            min_z = min_z.min(p.z);
            max_z = max_z.max(p.z);
        }
        (min_z, max_z)
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    pub(crate) fn normals_slot(&mut self) -> &mut Option<Vec<Vec3>> {
        &mut self.normals
    }

    pub(crate) fn is_finalized(&self) -> bool {
        self.normals.is_some()
    }
}
