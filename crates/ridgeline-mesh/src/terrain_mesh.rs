//! Interleaved terrain mesh buffers built from a finalized heightfield.

use bytemuck::{Pod, Zeroable};
use ridgeline_heightfield::Heightfield;

use crate::error::MeshError;

/// A single terrain vertex: position plus unit normal, interleaved.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct MeshVertex {
    /// Position in world units.
    pub position: [f32; 3],
    /// Unit vertex normal.
    pub normal: [f32; 3],
}

/// Terrain geometry ready for vertex/index buffer upload.
///
/// `vertices` and the heightfield's grid are index-aligned; `indices` holds
/// triangles (three per face) and `lines` holds the deduplicated wireframe
/// edges (two indices per line segment) for edge overlays.
pub struct TerrainMesh {
    /// Interleaved vertex buffer contents.
    pub vertices: Vec<MeshVertex>,
    /// Triangle index buffer contents.
    pub indices: Vec<u32>,
    /// Line index buffer contents for wireframe rendering.
    pub lines: Vec<u32>,
}

impl TerrainMesh {
    /// Build the mesh from a heightfield whose normals pass has run.
    ///
    /// Fails with [`MeshError::NormalsMissing`] on a heightfield that has not
    /// been finalized; positions without matching normals cannot be shaded.
    pub fn from_heightfield(hf: &Heightfield) -> Result<Self, MeshError> {
        let normals = hf.normals().ok_or(MeshError::NormalsMissing)?;

        let vertices = hf
            .positions()
            .iter()
            .zip(normals)
            .map(|(p, n)| MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
            })
            .collect();

        let lines = hf
            .edges()
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .collect();

        Ok(Self {
            vertices,
            indices: hf.indices().to_vec(),
            lines,
        })
    }

    /// Vertex buffer contents as raw bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Triangle index buffer contents as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Line index buffer contents as raw bytes.
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }
}
