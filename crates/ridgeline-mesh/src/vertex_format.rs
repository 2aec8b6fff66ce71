//! Canonical `wgpu::VertexBufferLayout` for terrain rendering.
//!
//! The solid and wireframe pipelines share one vertex buffer, so both must
//! reference [`TERRAIN_VERTEX_LAYOUT`] to avoid layout drift.

use std::mem;

use static_assertions::const_assert_eq;
use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::terrain_mesh::MeshVertex;

/// Vertex attributes for [`MeshVertex`]: position then normal, both
/// `Float32x3`.
pub const TERRAIN_VERTEX_ATTRIBUTES: [VertexAttribute; 2] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
];

/// The vertex buffer layout shared by every terrain pipeline.
pub const TERRAIN_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<MeshVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &TERRAIN_VERTEX_ATTRIBUTES,
};

// Two tightly packed Float32x3 attributes.
const_assert_eq!(mem::size_of::<MeshVertex>(), 24);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_covers_both_attributes() {
        assert_eq!(TERRAIN_VERTEX_LAYOUT.array_stride, 24);
        assert_eq!(TERRAIN_VERTEX_ATTRIBUTES[1].offset, 12);
    }

    #[test]
    fn shader_locations_are_sequential() {
        for (i, attr) in TERRAIN_VERTEX_ATTRIBUTES.iter().enumerate() {
            assert_eq!(attr.shader_location, i as u32);
        }
    }
}
