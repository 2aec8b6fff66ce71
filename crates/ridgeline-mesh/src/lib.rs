//! Upload-ready geometry for the coursework sketches: terrain mesh buffers,
//! the skybox cube, and the 2D logo quads.
//!
//! Everything here is plain index-aligned vertex data plus the canonical
//! vertex buffer layout; no GPU resources are created.

mod error;
pub mod logo;
pub mod skybox;
mod terrain_mesh;
mod vertex_format;

pub use error::MeshError;
pub use terrain_mesh::{MeshVertex, TerrainMesh};
pub use vertex_format::{TERRAIN_VERTEX_ATTRIBUTES, TERRAIN_VERTEX_LAYOUT};
