//! Mesh construction errors.

/// Errors building upload-ready geometry.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// The source heightfield has not run its normals pass yet.
    #[error("heightfield normals are not computed, finalize it before meshing")]
    NormalsMissing,
}
