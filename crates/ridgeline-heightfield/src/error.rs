//! Heightfield error types.

/// Errors from heightfield construction and generation.
#[derive(Debug, thiserror::Error)]
pub enum HeightfieldError {
    /// The grid needs at least one cell per axis.
    #[error("grid needs at least 1 division per axis, got {0}")]
    TooFewDivisions(u32),

    /// An axis extent is empty, inverted, or non-finite.
    #[error("invalid {axis} extent: [{min}, {max}]")]
    InvalidExtent {
        /// Which axis the bad extent belongs to (`'x'` or `'y'`).
        axis: char,
        /// Lower bound as given.
        min: f32,
        /// Upper bound as given.
        max: f32,
    },

    /// The normals pass has already run; heights and normals are frozen.
    #[error("normals are finalized, the heightfield can no longer change")]
    NormalsFinalized,
}
