//! Procedural heightfield generation: a regular grid perturbed by random
//! fault-plane displacement, with area-weighted smooth normals.
//!
//! A [`Heightfield`] moves through three phases: the grid is built flat at
//! construction, heights are perturbed in place by [`Heightfield::displace`],
//! and normals are derived once by [`Heightfield::compute_normals`]. After
//! the normals pass the geometry is frozen; further mutation is rejected.

mod error;
mod fault;
mod grid;
mod normals;
mod seed;

pub use error::HeightfieldError;
pub use grid::{GridParams, Heightfield};
pub use seed::{derive_fault_seed, fault_rng};
