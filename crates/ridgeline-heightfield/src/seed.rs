//! Deterministic RNG derivation for fault displacement.
//!
//! A world seed is hashed into a ChaCha8 stream so the same seed always
//! yields the same fault sequence, independent of platform or of any other
//! random stream a caller may be running.

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Domain tag keeping the fault stream independent of any future stream
/// derived from the same world seed.
const FAULT_CHANNEL: u64 = 0x6661756c74; // "fault"

/// Combine a world seed with the fault channel into a well-distributed u64.
pub fn derive_fault_seed(world_seed: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    world_seed.hash(&mut hasher);
    FAULT_CHANNEL.hash(&mut hasher);
    hasher.finish()
}

/// Deterministic RNG for [`Heightfield::displace`](crate::Heightfield::displace).
///
/// The returned RNG produces an identical sequence for the same `world_seed`
/// on every platform.
pub fn fault_rng(world_seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_fault_seed(world_seed))
}
