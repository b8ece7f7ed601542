//! Seedable subset selection for the refresh affordance.
//!
//! Eligibility stays pure and deterministic in the engine; this module is
//! the only place randomness enters, and every call site seeds it from the
//! caller's refresh token so repeated calls with the same token agree.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Maps an opaque refresh token to a sampling seed. First eight bytes of
/// the blake3 digest, little-endian.
pub fn refresh_seed(token: &str) -> u64 {
    let digest = blake3::hash(token.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Picks `k` of `len` indices without replacement, returned sorted so the
/// caller can keep catalog order. Returns all indices when `len <= k`.
pub fn sample_in_order(len: usize, k: usize, seed: u64) -> Vec<usize> {
    if len <= k {
        return (0..len).collect();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..len).collect();
    indices.shuffle(&mut rng);
    indices.truncate(k);
    indices.sort_unstable();
    indices
}
