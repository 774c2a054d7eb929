use alloc::vec;
use alloc::vec::Vec;

use f4_field::Field;
use sha3::Shake256;
use sha3::digest::{ExtendableOutput, Update, XofReader};

use crate::STATE_WIDTH;

/// Rounds of the large permutation used by the worked instances.
pub const LARGE_ROUNDS: usize = 134;

/// Rounds of the small per-block permutation used by the worked instances.
pub const SMALL_ROUNDS: usize = 10;

/// Compute the SHAKE256 variant of SHA-3.
/// This is used to generate the round constants from a domain string.
fn shake256_hash(seed_bytes: &[u8], num_bytes: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(seed_bytes);
    let mut reader = hasher.finalize_xof();
    let mut result = vec![0u8; num_bytes];
    reader.read(&mut result);
    result
}

/// Derive a public round-constant table from a domain string.
///
/// The domain string must uniquely describe the active field (for example
/// `"GF(<p>)"`, or `"GF(2)[X]/<hex modulus>"`), so that different fields
/// never share a table. The SHAKE256 output stream is sliced into
/// [`Field::ENCODED_BYTES`]-wide chunks and each chunk converted with
/// [`Field::from_bytes`]. Regeneration from the same domain string is
/// byte-identical.
pub fn round_constants<F: Field>(domain: &str, rounds: usize) -> Vec<F> {
    let num_bytes = rounds * STATE_WIDTH * F::ENCODED_BYTES;
    shake256_hash(domain.as_bytes(), num_bytes)
        .chunks_exact(F::ENCODED_BYTES)
        .map(F::from_bytes)
        .collect()
}

/// Derive the constant tables for a large/small permutation pair.
///
/// The small permutation does not get an independent derivation: its table
/// is the tail of the large one, so a single XOF invocation pins down both.
pub fn derive_tables<F: Field>(
    domain: &str,
    large_rounds: usize,
    small_rounds: usize,
) -> (Vec<F>, Vec<F>) {
    assert!(small_rounds <= large_rounds);
    let large = round_constants::<F>(domain, large_rounds);
    let small = large[large.len() - STATE_WIDTH * small_rounds..].to_vec();
    (large, small)
}
