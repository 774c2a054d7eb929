use f4_field::Field;
use f4_symmetric::Permutation;

use crate::STATE_WIDTH;

/// The rolling function: a cheap, deterministic state-advance step.
///
/// `(s0, s1, s2, s3) -> (s1, s2, s3, s0 + s1 * s2)`: one multiplication
/// and one addition per step, against the O(rounds) cost of an iterated
/// transformation. It is a bijection (the shifted-out coordinate is
/// recoverable as `s3' - s0' * s1'`), hence a [`Permutation`], but it
/// provides no diffusion to speak of and is intentionally not a
/// [`CryptographicPermutation`]: its whole job is long-period
/// decorrelation between successive per-block values.
///
/// [`CryptographicPermutation`]: f4_symmetric::CryptographicPermutation
#[derive(Clone, Copy, Debug, Default)]
pub struct RollingFunction;

impl<F: Field> Permutation<[F; STATE_WIDTH]> for RollingFunction {
    fn permute_mut(&self, state: &mut [F; STATE_WIDTH]) {
        let feedback = state[0] + state[1] * state[2];
        state[0] = state[1];
        state[1] = state[2];
        state[2] = state[3];
        state[3] = feedback;
    }
}
