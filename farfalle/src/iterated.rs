use alloc::vec::Vec;

use f4_field::Field;
use f4_symmetric::{CryptographicPermutation, MixingLayer, Permutation};

use crate::FarfalleError;

/// A fixed-round-count iterated transformation over a `WIDTH`-element state.
///
/// The round count and constant table pin down the exact permutation; the
/// mixing layer supplies the confusion/diffusion formula and is applied
/// identically every round, so all round-to-round asymmetry comes from the
/// constants. In practice this is instantiated twice: once with many rounds
/// for the expensive session bootstrap and once with few rounds for the
/// cheap per-block call.
#[derive(Clone, Debug)]
pub struct IteratedTransformation<F, M, const WIDTH: usize> {
    round_constants: Vec<[F; WIDTH]>,
    mixer: M,
}

impl<F: Field, M: MixingLayer<F, WIDTH>, const WIDTH: usize> IteratedTransformation<F, M, WIDTH> {
    /// Build the transformation from its round count, flat constant table
    /// and mixing layer.
    ///
    /// Errors unless the table holds exactly `WIDTH` constants per round.
    pub fn new(rounds: usize, round_constants: Vec<F>, mixer: M) -> Result<Self, FarfalleError> {
        let expected = WIDTH * rounds;
        if round_constants.len() != expected {
            return Err(FarfalleError::RoundConstantCount {
                expected,
                actual: round_constants.len(),
            });
        }
        let round_constants = round_constants
            .chunks_exact(WIDTH)
            .map(|chunk| core::array::from_fn(|i| chunk[i]))
            .collect();
        Ok(Self {
            round_constants,
            mixer,
        })
    }

    pub fn rounds(&self) -> usize {
        self.round_constants.len()
    }
}

impl<F: Field, M: MixingLayer<F, WIDTH>, const WIDTH: usize> Permutation<[F; WIDTH]>
    for IteratedTransformation<F, M, WIDTH>
{
    fn permute_mut(&self, state: &mut [F; WIDTH]) {
        for round_constants in &self.round_constants {
            self.mixer.mix(state, round_constants);
        }
    }
}

impl<F: Field, M: MixingLayer<F, WIDTH>, const WIDTH: usize> CryptographicPermutation<[F; WIDTH]>
    for IteratedTransformation<F, M, WIDTH>
{
}

#[cfg(test)]
mod tests {
    use f4_field::{Gf2_128, Gfp128};

    use crate::round_constants::{LARGE_ROUNDS, SMALL_ROUNDS, derive_tables};
    use crate::{CubeFeistel, STATE_WIDTH};

    use super::*;

    #[test]
    fn rejects_mismatched_constant_table() {
        let constants = alloc::vec![Gfp128::ZERO; 7];
        let result =
            IteratedTransformation::<_, _, STATE_WIDTH>::new(2, constants, CubeFeistel);
        assert_eq!(
            result.unwrap_err(),
            FarfalleError::RoundConstantCount {
                expected: 8,
                actual: 7
            }
        );
    }

    #[test]
    fn accepts_exact_constant_table() {
        let constants = alloc::vec![Gfp128::ZERO; 8];
        let transformation =
            IteratedTransformation::<_, _, STATE_WIDTH>::new(2, constants, CubeFeistel).unwrap();
        assert_eq!(transformation.rounds(), 2);
    }

    #[test]
    fn is_deterministic() {
        let (table, _) = derive_tables::<Gfp128>(
            "GF(258439831533290445326983084816294483837)",
            LARGE_ROUNDS,
            SMALL_ROUNDS,
        );
        let p_n = IteratedTransformation::<_, _, STATE_WIDTH>::new(
            LARGE_ROUNDS,
            table,
            CubeFeistel,
        )
        .unwrap();
        let state = [5, 6, 7, 8].map(Gfp128::new);
        assert_eq!(p_n.permute(state), p_n.permute(state));
    }

    // Baseline vectors recorded with reference_model.py at the repo root.
    #[test]
    fn prime_field_permutation_matches_baseline() {
        let (large, small) = derive_tables::<Gfp128>(
            "GF(258439831533290445326983084816294483837)",
            LARGE_ROUNDS,
            SMALL_ROUNDS,
        );
        let p_n =
            IteratedTransformation::<_, _, STATE_WIDTH>::new(LARGE_ROUNDS, large, CubeFeistel)
                .unwrap();
        let p_r =
            IteratedTransformation::<_, _, STATE_WIDTH>::new(SMALL_ROUNDS, small, CubeFeistel)
                .unwrap();

        let state = [0, 1, 2, 3].map(Gfp128::new);
        assert_eq!(
            p_n.permute(state),
            [
                0x03b014edb52ac6713ed8d5b0caef8248,
                0x39818cd8ebf59c03c82fb050ac9ac740,
                0x643d51ff0a8e13ad2e733082bd877ad0,
                0x02ecdc3d1ba054b7691b46b515ea8a30,
            ]
            .map(Gfp128::new)
        );
        assert_eq!(
            p_r.permute(state),
            [
                0x23cf0965f8a572e9acce44631b4fcb74,
                0xad6c1e6e1bdc34a032478f2e75c1c382,
                0x58e66b2795d27412967fa4a9023cd47b,
                0xa4b72867863e9cfd749c48bbe5a0056f,
            ]
            .map(Gfp128::new)
        );
    }

    #[test]
    fn binary_field_permutation_matches_baseline() {
        let (large, small) = derive_tables::<Gf2_128>(
            "GF(2)[X]/100000000000000000000000000000087",
            LARGE_ROUNDS,
            SMALL_ROUNDS,
        );
        let p_n =
            IteratedTransformation::<_, _, STATE_WIDTH>::new(LARGE_ROUNDS, large, CubeFeistel)
                .unwrap();
        let p_r =
            IteratedTransformation::<_, _, STATE_WIDTH>::new(SMALL_ROUNDS, small, CubeFeistel)
                .unwrap();

        let state = [0, 1, 2, 3].map(Gf2_128::new);
        assert_eq!(
            p_n.permute(state),
            [
                0x92c112812e0d2cd128da8ae4804f6bd4,
                0x93950d45741c796ffa46ff4779d38afe,
                0xa359713a30a22a101a19e4dcb66dd105,
                0x6ac13458074296bd35f9b3a082daef06,
            ]
            .map(Gf2_128::new)
        );
        assert_eq!(
            p_r.permute(state),
            [
                0x634349d55ec6897f597e0efb19f5af01,
                0x809319c3f71bf20739c2376a2ce41df5,
                0xefd92cf58804e63b3c0eba7ac7b7af43,
                0x432ed7462172dec0d823e8d9a09215ab,
            ]
            .map(Gf2_128::new)
        );
    }
}
