use alloc::vec::Vec;

use f4_field::Field;
use f4_symmetric::CryptographicPermutation;
use itertools::Itertools;
use tracing::instrument;

use crate::{FarfalleError, KeySchedule, RollingFunction, STATE_WIDTH};

/// The Farfalle-like authenticated-encryption construction.
///
/// Orchestrates two permutation instances (`p_n`, many rounds, one call
/// per session for key expansion and one for the tag; `p_r`, few rounds,
/// one call per block) together with the rolling mask chain into a single
/// encrypt-and-authenticate operation. Immutable after construction and
/// re-entrant: every call is independent and leaves no residual state.
#[derive(Clone, Debug)]
pub struct FarfalleLike<Pn, Pr> {
    p_n: Pn,
    p_r: Pr,
    key_schedule: KeySchedule<Pn>,
}

impl<Pn: Clone, Pr> FarfalleLike<Pn, Pr> {
    pub fn new(p_n: Pn, p_r: Pr) -> Self {
        Self {
            key_schedule: KeySchedule::new(p_n.clone(), RollingFunction),
            p_n,
            p_r,
        }
    }
}

impl<Pn, Pr> FarfalleLike<Pn, Pr> {
    /// Encrypt `message` under `master_key` and `nonce`, returning the
    /// ciphertext sequence and the authentication tag.
    ///
    /// The master key may hold at most four elements. An empty message is
    /// legal: the ciphertext comes back empty and the tag still binds key
    /// and nonce. The nonce must be unique per key by protocol contract;
    /// reuse is not detected here.
    #[instrument(skip_all, fields(blocks = message.len()))]
    pub fn encrypt<F: Field>(
        &self,
        master_key: &[F],
        nonce: F,
        message: &[F],
    ) -> Result<(Vec<F>, F), FarfalleError>
    where
        Pn: CryptographicPermutation<[F; STATE_WIDTH]>,
        Pr: CryptographicPermutation<[F; STATE_WIDTH]>,
    {
        let key_state = self.key_state(master_key, nonce)?;
        let expanded = self.key_schedule.expand(key_state, message.len());
        let ciphertext = message
            .iter()
            .zip_eq(&expanded)
            .map(|(&block, &mask_seed)| block + self.block_mask(mask_seed))
            .collect();
        let tag = self.tag(key_state, message, &expanded);
        Ok((ciphertext, tag))
    }

    /// Recover the message from `ciphertext`, verifying the tag.
    ///
    /// Recomputes every block mask from `(master_key, nonce)`, strips it,
    /// then recomputes the tag over the recovered message. On a tag
    /// mismatch nothing is released to the caller: the call fails closed
    /// with [`FarfalleError::TagMismatch`].
    #[instrument(skip_all, fields(blocks = ciphertext.len()))]
    pub fn decrypt<F: Field>(
        &self,
        master_key: &[F],
        nonce: F,
        ciphertext: &[F],
        tag: F,
    ) -> Result<Vec<F>, FarfalleError>
    where
        Pn: CryptographicPermutation<[F; STATE_WIDTH]>,
        Pr: CryptographicPermutation<[F; STATE_WIDTH]>,
    {
        let key_state = self.key_state(master_key, nonce)?;
        let expanded = self.key_schedule.expand(key_state, ciphertext.len());
        let message: Vec<F> = ciphertext
            .iter()
            .zip_eq(&expanded)
            .map(|(&block, &mask_seed)| block - self.block_mask(mask_seed))
            .collect();
        if self.tag(key_state, &message, &expanded) == tag {
            Ok(message)
        } else {
            Err(FarfalleError::TagMismatch)
        }
    }

    /// Assemble the width-4 key state: master key elements in the leading
    /// coordinates, zero padding, nonce folded into coordinate 3. Both the
    /// secret key and the public nonce influence the state before any
    /// permutation runs.
    fn key_state<F: Field>(
        &self,
        master_key: &[F],
        nonce: F,
    ) -> Result<[F; STATE_WIDTH], FarfalleError> {
        if master_key.len() > STATE_WIDTH {
            return Err(FarfalleError::MasterKeyTooLong {
                len: master_key.len(),
            });
        }
        let mut state = [F::ZERO; STATE_WIDTH];
        for (slot, &element) in state.iter_mut().zip(master_key) {
            *slot = element;
        }
        state[3] += nonce;
        Ok(state)
    }

    /// One cheap per-block call: broadcast the expanded-key element across
    /// the state, run the small permutation, emit coordinate 0.
    fn block_mask<F: Field>(&self, mask_seed: F) -> F
    where
        Pr: CryptographicPermutation<[F; STATE_WIDTH]>,
    {
        let mut state = [mask_seed; STATE_WIDTH];
        self.p_r.permute_mut(&mut state);
        state[0]
    }

    /// Fold message blocks and expanded-key elements into one accumulator
    /// and compress it with the large permutation.
    ///
    /// The accumulator starts from the key state with the public constant 1
    /// added at coordinate 0, a coordinate disjoint from the nonce's, so no
    /// nonce choice can map the tag input onto a key-schedule input. The
    /// constant separates this branch from the per-block
    /// encryption branch; with an empty message the tag still covers key
    /// and nonce through the key state.
    fn tag<F: Field>(&self, key_state: [F; STATE_WIDTH], message: &[F], expanded: &[F]) -> F
    where
        Pn: CryptographicPermutation<[F; STATE_WIDTH]>,
    {
        let mut acc = key_state;
        acc[0] += F::ONE;
        for (i, (&block, &mask_seed)) in message.iter().zip_eq(expanded).enumerate() {
            acc[(2 * i) % STATE_WIDTH] += block;
            acc[(2 * i + 1) % STATE_WIDTH] += mask_seed;
        }
        self.p_n.permute_mut(&mut acc);
        acc[0]
    }
}
