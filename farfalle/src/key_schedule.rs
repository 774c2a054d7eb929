use alloc::vec::Vec;

use f4_field::Field;
use f4_symmetric::{CryptographicPermutation, Permutation};

use crate::{RollingFunction, STATE_WIDTH};

/// Expands a key state into an arbitrarily long sequence of mask elements.
///
/// One application of the expensive bootstrap permutation diffuses the
/// short master key across the full state; every further element then
/// costs a single rolling step. Amortizing the one wide permutation over
/// an entire session is the throughput-defining choice of the whole
/// construction.
#[derive(Clone, Debug)]
pub struct KeySchedule<P> {
    bootstrap: P,
    roll: RollingFunction,
}

impl<P> KeySchedule<P> {
    pub const fn new(bootstrap: P, roll: RollingFunction) -> Self {
        Self { bootstrap, roll }
    }

    /// Derive `n` mask elements from `key_state`.
    ///
    /// The permuted state's coordinate 0 is emitted, the state rolled, and
    /// so on; `n = 0` yields an empty sequence without touching the
    /// permutation output.
    pub fn expand<F: Field>(&self, key_state: [F; STATE_WIDTH], n: usize) -> Vec<F>
    where
        P: CryptographicPermutation<[F; STATE_WIDTH]>,
    {
        let mut state = key_state;
        self.bootstrap.permute_mut(&mut state);
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(state[0]);
            self.roll.permute_mut(&mut state);
        }
        out
    }
}
