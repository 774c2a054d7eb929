/// One round's confusion/diffusion step, parameterized by that round's
/// constants.
///
/// An iterated permutation applies the same mixing layer every round; all
/// round-to-round asymmetry comes from the constants it is handed. The
/// layer must be a bijection of the state for any fixed constants, and
/// must be expressible in ring operations alone so one implementation
/// serves every field family.
pub trait MixingLayer<T, const WIDTH: usize>: Clone {
    fn mix(&self, state: &mut [T; WIDTH], round_constants: &[T; WIDTH]);
}
