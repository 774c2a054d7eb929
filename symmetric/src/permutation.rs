/// A permutation in the mathematical sense: a bijection of `T` onto itself.
pub trait Permutation<T: Clone>: Clone {
    fn permute(&self, mut input: T) -> T {
        self.permute_mut(&mut input);
        input
    }

    fn permute_mut(&self, input: &mut T);
}

/// A permutation thought to be cryptographically secure, in the sense that
/// it is thought to be difficult to distinguish (in a nontrivial way) from a
/// random permutation.
///
/// Cheap state-advance maps such as rolling functions are `Permutation` but
/// deliberately not `CryptographicPermutation`; code that needs full
/// diffusion should bound on this trait so the two cannot be confused.
pub trait CryptographicPermutation<T: Clone>: Permutation<T> {}
