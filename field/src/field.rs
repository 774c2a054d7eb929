use core::fmt::{Debug, Display};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// A finite-field element.
///
/// This is the exact operation set the construction layer consumes: ring
/// arithmetic, equality, and deterministic derivation of elements from a
/// byte stream. Distinct fields are distinct types, so mixing elements of
/// different field configurations in one operation is a compile error
/// rather than a runtime hazard.
pub trait Field:
    'static
    + Copy
    + Clone
    + Debug
    + Display
    + Default
    + Eq
    + PartialEq
    + Send
    + Sync
    + Add<Self, Output = Self>
    + AddAssign<Self>
    + Sub<Self, Output = Self>
    + SubAssign<Self>
    + Mul<Self, Output = Self>
    + MulAssign<Self>
    + Sum
    + Product
{
    const ZERO: Self;
    const ONE: Self;

    /// Bytes consumed per element when converting an XOF output stream
    /// into field elements.
    const ENCODED_BYTES: usize;

    /// Interpret a byte sequence as a field element.
    ///
    /// Prime fields read the bytes as a little-endian base-256 integer
    /// reduced modulo the field order; binary extension fields read bit `j`
    /// of byte `i` as the coefficient of `x^(8i+j)`, reduced modulo the
    /// field's irreducible polynomial.
    fn from_bytes(bytes: &[u8]) -> Self;
}
