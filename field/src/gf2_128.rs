use core::fmt;
use core::fmt::{Display, Formatter};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

use crate::field::Field;

/// The binary extension field `GF(2^128) = GF(2)[x]/(x^128 + x^7 + x^2 + x + 1)`.
///
/// Bit `i` of `value` is the coefficient of `x^i`. Every `u128` is a valid
/// element, addition is XOR, and subtraction coincides with addition.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gf2_128 {
    value: u128,
}

impl Gf2_128 {
    /// The reduction tail `x^7 + x^2 + x + 1` of the irreducible pentanomial.
    const TAIL: u128 = 0x87;

    pub const fn new(value: u128) -> Self {
        Self { value }
    }

    pub const fn as_u128(self) -> u128 {
        self.value
    }

    /// Multiply by `x`, reducing modulo the field polynomial.
    const fn xtime(value: u128) -> u128 {
        let shifted = value << 1;
        if value >> 127 == 1 {
            shifted ^ Self::TAIL
        } else {
            shifted
        }
    }
}

impl Field for Gf2_128 {
    const ZERO: Self = Self { value: 0 };
    const ONE: Self = Self { value: 1 };

    const ENCODED_BYTES: usize = 16;

    fn from_bytes(bytes: &[u8]) -> Self {
        // Horner evaluation from the top byte down: each step multiplies the
        // accumulated polynomial by x^8 and folds in the next 8 coefficients.
        // For inputs of at most 16 bytes this is plain little-endian loading.
        let mut acc = 0u128;
        for &byte in bytes.iter().rev() {
            for _ in 0..8 {
                acc = Self::xtime(acc);
            }
            acc ^= u128::from(byte);
        }
        Self { value: acc }
    }
}

impl Display for Gf2_128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#034x}", self.value)
    }
}

impl Add<Self> for Gf2_128 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value ^ rhs.value,
        }
    }
}

impl AddAssign<Self> for Gf2_128 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub<Self> for Gf2_128 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        // Characteristic 2: subtraction is addition.
        self + rhs
    }
}

impl SubAssign<Self> for Gf2_128 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<Self> for Gf2_128 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // Carryless shift-and-add, reducing the running multiplicand by the
        // field polynomial at each shift.
        let mut a = self.value;
        let mut b = rhs.value;
        let mut acc = 0u128;
        while b != 0 {
            if b & 1 == 1 {
                acc ^= a;
            }
            b >>= 1;
            a = Self::xtime(a);
        }
        Self { value: acc }
    }
}

impl MulAssign<Self> for Gf2_128 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sum for Gf2_128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for Gf2_128 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl Distribution<Gf2_128> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Gf2_128 {
        let hi = u128::from(rng.next_u64());
        let lo = u128::from(rng.next_u64());
        Gf2_128::new((hi << 64) | lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_is_self_inverse() {
        let a = Gf2_128::new(0xdead_beef_0123_4567_89ab_cdef_dead_beef);
        assert_eq!(a + a, Gf2_128::ZERO);
        assert_eq!(a - a, Gf2_128::ZERO);
    }

    #[test]
    fn multiplication_reduces_by_the_pentanomial() {
        // x^127 * x = x^128 = x^7 + x^2 + x + 1.
        let x127 = Gf2_128::new(1 << 127);
        let x = Gf2_128::new(2);
        assert_eq!(x127 * x, Gf2_128::new(0x87));
    }

    // Arithmetic baselines recorded with reference_model.py at the repo root.
    #[test]
    fn known_products() {
        let c = Gf2_128::from_bytes(&core::array::from_fn::<u8, 16, _>(|i| i as u8));
        let d = Gf2_128::from_bytes(&core::array::from_fn::<u8, 16, _>(|i| 16 + i as u8));
        assert_eq!(c * d, Gf2_128::new(0x51162938728e0aa01a76625839ee41c0));
        assert_eq!(c * Gf2_128::ONE, c);
    }

    #[test]
    fn from_bytes_reduces_long_input() {
        let bytes = core::array::from_fn::<u8, 32, _>(|i| i as u8);
        assert_eq!(
            Gf2_128::from_bytes(&bytes),
            Gf2_128::new(0xdd5ad055c740ca4be96ee461f374f9dd)
        );
    }
}
