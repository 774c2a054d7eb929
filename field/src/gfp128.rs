use core::fmt;
use core::fmt::{Display, Formatter};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use num_bigint::BigUint;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Deserializer, Serialize};

use crate::field::Field;

/// The prime field `F_p` where `p = 258439831533290445326983084816294483837`,
/// a random prime of roughly 128 bits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Gfp128 {
    /// Always canonical, i.e. less than `ORDER`.
    value: u128,
}

impl Gfp128 {
    pub const ORDER: u128 = 258439831533290445326983084816294483837;

    /// Build an element from an integer, reducing modulo the field order.
    pub const fn new(value: u128) -> Self {
        Self {
            value: value % Self::ORDER,
        }
    }

    /// The canonical representative in `[0, ORDER)`.
    pub const fn as_canonical_u128(self) -> u128 {
        self.value
    }

    fn from_biguint(n: &BigUint) -> Self {
        let reduced = n % BigUint::from(Self::ORDER);
        // The reduced value has at most two u64 digits.
        let mut digits = reduced.iter_u64_digits();
        let lo = digits.next().unwrap_or(0);
        let hi = digits.next().unwrap_or(0);
        Self {
            value: (u128::from(hi) << 64) | u128::from(lo),
        }
    }
}

impl Field for Gfp128 {
    const ZERO: Self = Self { value: 0 };
    const ONE: Self = Self { value: 1 };

    const ENCODED_BYTES: usize = 16;

    fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_biguint(&BigUint::from_bytes_le(bytes))
    }
}

impl Display for Gfp128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl Add<Self> for Gfp128 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        // Both operands are canonical, so the true sum is below 2 * ORDER.
        let (sum, overflow) = self.value.overflowing_add(rhs.value);
        let value = if overflow {
            // The true sum is `sum + 2^128`, which exceeds ORDER exactly once.
            sum.wrapping_add(Self::ORDER.wrapping_neg())
        } else if sum >= Self::ORDER {
            sum - Self::ORDER
        } else {
            sum
        };
        Self { value }
    }
}

impl AddAssign<Self> for Gfp128 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub<Self> for Gfp128 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let value = if self.value >= rhs.value {
            self.value - rhs.value
        } else {
            // Wraps to `self - rhs + 2^128`; adding ORDER wraps back down,
            // leaving the canonical `self - rhs + ORDER`.
            self.value.wrapping_sub(rhs.value).wrapping_add(Self::ORDER)
        };
        Self { value }
    }
}

impl SubAssign<Self> for Gfp128 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<Self> for Gfp128 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // The 256-bit product is reduced through BigUint. One wide reduction
        // per multiply keeps the arithmetic obviously correct for an
        // arbitrary 128-bit modulus.
        Self::from_biguint(&(BigUint::from(self.value) * BigUint::from(rhs.value)))
    }
}

impl MulAssign<Self> for Gfp128 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sum for Gfp128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for Gfp128 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl Distribution<Gfp128> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Gfp128 {
        let hi = u128::from(rng.next_u64());
        let lo = u128::from(rng.next_u64());
        Gfp128::new((hi << 64) | lo)
    }
}

impl<'de> Deserialize<'de> for Gfp128 {
    /// Deserializes the canonical representative, rejecting values outside
    /// the field.
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = u128::deserialize(d)?;
        if value < Self::ORDER {
            Ok(Self { value })
        } else {
            Err(serde::de::Error::custom("non-canonical field element"))
        }
    }
}
