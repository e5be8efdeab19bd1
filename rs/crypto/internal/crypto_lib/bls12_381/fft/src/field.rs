//! Adapter between the algebra in this crate and the BLS12-381 types
//!
//! Everything here is a thin mapping onto `ic_bls12_381`; no curve or field
//! arithmetic is implemented in this crate.

use ic_bls12_381::{G1Projective, Scalar};
use rand::{CryptoRng, RngCore};
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// An element of a prime field
pub trait FieldElement:
    Copy
    + Debug
    + Eq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;

    fn one() -> Self;

    fn from_u64(v: u64) -> Self;

    /// Return the multiplicative inverse, or `None` for zero
    fn invert(&self) -> Option<Self>;

    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Map a signed integer into the field, negative values wrapping
    /// around the modulus
    fn from_i64(v: i64) -> Self {
        let abs = Self::from_u64(v.unsigned_abs());
        if v < 0 {
            -abs
        } else {
            abs
        }
    }
}

/// An element of an additive group admitting multiplication by `F`
pub trait GroupElement<F: FieldElement>:
    Copy
    + Debug
    + Eq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<F, Output = Self>
{
    fn identity() -> Self;
}

/// Anything the transform engine can run a butterfly over
///
/// Field elements are multiplied by the roots of unity, group elements are
/// scalar-multiplied by them.
pub trait FftElement<F>: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<F, Output = Self> {}

impl<F, T> FftElement<F> for T where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<F, Output = T>
{
}

/// Compute `base^exp` where `exp` is given as little-endian 64-bit limbs
///
/// Not constant time; only ever used on public values.
pub fn pow_vartime<F: FieldElement>(base: &F, exp: &[u64]) -> F {
    let mut res = F::one();
    for limb in exp.iter().rev() {
        for i in (0..64).rev() {
            res = res * res;
            if (limb >> i) & 1 == 1 {
                res = res * *base;
            }
        }
    }
    res
}

impl FieldElement for Scalar {
    fn zero() -> Self {
        Scalar::from(0u64)
    }

    fn one() -> Self {
        Scalar::from(1u64)
    }

    fn from_u64(v: u64) -> Self {
        Scalar::from(v)
    }

    fn invert(&self) -> Option<Self> {
        Option::from(Scalar::invert(self))
    }

    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut buf = [0u8; 64];
        rng.fill_bytes(&mut buf);
        Scalar::from_bytes_wide(&buf)
    }
}

impl GroupElement<Scalar> for G1Projective {
    fn identity() -> Self {
        G1Projective::identity()
    }
}
