//! Tables of primitive roots of unity

use crate::field::{pow_vartime, FieldElement};
use crate::{FftError, FftResult};
use ic_bls12_381::Scalar;

/// The multiplicative generator the BLS12-381 tables are derived from
///
/// Also used as the coset shift factor.
pub const PRIMITIVE_ROOT: u64 = 5;

/// The largest `s` such that `2^s` divides `r - 1` for the BLS12-381 scalar field
pub const BLS12_381_TWO_ADICITY: u8 = 32;

/// `(r - 1) / 2^32` as little-endian limbs
const BLS12_381_TRACE: [u64; 4] = [
    0xfffe_5bfe_ffff_ffff,
    0x09a1_d805_53bd_a402,
    0x299d_7d48_3339_d808,
    0x0000_0000_73ed_a753,
];

/// One primitive `2^scale`-th root of unity per supported scale
///
/// Entry `s` generates the multiplicative subgroup of order `2^s`, so entry
/// 0 is always one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootsOfUnity<F> {
    roots: Vec<F>,
}

impl<F: FieldElement> RootsOfUnity<F> {
    /// Wrap an explicit table, checking that each entry has the claimed order
    pub fn new(roots: Vec<F>) -> FftResult<Self> {
        if roots.is_empty() {
            return Err(FftError::EmptyInput("roots of unity table"));
        }
        if roots.len() > usize::BITS as usize {
            return Err(FftError::InvalidConfig(format!(
                "roots of unity table has {} entries",
                roots.len()
            )));
        }
        for (scale, root) in roots.iter().enumerate() {
            if !has_order_two_to_the(root, scale) {
                return Err(FftError::InvalidRootOfUnity { scale: scale as u8 });
            }
        }
        Ok(Self { roots })
    }

    /// Derive the table from a primitive `2^two_adicity`-th root by
    /// repeated squaring
    pub fn from_two_adic_root(root: F, two_adicity: u8) -> FftResult<Self> {
        let mut roots = vec![F::one(); two_adicity as usize + 1];
        let mut current = root;
        for s in (0..=two_adicity as usize).rev() {
            roots[s] = current;
            current = current * current;
        }
        Self::new(roots)
    }

    /// The largest scale this table supports
    pub fn max_scale(&self) -> u8 {
        (self.roots.len() - 1) as u8
    }

    pub fn root(&self, scale: u8) -> FftResult<F> {
        self.roots
            .get(scale as usize)
            .copied()
            .ok_or(FftError::ScaleTooLarge {
                scale,
                max_scale: self.max_scale(),
            })
    }
}

impl RootsOfUnity<Scalar> {
    /// The table for the BLS12-381 scalar field, scales 0 through 32
    pub fn bls12_381() -> Self {
        let generator = Scalar::from(PRIMITIVE_ROOT);
        let mut roots = vec![<Scalar as FieldElement>::one(); BLS12_381_TWO_ADICITY as usize + 1];
        let mut current = pow_vartime(&generator, &BLS12_381_TRACE);
        for s in (0..=BLS12_381_TWO_ADICITY as usize).rev() {
            roots[s] = current;
            current = current * current;
        }
        Self { roots }
    }
}

/// `x^(2^scale) == 1` and, for `scale > 0`, `x^(2^(scale-1)) != 1`
fn has_order_two_to_the<F: FieldElement>(x: &F, scale: usize) -> bool {
    let mut acc = *x;
    for _ in 1..scale {
        acc = acc * acc;
    }
    if scale == 0 {
        return acc.is_one();
    }
    // acc = x^(2^(scale-1)), which must be -1 for a primitive root
    !acc.is_one() && (acc * acc).is_one()
}
