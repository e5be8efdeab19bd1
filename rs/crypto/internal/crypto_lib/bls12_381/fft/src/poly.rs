//! Polynomials over a prime field, kept in canonical form.

use crate::field::FieldElement;
use crate::{FftError, FftResult};
use rand::{CryptoRng, RngCore};

// Methods:
mod gcd;
mod mul;
mod ops;


pub use gcd::BezoutIdentity;

/// A univariate polynomial
///
/// The coefficients are stored in little-endian ordering, ie a_0 is
/// self.coefficients\[0\]. The representation is canonical: there is no
/// trailing zero coefficient, except for the zero polynomial which is
/// stored as the single coefficient `[0]`. Every constructor and operation
/// maintains this, so two polynomials are equal iff their coefficients are.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<F> {
    coefficients: Vec<F>,
}

impl<F: FieldElement> Polynomial<F> {
    /// Create a polynomial from its coefficients, stripping trailing zeros
    ///
    /// An empty vector yields the zero polynomial.
    pub fn new(mut coefficients: Vec<F>) -> Self {
        if coefficients.is_empty() {
            return Self::zero();
        }
        let len = canonical_len(&coefficients);
        coefficients.truncate(len);
        Self { coefficients }
    }

    /// Returns the polynomial with constant value `0`.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![F::zero()],
        }
    }

    pub fn one() -> Self {
        Self::constant(F::one())
    }

    pub fn constant(c: F) -> Self {
        Self::new(vec![c])
    }

    /// The monic linear factor `x - root`
    pub fn linear_factor(root: &F) -> Self {
        Self {
            coefficients: vec![-*root, F::one()],
        }
    }

    /// Creates a random polynomial with the specified number of coefficients
    ///
    /// The result is canonicalized, so with negligible probability it has
    /// fewer coefficients than requested.
    pub fn random<R: RngCore + CryptoRng>(num_coefficients: usize, rng: &mut R) -> Self {
        let coefficients = (0..num_coefficients).map(|_| F::random(rng)).collect();
        Self::new(coefficients)
    }

    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<F> {
        self.coefficients
    }

    /// Returns the coefficient at the specified index
    ///
    /// Returns zero if the index is larger than the polynomial
    pub fn coeff(&self, idx: usize) -> F {
        self.coefficients.get(idx).copied().unwrap_or_else(F::zero)
    }

    /// Number of stored coefficients; at least one
    pub fn num_coefficients(&self) -> usize {
        self.coefficients.len()
    }

    /// `num_coefficients() - 1`
    ///
    /// The zero polynomial reports degree 0 like any other constant; use
    /// [`Polynomial::is_zero`] to tell them apart.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }

    pub fn leading_coefficient(&self) -> F {
        self.coeff(self.degree())
    }

    /// Evaluate this polynomial at the given point
    ///
    /// This uses Horner's method: https://en.wikipedia.org/wiki/Horner%27s_method
    pub fn evaluate_at(&self, x: &F) -> F {
        self.coefficients
            .iter()
            .rev()
            .fold(F::zero(), |acc, c| acc * *x + *c)
    }
}

impl<F: FieldElement> From<Vec<F>> for Polynomial<F> {
    fn from(coefficients: Vec<F>) -> Self {
        Self::new(coefficients)
    }
}

/// Returns true if every coefficient is zero
///
/// An empty coefficient sequence does not represent any polynomial.
pub fn is_zero<F: FieldElement>(coefficients: &[F]) -> FftResult<bool> {
    if coefficients.is_empty() {
        return Err(FftError::InvariantViolation(
            "empty coefficient sequence".to_string(),
        ));
    }
    Ok(coefficients.iter().all(|c| c.is_zero()))
}

/// Strip trailing zero coefficients, keeping at least one
///
/// Example: `[0, 1, 2, 3, 4, 0, 0]` condenses to `[0, 1, 2, 3, 4]`, and
/// `[0, 0]` to `[0]`.
pub fn condense<F: FieldElement>(coefficients: &[F]) -> FftResult<&[F]> {
    if coefficients.is_empty() {
        return Err(FftError::InvariantViolation(
            "empty coefficient sequence".to_string(),
        ));
    }
    Ok(&coefficients[..canonical_len(coefficients)])
}

/// Formal derivative of a coefficient sequence
pub fn differentiate<F: FieldElement>(coefficients: &[F]) -> FftResult<Vec<F>> {
    if coefficients.is_empty() {
        return Err(FftError::InvariantViolation(
            "cannot differentiate an empty coefficient sequence".to_string(),
        ));
    }
    Ok(derivative(coefficients))
}

fn derivative<F: FieldElement>(coefficients: &[F]) -> Vec<F> {
    if coefficients.len() == 1 {
        return vec![F::zero()];
    }
    coefficients
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, c)| *c * F::from_u64(i as u64))
        .collect()
}

fn canonical_len<F: FieldElement>(coefficients: &[F]) -> usize {
    let zeros = coefficients
        .iter()
        .rev()
        .take_while(|c| c.is_zero())
        .count();
    std::cmp::max(coefficients.len() - zeros, 1)
}
