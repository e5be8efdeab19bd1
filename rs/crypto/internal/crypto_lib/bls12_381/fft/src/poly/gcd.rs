//! Extended Euclidean algorithm for polynomials
//!
//! Two variants are provided, following the pseudocode at
//! https://en.wikipedia.org/w/index.php?title=Extended_Euclidean_algorithm&oldid=1003613686
//! They take different paths to the second Bezout coefficient and are
//! checked against each other in the tests.
//!
//! Neither variant normalizes the result: `gcd` is *a* greatest common
//! divisor, not necessarily the monic one. Divide by its leading
//! coefficient if a monic result is needed.
use super::*;
use crate::domain::Domain;

/// `u * a + v * b = gcd`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BezoutIdentity<F> {
    pub gcd: Polynomial<F>,
    pub u: Polynomial<F>,
    pub v: Polynomial<F>,
}

impl<F> BezoutIdentity<F> {
    fn swapped(self) -> Self {
        Self {
            gcd: self.gcd,
            u: self.v,
            v: self.u,
        }
    }
}

impl<F: FieldElement> Domain<F> {
    /// Extended GCD of `a` and `b`
    pub fn extended_gcd(
        &self,
        a: &Polynomial<F>,
        b: &Polynomial<F>,
    ) -> FftResult<BezoutIdentity<F>> {
        self.extended_gcd_one_sequence(a, b)
    }

    /// Track both Bezout coefficient sequences through the remainder
    /// sequence
    pub fn extended_gcd_two_sequences(
        &self,
        a: &Polynomial<F>,
        b: &Polynomial<F>,
    ) -> FftResult<BezoutIdentity<F>> {
        if b.num_coefficients() > a.num_coefficients() {
            return Ok(self.extended_gcd_two_sequences(b, a)?.swapped());
        }

        let (mut old_r, mut r) = (a.clone(), b.clone());
        let (mut old_s, mut s) = (Polynomial::one(), Polynomial::zero());
        let (mut old_t, mut t) = (Polynomial::zero(), Polynomial::one());

        while !r.is_zero() {
            let (quotient, remainder) = old_r.div(&r)?;
            old_r = std::mem::replace(&mut r, remainder);
            let next_s = old_s.sub(&self.mul(&quotient, &s)?);
            old_s = std::mem::replace(&mut s, next_s);
            let next_t = old_t.sub(&self.mul(&quotient, &t)?);
            old_t = std::mem::replace(&mut t, next_t);
        }

        Ok(BezoutIdentity {
            gcd: old_r,
            u: old_s,
            v: old_t,
        })
    }

    /// Track only the coefficient of `a`; recover the one of `b` at the end
    /// as `(gcd - u * a) / b`
    pub fn extended_gcd_one_sequence(
        &self,
        a: &Polynomial<F>,
        b: &Polynomial<F>,
    ) -> FftResult<BezoutIdentity<F>> {
        if b.num_coefficients() > a.num_coefficients() {
            return Ok(self.extended_gcd_one_sequence(b, a)?.swapped());
        }

        let (mut old_r, mut r) = (a.clone(), b.clone());
        let (mut old_s, mut s) = (Polynomial::one(), Polynomial::zero());

        while !r.is_zero() {
            let (quotient, remainder) = old_r.div(&r)?;
            old_r = std::mem::replace(&mut r, remainder);
            let next_s = old_s.sub(&self.mul(&quotient, &s)?);
            old_s = std::mem::replace(&mut s, next_s);
        }

        let v = if b.is_zero() {
            Polynomial::zero()
        } else {
            old_r.sub(&self.mul(&old_s, a)?).long_div(b)?
        };

        Ok(BezoutIdentity {
            gcd: old_r,
            u: old_s,
            v,
        })
    }
}
