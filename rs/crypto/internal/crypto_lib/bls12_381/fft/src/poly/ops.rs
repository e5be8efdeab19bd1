//! Arithmetic that does not need a transform domain
use super::*;

impl<F: FieldElement> Polynomial<F> {
    pub fn add(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let max_coef = std::cmp::max(self.num_coefficients(), other.num_coefficients());
        let coefficients = (0..max_coef)
            .map(|i| self.coeff(i) + other.coeff(i))
            .collect();
        Self::new(coefficients)
    }

    /// Computes `self - other`
    pub fn sub(&self, other: &Self) -> Self {
        if other.is_zero() {
            return self.clone();
        }
        let max_coef = std::cmp::max(self.num_coefficients(), other.num_coefficients());
        let coefficients = (0..max_coef)
            .map(|i| self.coeff(i) - other.coeff(i))
            .collect();
        Self::new(coefficients)
    }

    pub fn neg(&self) -> Self {
        Self::new(self.coefficients.iter().map(|c| -*c).collect())
    }

    /// Multiply every coefficient by `scalar`
    pub fn scale(&self, scalar: &F) -> Self {
        Self::new(self.coefficients.iter().map(|c| *c * *scalar).collect())
    }

    /// Quotient of schoolbook long division
    ///
    /// If the divisor has a larger degree than `self` the quotient is zero.
    pub fn long_div(&self, divisor: &Self) -> FftResult<Self> {
        let (quotient, _remainder) = divide(&self.coefficients, divisor)?;
        Ok(Self::new(quotient))
    }

    /// Computes `(q, r)` such that `self = q * divisor + r` with
    /// `deg(r) < deg(divisor)`
    pub fn div(&self, divisor: &Self) -> FftResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(FftError::DivisionByZero);
        }
        if divisor.degree() > self.degree() {
            return Err(FftError::DivisorDegreeTooLarge {
                dividend: self.degree(),
                divisor: divisor.degree(),
            });
        }
        let (quotient, remainder) = divide(&self.coefficients, divisor)?;
        Ok((Self::new(quotient), Self::new(remainder)))
    }

    /// `self` reduced modulo `divisor`
    ///
    /// Unlike [`Polynomial::div`] this accepts a divisor of larger degree, in
    /// which case `self` is already fully reduced.
    pub fn remainder(&self, divisor: &Self) -> FftResult<Self> {
        if divisor.is_zero() {
            return Err(FftError::DivisionByZero);
        }
        if divisor.degree() > self.degree() {
            return Ok(self.clone());
        }
        let (_quotient, remainder) = divide(&self.coefficients, divisor)?;
        Ok(Self::new(remainder))
    }

    /// The formal derivative; constants differentiate to zero
    pub fn differentiate(&self) -> Self {
        Self::new(derivative(&self.coefficients))
    }

    /// Substitute `x / factor` for `x`, i.e. multiply coefficient `i` by
    /// `factor^-i`
    pub fn shift(&self, factor: &F) -> FftResult<Self> {
        let inv_factor = factor.invert().ok_or(FftError::NotInvertible)?;
        Ok(self.unshift(&inv_factor))
    }

    /// Substitute `x * factor` for `x`, i.e. multiply coefficient `i` by
    /// `factor^i`; undoes [`Polynomial::shift`]
    pub fn unshift(&self, factor: &F) -> Self {
        let mut factor_power = F::one();
        let coefficients = self
            .coefficients
            .iter()
            .map(|c| {
                let shifted = *c * factor_power;
                factor_power = factor_power * *factor;
                shifted
            })
            .collect();
        Self::new(coefficients)
    }
}

/// Eliminate the leading terms of `dividend` from the highest degree down
///
/// Returns the quotient and what is left of the dividend; neither is
/// condensed.
fn divide<F: FieldElement>(
    dividend: &[F],
    divisor: &Polynomial<F>,
) -> FftResult<(Vec<F>, Vec<F>)> {
    if divisor.is_zero() {
        return Err(FftError::DivisionByZero);
    }
    let mut a = dividend.to_vec();
    let b = divisor.coefficients();
    if a.len() < b.len() {
        return Ok((vec![F::zero()], a));
    }

    let b_pos = b.len() - 1;
    let lead_inv = b[b_pos].invert().ok_or(FftError::NotInvertible)?;
    let mut quotient = vec![F::zero(); a.len() - b.len() + 1];

    for diff in (0..quotient.len()).rev() {
        let quot = a[diff + b_pos] * lead_inv;
        quotient[diff] = quot;
        for (i, b_i) in b.iter().enumerate() {
            a[diff + i] = a[diff + i] - *b_i * quot;
        }
    }

    Ok((quotient, a))
}

impl<F: FieldElement> std::ops::Add<&Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, other: &Polynomial<F>) -> Polynomial<F> {
        Polynomial::add(self, other)
    }
}

impl<F: FieldElement> std::ops::Sub<&Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, other: &Polynomial<F>) -> Polynomial<F> {
        Polynomial::sub(self, other)
    }
}

impl<F: FieldElement> std::ops::Neg for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn neg(self) -> Polynomial<F> {
        Polynomial::neg(self)
    }
}
