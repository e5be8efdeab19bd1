//! Multiplication via the transform
use super::*;
use crate::domain::Domain;
use crate::fft::Direction;

impl<F: FieldElement> Domain<F> {
    /// Compute `a * b`
    ///
    /// Both operands are zero-padded to the next power of two of at least
    /// twice the longer operand, multiplied pointwise in evaluation form and
    /// transformed back. Fails if the padded width exceeds this domain.
    pub fn mul(&self, a: &Polynomial<F>, b: &Polynomial<F>) -> FftResult<Polynomial<F>> {
        if a.is_zero() || b.is_zero() {
            return Ok(Polynomial::zero());
        }

        let a_len = a.num_coefficients();
        let b_len = b.num_coefficients();
        if a_len == 1 && b_len == 1 {
            return Ok(Polynomial::constant(a.coeff(0) * b.coeff(0)));
        }

        let n = (2 * std::cmp::max(a_len, b_len)).next_power_of_two();
        let stride = self.stride_for(n)?;
        let mut product = self.mul_polys_with_stride(a.coefficients(), b.coefficients(), stride)?;
        product.truncate(a_len + b_len - 1);
        Ok(Polynomial::new(product))
    }

    /// Cyclic convolution of `a` and `b` over the subgroup of order
    /// `max_width / roots_stride`
    ///
    /// The result has exactly `max_width / roots_stride` coefficients; it
    /// equals the ordinary product only if that is at least
    /// `a.len() + b.len() - 1`.
    pub fn mul_polys_with_stride(
        &self,
        a: &[F],
        b: &[F],
        roots_stride: usize,
    ) -> FftResult<Vec<F>> {
        self.check_stride(roots_stride)?;
        let size = self.max_width() / roots_stride;
        let longest = std::cmp::max(a.len(), b.len());
        if longest > size {
            return Err(FftError::DomainTooSmall {
                len: longest,
                max_width: size,
            });
        }

        let mut work = vec![F::zero(); 4 * size];
        let (a_vals, rest) = work.split_at_mut(size);
        let (b_vals, rest) = rest.split_at_mut(size);
        let (a_evals, b_evals) = rest.split_at_mut(size);
        a_vals[..a.len()].copy_from_slice(a);
        b_vals[..b.len()].copy_from_slice(b);

        self.fft_into(&*a_vals, a_evals, Direction::Forward)?;
        self.fft_into(&*b_vals, b_evals, Direction::Forward)?;
        for (x, y) in a_evals.iter_mut().zip(b_evals.iter()) {
            *x = *x * *y;
        }
        self.fft_into(&*a_evals, a_vals, Direction::Inverse)?;

        work.truncate(size);
        Ok(work)
    }
}
