//! Radix-2 number theoretic transform over field and group elements

use crate::domain::Domain;
use crate::field::{FftElement, FieldElement, GroupElement};
use crate::{FftError, FftResult};


/// Below this width the recursion switches to the quadratic transform
const SIMPLE_FT_THRESHOLD: usize = 4;

/// Which way a transform goes
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Coefficients to evaluations
    Forward,
    /// Evaluations to coefficients
    Inverse,
}

impl<F: FieldElement> Domain<F> {
    /// Transform field elements
    ///
    /// The input is zero-padded up to the next power of two. The caller's
    /// slice is never modified.
    pub fn fft(&self, values: &[F], direction: Direction) -> FftResult<Vec<F>> {
        if values.len() > self.max_width() {
            return Err(FftError::DomainTooSmall {
                len: values.len(),
                max_width: self.max_width(),
            });
        }
        let n = values.len().max(1).next_power_of_two();
        let mut padded = Vec::with_capacity(n);
        padded.extend_from_slice(values);
        padded.resize(n, F::zero());

        let mut out = vec![F::zero(); n];
        self.fft_into(&padded, &mut out, direction)?;
        Ok(out)
    }

    pub fn forward(&self, values: &[F]) -> FftResult<Vec<F>> {
        self.fft(values, Direction::Forward)
    }

    pub fn inverse(&self, values: &[F]) -> FftResult<Vec<F>> {
        self.fft(values, Direction::Inverse)
    }

    /// Transform group elements
    ///
    /// Unlike [`Domain::fft`] no padding is done; the input length must be
    /// a power of two.
    pub fn fft_group<G: GroupElement<F>>(
        &self,
        values: &[G],
        direction: Direction,
    ) -> FftResult<Vec<G>> {
        let mut out = vec![G::identity(); values.len()];
        self.fft_into(values, &mut out, direction)?;
        Ok(out)
    }

    /// Transform `values` into `out`
    ///
    /// Both slices must have the same power-of-two length. Since the
    /// borrow rules already force `values` and `out` to be distinct, the
    /// recursion never reads from a region it has written.
    pub fn fft_into<T: FftElement<F>>(
        &self,
        values: &[T],
        out: &mut [T],
        direction: Direction,
    ) -> FftResult<()> {
        let n = values.len();
        if n > self.max_width() {
            return Err(FftError::DomainTooSmall {
                len: n,
                max_width: self.max_width(),
            });
        }
        if !n.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo { len: n });
        }
        if out.len() != n {
            return Err(FftError::LengthMismatch {
                expected: n,
                got: out.len(),
            });
        }

        let stride = self.max_width() / n;
        match direction {
            Direction::Forward => {
                let roots = &self.expanded_roots_of_unity()[..self.max_width()];
                fft_recursive(values, 0, 1, roots, stride, out);
            }
            Direction::Inverse => {
                let inv_len = F::from_u64(n as u64)
                    .invert()
                    .ok_or(FftError::NotInvertible)?;
                let roots = &self.reverse_roots_of_unity()[..self.max_width()];
                fft_recursive(values, 0, 1, roots, stride, out);
                for v in out.iter_mut() {
                    *v = *v * inv_len;
                }
            }
        }
        Ok(())
    }
}

/// Quadratic discrete Fourier transform, used at the bottom of the recursion
fn simple_ft<F: FieldElement, T: FftElement<F>>(
    values: &[T],
    offset: usize,
    stride: usize,
    roots: &[F],
    roots_stride: usize,
    out: &mut [T],
) {
    let l = out.len();
    for (i, o) in out.iter_mut().enumerate() {
        let mut last = values[offset] * roots[0];
        for j in 1..l {
            let v = values[offset + j * stride] * roots[((i * j) % l) * roots_stride];
            last = last + v;
        }
        *o = last;
    }
}

fn fft_recursive<F: FieldElement, T: FftElement<F>>(
    values: &[T],
    offset: usize,
    stride: usize,
    roots: &[F],
    roots_stride: usize,
    out: &mut [T],
) {
    if out.len() <= SIMPLE_FT_THRESHOLD {
        simple_ft(values, offset, stride, roots, roots_stride, out);
        return;
    }

    let half = out.len() >> 1;
    let (left, right) = out.split_at_mut(half);
    // even indices into the left half, odd indices into the right half
    fft_recursive(values, offset, stride << 1, roots, roots_stride << 1, left);
    fft_recursive(
        values,
        offset + stride,
        stride << 1,
        roots,
        roots_stride << 1,
        right,
    );

    for (i, (x, y)) in left.iter_mut().zip(right.iter_mut()).enumerate() {
        let y_times_root = *y * roots[i * roots_stride];
        let x_val = *x;
        *x = x_val + y_times_root;
        *y = x_val - y_times_root;
    }
}

/// Reorder `values` so that index `i` moves to the bit reversal of `i`
///
/// The length must be a power of two no larger than `2^31`.
pub fn reverse_bit_order<T>(values: &mut [T]) -> FftResult<()> {
    let n = values.len();
    if n > 1 << 31 {
        return Err(FftError::BitReversalTooLarge { len: n });
    }
    if n <= 1 {
        return Ok(());
    }
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo { len: n });
    }
    let unused_bits = (n as u32 - 1).leading_zeros();
    for i in 0..n as u32 {
        let r = i.reverse_bits() >> unused_bits;
        if r > i {
            values.swap(r as usize, i as usize);
        }
    }
    Ok(())
}
