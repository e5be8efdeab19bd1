//! Vanishing polynomials over sparse sets of domain positions
//!
//! Used to recover erasure coded data: the zero polynomial over the indices
//! of the missing samples is built from small "leaf" polynomials, which are
//! then merged in evaluation form rather than by repeated polynomial
//! multiplication.

use crate::config::Config;
use crate::domain::Domain;
use crate::fft::Direction;
use crate::field::FieldElement;
use crate::poly::Polynomial;
use crate::{FftError, FftResult};
use slog::{debug, trace, Logger};


impl<F: FieldElement> Domain<F> {
    /// Write the vanishing polynomial of the given domain positions into
    /// `dst`
    ///
    /// Position `i` is the root `w^(i * domain_stride)` where `w` is this
    /// domain's root of unity. The result has `indices.len() + 1`
    /// coefficients and any remaining entries of `dst` are zeroed. This is
    /// quadratic in the number of indices but allocation free, so it is
    /// meant for small batches.
    pub fn make_zero_poly_mul_leaf(
        &self,
        dst: &mut [F],
        indices: &[usize],
        domain_stride: usize,
    ) -> FftResult<()> {
        if dst.len() < indices.len() + 1 {
            return Err(FftError::BufferTooSmall {
                buffer: "dst",
                required: indices.len() + 1,
                got: dst.len(),
            });
        }
        self.check_stride(domain_stride)?;
        let size = self.max_width() / domain_stride;
        if let Some(&index) = indices.iter().find(|&&i| i >= size) {
            return Err(FftError::IndexOutOfDomain { index, size });
        }

        for d in dst[indices.len() + 1..].iter_mut() {
            *d = F::zero();
        }
        dst[indices.len()] = F::one();

        for (i, &index) in indices.iter().enumerate() {
            let neg_di = -self.expanded_roots_of_unity()[index * domain_stride];
            dst[i] = neg_di;
            if i > 0 {
                dst[i] = dst[i] + dst[i - 1];
                for j in (1..i).rev() {
                    dst[j] = dst[j] * neg_di + dst[j - 1];
                }
                dst[0] = dst[0] * neg_di;
            }
        }
        Ok(())
    }

    /// Multiply the `leaves` together into `dst`
    ///
    /// Each leaf is padded to the width of `dst` and transformed; the
    /// transforms are multiplied pointwise and the product transformed
    /// back. `scratch` must hold at least three times the width of `dst`.
    /// Returns the number of coefficients of the product, all of which are
    /// at the front of `dst`.
    pub fn reduce_leaves(
        &self,
        scratch: &mut [F],
        dst: &mut [F],
        leaves: &[&[F]],
    ) -> FftResult<usize> {
        let n = dst.len();
        if !n.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo { len: n });
        }
        if leaves.is_empty() {
            return Err(FftError::EmptyInput("leaves"));
        }
        if leaves.iter().any(|leaf| leaf.is_empty()) {
            return Err(FftError::EmptyInput("leaf"));
        }
        let required = leaves.iter().map(|leaf| leaf.len() - 1).sum::<usize>() + 1;
        if required > n {
            return Err(FftError::LeavesExceedDestination {
                required,
                available: n,
            });
        }
        if scratch.len() < 3 * n {
            return Err(FftError::BufferTooSmall {
                buffer: "scratch",
                required: 3 * n,
                got: scratch.len(),
            });
        }

        let (p_padded, rest) = scratch[..3 * n].split_at_mut(n);
        let (mul_eval_ps, p_eval) = rest.split_at_mut(n);
        pad_into(p_padded, leaves[0]);
        self.fft_into(&*p_padded, mul_eval_ps, Direction::Forward)?;
        for leaf in &leaves[1..] {
            pad_into(p_padded, leaf);
            self.fft_into(&*p_padded, p_eval, Direction::Forward)?;
            for (acc, p) in mul_eval_ps.iter_mut().zip(p_eval.iter()) {
                *acc = *acc * *p;
            }
        }
        self.fft_into(&*mul_eval_ps, dst, Direction::Inverse)?;

        Ok(required)
    }
}

fn pad_into<F: FieldElement>(dst: &mut [F], leaf: &[F]) {
    dst[..leaf.len()].copy_from_slice(leaf);
    for v in dst[leaf.len()..].iter_mut() {
        *v = F::zero();
    }
}

/// Builds zero polynomials over the missing positions of erasure coded data
#[derive(Debug)]
pub struct ZeroPolynomialBuilder<'a, F> {
    domain: &'a Domain<F>,
    points_per_leaf: usize,
    reduction_factor: usize,
    logger: Logger,
}

impl<'a, F: FieldElement> ZeroPolynomialBuilder<'a, F> {
    pub fn new(domain: &'a Domain<F>, config: &Config, logger: Logger) -> FftResult<Self> {
        config.validate_leaf_settings()?;
        Ok(Self {
            domain,
            points_per_leaf: config.points_per_leaf,
            reduction_factor: config.reduction_factor,
            logger,
        })
    }

    /// Compute the polynomial vanishing exactly at the positions
    /// `missing_indices` of the subgroup of order `length`, and its
    /// evaluations over that subgroup
    ///
    /// Returns `(zero_eval, zero_poly)`. Repeated indices are rejected with
    /// [`FftError::DuplicateIndex`].
    pub fn zero_poly_via_multiplication(
        &self,
        missing_indices: &[usize],
        length: usize,
    ) -> FftResult<(Vec<F>, Polynomial<F>)> {
        let domain_stride = self.domain.stride_for(length)?;
        if missing_indices.len() >= length {
            return Err(FftError::TooManyMissingIndices {
                missing: missing_indices.len(),
                length,
            });
        }
        if let Some(&index) = missing_indices.iter().find(|&&i| i >= length) {
            return Err(FftError::IndexOutOfDomain {
                index,
                size: length,
            });
        }
        let mut seen = vec![false; length];
        for &index in missing_indices {
            if std::mem::replace(&mut seen[index], true) {
                return Err(FftError::DuplicateIndex { index });
            }
        }
        if missing_indices.is_empty() {
            return Ok((vec![F::one(); length], Polynomial::one()));
        }

        let leaf_count = missing_indices.len().div_ceil(self.points_per_leaf);
        debug!(self.logger, "Building zero polynomial";
            "missing" => missing_indices.len(),
            "length" => length,
            "leaves" => leaf_count
        );

        let coefficients = if leaf_count == 1 {
            let mut leaf = vec![F::zero(); missing_indices.len() + 1];
            self.domain
                .make_zero_poly_mul_leaf(&mut leaf, missing_indices, domain_stride)?;
            leaf
        } else {
            self.reduce_all_leaves(missing_indices, domain_stride)?
        };

        let zero_poly = Polynomial::new(coefficients);
        let mut padded = zero_poly.coefficients().to_vec();
        padded.resize(length, F::zero());
        let zero_eval = self.domain.forward(&padded)?;
        Ok((zero_eval, zero_poly))
    }

    /// Build one leaf per `points_per_leaf` indices, then merge
    /// `reduction_factor` leaves at a time until one polynomial is left
    fn reduce_all_leaves(
        &self,
        missing_indices: &[usize],
        domain_stride: usize,
    ) -> FftResult<Vec<F>> {
        // Leaves live in fixed-size slots of one arena; every round writes
        // the merged leaves into the slots of the other arena.
        let mut slot = (self.points_per_leaf + 1).next_power_of_two();
        let leaf_count = missing_indices.len().div_ceil(self.points_per_leaf);
        let mut arena = vec![F::zero(); leaf_count * slot];
        let mut spare = Vec::new();
        let mut lens = Vec::with_capacity(leaf_count);

        for (i, chunk) in missing_indices.chunks(self.points_per_leaf).enumerate() {
            let leaf = &mut arena[i * slot..i * slot + chunk.len() + 1];
            self.domain
                .make_zero_poly_mul_leaf(leaf, chunk, domain_stride)?;
            lens.push(chunk.len() + 1);
        }

        // the product never has more than missing + 1 coefficients
        let max_width = (missing_indices.len() + 1).next_power_of_two();
        let mut scratch = vec![F::zero(); 3 * max_width];
        let mut round = 0;

        while lens.len() > 1 {
            let next_slot = (self.reduction_factor * slot).next_power_of_two();
            let reduced_count = lens.len().div_ceil(self.reduction_factor);
            spare.clear();
            spare.resize(reduced_count * next_slot, F::zero());

            let mut next_lens = Vec::with_capacity(reduced_count);
            for (i, group) in lens.chunks(self.reduction_factor).enumerate() {
                let first = i * self.reduction_factor;
                let leaves: Vec<&[F]> = group
                    .iter()
                    .enumerate()
                    .map(|(j, len)| {
                        let start = (first + j) * slot;
                        &arena[start..start + len]
                    })
                    .collect();
                let out_start = i * next_slot;
                if let [leaf] = leaves.as_slice() {
                    spare[out_start..out_start + leaf.len()].copy_from_slice(leaf);
                    next_lens.push(leaf.len());
                    continue;
                }
                let required = group.iter().map(|len| len - 1).sum::<usize>() + 1;
                let width = required.next_power_of_two();
                let dst = &mut spare[out_start..out_start + width];
                next_lens.push(self.domain.reduce_leaves(&mut scratch, dst, &leaves)?);
            }

            round += 1;
            trace!(self.logger, "Reduced zero polynomial leaves";
                "round" => round,
                "remaining" => next_lens.len()
            );
            std::mem::swap(&mut arena, &mut spare);
            lens = next_lens;
            slot = next_slot;
        }

        arena.truncate(lens[0]);
        Ok(arena)
    }
}
