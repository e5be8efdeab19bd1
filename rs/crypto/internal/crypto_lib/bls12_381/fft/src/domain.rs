//! Evaluation domains over power-of-two subgroups

use crate::config::Config;
use crate::field::FieldElement;
use crate::roots::RootsOfUnity;
use crate::{FftError, FftResult};


/// Precomputed roots of unity for transforms of width up to `2^scale`
///
/// Transforms over a narrower power-of-two width stride into these tables
/// instead of building a new domain. A `Domain` is immutable after
/// construction and may be shared freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain<F> {
    scale: u8,
    max_width: usize,
    root_of_unity: F,
    // powers of the root, starting and ending with one
    expanded_roots_of_unity: Vec<F>,
    // the same powers in reverse order, i.e. the powers of the inverse root
    reverse_roots_of_unity: Vec<F>,
}

impl<F: FieldElement> Domain<F> {
    /// Build the tables for width `2^scale`
    pub fn new(roots: &RootsOfUnity<F>, scale: u8) -> FftResult<Self> {
        if scale > roots.max_scale() || u32::from(scale) >= usize::BITS {
            return Err(FftError::ScaleTooLarge {
                scale,
                max_scale: roots.max_scale(),
            });
        }
        let max_width = 1usize << scale;
        let root_of_unity = roots.root(scale)?;
        let expanded_roots_of_unity = expand_root_of_unity(&root_of_unity, max_width)
            .ok_or(FftError::InvalidRootOfUnity { scale })?;

        let mut reverse_roots_of_unity = expanded_roots_of_unity.clone();
        reverse_roots_of_unity.reverse();

        Ok(Self {
            scale,
            max_width,
            root_of_unity,
            expanded_roots_of_unity,
            reverse_roots_of_unity,
        })
    }

    /// Build the domain of width `2^config.max_scale`
    pub fn from_config(config: &Config, roots: &RootsOfUnity<F>) -> FftResult<Self> {
        config.validate(roots.max_scale())?;
        Self::new(roots, config.max_scale)
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// The largest transform width supported by this domain
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn root_of_unity(&self) -> &F {
        &self.root_of_unity
    }

    /// The `max_width + 1` powers of the root of unity
    pub fn expanded_roots_of_unity(&self) -> &[F] {
        &self.expanded_roots_of_unity
    }

    /// The powers of the inverse root of unity
    pub fn reverse_roots_of_unity(&self) -> &[F] {
        &self.reverse_roots_of_unity
    }

    /// Distance between consecutive roots of the subgroup of order `width`
    /// in the expanded table
    pub fn stride_for(&self, width: usize) -> FftResult<usize> {
        if !width.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo { len: width });
        }
        if width > self.max_width {
            return Err(FftError::DomainTooSmall {
                len: width,
                max_width: self.max_width,
            });
        }
        Ok(self.max_width / width)
    }

    /// Check that `stride` selects a subgroup of this domain
    pub(crate) fn check_stride(&self, stride: usize) -> FftResult<()> {
        if !stride.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo { len: stride });
        }
        if stride > self.max_width {
            return Err(FftError::DomainTooSmall {
                len: stride,
                max_width: self.max_width,
            });
        }
        Ok(())
    }
}

/// Powers of `root` until the product returns to one
///
/// Returns `None` if the root does not have order exactly `max_width`.
fn expand_root_of_unity<F: FieldElement>(root: &F, max_width: usize) -> Option<Vec<F>> {
    let mut rootz = Vec::with_capacity(max_width + 1);
    rootz.push(F::one());
    rootz.push(*root);
    while !rootz[rootz.len() - 1].is_one() {
        if rootz.len() > max_width {
            return None;
        }
        let next = rootz[rootz.len() - 1] * *root;
        rootz.push(next);
    }
    if rootz.len() != max_width + 1 {
        return None;
    }
    Some(rootz)
}
