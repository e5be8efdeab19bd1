//! Number theoretic transforms and polynomial arithmetic over the
//! BLS12-381 scalar field
//!
//! A [`Domain`] holds the powers of a primitive `2^scale`-th root of unity
//! and transforms sequences of field or group elements of any power-of-two
//! width up to `2^scale`. Multiplication, division, extended GCD,
//! subproduct trees and zero polynomials over sparse sets of domain
//! positions are built on top of it.
//!
//! All the algebra is generic over [`FieldElement`], which is implemented
//! for [`ic_bls12_381::Scalar`]; transforms additionally accept any
//! [`GroupElement`] such as [`ic_bls12_381::G1Projective`].
#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]

mod config;
mod domain;
mod error;
mod fft;
mod field;
mod roots;
mod tree;
mod zero_poly;

pub mod poly;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use domain::Domain;
pub use error::{ErrorKind, FftError, FftResult};
pub use fft::{reverse_bit_order, Direction};
pub use field::{pow_vartime, FftElement, FieldElement, GroupElement};
pub use poly::{BezoutIdentity, Polynomial};
pub use roots::{RootsOfUnity, BLS12_381_TWO_ADICITY, PRIMITIVE_ROOT};
pub use tree::SubproductTree;
pub use zero_poly::ZeroPolynomialBuilder;

pub use ic_bls12_381::{G1Projective, Scalar};
