#![allow(clippy::unwrap_used)]
//! The algebra is generic over the field; exercise it over Z/65537, whose
//! multiplicative group has order 2^16 and is generated by 3.

use ic_crypto_internal_bls12_381_fft::*;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::ops::{Add, Mul, Neg, Sub};

const P: u64 = 65537;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Fp(u64);

impl Add for Fp {
    type Output = Fp;
    fn add(self, rhs: Fp) -> Fp {
        Fp((self.0 + rhs.0) % P)
    }
}

impl Sub for Fp {
    type Output = Fp;
    fn sub(self, rhs: Fp) -> Fp {
        Fp((self.0 + P - rhs.0) % P)
    }
}

impl Mul for Fp {
    type Output = Fp;
    fn mul(self, rhs: Fp) -> Fp {
        Fp((self.0 * rhs.0) % P)
    }
}

impl Neg for Fp {
    type Output = Fp;
    fn neg(self) -> Fp {
        Fp((P - self.0) % P)
    }
}

impl FieldElement for Fp {
    fn zero() -> Self {
        Fp(0)
    }

    fn one() -> Self {
        Fp(1)
    }

    fn from_u64(v: u64) -> Self {
        Fp(v % P)
    }

    fn invert(&self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }
        Some(pow_vartime(self, &[P - 2]))
    }

    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Fp(rng.next_u64() % P)
    }
}

fn fp(values: &[i64]) -> Vec<Fp> {
    values.iter().map(|v| Fp::from_i64(*v)).collect()
}

fn small_domain(scale: u8) -> Domain<Fp> {
    let roots = RootsOfUnity::from_two_adic_root(Fp(3), 16).unwrap();
    Domain::new(&roots, scale).unwrap()
}

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::from_seed([7; 32])
}

#[test]
fn generator_has_full_two_adic_order() {
    let roots = RootsOfUnity::from_two_adic_root(Fp(3), 16).unwrap();
    assert_eq!(roots.max_scale(), 16);
    assert_eq!(roots.root(1).unwrap(), Fp(P - 1));
    assert_eq!(roots.root(2).unwrap(), Fp(65281));
    assert_eq!(pow_vartime(&Fp(3), &[P - 1]), Fp(1));
}

#[test]
fn forward_transform_of_known_values() {
    let domain = small_domain(2);
    assert_eq!(
        domain.forward(&fp(&[1, 2, 3, 4])).unwrap(),
        fp(&[10, 510, -2, 65023])
    );
    assert_eq!(
        domain.inverse(&fp(&[10, 510, -2, 65023])).unwrap(),
        fp(&[1, 2, 3, 4])
    );
}

#[test]
fn transform_roundtrips_in_small_field() {
    let rng = &mut rng();
    let domain = small_domain(10);
    for scale in 0..=10 {
        let values: Vec<Fp> = (0..1 << scale).map(|_| Fp::random(rng)).collect();
        let evals = domain.forward(&values).unwrap();
        assert_eq!(domain.inverse(&evals).unwrap(), values);
    }
}

#[test]
fn mul_and_div_in_small_field() {
    let domain = small_domain(6);
    let a = Polynomial::new(fp(&[1, 2, 3, 4, 7, 8]));
    let b = Polynomial::new(fp(&[5, 1, 3]));
    let product = domain.mul(&a, &b).unwrap();
    assert_eq!(product, Polynomial::new(fp(&[5, 11, 20, 29, 48, 59, 29, 24])));

    let (q, r) = product.div(&b).unwrap();
    assert_eq!(q, a);
    assert!(r.is_zero());
}

#[test]
fn extended_gcd_in_small_field() {
    let domain = small_domain(4);
    let a = Polynomial::new(fp(&[1, 1, 1, 1]));
    let b = Polynomial::new(fp(&[1, 0, 0, 1]));
    let bezout = domain.extended_gcd(&a, &b).unwrap();
    assert_eq!(bezout.gcd, Polynomial::new(fp(&[1, 1])));
    assert_eq!(bezout.u, Polynomial::new(fp(&[1, -1])));
    assert_eq!(bezout.v, Polynomial::new(fp(&[0, 1])));
}

#[test]
fn multi_evaluate_in_small_field() {
    let rng = &mut rng();
    let domain = small_domain(8);
    let points: Vec<Fp> = (0..16).map(|_| Fp::random(rng)).collect();
    let tree = domain.subproduct_tree(&points).unwrap();
    let f = Polynomial::<Fp>::random(12, rng);
    let expected: Vec<Fp> = points.iter().map(|x| f.evaluate_at(x)).collect();
    assert_eq!(domain.multi_evaluate(&f, &tree).unwrap(), expected);
}

#[test]
fn zero_polynomial_in_small_field() {
    let domain = small_domain(9);
    let config = Config {
        max_scale: 9,
        points_per_leaf: 4,
        reduction_factor: 2,
    };
    let logger = slog::Logger::root(slog::Discard, slog::o!());
    let builder = ZeroPolynomialBuilder::new(&domain, &config, logger).unwrap();

    let missing: Vec<usize> = (0..256).filter(|i| i % 3 == 1).collect();
    let (zero_eval, zero_poly) = builder.zero_poly_via_multiplication(&missing, 256).unwrap();
    assert_eq!(zero_poly.degree(), missing.len());
    for (i, eval) in zero_eval.iter().enumerate() {
        assert_eq!(eval.is_zero(), i % 3 == 1);
    }
}

#[test]
fn small_and_bls_domains_coexist() {
    let small = small_domain(4);
    let bls = Domain::new(&RootsOfUnity::bls12_381(), 4).unwrap();
    assert_eq!(small.max_width(), bls.max_width());

    let small_evals = small.forward(&fp(&[1, 1])).unwrap();
    let bls_evals = bls
        .forward(&[Scalar::from(1u64), Scalar::from(1u64)])
        .unwrap();
    assert_eq!(small_evals[0], Fp(2));
    assert_eq!(bls_evals[0], Scalar::from(2u64));
}
