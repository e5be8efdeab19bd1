use ic_crypto_internal_bls12_381_fft::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn test_rng() -> ChaCha20Rng {
    let seed = rand::thread_rng().gen::<[u8; 32]>();
    println!("let seed: [u8; 32] = {:?};", seed);
    ChaCha20Rng::from_seed(seed)
}

#[test]
fn poly_zero_times_zero_is_zero() -> FftResult<()> {
    let domain = Domain::new(&RootsOfUnity::bls12_381(), 5)?;
    let zero = Scalar::from(0u64);

    for coeffs in 0..10 {
        let zpoly = Polynomial::new(vec![zero; coeffs]);
        assert!(zpoly.is_zero());
        let zpoly2 = domain.mul(&zpoly, &zpoly)?;
        assert!(zpoly2.is_zero());
    }

    Ok(())
}

#[test]
fn poly_a_constant_poly_is_constant() -> FftResult<()> {
    let rng = &mut test_rng();
    let constant = <Scalar as FieldElement>::random(rng);
    let poly = Polynomial::constant(constant);

    for _trial in 0..100 {
        let x = <Scalar as FieldElement>::random(rng);
        assert_eq!(poly.evaluate_at(&x), constant);
    }

    Ok(())
}

#[test]
fn poly_product_evaluates_to_product_of_evaluations() -> FftResult<()> {
    let rng = &mut test_rng();
    let domain = Domain::new(&RootsOfUnity::bls12_381(), 8)?;

    for (la, lb) in [(1, 7), (10, 10), (33, 64), (100, 28)] {
        let a = Polynomial::<Scalar>::random(la, rng);
        let b = Polynomial::<Scalar>::random(lb, rng);
        let ab = domain.mul(&a, &b)?;
        assert_eq!(ab.num_coefficients(), la + lb - 1);

        let x = <Scalar as FieldElement>::random(rng);
        assert_eq!(ab.evaluate_at(&x), a.evaluate_at(&x) * b.evaluate_at(&x));
    }

    Ok(())
}

#[test]
fn poly_derivative_obeys_product_rule() -> FftResult<()> {
    let rng = &mut test_rng();
    let domain = Domain::new(&RootsOfUnity::bls12_381(), 6)?;
    let a = Polynomial::<Scalar>::random(9, rng);
    let b = Polynomial::<Scalar>::random(5, rng);

    let lhs = domain.mul(&a, &b)?.differentiate();
    let rhs = domain
        .mul(&a.differentiate(), &b)?
        .add(&domain.mul(&a, &b.differentiate())?);
    assert_eq!(lhs, rhs);

    Ok(())
}

#[test]
fn poly_interpolation_through_the_domain() -> FftResult<()> {
    let rng = &mut test_rng();
    let domain = Domain::new(&RootsOfUnity::bls12_381(), 6)?;
    let poly = Polynomial::<Scalar>::random(20, rng);

    // evaluating on the subgroup of order 32 and transforming back
    // recovers the coefficients
    let evals = domain.forward(poly.coefficients())?;
    assert_eq!(evals.len(), 32);
    let stride = domain.stride_for(32)?;
    for (i, eval) in evals.iter().enumerate() {
        let root = domain.expanded_roots_of_unity()[i * stride];
        assert_eq!(*eval, poly.evaluate_at(&root));
    }
    assert_eq!(Polynomial::new(domain.inverse(&evals)?), poly);

    Ok(())
}

#[test]
fn poly_shift_moves_evaluations_to_a_coset() -> FftResult<()> {
    let rng = &mut test_rng();
    let domain = Domain::new(&RootsOfUnity::bls12_381(), 4)?;
    let poly = Polynomial::<Scalar>::random(16, rng);
    let shift = Scalar::from(PRIMITIVE_ROOT);

    // the transform of the unshifted polynomial evaluates on the coset
    // shift * <w>
    let coset_evals = domain.forward(poly.unshift(&shift).coefficients())?;
    for (i, eval) in coset_evals.iter().enumerate() {
        let x = shift * domain.expanded_roots_of_unity()[i];
        assert_eq!(*eval, poly.evaluate_at(&x));
    }
    assert_eq!(poly.unshift(&shift).shift(&shift)?, poly);

    Ok(())
}
