#![allow(clippy::unwrap_used)]

use crate::{Domain, FieldElement, Polynomial, RootsOfUnity, Scalar};
use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use slog::{o, Drain, Logger};
use std::sync::Arc;

/// A seeded rng whose seed is printed, so that a failure can be replayed
pub(crate) fn reproducible_rng() -> ChaCha20Rng {
    let mut seed = [0u8; 32];
    rand::thread_rng().fill(&mut seed);
    println!("Copy the seed below to reproduce the failed test.");
    println!("let seed: [u8; 32] = {:?};", &seed);
    ChaCha20Rng::from_seed(seed)
}

pub(crate) fn domain(scale: u8) -> Domain<Scalar> {
    Domain::new(&RootsOfUnity::bls12_381(), scale).unwrap()
}

pub(crate) fn scalars(values: &[i64]) -> Vec<Scalar> {
    values.iter().map(|v| <Scalar as FieldElement>::from_i64(*v)).collect()
}

pub(crate) fn poly(values: &[i64]) -> Polynomial<Scalar> {
    Polynomial::new(scalars(values))
}

pub(crate) fn random_scalars(n: usize, rng: &mut ChaCha20Rng) -> Vec<Scalar> {
    (0..n).map(|_| <Scalar as FieldElement>::random(rng)).collect()
}

pub(crate) fn no_op_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}

/// Collects everything written by a `slog_term` logger
#[derive(Clone, Default)]
pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub(crate) fn logger(&self) -> Logger {
        let decorator = slog_term::PlainSyncDecorator::new(self.clone());
        Logger::root(slog_term::FullFormat::new(decorator).build().fuse(), o!())
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
