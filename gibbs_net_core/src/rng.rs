//! Pseudo-random source consumed by the samplers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// The three draws a sweep needs.
pub trait Random {
    /// Uniform in `[0, 1)`.
    fn uniform(&mut self) -> f64;
    /// Standard normal.
    fn normal(&mut self) -> f64;
    /// Uniform integer in `[0, n)`.
    fn next(&mut self, n: u64) -> u64;
}

/// Seedable default generator owned by a `Network`.
pub struct NetRng {
    inner: StdRng,
    seed: u64,
}

impl NetRng {
    pub fn new(seed: u64) -> NetRng {
        NetRng {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the sequence from the original seed.
    pub fn reseed(&mut self) {
        self.inner = StdRng::seed_from_u64(self.seed);
    }
}

impl Random for NetRng {
    #[inline]
    fn uniform(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    #[inline]
    fn normal(&mut self) -> f64 {
        self.inner.sample(StandardNormal)
    }

    #[inline]
    fn next(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        self.inner.gen_range(0..n)
    }
}

impl Clone for NetRng {
    fn clone(&self) -> NetRng {
        NetRng {
            inner: self.inner.clone(),
            seed: self.seed,
        }
    }
}

use std::fmt;

impl fmt::Debug for NetRng {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NetRng({})", self.seed)
    }
}
