//! Sources of the illustrative weight and bias values.
//!
//! The renderer never touches a global generator; it asks a [`Sampler`]
//! for every value so tests can pin the output.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies uniformly distributed reals.
pub trait Sampler {
    /// A value in `[low, high)`. Returns `low` when the range is empty.
    fn uniform(&mut self, low: f32, high: f32) -> f32;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        (**self).uniform(low, high)
    }
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSampler<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Release the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSampler<ChaCha8Rng> {
    /// Seeded from OS entropy; values differ on every run.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Reproducible sequence for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, entropy otherwise.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if low < high {
            self.rng.gen_range(low..high)
        } else {
            low
        }
    }
}

/// Always returns the same fraction of the requested range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSampler {
    fraction: f32,
}

impl FixedSampler {
    /// `fraction` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
        }
    }

    /// Midpoint of every range.
    #[must_use]
    pub fn midpoint() -> Self {
        Self::new(0.5)
    }
}

impl Sampler for FixedSampler {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        (high - low).mul_add(self.fraction, low)
    }
}
