//! Source of the randomness used by the traffic model.
//!
//! The simulator never reaches for a global generator: every call receives
//! a [`NoiseSource`]. Any [`rand_core::Rng`] is one, so a seeded generator
//! gives reproducible runs, and [`FixedNoise`] removes the randomness
//! entirely.

use rand_core::Rng;

/// Produces uniformly distributed samples in `[0, 1)`.
pub trait NoiseSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> NoiseSource for R {
    /// Keeps the 53 most significant bits so every sample is exactly
    /// representable and strictly below `1.0`.
    #[inline]
    fn next_unit(&mut self) -> f64 {
        let bits = self.next_u64() >> 11;
        bits as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// A [`NoiseSource`] that always returns the same sample.
///
/// ```
/// # use netoptic_core::noise::{FixedNoise, NoiseSource};
/// let mut silent = FixedNoise::SILENT;
/// assert_eq!(silent.next_unit(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedNoise(f64);

impl FixedNoise {
    /// No noise at all.
    pub const SILENT: Self = Self(0.0);

    /// Create a source returning `unit` forever.
    ///
    /// The value is clamped into `[0, 1)`; NaN becomes `0`.
    pub fn new(unit: f64) -> Self {
        if unit.is_nan() {
            return Self::SILENT;
        }
        Self(unit.clamp(0.0, 1.0 - f64::EPSILON))
    }
}

impl NoiseSource for FixedNoise {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaChaRng;
    use rand_core::SeedableRng as _;

    use super::*;

    #[test]
    fn samples_in_unit_interval() {
        let mut rng = ChaChaRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let sample = rng.next_unit();
            assert!((0.0..1.0).contains(&sample), "{sample} out of range");
        }
    }

    #[test]
    fn mean_is_about_half() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        let sum: f64 = (0..10_000).map(|_| rng.next_unit()).sum();
        let mean = sum / 10_000.0;
        assert!(mean > 0.48 && mean < 0.52, "mean was {mean}");
    }

    #[test]
    fn reproducible_with_same_seed() {
        let a: Vec<f64> = {
            let mut rng = ChaChaRng::seed_from_u64(99);
            (0..100).map(|_| rng.next_unit()).collect()
        };
        let b: Vec<f64> = {
            let mut rng = ChaChaRng::seed_from_u64(99);
            (0..100).map(|_| rng.next_unit()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_is_clamped() {
        assert_eq!(FixedNoise::new(-1.0), FixedNoise::SILENT);
        assert_eq!(FixedNoise::new(f64::NAN), FixedNoise::SILENT);
        assert!(FixedNoise::new(2.0).next_unit() < 1.0);
        assert_eq!(FixedNoise::new(0.5).next_unit(), 0.5);
    }
}
