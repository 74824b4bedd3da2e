//! Bounded jitter sources for trajectory and timing variation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples used to jitter otherwise deterministic values.
pub trait NoiseSource {
	/// Uniform sample in `[0, 1)`.
	fn unit(&mut self) -> f64;

	/// Symmetric jitter uniformly distributed in `[-n/2, n/2)`.
	fn noise(&mut self, n: f64) -> f64 {
		self.unit() * n - n / 2.0
	}

	/// Uniform index in `[0, len)`. Returns 0 for an empty range.
	fn pick(&mut self, len: usize) -> usize {
		if len == 0 {
			return 0;
		}
		((self.unit() * len as f64) as usize).min(len - 1)
	}
}

/// Seedable pseudo-random noise backed by a small fast RNG.
#[derive(Clone, Debug)]
pub struct SeededNoise {
	rng: SmallRng,
}

impl SeededNoise {
	/// Same seed, same sequence of samples.
	pub fn new(seed: u64) -> Self {
		Self {
			rng: SmallRng::seed_from_u64(seed),
		}
	}
}

impl NoiseSource for SeededNoise {
	fn unit(&mut self) -> f64 {
		self.rng.gen_range(0.0..1.0)
	}
}

/// Noise source returning the same unit sample forever.
///
/// A unit of `0.5` produces zero jitter, which makes trajectories exactly
/// reproducible.
#[derive(Clone, Copy, Debug)]
pub struct ConstantNoise(pub f64);

impl Default for ConstantNoise {
	fn default() -> Self {
		Self(0.5)
	}
}

impl NoiseSource for ConstantNoise {
	fn unit(&mut self) -> f64 {
		self.0.clamp(0.0, 1.0 - f64::EPSILON)
	}
}
