use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Produces uniformly random weights in [-1.0, 1.0].
///
/// The generator is owned by the initializer rather than drawn from a global
/// source, so two initializers built from the same seed yield identical
/// networks.
#[derive(Debug, Clone)]
pub struct WeightInitializer {
    rng: StdRng,
    range: Uniform<f32>,
}

impl WeightInitializer {
    /// Reproducible initializer.
    pub fn from_seed(seed: u64) -> WeightInitializer {
        WeightInitializer::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Initializer seeded from OS entropy.
    pub fn from_entropy() -> WeightInitializer {
        WeightInitializer::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> WeightInitializer {
        WeightInitializer {
            rng,
            range: Uniform::new_inclusive(-1.0, 1.0),
        }
    }

    /// Draws `size` independent weights.
    pub fn generate(&mut self, size: usize) -> Vec<f32> {
        (0..size).map(|_| self.range.sample(&mut self.rng)).collect()
    }
}
