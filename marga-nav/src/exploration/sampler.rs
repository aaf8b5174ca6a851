//! Randomized candidate choice while seeking the goal.

use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;

/// Picks an index into a ranked candidate list.
///
/// Level 0 always takes the best candidate. Levels 1 and 2 draw index `i`
/// of `n` with weight `(n - i)^(3 - level)`, so level 2 spreads choices
/// wider than level 1. Randomness only applies during the first `horizon`
/// steps.
#[derive(Clone, Debug)]
pub struct CandidateSampler {
    level: u8,
    horizon: u32,
    rng: StdRng,
}

impl CandidateSampler {
    /// Create a sampler with a fixed seed.
    pub fn new(level: u8, horizon: u32, seed: u64) -> Self {
        Self {
            level,
            horizon,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Is randomness in effect after `steps` steps?
    pub fn is_active(&self, steps: u32) -> bool {
        self.level > 0 && steps < self.horizon
    }

    /// Index of the candidate to take out of `count` ranked ones.
    pub fn pick(&mut self, count: usize, steps: u32) -> usize {
        if count < 2 || !self.is_active(steps) {
            return 0;
        }
        let exponent = 3 - i32::from(self.level.min(2));
        let weights: Vec<f64> = (0..count)
            .map(|i| ((count - i) as f64).powi(exponent))
            .collect();

        match WeightedIndex::new(&weights) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(e) => {
                tracing::warn!("Candidate weights rejected: {}", e);
                0
            }
        }
    }
}
