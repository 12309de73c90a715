//! Stage generators and the sampling helpers they share.

pub mod customers;
pub mod order_lines;
pub mod orders;

use rand::Rng;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand_chacha::ChaCha8Rng;

use crate::errors::GenerationError;

/// Categorical distribution over a fixed set of values.
#[derive(Debug, Clone)]
pub struct WeightedPool<T> {
    values: Vec<T>,
    index: WeightedIndex<u32>,
}

impl<T: Clone> WeightedPool<T> {
    pub fn new(entries: &[(T, u32)]) -> Result<Self, GenerationError> {
        let index = WeightedIndex::new(entries.iter().map(|(_, weight)| *weight))?;
        let values = entries.iter().map(|(value, _)| value.clone()).collect();
        Ok(Self { values, index })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.values[self.index.sample(rng)]
    }
}

/// Uniform pick from a non-empty pool.
pub fn pick<'a, R: Rng + ?Sized>(values: &[&'a str], rng: &mut R) -> &'a str {
    let idx = rng.random_range(0..values.len());
    values[idx]
}

/// RNG for one stage, independent of the draws made by other stages.
pub fn stage_rng(seed: u64, stage: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(hash_seed(seed, stage))
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
