use super::{DEFAULT_SAMPLE_SIZE, Selector};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A builder for creating a configured `Selector` instance.
#[derive(Debug, Clone)]
pub struct SelectorBuilder {
    limit: usize,
    seed: Option<u64>,
}

impl Default for SelectorBuilder {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }
}

impl SelectorBuilder {
    /// Sets the maximum number of recipes returned per selection.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Seeds the random source so that every selection sequence is reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Like [`seed`](Self::seed), but leaves the selector unseeded for `None`.
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Consumes the builder and creates the `Selector`.
    ///
    /// Without a seed the random source is initialized from OS entropy.
    pub fn build(self) -> Selector {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Selector {
            limit: self.limit,
            rng,
        }
    }
}
