use crate::recipe::Recipe;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

mod builder;
mod criteria;

pub use builder::SelectorBuilder;
pub use criteria::SelectionCriteria;

/// How many recipes a selection returns unless configured otherwise.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Filters `recipes` by `criteria` and returns up to `limit` random matches.
///
/// Matches are drawn uniformly without replacement and returned in random
/// order. When fewer than `limit` recipes match, all of them are returned
/// (shuffled). No match at all yields an empty vector, which is a normal
/// outcome rather than an error.
///
/// The result depends only on the inputs and the state of `rng`, so a seeded
/// generator reproduces the same sample.
///
/// # Example
///
/// ```rust
/// use recipe_roulette::prelude::*;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let criteria = SelectionCriteria {
///     dietary_restriction: DietaryRestriction::Vegan,
///     ..SelectionCriteria::default()
/// };
/// let mut rng = StdRng::seed_from_u64(7);
/// let picks = select(Catalog::builtin().all(), &criteria, 5, &mut rng);
/// assert_eq!(picks.len(), 2);
/// ```
pub fn select<'a, R>(
    recipes: &'a [Recipe],
    criteria: &SelectionCriteria,
    limit: usize,
    rng: &mut R,
) -> Vec<&'a Recipe>
where
    R: Rng + ?Sized,
{
    let mut matches: Vec<&Recipe> = recipes.iter().filter(|r| criteria.matches(r)).collect();
    let take = limit.min(matches.len());
    let (sample, _) = matches.partial_shuffle(rng, take);
    let sample = sample.to_vec();

    debug!(
        catalog = recipes.len(),
        matched = matches.len(),
        returned = sample.len(),
        %criteria,
        "selection finished"
    );
    sample
}

/// A reusable selector that owns its sample size and random source.
///
/// Each call to [`select`](Selector::select) advances the random source, so
/// repeated calls with the same criteria act as a "re-roll".
#[derive(Debug, Clone)]
pub struct Selector {
    limit: usize,
    rng: StdRng,
}

impl Selector {
    /// Creates a new builder for a `Selector`.
    pub fn builder() -> SelectorBuilder {
        SelectorBuilder::default()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Runs one selection with this selector's limit and random source.
    pub fn select<'a>(
        &mut self,
        recipes: &'a [Recipe],
        criteria: &SelectionCriteria,
    ) -> Vec<&'a Recipe> {
        select(recipes, criteria, self.limit, &mut self.rng)
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::builder().build()
    }
}
