//! Weighted and uniform selection primitives.
//!
//! Every distribution in the traffic models is expressed as a slice of items
//! with a weight accessor, so all sampling funnels through these two
//! functions and stays deterministic under a seeded RNG.

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;

use crate::error::GenError;

/// Picks one item with probability proportional to `weight(item)`.
///
/// Weights need not sum to 1; normalization happens here. Fails with
/// [`GenError::EmptyDistribution`] if `items` is empty or no weight is
/// positive.
pub fn pick_weighted<'a, T, F>(
    items: &'a [T],
    weight: F,
    rng: &mut impl Rng,
) -> Result<&'a T, GenError>
where
    F: Fn(&T) -> f64,
{
    let dist = WeightedIndex::new(items.iter().map(|item| weight(item)))
        .map_err(|_| GenError::EmptyDistribution)?;
    Ok(&items[dist.sample(rng)])
}

/// Picks one item uniformly. Fails with [`GenError::EmptyDistribution`] on
/// an empty slice.
pub fn pick_uniform<'a, T>(items: &'a [T], rng: &mut impl Rng) -> Result<&'a T, GenError> {
    items.choose(rng).ok_or(GenError::EmptyDistribution)
}
