use rand::Rng;

use crate::error::{GibberishError, Result};

/// Picks one item from `items`, where `items[i]` has a relative weight of `weights[i]`.
///
/// A value is drawn uniformly in `[0, sum(weights)]` and the first item whose
/// cumulative weight reaches it is returned. Weights may be fractional.
/// Items with a zero weight are never returned.
///
/// # Errors
/// - `EmptyChoice` if `items` is empty.
/// - `InvalidWeights` if the lengths differ, a weight is negative or not
///   finite, or all weights are zero.
pub fn choose<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T], weights: &[f64]) -> Result<&'a T> {
	if items.is_empty() {
		return Err(GibberishError::EmptyChoice);
	}
	if items.len() != weights.len() {
		return Err(GibberishError::InvalidWeights(format!(
			"{} items but {} weights",
			items.len(),
			weights.len()
		)));
	}
	if let Some(weight) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
		return Err(GibberishError::InvalidWeights(format!("weight {} is not a finite non-negative number", weight)));
	}

	let total: f64 = weights.iter().sum();
	if !total.is_finite() || total <= 0.0 {
		return Err(GibberishError::InvalidWeights(format!("weights sum to {}", total)));
	}

	let r = rng.random_range(0.0..=total);
	let mut so_far = 0.0;
	let mut fallback = None;
	for (item, weight) in items.iter().zip(weights) {
		if *weight <= 0.0 {
			continue;
		}
		so_far += weight;
		if r <= so_far {
			return Ok(item);
		}
		fallback = Some(item);
	}

	// Rounding can leave `so_far` a hair below `total`
	fallback.ok_or(GibberishError::EmptyChoice)
}
