use std::collections::{BTreeMap, HashSet};

use rand::Rng;

use crate::error::{GibberishError, Result};
use super::generator::Generator;
use super::weighted::choose;

/// A weighted pool of generated words reused across sentences.
///
/// Words are roughly ordered from short to long and the word at 1-based
/// index `k` has a weight of `1/k`, so short words come up more often,
/// the way they do in real text.
///
/// # Invariants
/// - `words` are unique
/// - `words.len() == weights.len()`
#[derive(Clone, Debug, PartialEq)]
pub struct Vocabulary {
	words: Vec<String>,
	weights: Vec<f64>,
}

impl Vocabulary {
	/// Generates a vocabulary of `count` unique words.
	///
	/// # Errors
	/// - Any error of [`Generator::generate_word`].
	/// - `AttemptsExhausted` if `max_attempts` duplicates are drawn in a row.
	pub fn generate<R: Rng + ?Sized>(generator: &Generator, rng: &mut R, count: usize) -> Result<Self> {
		log::info!("Generating a vocabulary of {} words", count);
		let mut words = generate_by_length(generator, rng, count)?;
		shuffle_locally(rng, &mut words);
		Ok(Self::from_ordered(words))
	}

	/// Builds a vocabulary from words already in their final order.
	pub fn from_ordered(words: Vec<String>) -> Self {
		let weights = (1..=words.len()).map(|k| 1.0 / k as f64).collect();
		Self { words, weights }
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn weights(&self) -> &[f64] {
		&self.weights
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Draws one word according to the vocabulary weights.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str> {
		choose(rng, &self.words, &self.weights).map(String::as_str)
	}
}

/// Generates `count` unique words and returns them by ascending length.
///
/// Words of the same length keep the order in which they were generated.
pub(crate) fn generate_by_length<R: Rng + ?Sized>(generator: &Generator, rng: &mut R, count: usize) -> Result<Vec<String>> {
	let max_attempts = generator.settings().max_attempts;
	let mut seen: HashSet<String> = HashSet::with_capacity(count);
	let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
	let mut duplicates = 0;

	while seen.len() < count {
		let word = generator.generate_word(rng)?;
		if !seen.insert(word.clone()) {
			duplicates += 1;
			if duplicates >= max_attempts {
				return Err(GibberishError::AttemptsExhausted {
					what: "a unique vocabulary word",
					attempts: duplicates,
				});
			}
			continue;
		}
		duplicates = 0;
		by_length.entry(word.chars().count()).or_default().push(word);
	}

	Ok(by_length.into_values().flatten().collect())
}

/// Mixes nearby words so that shorter words are only usually, not always, first.
///
/// With a window of `len / 7`, each start index `i` in `0..len - window`
/// performs `window` swaps of two indices drawn uniformly from `i..=i + window`.
pub(crate) fn shuffle_locally<R: Rng + ?Sized, T>(rng: &mut R, items: &mut [T]) {
	let window = items.len() / 7;
	if window == 0 {
		return;
	}
	for start in 0..items.len() - window {
		for _ in 0..window {
			let a = rng.random_range(start..=start + window);
			let b = rng.random_range(start..=start + window);
			items.swap(a, b);
		}
	}
}
