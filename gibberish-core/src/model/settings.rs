use serde::Deserialize;

use crate::error::{GibberishError, Result};

/// Parameters controlling word, vocabulary, sentence and paragraph generation.
///
/// Every field has a default, so a settings file only needs to list the
/// values it overrides.
///
/// # Invariants (checked by [`GenerationSettings::validate`])
/// - `2 <= min_reference_letters <= max_reference_letters`
/// - chances are in `[0.0, 1.0]` and their sum does not exceed 1.0
/// - every `min_*`/`max_*` pair is ordered and non-zero
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationSettings {
	/// Shortest trailing substring used as context when extending a word.
	pub min_reference_letters: usize,

	/// Longest trailing substring used as context when extending a word.
	pub max_reference_letters: usize,

	/// Base of the specificity correction: a context of length `i` has its
	/// counts multiplied by `specificity_base^i`.
	pub specificity_base: f64,

	/// Extra multiplier applied to the end-of-word candidate.
	pub end_of_word_bias: f64,

	/// Probability of generating a one-letter word.
	pub one_letter_chance: f64,

	/// Probability of generating a two-letter word.
	pub two_letter_chance: f64,

	/// Number of candidates tried before a generation loop gives up.
	pub max_attempts: usize,

	/// A candidate growing past this many characters is discarded.
	pub max_word_length: usize,

	/// Number of words in a generated vocabulary.
	pub vocabulary_size: usize,

	pub min_sentence_words: usize,
	pub max_sentence_words: usize,

	pub min_paragraph_sentences: usize,
	pub max_paragraph_sentences: usize,
}

impl Default for GenerationSettings {
	fn default() -> Self {
		Self {
			min_reference_letters: 2,
			max_reference_letters: 5,
			specificity_base: 26.0,
			end_of_word_bias: 1.5,
			one_letter_chance: 0.01,
			two_letter_chance: 0.03,
			max_attempts: 10_000,
			max_word_length: 64,
			vocabulary_size: 1000,
			min_sentence_words: 3,
			max_sentence_words: 20,
			min_paragraph_sentences: 2,
			max_paragraph_sentences: 15,
		}
	}
}

impl GenerationSettings {
	/// Parses settings from TOML text and validates them.
	pub fn from_toml(text: &str) -> Result<Self> {
		let settings: Self = toml::from_str(text)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks that the settings describe a usable generator.
	///
	/// # Errors
	/// Returns `InvalidSettings` naming the first offending field.
	pub fn validate(&self) -> Result<()> {
		if self.min_reference_letters < 2 {
			return Err(invalid("min_reference_letters must be >= 2"));
		}
		if self.max_reference_letters < self.min_reference_letters {
			return Err(invalid("max_reference_letters must be >= min_reference_letters"));
		}
		if !(self.specificity_base.is_finite() && self.specificity_base > 0.0) {
			return Err(invalid("specificity_base must be a positive number"));
		}
		if !(self.end_of_word_bias.is_finite() && self.end_of_word_bias > 0.0) {
			return Err(invalid("end_of_word_bias must be a positive number"));
		}
		for (name, chance) in [
			("one_letter_chance", self.one_letter_chance),
			("two_letter_chance", self.two_letter_chance),
		] {
			if !(0.0..=1.0).contains(&chance) {
				return Err(invalid(&format!("{} must be between 0.0 and 1.0", name)));
			}
		}
		if self.one_letter_chance + self.two_letter_chance > 1.0 {
			return Err(invalid("one_letter_chance + two_letter_chance must not exceed 1.0"));
		}
		if self.max_attempts == 0 {
			return Err(invalid("max_attempts must be > 0"));
		}
		if self.max_word_length < 3 {
			return Err(invalid("max_word_length must be >= 3"));
		}
		if self.vocabulary_size < 2 {
			return Err(invalid("vocabulary_size must be >= 2"));
		}
		check_range("sentence words", self.min_sentence_words, self.max_sentence_words)?;
		check_range("paragraph sentences", self.min_paragraph_sentences, self.max_paragraph_sentences)?;
		Ok(())
	}
}

fn check_range(name: &str, min: usize, max: usize) -> Result<()> {
	if min == 0 || max < min {
		return Err(invalid(&format!("{} range {}..={} is empty or starts at 0", name, min, max)));
	}
	Ok(())
}

fn invalid(message: &str) -> GibberishError {
	GibberishError::InvalidSettings(message.to_owned())
}
