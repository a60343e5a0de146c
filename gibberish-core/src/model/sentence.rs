use rand::Rng;

use crate::error::{GibberishError, Result};
use super::settings::GenerationSettings;
use super::vocabulary::Vocabulary;
use super::weighted::choose;

/// Marks appended after a word that does not end the sentence.
const INNER_MARKS: [&str; 3] = ["", ",", ";"];
const INNER_MARK_WEIGHTS: [f64; 3] = [85.0, 10.0, 5.0];

/// Marks ending a sentence.
const END_MARKS: [&str; 3] = [".", "?", "!"];
const END_MARK_WEIGHTS: [f64; 3] = [90.0, 6.0, 4.0];

/// Builds a punctuated, capitalized sentence from vocabulary words.
///
/// The sentence has between `min_sentence_words` and `max_sentence_words`
/// words. A word is never followed by itself.
///
/// # Errors
/// - `InvalidVocabulary` if the vocabulary has fewer than two distinct words.
/// - `AttemptsExhausted` if `max_attempts` repeated draws happen in a row.
pub fn generate_sentence<R: Rng + ?Sized>(rng: &mut R, vocabulary: &Vocabulary, settings: &GenerationSettings) -> Result<String> {
	settings.validate()?;
	check_vocabulary(vocabulary)?;

	let length = rng.random_range(settings.min_sentence_words..=settings.max_sentence_words);
	let mut sentence: Vec<String> = Vec::with_capacity(length);
	let mut last: Option<&str> = None;
	let mut repeats = 0;

	while sentence.len() < length {
		let word = vocabulary.choose(rng)?;
		if last.is_some_and(|previous| same_word(previous, word)) {
			repeats += 1;
			if repeats >= settings.max_attempts {
				return Err(GibberishError::AttemptsExhausted {
					what: "a sentence word",
					attempts: repeats,
				});
			}
			continue;
		}
		repeats = 0;
		last = Some(word);

		let mut entry = word.to_owned();
		if sentence.len() < length - 1 {
			entry.push_str(choose(rng, &INNER_MARKS, &INNER_MARK_WEIGHTS)?);
		}
		sentence.push(entry);
	}

	let mut text = capitalize(&sentence.join(" "));
	text.push_str(choose(rng, &END_MARKS, &END_MARK_WEIGHTS)?);
	Ok(text)
}

/// Builds between `min_paragraph_sentences` and `max_paragraph_sentences`
/// sentences joined by single spaces.
pub fn generate_paragraph<R: Rng + ?Sized>(rng: &mut R, vocabulary: &Vocabulary, settings: &GenerationSettings) -> Result<String> {
	settings.validate()?;
	let count = rng.random_range(settings.min_paragraph_sentences..=settings.max_paragraph_sentences);
	let sentences = (0..count)
		.map(|_| generate_sentence(rng, vocabulary, settings))
		.collect::<Result<Vec<_>>>()?;
	Ok(sentences.join(" "))
}

fn same_word(a: &str, b: &str) -> bool {
	a.to_lowercase() == b.to_lowercase()
}

/// Without two distinct words, the no-repeat rule cannot be satisfied.
fn check_vocabulary(vocabulary: &Vocabulary) -> Result<()> {
	let mut words = vocabulary.words().iter();
	let Some(first) = words.next() else {
		return Err(GibberishError::InvalidVocabulary("the vocabulary is empty".to_owned()));
	};
	if words.all(|word| same_word(first, word)) {
		return Err(GibberishError::InvalidVocabulary(
			"a sentence needs at least two distinct words".to_owned(),
		));
	}
	Ok(())
}

fn capitalize(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn vocabulary() -> Vocabulary {
		Vocabulary::from_ordered(
			["a", "lo", "mip", "tarn", "vosk", "eltrin", "brasome", "quindle"]
				.iter()
				.map(|w| w.to_string())
				.collect(),
		)
	}

	fn bare_words(sentence: &str) -> Vec<String> {
		sentence
			.split(' ')
			.map(|w| w.trim_end_matches([',', ';', '.', '?', '!']).to_lowercase())
			.collect()
	}

	#[test]
	fn test_sentence_shape() {
		let settings = GenerationSettings::default();
		let vocabulary = vocabulary();
		let mut rng = StdRng::seed_from_u64(17);
		for _ in 0..200 {
			let sentence = generate_sentence(&mut rng, &vocabulary, &settings).unwrap();
			let words = bare_words(&sentence);
			assert!((3..=20).contains(&words.len()), "{}", sentence);
			assert!(sentence.chars().next().unwrap().is_uppercase(), "{}", sentence);
			assert!(sentence.ends_with(['.', '?', '!']), "{}", sentence);
			// Only the last word carries the end mark
			let last = sentence.split(' ').last().unwrap();
			assert!(!last.contains([',', ';']), "{}", sentence);
		}
	}

	#[test]
	fn test_no_adjacent_repeats() {
		let settings = GenerationSettings::default();
		// Heavily skewed vocabulary makes repeats likely
		let vocabulary = Vocabulary::from_ordered(vec!["ka".to_owned(), "zu".to_owned()]);
		let mut rng = StdRng::seed_from_u64(23);
		for _ in 0..200 {
			let sentence = generate_sentence(&mut rng, &vocabulary, &settings).unwrap();
			let words = bare_words(&sentence);
			assert!(words.windows(2).all(|pair| pair[0] != pair[1]), "{}", sentence);
		}
	}

	#[test]
	fn test_degenerate_vocabulary_is_an_error() {
		let settings = GenerationSettings::default();
		let mut rng = StdRng::seed_from_u64(0);
		let single = Vocabulary::from_ordered(vec!["ka".to_owned()]);
		let empty = Vocabulary::from_ordered(Vec::new());
		assert!(matches!(
			generate_sentence(&mut rng, &single, &settings),
			Err(GibberishError::InvalidVocabulary(_))
		));
		assert!(matches!(
			generate_sentence(&mut rng, &empty, &settings),
			Err(GibberishError::InvalidVocabulary(_))
		));
	}

	#[test]
	fn test_paragraph_sentence_count() {
		let settings = GenerationSettings {
			min_paragraph_sentences: 3,
			max_paragraph_sentences: 3,
			..GenerationSettings::default()
		};
		let mut rng = StdRng::seed_from_u64(31);
		let paragraph = generate_paragraph(&mut rng, &vocabulary(), &settings).unwrap();
		let ends = paragraph.chars().filter(|c| matches!(c, '.' | '?' | '!')).count();
		assert_eq!(3, ends);
	}

	#[test]
	fn test_inverted_ranges_are_an_error() {
		let mut rng = StdRng::seed_from_u64(0);
		let words = GenerationSettings {
			min_sentence_words: 5,
			max_sentence_words: 4,
			..GenerationSettings::default()
		};
		let sentences = GenerationSettings {
			min_paragraph_sentences: 6,
			max_paragraph_sentences: 2,
			..GenerationSettings::default()
		};
		assert!(matches!(
			generate_sentence(&mut rng, &vocabulary(), &words),
			Err(GibberishError::InvalidSettings(_))
		));
		assert!(matches!(
			generate_paragraph(&mut rng, &vocabulary(), &sentences),
			Err(GibberishError::InvalidSettings(_))
		));
	}

	#[test]
	fn test_capitalize() {
		assert_eq!("Hello there", capitalize("hello there"));
		assert_eq!("", capitalize(""));
	}
}
