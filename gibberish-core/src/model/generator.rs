use rand::Rng;

use crate::error::{GibberishError, Result};
use super::language_model::{LanguageModel, SEED_LENGTH};
use super::settings::GenerationSettings;
use super::trie::{Symbol, TrieNode};
use super::weighted::choose;

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Returns `true` if `text` contains one of `a, e, i, o, u, y`.
pub fn has_vowel(text: &str) -> bool {
	text.chars().any(|c| VOWELS.contains(&c))
}

/// Length restriction drawn before generating a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LengthChoice {
	Exactly(usize),
	Unrestricted,
}

/// Builds new words one character at a time from a [`LanguageModel`].
///
/// # Responsibilities
/// - Seed each word with a realistic opening drawn from the beginnings trie
/// - Extend it by blending the continuations of several trailing contexts
/// - Reject candidates that are real words or have no vowel
///
/// Looking only a few characters back keeps the short patterns of the
/// language; looking further back brings longer roots. Blending both gives
/// words with recognizable roots and parts never seen together.
#[derive(Debug, Clone)]
pub struct Generator {
	model: LanguageModel,
	settings: GenerationSettings,
}

impl Generator {
	/// Creates a generator.
	///
	/// # Errors
	/// Returns `InvalidSettings` if `settings` do not validate.
	pub fn new(model: LanguageModel, settings: GenerationSettings) -> Result<Self> {
		settings.validate()?;
		Ok(Self { model, settings })
	}

	pub fn model(&self) -> &LanguageModel {
		&self.model
	}

	pub fn settings(&self) -> &GenerationSettings {
		&self.settings
	}

	/// Generates one word that is not in the corpus and contains a vowel.
	///
	/// About 1% of words have one letter and 3% two letters (see
	/// `one_letter_chance` / `two_letter_chance`); the others have no length limit.
	///
	/// # Errors
	/// - `AttemptsExhausted` if no acceptable word is found within `max_attempts`.
	/// - `DegenerateCorpus` if the tries cannot continue a word.
	pub fn generate_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
		match self.choose_length(rng) {
			LengthChoice::Exactly(length) => self.generate_short_word(rng, length),
			LengthChoice::Unrestricted => self.generate_long_word(rng),
		}
	}

	/// Generates `count` words joined by single spaces.
	pub fn generate_words<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<String> {
		let words = (0..count)
			.map(|_| self.generate_word(rng))
			.collect::<Result<Vec<_>>>()?;
		Ok(words.join(" "))
	}

	fn choose_length<R: Rng + ?Sized>(&self, rng: &mut R) -> LengthChoice {
		let roll: f64 = rng.random();
		if roll < self.settings.one_letter_chance {
			LengthChoice::Exactly(1)
		} else if roll < self.settings.one_letter_chance + self.settings.two_letter_chance {
			LengthChoice::Exactly(2)
		} else {
			LengthChoice::Unrestricted
		}
	}

	/// Cuts a sampled seed down to `length` characters until it has a vowel
	/// and is not a real word.
	fn generate_short_word<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> Result<String> {
		for _ in 0..self.settings.max_attempts {
			let word: String = self.sample_seed(rng)?.chars().take(length).collect();
			if self.is_acceptable(&word) {
				return Ok(word);
			}
			log::trace!("Rejected short candidate {:?}", word);
		}
		Err(GibberishError::AttemptsExhausted {
			what: "a short word",
			attempts: self.settings.max_attempts,
		})
	}

	fn generate_long_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
		for attempt in 0..self.settings.max_attempts {
			match self.build_candidate(rng)? {
				Some(word) if self.is_acceptable(&word) => {
					if attempt > 0 {
						log::debug!("Accepted {:?} after {} rejections", word, attempt);
					}
					return Ok(word);
				}
				candidate => log::trace!("Rejected candidate {:?}", candidate),
			}
		}
		Err(GibberishError::AttemptsExhausted {
			what: "a word",
			attempts: self.settings.max_attempts,
		})
	}

	fn is_acceptable(&self, word: &str) -> bool {
		!word.is_empty() && has_vowel(word) && !self.model.is_known_word(word)
	}

	/// Seeds a candidate and extends it until the end of word is drawn.
	///
	/// Returns `Ok(None)` if the candidate outgrew `max_word_length`.
	fn build_candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<String>> {
		let mut word: Vec<char> = self.sample_seed(rng)?.chars().collect();

		loop {
			let (symbols, weights) = self.continuations(&word);
			if symbols.is_empty() {
				return Err(GibberishError::DegenerateCorpus(format!(
					"no continuation for {:?}",
					word.iter().collect::<String>()
				)));
			}
			match choose(rng, &symbols, &weights)? {
				Symbol::End => break,
				Symbol::Char(c) => word.push(*c),
			}
			if word.len() > self.settings.max_word_length {
				return Ok(None);
			}
		}

		Ok(Some(word.into_iter().collect()))
	}

	/// Aggregates the weighted continuations of every trailing context of `word`.
	///
	/// For each context length `i` in `min_reference_letters..=max_reference_letters`
	/// (capped at the word length), every child of the trailing `i` characters
	/// in the general trie adds `count * specificity_base^i` to its symbol.
	/// Longer contexts are rarer by roughly one in `specificity_base` per
	/// character, which the power compensates. The end-of-word symbol gets an
	/// extra `end_of_word_bias` so that words stay finite.
	fn continuations(&self, word: &[char]) -> (Vec<Symbol>, Vec<f64>) {
		let mut symbols: Vec<Symbol> = Vec::new();
		let mut weights: Vec<f64> = Vec::new();

		let min = self.settings.min_reference_letters.min(word.len());
		let max = self.settings.max_reference_letters.min(word.len());
		for i in min..=max {
			let reference = &word[word.len() - i..];
			let Some(node) = self.model.general().lookup_chars(reference.iter().copied()) else {
				continue;
			};
			let specificity = self.settings.specificity_base.powi(i as i32);
			for (symbol, child) in node.children() {
				let mut weight = child.count() as f64 * specificity;
				if symbol == Symbol::End {
					weight *= self.settings.end_of_word_bias;
				}
				match symbols.iter().position(|s| *s == symbol) {
					Some(index) => weights[index] += weight,
					None => {
						symbols.push(symbol);
						weights.push(weight);
					}
				}
			}
		}

		(symbols, weights)
	}

	/// Walks [`SEED_LENGTH`] levels down the beginnings trie, each step weighted
	/// by child counts, and returns the characters visited.
	fn sample_seed<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
		let mut seed = String::with_capacity(SEED_LENGTH);
		let mut node: &TrieNode = self.model.beginnings();
		for _ in 0..SEED_LENGTH {
			let (children, weights): (Vec<(char, &TrieNode)>, Vec<f64>) = node
				.children()
				.filter_map(|(symbol, child)| symbol.as_char().map(|c| ((c, child), child.count() as f64)))
				.unzip();
			if children.is_empty() {
				return Err(GibberishError::DegenerateCorpus(format!(
					"beginnings trie has no continuation after {:?}",
					seed
				)));
			}
			let (c, child) = *choose(rng, &children, &weights)?;
			seed.push(c);
			node = child;
		}
		Ok(seed)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	const CORPUS: [&str; 15] = [
		"cat", "cats", "car", "card", "cart", "care", "core", "bore", "bark", "dark", "stark", "start", "art",
		"ear", "oak",
	];

	fn generator(settings: GenerationSettings) -> Generator {
		Generator::new(LanguageModel::from_words(CORPUS).unwrap(), settings).unwrap()
	}

	#[test]
	fn test_has_vowel() {
		assert!(has_vowel("sky"));
		assert!(has_vowel("a"));
		assert!(!has_vowel("brr"));
		assert!(!has_vowel(""));
	}

	#[test]
	fn test_words_are_new_and_have_vowels() {
		let generator = generator(GenerationSettings::default());
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..300 {
			let word = generator.generate_word(&mut rng).unwrap();
			assert!(!word.is_empty());
			assert!(has_vowel(&word), "{} has no vowel", word);
			assert!(!CORPUS.contains(&word.as_str()), "{} is a corpus word", word);
		}
	}

	#[test]
	fn test_length_gate_proportions() {
		let generator = generator(GenerationSettings::default());
		let mut rng = StdRng::seed_from_u64(6);
		let (mut ones, mut twos) = (0, 0);
		for _ in 0..20_000 {
			match generator.choose_length(&mut rng) {
				LengthChoice::Exactly(1) => ones += 1,
				LengthChoice::Exactly(2) => twos += 1,
				LengthChoice::Exactly(n) => panic!("unexpected length {}", n),
				LengthChoice::Unrestricted => {}
			}
		}
		// Expected 200 and 600
		assert!((130..=270).contains(&ones), "{} one-letter draws", ones);
		assert!((480..=720).contains(&twos), "{} two-letter draws", twos);
	}

	#[test]
	fn test_one_letter_words() {
		let generator = generator(GenerationSettings {
			one_letter_chance: 1.0,
			two_letter_chance: 0.0,
			..GenerationSettings::default()
		});
		let mut rng = StdRng::seed_from_u64(10);
		for _ in 0..100 {
			let word = generator.generate_word(&mut rng).unwrap();
			assert_eq!(1, word.chars().count());
			assert!(has_vowel(&word), "{} has no vowel", word);
		}
	}

	#[test]
	fn test_short_words_have_requested_length() {
		let generator = generator(GenerationSettings {
			one_letter_chance: 0.0,
			two_letter_chance: 1.0,
			..GenerationSettings::default()
		});
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..100 {
			let word = generator.generate_word(&mut rng).unwrap();
			assert_eq!(2, word.chars().count());
			assert!(has_vowel(&word));
		}
	}

	#[test]
	fn test_seeds_are_word_openings() {
		let generator = generator(GenerationSettings::default());
		let mut rng = StdRng::seed_from_u64(5);
		for _ in 0..100 {
			let seed = generator.sample_seed(&mut rng).unwrap();
			assert_eq!(3, seed.chars().count());
			assert!(CORPUS.iter().any(|word| word.starts_with(&seed)), "{} opens no word", seed);
		}
	}

	#[test]
	fn test_continuations_blend_contexts() {
		let generator = generator(GenerationSettings::default());
		let word: Vec<char> = "car".chars().collect();
		let (symbols, weights) = generator.continuations(&word);

		// "car" is followed by d, t, e and the end of a word; "ar" adds k
		for symbol in [Symbol::Char('d'), Symbol::Char('t'), Symbol::Char('e'), Symbol::Char('k'), Symbol::End] {
			assert!(symbols.contains(&symbol), "missing {:?}", symbol);
		}
		let weight = |symbol| weights[symbols.iter().position(|s| *s == symbol).unwrap()];

		// "ar" -> k: bark, dark, stark
		assert_eq!(3.0 * 26f64.powi(2), weight(Symbol::Char('k')));
		// "ar" -> d (card) plus "car" -> d (card)
		assert_eq!(26f64.powi(2) + 26f64.powi(3), weight(Symbol::Char('d')));
		// "ar" -> end (car, ear) plus "car" -> end (car), boosted
		assert_eq!(1.5 * (2.0 * 26f64.powi(2) + 26f64.powi(3)), weight(Symbol::End));
	}

	#[test]
	fn test_generation_is_reproducible() {
		let generator = generator(GenerationSettings::default());
		let mut first = StdRng::seed_from_u64(99);
		let mut second = StdRng::seed_from_u64(99);
		assert_eq!(
			generator.generate_words(&mut first, 20).unwrap(),
			generator.generate_words(&mut second, 20).unwrap()
		);
	}

	#[test]
	fn test_generate_words_joins_with_spaces() {
		let generator = generator(GenerationSettings::default());
		let mut rng = StdRng::seed_from_u64(8);
		assert_eq!(7, generator.generate_words(&mut rng, 7).unwrap().split(' ').count());
		assert_eq!("", generator.generate_words(&mut rng, 0).unwrap());
	}

	#[test]
	fn test_impossible_corpus_gives_up() {
		// Every candidate is either a corpus word or vowel-free
		let model = LanguageModel::from_words(["brr", "brrr"]).unwrap();
		let generator = Generator::new(
			model,
			GenerationSettings {
				max_attempts: 50,
				..GenerationSettings::default()
			},
		)
		.unwrap();
		let mut rng = StdRng::seed_from_u64(0);
		assert!(matches!(
			generator.generate_word(&mut rng),
			Err(GibberishError::AttemptsExhausted { .. })
		));
	}
}
