use rand::Rng;

use crate::error::Result;
use crate::model::generator::Generator;
use crate::model::settings::GenerationSettings;
use crate::model::sentence::{generate_paragraph, generate_sentence};
use crate::model::vocabulary::Vocabulary;

/// State of one interactive session.
///
/// Owns the generator, the random source and the vocabulary shared by
/// every sentence and paragraph. The vocabulary is expensive, so it is
/// built on first use and kept until [`Session::rebuild_vocabulary`].
pub struct Session<R: Rng> {
	generator: Generator,
	rng: R,
	vocabulary: Option<Vocabulary>,
}

impl<R: Rng> Session<R> {
	pub fn new(generator: Generator, rng: R) -> Self {
		Self {
			generator,
			rng,
			vocabulary: None,
		}
	}

	pub fn generator(&self) -> &Generator {
		&self.generator
	}

	/// Returns `true` once a vocabulary has been built.
	pub fn has_vocabulary(&self) -> bool {
		self.vocabulary.is_some()
	}

	/// Generates one word.
	pub fn word(&mut self) -> Result<String> {
		self.generator.generate_word(&mut self.rng)
	}

	/// Generates `count` space-separated words.
	pub fn words(&mut self, count: usize) -> Result<String> {
		self.generator.generate_words(&mut self.rng, count)
	}

	/// Generates one sentence, building the vocabulary if needed.
	pub fn sentence(&mut self) -> Result<String> {
		self.with_vocabulary(generate_sentence)
	}

	/// Generates one paragraph, building the vocabulary if needed.
	pub fn paragraph(&mut self) -> Result<String> {
		self.with_vocabulary(generate_paragraph)
	}

	/// Drops the current vocabulary and builds a new one.
	///
	/// On failure the session is left without a vocabulary.
	pub fn rebuild_vocabulary(&mut self) -> Result<()> {
		self.vocabulary = None;
		self.vocabulary = Some(self.build_vocabulary()?);
		Ok(())
	}

	fn build_vocabulary(&mut self) -> Result<Vocabulary> {
		let size = self.generator.settings().vocabulary_size;
		Vocabulary::generate(&self.generator, &mut self.rng, size)
	}

	fn with_vocabulary<F>(&mut self, generate: F) -> Result<String>
	where
		F: FnOnce(&mut R, &Vocabulary, &GenerationSettings) -> Result<String>,
	{
		let vocabulary = match self.vocabulary.take() {
			Some(vocabulary) => vocabulary,
			None => self.build_vocabulary()?,
		};
		let text = generate(&mut self.rng, &vocabulary, self.generator.settings());
		self.vocabulary = Some(vocabulary);
		text
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::language_model::LanguageModel;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn session() -> Session<StdRng> {
		let model = LanguageModel::from_words([
			"stone", "story", "storm", "strong", "string", "spring", "sprint", "spine", "shine", "shiny", "sharp",
			"shape", "apron", "open", "olive", "under",
		])
		.unwrap();
		let settings = GenerationSettings {
			vocabulary_size: 20,
			..GenerationSettings::default()
		};
		Session::new(Generator::new(model, settings).unwrap(), StdRng::seed_from_u64(2))
	}

	#[test]
	fn test_vocabulary_is_lazy_and_cached() {
		let mut session = session();
		assert!(!session.has_vocabulary());

		session.word().unwrap();
		assert!(!session.has_vocabulary());

		session.sentence().unwrap();
		assert!(session.has_vocabulary());
		let first = session.vocabulary.clone();

		session.paragraph().unwrap();
		assert_eq!(first, session.vocabulary);
	}

	#[test]
	fn test_rebuild_replaces_vocabulary() {
		let mut session = session();
		session.rebuild_vocabulary().unwrap();
		let first = session.vocabulary.clone().unwrap();
		session.rebuild_vocabulary().unwrap();
		let second = session.vocabulary.clone().unwrap();

		assert_eq!(20, second.len());
		assert_ne!(first, second);
	}

	#[test]
	fn test_words() {
		let mut session = session();
		assert_eq!(5, session.words(5).unwrap().split(' ').count());
	}
}
