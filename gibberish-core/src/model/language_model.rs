use std::collections::HashSet;
use std::path::Path;

use crate::error::{GibberishError, Result};
use crate::io::read_words;
use super::trie::TrieNode;

/// Words shorter than this never enter the beginnings trie, since word seeds
/// are always this many characters long.
pub const SEED_LENGTH: usize = 3;

/// The statistical model of a corpus.
///
/// This struct manages:
/// - `general`: counts of every substring at every start offset of every word.
/// - `beginnings`: counts of word-initial substrings of words of at least
///   [`SEED_LENGTH`] characters.
/// - `words`: the corpus itself, used to reject generated words that are real.
///
/// The model is built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct LanguageModel {
	general: TrieNode,
	beginnings: TrieNode,
	words: HashSet<String>,
}

impl LanguageModel {
	/// Builds the model from a list of corpus words.
	///
	/// # Errors
	/// - `EmptyCorpus` if `words` holds no non-empty word.
	/// - `DegenerateCorpus` if no word is long enough to seed generation.
	pub fn from_words<I, S>(words: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let words: Vec<String> = words
			.into_iter()
			.map(|word| word.as_ref().trim_end_matches(['\r', '\n']).to_owned())
			.filter(|word| !word.is_empty())
			.collect();
		if words.is_empty() {
			return Err(GibberishError::EmptyCorpus);
		}

		let total = words.len();
		log::info!("Loading {} words…", total);
		let step = total / 10;

		let mut model = Self {
			general: TrieNode::new(),
			beginnings: TrieNode::new(),
			words: HashSet::with_capacity(total),
		};
		for (i, word) in words.into_iter().enumerate() {
			if step > 0 && i != 0 && i % step == 0 {
				log::info!("{}%", 10 * i / step);
			}
			model.add_word(word);
		}

		if model.beginnings.is_empty() {
			return Err(GibberishError::DegenerateCorpus(format!(
				"no word has at least {} characters",
				SEED_LENGTH
			)));
		}
		log::info!("Done loading.");
		Ok(model)
	}

	/// Reads a corpus file (one word per line) and builds the model.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		Self::from_words(read_words(filepath)?)
	}

	/// Records one corpus word in both tries.
	///
	/// Each suffix of the word goes into the general trie, so that a word of
	/// `L` characters counts substrings at `L` different start offsets.
	fn add_word(&mut self, word: String) {
		for (offset, _) in word.char_indices() {
			self.general.insert(&word[offset..]);
		}
		if word.chars().count() >= SEED_LENGTH {
			self.beginnings.insert(&word);
		}
		self.words.insert(word);
	}

	/// Returns `true` if `word` is a corpus word (case-sensitive, exact match).
	pub fn is_known_word(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	/// Trie of every substring at every offset.
	pub fn general(&self) -> &TrieNode {
		&self.general
	}

	/// Trie of word-initial substrings.
	pub fn beginnings(&self) -> &TrieNode {
		&self.beginnings
	}

	/// Number of distinct corpus words.
	pub fn word_count(&self) -> usize {
		self.words.len()
	}
}
