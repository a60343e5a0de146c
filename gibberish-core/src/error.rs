//! Error type shared by every part of the generator.

/// Result type used across the crate, defaulting to [`GibberishError`].
pub type Result<T, E = GibberishError> = std::result::Result<T, E>;

/// Errors raised while loading a corpus or generating text.
#[derive(Debug, thiserror::Error)]
pub enum GibberishError {
	/// The corpus contains no usable word.
	#[error("The corpus is empty")]
	EmptyCorpus,

	/// The corpus has words, but none that can seed a new word.
	#[error("The corpus cannot be used for generation: {0}")]
	DegenerateCorpus(String),

	/// A weighted choice was asked to pick from nothing.
	#[error("Weighted choice over an empty candidate set")]
	EmptyChoice,

	/// A weighted choice received weights it cannot sample from.
	#[error("Invalid weights: {0}")]
	InvalidWeights(String),

	/// A generation loop ran out of attempts before finding an acceptable result.
	#[error("Gave up generating {what} after {attempts} attempts")]
	AttemptsExhausted {
		what: &'static str,
		attempts: usize,
	},

	/// The vocabulary cannot support the requested operation.
	#[error("Invalid vocabulary: {0}")]
	InvalidVocabulary(String),

	/// Generation settings are inconsistent.
	#[error("Invalid settings: {0}")]
	InvalidSettings(String),

	/// Standard I/O error.
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// A settings file could not be parsed.
	#[error(transparent)]
	Toml(#[from] toml::de::Error),
}
