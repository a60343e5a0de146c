//! Pronounceable gibberish generation library.
//!
//! This crate models the substring frequencies of a list of real words and
//! uses them to produce new words, sentences and paragraphs:
//! - Character-level substring frequency tries
//! - Multi-context blended word generation
//! - Length-skewed vocabularies and punctuated sentences
//! - Session state caching the vocabulary between requests

/// Error type and `Result` alias.
pub mod error;

/// Tries, generators and generation settings.
pub mod model;

/// Interactive session state.
pub mod session;

/// Corpus and settings file loading.
pub mod io;

pub use error::{GibberishError, Result};
pub use model::generator::Generator;
pub use model::language_model::LanguageModel;
pub use model::settings::GenerationSettings;
pub use model::vocabulary::Vocabulary;
pub use session::Session;
