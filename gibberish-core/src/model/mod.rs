//! Top-level module for the gibberish generation system.
//!
//! This module provides:
//! - Substring frequency tries (`TrieNode`)
//! - The corpus model built on them (`LanguageModel`)
//! - Weighted random choice (`choose`)
//! - Word generation (`Generator`)
//! - Weighted word pools (`Vocabulary`) and sentences built from them
//! - Generation parameters (`GenerationSettings`)

/// Word generation by blending several trailing contexts.
pub mod generator;

/// The general and beginnings tries plus the set of real words.
pub mod language_model;

/// Sentence and paragraph assembly from a vocabulary.
pub mod sentence;

/// Generation parameters, loadable from TOML.
pub mod settings;

/// Substring frequency trie.
pub mod trie;

/// Weighted pool of generated words.
pub mod vocabulary;

/// Weighted random choice over parallel item and weight slices.
pub mod weighted;
