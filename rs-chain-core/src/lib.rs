//! Word-level Markov chain text generation library.
//!
//! This crate provides a first-order Markov chain over words including:
//! - Ingestion of raw text (whitespace tokenization)
//! - Random-walk generation with injectable randomness
//! - Portable JSON corpus export / import
//! - Compact binary snapshots
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Chain model, its states and its configuration.
pub mod model;

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Corpus encoding helpers (JSON and binary).
///
/// Not exposed
pub(crate) mod codec;

pub use error::ChainError;
pub use model::chain::MarkovChain;
pub use model::config::ChainConfig;
