//! Word chain model.
//!
//! - The chain itself (`MarkovChain`)
//! - Its construction options (`ChainConfig`)
//! - Internal per-word state (`State`)

/// First-order word chain: learning, generation, export and import.
pub mod chain;

/// Construction options for a chain.
pub mod config;

/// Internal representation of a single word and its successors.
/// This module is not exposed publicly.
mod state;
