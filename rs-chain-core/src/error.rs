use thiserror::Error;

/// Errors reported by corpus decoding and configuration parsing.
///
/// `MarkovChain::import_corpus` never surfaces these: it logs them and keeps
/// the previous state. Use `MarkovChain::try_import_corpus` to observe them.
#[derive(Error, Debug)]
pub enum ChainError {
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Binary error: {0}")]
	Binary(#[from] postcard::Error),

	#[error("Trailing bytes after corpus: {0}")]
	TrailingBytes(usize),

	#[error("Duplicate word in corpus: {0}")]
	DuplicateWord(String),

	#[error("Word has no successors: {0}")]
	EmptySuccessors(String),
}
