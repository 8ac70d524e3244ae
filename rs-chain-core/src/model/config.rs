use serde::{Deserialize, Serialize};

use crate::error::ChainError;

/// Construction options for a `MarkovChain`.
///
/// Serialized in camelCase so a host-side option object such as
/// `{"initialCapacity": 100}` can be parsed directly. Unknown keys are
/// ignored and missing keys take their default.
///
/// # Notes
/// - `initial_capacity` only pre-sizes the word mapping. It has no
///   observable effect on learning, generation or export.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChainConfig {
	/// Number of distinct words to reserve room for.
	pub initial_capacity: Option<usize>,
}

impl ChainConfig {
	/// Parses a configuration from its JSON form.
	///
	/// # Errors
	/// Returns `ChainError::Json` if the input is not a JSON object with the
	/// expected field types.
	pub fn from_json(input: &str) -> Result<Self, ChainError> {
		Ok(serde_json::from_str(input)?)
	}

	/// Sets the capacity hint.
	pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
		self.initial_capacity = Some(capacity);
		self
	}
}
