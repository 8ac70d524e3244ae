use rand::Rng;

/// Represents a state in the word chain.
///
/// A `State` corresponds to one word (`key`) and stores every word observed
/// right after it, in observation order.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges are
/// weighted by repetition: a successor seen twice is stored twice.
///
/// ## Responsibilities:
/// - Accumulate successors during learning
/// - Predict the next word by uniform sampling over the stored successors
/// - Merge with another state having the same key
///
/// ## Invariants
/// - All successors belong to the same `key`
/// - A state reachable from a `MarkovChain` holds at least one successor
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct State {
	/// The word this state stands for.
	key: String,
	/// Words observed after `key`, duplicates retained.
	/// Example: ["dog", "cat", "dog"]
	successors: Vec<String>,
}

impl State {
	/// Creates a new state for the given word, without successors.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			successors: Vec::new(),
		}
	}

	/// Rebuilds a state from decoded corpus data.
	pub fn from_parts(key: String, successors: Vec<String>) -> Self {
		Self { key, successors }
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn successors(&self) -> &[String] {
		&self.successors
	}

	/// Records an occurrence of `next_word` following this state.
	pub fn add_transition(&mut self, next_word: &str) {
		self.successors.push(next_word.to_owned());
	}

	/// Predicts the next word.
	///
	/// Draws an index uniformly in `[0, len)`, so each stored occurrence has
	/// the same chance and duplicated successors are proportionally likelier.
	///
	/// Returns `None` if the state has no successors.
	pub fn predict<R: Rng>(&self, rng: &mut R) -> Option<&str> {
		if self.successors.is_empty() {
			return None;
		}
		let index = rng.random_range(0..self.successors.len());
		Some(&self.successors[index])
	}

	/// Merges another state into this one.
	///
	/// Both states must represent the same word. The other state's successors
	/// are appended after the existing ones.
	pub fn merge(&mut self, other: &Self) {
		debug_assert_eq!(self.key, other.key, "merging states of different words");
		self.successors.extend(other.successors.iter().cloned());
	}
}
