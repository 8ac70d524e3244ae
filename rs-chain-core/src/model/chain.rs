use std::collections::HashMap;

use rand::Rng;

use super::config::ChainConfig;
use super::state::State;
use crate::codec::{self, Pair, PairRef};
use crate::error::ChainError;

/// Largest number of words a capacity hint reserves up front.
const MAX_CAPACITY_HINT: usize = 1 << 20;

/// First-order Markov chain over words.
///
/// The `MarkovChain` stores one state per word that has been seen followed
/// by another word, and generates new sequences by walking those states at
/// random.
///
/// # Responsibilities
/// - Build the chain from raw text (whitespace tokenization)
/// - Generate word sequences of bounded length
/// - Export / import the chain as a JSON corpus or a binary snapshot
/// - Merge with another chain
///
/// # Invariants
/// - `index[word]` is the position of `word`'s state in `states`
/// - `states` is in first-seen order, which is also the export order
/// - Every state holds at least one successor
///
/// # Concurrency
/// Mutation goes through `&mut self`. Share one chain between threads by
/// wrapping it in a `Mutex` or `RwLock`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkovChain {
	/// Mapping from a word to the position of its state
	index: HashMap<String, usize>,

	/// States in insertion order
	states: Vec<State>,
}

impl MarkovChain {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty chain with room for `capacity` distinct words.
	///
	/// The hint is capped at `MAX_CAPACITY_HINT`; the chain still grows past it.
	pub fn with_capacity(capacity: usize) -> Self {
		let capacity = capacity.min(MAX_CAPACITY_HINT);
		Self {
			index: HashMap::with_capacity(capacity),
			states: Vec::with_capacity(capacity),
		}
	}

	/// Creates an empty chain from construction options.
	pub fn with_config(config: ChainConfig) -> Self {
		config.initial_capacity.map_or_else(Self::new, Self::with_capacity)
	}

	/// Number of distinct words having at least one successor.
	pub fn word_count(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Returns `true` if `word` has at least one recorded successor.
	pub fn contains(&self, word: &str) -> bool {
		self.index.contains_key(word)
	}

	/// Returns the successors recorded for `word`, in observation order.
	pub fn successors(&self, word: &str) -> Option<&[String]> {
		self.state(word).map(State::successors)
	}

	/// Removes every word from the chain.
	pub fn clear(&mut self) {
		self.index.clear();
		self.states.clear();
	}

	fn state(&self, word: &str) -> Option<&State> {
		self.index.get(word).map(|&position| &self.states[position])
	}

	/// Gets or creates the state for `word`.
	fn state_mut(&mut self, word: &str) -> &mut State {
		let position = match self.index.get(word) {
			Some(&position) => position,
			None => {
				let position = self.states.len();
				self.index.insert(word.to_owned(), position);
				self.states.push(State::new(word));
				position
			}
		};
		&mut self.states[position]
	}

	/// Adds a text to the chain.
	///
	/// Splits the input on runs of whitespace and records, for each pair of
	/// consecutive words, the second one as a successor of the first.
	///
	/// # Notes
	/// - Leading, trailing and repeated whitespace is ignored.
	/// - Texts with fewer than two words leave the chain unchanged.
	/// - The last word only becomes a key if it also appears earlier,
	///   followed by something.
	pub fn add_text(&mut self, text: &str) {
		let mut words = text.split_whitespace();
		let Some(mut current) = words.next() else {
			return;
		};

		for next in words {
			self.state_mut(current).add_transition(next);
			current = next;
		}
	}

	/// Returns a word chosen uniformly among all keys.
	///
	/// Useful for starting a generation sequence.
	/// Returns `None` if the chain is empty.
	pub fn random_word<R: Rng>(&self, rng: &mut R) -> Option<&str> {
		if self.states.is_empty() {
			return None;
		}
		let position = rng.random_range(0..self.states.len());
		Some(self.states[position].key())
	}

	/// Generates a sequence of at most `length` words using the thread-local
	/// random generator.
	///
	/// See `generate_with_rng`.
	pub fn generate(&self, start: Option<&str>, length: i32) -> String {
		self.generate_with_rng(start, length, &mut rand::rng())
	}

	/// Generates a sequence of at most `length` words.
	///
	/// # Parameters
	/// - `start`: First word. Used only if it is a key of the chain;
	///   otherwise (or if `None`) a random key is used.
	/// - `length`: Maximum number of words to emit.
	/// - `rng`: Source of randomness, seed it for reproducible output.
	///
	/// # Returns
	/// The emitted words joined by single spaces. Empty if `length <= 0`
	/// or the chain is empty.
	///
	/// # Notes
	/// - The walk stops early on a word without successors (dead end).
	/// - Each step draws uniformly among the stored successors.
	pub fn generate_with_rng<R: Rng>(&self, start: Option<&str>, length: i32, rng: &mut R) -> String {
		if length <= 0 {
			return String::new();
		}

		let mut current = match start {
			Some(word) if self.contains(word) => word,
			_ => match self.random_word(rng) {
				Some(word) => word,
				None => return String::new(),
			},
		};

		let length = length as usize;
		let mut words = Vec::new();
		loop {
			words.push(current);
			if words.len() == length {
				break;
			}

			// A word without a state is a dead end
			let next = match self.state(current) {
				Some(state) => state.predict(rng),
				None => None,
			};
			match next {
				Some(next) => current = next,
				None => break,
			}
		}

		words.join(" ")
	}

	/// Borrowed `[word, successors]` view, in insertion order.
	fn pairs(&self) -> Vec<PairRef<'_>> {
		self.states
			.iter()
			.map(|state| (state.key(), state.successors()))
			.collect()
	}

	/// Builds a chain from decoded pairs.
	///
	/// # Errors
	/// - `ChainError::EmptySuccessors` if a word has no successors.
	/// - `ChainError::DuplicateWord` if a word appears twice.
	fn from_pairs(pairs: Vec<Pair>) -> Result<Self, ChainError> {
		let mut chain = Self::with_capacity(pairs.len());
		for (word, successors) in pairs {
			if successors.is_empty() {
				return Err(ChainError::EmptySuccessors(word));
			}
			if chain.index.contains_key(&word) {
				return Err(ChainError::DuplicateWord(word));
			}
			chain.index.insert(word.clone(), chain.states.len());
			chain.states.push(State::from_parts(word, successors));
		}
		Ok(chain)
	}

	/// Exports the chain as a JSON array of `[word, [successors...]]` pairs.
	///
	/// Pairs follow the order in which words were first learned.
	/// An empty chain exports as `[]`.
	pub fn export_corpus(&self) -> String {
		match codec::encode_json(&self.pairs()) {
			Ok(json) => json,
			Err(err) => {
				// Unreachable for string data
				log::error!("Failed to encode corpus: {err}");
				String::from("[]")
			}
		}
	}

	/// Replaces the chain with the content of a JSON corpus.
	///
	/// Malformed input is logged and ignored: the chain keeps its previous
	/// state and nothing is reported to the caller.
	///
	/// A pair with an empty successor list (`[["a",[]]]`) or a word listed
	/// twice is rejected the same way, so every imported word keeps at least
	/// one successor.
	pub fn import_corpus(&mut self, serialized: &str) {
		if let Err(err) = self.try_import_corpus(serialized) {
			log::warn!("Ignoring malformed corpus: {err}");
		}
	}

	/// Replaces the chain with the content of a JSON corpus.
	///
	/// The input is fully decoded and validated before the current state is
	/// touched, so on error the chain is left unchanged.
	///
	/// # Errors
	/// Returns an error if the input is not an array of
	/// `[string, [string, ...]]` pairs, if a word has no successors or if a
	/// word appears twice.
	pub fn try_import_corpus(&mut self, serialized: &str) -> Result<(), ChainError> {
		let chain = Self::from_pairs(codec::decode_json(serialized)?)?;
		log::debug!("Imported corpus with {} words", chain.word_count());
		*self = chain;
		Ok(())
	}

	/// Exports the chain as a compact `postcard` snapshot.
	///
	/// Same pair layout and order as `export_corpus`.
	pub fn export_binary(&self) -> Result<Vec<u8>, ChainError> {
		codec::encode_binary(&self.pairs())
	}

	/// Replaces the chain with the content of a binary snapshot.
	///
	/// # Errors
	/// Same validation as `try_import_corpus`, plus rejection of trailing
	/// bytes. On error the chain is left unchanged.
	pub fn import_binary(&mut self, bytes: &[u8]) -> Result<(), ChainError> {
		let chain = Self::from_pairs(codec::decode_binary(bytes)?)?;
		log::debug!("Imported snapshot with {} words", chain.word_count());
		*self = chain;
		Ok(())
	}

	/// Merges another chain into this one.
	///
	/// # Notes
	/// - Successors of shared words are appended after the existing ones.
	/// - Words unknown to this chain are added in `other`'s order.
	/// - Sampling afterwards matches a chain that learned both texts.
	pub fn merge(&mut self, other: &Self) {
		for state in &other.states {
			self.state_mut(state.key()).merge(state);
		}
		log::debug!("Merged chain, now {} words", self.word_count());
	}
}
