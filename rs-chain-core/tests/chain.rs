use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_chain_core::{ChainConfig, MarkovChain};

fn branching_chain() -> MarkovChain {
	let mut chain = MarkovChain::new();
	chain.add_text("the dog runs");
	chain.add_text("the cat sleeps");
	chain.add_text("the bird flies");
	chain
}

#[test]
fn new_chain_is_empty() {
	let chain = MarkovChain::new();
	assert_eq!(chain.generate(None, 10), "");
	assert_eq!(chain.generate(Some("anything"), 3), "");
	assert_eq!(chain.export_corpus(), "[]");
	assert_eq!(chain.word_count(), 0);
}

#[test]
fn single_word_creates_no_transition() {
	let mut chain = MarkovChain::new();
	chain.add_text("hello");
	assert_eq!(chain.generate(None, 1), "");
}

#[test]
fn two_words_are_deterministic() {
	let mut chain = MarkovChain::new();
	chain.add_text("hello world");
	assert_eq!(chain.generate(Some("hello"), 2), "hello world");
}

#[test]
fn repeated_whitespace_is_collapsed() {
	let mut spaced = MarkovChain::new();
	spaced.add_text("  hello    world \n");
	let mut plain = MarkovChain::new();
	plain.add_text("hello world");

	assert_eq!(spaced, plain);
	assert_eq!(spaced.generate(Some("hello"), 2), "hello world");
}

#[test]
fn non_positive_length_yields_nothing() {
	let chain = branching_chain();
	assert_eq!(chain.generate(Some("the"), 0), "");
	assert_eq!(chain.generate(Some("the"), -5), "");
	assert_eq!(chain.generate(None, i32::MIN), "");
}

#[test]
fn length_is_respected() {
	let mut chain = MarkovChain::new();
	chain.add_text("the quick brown fox jumps over the lazy dog");

	for _ in 0..50 {
		let result = chain.generate(None, 3);
		assert!(result.split(' ').count() <= 3, "too long: {result}");
		assert_eq!(chain.generate(Some("the"), 3).split(' ').count(), 3);
	}
}

#[test]
fn branching_only_follows_observed_successors() {
	let chain = branching_chain();
	let mut rng = StdRng::seed_from_u64(3);
	let mut seen = Vec::new();

	for _ in 0..100 {
		let result = chain.generate_with_rng(Some("the"), 2, &mut rng);
		assert!(["the dog", "the cat", "the bird"].contains(&result.as_str()), "unexpected: {result}");
		if !seen.contains(&result) {
			seen.push(result);
		}
	}
	assert_eq!(seen.len(), 3);
}

#[test]
fn unknown_start_falls_back_to_a_known_word() {
	let mut chain = MarkovChain::new();
	chain.add_text("hello world");

	let result = chain.generate(Some("invalid"), 2);
	assert!(!result.is_empty());
	assert!(result.starts_with("hello"));
}

#[test]
fn round_trip_preserves_the_chain() {
	let chain = branching_chain();

	let mut restored = MarkovChain::new();
	restored.import_corpus(&chain.export_corpus());

	assert_eq!(restored.word_count(), chain.word_count());
	assert_eq!(restored.export_corpus(), chain.export_corpus());
	for word in ["the", "dog", "cat", "bird"] {
		assert_eq!(restored.successors(word), chain.successors(word));
	}
	assert_eq!(restored.generate(Some("dog"), 5), "dog runs");
}

#[test]
fn invalid_import_keeps_previous_state() {
	let mut chain = MarkovChain::new();
	chain.add_text("hello world");
	let before = chain.clone();

	for input in ["invalid json", "", "{}", "null", r#"[["a"]]"#, r#"[["a",["b"]],"oops"]"#] {
		chain.import_corpus(input);
		assert_eq!(chain, before, "state changed after importing {input:?}");
	}
	assert_eq!(chain.word_count(), 1);
	assert_eq!(chain.generate(Some("hello"), 2), "hello world");
}

#[test]
fn try_import_reports_the_failure() {
	let mut chain = MarkovChain::new();
	assert!(chain.try_import_corpus("invalid json").is_err());
	assert!(chain.try_import_corpus(r#"[["a",["b"]]]"#).is_ok());
	assert_eq!(chain.word_count(), 1);
}

#[test]
fn empty_import_resets_the_chain() {
	let mut chain = branching_chain();
	chain.import_corpus("[]");

	assert_eq!(chain.word_count(), 0);
	assert_eq!(chain.generate(None, 10), "");
	assert_eq!(chain.generate(Some("the"), 10), "");
}

#[test]
fn imported_words_keep_their_weights() {
	let mut chain = MarkovChain::new();
	chain.import_corpus(r#"[["a",["b","b","b","c"]]]"#);

	let mut rng = StdRng::seed_from_u64(11);
	let draws = 4000;
	let hits = (0..draws)
		.filter(|_| chain.generate_with_rng(Some("a"), 2, &mut rng) == "a b")
		.count();
	let ratio = hits as f64 / draws as f64;
	assert!((ratio - 0.75).abs() < 0.05, "ratio was {ratio}");
}

#[test]
fn config_json_builds_an_equivalent_chain() {
	let config = ChainConfig::from_json(r#"{"initialCapacity": 1000}"#).unwrap();
	let mut chain = MarkovChain::with_config(config);
	chain.add_text("hello world");

	assert_eq!(chain.generate(Some("hello"), 2), "hello world");
	assert_eq!(chain.word_count(), 1);
}

#[test]
fn merged_chain_equals_sequential_learning() {
	let mut merged = MarkovChain::new();
	merged.add_text("the dog runs");
	let mut other = MarkovChain::new();
	other.add_text("the cat sleeps");
	merged.merge(&other);

	let mut sequential = MarkovChain::new();
	sequential.add_text("the dog runs");
	sequential.add_text("the cat sleeps");

	assert_eq!(merged.export_corpus(), sequential.export_corpus());
}
