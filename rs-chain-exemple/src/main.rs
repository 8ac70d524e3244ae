use std::env;

use rs_chain_core::{ChainConfig, MarkovChain};

const SAMPLE: &str = "the quick brown fox jumps over the lazy dog \
    the lazy dog sleeps under the old tree \
    the old tree grows near the quiet river \
    the quiet river runs past the sleeping fox";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see the library diagnostics
    env_logger::init();

    // Options can be parsed from a JSON object
    let config = ChainConfig::from_json(r#"{"initialCapacity": 64}"#)?;
    let mut chain = MarkovChain::with_config(config);

    // Learn from the command line if text is given, the sample otherwise
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        chain.add_text(SAMPLE);
    } else {
        chain.add_text(&args.join(" "));
    }
    log::info!("Learned {} distinct words", chain.word_count());

    // Start from a given word
    println!("From 'the': {}", chain.generate(Some("the"), 12));

    // Unknown or absent start words fall back to a random one
    for i in 0..5 {
        println!("Generated sentence {}: {}", i + 1, chain.generate(None, 12));
    }

    // The corpus can be exported and loaded into another chain
    let corpus = chain.export_corpus();
    println!("Corpus: {}", corpus);

    let mut copy = MarkovChain::new();
    copy.import_corpus(&corpus);
    println!("Imported {} words", copy.word_count());

    // Malformed corpora are ignored, the chain keeps its content
    copy.import_corpus("invalid json");
    if let Err(err) = copy.try_import_corpus("invalid json") {
        println!("Corpus rejected ({}), still {} words", err, copy.word_count());
    }

    // Binary snapshot, smaller than the JSON corpus
    let bytes = chain.export_binary()?;
    println!("Binary snapshot: {} bytes (JSON: {} bytes)", bytes.len(), corpus.len());

    Ok(())
}
