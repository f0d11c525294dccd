//! Minimal library usage: build a small reproducible corpus and print its
//! summary.
//!
//! Run with:
//! ```
//! cargo run -p weblog-data --example generate_corpus
//! ```

use weblog_data::prelude::*;

fn main() -> anyhow::Result<()> {
    let config = GenConfig {
        num_users: 5,
        seed: Some(12345),
        ..GenConfig::default()
    };

    let mut rng = config.rng();
    let corpus = CorpusBuilder::new(config).build(&mut rng)?;

    println!(
        "{} records across {} sessions from {} visitors",
        corpus.summary.total_records, corpus.summary.total_sessions, corpus.summary.total_users
    );
    for (country, count) in &corpus.summary.records_by_country {
        println!("  {country}: {count}");
    }

    if let Some(first) = corpus.records.first() {
        println!("first record: {}", serde_json::to_string_pretty(first)?);
    }

    Ok(())
}
