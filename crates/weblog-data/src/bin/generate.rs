//! Generates a synthetic weblog corpus and writes it to a JSON file.
//!
//! Run with:
//! ```
//! NUM_USERS=50 SEED=12345 cargo run -p weblog-data --bin generate
//! ```
//!
//! Set `WEBLOGS_URL` to also push the corpus to a running weblogs service.

use std::env;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing_subscriber::EnvFilter;
use weblog_data::prelude::*;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

fn config_from_env() -> anyhow::Result<GenConfig> {
    let mut config = GenConfig {
        num_users: 50,
        ..GenConfig::default()
    };

    if let Ok(num_users) = env::var("NUM_USERS") {
        config.num_users = num_users.parse()?;
    }
    if let Ok(start_date) = env::var("START_DATE") {
        config.start_date = Date::parse(&start_date, &DATE_FORMAT)?;
    }
    if let Ok(seed) = env::var("SEED") {
        config.seed = Some(seed.parse()?);
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config_from_env()?;
    let output = env::var("OUTPUT").unwrap_or_else(|_| "synthetic_visitor_weblogs.json".to_string());

    tracing::info!(
        "Generating corpus for {} visitors starting {}",
        config.num_users,
        config.start_date
    );

    let mut rng = config.rng();
    let corpus = CorpusBuilder::new(config).build(&mut rng)?;
    let summary = &corpus.summary;

    tracing::info!(
        "Generated {} records across {} sessions ({:.1} page views per visitor)",
        summary.total_records,
        summary.total_sessions,
        summary.total_records as f64 / summary.total_users as f64
    );
    for (country, count) in &summary.records_by_country {
        tracing::info!(
            "  {country}: {count} ({:.1}%)",
            *count as f64 / summary.total_records as f64 * 100.0
        );
    }
    for (device, count) in &summary.records_by_device {
        tracing::info!(
            "  {device}: {count} ({:.1}%)",
            *count as f64 / summary.total_records as f64 * 100.0
        );
    }
    tracing::info!(
        "  conversions: {} ({:.1}%)",
        summary.conversions,
        summary.conversion_rate() * 100.0
    );
    for (page, count) in &summary.top_pages {
        tracing::info!("  {page}: {count} views");
    }

    let batch = WeblogBatch {
        weblogs: corpus.records,
    };
    std::fs::write(&output, serde_json::to_string_pretty(&batch)?)?;
    tracing::info!("Corpus written to {output}");

    if let Ok(base_url) = env::var("WEBLOGS_URL") {
        let uploader = WeblogUploader::new(base_url);
        let uploaded = uploader.upload_all(&batch.weblogs).await?;
        tracing::info!("Uploaded {uploaded} of {} entries", batch.weblogs.len());
    }

    Ok(())
}
