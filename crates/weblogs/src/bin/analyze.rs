//! Scans a weblog corpus file for suspect geolocation values.
//!
//! Run with:
//! ```
//! cargo run -p weblogs --bin analyze -- synthetic_visitor_weblogs.json
//! ```

use tracing_subscriber::EnvFilter;
use weblogs::analysis::find_problematic;
use weblogs::models::WeblogBatch;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "synthetic_visitor_weblogs.json".to_string());

    let contents = std::fs::read_to_string(&path)?;
    let batch: WeblogBatch = serde_json::from_str(&contents)?;

    tracing::info!("Scanning {} entries from {}", batch.weblogs.len(), path);

    let flagged = find_problematic(&batch.weblogs);
    if flagged.is_empty() {
        tracing::info!("No problematic weblog entries found");
        return Ok(());
    }

    for entry in &flagged {
        tracing::warn!(
            visitor = %entry.visitor_id,
            country = %entry.country,
            region = %entry.region,
            city = %entry.city,
            "suspect geolocation"
        );
    }
    tracing::warn!("Flagged {} of {} entries", flagged.len(), batch.weblogs.len());

    Ok(())
}
