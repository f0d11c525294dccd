use std::env;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use weblogs::handlers::WeblogStore;
use weblogs::models::WeblogBatch;
use weblogs::run_server;

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let store = match env::var("WEBLOGS_FILE") {
        Ok(path) => {
            let contents = std::fs::read_to_string(&path)?;
            let batch: WeblogBatch = serde_json::from_str(&contents)?;
            tracing::info!("Loaded {} entries from {}", batch.weblogs.len(), path);
            WeblogStore::with_entries(batch.weblogs)
        }
        Err(_) => {
            tracing::info!("WEBLOGS_FILE not set, starting with an empty store");
            WeblogStore::new()
        }
    };

    let port = env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .unwrap_or(8000);

    run_server(store, port).await
}
