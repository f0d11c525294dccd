use std::sync::{Arc, RwLock};

use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::errors::AppError;
use crate::models::{WeblogBatch, WeblogEntry};

/// In-memory weblog storage shared across handlers.
///
/// Entries live for the lifetime of the process; there is no persistence
/// layer behind this.
#[derive(Clone, Default)]
pub struct WeblogStore {
    entries: Arc<RwLock<Vec<WeblogEntry>>>,
}

impl WeblogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with existing entries, e.g. from a
    /// previously generated corpus file.
    pub fn with_entries(entries: Vec<WeblogEntry>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    pub fn push(&self, entry: WeblogEntry) {
        self.entries
            .write()
            .expect("weblog store lock poisoned")
            .push(entry);
    }

    /// Returns a copy of the stored entries, optionally filtered by exact
    /// country match.
    pub fn snapshot(&self, country: Option<&str>) -> Vec<WeblogEntry> {
        let entries = self.entries.read().expect("weblog store lock poisoned");
        match country {
            Some(country) => entries
                .iter()
                .filter(|e| e.country == country)
                .cloned()
                .collect(),
            None => entries.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .expect("weblog store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Deserialize)]
pub struct ListWeblogsParams {
    pub country: Option<String>,
}

/// `POST /weblogs` - stores one schema-validated entry.
pub async fn create_weblog(
    Extension(store): Extension<WeblogStore>,
    Json(entry): Json<WeblogEntry>,
) -> Result<Json<Value>, AppError> {
    entry.validate().map_err(AppError::InvalidInput)?;

    debug!(
        visitor = %entry.visitor_id,
        page = %entry.page_visited,
        "storing weblog entry"
    );
    store.push(entry.clone());

    Ok(Json(json!({
        "message": "Weblog entry received",
        "weblog": entry,
    })))
}

/// `GET /weblogs?country=X` - lists stored entries, optionally filtered.
pub async fn list_weblogs(
    Extension(store): Extension<WeblogStore>,
    Query(params): Query<ListWeblogsParams>,
) -> Json<WeblogBatch> {
    Json(WeblogBatch {
        weblogs: store.snapshot(params.country.as_deref()),
    })
}

/// `GET /health`
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
