//! HTTP upload of generated corpora to the weblogs service.
//!
//! Pushing through the API exercises the service's schema validation on the
//! same code path real entries take, instead of writing into its store
//! directly.

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};
use weblogs::models::WeblogEntry;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Upload rejected: {0}")]
    Rejected(String),
    #[error("Backend not reachable at {0}")]
    BackendNotReachable(String),
}

/// Client for the weblogs storage API.
pub struct WeblogUploader {
    client: Client,
    base_url: String,
}

impl WeblogUploader {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Checks if the backend is reachable.
    pub async fn check_health(&self) -> Result<(), ApiError> {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => Ok(()),
            Ok(resp) => Err(ApiError::BackendNotReachable(format!(
                "Health check returned status {}",
                resp.status()
            ))),
            Err(e) => Err(ApiError::BackendNotReachable(e.to_string())),
        }
    }

    /// Uploads a single entry.
    pub async fn upload_entry(&self, entry: &WeblogEntry) -> Result<(), ApiError> {
        let url = format!("{}/weblogs", self.base_url);

        let resp = self.client.post(&url).json(entry).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Rejected(format!("Status {status}: {body}")));
        }

        Ok(())
    }

    /// Uploads a batch of entries, skipping ones the service rejects.
    ///
    /// Returns the number of successfully uploaded entries.
    pub async fn upload_all(&self, entries: &[WeblogEntry]) -> Result<usize, ApiError> {
        if entries.is_empty() {
            return Ok(0);
        }

        self.check_health().await?;

        let mut uploaded = 0;
        for entry in entries {
            match self.upload_entry(entry).await {
                Ok(()) => {
                    debug!(
                        visitor = %entry.visitor_id,
                        page = %entry.page_visited,
                        "uploaded weblog entry"
                    );
                    uploaded += 1;
                }
                Err(e) => {
                    warn!(visitor = %entry.visitor_id, "failed to upload entry: {e}");
                }
            }
        }

        Ok(uploaded)
    }
}
