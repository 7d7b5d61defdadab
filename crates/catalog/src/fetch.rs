//! Item data fetch layer
//!
//! One GET against the configured items endpoint. Failures are retried with a
//! short linear backoff; what happens after the last attempt depends on the
//! configured [`FetchPolicy`].

use crate::config::{CatalogConfig, FetchPolicy};
use crate::prelude::*;
use catalog_core::item::{Item, ItemsEnvelope};
use catalog_core::sample::{sample_items, SAMPLE_VERSION};
use std::time::Duration;

/// Delay added per failed attempt before retrying
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Longest upstream error body echoed back in error messages
const MAX_ERROR_BODY: usize = 200;

/// Where a loaded catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Upstream,
    Sample,
}

/// A fully loaded item collection
#[derive(Debug, Clone)]
pub struct Catalog {
    pub items: Vec<Item>,
    pub version: String,
    pub source: Source,
}

fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Fetch the items envelope once
pub async fn fetch_envelope(client: &reqwest::Client, url: &str) -> Result<ItemsEnvelope, Error> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Network(format!("Failed to fetch {}: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = match body.trim() {
            "" => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            text => truncate_text(text, MAX_ERROR_BODY),
        };

        return Err(Error::DataUnavailable {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<ItemsEnvelope>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}

/// Fetch the envelope, retrying transient failures up to `retries` additional times
async fn fetch_with_retries(
    client: &reqwest::Client,
    url: &str,
    retries: u32,
) -> Result<ItemsEnvelope, Error> {
    let mut attempt = 0;

    loop {
        attempt += 1;
        debug!("Fetching items from {} (attempt {})", url, attempt);

        match fetch_envelope(client, url).await {
            Ok(envelope) => return Ok(envelope),
            Err(err) if err.is_transient() && attempt <= retries => {
                warn!("Attempt {} to fetch items failed: {}", attempt, err);
                tokio::time::sleep(RETRY_BACKOFF * attempt).await;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Load the full item collection according to the configured policy
pub async fn fetch_items(config: &CatalogConfig) -> Result<Catalog> {
    let client = config.build_client()?;
    let url = config.items_url();

    match fetch_with_retries(&client, &url, config.retries).await {
        Ok(envelope) => {
            info!(
                "Loaded {} items (version {})",
                envelope.data.len(),
                envelope.version
            );
            Ok(Catalog {
                items: envelope.data,
                version: envelope.version,
                source: Source::Upstream,
            })
        }
        Err(err) => match config.policy {
            FetchPolicy::Strict => Err(eyre!(err).wrap_err(format!(
                "Could not load items from {}. Retry the command, raise --retries, or point --api-base at a running `catalog proxy`",
                url
            ))),
            FetchPolicy::Fallback => {
                warn!("Using built-in sample items: {}", err);
                Ok(Catalog {
                    items: sample_items(),
                    version: SAMPLE_VERSION.to_string(),
                    source: Source::Sample,
                })
            }
        },
    }
}
