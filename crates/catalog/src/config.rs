use crate::prelude::*;
use std::time::Duration;

/// Upstream items API used when no override is configured
pub const DEFAULT_API_BASE: &str = "https://www.howbazaar.gg/api";

/// Path of the items endpoint, relative to the API base
pub const ITEMS_PATH: &str = "/items";

/// What the fetch layer does once the item data turns out to be unavailable
///
/// The two policies are mutually exclusive: a run either surfaces the error
/// or silently degrades to the built-in sample items, never both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FetchPolicy {
    /// Retry, then report the failure
    #[default]
    Strict,
    /// Substitute the built-in sample items
    Fallback,
}

/// Resolved runtime configuration shared by every subcommand
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub api_base: String,
    pub policy: FetchPolicy,
    pub retries: u32,
    pub timeout: Duration,
    pub verbose: bool,
}

impl CatalogConfig {
    pub fn from_global(global: &crate::Global) -> Self {
        Self {
            api_base: global.api_base.trim_end_matches('/').to_string(),
            policy: global.policy,
            retries: global.retries,
            timeout: Duration::from_secs(global.timeout_secs.max(1)),
            verbose: global.verbose,
        }
    }

    pub fn items_url(&self) -> String {
        format!("{}{ITEMS_PATH}", self.api_base)
    }

    /// HTTP client with the configured timeout
    pub fn build_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("bazaar-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
    }
}
