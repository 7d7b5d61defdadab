use crate::config::{FetchPolicy, DEFAULT_API_BASE};
use crate::prelude::*;
use clap::Parser;

mod config;
mod error;
mod fetch;
mod items;
mod prelude;
mod proxy;
mod theme;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse, search and filter The Bazaar item catalog"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the items API (or of a running `catalog proxy`)
    #[clap(long, env = "CATALOG_API_BASE", global = true, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// What to do when the item data can't be loaded
    #[clap(
        long,
        value_enum,
        env = "CATALOG_FETCH_POLICY",
        global = true,
        default_value = "strict"
    )]
    policy: FetchPolicy,

    /// Extra attempts after a failed fetch
    #[clap(long, env = "CATALOG_RETRIES", global = true, default_value = "2")]
    retries: u32,

    /// Request timeout in seconds
    #[clap(long, env = "CATALOG_TIMEOUT_SECS", global = true, default_value = "15")]
    timeout_secs: u64,

    /// Whether to display additional information.
    #[clap(long, env = "CATALOG_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Search, filter and page through items
    Items(crate::items::App),

    /// Serve the items API with CORS headers for browser clients
    Proxy(crate::proxy::ProxyOptions),

    /// Light/dark theme preference
    Theme(crate::theme::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Items(sub_app) => crate::items::run(sub_app, app.global).await,
        SubCommands::Proxy(options) => crate::proxy::run(options, app.global).await,
        SubCommands::Theme(sub_app) => crate::theme::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
