use crate::config::CatalogConfig;
use crate::prelude::{eprintln, print, *};

pub mod list;
pub mod options;
pub mod read;

#[derive(Debug, clap::Parser)]
#[command(name = "items")]
#[command(about = "Search, filter and inspect catalog items")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List items matching the given filters, one page at a time
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Show every detail of a single item
    #[clap(name = "read")]
    Read(read::ReadOptions),

    /// Show the selectable tags, sizes and heroes
    #[clap(name = "options")]
    Options(options::OptionsArgs),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = CatalogConfig::from_global(&global);

    if config.verbose {
        eprintln!("Items API: {}", config.items_url());
    }

    print!("{}", render(app.command, &config).await?);

    Ok(())
}

/// Everything a subcommand writes to stdout
pub async fn render(command: Commands, config: &CatalogConfig) -> Result<String> {
    match command {
        Commands::List(options) => list::render(options, config).await,
        Commands::Read(options) => read::render(options, config).await,
        Commands::Options(options) => options::render(options, config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchPolicy;
    use axum::{routing::get, Json, Router};
    use clap::Parser;
    use std::time::Duration;

    async fn verbose_config() -> CatalogConfig {
        let router = Router::new().route(
            "/items",
            get(|| async {
                Json(serde_json::json!({
                    "data": [
                        { "id": "1", "name": "Shovel", "tags": ["Weapon"], "heroes": ["Mak Hero"] },
                        { "id": "2", "name": "Chum", "tags": ["Aquatic"], "size": "Small" }
                    ],
                    "version": "1.0"
                }))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        CatalogConfig {
            api_base: format!("http://{addr}"),
            policy: FetchPolicy::Strict,
            retries: 0,
            timeout: Duration::from_secs(5),
            verbose: true,
        }
    }

    fn command(args: &[&str]) -> Commands {
        App::parse_from(std::iter::once("items").chain(args.iter().copied())).command
    }

    #[tokio::test]
    async fn test_verbose_json_output_is_pure_json() {
        let config = verbose_config().await;

        for args in [
            &["list", "--json"][..],
            &["read", "2", "--json"][..],
            &["options", "--json"][..],
        ] {
            let output = render(command(args), &config).await.unwrap();
            let parsed: Result<serde_json::Value, _> = serde_json::from_str(&output);
            assert!(parsed.is_ok(), "{args:?} printed non-JSON output: {output}");
        }
    }

    #[tokio::test]
    async fn test_read_missing_item_is_not_found() {
        let config = verbose_config().await;

        let err = render(command(&["read", "404"]), &config)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Item not found: 404"));
    }
}
