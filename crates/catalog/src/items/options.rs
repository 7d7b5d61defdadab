use crate::config::CatalogConfig;
use crate::fetch::fetch_items;
use crate::prelude::*;
use catalog_core::filter::{filter_options, FilterOptions};
use catalog_core::view::quote_arg;
use colored::Colorize;

#[derive(Debug, clap::Args, Clone)]
pub struct OptionsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn render(options: OptionsArgs, config: &CatalogConfig) -> Result<String> {
    let catalog = fetch_items(config).await?;
    let filters = filter_options(&catalog.items);

    if options.json {
        let json = serde_json::to_string_pretty(&filters)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        Ok(format!("{}\n", json))
    } else {
        Ok(format_options_text(&filters))
    }
}

fn format_section(result: &mut String, title: &str, flag: &str, values: &[String]) {
    result.push_str(&format!(
        "\n{} ({})\n",
        title.bright_yellow().bold(),
        values.len()
    ));
    if values.is_empty() {
        result.push_str(&format!("  {}\n", "(none)".bright_black()));
    } else {
        result.push_str(&format!("  {}\n", values.join(", ")));
        result.push_str(&format!(
            "  {}: {}\n",
            "Filter with".green(),
            format!("catalog items list {flag} {}", quote_arg(&values[0])).cyan()
        ));
    }
}

fn format_options_text(filters: &FilterOptions) -> String {
    let mut result = String::new();

    format_section(&mut result, "TAGS", "--tag", &filters.tags);
    format_section(&mut result, "SIZES", "--size", &filters.sizes);
    format_section(&mut result, "HEROES", "--hero", &filters.heroes);

    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_options_text() {
        let filters = FilterOptions {
            tags: vec!["Aquatic".to_string(), "Weapon".to_string()],
            sizes: vec![],
            heroes: vec!["Vanessa".to_string()],
        };

        let text = format_options_text(&filters);

        assert!(text.contains("Aquatic, Weapon"));
        assert!(text.contains("catalog items list --tag Aquatic"));
        assert!(text.contains("(none)"));
        assert!(text.contains("catalog items list --hero Vanessa"));
    }

    #[test]
    fn test_format_options_text_quotes_values_with_spaces() {
        let filters = FilterOptions {
            tags: vec![],
            sizes: vec![],
            heroes: vec!["Mak Hero".to_string()],
        };

        let text = format_options_text(&filters);

        assert!(text.contains("catalog items list --hero \"Mak Hero\""));
    }
}
