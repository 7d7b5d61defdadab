use crate::config::CatalogConfig;
use crate::fetch::{fetch_items, Source};
use crate::prelude::*;
use catalog_core::filter::FilterCriteria;
use catalog_core::pagination::{PageConfig, DEFAULT_PAGE_SIZE};
use catalog_core::view::{derive_view, page_size_commands, CatalogView};
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Case-insensitive search over item names, tags and heroes
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Only items with this tag (repeatable, any match)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Only items of this size (repeatable, any match)
    #[arg(long = "size", value_name = "SIZE")]
    pub sizes: Vec<String>,

    /// Only items usable by this hero (repeatable, any match)
    #[arg(long = "hero", value_name = "HERO")]
    pub heroes: Vec<String>,

    /// Number of items per page (the catalog offers 12, 24, 48 or 96)
    #[arg(short, long, env = "CATALOG_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub limit: usize,

    /// Page number (1-indexed). Out of range pages are clamped.
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub page: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListOptions {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::default()
            .with_query(self.query.clone())
            .with_tags(self.tags.iter().cloned())
            .with_sizes(self.sizes.iter().cloned())
            .with_heroes(self.heroes.iter().cloned())
    }

    pub fn page_config(&self) -> PageConfig {
        PageConfig::new(usize::try_from(self.page).unwrap_or(1), self.limit)
    }
}

/// List output with the data source attached
#[derive(Debug, Serialize)]
pub struct ListOutput<'a> {
    pub source: Source,
    pub version: &'a str,
    #[serde(flatten)]
    pub view: &'a CatalogView,
}

pub async fn render(options: ListOptions, config: &CatalogConfig) -> Result<String> {
    let catalog = fetch_items(config).await?;
    let view = derive_view(&catalog.items, &options.criteria(), options.page_config());

    debug!(
        "{} of {} items match, showing page {} of {}",
        view.pagination.total_items,
        view.catalog_size,
        view.pagination.current_page,
        view.pagination.total_pages
    );

    if options.json {
        let output = ListOutput {
            source: catalog.source,
            version: &catalog.version,
            view: &view,
        };
        Ok(format!("{}\n", format_list_json(&output)?))
    } else {
        Ok(format_list_text(&view, &catalog.version))
    }
}

/// Convert list output to JSON string
fn format_list_json(output: &ListOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn describe_criteria(criteria: &FilterCriteria) -> Option<String> {
    if criteria.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    if !criteria.query.is_empty() {
        parts.push(format!("query \"{}\"", criteria.query));
    }
    let join = |set: &std::collections::BTreeSet<String>| {
        set.iter().cloned().collect::<Vec<_>>().join(", ")
    };
    if !criteria.tags.is_empty() {
        parts.push(format!("tags [{}]", join(&criteria.tags)));
    }
    if !criteria.sizes.is_empty() {
        parts.push(format!("sizes [{}]", join(&criteria.sizes)));
    }
    if !criteria.heroes.is_empty() {
        parts.push(format!("heroes [{}]", join(&criteria.heroes)));
    }

    Some(parts.join(" | "))
}

/// Render the page buttons, current page highlighted
fn format_page_window(view: &CatalogView) -> String {
    view.pagination
        .page_window
        .iter()
        .map(|page| {
            if *page == view.pagination.current_page {
                format!("[{page}]").bright_cyan().bold().to_string()
            } else {
                format!(" {page} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the offered page sizes, current size highlighted
fn format_page_sizes(view: &CatalogView) -> String {
    page_size_commands(view)
        .iter()
        .map(|(size, _)| {
            if *size == view.pagination.page_size {
                format!("[{size}]").bright_cyan().bold().to_string()
            } else {
                format!(" {size} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert list output to formatted text with colors
fn format_list_text(view: &CatalogView, version: &str) -> String {
    let mut result = String::new();
    let pagination = &view.pagination;

    // Header
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "CATALOG ITEMS (Page {} of {})",
            pagination.current_page, pagination.total_pages
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if let Some(filters) = describe_criteria(&view.criteria) {
        result.push_str(&format!("{}: {}\n", "Filters".green(), filters));
    }

    if view.items.is_empty() {
        result.push_str(&format!("\n{}\n", "No items match these filters.".yellow()));
    } else {
        let mut table = new_table(prettytable::row![
            "ID", "Name", "Tier", "Size", "Tags", "Heroes"
        ]);
        for item in &view.items {
            let tags = item.tags.join(", ");
            let heroes = item.heroes.join(", ");
            table.add_row(prettytable::row![
                &item.id,
                &item.name,
                item.starting_tier,
                &item.size,
                tags,
                heroes
            ]);
        }
        result.push('\n');
        result.push_str(&table.to_string());
    }

    // Navigation section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    match pagination.item_range {
        Some((first, last)) => result.push_str(&format!(
            "\n{} {}-{} {} {} ({} {} {})\n",
            "Showing".bright_white(),
            first.to_string().bright_cyan().bold(),
            last.to_string().bright_cyan().bold(),
            "of".bright_white(),
            pagination.total_items.to_string().bright_cyan().bold(),
            view.catalog_size.to_string().bright_cyan(),
            "items in catalog version".bright_white(),
            version.bright_cyan()
        )),
        None => result.push_str(&format!(
            "\n{} ({} {} {})\n",
            "Showing 0 items".bright_white(),
            view.catalog_size.to_string().bright_cyan(),
            "items in catalog version".bright_white(),
            version.bright_cyan()
        )),
    }
    result.push_str(&format!("{}: {}\n", "Pages".green(), format_page_window(view)));
    result.push_str(&format!(
        "{}: {}\n",
        "Per page".green(),
        format_page_sizes(view)
    ));

    result.push_str(&format!("\n{}:\n", "To navigate".bright_white().bold()));
    if let Some(next) = &pagination.next_page_command {
        result.push_str(&format!("  {}: {}\n", "Next page".green(), next.cyan()));
    }
    if let Some(prev) = &pagination.prev_page_command {
        result.push_str(&format!("  {}: {}\n", "Previous page".green(), prev.cyan()));
    }

    result.push_str(&format!(
        "\n{}:\n",
        "To change the page size".bright_white().bold()
    ));
    for (size, command) in page_size_commands(view) {
        if size != pagination.page_size {
            result.push_str(&format!("  {}: {}\n", size.to_string().green(), command.cyan()));
        }
    }

    result.push_str(&format!("\n{}:\n", "To read an item".bright_white().bold()));
    result.push_str(&format!("  {}\n", "catalog items read <id>".cyan()));
    if let Some(first) = view.items.first() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Example".green(),
            format!("catalog items read {}", first.id).cyan()
        ));
    }

    result.push_str(&format!(
        "\n{}:\n",
        "To see available filters".bright_white().bold()
    ));
    result.push_str(&format!("  {}\n", "catalog items options".cyan()));

    result.push('\n');
    result
}
