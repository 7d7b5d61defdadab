use crate::config::CatalogConfig;
use crate::fetch::fetch_items;
use crate::prelude::*;
use catalog_core::view::{find_item, ItemDetail};
use colored::Colorize;

#[derive(Debug, clap::Args, Clone)]
pub struct ReadOptions {
    /// Item ID, as shown by `catalog items list`
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn render(options: ReadOptions, config: &CatalogConfig) -> Result<String> {
    let catalog = fetch_items(config).await?;

    let item = find_item(&catalog.items, &options.id)
        .ok_or_else(|| Error::NotFound(options.id.clone()))?;
    let detail = ItemDetail::from_item(item);

    if options.json {
        let json = serde_json::to_string_pretty(&detail)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        Ok(format!("{}\n", json))
    } else {
        Ok(format_item_text(&detail))
    }
}

fn push_lines(result: &mut String, lines: &[String]) {
    for line in lines {
        result.push_str(&format!("  {}\n", line));
    }
}

/// Convert an item detail to formatted text with colors
fn format_item_text(detail: &ItemDetail) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", detail.name.to_uppercase().bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    let mut table = new_table(prettytable::row!["Field", "Value"]);
    table.add_row(prettytable::row!["ID", &detail.id]);
    table.add_row(prettytable::row!["Starting tier", detail.starting_tier]);
    table.add_row(prettytable::row!["Size", &detail.size]);
    table.add_row(prettytable::row!["Tags", detail.tags.join(", ")]);
    table.add_row(prettytable::row!["Heroes", detail.heroes.join(", ")]);
    if !detail.pack_id.is_empty() {
        table.add_row(prettytable::row!["Pack", &detail.pack_id]);
    }
    result.push('\n');
    result.push_str(&table.to_string());

    if !detail.tiers.is_empty() {
        result.push_str(&format!("\n{}\n", "TIERS".bright_yellow().bold()));
        for tier in &detail.tiers {
            result.push_str(&format!("{}\n", tier.tier.to_string().green().bold()));
            push_lines(&mut result, &tier.tooltips);
        }
    }

    if !detail.unified_tooltips.is_empty() {
        result.push_str(&format!("\n{}\n", "ALL TIERS".bright_yellow().bold()));
        push_lines(&mut result, &detail.unified_tooltips);
    }

    if !detail.enchantments.is_empty() {
        result.push_str(&format!("\n{}\n", "ENCHANTMENTS".bright_yellow().bold()));
        for enchantment in &detail.enchantments {
            result.push_str(&format!("{}\n", enchantment.kind.green().bold()));
            push_lines(&mut result, &enchantment.tooltips);
        }
    }

    if !detail.remarks.is_empty() {
        result.push_str(&format!("\n{}\n", "REMARKS".bright_yellow().bold()));
        push_lines(&mut result, &detail.remarks);
    }

    if !detail.combat_encounters.is_empty() {
        result.push_str(&format!("\n{}\n", "COMBAT ENCOUNTERS".bright_yellow().bold()));
        for encounter in &detail.combat_encounters {
            result.push_str(&format!(
                "  {} ({})\n",
                encounter.card_name,
                encounter.card_id.bright_black()
            ));
        }
    }

    result.push('\n');
    result
}
