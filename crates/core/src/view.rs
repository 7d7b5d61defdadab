//! Catalog view derivation
//!
//! Combines the Filter Engine and the Pagination Deriver into the single
//! derivation a host shell runs after every input change:
//!
//! ```text
//! full items + criteria + page config -> filter::apply -> pagination::paginate -> CatalogView
//! ```
//!
//! Also builds the detail view of one item. Nothing here performs I/O.

use serde::Serialize;

use crate::filter::{self, FilterCriteria, FilterOptions};
use crate::item::{CombatEncounter, Enchantment, Item, Tier};
use crate::pagination::{self, PageConfig, MAX_PAGE_BUTTONS, PAGE_SIZE_CHOICES};

/// Name of the CLI binary used in navigation hints
pub const BIN_NAME: &str = "catalog";

/// Compact representation of an item for list output
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub id: String,
    pub name: String,
    pub starting_tier: Tier,
    pub size: String,
    pub tags: Vec<String>,
    pub heroes: Vec<String>,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            starting_tier: item.starting_tier,
            size: item.size.clone(),
            tags: item.tags.clone(),
            heroes: item.heroes.clone(),
        }
    }
}

/// Pagination metadata for list output
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ViewPagination {
    pub current_page: usize,
    pub total_pages: usize,
    /// Number of items left after filtering
    pub total_items: usize,
    pub page_size: usize,
    pub page_window: Vec<usize>,
    /// 1-based inclusive range of the items on this page
    pub item_range: Option<(usize, usize)>,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Everything a host needs to render one state of the catalog
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub items: Vec<ItemSummary>,
    pub pagination: ViewPagination,
    /// Size of the unfiltered collection
    pub catalog_size: usize,
    pub criteria: FilterCriteria,
    pub options: FilterOptions,
}

impl CatalogView {
    /// The page config the host should keep after this derivation
    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            page: self.pagination.current_page,
            page_size: self.pagination.page_size,
        }
    }
}

/// Quote a value for use as a single shell argument
pub fn quote_arg(value: &str) -> String {
    if value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '"') {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

/// Build the CLI invocation that shows `page` with the given filters
pub fn navigation_command(criteria: &FilterCriteria, page: usize, page_size: usize) -> String {
    let mut command = format!("{BIN_NAME} items list");

    if !criteria.query.is_empty() {
        command.push_str(&format!(" --query {}", quote_arg(&criteria.query)));
    }
    for tag in &criteria.tags {
        command.push_str(&format!(" --tag {}", quote_arg(tag)));
    }
    for size in &criteria.sizes {
        command.push_str(&format!(" --size {}", quote_arg(size)));
    }
    for hero in &criteria.heroes {
        command.push_str(&format!(" --hero {}", quote_arg(hero)));
    }

    command.push_str(&format!(" --page {page} --limit {page_size}"));
    command
}

/// Command switching the view to each offered page size
///
/// The current page is kept when it still exists at the new size.
pub fn page_size_commands(view: &CatalogView) -> Vec<(usize, String)> {
    PAGE_SIZE_CHOICES
        .iter()
        .map(|&size| {
            let mut config = view.page_config();
            config.set_page_size(size, view.pagination.total_items);
            (
                size,
                navigation_command(&view.criteria, config.page, config.page_size),
            )
        })
        .collect()
}

/// Derive the rendered state of the catalog
///
/// Runs the Filter Engine over the full collection, then paginates the
/// filtered result. The returned `pagination.current_page` is the clamped page
/// and should replace the host's stored page.
pub fn derive_view(items: &[Item], criteria: &FilterCriteria, config: PageConfig) -> CatalogView {
    let filtered = filter::apply(items, criteria);
    let page_size = i64::try_from(config.page_size).unwrap_or(i64::MAX);
    let requested = i64::try_from(config.page).unwrap_or(i64::MAX);
    let page = pagination::paginate(&filtered, requested, page_size);

    let next_page_command = page
        .has_next()
        .then(|| navigation_command(criteria, page.valid_page + 1, page.page_size));
    let prev_page_command = page
        .has_prev()
        .then(|| navigation_command(criteria, page.valid_page - 1, page.page_size));

    CatalogView {
        items: page.visible.iter().map(ItemSummary::from).collect(),
        pagination: ViewPagination {
            current_page: page.valid_page,
            total_pages: page.total_pages,
            total_items: filtered.len(),
            page_size: page.page_size,
            page_window: pagination::page_window(
                page.valid_page,
                page.total_pages,
                MAX_PAGE_BUTTONS,
            ),
            item_range: page.item_range(),
            next_page_command,
            prev_page_command,
        },
        catalog_size: items.len(),
        criteria: criteria.clone(),
        options: filter::filter_options(items),
    }
}

/// Look an item up by identity
pub fn find_item<'a>(items: &'a [Item], id: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.id == id)
}

/// Text lines of a single tier
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TierDetail {
    pub tier: Tier,
    pub tooltips: Vec<String>,
}

/// Full detail view of one item
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ItemDetail {
    pub id: String,
    pub name: String,
    pub starting_tier: Tier,
    pub size: String,
    pub tags: Vec<String>,
    pub heroes: Vec<String>,
    pub pack_id: String,
    pub tiers: Vec<TierDetail>,
    pub unified_tooltips: Vec<String>,
    pub enchantments: Vec<Enchantment>,
    pub remarks: Vec<String>,
    pub combat_encounters: Vec<CombatEncounter>,
}

impl ItemDetail {
    /// Build the detail view of `item`
    ///
    /// Only tiers at or above the starting tier that carry text are listed. An
    /// unknown starting tier lists every tier with text.
    pub fn from_item(item: &Item) -> Self {
        let tiers = item
            .tiers
            .iter()
            .filter(|(tier, lines)| {
                !lines.is_empty()
                    && (item.starting_tier == Tier::Unknown || *tier >= item.starting_tier)
            })
            .map(|(tier, lines)| TierDetail {
                tier,
                tooltips: lines.to_vec(),
            })
            .collect();

        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            starting_tier: item.starting_tier,
            size: item.size.clone(),
            tags: item.tags.clone(),
            heroes: item.heroes.clone(),
            pack_id: item.pack_id.clone(),
            tiers,
            unified_tooltips: item.unified_tooltips.clone().unwrap_or_default(),
            enchantments: item.enchantments.clone(),
            remarks: item.remarks.clone().unwrap_or_default(),
            combat_encounters: item.combat_encounters.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| {
                let size = if i % 2 == 0 { "Small" } else { "Large" };
                Item::new(format!("id-{i}"), format!("Item {i}"))
                    .with_tags(["Weapon"])
                    .with_heroes(["Vanessa"])
                    .with_size(size)
            })
            .collect()
    }

    #[test]
    fn test_derive_view_first_page() {
        let items = catalog(30);
        let view = derive_view(&items, &FilterCriteria::default(), PageConfig::new(1, 12));

        assert_eq!(view.items.len(), 12);
        assert_eq!(view.items[0].id, "id-0");
        assert_eq!(view.catalog_size, 30);
        assert_eq!(view.pagination.total_items, 30);
        assert_eq!(view.pagination.total_pages, 3);
        assert_eq!(view.pagination.page_window, vec![1, 2, 3]);
        assert_eq!(view.pagination.item_range, Some((1, 12)));
        assert_eq!(
            view.pagination.next_page_command.as_deref(),
            Some("catalog items list --page 2 --limit 12")
        );
        assert!(view.pagination.prev_page_command.is_none());
    }

    #[test]
    fn test_derive_view_reclamps_page_after_filtering() {
        let items = catalog(30);
        let criteria = FilterCriteria::default().with_sizes(["Small"]);
        let view = derive_view(&items, &criteria, PageConfig::new(3, 12));

        assert_eq!(view.pagination.total_items, 15);
        assert_eq!(view.pagination.total_pages, 2);
        assert_eq!(view.pagination.current_page, 2);
        assert_eq!(view.items.len(), 3);
        assert_eq!(view.page_config(), PageConfig::new(2, 12));
        assert_eq!(
            view.pagination.prev_page_command.as_deref(),
            Some("catalog items list --size Small --page 1 --limit 12")
        );
    }

    #[test]
    fn test_derive_view_options_come_from_full_collection() {
        let items = catalog(4);
        let criteria = FilterCriteria::default().with_sizes(["Small"]);
        let view = derive_view(&items, &criteria, PageConfig::default());

        assert_eq!(view.options.sizes, vec!["Large", "Small"]);
    }

    #[test]
    fn test_derive_view_no_matches() {
        let items = catalog(5);
        let criteria = FilterCriteria::default().with_query("nothing matches");
        let view = derive_view(&items, &criteria, PageConfig::new(7, 12));

        assert!(view.items.is_empty());
        assert_eq!(view.pagination.current_page, 1);
        assert_eq!(view.pagination.total_pages, 1);
        assert_eq!(view.pagination.item_range, None);
    }

    #[test]
    fn test_navigation_command_quotes_values() {
        let criteria = FilterCriteria::default()
            .with_query("big sword")
            .with_heroes(["Vanessa"]);

        assert_eq!(
            navigation_command(&criteria, 2, 24),
            "catalog items list --query \"big sword\" --hero Vanessa --page 2 --limit 24"
        );
    }

    #[test]
    fn test_page_size_commands_reclamp_current_page() {
        let items = catalog(30);
        let criteria = FilterCriteria::default().with_tags(["Weapon"]);
        let view = derive_view(&items, &criteria, PageConfig::new(3, 12));

        let commands = page_size_commands(&view);
        let sizes: Vec<usize> = commands.iter().map(|(size, _)| *size).collect();

        assert_eq!(sizes, PAGE_SIZE_CHOICES.to_vec());
        assert_eq!(
            commands[0].1,
            "catalog items list --tag Weapon --page 3 --limit 12"
        );
        assert_eq!(
            commands[1].1,
            "catalog items list --tag Weapon --page 2 --limit 24"
        );
        assert_eq!(
            commands[3].1,
            "catalog items list --tag Weapon --page 1 --limit 96"
        );
    }

    #[test]
    fn test_quote_arg() {
        assert_eq!(quote_arg("Vanessa"), "Vanessa");
        assert_eq!(quote_arg("Mak Hero"), "\"Mak Hero\"");
        assert_eq!(quote_arg(""), "\"\"");
    }

    #[test]
    fn test_find_item() {
        let items = catalog(3);
        assert_eq!(
            find_item(&items, "id-1").map(|i| i.name.as_str()),
            Some("Item 1")
        );
        assert!(find_item(&items, "missing").is_none());
    }

    #[test]
    fn test_item_detail_tiers_start_at_starting_tier() {
        let item = Item::new("1", "Katana")
            .with_starting_tier(Tier::Silver)
            .with_tier_text(Tier::Bronze, "ignored")
            .with_tier_text(Tier::Silver, "Deal 10 damage")
            .with_tier_text(Tier::Gold, "Deal 20 damage")
            .with_enchantment("Heavy", ["Slow 1 item"]);

        let detail = ItemDetail::from_item(&item);
        let tiers: Vec<Tier> = detail.tiers.iter().map(|t| t.tier).collect();

        assert_eq!(tiers, vec![Tier::Silver, Tier::Gold]);
        assert_eq!(detail.enchantments.len(), 1);
        assert!(detail.remarks.is_empty());
    }

    #[test]
    fn test_item_detail_unknown_starting_tier_lists_all() {
        let item = Item::new("1", "Odd")
            .with_starting_tier(Tier::Unknown)
            .with_tier_text(Tier::Bronze, "a")
            .with_tier_text(Tier::Legendary, "b");

        assert_eq!(ItemDetail::from_item(&item).tiers.len(), 2);
    }
}
