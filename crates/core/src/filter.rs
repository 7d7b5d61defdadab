//! Filter Engine
//!
//! Pure functions that narrow a full item collection down to the items
//! matching a [`FilterCriteria`], plus the helpers that derive the selectable
//! filter options (distinct tags, sizes and heroes) from a collection.
//!
//! Every active predicate must hold for an item to be kept. A predicate is
//! inactive when its criterion is empty:
//!
//! - **Query**: lower-cased substring of the name, any visible tag or any hero
//! - **Tags**: at least one visible tag is selected
//! - **Sizes**: the item size is selected
//! - **Heroes**: at least one hero is selected

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// User-selected constraints narrowing the visible item set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub query: String,
    pub tags: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub heroes: BTreeSet<String>,
}

impl FilterCriteria {
    /// True when no predicate is active
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.tags.is_empty()
            && self.sizes.is_empty()
            && self.heroes.is_empty()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_heroes<I, S>(mut self, heroes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.heroes = heroes.into_iter().map(Into::into).collect();
        self
    }

    /// Select `tag` if it isn't selected, deselect it otherwise
    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.tags, tag);
    }

    /// Select `size` if it isn't selected, deselect it otherwise
    pub fn toggle_size(&mut self, size: &str) {
        toggle(&mut self.sizes, size);
    }

    /// Select `hero` if it isn't selected, deselect it otherwise
    pub fn toggle_hero(&mut self, hero: &str) {
        toggle(&mut self.heroes, hero);
    }

    /// Reset every criterion
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

/// Selectable values for each filter dimension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub tags: Vec<String>,
    pub sizes: Vec<String>,
    pub heroes: Vec<String>,
}

/// Check whether a single item satisfies every active predicate
pub fn matches(item: &Item, criteria: &FilterCriteria) -> bool {
    matches_lowered(item, criteria, &criteria.query.to_lowercase())
}

fn matches_lowered(item: &Item, criteria: &FilterCriteria, query: &str) -> bool {
    matches_query(item, query)
        && intersects(&item.tags, &criteria.tags)
        && (criteria.sizes.is_empty() || criteria.sizes.contains(&item.size))
        && intersects(&item.heroes, &criteria.heroes)
}

/// `query` must already be lower-cased.
fn matches_query(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    item.name.to_lowercase().contains(query)
        || item.tags.iter().any(|t| t.to_lowercase().contains(query))
        || item.heroes.iter().any(|h| h.to_lowercase().contains(query))
}

fn intersects(values: &[String], selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || values.iter().any(|v| selected.contains(v))
}

/// Apply filter criteria to a full item collection
///
/// Returns a new collection holding the matching items in their original
/// relative order. An empty `criteria` returns the whole collection.
pub fn apply(items: &[Item], criteria: &FilterCriteria) -> Vec<Item> {
    let query = criteria.query.to_lowercase();

    items
        .iter()
        .filter(|item| matches_lowered(item, criteria, &query))
        .cloned()
        .collect()
}

fn distinct<'a, I>(values: I) -> Vec<String>
where
    I: Iterator<Item = &'a String>,
{
    values
        .filter(|v| !v.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// All distinct visible tags, sorted ascending
pub fn distinct_tags(items: &[Item]) -> Vec<String> {
    distinct(items.iter().flat_map(|item| item.tags.iter()))
}

/// All distinct sizes, sorted ascending
///
/// Items without a size contribute nothing: a missing size is not offered as an option.
pub fn distinct_sizes(items: &[Item]) -> Vec<String> {
    distinct(items.iter().map(|item| &item.size))
}

/// All distinct heroes, sorted ascending
pub fn distinct_heroes(items: &[Item]) -> Vec<String> {
    distinct(items.iter().flat_map(|item| item.heroes.iter()))
}

/// Derive the selectable options for every filter dimension
pub fn filter_options(items: &[Item]) -> FilterOptions {
    FilterOptions {
        tags: distinct_tags(items),
        sizes: distinct_sizes(items),
        heroes: distinct_heroes(items),
    }
}
