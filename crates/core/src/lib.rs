//! Core library for bazaar-catalog
//!
//! This crate implements the **Functional Core** of the catalog viewer,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`catalog_core`** (this crate): Pure transformation functions with zero I/O
//! - **`catalog`**: HTTP fetching, the CORS proxy, preference files and the CLI
//!   (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **No errors for degenerate input**: empty collections, empty criteria and
//!   out of range pages resolve to defined fallback values
//!
//! The host re-runs the derivation explicitly after every input change; there
//! is no hidden dependency tracking.
//!
//! # Module Organization
//!
//! - [`item`]: Item domain model and the upstream response envelope
//! - [`filter`]: Filter Engine and filter option derivation
//! - [`pagination`]: Pagination Deriver and page button windows
//! - [`view`]: Filter + paginate in one step, item detail views
//! - [`sample`]: Built-in sample collection for the fallback fetch policy
//! - [`preferences`]: Theme preference behind a storage capability
//!
//! ## Interactive hosts
//!
//! A one-shot host (like the `catalog` CLI) rebuilds its state from arguments
//! and calls [`view::derive_view`] once. Long-lived hosts keep a
//! [`filter::FilterCriteria`] and [`pagination::PageConfig`] around instead and
//! mutate them with `toggle_tag`, `toggle_size`, `toggle_hero`, `clear` and
//! `PageConfig::set_page_size` / `PageConfig::reclamp` before re-deriving.
//!
//! # Example Usage
//!
//! ```rust
//! use catalog_core::filter::FilterCriteria;
//! use catalog_core::item::Item;
//! use catalog_core::pagination::PageConfig;
//! use catalog_core::view::derive_view;
//!
//! let items = vec![
//!     Item::new("1", "Shovel").with_tags(["Weapon"]).with_size("Medium"),
//!     Item::new("2", "Chum").with_tags(["Aquatic"]).with_size("Small"),
//! ];
//!
//! let criteria = FilterCriteria::default().with_tags(["Aquatic"]);
//! let view = derive_view(&items, &criteria, PageConfig::default());
//!
//! assert_eq!(view.items.len(), 1);
//! assert_eq!(view.items[0].name, "Chum");
//! assert_eq!(view.pagination.current_page, 1);
//! ```

pub mod filter;
pub mod item;
pub mod pagination;
pub mod preferences;
pub mod sample;
pub mod view;
