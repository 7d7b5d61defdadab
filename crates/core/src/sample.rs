//! Built-in sample collection
//!
//! A small, fixed set of items substituted for the upstream data when the
//! fallback fetch policy is in effect and the upstream API is unavailable.

use crate::item::{CombatEncounter, Item, Tier};

/// Version label reported for the sample collection
pub const SAMPLE_VERSION: &str = "sample";

/// The built-in sample items
pub fn sample_items() -> Vec<Item> {
    let mut items = vec![
        Item::new("sample-shovel", "Shovel")
            .with_starting_tier(Tier::Bronze)
            .with_tags(["Weapon", "Tool"])
            .with_heroes(["Common"])
            .with_size("Medium")
            .with_tier_text(Tier::Bronze, "Deal 10 damage.")
            .with_tier_text(Tier::Silver, "Deal 20 damage.")
            .with_tier_text(Tier::Gold, "Deal 40 damage.")
            .with_tier_text(Tier::Diamond, "Deal 80 damage.")
            .with_enchantment("Heavy", ["Slow an item for 1 second."]),
        Item::new("sample-chum", "Chum")
            .with_starting_tier(Tier::Bronze)
            .with_tags(["Aquatic"])
            .with_heroes(["Vanessa"])
            .with_size("Small")
            .with_tier_text(Tier::Bronze, "Your Aquatic items gain 5 Damage.")
            .with_tier_text(Tier::Silver, "Your Aquatic items gain 10 Damage."),
        Item::new("sample-anchor", "Anchor")
            .with_starting_tier(Tier::Silver)
            .with_tags(["Weapon", "Aquatic"])
            .with_heroes(["Vanessa"])
            .with_size("Medium")
            .with_tier_text(Tier::Silver, "Deal 30 damage.")
            .with_tier_text(Tier::Gold, "Deal 60 damage.")
            .with_enchantment("Golden", ["This has double value."]),
        Item::new("sample-coin", "Lucky Coin")
            .with_starting_tier(Tier::Gold)
            .with_tags(["Loot"])
            .with_heroes(["Pygmalien"])
            .with_size("Small")
            .with_tier_text(Tier::Gold, "Gain 2 Gold.")
            .with_tier_text(Tier::Diamond, "Gain 4 Gold.")
            .with_tier_text(Tier::Legendary, "Gain 8 Gold."),
        Item::new("sample-robot", "Combat Core")
            .with_starting_tier(Tier::Diamond)
            .with_tags(["Core", "Tech"])
            .with_heroes(["Dooley"])
            .with_size("Large")
            .with_tier_text(Tier::Diamond, "Your items have +20% Crit Chance.")
            .with_tier_text(Tier::Legendary, "Your items have +40% Crit Chance."),
        Item::new("sample-katana", "Katana")
            .with_starting_tier(Tier::Silver)
            .with_tags(["Weapon"])
            .with_heroes(["Vanessa", "Pygmalien"])
            .with_size("Medium")
            .with_tier_text(Tier::Silver, "Deal 25 damage.")
            .with_tier_text(Tier::Gold, "Deal 50 damage.")
            .with_enchantment("Deadly", ["+50% Crit Chance."]),
    ];

    for item in &mut items {
        item.pack_id = "Core".to_string();
    }

    if let Some(anchor) = items.iter_mut().find(|item| item.id == "sample-anchor") {
        anchor.remarks = Some(vec!["Pairs well with other Aquatic weapons.".to_string()]);
        anchor.combat_encounters = vec![CombatEncounter {
            card_id: "sample-encounter-pirate".to_string(),
            card_name: "Pirate Captain".to_string(),
        }];
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_are_unique() {
        let items = sample_items();
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_sample_items_have_text_at_starting_tier() {
        for item in sample_items() {
            assert!(
                !item.tiers.get(item.starting_tier).is_empty(),
                "{} has no text at its starting tier",
                item.name
            );
        }
    }
}
