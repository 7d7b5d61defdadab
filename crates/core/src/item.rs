//! Item domain model
//!
//! Types describing a single catalog entry as returned by the upstream items
//! API. Items arrive once as an immutable batch wrapped in an
//! [`ItemsEnvelope`] and are never mutated afterwards; identity is the `id`.

use serde::{Deserialize, Serialize};

/// Progression tier of an item
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Tier {
    #[default]
    Bronze,
    Silver,
    Gold,
    Diamond,
    Legendary,
    /// Any tier label the upstream API sends that we don't know about
    #[serde(other)]
    Unknown,
}

impl Tier {
    /// The five known tiers in progression order
    pub const ALL: [Tier; 5] = [
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Diamond,
        Tier::Legendary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Diamond => "Diamond",
            Tier::Legendary => "Legendary",
            Tier::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive text for a single tier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierText {
    pub tooltips: Vec<String>,
}

/// Per-tier text lines for the five fixed tiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tiers {
    pub bronze: TierText,
    pub silver: TierText,
    pub gold: TierText,
    pub diamond: TierText,
    pub legendary: TierText,
}

impl Tiers {
    /// Text lines for `tier`. `Tier::Unknown` has none.
    pub fn get(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Bronze => &self.bronze.tooltips,
            Tier::Silver => &self.silver.tooltips,
            Tier::Gold => &self.gold.tooltips,
            Tier::Diamond => &self.diamond.tooltips,
            Tier::Legendary => &self.legendary.tooltips,
            Tier::Unknown => &[],
        }
    }

    fn get_mut(&mut self, tier: Tier) -> Option<&mut Vec<String>> {
        match tier {
            Tier::Bronze => Some(&mut self.bronze.tooltips),
            Tier::Silver => Some(&mut self.silver.tooltips),
            Tier::Gold => Some(&mut self.gold.tooltips),
            Tier::Diamond => Some(&mut self.diamond.tooltips),
            Tier::Legendary => Some(&mut self.legendary.tooltips),
            Tier::Unknown => None,
        }
    }

    /// Iterate over all five tiers in progression order
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &[String])> + '_ {
        Tier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }
}

/// A named modifier applicable to an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enchantment {
    #[serde(rename = "type")]
    pub kind: String,
    pub tooltips: Vec<String>,
}

/// Reference to a combat encounter that drops or uses the item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CombatEncounter {
    pub card_id: String,
    pub card_name: String,
}

/// Catalog item from the upstream API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub starting_tier: Tier,
    #[serde(default)]
    pub tiers: Tiers,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub hidden_tags: Vec<String>,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub heroes: Vec<String>,
    #[serde(default)]
    pub enchantments: Vec<Enchantment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unified_tooltips: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<Vec<String>>,
    #[serde(default)]
    pub pack_id: String,
    #[serde(default)]
    pub combat_encounters: Vec<CombatEncounter>,
}

impl Item {
    /// Create a bare item with only an identity and a name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            starting_tier: Tier::default(),
            tiers: Tiers::default(),
            tags: Vec::new(),
            hidden_tags: Vec::new(),
            size: String::new(),
            heroes: Vec::new(),
            enchantments: Vec::new(),
            unified_tooltips: None,
            remarks: None,
            pack_id: String::new(),
            combat_encounters: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
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

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_starting_tier(mut self, tier: Tier) -> Self {
        self.starting_tier = tier;
        self
    }

    /// Append a text line to `tier`. Lines for `Tier::Unknown` are dropped.
    pub fn with_tier_text(mut self, tier: Tier, line: impl Into<String>) -> Self {
        if let Some(lines) = self.tiers.get_mut(tier) {
            lines.push(line.into());
        }
        self
    }

    pub fn with_enchantment<I, S>(mut self, kind: impl Into<String>, tooltips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enchantments.push(Enchantment {
            kind: kind.into(),
            tooltips: tooltips.into_iter().map(Into::into).collect(),
        });
        self
    }
}

/// Response envelope of the upstream items endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsEnvelope {
    pub data: Vec<Item>,
    #[serde(default)]
    pub version: String,
}
