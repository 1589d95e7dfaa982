use serde::{Deserialize, Serialize};

/// Gear category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearCategory {
    Weapon,
    Armor,
    Accessory,
    Vehicle,
    Tactical,
    Mod,
}

impl GearCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GearCategory::Weapon => "weapon",
            GearCategory::Armor => "armor",
            GearCategory::Accessory => "accessory",
            GearCategory::Vehicle => "vehicle",
            GearCategory::Tactical => "tactical",
            GearCategory::Mod => "mod",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "weapon" => Some(GearCategory::Weapon),
            "armor" => Some(GearCategory::Armor),
            "accessory" => Some(GearCategory::Accessory),
            "vehicle" => Some(GearCategory::Vehicle),
            "tactical" => Some(GearCategory::Tactical),
            "mod" => Some(GearCategory::Mod),
            _ => None,
        }
    }
}

/// Item rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "common" => Some(Rarity::Common),
            "uncommon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "epic" => Some(Rarity::Epic),
            "legendary" => Some(Rarity::Legendary),
            _ => None,
        }
    }
}

/// Gear item entity - a catalog entry, not an owned instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearItem {
    pub id: String,
    pub base_name: String,
    /// Associated skill, e.g. "Vitality" on "Energizer Boots (Vitality)"
    pub skill_name: Option<String>,
    pub category: GearCategory,
    pub tier: u32,
    pub rarity: Rarity,
    pub item_level: u32,
    pub required_level: u32,
    pub icon_url: Option<String>,
}

impl GearItem {
    /// Display name, with the skill suffix when one exists
    pub fn display_name(&self) -> String {
        match &self.skill_name {
            Some(skill) => format!("{} ({})", self.base_name, skill),
            None => self.base_name.clone(),
        }
    }
}

/// Gear owned by a player
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGear {
    pub id: i64,
    pub player_id: String,
    pub gear_item_id: String,
    pub is_equipped: bool,
    pub acquired_at: i64,
}
