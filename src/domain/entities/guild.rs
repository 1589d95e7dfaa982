use serde::{Deserialize, Serialize};

/// Game faction a guild (or player) is aligned with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    None,
    Emberwild,
    Magnates,
    Ashen,
    Ironcreed,
    Sirius,
    Shroud,
}

impl Faction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Faction::None => "none",
            Faction::Emberwild => "emberwild",
            Faction::Magnates => "magnates",
            Faction::Ashen => "ashen",
            Faction::Ironcreed => "ironcreed",
            Faction::Sirius => "sirius",
            Faction::Shroud => "shroud",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Faction::None),
            "emberwild" => Some(Faction::Emberwild),
            "magnates" => Some(Faction::Magnates),
            "ashen" => Some(Faction::Ashen),
            "ironcreed" => Some(Faction::Ironcreed),
            "sirius" => Some(Faction::Sirius),
            "shroud" => Some(Faction::Shroud),
            _ => None,
        }
    }
}

/// Guild entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub faction: Faction,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Guild {
    pub fn new(id: String, name: String, description: Option<String>, faction: Faction) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id,
            name,
            description,
            faction,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
