use serde::{Deserialize, Serialize};

/// In-game combat role of a participant.
///
/// Closed enumeration: anything that does not parse (after applying the
/// legacy synonym table) lands on `Unknown` instead of being carried around
/// as a raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameRole {
    Healer,
    RangedDps,
    MeleeDps,
    DefensiveTank,
    OffensiveTank,
    OffensiveSupport,
    DefensiveSupport,
    Unknown,
}

impl GameRole {
    pub const ALL: [GameRole; 8] = [
        GameRole::Healer,
        GameRole::RangedDps,
        GameRole::MeleeDps,
        GameRole::DefensiveTank,
        GameRole::OffensiveTank,
        GameRole::OffensiveSupport,
        GameRole::DefensiveSupport,
        GameRole::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameRole::Healer => "healer",
            GameRole::RangedDps => "ranged_dps",
            GameRole::MeleeDps => "melee_dps",
            GameRole::DefensiveTank => "defensive_tank",
            GameRole::OffensiveTank => "offensive_tank",
            GameRole::OffensiveSupport => "offensive_support",
            GameRole::DefensiveSupport => "defensive_support",
            GameRole::Unknown => "unknown",
        }
    }

    /// Parse a role label, folding legacy synonyms onto the closed set.
    ///
    /// Older rosters tagged people with bare "tank"/"dps"/"support" labels;
    /// those fold onto the defensive/ranged/offensive variants.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "healer" => GameRole::Healer,
            "ranged_dps" | "ranged" | "dps" => GameRole::RangedDps,
            "melee_dps" | "melee" => GameRole::MeleeDps,
            "defensive_tank" | "tank" => GameRole::DefensiveTank,
            "offensive_tank" => GameRole::OffensiveTank,
            "offensive_support" | "support" => GameRole::OffensiveSupport,
            "defensive_support" => GameRole::DefensiveSupport,
            _ => GameRole::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_labels() {
        for role in GameRole::ALL {
            assert_eq!(GameRole::parse(role.as_str()), role);
        }
    }

    #[test]
    fn test_parse_legacy_synonyms() {
        assert_eq!(GameRole::parse("tank"), GameRole::DefensiveTank);
        assert_eq!(GameRole::parse("dps"), GameRole::RangedDps);
        assert_eq!(GameRole::parse("support"), GameRole::OffensiveSupport);
    }

    #[test]
    fn test_parse_unrecognized_is_unknown() {
        assert_eq!(GameRole::parse("bard"), GameRole::Unknown);
        assert_eq!(GameRole::parse(""), GameRole::Unknown);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(GameRole::parse("Healer"), GameRole::Healer);
        assert_eq!(GameRole::parse(" TANK "), GameRole::DefensiveTank);
    }
}
