use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::GameRole;

/// Per-party role targets for one assignment run.
///
/// A requirement of 0 means "no fixed slot; filler-eligible". Roles absent
/// from the map count as 0. The composition is passed by value into the
/// assignment engine and never re-read mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleComposition {
    /// role -> required member count per party
    pub requirements: BTreeMap<GameRole, u32>,
    /// Run phases independently per guild bucket
    #[serde(default)]
    pub guild_split: bool,
}

impl Default for RoleComposition {
    fn default() -> Self {
        let mut requirements = BTreeMap::new();
        requirements.insert(GameRole::Healer, 2);
        requirements.insert(GameRole::DefensiveTank, 2);
        requirements.insert(GameRole::OffensiveTank, 2);
        Self {
            requirements,
            guild_split: false,
        }
    }
}

impl RoleComposition {
    pub fn required(&self, role: GameRole) -> u32 {
        self.requirements.get(&role).copied().unwrap_or(0)
    }

    /// Roles with a non-zero per-party requirement.
    pub fn required_roles(&self) -> impl Iterator<Item = (GameRole, u32)> + '_ {
        self.requirements
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(&role, &count)| (role, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_composition() {
        let comp = RoleComposition::default();
        assert_eq!(comp.required(GameRole::Healer), 2);
        assert_eq!(comp.required(GameRole::DefensiveTank), 2);
        assert_eq!(comp.required(GameRole::OffensiveTank), 2);
        assert_eq!(comp.required(GameRole::MeleeDps), 0);
        assert!(!comp.guild_split);
    }

    #[test]
    fn test_absent_role_counts_as_zero() {
        let comp = RoleComposition {
            requirements: BTreeMap::new(),
            guild_split: false,
        };
        assert_eq!(comp.required(GameRole::Healer), 0);
        assert_eq!(comp.required_roles().count(), 0);
    }
}
