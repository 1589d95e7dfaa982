use std::sync::Arc;

use crate::domain::entities::{GearItem, PlayerGear};
use crate::domain::repositories::{GearRepository, PlayerRepository};
use crate::domain::services::gear_power;

/// Get loadout input
pub struct GetLoadoutInput {
    pub player_id: String,
}

/// One owned item with its computed power
pub struct LoadoutEntry {
    pub owned: PlayerGear,
    pub item: GearItem,
    pub power: u32,
}

/// Get loadout output
pub struct GetLoadoutOutput {
    pub entries: Vec<LoadoutEntry>,
    /// Sum over equipped items only
    pub total_power: u32,
}

/// Get player loadout use case
pub struct GetLoadout<P: PlayerRepository, G: GearRepository> {
    player_repo: Arc<P>,
    gear_repo: Arc<G>,
}

impl<P: PlayerRepository, G: GearRepository> GetLoadout<P, G> {
    pub fn new(player_repo: Arc<P>, gear_repo: Arc<G>) -> Self {
        Self {
            player_repo,
            gear_repo,
        }
    }

    pub async fn execute(&self, input: GetLoadoutInput) -> Result<GetLoadoutOutput, GetLoadoutError> {
        self.player_repo
            .find_by_id(&input.player_id)
            .await?
            .ok_or(GetLoadoutError::PlayerNotFound)?;

        let owned = self.gear_repo.find_player_gear(&input.player_id).await?;

        let mut total_power = 0u32;
        let entries: Vec<LoadoutEntry> = owned
            .into_iter()
            .map(|(owned, item)| {
                let power = gear_power::gear_item_power(&item);
                if owned.is_equipped {
                    total_power += power;
                }
                LoadoutEntry { owned, item, power }
            })
            .collect();

        Ok(GetLoadoutOutput {
            entries,
            total_power,
        })
    }
}

/// Get loadout error types
#[derive(Debug, thiserror::Error)]
pub enum GetLoadoutError {
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
