use std::sync::Arc;

use crate::domain::entities::GearItem;
use crate::domain::repositories::{GearRepository, PlayerRepository};
use crate::domain::services::gear_power;

/// Grant player gear input. Granting an already-owned item only updates its
/// equipped state.
pub struct GrantPlayerGearInput {
    pub player_id: String,
    pub gear_item_id: String,
    pub equipped: bool,
}

/// Grant player gear output
pub struct GrantPlayerGearOutput {
    pub item: GearItem,
    pub power: u32,
}

/// Grant a catalog item to a player
pub struct GrantPlayerGear<P: PlayerRepository, G: GearRepository> {
    player_repo: Arc<P>,
    gear_repo: Arc<G>,
}

impl<P: PlayerRepository, G: GearRepository> GrantPlayerGear<P, G> {
    pub fn new(player_repo: Arc<P>, gear_repo: Arc<G>) -> Self {
        Self {
            player_repo,
            gear_repo,
        }
    }

    pub async fn execute(
        &self,
        input: GrantPlayerGearInput,
    ) -> Result<GrantPlayerGearOutput, GrantPlayerGearError> {
        self.player_repo
            .find_by_id(&input.player_id)
            .await?
            .ok_or(GrantPlayerGearError::PlayerNotFound)?;

        let item = self
            .gear_repo
            .find_by_id(&input.gear_item_id)
            .await?
            .ok_or(GrantPlayerGearError::ItemNotFound)?;

        self.gear_repo
            .add_player_gear(&input.player_id, &item.id, input.equipped)
            .await?;

        let power = gear_power::gear_item_power(&item);
        Ok(GrantPlayerGearOutput { item, power })
    }
}

/// Grant player gear error types
#[derive(Debug, thiserror::Error)]
pub enum GrantPlayerGearError {
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Gear item not found")]
    ItemNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
