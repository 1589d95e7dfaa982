use std::sync::Arc;

use crate::domain::repositories::{GearRepository, RepositoryError};

/// Set gear equipped input
pub struct SetGearEquippedInput {
    pub player_id: String,
    pub gear_item_id: String,
    pub is_equipped: bool,
}

/// Equip or unequip an item the player already owns
pub struct SetGearEquipped<G: GearRepository> {
    gear_repo: Arc<G>,
}

impl<G: GearRepository> SetGearEquipped<G> {
    pub fn new(gear_repo: Arc<G>) -> Self {
        Self { gear_repo }
    }

    pub async fn execute(&self, input: SetGearEquippedInput) -> Result<(), SetGearEquippedError> {
        self.gear_repo
            .set_equipped(&input.player_id, &input.gear_item_id, input.is_equipped)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => SetGearEquippedError::NotOwned,
                other => SetGearEquippedError::Repository(other),
            })
    }
}

/// Set gear equipped error types
#[derive(Debug, thiserror::Error)]
pub enum SetGearEquippedError {
    #[error("Player does not own this item")]
    NotOwned,
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}
