use async_trait::async_trait;

use crate::domain::entities::{GearCategory, GearItem, PlayerGear, Rarity};
use crate::domain::repositories::RepositoryError;

/// Catalog filters for gear listing
#[derive(Debug, Clone, Default)]
pub struct GearFilter {
    pub category: Option<GearCategory>,
    pub rarity: Option<Rarity>,
    pub tier: Option<u32>,
}

/// Gear repository trait
#[async_trait]
pub trait GearRepository: Send + Sync {
    /// Find catalog item by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<GearItem>, RepositoryError>;

    /// List catalog items matching the filter
    async fn find_all(
        &self,
        filter: &GearFilter,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<GearItem>, RepositoryError>;

    /// Save catalog item (create or update)
    async fn save(&self, item: &GearItem) -> Result<(), RepositoryError>;

    /// Gear owned by a player, with the catalog item resolved
    async fn find_player_gear(
        &self,
        player_id: &str,
    ) -> Result<Vec<(PlayerGear, GearItem)>, RepositoryError>;

    /// Grant an item to a player
    async fn add_player_gear(
        &self,
        player_id: &str,
        gear_item_id: &str,
        is_equipped: bool,
    ) -> Result<(), RepositoryError>;

    /// Equip or unequip an owned item
    async fn set_equipped(
        &self,
        player_id: &str,
        gear_item_id: &str,
        is_equipped: bool,
    ) -> Result<(), RepositoryError>;
}
