use async_trait::async_trait;

use crate::domain::entities::Player;
use crate::domain::repositories::RepositoryError;

/// Player repository trait
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find player by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Player>, RepositoryError>;

    /// Find player by in-game name
    async fn find_by_in_game_name(&self, name: &str) -> Result<Option<Player>, RepositoryError>;

    /// List players, optionally restricted to one guild
    async fn find_all(
        &self,
        guild_id: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Player>, RepositoryError>;

    /// Save player (create or update)
    async fn save(&self, player: &Player) -> Result<(), RepositoryError>;

    /// Delete player
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
