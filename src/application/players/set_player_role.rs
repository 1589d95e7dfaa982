use std::sync::Arc;

use crate::domain::entities::Player;
use crate::domain::repositories::PlayerRepository;
use crate::domain::value_objects::GameRole;

/// Set player role input. The raw string goes through the synonym
/// table, so "tank" and "Defensive Tank" land on the same variant.
pub struct SetPlayerRoleInput {
    pub player_id: String,
    pub role: String,
}

/// Set player role output
pub struct SetPlayerRoleOutput {
    pub player: Player,
    /// The normalized role that was stored
    pub role: GameRole,
}

/// Set player role use case
pub struct SetPlayerRole<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> SetPlayerRole<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }

    pub async fn execute(&self, input: SetPlayerRoleInput) -> Result<SetPlayerRoleOutput, SetPlayerRoleError> {
        let mut player = self
            .player_repo
            .find_by_id(&input.player_id)
            .await?
            .ok_or(SetPlayerRoleError::PlayerNotFound)?;

        let role = GameRole::parse(&input.role);
        player.game_role = role;
        player.updated_at = chrono::Utc::now().timestamp();
        self.player_repo.save(&player).await?;

        Ok(SetPlayerRoleOutput { player, role })
    }
}

/// Set player role error types
#[derive(Debug, thiserror::Error)]
pub enum SetPlayerRoleError {
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
