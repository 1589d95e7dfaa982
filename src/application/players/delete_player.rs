use std::sync::Arc;

use crate::domain::repositories::PlayerRepository;

/// Delete player input
pub struct DeletePlayerInput {
    pub player_id: String,
}

/// Delete player use case
pub struct DeletePlayer<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> DeletePlayer<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }

    pub async fn execute(&self, input: DeletePlayerInput) -> Result<(), DeletePlayerError> {
        self.player_repo
            .find_by_id(&input.player_id)
            .await?
            .ok_or(DeletePlayerError::PlayerNotFound)?;

        self.player_repo.delete(&input.player_id).await?;
        Ok(())
    }
}

/// Delete player error types
#[derive(Debug, thiserror::Error)]
pub enum DeletePlayerError {
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
