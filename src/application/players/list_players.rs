use std::sync::Arc;

use crate::domain::entities::Player;
use crate::domain::repositories::PlayerRepository;

/// List players input
pub struct ListPlayersInput {
    pub guild_id: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

/// List players output
pub struct ListPlayersOutput {
    pub players: Vec<Player>,
}

/// List players use case
pub struct ListPlayers<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> ListPlayers<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }

    pub async fn execute(&self, input: ListPlayersInput) -> Result<ListPlayersOutput, ListPlayersError> {
        let limit = input.limit.clamp(1, 200);
        let players = self
            .player_repo
            .find_all(input.guild_id.as_deref(), limit, input.offset)
            .await?;
        Ok(ListPlayersOutput { players })
    }
}

/// List players error types
#[derive(Debug, thiserror::Error)]
pub enum ListPlayersError {
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
