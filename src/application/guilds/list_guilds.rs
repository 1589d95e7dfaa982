use std::sync::Arc;

use crate::domain::repositories::{GuildRepository, GuildWithMemberCount};

/// List guilds input
pub struct ListGuildsInput {
    pub limit: u32,
    pub offset: u32,
}

/// List guilds output
pub struct ListGuildsOutput {
    pub guilds: Vec<GuildWithMemberCount>,
}

/// List guilds use case
pub struct ListGuilds<G: GuildRepository> {
    guild_repo: Arc<G>,
}

impl<G: GuildRepository> ListGuilds<G> {
    pub fn new(guild_repo: Arc<G>) -> Self {
        Self { guild_repo }
    }

    pub async fn execute(&self, input: ListGuildsInput) -> Result<ListGuildsOutput, ListGuildsError> {
        let limit = input.limit.clamp(1, 100);
        let guilds = self.guild_repo.find_all(limit, input.offset).await?;
        Ok(ListGuildsOutput { guilds })
    }
}

/// List guilds error types
#[derive(Debug, thiserror::Error)]
pub enum ListGuildsError {
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
