use std::sync::Arc;

use crate::domain::repositories::GuildRepository;

/// Delete guild input
pub struct DeleteGuildInput {
    pub guild_id: String,
}

/// Delete guild use case. Members are detached, not removed.
pub struct DeleteGuild<G: GuildRepository> {
    guild_repo: Arc<G>,
}

impl<G: GuildRepository> DeleteGuild<G> {
    pub fn new(guild_repo: Arc<G>) -> Self {
        Self { guild_repo }
    }

    pub async fn execute(&self, input: DeleteGuildInput) -> Result<(), DeleteGuildError> {
        self.guild_repo
            .find_by_id(&input.guild_id)
            .await?
            .ok_or(DeleteGuildError::GuildNotFound)?;

        self.guild_repo.delete(&input.guild_id).await?;
        Ok(())
    }
}

/// Delete guild error types
#[derive(Debug, thiserror::Error)]
pub enum DeleteGuildError {
    #[error("Guild not found")]
    GuildNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
