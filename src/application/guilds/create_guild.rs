use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Faction, Guild};
use crate::domain::repositories::GuildRepository;

/// Create guild input
pub struct CreateGuildInput {
    pub name: String,
    pub description: Option<String>,
    pub faction: Option<String>,
}

/// Create guild output
pub struct CreateGuildOutput {
    pub guild: Guild,
}

/// Create guild use case
pub struct CreateGuild<G: GuildRepository> {
    guild_repo: Arc<G>,
}

impl<G: GuildRepository> CreateGuild<G> {
    pub fn new(guild_repo: Arc<G>) -> Self {
        Self { guild_repo }
    }

    pub async fn execute(&self, input: CreateGuildInput) -> Result<CreateGuildOutput, CreateGuildError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CreateGuildError::Validation("Guild name is required".into()));
        }

        if self.guild_repo.find_by_name(&name).await?.is_some() {
            return Err(CreateGuildError::NameExists);
        }

        let faction = match input.faction.as_deref() {
            Some(s) => Faction::from_str(s)
                .ok_or_else(|| CreateGuildError::Validation(format!("Unknown faction: {}", s)))?,
            None => Faction::None,
        };

        let guild = Guild::new(Uuid::new_v4().to_string(), name, input.description, faction);
        self.guild_repo.save(&guild).await?;

        Ok(CreateGuildOutput { guild })
    }
}

/// Create guild error types
#[derive(Debug, thiserror::Error)]
pub enum CreateGuildError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Guild name already exists")]
    NameExists,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
