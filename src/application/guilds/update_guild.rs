use std::sync::Arc;

use crate::domain::entities::{Faction, Guild};
use crate::domain::repositories::GuildRepository;

/// Update guild input; `None` fields are left unchanged
pub struct UpdateGuildInput {
    pub guild_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub faction: Option<String>,
    pub is_active: Option<bool>,
}

/// Update guild output
pub struct UpdateGuildOutput {
    pub guild: Guild,
}

/// Update guild use case
pub struct UpdateGuild<G: GuildRepository> {
    guild_repo: Arc<G>,
}

impl<G: GuildRepository> UpdateGuild<G> {
    pub fn new(guild_repo: Arc<G>) -> Self {
        Self { guild_repo }
    }

    pub async fn execute(&self, input: UpdateGuildInput) -> Result<UpdateGuildOutput, UpdateGuildError> {
        let mut guild = self
            .guild_repo
            .find_by_id(&input.guild_id)
            .await?
            .ok_or(UpdateGuildError::GuildNotFound)?;

        if let Some(name) = input.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(UpdateGuildError::Validation("Guild name is required".into()));
            }
            if name != guild.name {
                if self.guild_repo.find_by_name(&name).await?.is_some() {
                    return Err(UpdateGuildError::NameExists);
                }
                guild.name = name;
            }
        }
        if let Some(description) = input.description {
            guild.description = Some(description);
        }
        if let Some(faction) = input.faction {
            guild.faction = Faction::from_str(&faction)
                .ok_or_else(|| UpdateGuildError::Validation(format!("Unknown faction: {}", faction)))?;
        }
        if let Some(is_active) = input.is_active {
            guild.is_active = is_active;
        }

        guild.updated_at = chrono::Utc::now().timestamp();
        self.guild_repo.save(&guild).await?;

        Ok(UpdateGuildOutput { guild })
    }
}

/// Update guild error types
#[derive(Debug, thiserror::Error)]
pub enum UpdateGuildError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Guild not found")]
    GuildNotFound,
    #[error("Guild name already exists")]
    NameExists,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
