use std::sync::Arc;

use crate::domain::entities::Player;
use crate::domain::repositories::{GuildRepository, PlayerRepository};

/// Update player input; `None` fields are left unchanged.
/// `guild_id` uses a double Option so the guild can be cleared explicitly.
pub struct UpdatePlayerInput {
    pub player_id: String,
    pub in_game_name: Option<String>,
    pub discord_name: Option<String>,
    pub character_level: Option<u32>,
    pub guild_id: Option<Option<String>>,
    pub is_active: Option<bool>,
}

/// Update player output
pub struct UpdatePlayerOutput {
    pub player: Player,
}

/// Update player use case
pub struct UpdatePlayer<P: PlayerRepository, G: GuildRepository> {
    player_repo: Arc<P>,
    guild_repo: Arc<G>,
}

impl<P: PlayerRepository, G: GuildRepository> UpdatePlayer<P, G> {
    pub fn new(player_repo: Arc<P>, guild_repo: Arc<G>) -> Self {
        Self {
            player_repo,
            guild_repo,
        }
    }

    pub async fn execute(&self, input: UpdatePlayerInput) -> Result<UpdatePlayerOutput, UpdatePlayerError> {
        let mut player = self
            .player_repo
            .find_by_id(&input.player_id)
            .await?
            .ok_or(UpdatePlayerError::PlayerNotFound)?;

        if let Some(name) = input.in_game_name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(UpdatePlayerError::Validation("In-game name is required".into()));
            }
            if name != player.in_game_name {
                if self.player_repo.find_by_in_game_name(&name).await?.is_some() {
                    return Err(UpdatePlayerError::NameExists);
                }
                player.in_game_name = name;
            }
        }
        if let Some(discord_name) = input.discord_name {
            player.discord_name = discord_name;
        }
        if let Some(level) = input.character_level {
            player.character_level = level.max(1);
        }
        if let Some(guild_id) = input.guild_id {
            if let Some(id) = &guild_id {
                self.guild_repo
                    .find_by_id(id)
                    .await?
                    .ok_or(UpdatePlayerError::GuildNotFound)?;
            }
            player.guild_id = guild_id;
        }
        if let Some(is_active) = input.is_active {
            player.is_active = is_active;
        }

        player.updated_at = chrono::Utc::now().timestamp();
        self.player_repo.save(&player).await?;

        Ok(UpdatePlayerOutput { player })
    }
}

/// Update player error types
#[derive(Debug, thiserror::Error)]
pub enum UpdatePlayerError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Player not found")]
    PlayerNotFound,
    #[error("In-game name already exists")]
    NameExists,
    #[error("Guild not found")]
    GuildNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
