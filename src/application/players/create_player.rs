use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Player;
use crate::domain::repositories::{GuildRepository, PlayerRepository};
use crate::domain::value_objects::GameRole;

/// Create player input
pub struct CreatePlayerInput {
    pub in_game_name: String,
    pub discord_name: Option<String>,
    pub character_level: Option<u32>,
    pub guild_id: Option<String>,
    pub game_role: Option<String>,
}

/// Create player output
pub struct CreatePlayerOutput {
    pub player: Player,
}

/// Create player use case
pub struct CreatePlayer<P: PlayerRepository, G: GuildRepository> {
    player_repo: Arc<P>,
    guild_repo: Arc<G>,
}

impl<P: PlayerRepository, G: GuildRepository> CreatePlayer<P, G> {
    pub fn new(player_repo: Arc<P>, guild_repo: Arc<G>) -> Self {
        Self {
            player_repo,
            guild_repo,
        }
    }

    pub async fn execute(&self, input: CreatePlayerInput) -> Result<CreatePlayerOutput, CreatePlayerError> {
        let name = input.in_game_name.trim().to_string();
        if name.is_empty() {
            return Err(CreatePlayerError::Validation("In-game name is required".into()));
        }

        if self.player_repo.find_by_in_game_name(&name).await?.is_some() {
            return Err(CreatePlayerError::NameExists);
        }

        if let Some(guild_id) = &input.guild_id {
            self.guild_repo
                .find_by_id(guild_id)
                .await?
                .ok_or(CreatePlayerError::GuildNotFound)?;
        }

        let mut player = Player::new(Uuid::new_v4().to_string(), name);
        if let Some(discord_name) = input.discord_name {
            player.discord_name = discord_name;
        }
        if let Some(level) = input.character_level {
            player.character_level = level.max(1);
        }
        player.guild_id = input.guild_id;
        if let Some(role) = input.game_role.as_deref() {
            player.game_role = GameRole::parse(role);
        }

        self.player_repo.save(&player).await?;

        Ok(CreatePlayerOutput { player })
    }
}

/// Create player error types
#[derive(Debug, thiserror::Error)]
pub enum CreatePlayerError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("In-game name already exists")]
    NameExists,
    #[error("Guild not found")]
    GuildNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
