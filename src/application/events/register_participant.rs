use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::EventParticipant;
use crate::domain::repositories::{EventRepository, PlayerRepository};
use crate::domain::value_objects::GameRole;

/// Register participant input.
///
/// Either a `player_id` (roster member; name, role and guild are copied
/// from the roster record) or a free-form `display_name` with an
/// optional role string.
pub struct RegisterParticipantInput {
    pub event_id: String,
    pub player_id: Option<String>,
    pub display_name: Option<String>,
    pub role: Option<String>,
    pub guild_id: Option<String>,
}

/// Register participant output
pub struct RegisterParticipantOutput {
    pub participant: EventParticipant,
}

/// Register participant use case
pub struct RegisterParticipant<E: EventRepository, P: PlayerRepository> {
    event_repo: Arc<E>,
    player_repo: Arc<P>,
}

impl<E: EventRepository, P: PlayerRepository> RegisterParticipant<E, P> {
    pub fn new(event_repo: Arc<E>, player_repo: Arc<P>) -> Self {
        Self {
            event_repo,
            player_repo,
        }
    }

    pub async fn execute(
        &self,
        input: RegisterParticipantInput,
    ) -> Result<RegisterParticipantOutput, RegisterParticipantError> {
        self.event_repo
            .find_by_id(&input.event_id)
            .await?
            .ok_or(RegisterParticipantError::EventNotFound)?;

        let (display_name, role, guild_id, player_id) = match &input.player_id {
            Some(player_id) => {
                let player = self
                    .player_repo
                    .find_by_id(player_id)
                    .await?
                    .ok_or(RegisterParticipantError::PlayerNotFound)?;
                // An explicit role on the request overrides the roster role
                let role = match input.role.as_deref() {
                    Some(s) => GameRole::parse(s),
                    None => player.game_role,
                };
                (
                    player.in_game_name,
                    role,
                    player.guild_id,
                    Some(player.id),
                )
            }
            None => {
                let name = input
                    .display_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| {
                        RegisterParticipantError::Validation("Display name is required".into())
                    })?;
                let role = input
                    .role
                    .as_deref()
                    .map(GameRole::parse)
                    .unwrap_or(GameRole::Unknown);
                (name.to_string(), role, input.guild_id.clone(), None)
            }
        };

        // Reject double registration of the same roster member
        if let Some(player_id) = &player_id {
            let existing = self.event_repo.get_participants(&input.event_id).await?;
            if existing.iter().any(|p| p.player_id.as_deref() == Some(player_id)) {
                return Err(RegisterParticipantError::AlreadyRegistered);
            }
        }

        let participant = EventParticipant::new(
            Uuid::new_v4().to_string(),
            input.event_id,
            display_name,
            role,
            guild_id,
            player_id,
        );
        self.event_repo.add_participant(&participant).await?;

        Ok(RegisterParticipantOutput { participant })
    }
}

/// Register participant error types
#[derive(Debug, thiserror::Error)]
pub enum RegisterParticipantError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Event not found")]
    EventNotFound,
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Player is already registered for this event")]
    AlreadyRegistered,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
