use serde::{Deserialize, Serialize};

use crate::domain::value_objects::GameRole;

/// Scheduled guild event entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Scheduled start, epoch seconds
    pub event_time: i64,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Event {
    pub fn new(id: String, name: String, description: Option<String>, event_time: i64, created_by: String) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id,
            name,
            description,
            event_time,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A person registered for a specific event.
///
/// Role and guild are resolved at registration time; the assignment engine
/// reads them but never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParticipant {
    pub id: String,
    pub event_id: String,
    pub display_name: String,
    pub game_role: GameRole,
    pub guild_id: Option<String>,
    /// Backing roster record, when the participant is a known player
    pub player_id: Option<String>,
    pub registered_at: i64,
}

impl EventParticipant {
    pub fn new(
        id: String,
        event_id: String,
        display_name: String,
        game_role: GameRole,
        guild_id: Option<String>,
        player_id: Option<String>,
    ) -> Self {
        Self {
            id,
            event_id,
            display_name,
            game_role,
            guild_id,
            player_id,
            registered_at: chrono::Utc::now().timestamp(),
        }
    }
}
