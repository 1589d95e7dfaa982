use serde::{Deserialize, Serialize};

use crate::domain::value_objects::GameRole;

/// Player entity - a guild roster member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub in_game_name: String,
    pub discord_name: String,
    pub character_level: u32,
    pub guild_id: Option<String>,
    pub game_role: GameRole,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Player {
    pub fn new(id: String, in_game_name: String) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id,
            in_game_name,
            discord_name: String::new(),
            character_level: 1,
            guild_id: None,
            game_role: GameRole::Unknown,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
