use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{Event, EventParticipant};
use crate::domain::repositories::{EventRepository, RepositoryError};
use crate::domain::value_objects::{GameRole, RoleComposition};

/// SQLite implementation of EventRepository
pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_event(row: &sqlx::sqlite::SqliteRow) -> Event {
        use sqlx::Row;

        Event {
            id: row.get("id"),
            name: row.get("name"),
            description: row.get("description"),
            event_time: row.get("event_time"),
            created_by: row.get("created_by"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }

    fn row_to_participant(row: &sqlx::sqlite::SqliteRow) -> EventParticipant {
        use sqlx::Row;

        let role_str: String = row.get("game_role");

        EventParticipant {
            id: row.get("id"),
            event_id: row.get("event_id"),
            display_name: row.get("display_name"),
            game_role: GameRole::parse(&role_str),
            guild_id: row.get("guild_id"),
            player_id: row.get("player_id"),
            registered_at: row.get("registered_at"),
        }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_event))
    }

    async fn find_all(&self, limit: u32, offset: u32) -> Result<Vec<Event>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM events ORDER BY event_time ASC LIMIT ? OFFSET ?")
            .bind(limit as i32)
            .bind(offset as i32)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_event).collect())
    }

    async fn save(&self, event: &Event) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO events (id, name, description, event_time, created_by, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                event_time = excluded.event_time,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&event.id)
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.event_time)
        .bind(&event.created_by)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query(
            "DELETE FROM party_memberships WHERE party_id IN (SELECT id FROM parties WHERE event_id = ?)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        for table in ["parties", "event_participants", "event_compositions"] {
            sqlx::query(&format!("DELETE FROM {} WHERE event_id = ?", table))
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;
        }

        sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn get_participants(
        &self,
        event_id: &str,
    ) -> Result<Vec<EventParticipant>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM event_participants WHERE event_id = ? ORDER BY registered_at ASC, id ASC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_participant).collect())
    }

    async fn add_participant(
        &self,
        participant: &EventParticipant,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO event_participants (
                id, event_id, display_name, game_role, guild_id, player_id, registered_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&participant.id)
        .bind(&participant.event_id)
        .bind(&participant.display_name)
        .bind(participant.game_role.as_str())
        .bind(&participant.guild_id)
        .bind(&participant.player_id)
        .bind(participant.registered_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn remove_participant(&self, participant_id: &str) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query("DELETE FROM party_memberships WHERE participant_id = ?")
            .bind(participant_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let result = sqlx::query("DELETE FROM event_participants WHERE id = ?")
            .bind(participant_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "participant {}",
                participant_id
            )));
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn get_composition(
        &self,
        event_id: &str,
    ) -> Result<Option<RoleComposition>, RepositoryError> {
        use sqlx::Row;

        let row = sqlx::query("SELECT composition_json FROM event_compositions WHERE event_id = ?")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        match row {
            Some(row) => {
                let json: String = row.get("composition_json");
                let composition = serde_json::from_str(&json)
                    .map_err(|e| RepositoryError::Database(e.to_string()))?;
                Ok(Some(composition))
            }
            None => Ok(None),
        }
    }

    async fn set_composition(
        &self,
        event_id: &str,
        composition: &RoleComposition,
    ) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(composition)
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO event_compositions (event_id, composition_json, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(event_id) DO UPDATE SET
                composition_json = excluded.composition_json,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(event_id)
        .bind(json)
        .bind(chrono::Utc::now().timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }
}
