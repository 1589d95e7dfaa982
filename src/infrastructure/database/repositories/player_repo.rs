use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::Player;
use crate::domain::repositories::{PlayerRepository, RepositoryError};
use crate::domain::value_objects::GameRole;

/// SQLite implementation of PlayerRepository
pub struct SqlitePlayerRepository {
    pool: SqlitePool,
}

impl SqlitePlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_player(row: &sqlx::sqlite::SqliteRow) -> Player {
        use sqlx::Row;

        let role_str: String = row.get("game_role");

        Player {
            id: row.get("id"),
            in_game_name: row.get("in_game_name"),
            discord_name: row.get("discord_name"),
            character_level: row.get::<i64, _>("character_level") as u32,
            guild_id: row.get("guild_id"),
            game_role: GameRole::parse(&role_str),
            is_active: row.get::<i32, _>("is_active") != 0,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Player>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM players WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_player))
    }

    async fn find_by_in_game_name(&self, name: &str) -> Result<Option<Player>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM players WHERE in_game_name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_player))
    }

    async fn find_all(
        &self,
        guild_id: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Player>, RepositoryError> {
        let rows = match guild_id {
            Some(gid) => {
                sqlx::query(
                    "SELECT * FROM players WHERE guild_id = ? ORDER BY in_game_name ASC LIMIT ? OFFSET ?",
                )
                .bind(gid)
                .bind(limit as i32)
                .bind(offset as i32)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query("SELECT * FROM players ORDER BY in_game_name ASC LIMIT ? OFFSET ?")
                    .bind(limit as i32)
                    .bind(offset as i32)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_player).collect())
    }

    async fn save(&self, player: &Player) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO players (
                id, in_game_name, discord_name, character_level, guild_id,
                game_role, is_active, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                in_game_name = excluded.in_game_name,
                discord_name = excluded.discord_name,
                character_level = excluded.character_level,
                guild_id = excluded.guild_id,
                game_role = excluded.game_role,
                is_active = excluded.is_active,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&player.id)
        .bind(&player.in_game_name)
        .bind(&player.discord_name)
        .bind(player.character_level as i64)
        .bind(&player.guild_id)
        .bind(player.game_role.as_str())
        .bind(player.is_active as i32)
        .bind(player.created_at)
        .bind(player.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }
}
