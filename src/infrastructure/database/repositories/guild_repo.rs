use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{Faction, Guild};
use crate::domain::repositories::{GuildRepository, GuildWithMemberCount, RepositoryError};

/// SQLite implementation of GuildRepository
pub struct SqliteGuildRepository {
    pool: SqlitePool,
}

impl SqliteGuildRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_guild(row: &sqlx::sqlite::SqliteRow) -> Guild {
        use sqlx::Row;

        let faction_str: String = row.get("faction");

        Guild {
            id: row.get("id"),
            name: row.get("name"),
            description: row.get("description"),
            faction: Faction::from_str(&faction_str).unwrap_or(Faction::None),
            is_active: row.get::<i32, _>("is_active") != 0,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

#[async_trait]
impl GuildRepository for SqliteGuildRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Guild>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM guilds WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_guild))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Guild>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM guilds WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_guild))
    }

    async fn find_all(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<GuildWithMemberCount>, RepositoryError> {
        use sqlx::Row;

        let rows = sqlx::query(
            r#"
            SELECT g.*, COUNT(p.id) as member_count
            FROM guilds g
            LEFT JOIN players p ON p.guild_id = g.id AND p.is_active = 1
            GROUP BY g.id
            ORDER BY g.is_active DESC, g.name ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit as i32)
        .bind(offset as i32)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|row| GuildWithMemberCount {
                guild: Self::row_to_guild(row),
                member_count: row.get::<i32, _>("member_count") as usize,
            })
            .collect())
    }

    async fn save(&self, guild: &Guild) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO guilds (id, name, description, faction, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                faction = excluded.faction,
                is_active = excluded.is_active,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&guild.id)
        .bind(&guild.name)
        .bind(&guild.description)
        .bind(guild.faction.as_str())
        .bind(guild.is_active as i32)
        .bind(guild.created_at)
        .bind(guild.updated_at)
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

        sqlx::query("UPDATE players SET guild_id = NULL WHERE guild_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query("DELETE FROM guilds WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }
}
