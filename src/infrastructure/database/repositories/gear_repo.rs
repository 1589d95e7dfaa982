use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{GearCategory, GearItem, PlayerGear, Rarity};
use crate::domain::repositories::{GearFilter, GearRepository, RepositoryError};

/// SQLite implementation of GearRepository
pub struct SqliteGearRepository {
    pool: SqlitePool,
}

impl SqliteGearRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_item(row: &sqlx::sqlite::SqliteRow) -> GearItem {
        use sqlx::Row;

        let category_str: String = row.get("category");
        let rarity_str: String = row.get("rarity");

        GearItem {
            id: row.get("id"),
            base_name: row.get("base_name"),
            skill_name: row.get("skill_name"),
            category: GearCategory::from_str(&category_str).unwrap_or(GearCategory::Weapon),
            tier: row.get::<i64, _>("tier") as u32,
            rarity: Rarity::from_str(&rarity_str).unwrap_or(Rarity::Common),
            item_level: row.get::<i64, _>("item_level") as u32,
            required_level: row.get::<i64, _>("required_level") as u32,
            icon_url: row.get("icon_url"),
        }
    }
}

#[async_trait]
impl GearRepository for SqliteGearRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<GearItem>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM gear_items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_item))
    }

    async fn find_all(
        &self,
        filter: &GearFilter,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<GearItem>, RepositoryError> {
        let mut sql = String::from("SELECT * FROM gear_items WHERE 1 = 1");
        if filter.category.is_some() {
            sql.push_str(" AND category = ?");
        }
        if filter.rarity.is_some() {
            sql.push_str(" AND rarity = ?");
        }
        if filter.tier.is_some() {
            sql.push_str(" AND tier = ?");
        }
        sql.push_str(" ORDER BY category, tier, rarity, base_name LIMIT ? OFFSET ?");

        let mut query = sqlx::query(&sql);
        if let Some(category) = filter.category {
            query = query.bind(category.as_str());
        }
        if let Some(rarity) = filter.rarity {
            query = query.bind(rarity.as_str());
        }
        if let Some(tier) = filter.tier {
            query = query.bind(tier as i64);
        }
        let rows = query
            .bind(limit as i32)
            .bind(offset as i32)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_item).collect())
    }

    async fn save(&self, item: &GearItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO gear_items (
                id, base_name, skill_name, category, tier, rarity,
                item_level, required_level, icon_url
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                base_name = excluded.base_name,
                skill_name = excluded.skill_name,
                category = excluded.category,
                tier = excluded.tier,
                rarity = excluded.rarity,
                item_level = excluded.item_level,
                required_level = excluded.required_level,
                icon_url = excluded.icon_url
            "#,
        )
        .bind(&item.id)
        .bind(&item.base_name)
        .bind(&item.skill_name)
        .bind(item.category.as_str())
        .bind(item.tier as i64)
        .bind(item.rarity.as_str())
        .bind(item.item_level as i64)
        .bind(item.required_level as i64)
        .bind(&item.icon_url)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_player_gear(
        &self,
        player_id: &str,
    ) -> Result<Vec<(PlayerGear, GearItem)>, RepositoryError> {
        use sqlx::Row;

        let rows = sqlx::query(
            r#"
            SELECT pg.id as pg_id, pg.player_id, pg.gear_item_id, pg.is_equipped,
                   pg.acquired_at, gi.*
            FROM player_gear pg
            JOIN gear_items gi ON gi.id = pg.gear_item_id
            WHERE pg.player_id = ?
            ORDER BY pg.is_equipped DESC, gi.base_name ASC
            "#,
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|row| {
                let owned = PlayerGear {
                    id: row.get("pg_id"),
                    player_id: row.get("player_id"),
                    gear_item_id: row.get("gear_item_id"),
                    is_equipped: row.get::<i32, _>("is_equipped") != 0,
                    acquired_at: row.get("acquired_at"),
                };
                (owned, Self::row_to_item(row))
            })
            .collect())
    }

    async fn add_player_gear(
        &self,
        player_id: &str,
        gear_item_id: &str,
        is_equipped: bool,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO player_gear (player_id, gear_item_id, is_equipped, acquired_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(player_id, gear_item_id) DO UPDATE SET
                is_equipped = excluded.is_equipped
            "#,
        )
        .bind(player_id)
        .bind(gear_item_id)
        .bind(is_equipped as i32)
        .bind(chrono::Utc::now().timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn set_equipped(
        &self,
        player_id: &str,
        gear_item_id: &str,
        is_equipped: bool,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE player_gear SET is_equipped = ? WHERE player_id = ? AND gear_item_id = ?",
        )
        .bind(is_equipped as i32)
        .bind(player_id)
        .bind(gear_item_id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "player {} does not own gear {}",
                player_id, gear_item_id
            )));
        }

        Ok(())
    }
}
