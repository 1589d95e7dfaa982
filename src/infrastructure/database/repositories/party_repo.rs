use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::entities::{Party, PartyMembership};
use crate::domain::repositories::{PartyRepository, PartyWithMembers, RepositoryError};
use crate::domain::services::party_assignment::PlannedParty;
use crate::domain::value_objects::GameRole;

/// SQLite implementation of PartyRepository
pub struct SqlitePartyRepository {
    pool: SqlitePool,
}

impl SqlitePartyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_party(row: &sqlx::sqlite::SqliteRow) -> Party {
        use sqlx::Row;

        Party {
            id: row.get("id"),
            event_id: row.get("event_id"),
            sequence: row.get::<i64, _>("sequence") as u32,
            custom_name: row.get("custom_name"),
            capacity: row.get::<i64, _>("capacity") as u32,
            created_at: row.get("created_at"),
        }
    }

    fn row_to_membership(row: &sqlx::sqlite::SqliteRow) -> PartyMembership {
        use sqlx::Row;

        let role_str: String = row.get("assigned_role");

        PartyMembership {
            id: row.get("id"),
            party_id: row.get("party_id"),
            participant_id: row.get("participant_id"),
            assigned_role: GameRole::parse(&role_str),
            is_leader: row.get::<i32, _>("is_leader") != 0,
        }
    }
}

#[async_trait]
impl PartyRepository for SqlitePartyRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Party>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM parties WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_party))
    }

    async fn find_by_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<PartyWithMembers>, RepositoryError> {
        let party_rows =
            sqlx::query("SELECT * FROM parties WHERE event_id = ? ORDER BY sequence ASC")
                .bind(event_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let mut result = Vec::with_capacity(party_rows.len());
        for row in &party_rows {
            let party = Self::row_to_party(row);
            let members = self.get_members(&party.id).await?;
            result.push(PartyWithMembers { party, members });
        }

        Ok(result)
    }

    async fn get_members(&self, party_id: &str) -> Result<Vec<PartyMembership>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM party_memberships WHERE party_id = ? ORDER BY is_leader DESC, id ASC",
        )
        .bind(party_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_membership).collect())
    }

    async fn find_membership(&self, id: i64) -> Result<Option<PartyMembership>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM party_memberships WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_membership))
    }

    async fn replace_event_parties(
        &self,
        event_id: &str,
        parties: &[PlannedParty],
    ) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        // Full reset: every run discards previous parties for the event.
        sqlx::query(
            "DELETE FROM party_memberships WHERE party_id IN (SELECT id FROM parties WHERE event_id = ?)",
        )
        .bind(event_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query("DELETE FROM parties WHERE event_id = ?")
            .bind(event_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let now = chrono::Utc::now().timestamp();
        for planned in parties {
            let party_id = Uuid::new_v4().to_string();
            sqlx::query(
                "INSERT INTO parties (id, event_id, sequence, custom_name, capacity, created_at) VALUES (?, ?, ?, NULL, ?, ?)",
            )
            .bind(&party_id)
            .bind(event_id)
            .bind(planned.sequence as i64)
            .bind(planned.capacity as i64)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

            for member in &planned.members {
                sqlx::query(
                    "INSERT INTO party_memberships (party_id, participant_id, assigned_role, is_leader) VALUES (?, ?, ?, ?)",
                )
                .bind(&party_id)
                .bind(&member.participant_id)
                .bind(member.assigned_role.as_str())
                .bind(member.is_leader as i32)
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;
            }
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn set_leader(
        &self,
        party_id: &str,
        participant_id: &str,
    ) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let result = sqlx::query(
            "UPDATE party_memberships SET is_leader = 1 WHERE party_id = ? AND participant_id = ?",
        )
        .bind(party_id)
        .bind(participant_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "participant {} in party {}",
                participant_id, party_id
            )));
        }

        sqlx::query(
            "UPDATE party_memberships SET is_leader = 0 WHERE party_id = ? AND participant_id != ?",
        )
        .bind(party_id)
        .bind(participant_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn move_member(
        &self,
        membership_id: i64,
        target_party_id: &str,
        assigned_role: Option<GameRole>,
    ) -> Result<(), RepositoryError> {
        let result = match assigned_role {
            Some(role) => {
                sqlx::query(
                    "UPDATE party_memberships SET party_id = ?, assigned_role = ?, is_leader = 0 WHERE id = ?",
                )
                .bind(target_party_id)
                .bind(role.as_str())
                .bind(membership_id)
                .execute(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    "UPDATE party_memberships SET party_id = ?, is_leader = 0 WHERE id = ?",
                )
                .bind(target_party_id)
                .bind(membership_id)
                .execute(&self.pool)
                .await
            }
        }
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "membership {}",
                membership_id
            )));
        }

        Ok(())
    }

    async fn member_count(&self, party_id: &str) -> Result<usize, RepositoryError> {
        use sqlx::Row;

        let row = sqlx::query("SELECT COUNT(*) as count FROM party_memberships WHERE party_id = ?")
            .bind(party_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(row.get::<i64, _>("count") as usize)
    }
}
