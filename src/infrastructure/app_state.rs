use std::collections::HashMap;
use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::Mutex;

use crate::infrastructure::auth::JwtService;
use crate::infrastructure::database::repositories::{
    SqliteEventRepository, SqliteGearRepository, SqliteGuildRepository, SqlitePartyRepository,
    SqlitePlayerRepository, SqliteUserRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// JWT service for token management
    pub jwt_service: Arc<JwtService>,

    /// Repositories
    pub user_repo: Arc<SqliteUserRepository>,
    pub guild_repo: Arc<SqliteGuildRepository>,
    pub player_repo: Arc<SqlitePlayerRepository>,
    pub gear_repo: Arc<SqliteGearRepository>,
    pub event_repo: Arc<SqliteEventRepository>,
    pub party_repo: Arc<SqlitePartyRepository>,

    /// Per-event locks serializing party assignment runs. The engine itself
    /// is synchronous; this keeps two runs for the same event from
    /// interleaving their delete-and-recreate transactions.
    assignment_locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        // Get database path from environment
        let db_path = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("DB_PATH"))
            .unwrap_or_else(|_| "sqlite:./data/guildtools.db".to_string());

        // Ensure path has sqlite: prefix
        let db_url = if db_path.starts_with("sqlite:") {
            db_path
        } else {
            format!("sqlite:{}", db_path)
        };

        tracing::info!("Connecting to database: {}", db_url);

        // An in-memory database is per-connection, so the pool must not
        // open a second one.
        let db = if db_url.contains(":memory:") {
            sqlx::sqlite::SqlitePoolOptions::new()
                .max_connections(1)
                .connect(&db_url)
                .await?
        } else {
            SqlitePool::connect(&db_url).await?
        };

        sqlx::migrate!("./migrations").run(&db).await?;

        let jwt_secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "guildtools-secret-key-change-in-production".to_string());
        let jwt_service = Arc::new(JwtService::new(jwt_secret));

        Ok(Self {
            db: db.clone(),
            jwt_service,
            user_repo: Arc::new(SqliteUserRepository::new(db.clone())),
            guild_repo: Arc::new(SqliteGuildRepository::new(db.clone())),
            player_repo: Arc::new(SqlitePlayerRepository::new(db.clone())),
            gear_repo: Arc::new(SqliteGearRepository::new(db.clone())),
            event_repo: Arc::new(SqliteEventRepository::new(db.clone())),
            party_repo: Arc::new(SqlitePartyRepository::new(db)),
            assignment_locks: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Lock guarding party assignment for one event
    pub async fn assignment_lock(&self, event_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.assignment_locks.lock().await;
        locks
            .entry(event_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
