mod event_repository;
mod gear_repository;
mod guild_repository;
mod party_repository;
mod player_repository;
mod user_repository;

pub use event_repository::*;
pub use gear_repository::*;
pub use guild_repository::*;
pub use party_repository::*;
pub use player_repository::*;
pub use user_repository::*;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    #[error("Database error: {0}")]
    Database(String),
}
