use async_trait::async_trait;

use crate::domain::entities::Guild;
use crate::domain::repositories::RepositoryError;

/// Guild with its active member count (optimized for listing)
#[derive(Debug, Clone)]
pub struct GuildWithMemberCount {
    pub guild: Guild,
    pub member_count: usize,
}

/// Guild repository trait
#[async_trait]
pub trait GuildRepository: Send + Sync {
    /// Find guild by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Guild>, RepositoryError>;

    /// Find guild by name
    async fn find_by_name(&self, name: &str) -> Result<Option<Guild>, RepositoryError>;

    /// List guilds with member counts, active first, ordered by name
    async fn find_all(&self, limit: u32, offset: u32) -> Result<Vec<GuildWithMemberCount>, RepositoryError>;

    /// Save guild (create or update)
    async fn save(&self, guild: &Guild) -> Result<(), RepositoryError>;

    /// Delete guild; member players keep existing but lose the affiliation
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
