mod event_repo;
mod gear_repo;
mod guild_repo;
mod party_repo;
mod player_repo;
mod user_repo;

pub use event_repo::SqliteEventRepository;
pub use gear_repo::SqliteGearRepository;
pub use guild_repo::SqliteGuildRepository;
pub use party_repo::SqlitePartyRepository;
pub use player_repo::SqlitePlayerRepository;
pub use user_repo::SqliteUserRepository;
