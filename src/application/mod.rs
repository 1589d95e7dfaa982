pub mod auth;
pub mod events;
pub mod gear;
pub mod guilds;
pub mod parties;
pub mod players;
