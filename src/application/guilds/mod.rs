mod create_guild;
mod delete_guild;
mod list_guilds;
mod update_guild;

pub use create_guild::*;
pub use delete_guild::*;
pub use list_guilds::*;
pub use update_guild::*;
