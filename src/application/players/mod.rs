mod create_player;
mod delete_player;
mod list_players;
mod set_player_role;
mod update_player;

pub use create_player::*;
pub use delete_player::*;
pub use list_players::*;
pub use set_player_role::*;
pub use update_player::*;
