mod create_gear_item;
mod get_loadout;
mod grant_player_gear;
mod list_gear;
mod set_gear_equipped;

pub use create_gear_item::*;
pub use get_loadout::*;
pub use grant_player_gear::*;
pub use list_gear::*;
pub use set_gear_equipped::*;
