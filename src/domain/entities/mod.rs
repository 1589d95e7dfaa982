mod event;
mod gear;
mod guild;
mod party;
mod player;
mod user;

pub use event::*;
pub use gear::*;
pub use guild::*;
pub use party::*;
pub use player::*;
pub use user::*;
