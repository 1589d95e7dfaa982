mod create_event;
mod delete_event;
mod fill_parties;
mod register_participant;
mod remove_participant;
mod set_composition;

pub use create_event::*;
pub use delete_event::*;
pub use fill_parties::*;
pub use register_participant::*;
pub use remove_participant::*;
pub use set_composition::*;
