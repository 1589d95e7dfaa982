mod move_party_member;
mod set_party_leader;

pub use move_party_member::*;
pub use set_party_leader::*;
