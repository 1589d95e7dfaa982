mod role;
mod role_composition;

pub use role::*;
pub use role_composition::*;
