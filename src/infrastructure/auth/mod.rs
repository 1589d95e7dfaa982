mod jwt_service;
mod password;

pub use jwt_service::{Claims, JwtError, JwtService};
pub use password::{PasswordError, PasswordService};
