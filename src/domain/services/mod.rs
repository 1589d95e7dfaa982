pub mod gear_power;
pub mod party_assignment;
