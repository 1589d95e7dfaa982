use serde::{Deserialize, Serialize};

use crate::domain::value_objects::GameRole;

/// Default member capacity of a party
pub const PARTY_CAPACITY: usize = 15;

/// Party entity - a capacity-bounded group of participants for one event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: String,
    pub event_id: String,
    /// Ordering number, unique per event
    pub sequence: u32,
    pub custom_name: Option<String>,
    pub capacity: u32,
    pub created_at: i64,
}

impl Party {
    pub fn new(id: String, event_id: String, sequence: u32) -> Self {
        Self {
            id,
            event_id,
            sequence,
            custom_name: None,
            capacity: PARTY_CAPACITY as u32,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Membership of one participant in one party.
///
/// `assigned_role` normally equals the participant's declared role; it only
/// differs after an explicit operator reassignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyMembership {
    pub id: i64,
    pub party_id: String,
    pub participant_id: String,
    pub assigned_role: GameRole,
    pub is_leader: bool,
}
