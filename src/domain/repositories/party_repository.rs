use async_trait::async_trait;

use crate::domain::entities::{Party, PartyMembership};
use crate::domain::repositories::RepositoryError;
use crate::domain::services::party_assignment::PlannedParty;
use crate::domain::value_objects::GameRole;

/// Party with its memberships resolved
#[derive(Debug, Clone)]
pub struct PartyWithMembers {
    pub party: Party,
    pub members: Vec<PartyMembership>,
}

/// Party repository trait
#[async_trait]
pub trait PartyRepository: Send + Sync {
    /// Find party by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Party>, RepositoryError>;

    /// All parties of an event with members, ascending sequence order
    async fn find_by_event(&self, event_id: &str)
        -> Result<Vec<PartyWithMembers>, RepositoryError>;

    /// Memberships of one party, leader first
    async fn get_members(&self, party_id: &str) -> Result<Vec<PartyMembership>, RepositoryError>;

    /// Find one membership row
    async fn find_membership(&self, id: i64) -> Result<Option<PartyMembership>, RepositoryError>;

    /// Atomically drop all parties of the event and write the new plan.
    /// A failed write leaves the previous parties untouched.
    async fn replace_event_parties(
        &self,
        event_id: &str,
        parties: &[PlannedParty],
    ) -> Result<(), RepositoryError>;

    /// Designate a new leader; the previous leader flag is cleared in the
    /// same transaction
    async fn set_leader(&self, party_id: &str, participant_id: &str)
        -> Result<(), RepositoryError>;

    /// Move one membership to another party, optionally overriding the
    /// assigned role. Never transfers leadership.
    async fn move_member(
        &self,
        membership_id: i64,
        target_party_id: &str,
        assigned_role: Option<GameRole>,
    ) -> Result<(), RepositoryError>;

    /// Current member count of a party
    async fn member_count(&self, party_id: &str) -> Result<usize, RepositoryError>;
}
