use std::sync::Arc;

use crate::domain::repositories::PartyRepository;
use crate::domain::value_objects::GameRole;

/// Move party member input. `party_id` is the target party;
/// `assigned_role` optionally overrides the stored role.
pub struct MovePartyMemberInput {
    pub party_id: String,
    pub membership_id: i64,
    pub assigned_role: Option<String>,
}

/// Move party member use case.
///
/// Leadership never moves with a member. The current leader has to hand
/// leadership off first, otherwise the source party would be left
/// without one.
pub struct MovePartyMember<P: PartyRepository> {
    party_repo: Arc<P>,
}

impl<P: PartyRepository> MovePartyMember<P> {
    pub fn new(party_repo: Arc<P>) -> Self {
        Self { party_repo }
    }

    pub async fn execute(&self, input: MovePartyMemberInput) -> Result<(), MovePartyMemberError> {
        let target = self
            .party_repo
            .find_by_id(&input.party_id)
            .await?
            .ok_or(MovePartyMemberError::PartyNotFound)?;

        let membership = self
            .party_repo
            .find_membership(input.membership_id)
            .await?
            .ok_or(MovePartyMemberError::MembershipNotFound)?;

        if membership.party_id == target.id {
            return Err(MovePartyMemberError::Validation(
                "Member is already in this party".into(),
            ));
        }

        let source = self
            .party_repo
            .find_by_id(&membership.party_id)
            .await?
            .ok_or(MovePartyMemberError::PartyNotFound)?;
        if source.event_id != target.event_id {
            return Err(MovePartyMemberError::Validation(
                "Parties belong to different events".into(),
            ));
        }

        if membership.is_leader {
            return Err(MovePartyMemberError::LeaderCannotMove);
        }

        let count = self.party_repo.member_count(&target.id).await?;
        if count >= target.capacity as usize {
            return Err(MovePartyMemberError::PartyFull);
        }

        let assigned_role = input.assigned_role.as_deref().map(GameRole::parse);
        self.party_repo
            .move_member(input.membership_id, &target.id, assigned_role)
            .await?;
        Ok(())
    }
}

/// Move party member error types
#[derive(Debug, thiserror::Error)]
pub enum MovePartyMemberError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Party not found")]
    PartyNotFound,
    #[error("Membership not found")]
    MembershipNotFound,
    #[error("Party leaders cannot be moved; transfer leadership first")]
    LeaderCannotMove,
    #[error("Target party is full")]
    PartyFull,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
