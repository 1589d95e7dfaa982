use std::sync::Arc;

use crate::domain::repositories::PartyRepository;

/// Set party leader input
pub struct SetPartyLeaderInput {
    pub party_id: String,
    pub participant_id: String,
}

/// Set party leader use case. The previous leader is demoted in the
/// same transaction, so the party never has zero or two leaders.
pub struct SetPartyLeader<P: PartyRepository> {
    party_repo: Arc<P>,
}

impl<P: PartyRepository> SetPartyLeader<P> {
    pub fn new(party_repo: Arc<P>) -> Self {
        Self { party_repo }
    }

    pub async fn execute(&self, input: SetPartyLeaderInput) -> Result<(), SetPartyLeaderError> {
        self.party_repo
            .find_by_id(&input.party_id)
            .await?
            .ok_or(SetPartyLeaderError::PartyNotFound)?;

        let members = self.party_repo.get_members(&input.party_id).await?;
        if !members.iter().any(|m| m.participant_id == input.participant_id) {
            return Err(SetPartyLeaderError::NotAMember);
        }

        self.party_repo
            .set_leader(&input.party_id, &input.participant_id)
            .await?;
        Ok(())
    }
}

/// Set party leader error types
#[derive(Debug, thiserror::Error)]
pub enum SetPartyLeaderError {
    #[error("Party not found")]
    PartyNotFound,
    #[error("Participant is not a member of this party")]
    NotAMember,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
