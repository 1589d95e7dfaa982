use std::sync::Arc;

use tracing::info;

use crate::domain::repositories::{EventRepository, PartyRepository};
use crate::domain::services::party_assignment::{
    assign_parties, AssignmentError, AssignmentSummary, Candidate,
};
use crate::domain::value_objects::RoleComposition;

/// Fill parties input.
///
/// `composition` is an inline override for this run only; when absent the
/// persisted per-event composition applies, and the default after that.
/// `guild_split` overrides the split flag of whichever composition won.
pub struct FillPartiesInput {
    pub event_id: String,
    pub composition: Option<RoleComposition>,
    pub guild_split: Option<bool>,
}

/// Fill parties output
pub struct FillPartiesOutput {
    pub summary: AssignmentSummary,
}

/// Fill parties use case: plan parties for the whole roster of an event
/// and replace whatever parties the event had before.
///
/// Callers must serialize runs per event (see `AppState::assignment_lock`);
/// the use case itself only guarantees that the read-plan-write sequence
/// against the previous parties is atomic at the database level.
pub struct FillParties<E: EventRepository, P: PartyRepository> {
    event_repo: Arc<E>,
    party_repo: Arc<P>,
}

impl<E: EventRepository, P: PartyRepository> FillParties<E, P> {
    pub fn new(event_repo: Arc<E>, party_repo: Arc<P>) -> Self {
        Self {
            event_repo,
            party_repo,
        }
    }

    pub async fn execute(&self, input: FillPartiesInput) -> Result<FillPartiesOutput, FillPartiesError> {
        self.event_repo
            .find_by_id(&input.event_id)
            .await?
            .ok_or(FillPartiesError::EventNotFound)?;

        // Inline composition wins over the stored one, default last
        let mut composition = match input.composition {
            Some(c) => c,
            None => self
                .event_repo
                .get_composition(&input.event_id)
                .await?
                .unwrap_or_default(),
        };
        if let Some(guild_split) = input.guild_split {
            composition.guild_split = guild_split;
        }

        let participants = self.event_repo.get_participants(&input.event_id).await?;
        let candidates: Vec<Candidate> = participants
            .iter()
            .map(|p| Candidate {
                participant_id: p.id.clone(),
                role: p.game_role,
                guild_id: p.guild_id.clone(),
            })
            .collect();

        let plan = assign_parties(&candidates, &composition)?;

        self.party_repo
            .replace_event_parties(&input.event_id, &plan.parties)
            .await?;

        info!(
            event_id = %input.event_id,
            parties = plan.parties.len(),
            members = plan.summary.members_assigned,
            guild_split = composition.guild_split,
            "event parties filled"
        );

        Ok(FillPartiesOutput {
            summary: plan.summary,
        })
    }
}

/// Fill parties error types
#[derive(Debug, thiserror::Error)]
pub enum FillPartiesError {
    #[error("Event not found")]
    EventNotFound,
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
