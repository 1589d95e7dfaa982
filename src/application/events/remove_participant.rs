use std::sync::Arc;

use crate::domain::repositories::EventRepository;

/// Remove participant input
pub struct RemoveParticipantInput {
    pub participant_id: String,
}

/// Remove participant use case. Any party membership held by the
/// participant is dropped with the registration.
pub struct RemoveParticipant<E: EventRepository> {
    event_repo: Arc<E>,
}

impl<E: EventRepository> RemoveParticipant<E> {
    pub fn new(event_repo: Arc<E>) -> Self {
        Self { event_repo }
    }

    pub async fn execute(&self, input: RemoveParticipantInput) -> Result<(), RemoveParticipantError> {
        self.event_repo
            .remove_participant(&input.participant_id)
            .await
            .map_err(|e| match e {
                crate::domain::repositories::RepositoryError::NotFound(_) => {
                    RemoveParticipantError::ParticipantNotFound
                }
                other => RemoveParticipantError::Repository(other),
            })
    }
}

/// Remove participant error types
#[derive(Debug, thiserror::Error)]
pub enum RemoveParticipantError {
    #[error("Participant not found")]
    ParticipantNotFound,
    #[error("Repository error: {0}")]
    Repository(crate::domain::repositories::RepositoryError),
}
