use std::sync::Arc;

use crate::domain::repositories::EventRepository;

/// Delete event input
pub struct DeleteEventInput {
    pub event_id: String,
}

/// Delete event use case. Registrations, parties and the stored
/// composition go with it.
pub struct DeleteEvent<E: EventRepository> {
    event_repo: Arc<E>,
}

impl<E: EventRepository> DeleteEvent<E> {
    pub fn new(event_repo: Arc<E>) -> Self {
        Self { event_repo }
    }

    pub async fn execute(&self, input: DeleteEventInput) -> Result<(), DeleteEventError> {
        self.event_repo
            .find_by_id(&input.event_id)
            .await?
            .ok_or(DeleteEventError::EventNotFound)?;

        self.event_repo.delete(&input.event_id).await?;
        Ok(())
    }
}

/// Delete event error types
#[derive(Debug, thiserror::Error)]
pub enum DeleteEventError {
    #[error("Event not found")]
    EventNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
