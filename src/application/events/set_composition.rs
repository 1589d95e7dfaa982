use std::sync::Arc;

use crate::domain::repositories::EventRepository;
use crate::domain::value_objects::RoleComposition;

/// Set composition input
pub struct SetCompositionInput {
    pub event_id: String,
    pub composition: RoleComposition,
}

/// Store the per-event role composition use case
pub struct SetComposition<E: EventRepository> {
    event_repo: Arc<E>,
}

impl<E: EventRepository> SetComposition<E> {
    pub fn new(event_repo: Arc<E>) -> Self {
        Self { event_repo }
    }

    pub async fn execute(&self, input: SetCompositionInput) -> Result<(), SetCompositionError> {
        self.event_repo
            .find_by_id(&input.event_id)
            .await?
            .ok_or(SetCompositionError::EventNotFound)?;

        self.event_repo
            .set_composition(&input.event_id, &input.composition)
            .await?;
        Ok(())
    }
}

/// Set composition error types
#[derive(Debug, thiserror::Error)]
pub enum SetCompositionError {
    #[error("Event not found")]
    EventNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
