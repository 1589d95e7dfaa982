use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Event;
use crate::domain::repositories::EventRepository;

/// Create event input
pub struct CreateEventInput {
    pub name: String,
    pub description: Option<String>,
    pub event_time: i64,
    pub created_by: String,
}

/// Create event output
pub struct CreateEventOutput {
    pub event: Event,
}

/// Create event use case
pub struct CreateEvent<E: EventRepository> {
    event_repo: Arc<E>,
}

impl<E: EventRepository> CreateEvent<E> {
    pub fn new(event_repo: Arc<E>) -> Self {
        Self { event_repo }
    }

    pub async fn execute(&self, input: CreateEventInput) -> Result<CreateEventOutput, CreateEventError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CreateEventError::Validation("Event name is required".into()));
        }

        let event = Event::new(
            Uuid::new_v4().to_string(),
            name,
            input.description,
            input.event_time,
            input.created_by,
        );
        self.event_repo.save(&event).await?;

        Ok(CreateEventOutput { event })
    }
}

/// Create event error types
#[derive(Debug, thiserror::Error)]
pub enum CreateEventError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::RepositoryError),
}
