use async_trait::async_trait;

use crate::domain::entities::{Event, EventParticipant};
use crate::domain::repositories::RepositoryError;
use crate::domain::value_objects::RoleComposition;

/// Event repository trait: events, registrations and the per-event
/// role composition
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, RepositoryError>;

    /// List events, soonest first
    async fn find_all(&self, limit: u32, offset: u32) -> Result<Vec<Event>, RepositoryError>;

    /// Save event (create or update)
    async fn save(&self, event: &Event) -> Result<(), RepositoryError>;

    /// Delete event together with its registrations and parties
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    // ========== Participants ==========

    /// All registrations for an event, in registration order
    async fn get_participants(&self, event_id: &str)
        -> Result<Vec<EventParticipant>, RepositoryError>;

    /// Register a participant
    async fn add_participant(&self, participant: &EventParticipant)
        -> Result<(), RepositoryError>;

    /// Remove a registration
    async fn remove_participant(&self, participant_id: &str) -> Result<(), RepositoryError>;

    // ========== Role composition ==========

    /// Persisted composition for an event, if one was stored
    async fn get_composition(&self, event_id: &str)
        -> Result<Option<RoleComposition>, RepositoryError>;

    /// Store the per-event composition (overwrites any previous one)
    async fn set_composition(
        &self,
        event_id: &str,
        composition: &RoleComposition,
    ) -> Result<(), RepositoryError>;
}
