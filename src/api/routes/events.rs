use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde::{Deserialize, Serialize};

use crate::api::middleware::Claims;
use crate::api::AppState;
use crate::application::events::{
    CreateEvent, CreateEventError, CreateEventInput, DeleteEvent, DeleteEventError,
    DeleteEventInput, FillParties, FillPartiesError, FillPartiesInput, RegisterParticipant,
    RegisterParticipantError, RegisterParticipantInput, RemoveParticipant,
    RemoveParticipantError, RemoveParticipantInput, SetComposition, SetCompositionError,
    SetCompositionInput,
};
use crate::domain::entities::{Event, EventParticipant};
use crate::domain::repositories::{EventRepository, PartyRepository};
use crate::domain::services::party_assignment::AssignmentSummary;
use crate::domain::value_objects::{GameRole, RoleComposition};

// ========== DTOs ==========

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub event_time: i64,
}

#[derive(Deserialize)]
pub struct ListEventsQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterParticipantRequest {
    pub player_id: Option<String>,
    pub display_name: Option<String>,
    pub role: Option<String>,
    pub guild_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionRequest {
    /// role name (synonyms accepted) -> required count per party
    pub requirements: BTreeMap<String, u32>,
    #[serde(default)]
    pub guild_split: bool,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FillPartiesRequest {
    /// Inline composition for this run only
    pub requirements: Option<BTreeMap<String, u32>>,
    pub guild_split: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub event_time: i64,
    pub created_by: String,
    pub created_at: i64,
}

impl EventResponse {
    fn from_entity(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            name: event.name.clone(),
            description: event.description.clone(),
            event_time: event.event_time,
            created_by: event.created_by.clone(),
            created_at: event.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub id: String,
    pub display_name: String,
    pub role: String,
    pub guild_id: Option<String>,
    pub player_id: Option<String>,
    pub registered_at: i64,
}

impl ParticipantResponse {
    fn from_entity(p: &EventParticipant) -> Self {
        Self {
            id: p.id.clone(),
            display_name: p.display_name.clone(),
            role: p.game_role.as_str().to_string(),
            guild_id: p.guild_id.clone(),
            player_id: p.player_id.clone(),
            registered_at: p.registered_at,
        }
    }
}

#[derive(Serialize)]
pub struct ListEventsResponse {
    pub success: bool,
    pub events: Vec<EventResponse>,
}

#[derive(Serialize)]
pub struct EventDetailResponse {
    pub success: bool,
    pub event: EventResponse,
    pub participants: Vec<ParticipantResponse>,
}

#[derive(Serialize)]
pub struct CreateEventResponse {
    pub success: bool,
    pub event: EventResponse,
}

#[derive(Serialize)]
pub struct DeleteEventResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct RegisterParticipantResponse {
    pub success: bool,
    pub participant: ParticipantResponse,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionResponse {
    pub success: bool,
    pub requirements: BTreeMap<GameRole, u32>,
    pub guild_split: bool,
    /// False when the default composition is being reported
    pub stored: bool,
}

#[derive(Serialize)]
pub struct FillPartiesResponse {
    pub success: bool,
    pub summary: AssignmentSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyMemberResponse {
    pub membership_id: i64,
    pub participant_id: String,
    pub display_name: String,
    pub role: String,
    pub is_leader: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyResponse {
    pub id: String,
    pub sequence: u32,
    pub name: String,
    pub capacity: u32,
    pub members: Vec<PartyMemberResponse>,
}

#[derive(Serialize)]
pub struct ListPartiesResponse {
    pub success: bool,
    pub parties: Vec<PartyResponse>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

fn error_response(status: StatusCode, code: &str, message: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message,
            code: code.to_string(),
            details: None,
        }),
    )
}

/// Parse a role-keyed requirements map, normalizing synonyms. Keys that do
/// not resolve to a known role are rejected rather than silently pooled
/// under `unknown`.
fn parse_requirements(
    raw: &BTreeMap<String, u32>,
) -> Result<BTreeMap<GameRole, u32>, (StatusCode, Json<ErrorResponse>)> {
    let mut requirements = BTreeMap::new();
    for (name, &count) in raw {
        let role = GameRole::parse(name);
        if role == GameRole::Unknown && !name.eq_ignore_ascii_case("unknown") {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "UNKNOWN_ROLE",
                format!("Unknown role: {}", name),
            ));
        }
        *requirements.entry(role).or_insert(0) += count;
    }
    let total: u32 = requirements.values().sum();
    if total as usize > crate::domain::entities::PARTY_CAPACITY {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            format!(
                "Required roles sum to {}, above the party capacity of {}",
                total,
                crate::domain::entities::PARTY_CAPACITY
            ),
        ));
    }
    Ok(requirements)
}

// ========== Handlers ==========

/// GET /api/events
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<ListEventsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let events = state
        .event_repo
        .find_all(query.limit.unwrap_or(50).clamp(1, 100), query.offset.unwrap_or(0))
        .await
        .map_err(|e| {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "EVENT_LIST_ERROR", e.to_string())
        })?;

    Ok(Json(ListEventsResponse {
        success: true,
        events: events.iter().map(EventResponse::from_entity).collect(),
    }))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<CreateEventResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = CreateEvent::new(state.event_repo.clone());
    let input = CreateEventInput {
        name: body.name,
        description: body.description,
        event_time: body.event_time,
        created_by: claims.user_id,
    };

    match use_case.execute(input).await {
        Ok(output) => Ok((
            StatusCode::CREATED,
            Json(CreateEventResponse {
                success: true,
                event: EventResponse::from_entity(&output.event),
            }),
        )),
        Err(e) => Err(match &e {
            CreateEventError::Validation(msg) => {
                error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "EVENT_CREATE_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// GET /api/events/:eventId
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<EventDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let event = state
        .event_repo
        .find_by_id(&event_id)
        .await
        .map_err(|e| {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "EVENT_GET_ERROR", e.to_string())
        })?
        .ok_or_else(|| {
            error_response(
                StatusCode::NOT_FOUND,
                "EVENT_NOT_FOUND",
                "Event not found".to_string(),
            )
        })?;

    let participants = state
        .event_repo
        .get_participants(&event_id)
        .await
        .map_err(|e| {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "EVENT_GET_ERROR", e.to_string())
        })?;

    Ok(Json(EventDetailResponse {
        success: true,
        event: EventResponse::from_entity(&event),
        participants: participants.iter().map(ParticipantResponse::from_entity).collect(),
    }))
}

/// DELETE /api/events/:eventId
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<DeleteEventResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = DeleteEvent::new(state.event_repo.clone());

    match use_case.execute(DeleteEventInput { event_id }).await {
        Ok(()) => Ok(Json(DeleteEventResponse {
            success: true,
            message: "Event deleted".to_string(),
        })),
        Err(e) => Err(match &e {
            DeleteEventError::EventNotFound => error_response(
                StatusCode::NOT_FOUND,
                "EVENT_NOT_FOUND",
                "Event not found".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "EVENT_DELETE_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// POST /api/events/:eventId/participants
pub async fn register_participant(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(body): Json<RegisterParticipantRequest>,
) -> Result<(StatusCode, Json<RegisterParticipantResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = RegisterParticipant::new(state.event_repo.clone(), state.player_repo.clone());
    let input = RegisterParticipantInput {
        event_id,
        player_id: body.player_id,
        display_name: body.display_name,
        role: body.role,
        guild_id: body.guild_id,
    };

    match use_case.execute(input).await {
        Ok(output) => Ok((
            StatusCode::CREATED,
            Json(RegisterParticipantResponse {
                success: true,
                participant: ParticipantResponse::from_entity(&output.participant),
            }),
        )),
        Err(e) => Err(match &e {
            RegisterParticipantError::Validation(msg) => {
                error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            RegisterParticipantError::EventNotFound => error_response(
                StatusCode::NOT_FOUND,
                "EVENT_NOT_FOUND",
                "Event not found".to_string(),
            ),
            RegisterParticipantError::PlayerNotFound => error_response(
                StatusCode::NOT_FOUND,
                "PLAYER_NOT_FOUND",
                "Player not found".to_string(),
            ),
            RegisterParticipantError::AlreadyRegistered => error_response(
                StatusCode::CONFLICT,
                "ALREADY_REGISTERED",
                "Player is already registered for this event".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "PARTICIPANT_REGISTER_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// DELETE /api/events/:eventId/participants/:participantId
pub async fn remove_participant(
    State(state): State<Arc<AppState>>,
    Path((_event_id, participant_id)): Path<(String, String)>,
) -> Result<Json<DeleteEventResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = RemoveParticipant::new(state.event_repo.clone());

    match use_case.execute(RemoveParticipantInput { participant_id }).await {
        Ok(()) => Ok(Json(DeleteEventResponse {
            success: true,
            message: "Participant removed".to_string(),
        })),
        Err(e) => Err(match &e {
            RemoveParticipantError::ParticipantNotFound => error_response(
                StatusCode::NOT_FOUND,
                "PARTICIPANT_NOT_FOUND",
                "Participant not found".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "PARTICIPANT_REMOVE_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// GET /api/events/:eventId/composition
pub async fn get_composition(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<CompositionResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .event_repo
        .find_by_id(&event_id)
        .await
        .map_err(|e| {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "COMPOSITION_GET_ERROR", e.to_string())
        })?
        .ok_or_else(|| {
            error_response(
                StatusCode::NOT_FOUND,
                "EVENT_NOT_FOUND",
                "Event not found".to_string(),
            )
        })?;

    let stored = state
        .event_repo
        .get_composition(&event_id)
        .await
        .map_err(|e| {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "COMPOSITION_GET_ERROR", e.to_string())
        })?;

    let (composition, stored) = match stored {
        Some(c) => (c, true),
        None => (RoleComposition::default(), false),
    };

    Ok(Json(CompositionResponse {
        success: true,
        requirements: composition.requirements,
        guild_split: composition.guild_split,
        stored,
    }))
}

/// PUT /api/events/:eventId/composition
pub async fn set_composition(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(body): Json<CompositionRequest>,
) -> Result<Json<CompositionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let requirements = parse_requirements(&body.requirements)?;
    let composition = RoleComposition {
        requirements,
        guild_split: body.guild_split,
    };

    let use_case = SetComposition::new(state.event_repo.clone());
    let input = SetCompositionInput {
        event_id,
        composition: composition.clone(),
    };

    match use_case.execute(input).await {
        Ok(()) => Ok(Json(CompositionResponse {
            success: true,
            requirements: composition.requirements,
            guild_split: composition.guild_split,
            stored: true,
        })),
        Err(e) => Err(match &e {
            SetCompositionError::EventNotFound => error_response(
                StatusCode::NOT_FOUND,
                "EVENT_NOT_FOUND",
                "Event not found".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "COMPOSITION_SET_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// POST /api/events/:eventId/parties/fill
///
/// Runs for the same event are serialized by a per-event lock, so two
/// concurrent fills cannot interleave their delete-and-insert phases.
pub async fn fill_parties(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    body: Option<Json<FillPartiesRequest>>,
) -> Result<Json<FillPartiesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    let composition = match &body.requirements {
        Some(raw) => Some(RoleComposition {
            requirements: parse_requirements(raw)?,
            guild_split: body.guild_split.unwrap_or(false),
        }),
        None => None,
    };

    let lock = state.assignment_lock(&event_id).await;
    let _guard = lock.lock().await;

    let use_case = FillParties::new(state.event_repo.clone(), state.party_repo.clone());
    let input = FillPartiesInput {
        event_id,
        composition,
        guild_split: body.guild_split,
    };

    match use_case.execute(input).await {
        Ok(output) => Ok(Json(FillPartiesResponse {
            success: true,
            summary: output.summary,
        })),
        Err(e) => Err(match &e {
            FillPartiesError::EventNotFound => error_response(
                StatusCode::NOT_FOUND,
                "EVENT_NOT_FOUND",
                "Event not found".to_string(),
            ),
            FillPartiesError::Assignment(err) => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "NOT_ENOUGH_PARTICIPANTS",
                err.to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "PARTY_FILL_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// GET /api/events/:eventId/parties
pub async fn list_parties(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<ListPartiesResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .event_repo
        .find_by_id(&event_id)
        .await
        .map_err(|e| {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "PARTY_LIST_ERROR", e.to_string())
        })?
        .ok_or_else(|| {
            error_response(
                StatusCode::NOT_FOUND,
                "EVENT_NOT_FOUND",
                "Event not found".to_string(),
            )
        })?;

    let parties = state.party_repo.find_by_event(&event_id).await.map_err(|e| {
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "PARTY_LIST_ERROR", e.to_string())
    })?;

    // Resolve display names in one pass over the registrations
    let participants = state.event_repo.get_participants(&event_id).await.map_err(|e| {
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "PARTY_LIST_ERROR", e.to_string())
    })?;
    let names: std::collections::HashMap<&str, &str> = participants
        .iter()
        .map(|p| (p.id.as_str(), p.display_name.as_str()))
        .collect();

    Ok(Json(ListPartiesResponse {
        success: true,
        parties: parties
            .iter()
            .map(|p| PartyResponse {
                id: p.party.id.clone(),
                sequence: p.party.sequence,
                name: p
                    .party
                    .custom_name
                    .clone()
                    .unwrap_or_else(|| format!("Party {}", p.party.sequence)),
                capacity: p.party.capacity,
                members: p
                    .members
                    .iter()
                    .map(|m| PartyMemberResponse {
                        membership_id: m.id,
                        participant_id: m.participant_id.clone(),
                        display_name: names
                            .get(m.participant_id.as_str())
                            .map(|s| s.to_string())
                            .unwrap_or_default(),
                        role: m.assigned_role.as_str().to_string(),
                        is_leader: m.is_leader,
                    })
                    .collect(),
            })
            .collect(),
    }))
}
