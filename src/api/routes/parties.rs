use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::application::parties::{
    MovePartyMember, MovePartyMemberError, MovePartyMemberInput, SetPartyLeader,
    SetPartyLeaderError, SetPartyLeaderInput,
};

// ========== DTOs ==========

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLeaderRequest {
    pub participant_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveMemberRequest {
    pub membership_id: i64,
    pub assigned_role: Option<String>,
}

#[derive(Serialize)]
pub struct PartyActionResponse {
    pub success: bool,
    pub message: String,
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

// ========== Handlers ==========

/// POST /api/parties/:partyId/leader
pub async fn set_leader(
    State(state): State<Arc<AppState>>,
    Path(party_id): Path<String>,
    Json(body): Json<SetLeaderRequest>,
) -> Result<Json<PartyActionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = SetPartyLeader::new(state.party_repo.clone());
    let input = SetPartyLeaderInput {
        party_id,
        participant_id: body.participant_id,
    };

    match use_case.execute(input).await {
        Ok(()) => Ok(Json(PartyActionResponse {
            success: true,
            message: "Leader updated".to_string(),
        })),
        Err(e) => Err(match &e {
            SetPartyLeaderError::PartyNotFound => error_response(
                StatusCode::NOT_FOUND,
                "PARTY_NOT_FOUND",
                "Party not found".to_string(),
            ),
            SetPartyLeaderError::NotAMember => error_response(
                StatusCode::BAD_REQUEST,
                "NOT_A_MEMBER",
                "Participant is not a member of this party".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "LEADER_SET_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// POST /api/parties/:partyId/move
///
/// `:partyId` is the target; the member is identified by membership id.
pub async fn move_member(
    State(state): State<Arc<AppState>>,
    Path(party_id): Path<String>,
    Json(body): Json<MoveMemberRequest>,
) -> Result<Json<PartyActionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = MovePartyMember::new(state.party_repo.clone());
    let input = MovePartyMemberInput {
        party_id,
        membership_id: body.membership_id,
        assigned_role: body.assigned_role,
    };

    match use_case.execute(input).await {
        Ok(()) => Ok(Json(PartyActionResponse {
            success: true,
            message: "Member moved".to_string(),
        })),
        Err(e) => Err(match &e {
            MovePartyMemberError::Validation(msg) => {
                error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            MovePartyMemberError::PartyNotFound => error_response(
                StatusCode::NOT_FOUND,
                "PARTY_NOT_FOUND",
                "Party not found".to_string(),
            ),
            MovePartyMemberError::MembershipNotFound => error_response(
                StatusCode::NOT_FOUND,
                "MEMBERSHIP_NOT_FOUND",
                "Membership not found".to_string(),
            ),
            MovePartyMemberError::LeaderCannotMove => error_response(
                StatusCode::CONFLICT,
                "LEADER_CANNOT_MOVE",
                "Party leaders cannot be moved; transfer leadership first".to_string(),
            ),
            MovePartyMemberError::PartyFull => error_response(
                StatusCode::CONFLICT,
                "PARTY_FULL",
                "Target party is full".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "MEMBER_MOVE_ERROR",
                e.to_string(),
            ),
        }),
    }
}
