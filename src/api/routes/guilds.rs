use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::application::guilds::{
    CreateGuild, CreateGuildError, CreateGuildInput, DeleteGuild, DeleteGuildError,
    DeleteGuildInput, ListGuilds, ListGuildsInput, UpdateGuild, UpdateGuildError, UpdateGuildInput,
};
use crate::domain::entities::Guild;
use crate::domain::repositories::GuildRepository;

// ========== DTOs ==========

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuildRequest {
    pub name: String,
    pub description: Option<String>,
    pub faction: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuildRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub faction: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct ListGuildsQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub faction: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl GuildResponse {
    fn from_entity(guild: &Guild) -> Self {
        Self {
            id: guild.id.clone(),
            name: guild.name.clone(),
            description: guild.description.clone(),
            faction: guild.faction.as_str().to_string(),
            is_active: guild.is_active,
            created_at: guild.created_at,
            updated_at: guild.updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildListItem {
    #[serde(flatten)]
    pub guild: GuildResponse,
    pub member_count: usize,
}

#[derive(Serialize)]
pub struct ListGuildsResponse {
    pub success: bool,
    pub guilds: Vec<GuildListItem>,
}

#[derive(Serialize)]
pub struct GuildDetailResponse {
    pub success: bool,
    pub guild: GuildResponse,
}

#[derive(Serialize)]
pub struct DeleteGuildResponse {
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

/// GET /api/guilds
pub async fn list_guilds(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListGuildsQuery>,
) -> Result<Json<ListGuildsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ListGuilds::new(state.guild_repo.clone());
    let input = ListGuildsInput {
        limit: query.limit.unwrap_or(50),
        offset: query.offset.unwrap_or(0),
    };

    let output = use_case.execute(input).await.map_err(|e| {
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "GUILD_LIST_ERROR", e.to_string())
    })?;

    Ok(Json(ListGuildsResponse {
        success: true,
        guilds: output
            .guilds
            .iter()
            .map(|g| GuildListItem {
                guild: GuildResponse::from_entity(&g.guild),
                member_count: g.member_count,
            })
            .collect(),
    }))
}

/// POST /api/guilds
pub async fn create_guild(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateGuildRequest>,
) -> Result<(StatusCode, Json<GuildDetailResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = CreateGuild::new(state.guild_repo.clone());
    let input = CreateGuildInput {
        name: body.name,
        description: body.description,
        faction: body.faction,
    };

    match use_case.execute(input).await {
        Ok(output) => Ok((
            StatusCode::CREATED,
            Json(GuildDetailResponse {
                success: true,
                guild: GuildResponse::from_entity(&output.guild),
            }),
        )),
        Err(e) => Err(match &e {
            CreateGuildError::Validation(msg) => {
                error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            CreateGuildError::NameExists => error_response(
                StatusCode::CONFLICT,
                "GUILD_NAME_EXISTS",
                "Guild name already exists".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "GUILD_CREATE_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// GET /api/guilds/:guildId
pub async fn get_guild(
    State(state): State<Arc<AppState>>,
    Path(guild_id): Path<String>,
) -> Result<Json<GuildDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let guild = state
        .guild_repo
        .find_by_id(&guild_id)
        .await
        .map_err(|e| {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "GUILD_GET_ERROR", e.to_string())
        })?
        .ok_or_else(|| {
            error_response(
                StatusCode::NOT_FOUND,
                "GUILD_NOT_FOUND",
                "Guild not found".to_string(),
            )
        })?;

    Ok(Json(GuildDetailResponse {
        success: true,
        guild: GuildResponse::from_entity(&guild),
    }))
}

/// PATCH /api/guilds/:guildId
pub async fn update_guild(
    State(state): State<Arc<AppState>>,
    Path(guild_id): Path<String>,
    Json(body): Json<UpdateGuildRequest>,
) -> Result<Json<GuildDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = UpdateGuild::new(state.guild_repo.clone());
    let input = UpdateGuildInput {
        guild_id,
        name: body.name,
        description: body.description,
        faction: body.faction,
        is_active: body.is_active,
    };

    match use_case.execute(input).await {
        Ok(output) => Ok(Json(GuildDetailResponse {
            success: true,
            guild: GuildResponse::from_entity(&output.guild),
        })),
        Err(e) => Err(match &e {
            UpdateGuildError::Validation(msg) => {
                error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            UpdateGuildError::GuildNotFound => error_response(
                StatusCode::NOT_FOUND,
                "GUILD_NOT_FOUND",
                "Guild not found".to_string(),
            ),
            UpdateGuildError::NameExists => error_response(
                StatusCode::CONFLICT,
                "GUILD_NAME_EXISTS",
                "Guild name already exists".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "GUILD_UPDATE_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// DELETE /api/guilds/:guildId
pub async fn delete_guild(
    State(state): State<Arc<AppState>>,
    Path(guild_id): Path<String>,
) -> Result<Json<DeleteGuildResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = DeleteGuild::new(state.guild_repo.clone());

    match use_case.execute(DeleteGuildInput { guild_id }).await {
        Ok(()) => Ok(Json(DeleteGuildResponse {
            success: true,
            message: "Guild deleted".to_string(),
        })),
        Err(e) => Err(match &e {
            DeleteGuildError::GuildNotFound => error_response(
                StatusCode::NOT_FOUND,
                "GUILD_NOT_FOUND",
                "Guild not found".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "GUILD_DELETE_ERROR",
                e.to_string(),
            ),
        }),
    }
}
