use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::application::gear::{
    GetLoadout, GetLoadoutError, GetLoadoutInput, GrantPlayerGear, GrantPlayerGearError,
    GrantPlayerGearInput, SetGearEquipped, SetGearEquippedError, SetGearEquippedInput,
};
use crate::application::players::{
    CreatePlayer, CreatePlayerError, CreatePlayerInput, DeletePlayer, DeletePlayerError,
    DeletePlayerInput, ListPlayers, ListPlayersInput, SetPlayerRole, SetPlayerRoleError,
    SetPlayerRoleInput, UpdatePlayer, UpdatePlayerError, UpdatePlayerInput,
};
use crate::domain::entities::Player;
use crate::domain::repositories::PlayerRepository;

// ========== DTOs ==========

/// Distinguishes a field that is absent from one that is explicitly null
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(de).map(Some)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub in_game_name: String,
    pub discord_name: Option<String>,
    pub character_level: Option<u32>,
    pub guild_id: Option<String>,
    pub game_role: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    pub in_game_name: Option<String>,
    pub discord_name: Option<String>,
    pub character_level: Option<u32>,
    /// Present-and-null clears the guild; absent leaves it alone
    #[serde(default, deserialize_with = "double_option")]
    pub guild_id: Option<Option<String>>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRoleRequest {
    pub role: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPlayersQuery {
    pub guild_id: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: String,
    pub in_game_name: String,
    pub discord_name: String,
    pub character_level: u32,
    pub guild_id: Option<String>,
    pub game_role: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl PlayerResponse {
    fn from_entity(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            in_game_name: player.in_game_name.clone(),
            discord_name: player.discord_name.clone(),
            character_level: player.character_level,
            guild_id: player.guild_id.clone(),
            game_role: player.game_role.as_str().to_string(),
            is_active: player.is_active,
            created_at: player.created_at,
            updated_at: player.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct ListPlayersResponse {
    pub success: bool,
    pub players: Vec<PlayerResponse>,
}

#[derive(Serialize)]
pub struct PlayerDetailResponse {
    pub success: bool,
    pub player: PlayerResponse,
}

#[derive(Serialize)]
pub struct DeletePlayerResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantGearRequest {
    pub gear_item_id: String,
    #[serde(default)]
    pub equipped: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEquippedRequest {
    pub equipped: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantGearResponse {
    pub success: bool,
    pub gear_item_id: String,
    pub name: String,
    pub power: u32,
    pub equipped: bool,
}

#[derive(Serialize)]
pub struct SetEquippedResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadoutItemResponse {
    pub gear_item_id: String,
    pub name: String,
    pub category: String,
    pub tier: u32,
    pub rarity: String,
    pub item_level: u32,
    pub power: u32,
    pub is_equipped: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadoutResponse {
    pub success: bool,
    pub items: Vec<LoadoutItemResponse>,
    pub total_power: u32,
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

/// GET /api/players
pub async fn list_players(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListPlayersQuery>,
) -> Result<Json<ListPlayersResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ListPlayers::new(state.player_repo.clone());
    let input = ListPlayersInput {
        guild_id: query.guild_id,
        limit: query.limit.unwrap_or(100),
        offset: query.offset.unwrap_or(0),
    };

    let output = use_case.execute(input).await.map_err(|e| {
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "PLAYER_LIST_ERROR", e.to_string())
    })?;

    Ok(Json(ListPlayersResponse {
        success: true,
        players: output.players.iter().map(PlayerResponse::from_entity).collect(),
    }))
}

/// POST /api/players
pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<PlayerDetailResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = CreatePlayer::new(state.player_repo.clone(), state.guild_repo.clone());
    let input = CreatePlayerInput {
        in_game_name: body.in_game_name,
        discord_name: body.discord_name,
        character_level: body.character_level,
        guild_id: body.guild_id,
        game_role: body.game_role,
    };

    match use_case.execute(input).await {
        Ok(output) => Ok((
            StatusCode::CREATED,
            Json(PlayerDetailResponse {
                success: true,
                player: PlayerResponse::from_entity(&output.player),
            }),
        )),
        Err(e) => Err(match &e {
            CreatePlayerError::Validation(msg) => {
                error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            CreatePlayerError::NameExists => error_response(
                StatusCode::CONFLICT,
                "PLAYER_NAME_EXISTS",
                "In-game name already exists".to_string(),
            ),
            CreatePlayerError::GuildNotFound => error_response(
                StatusCode::NOT_FOUND,
                "GUILD_NOT_FOUND",
                "Guild not found".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "PLAYER_CREATE_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// GET /api/players/:playerId
pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let player = state
        .player_repo
        .find_by_id(&player_id)
        .await
        .map_err(|e| {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "PLAYER_GET_ERROR", e.to_string())
        })?
        .ok_or_else(|| {
            error_response(
                StatusCode::NOT_FOUND,
                "PLAYER_NOT_FOUND",
                "Player not found".to_string(),
            )
        })?;

    Ok(Json(PlayerDetailResponse {
        success: true,
        player: PlayerResponse::from_entity(&player),
    }))
}

/// PATCH /api/players/:playerId
pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
    Json(body): Json<UpdatePlayerRequest>,
) -> Result<Json<PlayerDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = UpdatePlayer::new(state.player_repo.clone(), state.guild_repo.clone());
    let input = UpdatePlayerInput {
        player_id,
        in_game_name: body.in_game_name,
        discord_name: body.discord_name,
        character_level: body.character_level,
        guild_id: body.guild_id,
        is_active: body.is_active,
    };

    match use_case.execute(input).await {
        Ok(output) => Ok(Json(PlayerDetailResponse {
            success: true,
            player: PlayerResponse::from_entity(&output.player),
        })),
        Err(e) => Err(match &e {
            UpdatePlayerError::Validation(msg) => {
                error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            UpdatePlayerError::PlayerNotFound => error_response(
                StatusCode::NOT_FOUND,
                "PLAYER_NOT_FOUND",
                "Player not found".to_string(),
            ),
            UpdatePlayerError::NameExists => error_response(
                StatusCode::CONFLICT,
                "PLAYER_NAME_EXISTS",
                "In-game name already exists".to_string(),
            ),
            UpdatePlayerError::GuildNotFound => error_response(
                StatusCode::NOT_FOUND,
                "GUILD_NOT_FOUND",
                "Guild not found".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "PLAYER_UPDATE_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// POST /api/players/:playerId/role
pub async fn set_player_role(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
    Json(body): Json<SetRoleRequest>,
) -> Result<Json<PlayerDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = SetPlayerRole::new(state.player_repo.clone());
    let input = SetPlayerRoleInput {
        player_id,
        role: body.role,
    };

    match use_case.execute(input).await {
        Ok(output) => Ok(Json(PlayerDetailResponse {
            success: true,
            player: PlayerResponse::from_entity(&output.player),
        })),
        Err(e) => Err(match &e {
            SetPlayerRoleError::PlayerNotFound => error_response(
                StatusCode::NOT_FOUND,
                "PLAYER_NOT_FOUND",
                "Player not found".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "PLAYER_ROLE_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// DELETE /api/players/:playerId
pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
) -> Result<Json<DeletePlayerResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = DeletePlayer::new(state.player_repo.clone());

    match use_case.execute(DeletePlayerInput { player_id }).await {
        Ok(()) => Ok(Json(DeletePlayerResponse {
            success: true,
            message: "Player deleted".to_string(),
        })),
        Err(e) => Err(match &e {
            DeletePlayerError::PlayerNotFound => error_response(
                StatusCode::NOT_FOUND,
                "PLAYER_NOT_FOUND",
                "Player not found".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "PLAYER_DELETE_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// POST /api/players/:playerId/gear
pub async fn grant_gear(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
    Json(body): Json<GrantGearRequest>,
) -> Result<(StatusCode, Json<GrantGearResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = GrantPlayerGear::new(state.player_repo.clone(), state.gear_repo.clone());
    let equipped = body.equipped;
    let input = GrantPlayerGearInput {
        player_id,
        gear_item_id: body.gear_item_id,
        equipped,
    };

    match use_case.execute(input).await {
        Ok(output) => Ok((
            StatusCode::CREATED,
            Json(GrantGearResponse {
                success: true,
                gear_item_id: output.item.id.clone(),
                name: output.item.display_name(),
                power: output.power,
                equipped,
            }),
        )),
        Err(e) => Err(match &e {
            GrantPlayerGearError::PlayerNotFound => error_response(
                StatusCode::NOT_FOUND,
                "PLAYER_NOT_FOUND",
                "Player not found".to_string(),
            ),
            GrantPlayerGearError::ItemNotFound => error_response(
                StatusCode::NOT_FOUND,
                "GEAR_NOT_FOUND",
                "Gear item not found".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "GEAR_GRANT_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// PUT /api/players/:playerId/gear/:gearItemId
pub async fn set_gear_equipped(
    State(state): State<Arc<AppState>>,
    Path((player_id, gear_item_id)): Path<(String, String)>,
    Json(body): Json<SetEquippedRequest>,
) -> Result<Json<SetEquippedResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = SetGearEquipped::new(state.gear_repo.clone());
    let input = SetGearEquippedInput {
        player_id,
        gear_item_id,
        is_equipped: body.equipped,
    };

    match use_case.execute(input).await {
        Ok(()) => Ok(Json(SetEquippedResponse {
            success: true,
            message: if body.equipped {
                "Item equipped".to_string()
            } else {
                "Item unequipped".to_string()
            },
        })),
        Err(e) => Err(match &e {
            SetGearEquippedError::NotOwned => error_response(
                StatusCode::NOT_FOUND,
                "GEAR_NOT_OWNED",
                "Player does not own this item".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "GEAR_EQUIP_ERROR",
                e.to_string(),
            ),
        }),
    }
}

/// GET /api/players/:playerId/loadout
pub async fn get_loadout(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
) -> Result<Json<LoadoutResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = GetLoadout::new(state.player_repo.clone(), state.gear_repo.clone());

    match use_case.execute(GetLoadoutInput { player_id }).await {
        Ok(output) => Ok(Json(LoadoutResponse {
            success: true,
            items: output
                .entries
                .iter()
                .map(|e| LoadoutItemResponse {
                    gear_item_id: e.item.id.clone(),
                    name: e.item.display_name(),
                    category: e.item.category.as_str().to_string(),
                    tier: e.item.tier,
                    rarity: e.item.rarity.as_str().to_string(),
                    item_level: e.item.item_level,
                    power: e.power,
                    is_equipped: e.owned.is_equipped,
                })
                .collect(),
            total_power: output.total_power,
        })),
        Err(e) => Err(match &e {
            GetLoadoutError::PlayerNotFound => error_response(
                StatusCode::NOT_FOUND,
                "PLAYER_NOT_FOUND",
                "Player not found".to_string(),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "LOADOUT_ERROR",
                e.to_string(),
            ),
        }),
    }
}
