use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::application::gear::{
    CreateGearItem, CreateGearItemError, CreateGearItemInput, ListGear, ListGearError,
    ListGearInput,
};
use crate::domain::entities::GearItem;

// ========== DTOs ==========

#[derive(Deserialize)]
pub struct ListGearQuery {
    pub category: Option<String>,
    pub rarity: Option<String>,
    pub tier: Option<u32>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGearItemRequest {
    pub base_name: String,
    pub skill_name: Option<String>,
    pub category: String,
    pub tier: u32,
    #[serde(default = "default_rarity")]
    pub rarity: String,
    pub item_level: Option<u32>,
    pub required_level: Option<u32>,
    pub icon_url: Option<String>,
}

fn default_rarity() -> String {
    "common".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GearItemResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub tier: u32,
    pub rarity: String,
    pub item_level: u32,
    pub required_level: u32,
    pub power: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl GearItemResponse {
    fn from_item(item: &GearItem, power: u32) -> Self {
        Self {
            id: item.id.clone(),
            name: item.display_name(),
            category: item.category.as_str().to_string(),
            tier: item.tier,
            rarity: item.rarity.as_str().to_string(),
            item_level: item.item_level,
            required_level: item.required_level,
            power,
            icon_url: item.icon_url.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct ListGearResponse {
    pub success: bool,
    pub items: Vec<GearItemResponse>,
}

#[derive(Serialize)]
pub struct CreateGearItemResponse {
    pub success: bool,
    pub item: GearItemResponse,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

// ========== Handlers ==========

/// GET /api/gear
pub async fn list_gear(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListGearQuery>,
) -> Result<Json<ListGearResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ListGear::new(state.gear_repo.clone());
    let input = ListGearInput {
        category: query.category,
        rarity: query.rarity,
        tier: query.tier,
        limit: query.limit.unwrap_or(100),
        offset: query.offset.unwrap_or(0),
    };

    match use_case.execute(input).await {
        Ok(output) => Ok(Json(ListGearResponse {
            success: true,
            items: output
                .items
                .iter()
                .map(|e| GearItemResponse::from_item(&e.item, e.power))
                .collect(),
        })),
        Err(e) => {
            let (status, code, message) = match &e {
                ListGearError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GEAR_LIST_ERROR",
                    e.to_string(),
                ),
            };
            Err((
                status,
                Json(ErrorResponse {
                    error: message,
                    code: code.to_string(),
                    details: None,
                }),
            ))
        }
    }
}

/// POST /api/gear
pub async fn create_gear_item(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateGearItemRequest>,
) -> Result<(StatusCode, Json<CreateGearItemResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = CreateGearItem::new(state.gear_repo.clone());
    let input = CreateGearItemInput {
        base_name: body.base_name,
        skill_name: body.skill_name,
        category: body.category,
        tier: body.tier,
        rarity: body.rarity,
        item_level: body.item_level.unwrap_or(1),
        required_level: body.required_level.unwrap_or(1),
        icon_url: body.icon_url,
    };

    match use_case.execute(input).await {
        Ok(output) => Ok((
            StatusCode::CREATED,
            Json(CreateGearItemResponse {
                success: true,
                item: GearItemResponse::from_item(&output.item, output.power),
            }),
        )),
        Err(e) => {
            let (status, code, message) = match &e {
                CreateGearItemError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GEAR_CREATE_ERROR",
                    e.to_string(),
                ),
            };
            Err((
                status,
                Json(ErrorResponse {
                    error: message,
                    code: code.to_string(),
                    details: None,
                }),
            ))
        }
    }
}
