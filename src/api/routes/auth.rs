use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::application::auth::{
    LoginError, LoginUser, LoginUserInput, RegisterError, RegisterUser, RegisterUserInput,
};
use crate::infrastructure::app_state::AppState;

/// Create auth router; both endpoints are public
pub fn create_auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}

// ========== DTOs ==========

// Fields are optional so absent and empty credentials produce the same
// MISSING_CREDENTIALS answer instead of a deserialization error.
#[derive(Deserialize)]
pub struct CredentialsRequest {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    success: bool,
    user: AuthUser,
    token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    id: String,
    username: String,
    is_admin: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

fn error_response(
    status: StatusCode,
    code: &str,
    message: String,
    details: Option<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        }),
    )
}

fn credentials(req: CredentialsRequest) -> Result<(String, String), (StatusCode, Json<ErrorResponse>)> {
    match (
        req.username.filter(|s| !s.is_empty()),
        req.password.filter(|s| !s.is_empty()),
    ) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => Err(error_response(
            StatusCode::BAD_REQUEST,
            "MISSING_CREDENTIALS",
            "Username and password are required".to_string(),
            None,
        )),
    }
}

fn auth_response(user: &crate::domain::entities::User, token: String) -> AuthResponse {
    AuthResponse {
        success: true,
        user: AuthUser {
            id: user.id.clone(),
            username: user.username.clone(),
            is_admin: user.is_admin,
        },
        token,
    }
}

// ========== Handlers ==========

async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), (StatusCode, Json<ErrorResponse>)> {
    let (username, password) = credentials(req)?;

    let use_case = RegisterUser::new(state.user_repo.clone(), state.jwt_service.clone());
    let output = use_case
        .execute(RegisterUserInput { username, password })
        .await
        .map_err(|e| match &e {
            RegisterError::Validation(msg) => error_response(
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            RegisterError::UsernameExists => error_response(
                StatusCode::CONFLICT,
                "USERNAME_EXISTS",
                "Username already exists".to_string(),
                None,
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "REGISTRATION_ERROR",
                "Registration failed".to_string(),
                Some(e.to_string()),
            ),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(auth_response(&output.user, output.token)),
    ))
}

async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (username, password) = credentials(req)?;

    let use_case = LoginUser::new(state.user_repo.clone(), state.jwt_service.clone());
    let output = use_case
        .execute(LoginUserInput { username, password })
        .await
        .map_err(|e| match &e {
            LoginError::Validation(msg) => error_response(
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            LoginError::InvalidCredentials => error_response(
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid username or password".to_string(),
                None,
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "LOGIN_ERROR",
                "Login failed".to_string(),
                Some(e.to_string()),
            ),
        })?;

    Ok(Json(auth_response(&output.user, output.token)))
}
