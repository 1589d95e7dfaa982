pub mod auth;
pub mod events;
pub mod gear;
pub mod guilds;
pub mod health;
pub mod parties;
pub mod players;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::api::middleware::auth_middleware;
use crate::api::AppState;

/// Create the main API router
pub fn create_api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .nest("/auth", auth::create_auth_router())
        .nest("/guilds", create_guild_router(state.clone()))
        .nest("/players", create_player_router(state.clone()))
        .nest("/events", create_event_router(state.clone()))
        .nest("/parties", create_party_router(state.clone()))
        .route("/gear", get(gear::list_gear))
        .route(
            "/gear",
            post(gear::create_gear_item).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route("/health", get(health::health_handler))
        .with_state(state)
}

/// Create guild router; reads are public, writes require auth
fn create_guild_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(guilds::list_guilds))
        .route(
            "/",
            post(guilds::create_guild).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route("/:guildId", get(guilds::get_guild))
        .route(
            "/:guildId",
            patch(guilds::update_guild).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route(
            "/:guildId",
            delete(guilds::delete_guild).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .with_state(state)
}

/// Create player router
fn create_player_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(players::list_players))
        .route(
            "/",
            post(players::create_player).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route("/:playerId", get(players::get_player))
        .route(
            "/:playerId",
            patch(players::update_player).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route(
            "/:playerId",
            delete(players::delete_player).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route(
            "/:playerId/role",
            post(players::set_player_role).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route(
            "/:playerId/gear",
            post(players::grant_gear).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route(
            "/:playerId/gear/:gearItemId",
            put(players::set_gear_equipped).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route("/:playerId/loadout", get(players::get_loadout))
        .with_state(state)
}

/// Create event router
fn create_event_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(events::list_events))
        .route(
            "/",
            post(events::create_event).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route("/:eventId", get(events::get_event))
        .route(
            "/:eventId",
            delete(events::delete_event).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route(
            "/:eventId/participants",
            post(events::register_participant).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route(
            "/:eventId/participants/:participantId",
            delete(events::remove_participant).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route("/:eventId/composition", get(events::get_composition))
        .route(
            "/:eventId/composition",
            put(events::set_composition).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route(
            "/:eventId/parties/fill",
            post(events::fill_parties).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route("/:eventId/parties", get(events::list_parties))
        .with_state(state)
}

/// Create party router
fn create_party_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/:partyId/leader",
            post(parties::set_leader).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .route(
            "/:partyId/move",
            post(parties::move_member).layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .with_state(state)
}
