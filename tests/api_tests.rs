//! API integration tests.
//!
//! Each test builds a fresh app over an in-memory database and drives it
//! through the HTTP surface only.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::{Service, ServiceExt};

use guildtools_backend::api;
use guildtools_backend::infrastructure::app_state::AppState;

/// Helper to create a test application
async fn create_test_app() -> Router {
    // Set test environment
    std::env::set_var("DATABASE_URL", "sqlite::memory:");
    std::env::set_var("JWT_SECRET", "test-secret-key");

    let state = AppState::new().await.expect("Failed to create app state");
    let state = Arc::new(state);

    Router::new()
        .nest("/api", api::routes::create_api_router(state.clone()))
        .with_state(state)
}

async fn send(app: &mut Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = ServiceExt::<Request<Body>>::ready(app)
        .await
        .unwrap()
        .call(request)
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, json)
}

fn json_request(method: &str, path: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

async fn post_json(app: &mut Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(app, json_request("POST", path, &body, None)).await
}

async fn post_json_auth(
    app: &mut Router,
    path: &str,
    body: Value,
    token: &str,
) -> (StatusCode, Value) {
    send(app, json_request("POST", path, &body, Some(token))).await
}

async fn put_json_auth(
    app: &mut Router,
    path: &str,
    body: Value,
    token: &str,
) -> (StatusCode, Value) {
    send(app, json_request("PUT", path, &body, Some(token))).await
}

async fn get_json(app: &mut Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Register a user and return a bearer token
async fn auth_token(app: &mut Router) -> String {
    let (status, body) = post_json(
        app,
        "/api/auth/register",
        json!({"username": "operator", "password": "secret1"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["token"].as_str().unwrap().to_string()
}

/// Create an event and return its id
async fn create_event(app: &mut Router, token: &str, name: &str) -> String {
    let (status, body) = post_json_auth(
        app,
        "/api/events",
        json!({"name": name, "eventTime": 1893456000}),
        token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["event"]["id"].as_str().unwrap().to_string()
}

/// Register a free-form participant
async fn add_participant(
    app: &mut Router,
    token: &str,
    event_id: &str,
    name: &str,
    role: &str,
    guild_id: Option<&str>,
) {
    let mut body = json!({"displayName": name, "role": role});
    if let Some(guild_id) = guild_id {
        body["guildId"] = json!(guild_id);
    }
    let (status, _) = post_json_auth(
        app,
        &format!("/api/events/{}/participants", event_id),
        body,
        token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health() {
    let mut app = create_test_app().await;

    let (status, body) = get_json(&mut app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_register_missing_credentials() {
    let mut app = create_test_app().await;

    let (status, body) = post_json(&mut app, "/api/auth/register", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_CREDENTIALS");
    assert_eq!(body["error"], "Username and password are required");

    let (status, body) = post_json(
        &mut app,
        "/api/auth/register",
        json!({"username": "solo"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_CREDENTIALS");
}

#[tokio::test]
async fn test_register_and_login() {
    let mut app = create_test_app().await;

    let (status, body) = post_json(
        &mut app,
        "/api/auth/register",
        json!({"username": "raidlead", "password": "secret1"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["username"], "raidlead");
    assert!(body["token"].as_str().is_some());

    // Duplicate username is rejected
    let (status, body) = post_json(
        &mut app,
        "/api/auth/register",
        json!({"username": "raidlead", "password": "other12"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "USERNAME_EXISTS");

    let (status, body) = post_json(
        &mut app,
        "/api/auth/login",
        json!({"username": "raidlead", "password": "secret1"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some());

    let (status, body) = post_json(
        &mut app,
        "/api/auth/login",
        json!({"username": "raidlead", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
}

// ============================================================================
// Guilds
// ============================================================================

#[tokio::test]
async fn test_guild_write_requires_auth() {
    let mut app = create_test_app().await;

    let request = json_request("POST", "/api/guilds", &json!({"name": "Night Watch"}), None);
    let (status, _) = send(&mut app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_guild_crud() {
    let mut app = create_test_app().await;
    let token = auth_token(&mut app).await;

    let (status, body) = post_json_auth(
        &mut app,
        "/api/guilds",
        json!({"name": "Night Watch", "faction": "emberwild"}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let guild_id = body["guild"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["guild"]["faction"], "emberwild");

    // Duplicate name
    let (status, body) = post_json_auth(
        &mut app,
        "/api/guilds",
        json!({"name": "Night Watch"}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "GUILD_NAME_EXISTS");

    let (status, body) = get_json(&mut app, "/api/guilds").await;
    assert_eq!(status, StatusCode::OK);
    let guilds = body["guilds"].as_array().unwrap();
    assert_eq!(guilds.len(), 1);
    assert_eq!(guilds[0]["memberCount"], 0);

    let request = json_request(
        "PATCH",
        &format!("/api/guilds/{}", guild_id),
        &json!({"description": "night shift crew"}),
        Some(&token),
    );
    let (status, body) = send(&mut app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["guild"]["description"], "night shift crew");

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/guilds/{}", guild_id))
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&mut app, request).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get_json(&mut app, &format!("/api/guilds/{}", guild_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Players
// ============================================================================

#[tokio::test]
async fn test_player_role_synonyms() {
    let mut app = create_test_app().await;
    let token = auth_token(&mut app).await;

    let (status, body) = post_json_auth(
        &mut app,
        "/api/players",
        json!({"inGameName": "Shadowfen", "gameRole": "Tank"}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let player_id = body["player"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["player"]["gameRole"], "defensive_tank");

    let (status, body) = post_json_auth(
        &mut app,
        &format!("/api/players/{}/role", player_id),
        json!({"role": "dps"}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player"]["gameRole"], "ranged_dps");

    // Unrecognized strings land on unknown instead of failing
    let (status, body) = post_json_auth(
        &mut app,
        &format!("/api/players/{}/role", player_id),
        json!({"role": "taxi driver"}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player"]["gameRole"], "unknown");
}

#[tokio::test]
async fn test_player_guild_filter() {
    let mut app = create_test_app().await;
    let token = auth_token(&mut app).await;

    let (_, body) = post_json_auth(&mut app, "/api/guilds", json!({"name": "Alpha"}), &token).await;
    let guild_id = body["guild"]["id"].as_str().unwrap().to_string();

    for (name, in_guild) in [("Kest", true), ("Mara", true), ("Orin", false)] {
        let mut req = json!({"inGameName": name});
        if in_guild {
            req["guildId"] = json!(guild_id);
        }
        let (status, _) = post_json_auth(&mut app, "/api/players", req, &token).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get_json(&mut app, &format!("/api/players?guildId={}", guild_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["players"].as_array().unwrap().len(), 2);

    let (status, body) = get_json(&mut app, "/api/players").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["players"].as_array().unwrap().len(), 3);
}

// ============================================================================
// Gear
// ============================================================================

#[tokio::test]
async fn test_gear_catalog_and_loadout() {
    let mut app = create_test_app().await;
    let token = auth_token(&mut app).await;

    let (status, body) = post_json_auth(&mut app, "/api/players", json!({"inGameName": "Kest"}), &token).await;
    assert_eq!(status, StatusCode::CREATED);
    let player_id = body["player"]["id"].as_str().unwrap().to_string();

    // Tier II common: flat 40 power at item level 1
    let (status, body) = post_json_auth(
        &mut app,
        "/api/gear",
        json!({"baseName": "Energizer Boots", "skillName": "Vitality", "category": "armor", "tier": 2}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let boots_id = body["item"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["item"]["name"], "Energizer Boots (Vitality)");
    assert_eq!(body["item"]["power"], 40);

    // Tier IV rare at level 5: 90 + 12 + 2*4
    let (status, body) = post_json_auth(
        &mut app,
        "/api/gear",
        json!({"baseName": "Storm Halberd", "category": "weapon", "tier": 4, "rarity": "rare", "itemLevel": 5}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let halberd_id = body["item"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["item"]["power"], 110);

    let (status, body) = post_json_auth(
        &mut app,
        "/api/gear",
        json!({"baseName": "Fancy Hat", "category": "hat", "tier": 1}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = get_json(&mut app, "/api/gear").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);

    let (status, body) = get_json(&mut app, "/api/gear?category=weapon").await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], halberd_id.as_str());

    // Grant both items; only the equipped one counts toward total power
    let (status, body) = post_json_auth(
        &mut app,
        &format!("/api/players/{}/gear", player_id),
        json!({"gearItemId": boots_id, "equipped": true}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["power"], 40);

    let (status, _) = post_json_auth(
        &mut app,
        &format!("/api/players/{}/gear", player_id),
        json!({"gearItemId": halberd_id}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get_json(&mut app, &format!("/api/players/{}/loadout", player_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["totalPower"], 40);

    // Equipping the halberd raises the total
    let (status, _) = put_json_auth(
        &mut app,
        &format!("/api/players/{}/gear/{}", player_id, halberd_id),
        json!({"equipped": true}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get_json(&mut app, &format!("/api/players/{}/loadout", player_id)).await;
    assert_eq!(body["totalPower"], 150);

    // Equip state only applies to owned items
    let (status, body) = put_json_auth(
        &mut app,
        &format!("/api/players/{}/gear/{}", player_id, "no-such-item"),
        json!({"equipped": true}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "GEAR_NOT_OWNED");

    let (status, body) = post_json_auth(
        &mut app,
        "/api/players/no-such-player/gear",
        json!({"gearItemId": boots_id}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PLAYER_NOT_FOUND");
}

// ============================================================================
// Events and party assignment
// ============================================================================

#[tokio::test]
async fn test_participant_role_normalized() {
    let mut app = create_test_app().await;
    let token = auth_token(&mut app).await;
    let event_id = create_event(&mut app, &token, "Siege Night").await;

    let (status, body) = post_json_auth(
        &mut app,
        &format!("/api/events/{}/participants", event_id),
        json!({"displayName": "Walk-in", "role": "dps"}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["participant"]["role"], "ranged_dps");
}

#[tokio::test]
async fn test_composition_roundtrip() {
    let mut app = create_test_app().await;
    let token = auth_token(&mut app).await;
    let event_id = create_event(&mut app, &token, "Siege Night").await;

    // Default composition is reported before anything is stored
    let (status, body) = get_json(&mut app, &format!("/api/events/{}/composition", event_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stored"], false);
    assert_eq!(body["requirements"]["healer"], 2);

    let (status, body) = put_json_auth(
        &mut app,
        &format!("/api/events/{}/composition", event_id),
        json!({"requirements": {"tank": 2, "healer": 1}, "guildSplit": true}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // Synonym keys are normalized on the way in
    assert_eq!(body["requirements"]["defensive_tank"], 2);
    assert_eq!(body["requirements"]["healer"], 1);

    let (status, body) = get_json(&mut app, &format!("/api/events/{}/composition", event_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stored"], true);
    assert_eq!(body["guildSplit"], true);

    let (status, body) = put_json_auth(
        &mut app,
        &format!("/api/events/{}/composition", event_id),
        json!({"requirements": {"bard": 1}}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_ROLE");
}

#[tokio::test]
async fn test_composition_rejects_totals_above_capacity() {
    let mut app = create_test_app().await;
    let token = auth_token(&mut app).await;
    let event_id = create_event(&mut app, &token, "Siege Night").await;

    let (status, body) = put_json_auth(
        &mut app,
        &format!("/api/events/{}/composition", event_id),
        json!({"requirements": {"healer": 10, "tank": 6}}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_fill_parties_too_few_participants() {
    let mut app = create_test_app().await;
    let token = auth_token(&mut app).await;
    let event_id = create_event(&mut app, &token, "Empty Night").await;

    add_participant(&mut app, &token, &event_id, "Solo", "healer", None).await;

    let (status, body) = post_json_auth(
        &mut app,
        &format!("/api/events/{}/parties/fill", event_id),
        json!({}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "NOT_ENOUGH_PARTICIPANTS");
}

#[tokio::test]
async fn test_fill_parties_consolidates_and_keeps_one_leader() {
    let mut app = create_test_app().await;
    let token = auth_token(&mut app).await;
    let event_id = create_event(&mut app, &token, "Siege Night").await;

    for name in ["Hela", "Hestia", "Hilda"] {
        add_participant(&mut app, &token, &event_id, name, "healer", None).await;
    }
    add_participant(&mut app, &token, &event_id, "Brak", "melee", None).await;

    let (status, body) = post_json_auth(
        &mut app,
        &format!("/api/events/{}/parties/fill", event_id),
        json!({"requirements": {"healer": 1}}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["membersAssigned"], 4);
    // Three single-healer parties collapse into one after consolidation
    assert_eq!(body["summary"]["partiesCreated"], 3);
    assert_eq!(body["summary"]["partiesRemoved"], 2);

    let (status, body) = get_json(&mut app, &format!("/api/events/{}/parties", event_id)).await;
    assert_eq!(status, StatusCode::OK);
    let parties = body["parties"].as_array().unwrap();
    assert_eq!(parties.len(), 1);
    let members = parties[0]["members"].as_array().unwrap();
    assert_eq!(members.len(), 4);
    let leaders = members.iter().filter(|m| m["isLeader"] == true).count();
    assert_eq!(leaders, 1);
    assert!(members.iter().all(|m| m["displayName"].as_str().unwrap() != ""));
}

#[tokio::test]
async fn test_fill_parties_is_a_full_reset() {
    let mut app = create_test_app().await;
    let token = auth_token(&mut app).await;
    let event_id = create_event(&mut app, &token, "Siege Night").await;

    for name in ["Hela", "Hestia", "Brak", "Drel"] {
        add_participant(&mut app, &token, &event_id, name, "healer", None).await;
    }

    let fill_path = format!("/api/events/{}/parties/fill", event_id);
    let (status, _) = post_json_auth(&mut app, &fill_path, json!({"requirements": {"healer": 1}}), &token).await;
    assert_eq!(status, StatusCode::OK);

    let (_, first) = get_json(&mut app, &format!("/api/events/{}/parties", event_id)).await;
    let first_ids: Vec<String> = first["parties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect();

    // Second run replaces the previous plan wholesale
    let (status, _) = post_json_auth(&mut app, &fill_path, json!({"requirements": {"healer": 1}}), &token).await;
    assert_eq!(status, StatusCode::OK);

    let (_, second) = get_json(&mut app, &format!("/api/events/{}/parties", event_id)).await;
    let second_parties = second["parties"].as_array().unwrap();
    assert_eq!(second_parties.len(), 1);
    for p in second_parties {
        assert!(!first_ids.contains(&p["id"].as_str().unwrap().to_string()));
    }
}

#[tokio::test]
async fn test_fill_parties_guild_split_skips_small_buckets() {
    let mut app = create_test_app().await;
    let token = auth_token(&mut app).await;
    let event_id = create_event(&mut app, &token, "Siege Night").await;

    for (name, role) in [("Hela", "healer"), ("Hestia", "healer"), ("Brak", "melee"), ("Drel", "melee")] {
        add_participant(&mut app, &token, &event_id, name, role, Some("guild-a")).await;
    }
    // A lone participant from another guild cannot form a party
    add_participant(&mut app, &token, &event_id, "Lone", "healer", Some("guild-b")).await;

    let (status, body) = post_json_auth(
        &mut app,
        &format!("/api/events/{}/parties/fill", event_id),
        json!({"requirements": {"healer": 1}, "guildSplit": true}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["membersAssigned"], 4);
    let skipped = body["summary"]["skippedGuilds"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["guildId"], "guild-b");
}

#[tokio::test]
async fn test_set_party_leader() {
    let mut app = create_test_app().await;
    let token = auth_token(&mut app).await;
    let event_id = create_event(&mut app, &token, "Siege Night").await;

    for name in ["Hela", "Hestia", "Brak", "Drel"] {
        add_participant(&mut app, &token, &event_id, name, "healer", None).await;
    }

    // Two parties of two, consolidated into a single party of four
    let (status, _) = post_json_auth(
        &mut app,
        &format!("/api/events/{}/parties/fill", event_id),
        json!({"requirements": {"healer": 2}}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get_json(&mut app, &format!("/api/events/{}/parties", event_id)).await;
    let parties = body["parties"].as_array().unwrap();
    assert_eq!(parties.len(), 1);
    let members = parties[0]["members"].as_array().unwrap();
    assert_eq!(members.len(), 4);

    let party_id = parties[0]["id"].as_str().unwrap().to_string();
    let follower = members.iter().find(|m| m["isLeader"] == false).unwrap();
    let follower_id = follower["participantId"].as_str().unwrap().to_string();

    let (status, _) = post_json_auth(
        &mut app,
        &format!("/api/parties/{}/leader", party_id),
        json!({"participantId": follower_id}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get_json(&mut app, &format!("/api/events/{}/parties", event_id)).await;
    let members = body["parties"][0]["members"].as_array().unwrap();
    let leaders: Vec<_> = members.iter().filter(|m| m["isLeader"] == true).collect();
    assert_eq!(leaders.len(), 1);
    assert_eq!(leaders[0]["participantId"], follower_id.as_str());
}

#[tokio::test]
async fn test_move_member_between_parties() {
    let mut app = create_test_app().await;
    let token = auth_token(&mut app).await;
    let event_id = create_event(&mut app, &token, "Siege Night").await;

    // 17 healers at one required healer per party: consolidation packs a full
    // party of 15 and leaves a second party with the remaining 2.
    for i in 0..17 {
        add_participant(&mut app, &token, &event_id, &format!("Healer{}", i), "healer", None).await;
    }

    let (status, _) = post_json_auth(
        &mut app,
        &format!("/api/events/{}/parties/fill", event_id),
        json!({"requirements": {"healer": 1}}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get_json(&mut app, &format!("/api/events/{}/parties", event_id)).await;
    let parties = body["parties"].as_array().unwrap();
    assert_eq!(parties.len(), 2);

    let full = parties
        .iter()
        .find(|p| p["members"].as_array().unwrap().len() == 15)
        .unwrap();
    let small = parties
        .iter()
        .find(|p| p["members"].as_array().unwrap().len() == 2)
        .unwrap();
    let small_id = small["id"].as_str().unwrap().to_string();

    let full_members = full["members"].as_array().unwrap();
    let follower = full_members.iter().find(|m| m["isLeader"] == false).unwrap();
    let membership_id = follower["membershipId"].as_i64().unwrap();

    let (status, body) = post_json_auth(
        &mut app,
        &format!("/api/parties/{}/move", small_id),
        json!({"membershipId": membership_id}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = get_json(&mut app, &format!("/api/events/{}/parties", event_id)).await;
    let sizes: Vec<usize> = body["parties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["members"].as_array().unwrap().len())
        .collect();
    assert!(sizes.contains(&14));
    assert!(sizes.contains(&3));

    // Leaders stay put until leadership is transferred
    let parties = body["parties"].as_array().unwrap();
    let big = parties
        .iter()
        .find(|p| p["members"].as_array().unwrap().len() == 14)
        .unwrap();
    let leader = big["members"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["isLeader"] == true)
        .unwrap();
    let leader_membership = leader["membershipId"].as_i64().unwrap();

    let (status, body) = post_json_auth(
        &mut app,
        &format!("/api/parties/{}/move", small_id),
        json!({"membershipId": leader_membership}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "LEADER_CANNOT_MOVE");
}
