// Copyright 2026 Samvidha Gateway Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP REST API for the gateway.
//!
//! Every endpoint speaks JSON. The login endpoint trades portal credentials
//! for a bearer token; the data endpoints resolve that token to a held
//! portal session, fetch the page, and run the matching extractor. Handlers
//! return [`GatewayError`] and let it render the uniform failure body.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::broker::{token, Broker, MemoryStore, SessionEntry};
use crate::config::Config;
use crate::error::GatewayError;
use crate::portal::PortalClient;
use crate::scrape::{attendance, midmarks, profile, Extraction};

/// State shared by every handler.
pub struct AppState {
    pub broker: Broker,
    pub started_at: Instant,
}

impl AppState {
    /// Wire up a broker against the configured portal with an in-memory
    /// session store.
    pub fn new(config: &Config) -> Self {
        let client = PortalClient::new(config.portal_url.clone(), config.upstream_timeout);
        Self {
            broker: Broker::new(client, Arc::new(MemoryStore::new())),
            started_at: Instant::now(),
        }
    }
}

/// Build the axum Router with all endpoints.
///
/// Callers are browser pages and scripts on arbitrary origins, so CORS stays
/// wide open.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/login", post(handle_login))
        .route("/attendance", get(handle_attendance))
        .route("/midmarks", get(handle_midmarks))
        .route("/profile", get(handle_profile))
        .route("/all", get(handle_all))
        .layer(cors)
        .with_state(state)
}

/// Start the API server on the given address and serve until the task is
/// dropped or the listener fails.
pub async fn start(bind: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    tracing::info!("gateway listening on http://{bind}");

    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────

/// Resolve the caller's bearer token to its held session.
async fn resolve(state: &AppState, headers: &HeaderMap) -> Result<SessionEntry, GatewayError> {
    let bearer = token::from_headers(headers)?;
    state.broker.resolve(bearer).await
}

/// Attendance rows for the response body, logging an extraction miss.
fn attendance_payload(extraction: Extraction) -> Value {
    if extraction.is_missing() {
        warn!("attendance table missing from portal page");
    }
    json!(extraction.into_rows())
}

/// Theory and laboratory rows for the response body, logging misses per side.
fn midmarks_payload(marks: midmarks::MidMarks) -> Value {
    if marks.theory.is_missing() {
        warn!("theory marks table missing from portal page");
    }
    if marks.laboratory.is_missing() {
        warn!("laboratory marks table missing from portal page");
    }
    json!({
        "theory": marks.theory.into_rows(),
        "laboratory": marks.laboratory.into_rows(),
    })
}

/// Profile mapping for the response body, logging when no pair was found.
fn profile_payload(pairs: BTreeMap<String, String>) -> Value {
    if pairs.is_empty() {
        warn!("no profile fields found in portal page");
    }
    json!(pairs)
}

// ── Handlers ────────────────────────────────────────────────────

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "Samvidha gateway is running",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": state.started_at.elapsed().as_secs_f64(),
        "sessions": state.broker.session_count().await,
    }))
}

#[derive(Deserialize, Default)]
struct LoginBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// POST /login: relay credentials to the portal, mint a token on success.
///
/// A missing or non-JSON body is treated the same as absent credentials
/// rather than surfacing the extractor's own rejection shape.
async fn handle_login(
    State(state): State<Arc<AppState>>,
    body: Option<Json<LoginBody>>,
) -> Result<Json<Value>, GatewayError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let token = state.broker.login(&body.username, &body.password).await?;
    Ok(Json(json!({ "ok": true, "token": token })))
}

async fn handle_attendance(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, GatewayError> {
    let entry = resolve(&state, &headers).await?;
    let extraction = attendance::scrape(&entry.session).await?;
    Ok(Json(json!({
        "ok": true,
        "attendance": attendance_payload(extraction),
    })))
}

async fn handle_midmarks(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, GatewayError> {
    let entry = resolve(&state, &headers).await?;
    let marks = midmarks::scrape(&entry.session).await?;
    Ok(Json(json!({
        "ok": true,
        "midmarks": midmarks_payload(marks),
    })))
}

async fn handle_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, GatewayError> {
    let entry = resolve(&state, &headers).await?;
    let pairs = profile::scrape(&entry.session).await?;
    Ok(Json(json!({
        "ok": true,
        "profile": profile_payload(pairs),
    })))
}

/// GET /all: the three student views in one round trip.
///
/// Pages are fetched sequentially through the one held session, in the same
/// order they appear in the response. Any fetch failure fails the whole call.
async fn handle_all(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, GatewayError> {
    let entry = resolve(&state, &headers).await?;
    let attendance = attendance::scrape(&entry.session).await?;
    let marks = midmarks::scrape(&entry.session).await?;
    let pairs = profile::scrape(&entry.session).await?;
    Ok(Json(json!({
        "ok": true,
        "attendance": attendance_payload(attendance),
        "midmarks": midmarks_payload(marks),
        "profile": profile_payload(pairs),
    })))
}
