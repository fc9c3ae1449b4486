use std::sync::Arc;

use shuttle_axum::axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Json, Router,
};
use metrics::counter;
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::actions::{self, Action};
use crate::admin::{self, AdminAuth};
use crate::context::SessionContext;
use crate::feed::{FeedSnapshot, Post};
use crate::ranking::{rank, SortMode};
use crate::store::document::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    /// Hydrated once at boot; read-only from here on.
    pub snapshot: Arc<FeedSnapshot>,
    pub session: SessionContext,
    pub document: Arc<dyn DocumentStore>,
    pub admin: AdminAuth,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/feed", get(feed))
        .route("/api/sort", post(change_sort))
        .route("/api/session", get(session))
        .route("/api/wallet/connect", post(wallet_connect))
        .route("/api/wallet/disconnect", post(wallet_disconnect))
        .route("/api/delete", any(admin::handle_delete))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct FeedQuery {
    /// Per-request override; the stored session preference is untouched.
    #[serde(default)]
    sort: Option<SortMode>,
}

async fn feed(State(state): State<AppState>, Query(q): Query<FeedQuery>) -> Json<Vec<Post>> {
    counter!("feed_requests_total").increment(1);
    let mode = q.sort.unwrap_or_else(|| state.session.sort_mode());
    Json(rank(&state.snapshot.posts, mode))
}

#[derive(serde::Deserialize)]
struct SortChange {
    value: SortMode,
}

#[derive(serde::Serialize)]
struct SortOut {
    value: SortMode,
    text: &'static str,
}

async fn change_sort(State(state): State<AppState>, Json(body): Json<SortChange>) -> Json<SortOut> {
    counter!("sort_changes_total").increment(1);
    state.session.change_sort_mode(body.value);
    Json(SortOut {
        value: body.value,
        text: body.value.label(),
    })
}

#[derive(serde::Serialize)]
struct SessionOut {
    connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ens: Option<String>,
    sort: SortOut,
    actions: Vec<Action>,
}

async fn session(State(state): State<AppState>) -> Json<SessionOut> {
    let cap = state.session.capability();
    let mode = state.session.sort_mode();
    Json(SessionOut {
        connected: cap.is_connected(),
        address: cap.address().map(str::to_string),
        ens: cap.ens().map(str::to_string),
        sort: SortOut {
            value: mode,
            text: mode.label(),
        },
        actions: actions::visible_actions(&cap),
    })
}

#[derive(serde::Deserialize)]
struct ConnectReq {
    address: String,
    #[serde(default)]
    ens: Option<String>,
}

async fn wallet_connect(State(state): State<AppState>, Json(body): Json<ConnectReq>) -> Response {
    match state.session.wallet().connect(&body.address, body.ens) {
        Ok(cap) => Json(cap).into_response(),
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "success": false, "message": err.to_string() })),
        )
            .into_response(),
    }
}

async fn wallet_disconnect(State(state): State<AppState>) -> Response {
    let cap = state.session.wallet().disconnect();
    Json(cap).into_response()
}
