//! admin.rs — the privileged delete endpoint.
//!
//! `POST /api/delete` with the admin bearer credential destroys the backing
//! thread database. There is no scoping beyond the bearer check: a valid
//! token deletes the one configured database, full stop. Treat the
//! credential accordingly.

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics::counter;
use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::{error, info, warn};

use crate::api::AppState;

/// Credential and target for the delete endpoint, injected into the router.
#[derive(Clone)]
pub struct AdminAuth {
    /// `None` fails closed: every caller is rejected until a token is set.
    pub bearer_token: Option<String>,
    pub thread_db_id: String,
}

/// Exact-match comparison over SHA-256 digests so the check does not
/// short-circuit on the first differing byte of the secret.
fn credential_matches(presented: &str, expected: &str) -> bool {
    let a = Sha256::digest(presented.as_bytes());
    let b = Sha256::digest(expected.as_bytes());
    a == b
}

/// Registered with `any()` so non-POST methods get the 405 contract
/// (`Allow: POST`, plain-text body) rather than the framework default.
pub async fn handle_delete(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    if method != Method::POST {
        counter!("admin_delete_total", "outcome" => "method_not_allowed").increment(1);
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "POST")],
            "Method Not Allowed",
        )
            .into_response();
    }

    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let authorized = match state.admin.bearer_token.as_deref() {
        Some(token) => credential_matches(presented, &format!("Bearer {token}")),
        None => {
            warn!("admin bearer token is not configured, rejecting delete request");
            false
        }
    };

    if !authorized {
        counter!("admin_delete_total", "outcome" => "unauthorized").increment(1);
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "message": "Unauthorized access" })),
        )
            .into_response();
    }

    match state.document.delete_db(&state.admin.thread_db_id).await {
        Ok(()) => {
            info!(db_id = %state.admin.thread_db_id, "thread database deleted");
            counter!("admin_delete_total", "outcome" => "deleted").increment(1);
            (StatusCode::OK, Json(json!({ "status": "success" }))).into_response()
        }
        Err(err) => {
            error!(error = ?err, db_id = %state.admin.thread_db_id, "thread database delete failed");
            counter!("admin_delete_total", "outcome" => "error").increment(1);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "statusCode": 500, "message": err.to_string() })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_match_is_exact() {
        assert!(credential_matches("Bearer abc", "Bearer abc"));
        assert!(!credential_matches("Bearer abc", "Bearer abd"));
        assert!(!credential_matches("Bearer abc", "Bearer abc "));
        assert!(!credential_matches("", "Bearer abc"));
        // An empty expected credential never happens in the handler (unset
        // tokens fail closed before comparing), but the helper itself still
        // treats it as a plain string.
        assert!(credential_matches("", ""));
    }
}
