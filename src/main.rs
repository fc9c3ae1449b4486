//! Link Feed Service — Binary Entrypoint
//! Boots the Axum HTTP server: loads config, hydrates the feed snapshot from
//! the remote store, wires routes, shared state, and middleware.

use std::sync::Arc;

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use daocamp_feed::admin::AdminAuth;
use daocamp_feed::api::{self, AppState};
use daocamp_feed::config::AppConfig;
use daocamp_feed::context::SessionContext;
use daocamp_feed::hydrate;
use daocamp_feed::metrics::Metrics;
use daocamp_feed::store::document::ThreadStoreClient;
use daocamp_feed::store::relational::RestStore;
use daocamp_feed::wallet::WalletHandle;

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - FEED_DEV_LOG=1
fn enable_dev_tracing() {
    let dev_flag = std::env::var("FEED_DEV_LOG").ok().is_some_and(|v| v == "1");

    let is_dev_env = cfg!(debug_assertions)
        || matches!(
            std::env::var("SHUTTLE_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        );

    if !(dev_flag && is_dev_env) {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("daocamp_feed=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    // Initialize dev tracing early (no-op in production).
    enable_dev_tracing();

    let config = AppConfig::from_env();
    let metrics = Metrics::init();

    // Hydrate exactly once, before the router starts serving. A store outage
    // degrades to an empty feed rather than a failed boot.
    let relational = RestStore::new(&config.feed_store_url, &config.feed_store_api_key);
    let snapshot = hydrate::load_initial_state(&relational).await;

    let session = SessionContext::new(WalletHandle::new());
    let document = ThreadStoreClient::new(
        &config.thread_store_url,
        &config.thread_api_key,
        &config.thread_api_secret,
    );

    let state = AppState {
        snapshot: Arc::new(snapshot),
        session,
        document: Arc::new(document),
        admin: AdminAuth {
            bearer_token: config.admin_bearer_token.clone(),
            thread_db_id: config.thread_db_id.clone(),
        },
    };

    let router = api::router(state).merge(metrics.router());

    Ok(router.into())
}
