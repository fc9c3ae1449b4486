//! config.rs — environment-derived settings for the store clients and the
//! privileged delete endpoint. Loaded once at boot, after `dotenvy`.

// --- env names ---
pub const ENV_FEED_STORE_URL: &str = "FEED_STORE_URL";
pub const ENV_FEED_STORE_API_KEY: &str = "FEED_STORE_API_KEY";
pub const ENV_THREAD_STORE_URL: &str = "THREAD_STORE_URL";
pub const ENV_THREAD_API_KEY: &str = "THREAD_API_KEY";
pub const ENV_THREAD_API_SECRET: &str = "THREAD_API_SECRET";
pub const ENV_ADMIN_BEARER_TOKEN: &str = "ADMIN_BEARER_TOKEN";
pub const ENV_THREAD_DB_ID: &str = "THREAD_DB_ID";

/// The one thread database the delete endpoint is allowed to destroy.
pub const DEFAULT_THREAD_DB_ID: &str = "bafk4qpsgjpgr2ervkjaqtaultkwwytrfvruqrdrpzgnhgs2zrfuwk6a";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub feed_store_url: String,
    pub feed_store_api_key: String,
    pub thread_store_url: String,
    pub thread_api_key: String,
    pub thread_api_secret: String,
    /// `None` when unset or blank. The delete endpoint then rejects every
    /// caller instead of degrading to an empty-string match.
    pub admin_bearer_token: Option<String>,
    pub thread_db_id: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            feed_store_url: var_or_default(ENV_FEED_STORE_URL),
            feed_store_api_key: var_or_default(ENV_FEED_STORE_API_KEY),
            thread_store_url: var_or_default(ENV_THREAD_STORE_URL),
            thread_api_key: var_or_default(ENV_THREAD_API_KEY),
            thread_api_secret: var_or_default(ENV_THREAD_API_SECRET),
            admin_bearer_token: non_blank(ENV_ADMIN_BEARER_TOKEN),
            thread_db_id: non_blank(ENV_THREAD_DB_ID)
                .unwrap_or_else(|| DEFAULT_THREAD_DB_ID.to_string()),
        }
    }
}

fn var_or_default(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

/// Reads an env var, treating unset and whitespace-only the same.
fn non_blank(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
