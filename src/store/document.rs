//! Remote document store (thread database provider). The only operation this
//! service performs against it is the administrative database delete.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Destructive admin surface of the document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Deletes the named thread database. Irreversible and not idempotent:
    /// one attempt, outcome reported to the caller, no retry here.
    async fn delete_db(&self, db_id: &str) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
}

/// HTTP client for the thread-database provider. Authenticates with the
/// static key/secret pair, then issues the delete with the session token.
pub struct ThreadStoreClient {
    base_url: String,
    api_key: String,
    api_secret: String,
    client: reqwest::Client,
}

impl ThreadStoreClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn auth_token(&self) -> Result<String> {
        let resp = self
            .client
            .post(self.endpoint("auth"))
            .json(&json!({ "key": self.api_key, "secret": self.api_secret }))
            .send()
            .await
            .context("thread store auth request")?
            .error_for_status()
            .context("thread store auth rejected")?;
        let auth = resp
            .json::<AuthResponse>()
            .await
            .context("decoding thread store auth response")?;
        Ok(auth.token)
    }
}

#[async_trait]
impl DocumentStore for ThreadStoreClient {
    async fn delete_db(&self, db_id: &str) -> Result<()> {
        let token = self.auth_token().await?;
        self.client
            .delete(self.endpoint(&format!("dbs/{db_id}")))
            .bearer_auth(token)
            .send()
            .await
            .with_context(|| format!("deleting thread database {db_id}"))?
            .error_for_status()
            .with_context(|| format!("thread database {db_id} delete rejected"))?;
        Ok(())
    }
}
