//! Remote relational store: full-table reads of the `Posts` and `Upvotes`
//! collections, no filter, no pagination. Hydration is the only caller.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::feed::{Post, Upvote};

/// Read side of the remote relational store. Tests inject stubs.
#[async_trait]
pub trait RelationalStore: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>>;
    async fn fetch_upvotes(&self) -> Result<Vec<Upvote>>;
}

/// PostgREST-style client: `GET {base}/rest/v1/{table}?select=*` with the
/// project api key on both auth headers.
pub struct RestStore {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn select_all<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>> {
        let url = format!(
            "{}/rest/v1/{}?select=*",
            self.base_url.trim_end_matches('/'),
            table
        );
        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .with_context(|| format!("GET {table}"))?
            .error_for_status()
            .with_context(|| format!("{table} select rejected"))?;
        let rows = resp
            .json::<Vec<T>>()
            .await
            .with_context(|| format!("decoding {table} rows"))?;
        Ok(rows)
    }
}

#[async_trait]
impl RelationalStore for RestStore {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.select_all("Posts").await
    }

    async fn fetch_upvotes(&self) -> Result<Vec<Upvote>> {
        self.select_all("Upvotes").await
    }
}
