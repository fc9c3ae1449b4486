//! feed.rs — data model for the link feed: posts, upvotes, and the boot-time
//! snapshot the server ranks on every read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One submitted link, as stored in the remote `Posts` collection.
/// The service holds a read-only copy; the remote store owns the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub submission_date: DateTime<Utc>,
    pub number_of_upvotes: i64,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_text: Option<String>,
}

/// One vote by a wallet on a post, from the remote `Upvotes` collection.
/// Kept as raw rows next to the posts; folding them into
/// `Post::number_of_upvotes` is the submission pipeline's job, not ours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upvote {
    pub id: i64,
    pub post_id: i64,
    pub wallet_address: String,
}

/// Everything hydration loaded, handed to the router exactly once at boot.
/// Replaced wholesale or not at all; nothing patches it afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedSnapshot {
    pub posts: Vec<Post>,
    pub upvotes: Vec<Upvote>,
}

impl FeedSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }
}
