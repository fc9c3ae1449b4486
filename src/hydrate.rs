//! hydrate.rs — one-shot population of the feed snapshot from the remote
//! relational store, run by the entrypoint before the router starts serving.
//!
//! A failed fetch never fails the boot: the affected collection is replaced
//! by an empty one and the page renders an empty feed instead. The two
//! collections fall back independently.

use std::collections::HashSet;

use metrics::counter;
use tracing::warn;

use crate::feed::FeedSnapshot;
use crate::store::relational::RelationalStore;

pub async fn load_initial_state(store: &dyn RelationalStore) -> FeedSnapshot {
    let posts = match store.fetch_posts().await {
        Ok(rows) => rows,
        Err(err) => {
            warn!(error = ?err, collection = "Posts", "hydration fetch failed, serving an empty collection");
            counter!("hydrate_errors_total", "collection" => "Posts").increment(1);
            Vec::new()
        }
    };
    let upvotes = match store.fetch_upvotes().await {
        Ok(rows) => rows,
        Err(err) => {
            warn!(error = ?err, collection = "Upvotes", "hydration fetch failed, serving an empty collection");
            counter!("hydrate_errors_total", "collection" => "Upvotes").increment(1);
            Vec::new()
        }
    };

    // Post ids are unique within a snapshot; a duplicate means the store
    // handed us overlapping rows and ranking ties will repeat entries.
    let mut seen = HashSet::with_capacity(posts.len());
    for post in &posts {
        if !seen.insert(post.id) {
            warn!(post_id = post.id, "duplicate post id in hydrated snapshot");
        }
    }

    counter!("hydrate_rows_total").increment((posts.len() + upvotes.len()) as u64);
    FeedSnapshot { posts, upvotes }
}
