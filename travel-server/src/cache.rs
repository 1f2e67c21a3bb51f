//! Caching layer for shaped search results.
//!
//! Recent searches are frequently re-run (the UI offers them one tap
//! away), so shaped result lists are cached per normalized query for a
//! short TTL. `get_with` also coalesces concurrent fetches for the same
//! query, so a cache miss costs at most one webhook round trip.
//!
//! Cached entries always carry `is_saved = false`; saved-state merging
//! happens above the cache, keeping the replace-wholesale lifecycle of
//! result lists intact.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::Journey;
use crate::webhook::{WebhookClient, shape_results};

/// Configuration for the result cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached queries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 256,
        }
    }
}

/// Webhook client with per-query result caching.
///
/// Wraps a [`WebhookClient`] and caches the shaped journey list keyed by
/// the trimmed query string. Inherits the client's fail-open behavior: a
/// failed round trip caches the shaped fallback like any other result.
pub struct CachedSearchClient {
    client: WebhookClient,
    cache: MokaCache<String, Arc<Vec<Journey>>>,
}

impl CachedSearchClient {
    /// Create a new cached client.
    pub fn new(client: WebhookClient, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, cache }
    }

    /// Fetch and shape results for a query, using the cache if possible.
    pub async fn search(&self, query: &str) -> Arc<Vec<Journey>> {
        let key = query.trim().to_string();

        self.cache
            .get_with(key, async {
                let raw = self.client.search(query).await;
                Arc::new(shape_results(&raw))
            })
            .await
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &WebhookClient {
        &self.client
    }

    /// Number of cached queries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Drop all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}
