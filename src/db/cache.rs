use std::{fmt::Display, sync::Arc, time::Duration};

use moka::future::Cache;

use crate::models::PageResult;

/// Cache key for one page of a user's list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub user_id: String,
    pub page: u32,
    pub limit: u32,
}

impl PageKey {
    pub fn new(user_id: impl Into<String>, page: u32, limit: u32) -> Self {
        Self {
            user_id: user_id.into(),
            page,
            limit,
        }
    }
}

impl Display for PageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mylist:{}:{}:{}", self.user_id, self.page, self.limit)
    }
}

/// Process-local memo of enriched list pages
///
/// Entries live for a fixed TTL from insertion and the total entry count is
/// bounded; moka picks eviction victims once the bound is hit.
#[derive(Clone)]
pub struct ResultCache {
    pages: Cache<PageKey, Arc<PageResult>>,
}

impl ResultCache {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let pages = Cache::builder()
            .name("mylist-pages")
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .support_invalidation_closures()
            .build();

        Self { pages }
    }

    pub async fn get(&self, key: &PageKey) -> Option<Arc<PageResult>> {
        self.pages.get(key).await
    }

    pub async fn set(&self, key: PageKey, value: Arc<PageResult>) {
        self.pages.insert(key, value).await;
    }

    /// Drops every cached page of `user_id`, whatever its page/limit
    ///
    /// Matches on the key's user field rather than a string prefix, so ids that
    /// share a prefix ("u1", "u10") do not disturb each other.
    pub fn invalidate_user(&self, user_id: &str) {
        let user = user_id.to_string();
        if let Err(e) = self
            .pages
            .invalidate_entries_if(move |key, _| key.user_id == user)
        {
            tracing::warn!(error = %e, user_id = %user_id, "Predicate invalidation failed, clearing cache");
            self.pages.invalidate_all();
        }
    }

    /// Number of live entries after pending maintenance has run
    pub async fn entry_count(&self) -> u64 {
        self.pages.run_pending_tasks().await;
        self.pages.entry_count()
    }
}
