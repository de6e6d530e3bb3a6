//! In-process implementations of the catalog and list store.
//!
//! Used by the `memory` storage backend and by tests. The list store applies the
//! same uniqueness rule and ordering as the `my_list` table.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{catalog::ContentCatalog, list_store::ListStore, list_store::DUPLICATE_ENTRY_MESSAGE};
use crate::{
    error::{AppError, AppResult},
    models::{ListEntry, Movie, TvShow},
};

#[derive(Default)]
pub struct InMemoryCatalog {
    movies: RwLock<HashMap<String, Movie>>,
    shows: RwLock<HashMap<String, TvShow>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(movies: Vec<Movie>, shows: Vec<TvShow>) -> Self {
        Self {
            movies: RwLock::new(movies.into_iter().map(|m| (m.id.clone(), m)).collect()),
            shows: RwLock::new(shows.into_iter().map(|s| (s.id.clone(), s)).collect()),
        }
    }

    pub async fn insert_movie(&self, movie: Movie) {
        self.movies.write().await.insert(movie.id.clone(), movie);
    }

    pub async fn insert_show(&self, show: TvShow) {
        self.shows.write().await.insert(show.id.clone(), show);
    }

    /// Drops a movie or show with this id, returning whether anything was removed
    pub async fn remove(&self, id: &str) -> bool {
        let movie = self.movies.write().await.remove(id).is_some();
        let show = self.shows.write().await.remove(id).is_some();
        movie || show
    }
}

#[async_trait]
impl ContentCatalog for InMemoryCatalog {
    async fn find_movie(&self, id: &str) -> AppResult<Option<Movie>> {
        Ok(self.movies.read().await.get(id).cloned())
    }

    async fn find_show(&self, id: &str) -> AppResult<Option<TvShow>> {
        Ok(self.shows.read().await.get(id).cloned())
    }
}

/// Entries keyed by `(user_id, content_id)`
#[derive(Default)]
pub struct InMemoryListStore {
    entries: RwLock<HashMap<(String, String), ListEntry>>,
}

impl InMemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl ListStore for InMemoryListStore {
    async fn insert(&self, entry: ListEntry) -> AppResult<ListEntry> {
        let mut entries = self.entries.write().await;
        let key = (entry.user_id.clone(), entry.content_id.clone());

        if entries.contains_key(&key) {
            return Err(AppError::Conflict(DUPLICATE_ENTRY_MESSAGE.to_string()));
        }

        entries.insert(key, entry.clone());
        Ok(entry)
    }

    async fn delete(&self, user_id: &str, content_id: &str) -> AppResult<bool> {
        let key = (user_id.to_string(), content_id.to_string());
        Ok(self.entries.write().await.remove(&key).is_some())
    }

    async fn find_one(&self, user_id: &str, content_id: &str) -> AppResult<Option<ListEntry>> {
        let key = (user_id.to_string(), content_id.to_string());
        Ok(self.entries.read().await.get(&key).cloned())
    }

    async fn find_page(
        &self,
        user_id: &str,
        skip: u64,
        take: u32,
    ) -> AppResult<(Vec<ListEntry>, u64)> {
        let entries = self.entries.read().await;

        let mut matching: Vec<&ListEntry> = entries
            .values()
            .filter(|entry| entry.user_id == user_id)
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let total = matching.len() as u64;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let page = matching
            .into_iter()
            .skip(skip)
            .take(take as usize)
            .cloned()
            .collect();

        Ok((page, total))
    }
}
