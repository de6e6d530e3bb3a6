use std::sync::Arc;

use futures::future::try_join_all;

use crate::{
    cached,
    db::{ContentCatalog, ListStore, PageKey, ResultCache},
    error::{AppError, AppResult},
    models::{Content, ContentType, ListEntry, ListItem, PageResult, Pagination},
    validation::{AddToListRequest, ListMyItemsRequest, RemoveFromListRequest, ValidationError},
};

/// Watchlist operations over a list store, a content catalog and a page cache
///
/// Every successful mutation invalidates the user's cached pages before
/// returning, so the next read for that user goes to the store.
pub struct MyListService {
    store: Arc<dyn ListStore>,
    catalog: Arc<dyn ContentCatalog>,
    cache: ResultCache,
}

impl MyListService {
    pub fn new(
        store: Arc<dyn ListStore>,
        catalog: Arc<dyn ContentCatalog>,
        cache: ResultCache,
    ) -> Self {
        Self {
            store,
            catalog,
            cache,
        }
    }

    /// Adds content to a user's list
    ///
    /// Fails with `NotFound` when the catalog has no content of the declared
    /// kind under that id, and with `Conflict` when the user already listed it
    /// (under either kind).
    #[tracing::instrument(skip(self, request), fields(user_id = %request.user_id, content_id = %request.content_id))]
    pub async fn add_to_list(&self, request: AddToListRequest) -> AppResult<ListEntry> {
        let AddToListRequest {
            user_id,
            content_id,
            content_type,
        } = request;

        if self.resolve_content(&content_id, content_type).await?.is_none() {
            let kind = match content_type {
                ContentType::Movie => "Movie",
                ContentType::TvShow => "TV Show",
            };
            return Err(AppError::NotFound(format!(
                "{} with id {} not found",
                kind, content_id
            )));
        }

        if self.store.find_one(&user_id, &content_id).await?.is_some() {
            return Err(AppError::Conflict(
                "Item already exists in your list".to_string(),
            ));
        }

        let entry = self
            .store
            .insert(ListEntry::new(user_id, content_id, content_type))
            .await?;

        self.cache.invalidate_user(&entry.user_id);

        tracing::info!(entry_id = %entry.id, content_type = %entry.content_type, "Added item to list");

        Ok(entry)
    }

    /// Removes content from a user's list; `NotFound` if it was not listed
    #[tracing::instrument(skip(self, request), fields(user_id = %request.user_id, content_id = %request.content_id))]
    pub async fn remove_from_list(&self, request: RemoveFromListRequest) -> AppResult<()> {
        let not_listed = || AppError::NotFound("Item not found in your list".to_string());

        if self
            .store
            .find_one(&request.user_id, &request.content_id)
            .await?
            .is_none()
        {
            return Err(not_listed());
        }

        // A concurrent remove may have won between the lookup and the delete
        if !self
            .store
            .delete(&request.user_id, &request.content_id)
            .await?
        {
            return Err(not_listed());
        }

        self.cache.invalidate_user(&request.user_id);

        tracing::info!("Removed item from list");

        Ok(())
    }

    /// Returns one page of the user's list, newest first, with catalog detail
    #[tracing::instrument(skip(self, request), fields(user_id = %request.user_id, page = request.page, limit = request.limit))]
    pub async fn list_my_items(&self, request: ListMyItemsRequest) -> AppResult<Arc<PageResult>> {
        let ListMyItemsRequest {
            user_id,
            page,
            limit,
        } = request;

        if page == 0 {
            return Err(ValidationError::OutOfRange {
                field: "page",
                value: 0,
                max: u32::MAX,
            }
            .into());
        }
        if limit == 0 {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                value: 0,
                max: u32::MAX,
            }
            .into());
        }

        let key = PageKey::new(user_id.as_str(), page, limit);

        cached!(self.cache, key, self.load_page(&user_id, page, limit))
    }

    async fn load_page(&self, user_id: &str, page: u32, limit: u32) -> AppResult<PageResult> {
        let skip = u64::from(page - 1) * u64::from(limit);
        let (entries, total) = self.store.find_page(user_id, skip, limit).await?;

        let items = try_join_all(entries.into_iter().map(|entry| async move {
            let content = self
                .resolve_content(&entry.content_id, entry.content_type)
                .await?;
            if content.is_none() {
                tracing::warn!(content_id = %entry.content_id, "Listed content missing from catalog");
            }
            Ok::<_, AppError>(ListItem::from_entry(entry, content))
        }))
        .await?;

        tracing::debug!(returned = items.len(), total, "Loaded list page from store");

        Ok(PageResult {
            items,
            pagination: Pagination::new(page, limit, total),
        })
    }

    async fn resolve_content(&self, id: &str, kind: ContentType) -> AppResult<Option<Content>> {
        Ok(match kind {
            ContentType::Movie => self.catalog.find_movie(id).await?.map(Content::Movie),
            ContentType::TvShow => self.catalog.find_show(id).await?.map(Content::Show),
        })
    }
}
