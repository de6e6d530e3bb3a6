use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Content, ContentType};

/// A single watchlist membership row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub id: Uuid,
    pub user_id: String,
    pub content_id: String,
    pub content_type: ContentType,
    pub created_at: DateTime<Utc>,
}

impl ListEntry {
    /// Creates a new entry with a fresh id, timestamped now
    pub fn new(user_id: String, content_id: String, content_type: ContentType) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            content_id,
            content_type,
            created_at: Utc::now(),
        }
    }
}

/// A list entry joined with its catalog detail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: Uuid,
    pub content_id: String,
    pub content_type: ContentType,
    pub added_at: DateTime<Utc>,
    /// `None` when the content was removed from the catalog after insertion
    pub content: Option<Content>,
}

impl ListItem {
    pub fn from_entry(entry: ListEntry, content: Option<Content>) -> Self {
        Self {
            id: entry.id,
            content_id: entry.content_id,
            content_type: entry.content_type,
            added_at: entry.created_at,
            content,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(u64::from(limit.max(1))),
        }
    }
}

/// One page of a user's enriched list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResult {
    pub items: Vec<ListItem>,
    pub pagination: Pagination,
}
