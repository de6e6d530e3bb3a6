//! Input validation for the watchlist operations.
//!
//! The HTTP layer deserializes bodies and query strings into the loose `*Body` /
//! `*Query` structs below (every field optional, unknown fields rejected), then
//! hands them to the pure `validate` functions which produce the typed requests
//! the service accepts.

use serde::Deserialize;

use crate::models::ContentType;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("contentType must be one of: movie, tvshow (got '{0}')")]
    InvalidContentType(String),

    #[error("{field} must be an integer (got '{value}')")]
    NotAnInteger { field: &'static str, value: String },

    #[error("{field} must be between 1 and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        max: u32,
    },

    #[error("Malformed request: {0}")]
    Malformed(String),
}

/// Raw body of `POST /mylist`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddToListBody {
    pub user_id: Option<String>,
    pub content_id: Option<String>,
    pub content_type: Option<String>,
}

/// Raw body of `DELETE /mylist`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RemoveFromListBody {
    pub user_id: Option<String>,
    pub content_id: Option<String>,
}

/// Raw query of `GET /mylist`; numbers stay strings so bad input is reported here
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListMyItemsQuery {
    pub user_id: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToListRequest {
    pub user_id: String,
    pub content_id: String,
    pub content_type: ContentType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveFromListRequest {
    pub user_id: String,
    pub content_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMyItemsRequest {
    pub user_id: String,
    pub page: u32,
    pub limit: u32,
}

impl AddToListBody {
    pub fn validate(self) -> Result<AddToListRequest, ValidationError> {
        let user_id = required_text("userId", self.user_id)?;
        let content_id = required_text("contentId", self.content_id)?;
        let raw_type = self
            .content_type
            .ok_or(ValidationError::Missing { field: "contentType" })?;
        let content_type = ContentType::parse(&raw_type)
            .ok_or(ValidationError::InvalidContentType(raw_type))?;

        Ok(AddToListRequest {
            user_id,
            content_id,
            content_type,
        })
    }
}

impl RemoveFromListBody {
    pub fn validate(self) -> Result<RemoveFromListRequest, ValidationError> {
        Ok(RemoveFromListRequest {
            user_id: required_text("userId", self.user_id)?,
            content_id: required_text("contentId", self.content_id)?,
        })
    }
}

impl ListMyItemsQuery {
    pub fn validate(self) -> Result<ListMyItemsRequest, ValidationError> {
        Ok(ListMyItemsRequest {
            user_id: required_text("userId", self.user_id)?,
            page: positive_int("page", self.page, DEFAULT_PAGE)?,
            limit: positive_int("limit", self.limit, DEFAULT_LIMIT)?,
        })
    }
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

fn positive_int(
    field: &'static str,
    value: Option<String>,
    default: u32,
) -> Result<u32, ValidationError> {
    let Some(raw) = value else {
        return Ok(default);
    };

    let parsed: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotAnInteger {
            field,
            value: raw.clone(),
        })?;

    match u32::try_from(parsed) {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ValidationError::OutOfRange {
            field,
            value: parsed,
            max: u32::MAX,
        }),
    }
}
