use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Extension, Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{ListEntry, PageResult},
    validation::{AddToListBody, ListMyItemsQuery, RemoveFromListBody, ValidationError},
};

use super::AppState;

/// Envelope shared by every successful response
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    fn new(message: Option<&'static str>, data: Option<T>) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }
}

fn malformed(rejection: impl std::fmt::Display) -> AppError {
    AppError::Validation(ValidationError::Malformed(rejection.to_string()))
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Add a movie or TV show to a user's list
pub async fn add_to_list(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<AddToListBody>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<ListEntry>>)> {
    let Json(body) = payload.map_err(|e| malformed(e.body_text()))?;
    let request = body.validate()?;

    tracing::info!(
        request_id = %request_id,
        user_id = %request.user_id,
        content_id = %request.content_id,
        "Processing add to list"
    );

    let entry = state.my_list.add_to_list(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(Some("Item added to your list"), Some(entry))),
    ))
}

/// Remove a movie or TV show from a user's list
pub async fn remove_from_list(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RemoveFromListBody>, JsonRejection>,
) -> AppResult<Json<ApiResponse<()>>> {
    let Json(body) = payload.map_err(|e| malformed(e.body_text()))?;
    let request = body.validate()?;

    tracing::info!(
        request_id = %request_id,
        user_id = %request.user_id,
        content_id = %request.content_id,
        "Processing remove from list"
    );

    state.my_list.remove_from_list(request).await?;

    Ok(Json(ApiResponse::new(Some("Item removed from your list"), None)))
}

/// List a user's items, newest first, with full content details
pub async fn list_my_items(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<ListMyItemsQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse<Arc<PageResult>>>> {
    let Query(query) = query.map_err(|e| malformed(e.body_text()))?;
    let request = query.validate()?;

    tracing::debug!(
        request_id = %request_id,
        user_id = %request.user_id,
        page = request.page,
        limit = request.limit,
        "Processing list my items"
    );

    let page = state.my_list.list_my_items(request).await?;

    Ok(Json(ApiResponse::new(None, Some(page))))
}
