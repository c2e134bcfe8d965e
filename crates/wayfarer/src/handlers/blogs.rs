//! Blog post handlers.
//!
//! Reads go straight to the record repository. Writes must first get claims
//! from the write gatekeeper, which verifies the `Authorization` header.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use wayfarer_core::blog::{Record, RecordDraft};
use wayfarer_core::query::FilterSet;

use crate::{
    handlers::{error::error_body, AppError},
    state::AppState,
};

/// Get a single post (GET /blogs/{id}).
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.repository.get_by_id(&id).await? {
        Some(record) => Ok(Json(record).into_response()),
        None => Ok(error_body(StatusCode::NOT_FOUND, "Blog not found")),
    }
}

/// List posts (GET /blogs?journey=&start=&end=).
///
/// Empty parameters count as absent.
pub async fn list_blogs(
    State(state): State<AppState>,
    Query(filters): Query<FilterSet>,
) -> Result<Json<Vec<Record>>, AppError> {
    let unfiltered = filters.is_empty();
    let records = state.repository.list_by_filters(Some(&filters)).await?;

    tracing::info!(count = records.len(), unfiltered, "Listed blogs");
    Ok(Json(records))
}

/// Create a post (POST /blogs).
///
/// The credential is verified before the body is looked at, so an
/// unauthenticated caller always gets 401.
pub async fn create_blog(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<RecordDraft>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let credential = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let claims = state.gatekeeper.authorize(credential).await?;
    let Json(draft) = payload.map_err(|e| AppError::InvalidBody(e.body_text()))?;

    let record = state.repository.create(draft, &claims).await?;

    Ok((StatusCode::CREATED, Json(record)))
}
