//! Handler for alias removal.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{error, info};

use crate::api::middleware::request_id::RequestId;
use crate::error::AppError;
use crate::state::AppState;

const OP: &str = "handlers.url.remove";

/// Deletes the URL stored under an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (also `DELETE /{alias}`)
///
/// # Behavior
///
/// The record is removed from storage. There is no soft-delete: a later
/// redirect or removal of the same alias returns 404.
///
/// # Errors
///
/// - 400 `invalid request` for an empty alias
/// - 404 `not found` if the alias is not stored
/// - 500 `internal error` on storage failure
pub async fn remove_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    request_id: RequestId,
) -> Result<StatusCode, AppError> {
    remove(&state, &request_id, &alias).await
}

/// Handles a removal whose alias segment is empty.
pub async fn empty_alias_remove_handler(
    State(state): State<AppState>,
    request_id: RequestId,
) -> Result<StatusCode, AppError> {
    remove(&state, &request_id, "").await
}

async fn remove(state: &AppState, request_id: &RequestId, alias: &str) -> Result<StatusCode, AppError> {
    match state.url_service.remove(alias).await {
        Ok(url) => {
            info!(op = OP, %request_id, alias, url = %url, "url deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(AppError::InvalidRequest) => {
            info!(op = OP, %request_id, "alias is empty");
            Err(AppError::InvalidRequest)
        }
        Err(AppError::NotFound) => {
            info!(op = OP, %request_id, alias, "url not found");
            Err(AppError::NotFound)
        }
        Err(e) => {
            error!(op = OP, %request_id, alias, error = ?e, "failed to delete url");
            Err(e)
        }
    }
}
