//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::api::middleware::request_id::RequestId;
use crate::error::AppError;
use crate::state::AppState;

const OP: &str = "handlers.url.redirect";

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL. Nothing is fetched from
/// the target; the client follows the redirect.
///
/// # Errors
///
/// - 400 `invalid request` for an empty alias
/// - 404 `not found` if the alias is not stored
/// - 500 `internal error` on storage failure
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    request_id: RequestId,
) -> Result<Response, AppError> {
    redirect(&state, &request_id, &alias).await
}

/// Handles `GET /`, i.e. a redirect with an empty alias.
pub async fn empty_alias_redirect_handler(
    State(state): State<AppState>,
    request_id: RequestId,
) -> Result<Response, AppError> {
    redirect(&state, &request_id, "").await
}

async fn redirect(state: &AppState, request_id: &RequestId, alias: &str) -> Result<Response, AppError> {
    let url = match state.url_service.resolve(alias).await {
        Ok(url) => url,
        Err(AppError::InvalidRequest) => {
            info!(op = OP, %request_id, "alias is empty");
            return Err(AppError::InvalidRequest);
        }
        Err(AppError::NotFound) => {
            info!(op = OP, %request_id, alias, "url not found");
            return Err(AppError::NotFound);
        }
        Err(e) => {
            error!(op = OP, %request_id, alias, error = ?e, "failed to get url");
            return Err(e);
        }
    };

    info!(op = OP, %request_id, alias, url = %url, "got url");

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
}
