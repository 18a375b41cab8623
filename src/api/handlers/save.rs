//! Handler for the save endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::api::middleware::request_id::RequestId;
use crate::error::AppError;
use crate::state::AppState;

const OP: &str = "handlers.url.save";

/// Saves a URL under a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://google.com", "alias": "test_alias" }
/// ```
///
/// `alias` is optional; when absent or empty a random alias of the configured
/// length is generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "test_alias" }
/// ```
///
/// # Errors
///
/// Every failure is answered with `200 OK` and an error body:
///
/// - `empty request` / `failed to decode request` for an unreadable body
/// - `field URL is a required field` / `field URL is not a valid URL`
/// - `field ALIAS is not valid` for an alias containing `/` or naming a
///   fixed route (`health`, `url`)
/// - `url already exists` if the alias is taken
/// - `failed to add url` on storage failure
pub async fn save_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    body: Bytes,
) -> Response {
    match save(&state, &request_id, &body).await {
        Ok(alias) => Json(SaveResponse::ok(alias)).into_response(),
        Err(err) => err.into_response_with_status(StatusCode::OK),
    }
}

async fn save(state: &AppState, request_id: &RequestId, body: &[u8]) -> Result<String, AppError> {
    let request = SaveRequest::from_body(body).inspect_err(|e| match e {
        AppError::EmptyRequest => error!(op = OP, %request_id, "request body is empty"),
        e => error!(op = OP, %request_id, error = ?e, "failed to decode request body"),
    })?;

    info!(op = OP, %request_id, req = ?request, "request body decoded");

    let (url, alias) = request
        .into_valid()
        .inspect_err(|errors| error!(op = OP, %request_id, error = %errors, "invalid request"))?;

    match state.url_service.save_url(url, alias).await {
        Ok(record) => {
            info!(op = OP, %request_id, id = record.id, alias = %record.alias, "url added");
            Ok(record.alias)
        }
        Err(AppError::AliasExists) => {
            info!(op = OP, %request_id, "url already exists");
            Err(AppError::AliasExists)
        }
        Err(e) => {
            error!(op = OP, %request_id, error = ?e, "failed to add url");
            Err(e)
        }
    }
}
