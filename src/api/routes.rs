//! API route configuration.

use crate::api::handlers::{
    empty_alias_redirect_handler, empty_alias_remove_handler, health_handler, redirect_handler,
    remove_handler, save_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// URL routes.
///
/// # Endpoints
///
/// - `GET    /health`        - Storage health check
/// - `POST   /url`           - Save a URL
/// - `DELETE /url/{alias}`   - Remove a URL
/// - `GET    /{alias}`       - Redirect to the stored URL
/// - `DELETE /{alias}`       - Remove a URL
///
/// `GET /`, `DELETE /` and `DELETE /url` address an empty alias and answer
/// `400 invalid request`.
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/url",
            post(save_handler).delete(empty_alias_remove_handler),
        )
        .route("/url/{alias}", delete(remove_handler))
        .route(
            "/",
            get(empty_alias_redirect_handler).delete(empty_alias_remove_handler),
        )
        .route("/{alias}", get(redirect_handler).delete(remove_handler))
}
