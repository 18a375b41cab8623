//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /url`           - Save a URL under an alias
//! - `GET    /{alias}`       - Redirect to the stored URL
//! - `DELETE /url/{alias}`   - Remove a URL (also `DELETE /{alias}`)
//! - `GET    /health`        - Storage health check
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Request id** - Assigns `x-request-id` when absent
//! - **Tracing** - Structured request/response logging tagged with the request id
//! - **Timeout** - Per-request deadline
//! - **Request id propagation** - Echoes `x-request-id` on the response
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use std::time::Duration;
use tower::{Layer, ServiceBuilder};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the router with all routes and middleware, without path
/// normalization.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    #[allow(deprecated)]
    let timeout = TimeoutLayer::new(request_timeout);

    api::routes::url_routes().with_state(state).layer(
        ServiceBuilder::new()
            .layer(request_id::set_layer())
            .layer(tracing::layer())
            .layer(timeout)
            .layer(request_id::propagate_layer()),
    )
}

/// Constructs the application router with trailing-slash normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline for a single request; exceeded requests get
///   `408 Request Timeout`
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
