//! HTTP middleware for request processing.
//!
//! Provides request correlation and observability middleware.

pub mod request_id;
pub mod tracing;
