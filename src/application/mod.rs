//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Save, resolve, and remove aliased URLs

pub mod services;
