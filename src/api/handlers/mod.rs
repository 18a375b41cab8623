//! HTTP request handlers for API endpoints.

pub mod health;
pub mod redirect;
pub mod remove;
pub mod save;

pub use health::health_handler;
pub use redirect::{empty_alias_redirect_handler, redirect_handler};
pub use remove::{empty_alias_remove_handler, remove_handler};
pub use save::save_handler;
