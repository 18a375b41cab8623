//! Utility functions shared across layers.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`db_error`] - Database error classification
//! - [`redirect_probe`] - Resolve a short link over HTTP without following it

pub mod alias_generator;
pub mod db_error;
pub mod redirect_probe;
