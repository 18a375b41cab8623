//! Domain layer containing business entities and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no knowledge of HTTP. Business rules are applied in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
