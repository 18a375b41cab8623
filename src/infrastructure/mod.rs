//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Storage implementations (PostgreSQL and in-memory)

pub mod persistence;
