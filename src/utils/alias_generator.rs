//! Random alias generation.
//!
//! Aliases are drawn from `[A-Za-z0-9]`, each character chosen independently
//! and uniformly. Uniqueness is not checked here: storage rejects duplicates.

use rand::{Rng, distr::Alphanumeric};

/// Alias length used when none is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Generates a random alphanumeric alias of exactly `length` characters.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
