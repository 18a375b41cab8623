//! DTOs for the save endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;
use validator::{Validate, ValidationError, ValidationErrors};

use super::StatusResponse;
use crate::error::AppError;

/// Request to save a URL, optionally under a caller-chosen alias.
///
/// Empty strings are treated as absent for both fields.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SaveRequest {
    /// The URL to save (absolute, with scheme and host).
    #[serde(default, deserialize_with = "non_empty")]
    #[validate(required, custom(function = "validate_target_url"))]
    pub url: Option<String>,

    /// Optional alias; generated when absent.
    #[serde(default, deserialize_with = "non_empty")]
    #[validate(custom(function = "validate_alias"))]
    pub alias: Option<String>,
}

impl SaveRequest {
    /// Decodes a request from a raw JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyRequest`] if the body is empty or whitespace.
    /// Returns [`AppError::Decode`] if the body is not a valid save request.
    ///
    /// A JSON `null` body decodes to a request with no fields set.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::EmptyRequest);
        }

        serde_json::from_slice::<Option<Self>>(body)
            .map(Option::unwrap_or_default)
            .map_err(AppError::Decode)
    }

    /// Validates the request and splits it into the target URL and the
    /// optional alias.
    ///
    /// # Errors
    ///
    /// Returns the field-level failures when validation fails.
    pub fn into_valid(self) -> Result<(String, Option<String>), ValidationErrors> {
        self.validate()?;

        match self.url {
            Some(url) => Ok((url, self.alias)),
            None => {
                let mut errors = ValidationErrors::new();
                errors.add("url", ValidationError::new("required"));
                Err(errors)
            }
        }
    }
}

/// Successful save: `{"status": "OK", "alias": "..."}`.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub response: StatusResponse,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            response: StatusResponse::ok(),
            alias,
        }
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}

/// Aliases that collide with fixed routes and could never be redirected to.
const RESERVED_ALIASES: &[&str] = &["health", "url"];

/// Accepts only absolute URLs that carry a host, e.g. `https://google.com`.
///
/// The stored value is the raw input and ends up verbatim in a `Location`
/// header, so surrounding whitespace and control characters are rejected
/// even though [`Url::parse`] would silently strip them.
fn validate_target_url(value: &str) -> Result<(), ValidationError> {
    if value.trim() != value || value.chars().any(char::is_control) {
        return Err(ValidationError::new("url"));
    }

    match Url::parse(value) {
        Ok(url) if url.has_host() => Ok(()),
        _ => Err(ValidationError::new("url")),
    }
}

/// Rejects aliases that a single path segment cannot address.
fn validate_alias(value: &str) -> Result<(), ValidationError> {
    if value.contains('/') || RESERVED_ALIASES.contains(&value) {
        return Err(ValidationError::new("alias"));
    }

    Ok(())
}
