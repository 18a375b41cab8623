//! Outbound helper that inspects a short link without following it.

use reqwest::{StatusCode, header::LOCATION, redirect::Policy};
use std::time::Duration;

/// Issues a `GET` to `url` without following redirects.
///
/// Returns the `Location` header when the response is `302 Found`, and `None`
/// for any other status.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the request fails.
pub async fn get_redirect(url: &str) -> Result<Option<String>, reqwest::Error> {
    let client = reqwest::Client::builder()
        .redirect(Policy::none())
        .timeout(Duration::from_secs(5))
        .build()?;

    let response = client.get(url).send().await?;

    if response.status() != StatusCode::FOUND {
        return Ok(None);
    }

    Ok(response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned))
}
