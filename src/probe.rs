use std::time::{Duration, Instant};

use reqwest::Client;

use crate::error::XxgError;

/// HTTP client for probes; `timeout` bounds the whole request.
pub fn client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}

/// Time one GET round-trip to `url`, up to the response headers.
///
/// Any HTTP status counts as a response; only transport errors and the
/// timeout are failures. A single trailing slash is dropped first, so
/// `https://registry.npmjs.org/` is probed as `https://registry.npmjs.org`.
pub async fn probe(client: &Client, url: &str) -> Result<Duration, XxgError> {
    let target = url.strip_suffix('/').unwrap_or(url);

    tracing::debug!(url = %target, "probing registry");
    let started = Instant::now();
    let response = client
        .get(target)
        .send()
        .await
        .map_err(|source| XxgError::ProbeFailed {
            url: target.to_string(),
            source,
        })?;
    let elapsed = started.elapsed();
    tracing::debug!(url = %target, status = %response.status(), ?elapsed, "probe finished");

    Ok(elapsed)
}
