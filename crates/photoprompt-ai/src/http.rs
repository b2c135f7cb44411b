//! HTTP plumbing shared by both remote clients.

use std::time::Duration;

use crate::AiError;

pub(crate) const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build a client whose whole-request timeout is `timeout`.
///
/// Expiry surfaces as [`AiError::Timeout`], which the providers treat like
/// any other transport failure.
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, AiError> {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        .build()
        .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))
}

/// The URL is stripped from the message since it may carry an API key.
pub(crate) fn transport_error(e: reqwest::Error) -> AiError {
    let e = e.without_url();
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

/// Map a non-2xx response to an error, passing successful responses through.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AiError> {
    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(AiError::RateLimited);
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
    }
    Ok(response)
}

pub(crate) async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, AiError> {
    response.json().await.map_err(|e| {
        if e.is_timeout() {
            AiError::Timeout
        } else {
            AiError::ParseError(e.without_url().to_string())
        }
    })
}
