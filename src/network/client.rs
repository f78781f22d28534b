//! HTTP client wrapper - executes the user fetch and maps failures

use std::time::Instant;

use thiserror::Error;

use crate::messages::NetworkResponse;
use crate::models::User;

/// Failure modes of a user fetch.
///
/// The display text of each variant is the message shown in the error view.
/// A non-2xx response carries the numeric status code.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Error: {0}")]
    Status(u16),
    #[error("Request timed out (30s)")]
    Timeout,
    #[error("Connection failed: {0}")]
    Connect(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Error reading body: {0}")]
    Body(String),
    #[error("Invalid user record: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::Connect(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

/// Fetch the user resource and decode the response body
async fn fetch_user_inner(client: &reqwest::Client, url: &str) -> Result<User, FetchError> {
    let resp = client.get(url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))?;
    let user =
        serde_json::from_str::<User>(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(user)
}

/// Execute a user fetch and package the outcome as a network response.
///
/// Every failure is converted into a display message here; nothing is
/// propagated past this function.
pub async fn fetch_user(client: &reqwest::Client, url: &str, request_id: u64) -> NetworkResponse {
    let start = Instant::now();
    let result = fetch_user_inner(client, url).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(user) => NetworkResponse::User {
            id: request_id,
            user,
            time_ms: elapsed,
        },
        Err(e) => NetworkResponse::Error {
            id: request_id,
            message: e.to_string(),
            time_ms: elapsed,
        },
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_the_code() {
        assert_eq!(FetchError::Status(404).to_string(), "Error: 404");
        assert_eq!(FetchError::Status(500).to_string(), "Error: 500");
    }

    #[test]
    fn test_decode_error_message() {
        let e = FetchError::Decode(String::from("missing field `email`"));
        assert_eq!(e.to_string(), "Invalid user record: missing field `email`");
    }
}
