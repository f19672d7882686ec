//! Shared HTTP client and JSON request dispatch.
//!
//! One pooled `reqwest::Client` is built from the configuration at startup and cloned
//! into every handler. Clones share the same connection pool.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};

const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(30);
const POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Build the shared client with pooling and the configured timeouts
pub fn build_client(config: &Config) -> Result<Client> {
    Client::builder()
        .pool_idle_timeout(POOL_IDLE_TIMEOUT)
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {e}")))
}

/// GET `url` and decode the body into `T`
pub async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    debug!(url, "Sending request");

    let response = client.get(url).send().await.map_err(|e| {
        warn!(url, error = %e, "Request failed");
        Error::Request {
            url:     url.to_string(),
            message: e.to_string(),
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(url, %status, "Request returned an error status");
        return Err(Error::Request {
            url:     url.to_string(),
            message: format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error")
            ),
        });
    }

    let body = response.bytes().await.map_err(|e| Error::Request {
        url:     url.to_string(),
        message: format!("Failed to read response body: {e}"),
    })?;

    debug!(url, bytes = body.len(), "Received response");

    serde_json::from_slice(&body).map_err(|e| Error::Decode {
        url:     url.to_string(),
        message: e.to_string(),
    })
}

/// GET `url` and return the body as untyped JSON
pub async fn send_request(client: &Client, url: &str) -> Result<Value> {
    fetch(client, url).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn test_client() -> Client {
        let config = Config {
            connect_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(2),
            ..Config::default()
        };
        build_client(&config).unwrap()
    }

    #[test]
    fn test_client_builds_from_default_config() {
        assert!(build_client(&Config::default()).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        // Port 9 (discard) is not expected to accept HTTP connections locally
        let result = send_request(&test_client(), "http://127.0.0.1:9/v1/laps?").await;
        assert!(matches!(result, Err(Error::Request { .. })));
    }

    #[tokio::test]
    async fn test_malformed_url_is_request_error() {
        let result = send_request(&test_client(), "not a url").await;
        match result {
            Err(Error::Request { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("expected request error, got {other:?}"),
        }
    }
}
