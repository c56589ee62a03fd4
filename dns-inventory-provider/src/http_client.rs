//! Generic HTTP client tools
//!
//! Sending, logging and body reading live here so the Cloudflare module only
//! builds requests and interprets envelopes.
//!
//! Requests are issued once. There is no timeout beyond the reqwest
//! defaults, no retry and no special handling of rate-limit statuses:
//! Cloudflare reports failures inside the JSON envelope, so the body is
//! returned whatever the HTTP status.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Build the shared HTTP client.
///
/// Fails when the TLS backend cannot be initialized. Callers treat that as a
/// missing prerequisite.
pub fn build_client() -> Result<Client, ProviderError> {
    Client::builder()
        .user_agent(concat!("dns-inventory/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ProviderError::ClientInit {
            detail: e.to_string(),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers)
    /// * `method_name` - request method name, for logs
    /// * `url` - request URL, for logs
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("{method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: e.to_string(),
            })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Err(ProviderError::ParseError)` - the body is empty or not valid JSON for `T`
    pub fn parse_json<T>(response_text: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::debug!("JSON parse failed: {e}");
            log::debug!("Raw response: {}", truncate_for_log(response_text));
            ProviderError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}
