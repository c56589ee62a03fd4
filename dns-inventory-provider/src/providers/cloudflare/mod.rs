//! Cloudflare DNS Provider

mod http;
mod provider;
mod types;

use reqwest::{Client, Url};

use crate::error::{ProviderError, Result};
use crate::http_client::build_client;
use crate::types::Credentials;

pub(crate) use types::{CloudflareDnsRecord, CloudflareResponse, CloudflareZone};

/// Production base URL of the Cloudflare v4 API.
pub const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Cloudflare DNS Provider (read-only)
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    pub(crate) base_url: String,
}

impl CloudflareProvider {
    /// Provider against the production API.
    pub fn new(client: Client, credentials: Credentials) -> Self {
        Self::with_base_url(client, credentials, CF_API_BASE)
    }

    /// Provider against another base URL (mock servers, proxies).
    ///
    /// A trailing slash is dropped so relative paths can be appended as-is.
    pub fn with_base_url(client: Client, credentials: Credentials, base_url: &str) -> Self {
        Self {
            client,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the HTTP client and check the base URL before any request.
    pub fn connect(credentials: Credentials, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| ProviderError::ClientInit {
            detail: format!("invalid API base URL '{base_url}': {e}"),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ProviderError::ClientInit {
                detail: format!("unsupported API base URL scheme '{}'", parsed.scheme()),
            });
        }
        Ok(Self::with_base_url(build_client()?, credentials, base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url() {
        let provider = CloudflareProvider::new(Client::new(), Credentials::new("a@b.c", "k"));
        assert_eq!(provider.base_url(), CF_API_BASE);
    }

    #[test]
    fn connect_rejects_bad_base_url() {
        let result = CloudflareProvider::connect(Credentials::new("a@b.c", "k"), "not a url");
        assert!(matches!(result, Err(ProviderError::ClientInit { .. })));

        let result = CloudflareProvider::connect(Credentials::new("a@b.c", "k"), "ftp://example.com");
        assert!(matches!(result, Err(ProviderError::ClientInit { .. })));
    }

    #[test]
    fn connect_accepts_production_url() {
        let result = CloudflareProvider::connect(Credentials::new("a@b.c", "k"), CF_API_BASE);
        assert!(matches!(result, Ok(p) if p.base_url() == CF_API_BASE));
    }

    #[test]
    fn trailing_slash_trimmed() {
        let provider = CloudflareProvider::with_base_url(
            Client::new(),
            Credentials::new("a@b.c", "k"),
            "http://127.0.0.1:8080/",
        );
        assert_eq!(provider.base_url(), "http://127.0.0.1:8080");
    }
}
