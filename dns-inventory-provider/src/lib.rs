//! # dns-inventory-provider
//!
//! Read-only access to the zones and DNS records of a Cloudflare account
//! through the v4 REST API.
//!
//! ## Authentication
//!
//! Requests carry the account email and global API key as the
//! `X-Auth-Email` / `X-Auth-Key` header pair.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_inventory_provider::{
//!     build_client, resolve_zone, CloudflareProvider, Credentials, ZoneDirectory, ZoneSelector,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = build_client()?;
//! let provider = CloudflareProvider::new(client, Credentials::new("me@example.com", "key"));
//!
//! for zone in provider.list_zones().await?.items {
//!     println!("{} (ID: {}) - Status: {}", zone.name, zone.id, zone.status);
//! }
//!
//! let selector = ZoneSelector::Discover { domain: "example.com".to_string() };
//! let zone = resolve_zone(&provider, &selector).await?;
//! let records = provider.list_records(&zone.id).await?;
//! println!("{} records", records.items.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`], an alias for
//! `std::result::Result<T, ProviderError>`. A successful response with no
//! results is `Ok` with an empty [`Listing`]. An envelope with
//! `success: false` is [`ProviderError::Api`], and
//! [`ProviderError::report_lines`] gives the lines to show the user.

mod error;
mod http_client;
mod lookup;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ApiErrorDetail, ProviderError, Result, UNKNOWN_ERROR};
pub use http_client::build_client;
pub use lookup::resolve_zone;
pub use providers::CloudflareProvider;
pub use providers::cloudflare::CF_API_BASE;
pub use traits::ZoneDirectory;
pub use types::{Credentials, DnsRecord, Listing, ResolvedZone, Zone, ZoneSelector};
pub use utils::log_sanitizer::{mask_secret, truncate_for_log};
