use crate::utils::log_sanitizer::mask_secret;

// ============ Credentials ============

/// Global API key authentication for the Cloudflare v4 API.
///
/// Sent as the `X-Auth-Email` / `X-Auth-Key` header pair. The key is masked
/// in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account email address.
    pub email: String,
    /// Global API key.
    pub api_key: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("api_key", &mask_secret(&self.api_key))
            .finish()
    }
}

// ============ Listing ============

/// Items returned by one list call.
///
/// Only the first page is ever fetched. `total_count` comes from the
/// envelope's `result_info` and lets callers tell the user the listing is
/// incomplete.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    /// Items in the returned page.
    pub items: Vec<T>,
    /// Total number of items the account holds, when the API reports it.
    pub total_count: Option<u32>,
}

impl<T> Listing<T> {
    pub fn new(items: Vec<T>, total_count: Option<u32>) -> Self {
        Self { items, total_count }
    }

    /// Whether the API holds more items than were returned.
    pub fn is_truncated(&self) -> bool {
        self.total_count
            .is_some_and(|total| usize::try_from(total).is_ok_and(|t| t > self.items.len()))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============ Zone Types ============

/// A Cloudflare zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    /// Zone identifier.
    pub id: String,
    /// Zone name (e.g., `"example.com"`).
    pub name: String,
    /// Cloudflare status string: `active`, `pending`, `initializing`, `moved`, ...
    pub status: String,
}

/// How the target zone is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneSelector {
    /// Use this zone identifier verbatim, without checking that it exists.
    Explicit(String),
    /// Search the zone list for an exact name match.
    Discover {
        /// Domain name to search for.
        domain: String,
    },
}

/// The zone whose records get listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedZone {
    /// Zone identifier passed to the record endpoint.
    pub id: String,
    /// Name shown to the user.
    pub name: String,
}

// ============ DNS Record Types ============

/// A DNS record in a Cloudflare zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    /// Record identifier.
    pub id: String,
    /// Record type as reported by the API (`A`, `CNAME`, `MX`, ...).
    pub record_type: String,
    /// Fully qualified record name.
    pub name: String,
    /// Record content (address, target, text, ...).
    pub content: String,
    /// TTL in seconds. `1` means automatic.
    pub ttl: u32,
}
