use async_trait::async_trait;

use crate::error::Result;
use crate::types::{DnsRecord, Listing, Zone};

/// Read-only view of a provider's zones and records.
///
/// Every method issues exactly one request. Implementations return
/// `Ok` with an empty listing when the API succeeds with no results.
#[async_trait]
pub trait ZoneDirectory: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// List all zones of the account (first page only).
    async fn list_zones(&self) -> Result<Listing<Zone>>;

    /// List zones whose name equals `name` exactly.
    async fn find_zones_by_name(&self, name: &str) -> Result<Listing<Zone>>;

    /// List DNS records of a zone (first page only).
    async fn list_records(&self, zone_id: &str) -> Result<Listing<DnsRecord>>;
}
