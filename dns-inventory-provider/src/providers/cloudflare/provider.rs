//! Cloudflare ZoneDirectory trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::ZoneDirectory;
use crate::types::{DnsRecord, Listing, Zone};

use super::{CloudflareDnsRecord, CloudflareProvider, CloudflareZone};

impl CloudflareProvider {
    pub(crate) fn cf_zone_to_zone(zone: CloudflareZone) -> Zone {
        Zone {
            id: zone.id,
            name: zone.name,
            status: zone.status,
        }
    }

    pub(crate) fn cf_record_to_dns_record(record: CloudflareDnsRecord) -> DnsRecord {
        DnsRecord {
            id: record.id,
            record_type: record.record_type,
            name: record.name,
            content: record.content,
            ttl: record.ttl,
        }
    }

    async fn get_zones(&self, path: &str) -> Result<Listing<Zone>> {
        let (zones, total_count): (Vec<CloudflareZone>, _) = self.get(path).await?;
        Ok(Listing::new(
            zones.into_iter().map(Self::cf_zone_to_zone).collect(),
            total_count,
        ))
    }
}

#[async_trait]
impl ZoneDirectory for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn list_zones(&self) -> Result<Listing<Zone>> {
        self.get_zones("/zones").await
    }

    async fn find_zones_by_name(&self, name: &str) -> Result<Listing<Zone>> {
        self.get_zones(&format!("/zones?name={}", urlencoding::encode(name)))
            .await
    }

    async fn list_records(&self, zone_id: &str) -> Result<Listing<DnsRecord>> {
        let path = format!("/zones/{}/dns_records", urlencoding::encode(zone_id));
        let (records, total_count): (Vec<CloudflareDnsRecord>, _) = self.get(&path).await?;
        Ok(Listing::new(
            records
                .into_iter()
                .map(Self::cf_record_to_dns_record)
                .collect(),
            total_count,
        ))
    }
}
