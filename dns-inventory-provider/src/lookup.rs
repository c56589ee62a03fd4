//! Target zone resolution.

use crate::error::{ProviderError, Result};
use crate::traits::ZoneDirectory;
use crate::types::{ResolvedZone, ZoneSelector};

/// Resolve the zone whose records should be listed.
///
/// An explicit identifier is returned as-is without a request; a bad id only
/// shows up when its records are fetched. Discovery queries the name-filtered
/// zone list and takes the first match.
pub async fn resolve_zone(
    directory: &dyn ZoneDirectory,
    selector: &ZoneSelector,
) -> Result<ResolvedZone> {
    match selector {
        ZoneSelector::Explicit(id) => {
            log::debug!("Using explicit zone id {id}");
            Ok(ResolvedZone {
                id: id.clone(),
                name: id.clone(),
            })
        }
        ZoneSelector::Discover { domain } => {
            let listing = directory.find_zones_by_name(domain).await?;
            let matches = listing.items.len();
            let Some(zone) = listing.items.into_iter().next() else {
                log::debug!("[{}] No zone named {domain}", directory.id());
                return Err(ProviderError::ZoneNotFound {
                    domain: domain.clone(),
                });
            };
            if matches > 1 {
                log::debug!("{domain} matched {matches} zones, using {}", zone.id);
            }
            Ok(ResolvedZone {
                id: zone.id,
                name: zone.name,
            })
        }
    }
}
