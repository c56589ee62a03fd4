//! The inventory run: prerequisites, zone listing, zone resolution and
//! record listing, in that order.

use std::io::Write;

use dns_inventory_provider::{
    CloudflareProvider, Listing, ProviderError, ResolvedZone, ZoneDirectory, ZoneSelector,
    resolve_zone,
};
use thiserror::Error;

use crate::config::Config;
use crate::output::Reporter;

/// Steps of a run. A run moves forward only; there are no retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CheckPrerequisites,
    ListZones,
    ResolveZone,
    ListRecords,
    Done,
}

/// A failure that ends the run with a non-zero exit.
///
/// Zone listing failures are not here: that step is best-effort.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Prerequisite check failed: {0}")]
    Prerequisite(#[source] ProviderError),

    #[error("Could not resolve the target zone: {0}")]
    ResolveZone(#[source] ProviderError),

    #[error("Could not list DNS records: {0}")]
    ListRecords(#[source] ProviderError),
}

impl RunError {
    /// Step at which the run stopped.
    pub fn step(&self) -> Step {
        match self {
            Self::Prerequisite(_) => Step::CheckPrerequisites,
            Self::ResolveZone(_) => Step::ResolveZone,
            Self::ListRecords(_) => Step::ListRecords,
        }
    }
}

/// Connect to the configured API and run every step.
pub async fn run<W: Write>(config: &Config, out: &mut Reporter<W>) -> Result<(), RunError> {
    tracing::debug!(step = ?Step::CheckPrerequisites, api_base = %config.api_base);
    let provider = CloudflareProvider::connect(config.credentials.clone(), &config.api_base)
        .inspect_err(|e| out.provider_error(e))
        .map_err(RunError::Prerequisite)?;

    run_with(&provider, config, out).await
}

/// Run the listing steps against `directory`.
pub async fn run_with<W: Write>(
    directory: &dyn ZoneDirectory,
    config: &Config,
    out: &mut Reporter<W>,
) -> Result<(), RunError> {
    tracing::debug!(step = ?Step::ListZones);
    if let Err(e) = list_zones(directory, out).await {
        tracing::debug!("zone listing failed: {e}");
        out.warn("Could not list zones, continuing");
    }

    tracing::debug!(step = ?Step::ResolveZone);
    let zone = find_target_zone(directory, &config.zone_selector(), out)
        .await
        .map_err(RunError::ResolveZone)?;

    tracing::debug!(step = ?Step::ListRecords, zone_id = %zone.id);
    list_records(directory, &zone, out)
        .await
        .map_err(RunError::ListRecords)?;

    tracing::debug!(step = ?Step::Done);
    out.success("DNS inventory complete");
    Ok(())
}

/// Print every zone of the account. An empty account is a warning.
pub async fn list_zones<W: Write>(
    directory: &dyn ZoneDirectory,
    out: &mut Reporter<W>,
) -> Result<usize, ProviderError> {
    out.info("Listing all zones...");
    let listing = directory
        .list_zones()
        .await
        .inspect_err(|e| out.provider_error(e))?;

    if listing.is_empty() {
        out.warn("No zones found");
        return Ok(0);
    }
    for zone in &listing.items {
        out.zone(zone);
    }
    warn_if_truncated(&listing, "zones", out);
    Ok(listing.items.len())
}

/// Resolve the zone whose records get listed, reporting the outcome.
pub async fn find_target_zone<W: Write>(
    directory: &dyn ZoneDirectory,
    selector: &ZoneSelector,
    out: &mut Reporter<W>,
) -> Result<ResolvedZone, ProviderError> {
    match selector {
        ZoneSelector::Explicit(id) => out.info(format!("Using zone ID {id}")),
        ZoneSelector::Discover { domain } => out.info(format!("Looking up zone for {domain}...")),
    }

    match resolve_zone(directory, selector).await {
        Ok(zone) => {
            if matches!(selector, ZoneSelector::Discover { .. }) {
                out.success(format!("Found zone {} (ID: {})", zone.name, zone.id));
            }
            Ok(zone)
        }
        Err(e @ ProviderError::ZoneNotFound { .. }) => {
            out.warn(&e);
            Err(e)
        }
        Err(e) => {
            out.provider_error(&e);
            Err(e)
        }
    }
}

/// Print every DNS record of `zone`. An empty zone is a warning.
pub async fn list_records<W: Write>(
    directory: &dyn ZoneDirectory,
    zone: &ResolvedZone,
    out: &mut Reporter<W>,
) -> Result<usize, ProviderError> {
    out.info(format!("DNS records for {}:", zone.name));
    let listing = directory
        .list_records(&zone.id)
        .await
        .inspect_err(|e| out.provider_error(e))?;

    if listing.is_empty() {
        out.warn(format!("No DNS records found for {}", zone.name));
        return Ok(0);
    }
    for record in &listing.items {
        out.record(record);
    }
    warn_if_truncated(&listing, "records", out);
    Ok(listing.items.len())
}

fn warn_if_truncated<T, W: Write>(listing: &Listing<T>, what: &str, out: &mut Reporter<W>) {
    if let Some(total) = listing.total_count.filter(|_| listing.is_truncated()) {
        out.warn(format!(
            "Showing {} of {total} {what} (first page only)",
            listing.items.len()
        ));
    }
}
