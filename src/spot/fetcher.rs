use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{Duration, Utc};

use crate::cloud_providers::aws::Ec2Client;
use crate::spot::types::{SpotPriceEntry, ZonePrice};

/// Fetches the per-zone minimum spot prices for one region. Returns
/// `Ok(None)` when the region has no usable price history, which the caller
/// treats as "skip this region". API failures propagate unchanged; there are
/// no retries.
pub async fn fetch_region_prices(
    ec2: &Ec2Client,
    instance_type: &str,
    region: &str,
) -> Result<Option<BTreeMap<String, ZonePrice>>> {
    // 24-hour lookback window.
    let end = Utc::now();
    let start = end - Duration::days(1);

    tracing::info!("Fetching availability zones for region {region}...");
    let zones = ec2.availability_zones().await?;

    tracing::info!("Fetching spot price history for region {region}...");
    let history = ec2.spot_price_history(instance_type, start, end).await?;

    if history.is_empty() {
        return Ok(None);
    }

    let minima = zone_minima(&zones, &history);

    // History entries that never matched a known zone leave nothing numeric
    // to report, so the region counts as having no data.
    if minima.values().all(|price| price.as_price().is_none()) {
        return Ok(None);
    }

    Ok(Some(minima))
}

/// Reduces raw history entries to the minimum observed price per zone. Every
/// zone of the region appears in the result; zones without a matching entry
/// stay `Unavailable`. Entries for zones the region did not list are ignored.
pub fn zone_minima(
    zones: &[String],
    entries: &[SpotPriceEntry],
) -> BTreeMap<String, ZonePrice> {
    let mut minima: BTreeMap<String, ZonePrice> = zones
        .iter()
        .map(|zone| (zone.clone(), ZonePrice::Unavailable))
        .collect();

    for entry in entries {
        let Some(current) = minima.get_mut(&entry.availability_zone) else {
            continue;
        };
        match current.as_price() {
            Some(price) if price <= entry.price => {}
            _ => *current = ZonePrice::Price(entry.price),
        }
    }

    minima
}
