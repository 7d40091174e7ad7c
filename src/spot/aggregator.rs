use std::collections::BTreeMap;

use anyhow::Result;

use crate::cloud_providers::aws::config::get_initialized_aws_conf;
use crate::cloud_providers::aws::{AwsConfig, Ec2Client};
use crate::spot::fetcher;
use crate::spot::types::{PriceRecord, ZonePrice};

/// Region used for the DescribeRegions bootstrap call when no explicit
/// regions are given.
const BOOTSTRAP_REGION: &str = "us-east-1";

/// Zone suffixes surfaced as named columns in the report.
const CANONICAL_ZONE_SUFFIXES: [&str; 3] = ["a", "b", "c"];

/// Explicit regions are used verbatim in the given order, without validating
/// them against the provider. Otherwise every region the account can see is
/// queried, in the order DescribeRegions returns them.
pub async fn resolve_regions(
    aws_config: &AwsConfig,
    explicit_regions: &[String],
) -> Result<Vec<String>> {
    if !explicit_regions.is_empty() {
        return Ok(explicit_regions.to_vec());
    }

    tracing::info!("Fetching regions...");
    let conf = get_initialized_aws_conf(aws_config, BOOTSTRAP_REGION).await?;
    let ec2 = Ec2Client::new_with_config(&conf);
    ec2.list_regions().await
}

/// Queries each region in turn and builds one record per region that had
/// price data. Regions without data are skipped; any API failure aborts the
/// whole run.
pub async fn collect_spot_prices(
    aws_config: &AwsConfig,
    instance_type: &str,
    regions: &[String],
) -> Result<Vec<PriceRecord>> {
    let mut records = Vec::with_capacity(regions.len());

    for region in regions {
        let conf = get_initialized_aws_conf(aws_config, region).await?;
        let ec2 = Ec2Client::new_with_config(&conf);

        let Some(minima) = fetcher::fetch_region_prices(&ec2, instance_type, region).await? else {
            tracing::info!("No spot price data for region {region}, skipping");
            continue;
        };

        if let Some(record) = build_record(region, &minima) {
            records.push(record);
        }
    }

    Ok(records)
}

/// Builds the report record for one region. The A/B/C columns are the
/// canonical `<region>a/b/c` zones; the minimum is taken over every fetched
/// zone, with ties going to the first zone in mapping order. Returns `None`
/// when no zone has a numeric price.
pub fn build_record(region: &str, minima: &BTreeMap<String, ZonePrice>) -> Option<PriceRecord> {
    let mut best: Option<(&str, f64)> = None;
    for (zone, zone_price) in minima {
        if let Some(price) = zone_price.as_price() {
            match best {
                Some((_, current)) if current <= price => {}
                _ => best = Some((zone.as_str(), price)),
            }
        }
    }
    let (min_price_zone, min_price) = best?;

    let named_column = |suffix: &str| {
        minima
            .get(&format!("{region}{suffix}"))
            .copied()
            .unwrap_or(ZonePrice::Unavailable)
    };

    Some(PriceRecord {
        region: region.to_string(),
        zone_a: named_column(CANONICAL_ZONE_SUFFIXES[0]),
        zone_b: named_column(CANONICAL_ZONE_SUFFIXES[1]),
        zone_c: named_column(CANONICAL_ZONE_SUFFIXES[2]),
        min_price,
        min_price_zone: min_price_zone.to_string(),
    })
}
