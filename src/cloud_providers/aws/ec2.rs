use anyhow::{Context, Result};
use aws_config::SdkConfig;
use aws_sdk_ec2 as ec2_client;
use aws_sdk_ec2::primitives::DateTime as AwsDateTime;
use aws_sdk_ec2::types::InstanceType;
use chrono::{DateTime, Utc};

use crate::spot::types::SpotPriceEntry;

/// Spot pricing only exists for this product description; the tool does not
/// query Windows or SUSE price books.
const PRODUCT_DESCRIPTION: &str = "Linux/UNIX";

/// Thin wrapper over the EC2 SDK client exposing the three read-only
/// operations the tool needs. One instance is scoped to one region.
pub struct Ec2Client {
    client: ec2_client::Client,
}

impl Ec2Client {
    pub fn new_with_config(conf: &SdkConfig) -> Self {
        Self {
            client: ec2_client::Client::new(conf),
        }
    }

    /// Returns the names of all regions visible to the account, in the order
    /// the API reports them.
    pub async fn list_regions(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .describe_regions()
            .send()
            .await
            .context("Failed to describe regions")?;

        let regions = response
            .regions
            .unwrap_or_default()
            .into_iter()
            .filter_map(|region| region.region_name)
            .collect();

        Ok(regions)
    }

    /// Returns the availability zone names of the client's region.
    pub async fn availability_zones(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .describe_availability_zones()
            .send()
            .await
            .context("Failed to describe availability zones")?;

        let zones = response
            .availability_zones
            .unwrap_or_default()
            .into_iter()
            .filter_map(|az| az.zone_name)
            .collect();

        Ok(zones)
    }

    /// Fetches the spot price history for an instance type within the given
    /// window. Entries with an unparseable price or no zone are dropped with
    /// a warning rather than failing the whole region.
    pub async fn spot_price_history(
        &self,
        instance_type: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SpotPriceEntry>> {
        let mut paginator = self
            .client
            .describe_spot_price_history()
            .instance_types(InstanceType::from(instance_type))
            .product_descriptions(PRODUCT_DESCRIPTION)
            .start_time(AwsDateTime::from_secs(start.timestamp()))
            .end_time(AwsDateTime::from_secs(end.timestamp()))
            .into_paginator()
            .send();

        let mut entries = Vec::new();

        while let Some(output) = paginator.next().await {
            let output = output.context("Failed to describe spot price history")?;
            for item in output.spot_price_history() {
                let Some(availability_zone) = item.availability_zone() else {
                    continue;
                };
                let Some(raw_price) = item.spot_price() else {
                    continue;
                };
                let Ok(price) = raw_price.parse::<f64>() else {
                    tracing::warn!(availability_zone, raw_price, "Skipping unparseable spot price");
                    continue;
                };

                let timestamp = item
                    .timestamp()
                    .and_then(|ts| DateTime::from_timestamp(ts.secs(), ts.subsec_nanos()))
                    .unwrap_or_default();

                entries.push(SpotPriceEntry {
                    availability_zone: availability_zone.to_owned(),
                    price,
                    timestamp,
                });
            }
        }

        Ok(entries)
    }
}
