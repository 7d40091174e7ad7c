use std::cmp::Ordering;

use anyhow::{bail, Result};
use serde::Serialize;

use crate::spot::types::PriceRecord;

const TABLE_HEADERS: [&str; 6] = ["Region", "A", "B", "C", "MinSpotPrice", "MinSpotPriceAZ"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
    SingleLowest,
}

/// Renders the aggregated records in the requested mode. The returned string
/// is the complete stdout payload, without a trailing newline.
pub fn render(mode: OutputMode, records: &[PriceRecord]) -> Result<String> {
    match mode {
        OutputMode::Table => render_table(records),
        OutputMode::Json => render_json(records),
        OutputMode::SingleLowest => {
            let cheapest = single_lowest(records)?;
            tracing::info!(
                "Region: {}, AZ: {}, Price: {}",
                cheapest.region,
                cheapest.min_price_zone,
                cheapest.min_price
            );
            Ok(cheapest.min_price_zone.clone())
        }
    }
}

/// Text table sorted ascending by minimum price, with right-aligned columns.
pub fn render_table(records: &[PriceRecord]) -> Result<String> {
    let records = sorted_by_min_price(records)?;

    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|record| {
            [
                record.region.clone(),
                record.zone_a.to_string(),
                record.zone_b.to_string(),
                record.zone_c.to_string(),
                record.min_price.to_string(),
                record.min_price_zone.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 6] = TABLE_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let format_row = |cells: [&str; 6]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:>width$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut lines = vec![format_row(TABLE_HEADERS)];
    for row in &rows {
        lines.push(format_row([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
            row[4].as_str(),
            row[5].as_str(),
        ]));
    }

    Ok(lines.join("\n"))
}

/// JSON array sorted ascending by minimum price, 4-space indentation.
pub fn render_json(records: &[PriceRecord]) -> Result<String> {
    let records = sorted_by_min_price(records)?;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}

/// Picks the record with the globally lowest minimum price, scanning in input
/// order so ties go to the first region encountered.
pub fn single_lowest(records: &[PriceRecord]) -> Result<&PriceRecord> {
    let mut best: Option<&PriceRecord> = None;
    for record in records {
        match best {
            Some(current) if current.min_price <= record.min_price => {}
            _ => best = Some(record),
        }
    }

    match best {
        Some(record) => Ok(record),
        None => bail!("No spot price data available for the requested regions"),
    }
}

fn sorted_by_min_price(records: &[PriceRecord]) -> Result<Vec<PriceRecord>> {
    if records.is_empty() {
        bail!("No spot price data available for the requested regions");
    }

    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        a.min_price
            .partial_cmp(&b.min_price)
            .unwrap_or(Ordering::Equal)
    });
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spot::types::ZonePrice;

    fn record(region: &str, min_price: f64, min_zone: &str) -> PriceRecord {
        PriceRecord {
            region: region.to_string(),
            zone_a: ZonePrice::Price(min_price),
            zone_b: ZonePrice::Unavailable,
            zone_c: ZonePrice::Unavailable,
            min_price,
            min_price_zone: min_zone.to_string(),
        }
    }

    fn example_records() -> Vec<PriceRecord> {
        vec![
            record("us-east-1", 1.20, "us-east-1b"),
            record("us-west-2", 0.95, "us-west-2a"),
        ]
    }

    #[test]
    fn table_lists_records_in_ascending_price_order() {
        let table = render_table(&example_records()).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].contains("Region"));
        assert!(lines[0].contains("MinSpotPriceAZ"));
        assert!(lines[1].contains("us-west-2"));
        assert!(lines[2].contains("us-east-1"));
    }

    #[test]
    fn json_is_sorted_and_round_trips() {
        let json = render_json(&example_records()).unwrap();

        // 4-space indentation, not serde_json's default 2.
        assert!(json.contains("\n    {"));

        let parsed: Vec<PriceRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], record("us-west-2", 0.95, "us-west-2a"));
        assert_eq!(parsed[1], record("us-east-1", 1.20, "us-east-1b"));
    }

    #[test]
    fn json_order_matches_table_order() {
        let records = vec![
            record("eu-west-1", 2.10, "eu-west-1a"),
            record("us-west-2", 0.95, "us-west-2a"),
            record("us-east-1", 1.20, "us-east-1b"),
        ];

        let parsed: Vec<PriceRecord> =
            serde_json::from_str(&render_json(&records).unwrap()).unwrap();
        let table = render_table(&records).unwrap();

        let table_regions: Vec<&str> = table
            .lines()
            .skip(1)
            .map(|line| line.split_whitespace().next().unwrap())
            .collect();
        let json_regions: Vec<&str> =
            parsed.iter().map(|record| record.region.as_str()).collect();

        assert_eq!(table_regions, json_regions);
    }

    #[test]
    fn single_lowest_picks_the_global_minimum() {
        let records = example_records();
        let cheapest = single_lowest(&records).unwrap();
        assert_eq!(cheapest.min_price_zone, "us-west-2a");

        let output = render(OutputMode::SingleLowest, &example_records()).unwrap();
        assert_eq!(output, "us-west-2a");
    }

    #[test]
    fn single_lowest_ties_go_to_the_first_record() {
        let records = vec![
            record("us-east-1", 0.95, "us-east-1a"),
            record("us-west-2", 0.95, "us-west-2a"),
        ];

        assert_eq!(single_lowest(&records).unwrap().region, "us-east-1");
    }

    #[test]
    fn every_mode_rejects_an_empty_result_set() {
        for mode in [OutputMode::Table, OutputMode::Json, OutputMode::SingleLowest] {
            let err = render(mode, &[]).unwrap_err();
            assert!(err.to_string().contains("No spot price data available"));
        }
    }
}
