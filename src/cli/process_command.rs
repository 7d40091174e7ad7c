use anyhow::Result;
use clap::Parser;

use crate::cli::commands::Cli;
use crate::cloud_providers::aws::AwsConfig;
use crate::logging::setup_logging;
use crate::spot::{aggregator, report};

/// Parses the CLI, queries the selected regions and writes the report to
/// stdout. Any API failure or an empty result set aborts with an error,
/// which `main` turns into a non-zero exit code.
pub async fn process_cli() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose)?;

    let aws_config = AwsConfig::from_profile(cli.profile.clone());

    let regions = aggregator::resolve_regions(&aws_config, &cli.region).await?;
    let records =
        aggregator::collect_spot_prices(&aws_config, &cli.instance_type, &regions).await?;

    let output = report::render(cli.output_mode(), &records)?;
    println!("{output}");

    Ok(())
}
