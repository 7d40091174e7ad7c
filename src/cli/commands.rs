use clap::Parser;

use crate::spot::report::OutputMode;

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "lspot",
    about = "Check AWS EC2 spot prices for a given instance type",
    version
)]
pub struct Cli {
    /// The instance type to check spot prices for (e.g. f1.2xlarge, vt1.3xlarge, inf2.xlarge, p3.8xlarge)
    pub instance_type: String,

    /// Output in JSON format
    #[clap(long)]
    pub json: bool,

    /// Output in table format (default)
    #[clap(long)]
    pub table: bool,

    /// Output only the single lowest cost availability zone
    #[clap(short = '1', long = "one")]
    pub one: bool,

    /// Enable verbose output on stderr
    #[clap(short, long)]
    pub verbose: bool,

    /// Restrict the query to the given regions (can be used multiple times)
    #[clap(short, long = "region")]
    pub region: Vec<String>,

    /// AWS profile to use instead of the default credential chain
    #[clap(long)]
    pub profile: Option<String>,
}

impl Cli {
    /// Mode precedence when several flags are given: -1 wins over --json wins over --table.
    pub fn output_mode(&self) -> OutputMode {
        if self.one {
            OutputMode::SingleLowest
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_the_default_mode() {
        let cli = Cli::parse_from(["lspot", "p3.8xlarge"]);
        assert_eq!(cli.output_mode(), OutputMode::Table);
        assert!(cli.region.is_empty());
    }

    #[test]
    fn one_takes_precedence_over_json() {
        let cli = Cli::parse_from(["lspot", "p3.8xlarge", "--json", "-1"]);
        assert_eq!(cli.output_mode(), OutputMode::SingleLowest);
    }

    #[test]
    fn regions_are_collected_in_order() {
        let cli = Cli::parse_from(["lspot", "p3.8xlarge", "-r", "us-east-1", "-r", "us-west-2"]);
        assert_eq!(cli.region, vec!["us-east-1", "us-west-2"]);
    }
}
