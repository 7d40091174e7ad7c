use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sets up the tracing subscriber. Progress and diagnostics go to stderr so
/// stdout stays reserved for the report itself; without `--verbose` only
/// warnings and errors get through.
pub fn setup_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::from("info")
    } else {
        EnvFilter::from("warn")
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry().with(filter).with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    Ok(())
}
