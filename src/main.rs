use anyhow::Context;
use lspot::cli::process_command::process_cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    process_cli().await.context("Can't process CLI command")?;
    Ok(())
}
