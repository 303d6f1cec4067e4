//! Talus daily reward claimer binary.
//!
//! One invocation performs one claim run: load configuration, set up
//! logging, claim, notify, exit. Scheduling recurrence is left to cron
//! or an equivalent supervisor.

use std::path::PathBuf;

use clap::Parser;

use talus_claimer::{config, observability, runner};

#[derive(Parser, Debug)]
#[command(
    name = "talus-claimer",
    version,
    about = "Claims the daily loyalty reward on the Talus network"
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the maximum number of claim attempts.
    #[arg(long)]
    retries: Option<u32>,

    /// Override the delay between attempts, in seconds.
    #[arg(long)]
    delay_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(retries) = cli.retries {
        config.retry.attempts = retries;
    }
    if let Some(delay_secs) = cli.delay_secs {
        config.retry.delay_secs = delay_secs;
    }

    observability::logging::init(&config.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        rpc_url = %config.chain.rpc_url,
        attempts = config.retry.attempts,
        "talus-claimer starting"
    );

    // Failures are logged and announced inside the runner; the process
    // still exits cleanly so supervisors treat the run as complete.
    if let Err(e) = runner::run(config).await {
        tracing::error!(error = %e, "run failed");
    }

    Ok(())
}
