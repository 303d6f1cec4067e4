//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once, at process start
//! - Mirror log lines to stdout and to the configured log file
//! - Honor `RUST_LOG` for level filtering
//!
//! # Design Decisions
//! - Scoped initialization from `main`, not a global side effect of
//!   module load; a failure to open the log file is the one startup
//!   error that aborts with a non-zero exit

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize the global subscriber: one pretty layer on stdout, one
/// ANSI-free layer appending to the log file.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "talus_claimer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
