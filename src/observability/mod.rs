//! Observability subsystem: logging setup.

pub mod logging;
