//! Telemetry collection modules
//!
//! One collect function per telemetry domain. Each invocation performs a
//! fresh OS query via `sysinfo` and returns a typed result or a
//! [`CollectError`] naming the metric source that could not be read.

pub mod cpu;
pub mod disk;
pub mod host;
pub mod memory;
pub mod network;

use thiserror::Error;

/// Errors from reading OS metric sources
#[derive(Debug, Error)]
pub enum CollectError {
    /// The filesystem path cannot be resolved or read
    #[error("cannot read path {path}: {source}")]
    PathUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// No mounted filesystem covers the requested path
    #[error("no mounted filesystem contains {0}")]
    NoMatchingMount(String),

    /// The OS reported no data for this metric source
    #[error("{0} unavailable")]
    Unavailable(&'static str),
}
