//! CPU usage types

use serde::{Deserialize, Serialize};

/// Sampled CPU utilization and core count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuInfo {
    /// Global CPU usage percentage (0-100), sampled over a short window
    pub cpu_percent: f32,
    /// Number of logical CPU cores
    pub cpu_cores: usize,
}
