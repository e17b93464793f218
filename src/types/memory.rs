//! Memory usage types

use serde::{Deserialize, Serialize};

/// Virtual memory usage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryInfo {
    /// Total physical memory in bytes
    pub total_bytes: u64,
    /// Available physical memory in bytes
    pub available_bytes: u64,
    /// Used physical memory in bytes
    pub used_bytes: u64,
    /// Memory usage percentage (0-100)
    pub used_percent: f64,
}
