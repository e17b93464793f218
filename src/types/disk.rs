//! Disk usage types

use serde::{Deserialize, Serialize};

/// Disk usage for the filesystem owning a requested path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskUsage {
    /// The path the caller asked about
    pub path: String,
    /// Total space in bytes
    pub total_bytes: u64,
    /// Free space in bytes
    pub free_bytes: u64,
    /// Used space in bytes
    pub used_bytes: u64,
    /// Usage percentage (0-100)
    pub used_percent: f64,
    /// Filesystem type (e.g., "ext4", "ntfs", "apfs")
    pub filesystem_type: String,
}
