//! Host identity types

use serde::{Deserialize, Serialize};

/// Host identity and kernel information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    /// Hostname as reported by the OS
    pub hostname: String,
    /// OS family (e.g., "linux", "windows", "macos")
    pub os: String,
    /// Platform/distribution identifier (e.g., "ubuntu", "arch")
    pub platform: String,
    /// Platform version
    pub platform_version: Option<String>,
    /// Kernel version
    pub kernel_version: Option<String>,
    /// Unix timestamp of system boot time
    pub boot_time: u64,
    /// Seconds since boot
    pub uptime_seconds: u64,
    /// CPU architecture (e.g., "x86_64", "aarch64")
    pub architecture: String,
}
