//! Host identity collection

use sysinfo::System;

use super::CollectError;
use crate::types::HostInfo;

/// Read host identity and kernel information.
pub fn host_info() -> Result<HostInfo, CollectError> {
    let hostname = System::host_name().ok_or(CollectError::Unavailable("host name"))?;

    Ok(HostInfo {
        hostname,
        os: std::env::consts::OS.to_string(),
        platform: System::distribution_id(),
        platform_version: System::os_version(),
        kernel_version: System::kernel_version(),
        boot_time: System::boot_time(),
        uptime_seconds: System::uptime(),
        architecture: std::env::consts::ARCH.to_string(),
    })
}
