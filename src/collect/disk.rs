//! Disk usage collection

use sysinfo::Disks;

use super::CollectError;
use crate::types::DiskUsage;

/// Read usage for the filesystem owning `path`.
///
/// The path is canonicalized first; the owning mount is the one with the
/// longest mount-point prefix of the canonical path.
pub fn disk_usage(path: &str) -> Result<DiskUsage, CollectError> {
    let canonical = std::fs::canonicalize(path).map_err(|source| CollectError::PathUnreadable {
        path: path.to_string(),
        source,
    })?;

    let disks = Disks::new_with_refreshed_list();
    let disk = disks
        .iter()
        .filter(|d| canonical.starts_with(d.mount_point()))
        .max_by_key(|d| d.mount_point().as_os_str().len())
        .ok_or_else(|| CollectError::NoMatchingMount(canonical.display().to_string()))?;

    let total = disk.total_space();
    let free = disk.available_space();
    let used = total.saturating_sub(free);

    Ok(DiskUsage {
        path: path.to_string(),
        total_bytes: total,
        free_bytes: free,
        used_bytes: used,
        used_percent: if total > 0 {
            (used as f64 / total as f64) * 100.0
        } else {
            0.0
        },
        filesystem_type: disk.file_system().to_string_lossy().to_string(),
    })
}
