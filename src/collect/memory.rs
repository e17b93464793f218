//! Memory usage collection

use sysinfo::System;

use crate::types::MemoryInfo;

/// Read virtual memory usage from a refreshed system handle.
pub fn memory_info(sys: &System) -> MemoryInfo {
    let total = sys.total_memory();
    let used = sys.used_memory();

    MemoryInfo {
        total_bytes: total,
        available_bytes: sys.available_memory(),
        used_bytes: used,
        used_percent: if total > 0 {
            (used as f64 / total as f64) * 100.0
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_info_sane_bounds() {
        let mut sys = System::new();
        sys.refresh_memory();

        let info = memory_info(&sys);
        assert!(info.total_bytes > 0);
        assert!(info.used_bytes <= info.total_bytes);
        assert!((0.0..=100.0).contains(&info.used_percent));
    }

    #[test]
    fn test_memory_total_is_stable_across_reads() {
        let mut sys = System::new();
        sys.refresh_memory();
        let first = memory_info(&sys);

        sys.refresh_memory();
        let second = memory_info(&sys);

        assert_eq!(first.total_bytes, second.total_bytes);
        assert!((0.0..=100.0).contains(&second.used_percent));
    }
}
