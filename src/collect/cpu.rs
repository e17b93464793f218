//! CPU usage collection

use std::time::Duration;

use sysinfo::System;

use crate::types::CpuInfo;

/// Window between the two usage refreshes that produce a sample.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_millis(200);

/// Read the sampled CPU usage and logical core count.
///
/// The caller must have refreshed CPU usage twice, [`CPU_SAMPLE_WINDOW`]
/// apart, before calling this.
pub fn cpu_info(sys: &System) -> CpuInfo {
    CpuInfo {
        cpu_percent: sys.global_cpu_usage(),
        cpu_cores: sys.cpus().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_info_after_sampling() {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        std::thread::sleep(CPU_SAMPLE_WINDOW);
        sys.refresh_cpu_usage();

        let info = cpu_info(&sys);
        assert!(info.cpu_cores >= 1);
        assert!((0.0..=100.0).contains(&info.cpu_percent));
    }
}
