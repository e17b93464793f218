//! Network counter types

use serde::{Deserialize, Serialize};

/// Aggregate network I/O counters across all interfaces, since boot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Total bytes transmitted
    pub bytes_sent: u64,
    /// Total bytes received
    pub bytes_recv: u64,
    /// Total packets transmitted
    pub packets_sent: u64,
    /// Total packets received
    pub packets_recv: u64,
}
