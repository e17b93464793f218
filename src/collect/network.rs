//! Network counter collection

use sysinfo::Networks;

use super::CollectError;
use crate::types::NetworkStats;

/// Read aggregate I/O counters across all network interfaces.
///
/// Fails when the OS reports no interface counters at all rather than
/// returning a zero-filled result.
pub fn network_stats() -> Result<NetworkStats, CollectError> {
    let networks = Networks::new_with_refreshed_list();

    aggregate(networks.iter().map(|(_, data)| NetworkStats {
        bytes_sent: data.total_transmitted(),
        bytes_recv: data.total_received(),
        packets_sent: data.total_packets_transmitted(),
        packets_recv: data.total_packets_received(),
    }))
    .ok_or(CollectError::Unavailable("network interface counters"))
}

/// Sum per-interface counters; `None` when there are no interfaces.
fn aggregate(per_interface: impl Iterator<Item = NetworkStats>) -> Option<NetworkStats> {
    per_interface.reduce(|acc, item| NetworkStats {
        bytes_sent: acc.bytes_sent + item.bytes_sent,
        bytes_recv: acc.bytes_recv + item.bytes_recv,
        packets_sent: acc.packets_sent + item.packets_sent,
        packets_recv: acc.packets_recv + item.packets_recv,
    })
}
