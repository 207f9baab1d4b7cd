//! Host statistics collaborators.
//!
//! The admin server only needs three snapshots: host identity, memory, and
//! per-interface network counters. `StatsProvider` is the seam; `HostStats`
//! is the production implementation backed by `sysinfo`.

mod host;

use serde::{Deserialize, Serialize};

use guides_core::error::Result;

pub use host::HostStats;

/// Static host identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfos {
    pub os_name: String,
    pub os_release: String,
    pub os_version: String,
    pub platform: String,
    pub hostname: String,
    pub ncpus: usize,
    pub maxcpus: usize,
    pub bitwidth: u32,
}

/// Memory usage in bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemStats {
    pub total: u64,
    pub free: u64,
    pub used: u64,
    pub cache: u64,
    pub swap_total: u64,
    pub swap_used: u64,
    pub swap_free: u64,
}

/// Cumulative I/O counters for one network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetIoStats {
    pub interface_name: String,
    /// Bytes transmitted.
    pub tx: u64,
    /// Bytes received.
    pub rx: u64,
    pub ipackets: u64,
    pub opackets: u64,
    pub ierrors: u64,
    pub oerrors: u64,
    pub collisions: u64,
    /// Unix seconds at which the sample was taken.
    pub systime: u64,
}

/// Source of host statistics. Calls are synchronous and may touch the OS.
pub trait StatsProvider: Send + Sync {
    fn host_infos(&self) -> Result<HostInfos>;
    fn mem_stats(&self) -> Result<MemStats>;
    fn net_io_stats(&self) -> Result<Vec<NetIoStats>>;
}
