use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, Networks, RefreshKind, System};

use guides_core::error::{GuidesError, Result};

use super::{HostInfos, MemStats, NetIoStats, StatsProvider};

/// `sysinfo`-backed stats. Every call refreshes from the OS; nothing is cached.
pub struct HostStats {
    system: Mutex<System>,
}

impl Default for HostStats {
    fn default() -> Self {
        Self::new()
    }
}

impl HostStats {
    pub fn new() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing())
                .with_memory(MemoryRefreshKind::everything()),
        );
        Self {
            system: Mutex::new(system),
        }
    }
}

impl StatsProvider for HostStats {
    fn host_infos(&self) -> Result<HostInfos> {
        let sys = self.system.lock().unwrap_or_else(PoisonError::into_inner);
        let maxcpus = sys.cpus().len();
        let ncpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(maxcpus);

        Ok(HostInfos {
            os_name: System::name().unwrap_or_default(),
            os_release: System::kernel_version().unwrap_or_default(),
            os_version: System::os_version().unwrap_or_default(),
            platform: std::env::consts::ARCH.to_string(),
            hostname: System::host_name().unwrap_or_default(),
            ncpus,
            maxcpus,
            bitwidth: usize::BITS,
        })
    }

    fn mem_stats(&self) -> Result<MemStats> {
        let mut sys = self.system.lock().unwrap_or_else(PoisonError::into_inner);
        sys.refresh_memory();

        let total = sys.total_memory();
        if total == 0 {
            return Err(GuidesError::Stats("memory information unavailable".into()));
        }
        let free = sys.free_memory();

        Ok(MemStats {
            total,
            free,
            used: sys.used_memory(),
            // Reclaimable page cache: counted as available but not free.
            cache: sys.available_memory().saturating_sub(free),
            swap_total: sys.total_swap(),
            swap_used: sys.used_swap(),
            swap_free: sys.free_swap(),
        })
    }

    fn net_io_stats(&self) -> Result<Vec<NetIoStats>> {
        let networks = Networks::new_with_refreshed_list();
        let systime = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| GuidesError::Stats(format!("system clock before epoch: {e}")))?
            .as_secs();

        let mut out: Vec<NetIoStats> = networks
            .list()
            .iter()
            .map(|(name, data)| NetIoStats {
                interface_name: name.clone(),
                tx: data.total_transmitted(),
                rx: data.total_received(),
                ipackets: data.total_packets_received(),
                opackets: data.total_packets_transmitted(),
                ierrors: data.total_errors_on_received(),
                oerrors: data.total_errors_on_transmitted(),
                collisions: 0,
                systime,
            })
            .collect();
        out.sort_by(|a, b| a.interface_name.cmp(&b.interface_name));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_infos_reports_this_machine() {
        let stats = HostStats::new();
        let info = stats.host_infos().unwrap();
        assert_eq!(info.bitwidth, usize::BITS);
        assert_eq!(info.platform, std::env::consts::ARCH);
        assert!(info.ncpus >= 1);
    }

    #[test]
    fn interfaces_are_sorted_by_name() {
        let stats = HostStats::new();
        let nets = stats.net_io_stats().unwrap();
        assert!(nets.windows(2).all(|w| w[0].interface_name <= w[1].interface_name));
    }
}
