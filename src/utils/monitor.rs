#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SessionStats {
    pub commands_handled: u64,
    pub memory_usage_mb: Option<u64>,
    pub peak_memory_mb: Option<u64>,
    pub elapsed_time: Duration,
}

/// Tracks how many menu commands ran and, with the `cli` feature, process memory.
pub struct SessionMonitor {
    #[cfg(feature = "cli")]
    system: System,
    #[cfg(feature = "cli")]
    pid: Option<Pid>,
    start_time: Instant,
    commands_handled: u64,
    peak_memory_mb: Option<u64>,
    enabled: bool,
}

impl SessionMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            #[cfg(feature = "cli")]
            system: System::new(),
            #[cfg(feature = "cli")]
            pid: sysinfo::get_current_pid().ok(),
            start_time: Instant::now(),
            commands_handled: 0,
            peak_memory_mb: None,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn commands_handled(&self) -> u64 {
        self.commands_handled
    }

    #[cfg(feature = "cli")]
    fn sample_memory_mb(&mut self) -> Option<u64> {
        let pid = self.pid?;
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        // bytes -> MB
        self.system.process(pid).map(|p| p.memory() / 1024 / 1024)
    }

    #[cfg(not(feature = "cli"))]
    fn sample_memory_mb(&mut self) -> Option<u64> {
        None
    }

    pub fn record_command(&mut self, command: &str) {
        self.commands_handled += 1;
        if !self.enabled {
            return;
        }

        let stats = self.snapshot();
        tracing::info!(
            "📊 {} - Commands: {}, Memory: {:?}MB, Peak: {:?}MB, Time: {:?}",
            command,
            stats.commands_handled,
            stats.memory_usage_mb,
            stats.peak_memory_mb,
            stats.elapsed_time
        );
    }

    pub fn snapshot(&mut self) -> SessionStats {
        let memory = self.sample_memory_mb();
        if let Some(mb) = memory {
            self.peak_memory_mb = Some(self.peak_memory_mb.map_or(mb, |peak| peak.max(mb)));
        }

        SessionStats {
            commands_handled: self.commands_handled,
            memory_usage_mb: memory,
            peak_memory_mb: self.peak_memory_mb,
            elapsed_time: self.start_time.elapsed(),
        }
    }

    pub fn log_final_stats(&mut self) {
        if !self.enabled {
            return;
        }
        let stats = self.snapshot();
        tracing::info!(
            "📊 Final Stats - Commands: {}, Total Time: {:?}, Peak Memory: {:?}MB",
            stats.commands_handled,
            stats.elapsed_time,
            stats.peak_memory_mb
        );
    }
}

impl Default for SessionMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
