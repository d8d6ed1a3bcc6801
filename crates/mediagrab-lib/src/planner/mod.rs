use sysinfo::System;

/// Point-in-time view of host load, taken once before a run starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResourceSnapshot {
    /// Global CPU utilization, 0-100.
    pub cpu_usage: f32,
    pub available_memory_mb: f64,
}

/// Sizes the download gate from a resource snapshot.
///
/// First matching row wins; `None` (sensing unavailable) lands on the
/// lowest tier rather than failing the run. The result is computed once
/// per run and stays fixed even if host load changes mid-run.
pub fn plan(snapshot: Option<ResourceSnapshot>) -> usize {
    match snapshot {
        Some(s) if s.cpu_usage < 30.0 && s.available_memory_mb > 2000.0 => 50,
        Some(s) if s.cpu_usage < 60.0 && s.available_memory_mb > 1000.0 => 30,
        _ => 10,
    }
}

pub trait ResourceSensor: Send + Sync {
    fn snapshot(&self) -> Option<ResourceSnapshot>;
}

/// Production sensor backed by `sysinfo`.
pub struct SystemSensor;

impl ResourceSensor for SystemSensor {
    fn snapshot(&self) -> Option<ResourceSnapshot> {
        let mut sys = System::new();
        // CPU usage is a delta between two refreshes.
        sys.refresh_cpu_usage();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let available = sys.available_memory();
        if available == 0 {
            // Memory stats unsupported on this platform.
            return None;
        }

        Some(ResourceSnapshot {
            cpu_usage: sys.global_cpu_usage(),
            available_memory_mb: available as f64 / (1024.0 * 1024.0),
        })
    }
}

/// Fixed-answer sensor for tests.
pub struct StaticSensor(pub Option<ResourceSnapshot>);

impl ResourceSensor for StaticSensor {
    fn snapshot(&self) -> Option<ResourceSnapshot> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(cpu_usage: f32, available_memory_mb: f64) -> Option<ResourceSnapshot> {
        Some(ResourceSnapshot {
            cpu_usage,
            available_memory_mb,
        })
    }

    #[test]
    fn test_plan_idle_host_gets_widest_gate() {
        assert_eq!(plan(snap(25.0, 2500.0)), 50);
        assert_eq!(plan(snap(0.0, 100_000.0)), 50);
    }

    #[test]
    fn test_plan_moderate_load_gets_middle_tier() {
        assert_eq!(plan(snap(45.0, 1500.0)), 30);
        assert_eq!(plan(snap(59.9, 1000.1)), 30);
        // Plenty of memory but busy CPU still lands in the middle tier.
        assert_eq!(plan(snap(45.0, 8000.0)), 30);
    }

    #[test]
    fn test_plan_loaded_host_gets_lowest_tier() {
        assert_eq!(plan(snap(80.0, 500.0)), 10);
        assert_eq!(plan(snap(60.0, 8000.0)), 10);
        assert_eq!(plan(snap(10.0, 900.0)), 10);
    }

    #[test]
    fn test_plan_boundaries_are_exclusive() {
        assert_eq!(plan(snap(30.0, 2500.0)), 30);
        assert_eq!(plan(snap(25.0, 2000.0)), 30);
        assert_eq!(plan(snap(60.0, 1500.0)), 10);
        assert_eq!(plan(snap(45.0, 1000.0)), 10);
    }

    #[test]
    fn test_plan_without_snapshot_falls_back_to_lowest_tier() {
        assert_eq!(plan(None), 10);
    }

    #[test]
    fn test_plan_is_deterministic() {
        let s = snap(45.0, 1500.0);
        assert_eq!(plan(s), plan(s));
    }
}
