//! Process snapshot types.
//!
//! These types describe what the OS process table looked like at the instant
//! it was read. Pids are recycled by the OS, so none of these values carry
//! identity beyond the call that produced them.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One entry of the process table, as returned by enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessSummary {
    /// OS-assigned process identifier.
    pub pid: u32,
    /// Executable name as reported by the OS.
    pub name: String,
}

impl ProcessSummary {
    /// Create a new summary.
    pub fn new(pid: u32, name: impl Into<String>) -> Self {
        Self {
            pid,
            name: name.into(),
        }
    }
}

/// Metrics for a single process, sampled on demand.
///
/// Never cached: every `detail` call samples the process again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessDetail {
    /// OS-assigned process identifier.
    pub pid: u32,
    /// Executable name as reported by the OS.
    pub name: String,
    /// Physical memory currently occupied by the process.
    pub resident_memory_bytes: u64,
    /// CPU usage over `sample_interval`. May exceed 100 on multi-core hosts.
    pub cpu_percent: f32,
    /// Window the CPU figure was measured over.
    #[serde(with = "duration_millis")]
    pub sample_interval: Duration,
}

impl ProcessDetail {
    /// Resident memory in mebibytes, for display.
    #[allow(clippy::cast_precision_loss)]
    pub fn resident_memory_mb(&self) -> f64 {
        self.resident_memory_bytes as f64 / 1024.0 / 1024.0
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_detail() -> ProcessDetail {
        ProcessDetail {
            pid: 4242,
            name: "worker".to_string(),
            resident_memory_bytes: 3 * 1024 * 1024 + 512 * 1024,
            cpu_percent: 12.5,
            sample_interval: Duration::from_millis(100),
        }
    }

    #[test]
    fn test_resident_memory_mb() {
        let detail = sample_detail();
        assert!((detail.resident_memory_mb() - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_detail_serializes_interval_as_millis() {
        let json = serde_json::to_value(sample_detail()).unwrap();
        assert_eq!(json["sample_interval"], 100);
        assert_eq!(json["pid"], 4242);
    }
}
