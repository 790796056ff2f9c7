use serde::Deserialize;

/// Fully normalized telemetry state. Renderers may assume every field is
/// populated; defaulting of absent wire fields happens in `normalize`,
/// nowhere else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub cpu: CpuMetrics,
    pub memory: MemoryMetrics,
    pub gpu: GpuMetrics,
    pub disk: Vec<DiskMetrics>,
    pub network: NetworkMetrics,
    pub system: SystemInfo,
    pub predictions: Predictions,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuMetrics {
    pub usage: f64,
    pub frequency: f64,
    pub cores: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryMetrics {
    pub percent: f64,
    pub available: u64,
    pub total: u64,
    pub swap_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GpuMetrics {
    pub available: bool,
    pub usage: f64,
    pub kind: String,
}

impl Default for GpuMetrics {
    fn default() -> Self {
        GpuMetrics {
            available: false,
            usage: 0.0,
            kind: "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskMetrics {
    pub mountpoint: String,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkMetrics {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemInfo {
    pub os: String,
    pub os_version: String,
    pub processor: String,
    pub boot_time: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predictions {
    pub cpu: f64,
}

/// One sample of the rolling chart, captured from the merged snapshot at
/// apply time.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub time: String,
    pub cpu: f64,
    pub memory: f64,
    pub gpu: f64,
    pub predicted_cpu: f64,
}

/// Wire shape of an inbound update. Every field is optional so that both
/// absent keys and explicit nulls decode; the producer sends whatever subset
/// it managed to sample.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SnapshotUpdate {
    pub cpu: Option<CpuUpdate>,
    pub memory: Option<MemoryUpdate>,
    pub gpu: Option<GpuUpdate>,
    pub disk: Option<Vec<DiskUpdate>>,
    pub network: Option<NetworkUpdate>,
    pub system: Option<SystemInfoUpdate>,
    pub predictions: Option<PredictionsUpdate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CpuUpdate {
    pub usage: Option<f64>,
    pub frequency: Option<f64>,
    pub cores: Option<u32>,
}

impl CpuUpdate {
    pub fn normalize(self) -> CpuMetrics {
        CpuMetrics {
            usage: self.usage.unwrap_or(0.0),
            frequency: self.frequency.unwrap_or(0.0),
            cores: self.cores.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MemoryUpdate {
    pub percent: Option<f64>,
    pub available: Option<u64>,
    pub total: Option<u64>,
    pub swap_percent: Option<f64>,
}

impl MemoryUpdate {
    pub fn normalize(self) -> MemoryMetrics {
        MemoryMetrics {
            percent: self.percent.unwrap_or(0.0),
            available: self.available.unwrap_or(0),
            total: self.total.unwrap_or(0),
            swap_percent: self.swap_percent.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GpuUpdate {
    pub available: Option<bool>,
    pub usage: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl GpuUpdate {
    pub fn normalize(self) -> GpuMetrics {
        GpuMetrics {
            available: self.available.unwrap_or(false),
            usage: self.usage.unwrap_or(0.0),
            kind: self.kind.unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DiskUpdate {
    pub mountpoint: Option<String>,
    pub used: Option<u64>,
    pub free: Option<u64>,
    pub percent: Option<f64>,
}

impl DiskUpdate {
    pub fn normalize(self) -> DiskMetrics {
        DiskMetrics {
            mountpoint: self.mountpoint.unwrap_or_default(),
            used: self.used.unwrap_or(0),
            free: self.free.unwrap_or(0),
            percent: self.percent.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NetworkUpdate {
    pub bytes_sent: Option<u64>,
    pub bytes_recv: Option<u64>,
}

impl NetworkUpdate {
    pub fn normalize(self) -> NetworkMetrics {
        NetworkMetrics {
            bytes_sent: self.bytes_sent.unwrap_or(0),
            bytes_recv: self.bytes_recv.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SystemInfoUpdate {
    pub os: Option<String>,
    pub os_version: Option<String>,
    pub processor: Option<String>,
    pub boot_time: Option<String>,
}

impl SystemInfoUpdate {
    pub fn normalize(self) -> SystemInfo {
        SystemInfo {
            os: self.os.unwrap_or_default(),
            os_version: self.os_version.unwrap_or_default(),
            processor: self.processor.unwrap_or_default(),
            boot_time: self.boot_time.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PredictionsUpdate {
    pub cpu: Option<f64>,
}

impl PredictionsUpdate {
    pub fn normalize(self) -> Predictions {
        Predictions {
            cpu: self.cpu.unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_zeroed() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.cpu.usage, 0.0);
        assert_eq!(snapshot.memory.total, 0);
        assert!(!snapshot.gpu.available);
        assert_eq!(snapshot.gpu.kind, "N/A");
        assert!(snapshot.disk.is_empty());
        assert_eq!(snapshot.system.os, "");
    }

    #[test]
    fn update_decodes_with_nulls_and_missing_fields() {
        let raw = r#"{"cpu": {"usage": 42.5, "frequency": null}, "gpu": {"available": true, "usage": null, "type": null}}"#;
        let update: SnapshotUpdate = serde_json::from_str(raw).unwrap();

        let cpu = update.cpu.unwrap().normalize();
        assert_eq!(cpu.usage, 42.5);
        assert_eq!(cpu.frequency, 0.0);
        assert_eq!(cpu.cores, 0);

        let gpu = update.gpu.unwrap().normalize();
        assert!(gpu.available);
        assert_eq!(gpu.usage, 0.0);
        assert_eq!(gpu.kind, "N/A");

        assert!(update.memory.is_none());
        assert!(update.disk.is_none());
    }

    #[test]
    fn unknown_wire_fields_are_ignored() {
        // The producer also sends fields the client never renders
        // (timestamp, disk.device, disk.total).
        let raw = r#"{
            "timestamp": "2026-08-30 12:00:00",
            "disk": [{"device": "/dev/sda1", "mountpoint": "/", "total": 100, "used": 60, "free": 40, "percent": 60.0}]
        }"#;
        let update: SnapshotUpdate = serde_json::from_str(raw).unwrap();
        let disks = update.disk.unwrap();
        assert_eq!(disks.len(), 1);
        let disk = disks.into_iter().next().unwrap().normalize();
        assert_eq!(disk.mountpoint, "/");
        assert_eq!(disk.used, 60);
    }
}
