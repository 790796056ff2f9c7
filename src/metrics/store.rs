use std::collections::VecDeque;

use thiserror::Error;

use super::snapshot::{HistoryPoint, Snapshot, SnapshotUpdate};

/// Fixed length of the rolling chart window.
pub const HISTORY_CAPACITY: usize = 20;

/// Inbound payload was not a valid partial snapshot. Contained at the apply
/// boundary; the store is untouched when this is returned.
#[derive(Debug, Error)]
#[error("invalid metrics payload: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Holds the latest merged snapshot and the bounded history window. The
/// event loop is the only writer; everything else reads.
#[derive(Debug)]
pub struct MetricsStore {
    snapshot: Snapshot,
    history: VecDeque<HistoryPoint>,
    capacity: usize,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    fn with_capacity(capacity: usize) -> Self {
        MetricsStore {
            snapshot: Snapshot::default(),
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Decode a raw payload and apply it. Decoding happens before any
    /// mutation, so a malformed payload leaves both the snapshot and the
    /// history window exactly as they were.
    pub fn apply_payload(&mut self, raw: &str) -> Result<(), DecodeError> {
        let update: SnapshotUpdate = serde_json::from_str(raw)?;
        self.apply(update);
        Ok(())
    }

    /// Shallow-merge a partial update and record one history point.
    pub fn apply(&mut self, update: SnapshotUpdate) {
        let time = chrono::Local::now().format("%H:%M:%S").to_string();
        self.apply_at(update, time);
    }

    /// `apply` with an explicit timestamp, split out so tests are
    /// deterministic.
    pub fn apply_at(&mut self, update: SnapshotUpdate, time: String) {
        // Top-level keys present in the update replace the nested value
        // wholesale; absent keys keep the prior value.
        if let Some(cpu) = update.cpu {
            self.snapshot.cpu = cpu.normalize();
        }
        if let Some(memory) = update.memory {
            self.snapshot.memory = memory.normalize();
        }
        if let Some(gpu) = update.gpu {
            self.snapshot.gpu = gpu.normalize();
        }
        if let Some(disk) = update.disk {
            self.snapshot.disk = disk.into_iter().map(|d| d.normalize()).collect();
        }
        if let Some(network) = update.network {
            self.snapshot.network = network.normalize();
        }
        if let Some(system) = update.system {
            self.snapshot.system = system.normalize();
        }
        if let Some(predictions) = update.predictions {
            self.snapshot.predictions = predictions.normalize();
        }

        // The point is derived from the merged snapshot, so a cpu-only
        // update still carries the current memory/gpu values.
        let point = HistoryPoint {
            time,
            cpu: self.snapshot.cpu.usage,
            memory: self.snapshot.memory.percent,
            gpu: self.snapshot.gpu.usage,
            predicted_cpu: self.snapshot.predictions.cpu,
        };
        self.history.push_back(point);
        while self.history.len() > self.capacity {
            self.history.pop_front();
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn history(&self) -> &VecDeque<HistoryPoint> {
        &self.history
    }
}

impl Default for MetricsStore {
    fn default() -> Self {
        Self::new()
    }
}
