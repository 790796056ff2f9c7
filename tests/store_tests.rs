use proptest::prelude::*;
use pulsedash::metrics::snapshot::SnapshotUpdate;
use pulsedash::metrics::store::{HISTORY_CAPACITY, MetricsStore};

fn update_with_cpu(usage: f64) -> SnapshotUpdate {
    serde_json::from_str(&format!(r#"{{"cpu": {{"usage": {usage}}}}}"#)).unwrap()
}

#[test]
fn window_holds_exactly_the_last_twenty_updates() {
    let mut store = MetricsStore::new();
    for i in 1..=21u32 {
        store.apply_at(update_with_cpu(f64::from(i)), format!("t{i}"));
    }

    let history = store.history();
    assert_eq!(history.len(), HISTORY_CAPACITY);

    // U1 evicted; U2..U21 remain in application order.
    let recorded: Vec<f64> = history.iter().map(|p| p.cpu).collect();
    let expected: Vec<f64> = (2..=21).map(f64::from).collect();
    assert_eq!(recorded, expected);
}

#[test]
fn malformed_payload_after_valid_snapshot_changes_nothing() {
    let mut store = MetricsStore::new();
    store
        .apply_payload(r#"{"cpu": {"usage": 50.0}, "memory": {"percent": 30.0}}"#)
        .unwrap();
    let snapshot_before = store.snapshot().clone();
    let history_before = store.history().clone();

    let err = store.apply_payload("{not json").unwrap_err();
    assert!(err.to_string().contains("invalid metrics payload"));

    assert_eq!(store.snapshot(), &snapshot_before);
    assert_eq!(store.history(), &history_before);
}

#[test]
fn partial_update_preserves_untouched_top_level_keys() {
    let mut store = MetricsStore::new();
    store
        .apply_payload(r#"{"cpu": {"usage": 50.0}, "memory": {"percent": 30.0}}"#)
        .unwrap();
    store.apply_payload(r#"{"cpu": {"usage": 75.0}}"#).unwrap();

    assert_eq!(store.snapshot().cpu.usage, 75.0);
    assert_eq!(store.snapshot().memory.percent, 30.0);
}

#[test]
fn full_producer_payload_round_trips_into_the_snapshot() {
    // Shape of an actual producer frame, including fields the client
    // does not render (timestamp, disk.device, disk.total).
    let raw = r#"{
        "timestamp": "2026-08-30 12:00:00",
        "cpu": {"usage": 37.2, "frequency": 3200.0, "cores": 12},
        "memory": {"total": 34359738368, "available": 17179869184, "percent": 50.0, "swap_percent": 4.2},
        "gpu": {"available": true, "type": "AMD", "usage": 21.0},
        "disk": [
            {"device": "/dev/nvme0n1p2", "mountpoint": "/", "total": 500, "used": 300, "free": 200, "percent": 60.0},
            {"device": "/dev/nvme0n1p1", "mountpoint": "/boot", "total": 1, "used": 0, "free": 1, "percent": 10.0}
        ],
        "network": {"bytes_sent": 123456, "bytes_recv": 654321},
        "system": {"os": "Linux", "os_version": "6.8", "processor": "x86_64", "boot_time": "2026-08-30 08:00:00"},
        "predictions": {"cpu": 39.9}
    }"#;

    let mut store = MetricsStore::new();
    store.apply_payload(raw).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.cpu.cores, 12);
    assert_eq!(snapshot.memory.percent, 50.0);
    assert!(snapshot.gpu.available);
    assert_eq!(snapshot.gpu.kind, "AMD");
    assert_eq!(snapshot.disk.len(), 2);
    assert_eq!(snapshot.disk[1].mountpoint, "/boot");
    assert_eq!(snapshot.network.bytes_recv, 654_321);
    assert_eq!(snapshot.predictions.cpu, 39.9);

    let point = store.history().back().unwrap();
    assert_eq!(point.cpu, 37.2);
    assert_eq!(point.memory, 50.0);
    assert_eq!(point.gpu, 21.0);
    assert_eq!(point.predicted_cpu, 39.9);
}

proptest! {
    #[test]
    fn window_length_is_min_of_updates_and_capacity(n in 0usize..60) {
        let mut store = MetricsStore::new();
        for i in 0..n {
            store.apply_at(update_with_cpu(i as f64), format!("t{i}"));
        }
        prop_assert_eq!(store.history().len(), n.min(HISTORY_CAPACITY));
    }

    #[test]
    fn window_always_ends_with_the_latest_update(n in 1usize..60) {
        let mut store = MetricsStore::new();
        for i in 0..n {
            store.apply_at(update_with_cpu(i as f64), format!("t{i}"));
        }
        prop_assert_eq!(store.history().back().unwrap().cpu, (n - 1) as f64);
    }
}
