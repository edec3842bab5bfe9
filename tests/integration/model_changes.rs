//! Shared model instance: change notifications, plugin lifecycle, concurrent readers.

use machine_model::model::{MachineStatus, Plugin};
use machine_model::{ChangeKind, MachineModel, MergeOptions};
use serde_json::json;
use std::sync::Arc;
use std::thread;

#[test]
fn test_changes_arrive_in_sequence_order() {
    let model = MachineModel::default();
    let changes = model.subscribe();

    model.apply_delta(&json!({"state": {"status": "idle"}})).unwrap();
    model.register_plugin(Plugin::new("Heightmap")).unwrap();
    assert!(model.apply_delta(&json!({"state": {"upTime": "long"}})).is_err());
    model.unregister_plugin("Heightmap");
    model.reset();

    let received: Vec<_> = changes.try_iter().collect();
    let sequences: Vec<u64> = received.iter().map(|c| c.sequence).collect();
    assert_eq!(sequences, vec![1, 2, 3, 4]);
    assert_eq!(received[3].kind, ChangeKind::Reset);
    assert_eq!(model.sequence(), 4);
}

#[test]
fn test_dropped_subscriber_does_not_block_others() {
    let model = MachineModel::default();
    let dropped = model.subscribe();
    let kept = model.subscribe();
    drop(dropped);

    model.apply_delta(&json!({"fans": [{"name": "part"}]})).unwrap();
    assert_eq!(kept.try_recv().unwrap().sequence, 1);
}

#[test]
fn test_change_serializes_with_rfc3339_timestamp() {
    let model = MachineModel::default();
    let changes = model.subscribe();
    model.apply_delta(&json!({"global": {"x": 1}})).unwrap();

    let change = serde_json::to_value(changes.recv().unwrap()).unwrap();
    assert_eq!(change["type"], json!("delta"));
    assert_eq!(change["keys"], json!(["global"]));
    let ts = change["ts"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

#[test]
fn test_readers_never_observe_partial_delta() {
    let model = Arc::new(MachineModel::new(MergeOptions::default()));
    model
        .apply_delta(&json!({"heat": {"heaters": [{"current": 0, "active": 0}]}}))
        .unwrap();

    let writer = {
        let model = Arc::clone(&model);
        thread::spawn(move || {
            for step in 1..=200 {
                let value = step as f64;
                model
                    .apply_delta(&json!({"heat": {"heaters": [{"current": value, "active": value}]}}))
                    .unwrap();
            }
        })
    };

    for _ in 0..200 {
        let tree = model.read();
        let heater = &tree.heat.heaters[0];
        assert_eq!(heater.current, heater.active);
    }
    writer.join().unwrap();
    assert_eq!(model.read().heat.heaters[0].current, 200.0);
}

#[test]
fn test_registered_plugin_is_patched_by_later_deltas() {
    let model = MachineModel::default();
    let mut plugin = Plugin::new("InputShaping");
    plugin.version = "3.5.0".to_string();
    model.register_plugin(plugin).unwrap();

    model
        .apply_delta(&json!({"plugins": {"InputShaping": {"pid": 311}}, "state": {"status": "idle"}}))
        .unwrap();

    let tree = model.read();
    let plugin = tree.plugins.get("InputShaping").unwrap();
    assert_eq!(plugin.version, "3.5.0");
    assert!(plugin.is_running());
    assert_eq!(tree.state.status, MachineStatus::Idle);
}
