//! End-to-end delta semantics on the full object model.

use super::test_utils::{apply, model_from};
use machine_model::model::kinematics::KinematicsVariant;
use machine_model::model::MachineStatus;
use machine_model::{ApplyWarning, ListTruncation, MergeOptions, ModelError, ObjectModel};
use serde_json::json;

#[test]
fn test_heater_removal_repacks_and_merges_by_pre_delta_index() {
    let mut model = model_from(&[json!({
        "heat": {"heaters": [
            {"name": "H0", "current": 20},
            {"name": "H1", "current": 21},
            {"name": "H2", "current": 22}
        ]}
    })]);

    apply(&mut model, json!({"heat": {"heaters": [null, {"current": 205}]}})).unwrap();

    let heaters = &model.heat.heaters;
    assert_eq!(heaters.len(), 2);
    assert_eq!(heaters[0].name.as_deref(), Some("H1"));
    assert_eq!(heaters[0].current, 205.0);
    assert_eq!(heaters[1].name.as_deref(), Some("H2"));
    assert_eq!(heaters[1].current, 22.0);
}

#[test]
fn test_global_variables_delete_insert_and_keep() {
    let mut model = model_from(&[json!({"global": {"a": 1, "b": 2}})]);

    apply(&mut model, json!({"global": {"a": null, "c": 3}})).unwrap();

    let keys: Vec<&String> = model.global.keys().collect();
    assert_eq!(keys, vec!["b", "c"]);
    assert_eq!(model.global.get("b"), Some(&json!(2)));
    assert_eq!(model.global.get("c"), Some(&json!(3)));
}

#[test]
fn test_kinematics_switch_drops_previous_variant_fields() {
    let mut model = model_from(&[json!({
        "move": {"kinematics": {"name": "coreXY", "forwardMatrix": [[1, 1, 0], [1, -1, 0], [0, 0, 1]]}}
    })]);
    assert!(model.motion.kinematics.as_core().is_some());

    apply(&mut model, json!({"move": {"kinematics": {"name": "delta", "diagonal": 215}}})).unwrap();

    let kinematics = &model.motion.kinematics;
    assert_eq!(kinematics.name(), "delta");
    assert_eq!(kinematics.as_delta().unwrap().diagonal, 215.0);

    let rendered = serde_json::to_value(&model).unwrap();
    assert_eq!(rendered["move"]["kinematics"]["diagonal"], json!(215.0));
    assert!(rendered["move"]["kinematics"].get("forwardMatrix").is_none());
}

#[test]
fn test_unknown_kinematics_falls_back_to_base_shape() {
    let mut model = ObjectModel::disconnected();
    let report = apply(
        &mut model,
        json!({"state": {"status": "idle"}, "move": {"kinematics": {"name": "stewartPlatform"}}}),
    )
    .unwrap();

    assert_eq!(model.state.status, MachineStatus::Idle);
    assert_eq!(model.motion.kinematics.name(), "stewartPlatform");
    assert!(matches!(
        model.motion.kinematics.variant(),
        KinematicsVariant::Generic(_)
    ));
    assert!(report
        .warnings
        .iter()
        .any(|w| matches!(w, ApplyWarning::UnknownDiscriminant { name, .. } if name == "stewartPlatform")));
}

#[test]
fn test_fraction_printed_with_zero_size() {
    let model = model_from(&[json!({"job": {"filePosition": 4096, "file": {"size": 0}}})]);
    assert_eq!(model.fraction_printed(), 0.0);
}

#[test]
fn test_shape_mismatch_leaves_tree_unchanged() {
    let mut model = model_from(&[json!({
        "state": {"status": "idle"},
        "tools": [{"number": 0, "name": "hotend"}]
    })]);
    let before = model.clone();

    let err = apply(
        &mut model,
        json!({"state": {"status": "busy"}, "tools": {"0": {"name": "mill"}}}),
    )
    .unwrap_err();

    assert!(matches!(err, ModelError::SchemaMismatch { .. }));
    assert_eq!(err.path().unwrap().to_string(), "tools");
    assert_eq!(model, before);
}

#[test]
fn test_plugin_delta_patches_existing_entry() {
    let mut model = model_from(&[json!({
        "plugins": {"Heightmap": {"id": "Heightmap", "version": "1.0", "pid": 42}}
    })]);

    apply(&mut model, json!({"plugins": {"Heightmap": {"pid": -1}}})).unwrap();
    let plugin = model.plugins.get("Heightmap").unwrap();
    assert_eq!(plugin.version, "1.0");
    assert_eq!(plugin.pid, -1);

    apply(&mut model, json!({"plugins": null})).unwrap();
    assert!(model.plugins.is_empty());
}

#[test]
fn test_value_lists_follow_truncation_policy() {
    let mut model = model_from(&[json!({"heat": {"bedHeaters": [0, 1, 2]}})]);
    apply(&mut model, json!({"heat": {"bedHeaters": [5]}})).unwrap();
    assert_eq!(model.heat.bed_heaters, vec![5, 1, 2]);

    let options = MergeOptions {
        list_truncation: ListTruncation::ValueLists,
    };
    model
        .apply_delta(&json!({"heat": {"bedHeaters": [7]}}), &options)
        .unwrap();
    assert_eq!(model.heat.bed_heaters, vec![7]);
}

#[test]
fn test_optional_sub_object_allocates_and_clears() {
    let mut model = ObjectModel::disconnected();
    apply(&mut model, json!({"state": {"messageBox": {"title": "Heads up", "message": "Check bed"}}})).unwrap();
    let message_box = model.state.message_box.as_ref().unwrap();
    assert_eq!(message_box.title, "Heads up");

    apply(&mut model, json!({"state": {"messageBox": null}})).unwrap();
    assert!(model.state.message_box.is_none());
}
