//! Properties that must hold for every delta, not just the hand-picked ones.

use machine_model::model::kinematics::KinematicsVariant;
use machine_model::{MergeOptions, ObjectModel};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn apply(model: &mut ObjectModel, delta: &Value) -> bool {
    model.apply_delta(delta, &MergeOptions::default()).is_ok()
}

/// Well-formed top-level fragments; any subset of them is a valid delta.
fn fragments() -> Vec<(&'static str, Value)> {
    vec![
        ("state", json!({"status": "processing", "upTime": 300})),
        ("fans", json!([{"name": "part", "rpm": 4000}])),
        ("heat", json!({"heaters": [{"current": 210.5, "max": 285}]})),
        ("global", json!({"probeOffset": 1.5})),
        ("job", json!({"filePosition": 100, "file": {"size": 400}})),
        ("move", json!({"axes": [{"letter": "X"}, {"letter": "Y"}]})),
        ("tools", json!([{"number": 0, "heaters": [1]}])),
    ]
}

fn seeded_model() -> ObjectModel {
    let mut model = ObjectModel::disconnected();
    let seed = json!({
        "state": {"status": "idle"},
        "fans": [{"name": "hotend"}],
        "heat": {"heaters": [{"current": 20}, {"current": 21}]},
        "global": {"layerCount": 3},
        "job": {"lastFileName": "0:/gcodes/benchy.gcode"},
        "move": {"kinematics": {"name": "coreXY", "forwardMatrix": [[1, 1, 0], [1, -1, 0], [0, 0, 1]]}},
        "tools": [{"number": 0, "name": "T0"}]
    });
    assert!(apply(&mut model, &seed));
    model
}

/// Fields absent from a delta are unchanged after it is applied.
#[test]
fn test_absent_fields_retained_property() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let count = fragments().len();

    runner
        .run(&proptest::collection::vec(any::<bool>(), count), |mask| {
            let mut delta = Map::new();
            for ((key, value), include) in fragments().into_iter().zip(&mask) {
                if *include {
                    delta.insert(key.to_string(), value);
                }
            }

            let mut model = seeded_model();
            let before = serde_json::to_value(&model).unwrap();
            prop_assert!(apply(&mut model, &Value::Object(delta.clone())));
            let after = serde_json::to_value(&model).unwrap();

            for (key, value) in before.as_object().unwrap() {
                if !delta.contains_key(key) {
                    prop_assert_eq!(&after[key], value, "field {} changed", key);
                }
            }
            Ok(())
        })
        .unwrap();
}

fn falsy_or_value() -> BoxedStrategy<Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!(false)),
        Just(json!(0)),
        Just(json!("")),
        (1i64..1000).prop_map(|n| json!(n)),
        "[a-z]{1,6}".prop_map(|s| json!(s)),
    ]
    .boxed()
}

/// A keyed-map key given a falsy value is gone afterwards, whether or not it existed.
#[test]
fn test_keyed_map_falsy_deletes_property() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let keys = proptest::collection::btree_map("[a-e]", falsy_or_value(), 0..5);

    runner
        .run(&(keys.clone(), keys), |(initial, delta)| {
            let mut model = ObjectModel::disconnected();
            let seed: Map<String, Value> = initial
                .into_iter()
                .filter(|(_, value)| !machine_model::merge::is_falsy(value))
                .collect();
            prop_assert!(apply(&mut model, &json!({"global": seed.clone()})), "apply returned false");
            prop_assert!(apply(&mut model, &json!({"global": delta.clone()})), "apply returned false");

            for (key, value) in &delta {
                if machine_model::merge::is_falsy(value) {
                    prop_assert!(!model.global.contains_key(key));
                } else {
                    prop_assert_eq!(model.global.get(key), Some(value));
                }
            }
            for (key, value) in &seed {
                if !delta.contains_key(key) {
                    prop_assert_eq!(model.global.get(key), Some(value));
                }
            }
            Ok(())
        })
        .unwrap();
}

/// A null at index i removes exactly that entity; survivors keep their order.
#[test]
fn test_sparse_null_removes_one_property() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let strategy = (1usize..8).prop_flat_map(|len| (Just(len), 0..len));

    runner
        .run(&strategy, |(len, removed)| {
            let names: Vec<String> = (0..len).map(|i| format!("fan{}", i)).collect();
            let seed: Vec<Value> = names.iter().map(|name| json!({"name": name})).collect();
            let mut model = ObjectModel::disconnected();
            prop_assert!(apply(&mut model, &json!({"fans": seed})), "apply returned false");

            let mut delta: Vec<Value> = vec![json!({}); removed];
            delta.push(Value::Null);
            prop_assert!(apply(&mut model, &json!({"fans": delta})), "apply returned false");

            let mut expected = names.clone();
            expected.remove(removed);
            let actual: Vec<String> = model.fans.iter().map(|fan| fan.name.clone()).collect();
            prop_assert_eq!(actual, expected);
            Ok(())
        })
        .unwrap();
}

/// Applying the same variant-changing delta twice equals applying it once, the payload
/// carries the delta's values and nothing of the previous variant survives.
#[test]
fn test_kinematics_switch_idempotent_property() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let names = prop_oneof![
        Just("delta"),
        Just("rotaryDelta"),
        Just("hangprinter"),
        Just("scara"),
        Just("coreXZ"),
        Just("mysteryBot"),
    ];

    runner
        .run(&(names, 100.0f64..400.0), |(name, diagonal)| {
            let delta = json!({"move": {"kinematics": {
                "name": name,
                "diagonal": diagonal,
                "printRadius": diagonal / 2.0
            }}});

            let mut once = seeded_model();
            prop_assert!(apply(&mut once, &delta));
            let mut twice = once.clone();
            prop_assert!(apply(&mut twice, &delta));

            prop_assert_eq!(&once, &twice);

            let kinematics = &twice.motion.kinematics;
            prop_assert_eq!(kinematics.name(), name);
            match kinematics.variant() {
                KinematicsVariant::Delta(delta) => {
                    prop_assert_eq!(delta.diagonal, diagonal);
                    prop_assert_eq!(delta.print_radius, diagonal / 2.0);
                }
                KinematicsVariant::Hangprinter(hangprinter) => {
                    prop_assert_eq!(hangprinter.print_radius, diagonal / 2.0);
                }
                KinematicsVariant::Core(core) => {
                    // coreXZ shares the shape but still starts from identity matrices
                    prop_assert_eq!(core.forward_matrix[0][1], 0.0);
                }
                KinematicsVariant::ZLeadscrew(_) | KinematicsVariant::Generic(_) => {}
            }
            if matches!(name, "delta" | "rotaryDelta") {
                prop_assert!(kinematics.as_delta().is_some());
            }
            if name == "hangprinter" {
                prop_assert!(matches!(kinematics.variant(), KinematicsVariant::Hangprinter(_)));
            }

            let rendered = serde_json::to_value(kinematics).unwrap();
            if kinematics.as_core().is_none() {
                prop_assert!(rendered.get("forwardMatrix").is_none());
            }
            Ok(())
        })
        .unwrap();
}

/// A delta with one bad field leaves the whole tree as it was.
#[test]
fn test_all_or_nothing_property() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let bad = prop_oneof![
        Just(json!({"state": {"upTime": "yesterday"}})),
        Just(json!({"fans": {"rpm": 10}})),
        Just(json!({"heat": {"heaters": [{}, {"current": [1]}]}})),
        Just(json!({"tools": [{"state": "exploded"}]})),
        Just(json!({"global": []})),
    ];
    let count = fragments().len();

    runner
        .run(
            &(proptest::collection::vec(any::<bool>(), count), bad),
            |(mask, bad)| {
                let mut delta = Map::new();
                for ((key, value), include) in fragments().into_iter().zip(&mask) {
                    if *include {
                        delta.insert(key.to_string(), value);
                    }
                }
                for (key, value) in bad.as_object().unwrap() {
                    delta.insert(key.clone(), value.clone());
                }

                let mut model = seeded_model();
                let before = model.clone();
                prop_assert!(!apply(&mut model, &Value::Object(delta)));
                prop_assert_eq!(model, before);
                Ok(())
            },
        )
        .unwrap();
}
