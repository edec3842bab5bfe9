//! Settings loading feeding the merge engine.

use machine_model::config::SettingsLoader;
use machine_model::{ListTruncation, MachineModel};
use serde_json::json;
use std::io::Write;

#[test]
fn test_truncation_policy_from_file_reaches_model() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[merge]\nlist_truncation = \"all\"").unwrap();

    let settings = SettingsLoader::load(Some(file.path())).unwrap();
    assert_eq!(settings.merge.list_truncation, ListTruncation::All);

    let model = MachineModel::new(settings.merge);
    model
        .apply_delta(&json!({"fans": [{"name": "a"}, {"name": "b"}, {"name": "c"}]}))
        .unwrap();
    model.apply_delta(&json!({"fans": [{"rpm": 1200}]})).unwrap();

    let tree = model.read();
    assert_eq!(tree.fans.len(), 1);
    assert_eq!(tree.fans[0].name, "a");
    assert_eq!(tree.fans[0].rpm, 1200);
}

#[test]
fn test_unknown_truncation_policy_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[merge]\nlist_truncation = \"sometimes\"").unwrap();
    assert!(SettingsLoader::load(Some(file.path())).is_err());
}
