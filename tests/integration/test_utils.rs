//! Shared helpers for integration tests.

use machine_model::{ApplyReport, MergeOptions, ModelError, ObjectModel};
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

/// Apply a delta with default options.
pub fn apply(model: &mut ObjectModel, delta: Value) -> Result<ApplyReport, ModelError> {
    model.apply_delta(&delta, &MergeOptions::default())
}

/// Build a model from a sequence of deltas that must all apply.
pub fn model_from(deltas: &[Value]) -> ObjectModel {
    let mut model = ObjectModel::disconnected();
    for delta in deltas {
        apply(&mut model, delta.clone()).unwrap();
    }
    model
}

/// Write lines into a temporary NDJSON file.
pub fn delta_file(lines: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".ndjson").tempfile().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}
