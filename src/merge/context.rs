//! Per-apply merge state: current path, options and collected warnings.

use super::path::{ModelPath, PathSegment};
use super::MergeOptions;
use crate::error::{ApplyWarning, ModelError};
use serde_json::Value;
use tracing::trace;

pub struct MergeContext<'a> {
    options: &'a MergeOptions,
    path: ModelPath,
    warnings: Vec<ApplyWarning>,
}

impl<'a> MergeContext<'a> {
    pub fn new(options: &'a MergeOptions) -> Self {
        Self {
            options,
            path: ModelPath::root(),
            warnings: Vec::new(),
        }
    }

    pub fn options(&self) -> &MergeOptions {
        self.options
    }

    pub fn path(&self) -> &ModelPath {
        &self.path
    }

    /// Run `f` with `segment` appended to the current path.
    pub fn descend<T>(
        &mut self,
        segment: impl Into<PathSegment>,
        f: impl FnOnce(&mut Self) -> Result<T, ModelError>,
    ) -> Result<T, ModelError> {
        self.path.push(segment.into());
        let result = f(self);
        self.path.pop();
        result
    }

    /// Build a `SchemaMismatch` for the current path.
    pub fn mismatch(&self, expected: &'static str, found: &Value) -> ModelError {
        ModelError::SchemaMismatch {
            path: self.path.clone(),
            expected,
            found: describe(found),
        }
    }

    /// Build a `SchemaMismatch` for a child of the current path.
    pub fn mismatch_at(
        &mut self,
        segment: impl Into<PathSegment>,
        expected: &'static str,
        found: &Value,
    ) -> ModelError {
        self.path.push(segment.into());
        let err = self.mismatch(expected, found);
        self.path.pop();
        err
    }

    pub fn unknown_field(&mut self, field: &str) {
        trace!(path = %self.path, field, "Ignoring unknown field");
        self.warnings.push(ApplyWarning::UnknownField {
            path: self.path.clone(),
            field: field.to_string(),
        });
    }

    pub fn unknown_discriminant(&mut self, name: &str) {
        self.warnings.push(ApplyWarning::UnknownDiscriminant {
            path: self.path.clone(),
            name: name.to_string(),
        });
    }

    pub fn warnings(&self) -> &[ApplyWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<ApplyWarning> {
        self.warnings
    }
}

/// Short description of a JSON value's kind for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
