//! Scalar, optional and free-form value merges.

use super::{Merge, MergeContext};
use crate::error::ModelError;
use serde_json::{Number, Value};

impl Merge for bool {
    fn merge(&mut self, delta: &Value, ctx: &mut MergeContext<'_>) -> Result<(), ModelError> {
        match delta {
            Value::Null => *self = false,
            Value::Bool(b) => *self = *b,
            other => return Err(ctx.mismatch("boolean", other)),
        }
        Ok(())
    }
}

impl Merge for String {
    fn merge(&mut self, delta: &Value, ctx: &mut MergeContext<'_>) -> Result<(), ModelError> {
        match delta {
            Value::Null => self.clear(),
            Value::String(s) => s.clone_into(self),
            other => return Err(ctx.mismatch("string", other)),
        }
        Ok(())
    }
}

impl Merge for f64 {
    fn merge(&mut self, delta: &Value, ctx: &mut MergeContext<'_>) -> Result<(), ModelError> {
        match delta {
            Value::Null => *self = 0.0,
            Value::Number(n) => match n.as_f64() {
                Some(v) => *self = v,
                None => return Err(ctx.mismatch("number", delta)),
            },
            other => return Err(ctx.mismatch("number", other)),
        }
        Ok(())
    }
}

/// Integral value of a JSON number, accepting floats with no fractional part.
fn integral(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
        .or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < 1e18)
                .map(|f| f as i128)
        })
}

macro_rules! integer_merge {
    ($($ty:ty),+) => {
        $(impl Merge for $ty {
            fn merge(
                &mut self,
                delta: &Value,
                ctx: &mut MergeContext<'_>,
            ) -> Result<(), ModelError> {
                match delta {
                    Value::Null => *self = 0,
                    Value::Number(n) => {
                        *self = integral(n)
                            .and_then(|i| <$ty>::try_from(i).ok())
                            .ok_or_else(|| ctx.mismatch(stringify!($ty), delta))?;
                    }
                    other => return Err(ctx.mismatch(stringify!($ty), other)),
                }
                Ok(())
            }
        })+
    };
}

integer_merge!(i32, i64, u8, u32, u64);

impl<T: Merge + Default> Merge for Option<T> {
    fn merge(&mut self, delta: &Value, ctx: &mut MergeContext<'_>) -> Result<(), ModelError> {
        if delta.is_null() {
            *self = None;
            return Ok(());
        }
        self.get_or_insert_with(T::default).merge(delta, ctx)
    }
}

impl Merge for Value {
    fn merge(&mut self, delta: &Value, _ctx: &mut MergeContext<'_>) -> Result<(), ModelError> {
        merge_value(self, delta);
        Ok(())
    }
}

/// Merge free-form JSON: objects merge key by key, anything else replaces.
pub fn merge_value(target: &mut Value, delta: &Value) {
    match (target, delta) {
        (Value::Object(current), Value::Object(fields)) => {
            for (key, value) in fields {
                match current.get_mut(key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        current.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, delta) => *target = delta.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::MergeOptions;
    use serde_json::json;

    fn merge<T: Merge>(target: &mut T, delta: Value) -> Result<(), ModelError> {
        let options = MergeOptions::default();
        let mut ctx = MergeContext::new(&options);
        target.merge(&delta, &mut ctx)
    }

    #[test]
    fn test_null_resets_scalars() {
        let mut value = 12.5f64;
        merge(&mut value, Value::Null).unwrap();
        assert_eq!(value, 0.0);

        let mut flag = true;
        merge(&mut flag, Value::Null).unwrap();
        assert!(!flag);
    }

    #[test]
    fn test_integer_accepts_integral_float() {
        let mut value = 0i32;
        merge(&mut value, json!(2.0)).unwrap();
        assert_eq!(value, 2);
    }

    #[test]
    fn test_integer_rejects_fraction_and_overflow() {
        let mut value = 0i32;
        assert!(merge(&mut value, json!(2.5)).is_err());
        assert!(merge(&mut value, json!(5_000_000_000i64)).is_err());

        let mut unsigned = 0u32;
        assert!(merge(&mut unsigned, json!(-1)).is_err());
    }

    #[test]
    fn test_string_rejects_number() {
        let mut value = String::from("x");
        let err = merge(&mut value, json!(3)).unwrap_err();
        assert!(matches!(err, ModelError::SchemaMismatch { expected: "string", .. }));
        assert_eq!(value, "x");
    }

    #[test]
    fn test_option_allocates_then_clears() {
        let mut value: Option<f64> = None;
        merge(&mut value, json!(1.5)).unwrap();
        assert_eq!(value, Some(1.5));
        merge(&mut value, Value::Null).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_free_form_value_merges_objects() {
        let mut value = json!({"status": "running", "nested": {"a": 1, "b": 2}});
        merge_value(&mut value, &json!({"nested": {"b": 3}, "extra": [1]}));
        assert_eq!(
            value,
            json!({"status": "running", "nested": {"a": 1, "b": 3}, "extra": [1]})
        );

        merge_value(&mut value, &json!({"nested": 7}));
        assert_eq!(value["nested"], json!(7));
    }
}
