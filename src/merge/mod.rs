//! Merge Engine
//!
//! Applies a partial delta document onto the typed object model. The merge rule for
//! every path is chosen by the Rust type of the field it lands in:
//!
//! - scalars and enums overwrite (null resets to the schema default)
//! - field structs merge key by key, ignoring keys the schema does not know
//! - `Vec<T>` merges positionally (value lists)
//! - [`EntityList`] applies the sparse-array rule
//! - [`KeyedMap`] applies the keyed-map rule
//! - `Kinematics` switches variant when its discriminant changes
//!
//! Field tables are declared once per struct with the `fields!` macro, so routing is
//! fixed when the schema is defined rather than discovered per call.

mod context;
mod keyed;
mod lists;
mod path;
mod scalar;

pub use context::MergeContext;
pub use keyed::{is_falsy, KeyedEntry, KeyedMap};
pub use lists::EntityList;
pub use path::{ModelPath, PathSegment};
pub use scalar::merge_value;

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Something a delta can be merged into.
///
/// On error the target may hold a partially merged state; callers that need
/// all-or-nothing behavior merge into a copy and commit it on success.
pub trait Merge {
    fn merge(&mut self, delta: &Value, ctx: &mut MergeContext<'_>) -> Result<(), ModelError>;
}

/// A struct with a fixed, named field set.
pub trait Fields: Default {
    /// Merge one field. Returns `false` when the schema has no field called `key`.
    fn merge_field(
        &mut self,
        key: &str,
        delta: &Value,
        ctx: &mut MergeContext<'_>,
    ) -> Result<bool, ModelError>;
}

/// Default object merge: recurse field by field, reset on null.
pub fn merge_object<T: Fields>(
    target: &mut T,
    delta: &Value,
    ctx: &mut MergeContext<'_>,
) -> Result<(), ModelError> {
    match delta {
        Value::Null => {
            *target = T::default();
            Ok(())
        }
        Value::Object(fields) => {
            for (key, value) in fields {
                if !target.merge_field(key, value, ctx)? {
                    ctx.unknown_field(key);
                }
            }
            Ok(())
        }
        other => Err(ctx.mismatch("object", other)),
    }
}

/// Declare the wire-name → field table of a schema struct.
///
/// Generates both [`Fields`] and [`Merge`] for the type.
macro_rules! fields {
    ($ty:ty { $($wire:literal => $field:ident),+ $(,)? }) => {
        impl $crate::merge::Fields for $ty {
            fn merge_field(
                &mut self,
                key: &str,
                delta: &serde_json::Value,
                ctx: &mut $crate::merge::MergeContext<'_>,
            ) -> Result<bool, $crate::error::ModelError> {
                match key {
                    $($wire => ctx.descend(key, |ctx| {
                        $crate::merge::Merge::merge(&mut self.$field, delta, ctx)
                    })?,)+
                    _ => return Ok(false),
                }
                Ok(true)
            }
        }

        impl $crate::merge::Merge for $ty {
            fn merge(
                &mut self,
                delta: &serde_json::Value,
                ctx: &mut $crate::merge::MergeContext<'_>,
            ) -> Result<(), $crate::error::ModelError> {
                $crate::merge::merge_object(self, delta, ctx)
            }
        }
    };
}

/// Merge string-valued enums through their serde representation.
macro_rules! string_enums {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::merge::Merge for $ty {
            fn merge(
                &mut self,
                delta: &serde_json::Value,
                ctx: &mut $crate::merge::MergeContext<'_>,
            ) -> Result<(), $crate::error::ModelError> {
                match delta {
                    serde_json::Value::Null => {
                        *self = <$ty>::default();
                        Ok(())
                    }
                    serde_json::Value::String(_) => {
                        *self = serde_json::from_value(delta.clone())
                            .map_err(|_| ctx.mismatch(stringify!($ty), delta))?;
                        Ok(())
                    }
                    other => Err(ctx.mismatch(stringify!($ty), other)),
                }
            }
        })+
    };
}

pub(crate) use fields;
pub(crate) use string_enums;

/// When a delta array shorter than the current list truncates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListTruncation {
    /// Only explicit nulls remove entries.
    #[default]
    Never,
    /// Value lists take the delta's length; entity lists still need nulls.
    ValueLists,
    /// Value lists and entity lists both take the delta's length.
    All,
}

impl ListTruncation {
    pub fn truncates_value_lists(self) -> bool {
        matches!(self, ListTruncation::ValueLists | ListTruncation::All)
    }

    pub fn truncates_entity_lists(self) -> bool {
        matches!(self, ListTruncation::All)
    }
}

/// Tunables for a merge run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    #[serde(default)]
    pub list_truncation: ListTruncation,
}
