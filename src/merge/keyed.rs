//! Keyed-map merge (plugins, global variables).

use super::{Merge, MergeContext};
use crate::error::ModelError;
use serde::Serialize;
use serde_json::Value;
use std::collections::btree_map::{self, BTreeMap};

/// Unordered entity collection addressed by string key.
///
/// Per key present in a delta: a falsy value deletes, a new key inserts, an existing
/// key merges into the current entry. A null for the whole map clears it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeyedMap<T> {
    entries: BTreeMap<String, T>,
}

impl<T> Default for KeyedMap<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> KeyedMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, T> {
        self.entries.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, T> {
        self.entries.iter()
    }

    /// Insert or replace one entry wholesale.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        self.entries.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.entries.remove(key)
    }
}

impl<T> FromIterator<(String, T)> for KeyedMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a KeyedMap<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = btree_map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Values that mark a key for removal: null, false, zero and the empty string.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Value type of a [`KeyedMap`].
pub trait KeyedEntry: Merge {
    /// Entry created for a key the map does not hold yet, before the delta is merged in.
    fn for_key(key: &str) -> Self;
}

impl KeyedEntry for Value {
    fn for_key(_key: &str) -> Self {
        Value::Null
    }
}

impl<T: KeyedEntry> Merge for KeyedMap<T> {
    fn merge(&mut self, delta: &Value, ctx: &mut MergeContext<'_>) -> Result<(), ModelError> {
        let fields = match delta {
            Value::Null => {
                self.entries.clear();
                return Ok(());
            }
            Value::Object(fields) => fields,
            other => return Err(ctx.mismatch("object", other)),
        };

        for (key, value) in fields {
            if is_falsy(value) {
                self.entries.remove(key);
                continue;
            }
            match self.entries.get_mut(key) {
                Some(existing) => ctx.descend(key, |ctx| existing.merge(value, ctx))?,
                None => {
                    let mut entry = T::for_key(key);
                    ctx.descend(key, |ctx| entry.merge(value, ctx))?;
                    self.entries.insert(key.clone(), entry);
                }
            }
        }
        Ok(())
    }
}
