//! Positional value lists and sparse entity lists.

use super::{Merge, MergeContext};
use crate::error::ModelError;
use serde::Serialize;
use serde_json::Value;
use std::ops::Deref;

/// Value lists merge index by index and grow when the delta is longer.
impl<T: Merge + Default> Merge for Vec<T> {
    fn merge(&mut self, delta: &Value, ctx: &mut MergeContext<'_>) -> Result<(), ModelError> {
        let items = match delta {
            Value::Null => {
                self.clear();
                return Ok(());
            }
            Value::Array(items) => items,
            other => return Err(ctx.mismatch("array", other)),
        };

        for (index, item) in items.iter().enumerate() {
            if index == self.len() {
                self.push(T::default());
            }
            let slot = &mut self[index];
            ctx.descend(index, |ctx| slot.merge(item, ctx))?;
        }

        if ctx.options().list_truncation.truncates_value_lists() {
            self.truncate(items.len());
        }
        Ok(())
    }
}

/// Ordered entity collection with sparse-array delta semantics.
///
/// Delta indices refer to the list as it was before the delta:
/// - `null` at index *i* removes the entity at *i*; survivors close the gap in order
/// - an object at an existing index merges into that entity
/// - an object past the end appends a schema-default entity and merges into it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EntityList<T> {
    items: Vec<T>,
}

impl<T> Default for EntityList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> EntityList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for EntityList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for EntityList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for EntityList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a EntityList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Merge + Default> Merge for EntityList<T> {
    fn merge(&mut self, delta: &Value, ctx: &mut MergeContext<'_>) -> Result<(), ModelError> {
        let entries = match delta {
            Value::Null => {
                self.items.clear();
                return Ok(());
            }
            Value::Array(entries) => entries,
            other => return Err(ctx.mismatch("array", other)),
        };

        // Slots stay aligned with the pre-delta indices until the final compaction.
        let mut slots: Vec<Option<T>> = self.items.drain(..).map(Some).collect();
        for (index, entry) in entries.iter().enumerate() {
            if entry.is_null() {
                match slots.get_mut(index) {
                    Some(slot) => *slot = None,
                    None => slots.push(None),
                }
                continue;
            }
            if index == slots.len() {
                slots.push(Some(T::default()));
            }
            if let Some(item) = slots[index].as_mut() {
                ctx.descend(index, |ctx| item.merge(entry, ctx))?;
            }
        }

        if ctx.options().list_truncation.truncates_entity_lists() {
            slots.truncate(entries.len());
        }
        self.items = slots.into_iter().flatten().collect();
        Ok(())
    }
}
