//! Canonical Model Instance
//!
//! Owns the live object model for one connection. Deltas are applied one at a time;
//! readers see either the tree before a delta or the tree after it, never a state in
//! between. After every successful mutation a [`ModelChange`] is sent to subscribers.

use crate::error::{ApplyWarning, ModelError};
use crate::events::{ChangeBus, ChangeKind, ModelChange};
use crate::merge::MergeOptions;
use crate::model::{ApplyReport, ObjectModel, Plugin};
use parking_lot::{MappedRwLockReadGuard, Mutex, RwLock, RwLockReadGuard, RwLockUpgradableReadGuard};
use serde_json::Value;
use std::sync::mpsc::Receiver;
use tracing::{debug, info, warn};

struct Live {
    model: ObjectModel,
    sequence: u64,
}

/// Shared, lock-guarded object model.
pub struct MachineModel {
    live: RwLock<Live>,
    bus: Mutex<ChangeBus>,
    options: MergeOptions,
}

impl Default for MachineModel {
    fn default() -> Self {
        Self::new(MergeOptions::default())
    }
}

impl MachineModel {
    /// Start from the disconnected placeholder.
    pub fn new(options: MergeOptions) -> Self {
        Self::with_model(ObjectModel::disconnected(), options)
    }

    pub fn with_model(model: ObjectModel, options: MergeOptions) -> Self {
        Self {
            live: RwLock::new(Live { model, sequence: 0 }),
            bus: Mutex::new(ChangeBus::new()),
            options,
        }
    }

    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Sequence number of the last successful mutation (0 before the first).
    pub fn sequence(&self) -> u64 {
        self.live.read().sequence
    }

    /// Read access to the live tree. Holding the guard blocks the next commit.
    pub fn read(&self) -> MappedRwLockReadGuard<'_, ObjectModel> {
        RwLockReadGuard::map(self.live.read(), |live| &live.model)
    }

    pub fn snapshot(&self) -> ObjectModel {
        self.live.read().model.clone()
    }

    pub fn subscribe(&self) -> Receiver<ModelChange> {
        self.bus.lock().subscribe()
    }

    /// Apply one delta document atomically.
    ///
    /// The merge runs on a copy while readers continue to see the current tree; the
    /// copy is committed under the write lock only if the whole delta merged.
    pub fn apply_delta(&self, delta: &Value) -> Result<ApplyReport, ModelError> {
        let live = self.live.upgradable_read();
        let mut working = live.model.clone();
        let mut report = match working.merge_delta(delta, &self.options) {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, "Rejected delta");
                return Err(err);
            }
        };

        let mut live = RwLockUpgradableReadGuard::upgrade(live);
        live.model = working;
        live.sequence += 1;
        report.sequence = live.sequence;

        for warning in &report.warnings {
            if let ApplyWarning::UnknownDiscriminant { path, name } = warning {
                warn!(path = %path, name = %name, "Unknown discriminant, fell back to base shape");
            }
        }
        debug!(
            sequence = report.sequence,
            keys = ?report.touched,
            warnings = report.warnings.len(),
            "Applied delta"
        );
        self.emit(
            live.sequence,
            ChangeKind::Delta {
                keys: report.touched.clone(),
            },
        );
        Ok(report)
    }

    /// Parse and apply a delta document given as JSON text.
    pub fn apply_delta_str(&self, text: &str) -> Result<ApplyReport, ModelError> {
        let delta: Value = serde_json::from_str(text)?;
        self.apply_delta(&delta)
    }

    /// Insert or replace one plugin entry outside the delta stream.
    pub fn register_plugin(&self, plugin: Plugin) -> Result<u64, ModelError> {
        if plugin.id.is_empty() {
            return Err(ModelError::InvalidPluginId);
        }
        let id = plugin.id.clone();
        let mut live = self.live.write();
        live.model.plugins.insert(id.clone(), plugin);
        live.sequence += 1;

        info!(plugin = %id, sequence = live.sequence, "Registered plugin");
        self.emit(live.sequence, ChangeKind::PluginRegistered { id });
        Ok(live.sequence)
    }

    /// Remove one plugin entry. Returns the removed plugin, if it existed.
    pub fn unregister_plugin(&self, id: &str) -> Option<Plugin> {
        let mut live = self.live.write();
        let removed = live.model.plugins.remove(id)?;
        live.sequence += 1;

        info!(plugin = %id, sequence = live.sequence, "Unregistered plugin");
        self.emit(
            live.sequence,
            ChangeKind::PluginUnregistered { id: id.to_string() },
        );
        Some(removed)
    }

    /// Return to the disconnected placeholder, e.g. when the connection ends.
    pub fn reset(&self) {
        let mut live = self.live.write();
        live.model = ObjectModel::disconnected();
        live.sequence += 1;

        info!(sequence = live.sequence, "Reset object model");
        self.emit(live.sequence, ChangeKind::Reset);
    }

    // Called with the write lock held so notifications leave in sequence order.
    fn emit(&self, sequence: u64, kind: ChangeKind) {
        self.bus.lock().emit(ModelChange::with_now(sequence, kind));
    }
}
