//! Object Model Schema
//!
//! Typed mirror of the controller's object model. Every struct declares its wire
//! field table with `fields!`, which is also where the merge rule of each path is
//! fixed: the field's Rust type selects it.
//!
//! `ObjectModel::default()` is the disconnected placeholder: a fully populated tree
//! that consumers can read before the first delta arrives.

pub mod boards;
pub mod fans;
pub mod heat;
pub mod inputs;
pub mod job;
pub mod kinematics;
pub mod limits;
pub mod motion;
pub mod network;
pub mod plugins;
pub mod sensors;
pub mod spindles;
pub mod state;
pub mod tools;
pub mod volumes;

pub use boards::Board;
pub use fans::Fan;
pub use heat::{Heat, Heater, HeaterState};
pub use inputs::InputChannel;
pub use job::{GCodeFileInfo, Job, Layer};
pub use kinematics::{Kinematics, KinematicsVariant};
pub use limits::Limits;
pub use motion::{Axis, Extruder, Move};
pub use network::Network;
pub use plugins::Plugin;
pub use sensors::Sensors;
pub use spindles::Spindle;
pub use state::{MachineStatus, Message, State};
pub use tools::Tool;
pub use volumes::{Directories, Volume};

use crate::error::{ApplyWarning, ModelError};
use crate::merge::{fields, EntityList, KeyedMap, Merge, MergeContext, MergeOptions};
use serde::Serialize;
use serde_json::Value;

/// Root of the object model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectModel {
    pub boards: EntityList<Board>,
    pub directories: Directories,
    pub fans: EntityList<Fan>,
    /// Global variables, name → value.
    pub global: KeyedMap<Value>,
    pub heat: Heat,
    pub inputs: EntityList<InputChannel>,
    pub job: Job,
    pub limits: Limits,
    pub messages: EntityList<Message>,
    #[serde(rename = "move")]
    pub motion: Move,
    pub network: Network,
    pub plugins: KeyedMap<Plugin>,
    pub sensors: Sensors,
    pub spindles: EntityList<Spindle>,
    pub state: State,
    pub tools: EntityList<Tool>,
    pub volumes: EntityList<Volume>,
}

fields!(ObjectModel {
    "boards" => boards,
    "directories" => directories,
    "fans" => fans,
    "global" => global,
    "heat" => heat,
    "inputs" => inputs,
    "job" => job,
    "limits" => limits,
    "messages" => messages,
    "move" => motion,
    "network" => network,
    "plugins" => plugins,
    "sensors" => sensors,
    "spindles" => spindles,
    "state" => state,
    "tools" => tools,
    "volumes" => volumes,
});

/// Outcome of a successful apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyReport {
    /// Change sequence number; assigned by `MachineModel`, zero for direct applies.
    pub sequence: u64,
    /// Top-level keys present in the delta.
    pub touched: Vec<String>,
    pub warnings: Vec<ApplyWarning>,
}

impl ObjectModel {
    /// Disconnected placeholder.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Apply one delta document, all or nothing.
    ///
    /// The delta is merged into a working copy that replaces `self` only if every
    /// field merged; on error `self` is untouched.
    pub fn apply_delta(
        &mut self,
        delta: &Value,
        options: &MergeOptions,
    ) -> Result<ApplyReport, ModelError> {
        let mut working = self.clone();
        let report = working.merge_delta(delta, options)?;
        *self = working;
        Ok(report)
    }

    /// Merge a delta in place. On error `self` may be partially merged.
    pub(crate) fn merge_delta(
        &mut self,
        delta: &Value,
        options: &MergeOptions,
    ) -> Result<ApplyReport, ModelError> {
        let mut ctx = MergeContext::new(options);
        let fields = match delta {
            Value::Object(fields) => fields,
            other => return Err(ctx.mismatch("object", other)),
        };
        self.merge(delta, &mut ctx)?;

        Ok(ApplyReport {
            sequence: 0,
            touched: fields.keys().cloned().collect(),
            warnings: ctx.into_warnings(),
        })
    }
}
