//! G-code input channels (serial, network, file, macro, ...).

use crate::merge::{fields, string_enums};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputChannelState {
    AwaitingAcknowledgement,
    #[default]
    Idle,
    Executing,
    Waiting,
    Reading,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistanceUnit {
    #[default]
    Mm,
    Inch,
}

string_enums!(InputChannelState, DistanceUnit);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputChannel {
    pub active: bool,
    pub axes_relative: bool,
    pub compatibility: String,
    pub distance_unit: DistanceUnit,
    pub drives_relative: bool,
    pub feed_rate: f64,
    pub in_macro: bool,
    pub line_number: i64,
    pub macro_restartable: bool,
    pub motion_system: i32,
    pub name: String,
    pub selected_plane: i32,
    pub stack_depth: i32,
    pub state: InputChannelState,
    pub volumetric: bool,
}

fields!(InputChannel {
    "active" => active,
    "axesRelative" => axes_relative,
    "compatibility" => compatibility,
    "distanceUnit" => distance_unit,
    "drivesRelative" => drives_relative,
    "feedRate" => feed_rate,
    "inMacro" => in_macro,
    "lineNumber" => line_number,
    "macroRestartable" => macro_restartable,
    "motionSystem" => motion_system,
    "name" => name,
    "selectedPlane" => selected_plane,
    "stackDepth" => stack_depth,
    "state" => state,
    "volumetric" => volumetric,
});
