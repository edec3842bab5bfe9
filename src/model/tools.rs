//! Tools

use crate::merge::{fields, string_enums};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolState {
    #[default]
    Off,
    Active,
    Standby,
}

string_enums!(ToolState);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRetraction {
    pub extra_restart: f64,
    pub length: f64,
    pub speed: f64,
    pub unretract_speed: f64,
    pub z_hop: f64,
}

fields!(ToolRetraction {
    "extraRestart" => extra_restart,
    "length" => length,
    "speed" => speed,
    "unretractSpeed" => unretract_speed,
    "zHop" => z_hop,
});

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Active temperatures, one per entry of `heaters`.
    pub active: Vec<f64>,
    /// Axis indices mapped to each of the tool's X/Y/... axes.
    pub axes: Vec<Vec<i32>>,
    pub extruders: Vec<i32>,
    pub fans: Vec<i32>,
    pub feed_forward: Vec<f64>,
    pub filament_extruder: i32,
    pub heaters: Vec<i32>,
    pub is_retracted: bool,
    pub mix: Vec<f64>,
    pub name: String,
    pub number: i32,
    pub offsets: Vec<f64>,
    pub offsets_probed: i64,
    pub retraction: ToolRetraction,
    pub spindle: i32,
    pub spindle_rpm: i64,
    pub standby: Vec<f64>,
    pub state: ToolState,
}

impl Default for Tool {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            axes: Vec::new(),
            extruders: Vec::new(),
            fans: Vec::new(),
            feed_forward: Vec::new(),
            filament_extruder: -1,
            heaters: Vec::new(),
            is_retracted: false,
            mix: Vec::new(),
            name: String::new(),
            number: 0,
            offsets: Vec::new(),
            offsets_probed: 0,
            retraction: ToolRetraction::default(),
            spindle: -1,
            spindle_rpm: 0,
            standby: Vec::new(),
            state: ToolState::default(),
        }
    }
}

fields!(Tool {
    "active" => active,
    "axes" => axes,
    "extruders" => extruders,
    "fans" => fans,
    "feedForward" => feed_forward,
    "filamentExtruder" => filament_extruder,
    "heaters" => heaters,
    "isRetracted" => is_retracted,
    "mix" => mix,
    "name" => name,
    "number" => number,
    "offsets" => offsets,
    "offsetsProbed" => offsets_probed,
    "retraction" => retraction,
    "spindle" => spindle,
    "spindleRpm" => spindle_rpm,
    "standby" => standby,
    "state" => state,
});
