//! Machine state: status, tool selection, pending dialogs, restore points and messages.

use crate::merge::{fields, string_enums, EntityList};
use serde::{Deserialize, Serialize};

/// Overall machine status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MachineStatus {
    #[default]
    Disconnected,
    Starting,
    Updating,
    Off,
    Halted,
    Pausing,
    Paused,
    Resuming,
    Cancelling,
    Processing,
    Simulating,
    Busy,
    ChangingTool,
    Idle,
}

impl MachineStatus {
    /// A file job is in progress (including paused and transitional states).
    pub fn is_printing(self) -> bool {
        matches!(
            self,
            MachineStatus::Pausing
                | MachineStatus::Paused
                | MachineStatus::Resuming
                | MachineStatus::Cancelling
                | MachineStatus::Processing
                | MachineStatus::Simulating
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MachineMode {
    #[default]
    Fff,
    Cnc,
    Laser,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    #[default]
    Off,
}

string_enums!(MachineStatus, MachineMode, LogLevel);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeepRequest {
    pub duration: i64,
    pub frequency: i64,
}

fields!(BeepRequest {
    "duration" => duration,
    "frequency" => frequency,
});

/// Blocking or non-blocking dialog requested by the firmware.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBox {
    pub axis_controls: i64,
    pub cancel_button: bool,
    pub choices: Option<Vec<String>>,
    pub default: Option<serde_json::Value>,
    pub max: Option<f64>,
    pub message: String,
    pub min: Option<f64>,
    pub mode: i32,
    pub seq: i64,
    pub timeout: f64,
    pub title: String,
}

fields!(MessageBox {
    "axisControls" => axis_controls,
    "cancelButton" => cancel_button,
    "choices" => choices,
    "default" => default,
    "max" => max,
    "message" => message,
    "min" => min,
    "mode" => mode,
    "seq" => seq,
    "timeout" => timeout,
    "title" => title,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpOutputPort {
    pub freq: i64,
    pub pwm: f64,
}

fields!(GpOutputPort {
    "freq" => freq,
    "pwm" => pwm,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestorePoint {
    pub coords: Vec<f64>,
    pub extruder_pos: f64,
    pub fan_pwm: f64,
    pub feed_rate: f64,
    pub io_bits: i64,
    pub laser_pwm: Option<f64>,
    pub tool_number: i32,
}

fields!(RestorePoint {
    "coords" => coords,
    "extruderPos" => extruder_pos,
    "fanPwm" => fan_pwm,
    "feedRate" => feed_rate,
    "ioBits" => io_bits,
    "laserPwm" => laser_pwm,
    "toolNumber" => tool_number,
});

/// Generic firmware message. `kind` is 0 (success), 1 (warning) or 2 (error).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: u8,
}

fields!(Message {
    "content" => content,
    "time" => time,
    "type" => kind,
});

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub atx_power: Option<bool>,
    pub atx_power_port: Option<String>,
    pub beep: Option<BeepRequest>,
    /// Index into `tools` of the selected tool, or -1.
    pub current_tool: i32,
    pub deferred_power_down: Option<bool>,
    pub display_message: String,
    pub gp_out: EntityList<GpOutputPort>,
    pub laser_pwm: Option<f64>,
    pub log_file: Option<String>,
    pub log_level: LogLevel,
    pub machine_mode: MachineMode,
    pub macro_restarted: bool,
    pub message_box: Option<MessageBox>,
    pub ms_up_time: i64,
    pub next_tool: i32,
    pub plugins_started: bool,
    pub power_fail_script: String,
    pub previous_tool: i32,
    pub restore_points: EntityList<RestorePoint>,
    pub status: MachineStatus,
    pub this_input: Option<i32>,
    pub time: Option<String>,
    pub up_time: i64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            atx_power: None,
            atx_power_port: None,
            beep: None,
            current_tool: -1,
            deferred_power_down: None,
            display_message: String::new(),
            gp_out: EntityList::new(),
            laser_pwm: None,
            log_file: None,
            log_level: LogLevel::default(),
            machine_mode: MachineMode::default(),
            macro_restarted: false,
            message_box: None,
            ms_up_time: 0,
            next_tool: -1,
            plugins_started: false,
            power_fail_script: String::new(),
            previous_tool: -1,
            restore_points: EntityList::new(),
            status: MachineStatus::default(),
            this_input: None,
            time: None,
            up_time: 0,
        }
    }
}

fields!(State {
    "atxPower" => atx_power,
    "atxPowerPort" => atx_power_port,
    "beep" => beep,
    "currentTool" => current_tool,
    "deferredPowerDown" => deferred_power_down,
    "displayMessage" => display_message,
    "gpOut" => gp_out,
    "laserPwm" => laser_pwm,
    "logFile" => log_file,
    "logLevel" => log_level,
    "machineMode" => machine_mode,
    "macroRestarted" => macro_restarted,
    "messageBox" => message_box,
    "msUpTime" => ms_up_time,
    "nextTool" => next_tool,
    "pluginsStarted" => plugins_started,
    "powerFailScript" => power_fail_script,
    "previousTool" => previous_tool,
    "restorePoints" => restore_points,
    "status" => status,
    "thisInput" => this_input,
    "time" => time,
    "upTime" => up_time,
});
