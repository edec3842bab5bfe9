//! Sensors: analog inputs, endstops, filament monitors, GP inputs and probes.

use crate::merge::{fields, EntityList};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalogSensor {
    pub last_reading: Option<f64>,
    pub name: Option<String>,
    pub state: String,
    #[serde(rename = "type")]
    pub kind: String,
}

fields!(AnalogSensor {
    "lastReading" => last_reading,
    "name" => name,
    "state" => state,
    "type" => kind,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endstop {
    pub high_end: bool,
    pub probe: Option<i32>,
    pub triggered: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

fields!(Endstop {
    "highEnd" => high_end,
    "probe" => probe,
    "triggered" => triggered,
    "type" => kind,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilamentMonitorCalibration {
    pub mm_per_pulse: Option<f64>,
    pub mm_per_rev: Option<f64>,
    pub percent_max: Option<f64>,
    pub percent_min: Option<f64>,
    pub total_distance: Option<f64>,
}

fields!(FilamentMonitorCalibration {
    "mmPerPulse" => mm_per_pulse,
    "mmPerRev" => mm_per_rev,
    "percentMax" => percent_max,
    "percentMin" => percent_min,
    "totalDistance" => total_distance,
});

/// Filament monitor. The type-specific configuration is kept flat; fields that a
/// given monitor type does not report simply stay at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilamentMonitor {
    pub calibrated: Option<FilamentMonitorCalibration>,
    pub enabled: bool,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
}

fields!(FilamentMonitor {
    "calibrated" => calibrated,
    "enabled" => enabled,
    "status" => status,
    "type" => kind,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpInputPort {
    pub value: f64,
}

fields!(GpInputPort {
    "value" => value,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Probe {
    pub calibration_temperature: f64,
    pub deployed_by_user: bool,
    pub disables_heaters: bool,
    pub dive_height: f64,
    pub last_stop_height: f64,
    pub max_probe_count: i32,
    pub offsets: Vec<f64>,
    pub recovery_time: f64,
    pub speeds: Vec<f64>,
    pub temperature_coefficients: Vec<f64>,
    pub threshold: i64,
    pub tolerance: f64,
    pub travel_speed: f64,
    pub trigger_height: f64,
    #[serde(rename = "type")]
    pub kind: i32,
    pub value: Vec<i64>,
}

fields!(Probe {
    "calibrationTemperature" => calibration_temperature,
    "deployedByUser" => deployed_by_user,
    "disablesHeaters" => disables_heaters,
    "diveHeight" => dive_height,
    "lastStopHeight" => last_stop_height,
    "maxProbeCount" => max_probe_count,
    "offsets" => offsets,
    "recoveryTime" => recovery_time,
    "speeds" => speeds,
    "temperatureCoefficients" => temperature_coefficients,
    "threshold" => threshold,
    "tolerance" => tolerance,
    "travelSpeed" => travel_speed,
    "triggerHeight" => trigger_height,
    "type" => kind,
    "value" => value,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensors {
    pub analog: EntityList<AnalogSensor>,
    pub endstops: EntityList<Endstop>,
    pub filament_monitors: EntityList<FilamentMonitor>,
    pub gp_in: EntityList<GpInputPort>,
    pub probes: EntityList<Probe>,
}

fields!(Sensors {
    "analog" => analog,
    "endstops" => endstops,
    "filamentMonitors" => filament_monitors,
    "gpIn" => gp_in,
    "probes" => probes,
});
