//! Heaters and their monitors.

use crate::merge::{fields, string_enums, EntityList};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaterState {
    #[default]
    Off,
    Standby,
    Active,
    Fault,
    Tuning,
    Offline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaterMonitorAction {
    #[default]
    GenerateFault,
    PermanentSwitchOff,
    TemporarySwitchOff,
    ShutDown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaterMonitorCondition {
    #[default]
    Disabled,
    TooHigh,
    TooLow,
}

string_enums!(HeaterState, HeaterMonitorAction, HeaterMonitorCondition);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaterMonitor {
    pub action: Option<HeaterMonitorAction>,
    pub condition: HeaterMonitorCondition,
    pub limit: Option<f64>,
    pub sensor: i32,
}

fields!(HeaterMonitor {
    "action" => action,
    "condition" => condition,
    "limit" => limit,
    "sensor" => sensor,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaterModelPid {
    pub overridden: bool,
    pub p: f64,
    pub i: f64,
    pub d: f64,
    pub used: bool,
}

fields!(HeaterModelPid {
    "overridden" => overridden,
    "p" => p,
    "i" => i,
    "d" => d,
    "used" => used,
});

/// Thermal process model of a heater.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaterModel {
    pub cooling_exp: f64,
    pub cooling_rate: f64,
    pub dead_time: f64,
    pub enabled: bool,
    pub fan_cooling_rate: f64,
    pub heating_rate: f64,
    pub inverted: bool,
    pub max_pwm: f64,
    pub pid: HeaterModelPid,
    pub standard_voltage: f64,
}

fields!(HeaterModel {
    "coolingExp" => cooling_exp,
    "coolingRate" => cooling_rate,
    "deadTime" => dead_time,
    "enabled" => enabled,
    "fanCoolingRate" => fan_cooling_rate,
    "heatingRate" => heating_rate,
    "inverted" => inverted,
    "maxPwm" => max_pwm,
    "pid" => pid,
    "standardVoltage" => standard_voltage,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heater {
    pub active: f64,
    pub avg_pwm: f64,
    pub current: f64,
    /// Upper temperature limit.
    pub max: f64,
    pub max_bad_readings: i64,
    pub max_heating_fault_time: f64,
    pub max_temp_excursion: f64,
    pub min: f64,
    pub model: HeaterModel,
    pub monitors: EntityList<HeaterMonitor>,
    pub name: Option<String>,
    pub sensor: i32,
    pub standby: f64,
    pub state: HeaterState,
}

fields!(Heater {
    "active" => active,
    "avgPwm" => avg_pwm,
    "current" => current,
    "max" => max,
    "maxBadReadings" => max_bad_readings,
    "maxHeatingFaultTime" => max_heating_fault_time,
    "maxTempExcursion" => max_temp_excursion,
    "min" => min,
    "model" => model,
    "monitors" => monitors,
    "name" => name,
    "sensor" => sensor,
    "standby" => standby,
    "state" => state,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heat {
    pub bed_heaters: Vec<i32>,
    pub chamber_heaters: Vec<i32>,
    pub cold_extrude_temperature: f64,
    pub cold_retract_temperature: f64,
    pub heaters: EntityList<Heater>,
}

fields!(Heat {
    "bedHeaters" => bed_heaters,
    "chamberHeaters" => chamber_heaters,
    "coldExtrudeTemperature" => cold_extrude_temperature,
    "coldRetractTemperature" => cold_retract_temperature,
    "heaters" => heaters,
});
