//! Fans

use crate::merge::fields;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FanThermostaticControl {
    pub heaters: Vec<i32>,
    pub high_temperature: Option<f64>,
    pub low_temperature: Option<f64>,
}

fields!(FanThermostaticControl {
    "heaters" => heaters,
    "highTemperature" => high_temperature,
    "lowTemperature" => low_temperature,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fan {
    pub actual_value: f64,
    pub blip: f64,
    pub frequency: f64,
    pub max: f64,
    pub min: f64,
    pub name: String,
    pub requested_value: f64,
    pub rpm: i64,
    pub tacho_ppr: f64,
    pub thermostatic: FanThermostaticControl,
}

fields!(Fan {
    "actualValue" => actual_value,
    "blip" => blip,
    "frequency" => frequency,
    "max" => max,
    "min" => min,
    "name" => name,
    "requestedValue" => requested_value,
    "rpm" => rpm,
    "tachoPpr" => tacho_ppr,
    "thermostatic" => thermostatic,
});
