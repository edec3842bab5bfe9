//! Boards: main board and expansion boards attached to the controller.

use crate::merge::{fields, string_enums};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoardState {
    #[default]
    Unknown,
    Flashing,
    FlashFailed,
    Resetting,
    Running,
}

string_enums!(BoardState);

/// Minimum, maximum and current reading of a monitored quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinMaxCurrent {
    pub current: f64,
    pub min: f64,
    pub max: f64,
}

fields!(MinMaxCurrent {
    "current" => current,
    "min" => min,
    "max" => max,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Accelerometer {
    pub points: i64,
    pub runs: i64,
}

fields!(Accelerometer {
    "points" => points,
    "runs" => runs,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedLoop {
    pub points: i64,
    pub runs: i64,
}

fields!(ClosedLoop {
    "points" => points,
    "runs" => runs,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectDisplay {
    pub pulses_per_click: i64,
    pub spi_freq: i64,
    pub type_name: String,
}

fields!(DirectDisplay {
    "pulsesPerClick" => pulses_per_click,
    "spiFreq" => spi_freq,
    "typeName" => type_name,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub accelerometer: Option<Accelerometer>,
    pub bootloader_file_name: Option<String>,
    pub can_address: Option<i64>,
    pub closed_loop: Option<ClosedLoop>,
    pub direct_display: Option<DirectDisplay>,
    pub firmware_date: String,
    pub firmware_file_name: String,
    pub firmware_name: String,
    pub firmware_version: String,
    #[serde(rename = "iapFileNameSBC")]
    pub iap_file_name_sbc: Option<String>,
    #[serde(rename = "iapFileNameSD")]
    pub iap_file_name_sd: Option<String>,
    pub max_heaters: i64,
    pub max_motors: i64,
    pub mcu_temp: Option<MinMaxCurrent>,
    pub name: String,
    pub short_name: String,
    pub state: BoardState,
    pub supports_12864: bool,
    pub unique_id: Option<String>,
    pub v12: Option<MinMaxCurrent>,
    pub v_in: Option<MinMaxCurrent>,
}

fields!(Board {
    "accelerometer" => accelerometer,
    "bootloaderFileName" => bootloader_file_name,
    "canAddress" => can_address,
    "closedLoop" => closed_loop,
    "directDisplay" => direct_display,
    "firmwareDate" => firmware_date,
    "firmwareFileName" => firmware_file_name,
    "firmwareName" => firmware_name,
    "firmwareVersion" => firmware_version,
    "iapFileNameSBC" => iap_file_name_sbc,
    "iapFileNameSD" => iap_file_name_sd,
    "maxHeaters" => max_heaters,
    "maxMotors" => max_motors,
    "mcuTemp" => mcu_temp,
    "name" => name,
    "shortName" => short_name,
    "state" => state,
    "supports12864" => supports_12864,
    "uniqueId" => unique_id,
    "v12" => v12,
    "vIn" => v_in,
});
