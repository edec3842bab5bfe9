//! Job: the file being processed, layer history and time estimates.

use crate::merge::{fields, EntityList};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildObject {
    pub cancelled: bool,
    pub name: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

fields!(BuildObject {
    "cancelled" => cancelled,
    "name" => name,
    "x" => x,
    "y" => y,
});

/// Objects of the current build, when the slicer labelled them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub current_object: i32,
    pub m486_names: bool,
    pub m486_numbers: bool,
    pub objects: EntityList<BuildObject>,
}

fields!(Build {
    "currentObject" => current_object,
    "m486Names" => m486_names,
    "m486Numbers" => m486_numbers,
    "objects" => objects,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailInfo {
    pub format: String,
    pub height: i64,
    pub offset: i64,
    pub size: i64,
    pub width: i64,
}

fields!(ThumbnailInfo {
    "format" => format,
    "height" => height,
    "offset" => offset,
    "size" => size,
    "width" => width,
});

/// Metadata of a G-code file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GCodeFileInfo {
    /// Filament needed per extruder, in mm.
    pub filament: Vec<f64>,
    pub file_name: Option<String>,
    pub generated_by: Option<String>,
    pub height: f64,
    pub last_modified: Option<String>,
    pub layer_height: f64,
    pub num_layers: i64,
    pub print_time: Option<i64>,
    pub simulated_time: Option<i64>,
    /// Size in bytes.
    pub size: u64,
    pub thumbnails: Vec<ThumbnailInfo>,
}

fields!(GCodeFileInfo {
    "filament" => filament,
    "fileName" => file_name,
    "generatedBy" => generated_by,
    "height" => height,
    "lastModified" => last_modified,
    "layerHeight" => layer_height,
    "numLayers" => num_layers,
    "printTime" => print_time,
    "simulatedTime" => simulated_time,
    "size" => size,
    "thumbnails" => thumbnails,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub duration: f64,
    pub filament: Vec<f64>,
    pub fraction_printed: f64,
    pub height: f64,
    pub temperatures: Vec<f64>,
}

fields!(Layer {
    "duration" => duration,
    "filament" => filament,
    "fractionPrinted" => fraction_printed,
    "height" => height,
    "temperatures" => temperatures,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesLeft {
    pub filament: Option<i64>,
    pub file: Option<i64>,
    pub slicer: Option<i64>,
}

fields!(TimesLeft {
    "filament" => filament,
    "file" => file,
    "slicer" => slicer,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub build: Option<Build>,
    pub duration: Option<i64>,
    pub file: GCodeFileInfo,
    /// Bytes of the file processed so far.
    pub file_position: Option<u64>,
    pub last_duration: Option<i64>,
    pub last_file_aborted: bool,
    pub last_file_cancelled: bool,
    pub last_file_name: Option<String>,
    pub last_file_simulated: bool,
    pub layer: Option<i64>,
    pub layer_time: Option<f64>,
    pub layers: EntityList<Layer>,
    pub pause_duration: Option<i64>,
    pub raw_extrusion: Option<f64>,
    pub times_left: TimesLeft,
    pub warm_up_duration: Option<i64>,
}

fields!(Job {
    "build" => build,
    "duration" => duration,
    "file" => file,
    "filePosition" => file_position,
    "lastDuration" => last_duration,
    "lastFileAborted" => last_file_aborted,
    "lastFileCancelled" => last_file_cancelled,
    "lastFileName" => last_file_name,
    "lastFileSimulated" => last_file_simulated,
    "layer" => layer,
    "layerTime" => layer_time,
    "layers" => layers,
    "pauseDuration" => pause_duration,
    "rawExtrusion" => raw_extrusion,
    "timesLeft" => times_left,
    "warmUpDuration" => warm_up_duration,
});
