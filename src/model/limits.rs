//! Machine-configured limits. Every value is `None` until the firmware reports it.

use crate::merge::fields;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub axes: Option<i64>,
    pub axes_plus_extruders: Option<i64>,
    pub bed_heaters: Option<i64>,
    pub boards: Option<i64>,
    pub chamber_heaters: Option<i64>,
    pub drivers: Option<i64>,
    pub drivers_per_axis: Option<i64>,
    pub extruders: Option<i64>,
    pub extruders_per_tool: Option<i64>,
    pub fans: Option<i64>,
    pub gp_in_ports: Option<i64>,
    pub gp_out_ports: Option<i64>,
    pub heaters: Option<i64>,
    pub heaters_per_tool: Option<i64>,
    pub monitors_per_heater: Option<i64>,
    pub restore_points: Option<i64>,
    pub sensors: Option<i64>,
    pub spindles: Option<i64>,
    pub tools: Option<i64>,
    pub tracked_objects: Option<i64>,
    pub triggers: Option<i64>,
    pub volumes: Option<i64>,
    pub workplaces: Option<i64>,
    pub z_probe_program_bytes: Option<i64>,
    pub z_probes: Option<i64>,
}

fields!(Limits {
    "axes" => axes,
    "axesPlusExtruders" => axes_plus_extruders,
    "bedHeaters" => bed_heaters,
    "boards" => boards,
    "chamberHeaters" => chamber_heaters,
    "drivers" => drivers,
    "driversPerAxis" => drivers_per_axis,
    "extruders" => extruders,
    "extrudersPerTool" => extruders_per_tool,
    "fans" => fans,
    "gpInPorts" => gp_in_ports,
    "gpOutPorts" => gp_out_ports,
    "heaters" => heaters,
    "heatersPerTool" => heaters_per_tool,
    "monitorsPerHeater" => monitors_per_heater,
    "restorePoints" => restore_points,
    "sensors" => sensors,
    "spindles" => spindles,
    "tools" => tools,
    "trackedObjects" => tracked_objects,
    "triggers" => triggers,
    "volumes" => volumes,
    "workplaces" => workplaces,
    "zProbeProgramBytes" => z_probe_program_bytes,
    "zProbes" => z_probes,
});
