//! Move: axes, extruders, kinematics and motion planner state.

use super::kinematics::Kinematics;
use crate::merge::{fields, EntityList};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Microstepping {
    pub interpolated: bool,
    pub value: i32,
}

fields!(Microstepping {
    "interpolated" => interpolated,
    "value" => value,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub acceleration: f64,
    pub babystep: f64,
    pub current: i64,
    pub drivers: Vec<String>,
    pub homed: bool,
    pub jerk: f64,
    pub letter: String,
    pub machine_position: Option<f64>,
    pub max: f64,
    pub max_probed: bool,
    pub microstepping: Microstepping,
    pub min: f64,
    pub min_probed: bool,
    pub percent_current: i64,
    pub percent_stst_current: Option<i64>,
    pub reduced_acceleration: f64,
    pub speed: f64,
    pub steps_per_mm: f64,
    pub user_position: Option<f64>,
    pub visible: bool,
    pub workplace_offsets: Vec<f64>,
}

fields!(Axis {
    "acceleration" => acceleration,
    "babystep" => babystep,
    "current" => current,
    "drivers" => drivers,
    "homed" => homed,
    "jerk" => jerk,
    "letter" => letter,
    "machinePosition" => machine_position,
    "max" => max,
    "maxProbed" => max_probed,
    "microstepping" => microstepping,
    "min" => min,
    "minProbed" => min_probed,
    "percentCurrent" => percent_current,
    "percentStstCurrent" => percent_stst_current,
    "reducedAcceleration" => reduced_acceleration,
    "speed" => speed,
    "stepsPerMm" => steps_per_mm,
    "userPosition" => user_position,
    "visible" => visible,
    "workplaceOffsets" => workplace_offsets,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtruderNonlinear {
    pub a: f64,
    pub b: f64,
    pub upper_limit: f64,
}

fields!(ExtruderNonlinear {
    "a" => a,
    "b" => b,
    "upperLimit" => upper_limit,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extruder {
    pub acceleration: f64,
    pub current: i64,
    pub driver: Option<String>,
    pub factor: f64,
    pub filament: String,
    pub filament_diameter: f64,
    pub jerk: f64,
    pub microstepping: Microstepping,
    pub nonlinear: ExtruderNonlinear,
    pub percent_current: i64,
    pub percent_stst_current: Option<i64>,
    pub position: f64,
    pub pressure_advance: f64,
    /// Raw extruder position without extrusion factor applied, in mm.
    pub raw_position: f64,
    pub speed: f64,
    pub steps_per_mm: f64,
}

fields!(Extruder {
    "acceleration" => acceleration,
    "current" => current,
    "driver" => driver,
    "factor" => factor,
    "filament" => filament,
    "filamentDiameter" => filament_diameter,
    "jerk" => jerk,
    "microstepping" => microstepping,
    "nonlinear" => nonlinear,
    "percentCurrent" => percent_current,
    "percentStstCurrent" => percent_stst_current,
    "position" => position,
    "pressureAdvance" => pressure_advance,
    "rawPosition" => raw_position,
    "speed" => speed,
    "stepsPerMm" => steps_per_mm,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeGrid {
    pub axes: Vec<String>,
    pub maxs: Vec<f64>,
    pub mins: Vec<f64>,
    pub radius: f64,
    pub spacings: Vec<f64>,
}

fields!(ProbeGrid {
    "axes" => axes,
    "maxs" => maxs,
    "mins" => mins,
    "radius" => radius,
    "spacings" => spacings,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDeviations {
    pub deviation: f64,
    pub mean: f64,
}

fields!(MoveDeviations {
    "deviation" => deviation,
    "mean" => mean,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCompensation {
    pub fade_height: Option<f64>,
    pub file: Option<String>,
    pub live_grid: Option<ProbeGrid>,
    pub mesh_deviation: Option<MoveDeviations>,
    pub probe_grid: ProbeGrid,
    pub skew: Skew,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skew {
    #[serde(rename = "compensateXY")]
    pub compensate_xy: bool,
    #[serde(rename = "tanXY")]
    pub tan_xy: f64,
    #[serde(rename = "tanXZ")]
    pub tan_xz: f64,
    #[serde(rename = "tanYZ")]
    pub tan_yz: f64,
}

fields!(Skew {
    "compensateXY" => compensate_xy,
    "tanXY" => tan_xy,
    "tanXZ" => tan_xz,
    "tanYZ" => tan_yz,
});

fields!(MoveCompensation {
    "fadeHeight" => fade_height,
    "file" => file,
    "liveGrid" => live_grid,
    "meshDeviation" => mesh_deviation,
    "probeGrid" => probe_grid,
    "skew" => skew,
    "type" => kind,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentMove {
    pub acceleration: f64,
    pub deceleration: f64,
    pub extrusion_rate: f64,
    pub laser_pwm: Option<f64>,
    pub requested_speed: f64,
    pub top_speed: f64,
}

fields!(CurrentMove {
    "acceleration" => acceleration,
    "deceleration" => deceleration,
    "extrusionRate" => extrusion_rate,
    "laserPwm" => laser_pwm,
    "requestedSpeed" => requested_speed,
    "topSpeed" => top_speed,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveQueueItem {
    pub grace_period: f64,
    pub length: i64,
}

fields!(MoveQueueItem {
    "gracePeriod" => grace_period,
    "length" => length,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputShaping {
    pub amplitudes: Vec<f64>,
    pub damping: f64,
    pub durations: Vec<f64>,
    pub frequency: f64,
    pub min_acceleration: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

fields!(InputShaping {
    "amplitudes" => amplitudes,
    "damping" => damping,
    "durations" => durations,
    "frequency" => frequency,
    "minAcceleration" => min_acceleration,
    "type" => kind,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRotation {
    pub angle: f64,
    pub centre: Vec<f64>,
}

fields!(MoveRotation {
    "angle" => angle,
    "centre" => centre,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotorsIdleControl {
    pub factor: f64,
    pub timeout: f64,
}

fields!(MotorsIdleControl {
    "factor" => factor,
    "timeout" => timeout,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub axes: EntityList<Axis>,
    pub compensation: MoveCompensation,
    pub current_move: CurrentMove,
    pub extruders: EntityList<Extruder>,
    pub idle: MotorsIdleControl,
    pub kinematics: Kinematics,
    pub limit_axes: bool,
    pub no_moves_before_homing: bool,
    pub printing_acceleration: f64,
    pub queue: EntityList<MoveQueueItem>,
    pub rotation: MoveRotation,
    pub shaping: InputShaping,
    pub speed_factor: f64,
    pub travel_acceleration: f64,
    pub virtual_e_pos: f64,
    pub workplace_number: i32,
}

fields!(Move {
    "axes" => axes,
    "compensation" => compensation,
    "currentMove" => current_move,
    "extruders" => extruders,
    "idle" => idle,
    "kinematics" => kinematics,
    "limitAxes" => limit_axes,
    "noMovesBeforeHoming" => no_moves_before_homing,
    "printingAcceleration" => printing_acceleration,
    "queue" => queue,
    "rotation" => rotation,
    "shaping" => shaping,
    "speedFactor" => speed_factor,
    "travelAcceleration" => travel_acceleration,
    "virtualEPos" => virtual_e_pos,
    "workplaceNumber" => workplace_number,
});
