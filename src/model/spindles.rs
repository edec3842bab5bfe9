//! Spindles

use crate::merge::{fields, string_enums};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpindleState {
    #[default]
    Unconfigured,
    Stopped,
    Forward,
    Reverse,
}

string_enums!(SpindleState);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spindle {
    pub active: i64,
    pub can_reverse: bool,
    pub current: i64,
    pub frequency: i64,
    pub idle_pwm: f64,
    pub max: i64,
    pub max_pwm: f64,
    pub min: i64,
    pub min_pwm: f64,
    pub state: SpindleState,
}

fields!(Spindle {
    "active" => active,
    "canReverse" => can_reverse,
    "current" => current,
    "frequency" => frequency,
    "idlePwm" => idle_pwm,
    "max" => max,
    "maxPwm" => max_pwm,
    "min" => min,
    "minPwm" => min_pwm,
    "state" => state,
});
