//! Kinematics
//!
//! The one polymorphic node of the object model. The `name` discriminant selects a
//! variant from a fixed table; each variant carries its own field set on top of a
//! shared base. When a delta names a different discriminant the live value is
//! replaced by a freshly defaulted instance of the new variant before the delta's
//! fields are merged, so fields of the previous variant can never leak through.

use crate::error::ModelError;
use crate::merge::{fields, Fields, Merge, MergeContext};
use serde::Serialize;
use serde_json::Value;

/// Discriminant used by the disconnected placeholder.
pub const DEFAULT_KINEMATICS: &str = "cartesian";

/// Discriminant → variant constructor.
const VARIANT_TABLE: &[(&str, fn() -> KinematicsVariant)] = &[
    ("cartesian", core_variant),
    ("coreXY", core_variant),
    ("coreXYU", core_variant),
    ("coreXYUV", core_variant),
    ("coreXZ", core_variant),
    ("markForged", core_variant),
    ("delta", delta_variant),
    ("rotaryDelta", delta_variant),
    ("hangprinter", hangprinter_variant),
    ("polar", z_leadscrew_variant),
    ("scara", z_leadscrew_variant),
    ("fiveBarScara", z_leadscrew_variant),
    ("none", generic_variant),
];

fn core_variant() -> KinematicsVariant {
    KinematicsVariant::Core(CoreKinematics::default())
}

fn delta_variant() -> KinematicsVariant {
    KinematicsVariant::Delta(DeltaKinematics::default())
}

fn hangprinter_variant() -> KinematicsVariant {
    KinematicsVariant::Hangprinter(HangprinterKinematics::default())
}

fn z_leadscrew_variant() -> KinematicsVariant {
    KinematicsVariant::ZLeadscrew(ZLeadscrewKinematics::default())
}

fn generic_variant() -> KinematicsVariant {
    KinematicsVariant::Generic(GenericKinematics {})
}

/// Look up the variant for a discriminant. `None` for names outside the table.
pub fn variant_for(name: &str) -> Option<KinematicsVariant> {
    VARIANT_TABLE
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, make)| make())
}

/// Live kinematics: discriminant, shared base fields, and the variant payload.
///
/// Fields are private so the discriminant and the payload shape can only change together.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kinematics {
    name: String,
    segmentation: Option<MoveSegmentation>,
    #[serde(flatten)]
    variant: KinematicsVariant,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self::new(DEFAULT_KINEMATICS)
    }
}

impl Kinematics {
    /// Fresh schema-default instance for `name`; unknown names get the base shape.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            segmentation: None,
            variant: variant_for(name).unwrap_or_else(generic_variant),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn segmentation(&self) -> Option<&MoveSegmentation> {
        self.segmentation.as_ref()
    }

    pub fn variant(&self) -> &KinematicsVariant {
        &self.variant
    }

    pub fn as_core(&self) -> Option<&CoreKinematics> {
        match &self.variant {
            KinematicsVariant::Core(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_delta(&self) -> Option<&DeltaKinematics> {
        match &self.variant {
            KinematicsVariant::Delta(k) => Some(k),
            _ => None,
        }
    }

    fn switch_to(&mut self, name: &str, ctx: &mut MergeContext<'_>) {
        let variant = match variant_for(name) {
            Some(variant) => variant,
            None => {
                ctx.unknown_discriminant(name);
                generic_variant()
            }
        };
        *self = Self {
            name: name.to_string(),
            segmentation: None,
            variant,
        };
    }
}

impl Merge for Kinematics {
    fn merge(&mut self, delta: &Value, ctx: &mut MergeContext<'_>) -> Result<(), ModelError> {
        let fields = match delta {
            Value::Null => {
                *self = Self::default();
                return Ok(());
            }
            Value::Object(fields) => fields,
            other => return Err(ctx.mismatch("object", other)),
        };

        match fields.get("name") {
            None => {}
            // A cleared discriminant resets to the placeholder before the other fields apply.
            Some(Value::Null) => *self = Self::default(),
            Some(Value::String(name)) => {
                if *name != self.name {
                    self.switch_to(name, ctx);
                }
            }
            Some(value) => return Err(ctx.mismatch_at("name", "string", value)),
        }

        for (key, value) in fields {
            let known = match key.as_str() {
                "name" => true,
                "segmentation" => {
                    ctx.descend(key, |ctx| self.segmentation.merge(value, ctx))?;
                    true
                }
                _ => self.variant.merge_field(key, value, ctx)?,
            };
            if !known {
                ctx.unknown_field(key);
            }
        }
        Ok(())
    }
}

/// Closed set of kinematics payload shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KinematicsVariant {
    Core(CoreKinematics),
    Delta(DeltaKinematics),
    Hangprinter(HangprinterKinematics),
    ZLeadscrew(ZLeadscrewKinematics),
    Generic(GenericKinematics),
}

impl KinematicsVariant {
    fn merge_field(
        &mut self,
        key: &str,
        delta: &Value,
        ctx: &mut MergeContext<'_>,
    ) -> Result<bool, ModelError> {
        match self {
            KinematicsVariant::Core(k) => k.merge_field(key, delta, ctx),
            KinematicsVariant::Delta(k) => k.merge_field(key, delta, ctx),
            KinematicsVariant::Hangprinter(k) => k.merge_field(key, delta, ctx),
            KinematicsVariant::ZLeadscrew(k) => k.merge_field(key, delta, ctx),
            KinematicsVariant::Generic(_) => Ok(false),
        }
    }
}

/// Base shape only; used for `none` and for unknown discriminants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenericKinematics {}

/// Motion segmentation tuning shared by every variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveSegmentation {
    pub segments_per_sec: f64,
    pub min_segment_length: f64,
}

fields!(MoveSegmentation {
    "segmentsPerSec" => segments_per_sec,
    "minSegmentLength" => min_segment_length,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TiltCorrection {
    pub correction_factor: f64,
    pub last_corrections: Vec<f64>,
    pub lead_screw_x: Vec<f64>,
    pub lead_screw_y: Vec<f64>,
    pub pitch: f64,
    pub screw_pitch: f64,
}

fields!(TiltCorrection {
    "correctionFactor" => correction_factor,
    "lastCorrections" => last_corrections,
    "leadScrewX" => lead_screw_x,
    "leadScrewY" => lead_screw_y,
    "pitch" => pitch,
    "screwPitch" => screw_pitch,
});

/// Cartesian, CoreXY and friends: axis mixing matrices.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreKinematics {
    pub forward_matrix: Vec<Vec<f64>>,
    pub inverse_matrix: Vec<Vec<f64>>,
    pub tilt_correction: TiltCorrection,
}

fn identity(size: usize) -> Vec<Vec<f64>> {
    (0..size)
        .map(|row| (0..size).map(|col| if row == col { 1.0 } else { 0.0 }).collect())
        .collect()
}

impl Default for CoreKinematics {
    fn default() -> Self {
        Self {
            forward_matrix: identity(3),
            inverse_matrix: identity(3),
            tilt_correction: TiltCorrection::default(),
        }
    }
}

fields!(CoreKinematics {
    "forwardMatrix" => forward_matrix,
    "inverseMatrix" => inverse_matrix,
    "tiltCorrection" => tilt_correction,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaTower {
    pub angle_correction: f64,
    pub diagonal: f64,
    pub endstop_adjustment: f64,
    pub x_pos: f64,
    pub y_pos: f64,
}

fields!(DeltaTower {
    "angleCorrection" => angle_correction,
    "diagonal" => diagonal,
    "endstopAdjustment" => endstop_adjustment,
    "xPos" => x_pos,
    "yPos" => y_pos,
});

/// Linear and rotary delta printers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaKinematics {
    pub delta_radius: f64,
    pub diagonal: f64,
    pub homed_height: f64,
    pub print_radius: f64,
    pub towers: Vec<DeltaTower>,
    pub x_tilt: f64,
    pub y_tilt: f64,
}

fields!(DeltaKinematics {
    "deltaRadius" => delta_radius,
    "diagonal" => diagonal,
    "homedHeight" => homed_height,
    "printRadius" => print_radius,
    "towers" => towers,
    "xTilt" => x_tilt,
    "yTilt" => y_tilt,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HangprinterKinematics {
    pub anchors: Vec<Vec<f64>>,
    pub print_radius: f64,
}

fields!(HangprinterKinematics {
    "anchors" => anchors,
    "printRadius" => print_radius,
});

/// Polar and SCARA machines: a Z leadscrew set with optional tilt correction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZLeadscrewKinematics {
    pub tilt_correction: TiltCorrection,
}

fields!(ZLeadscrewKinematics {
    "tiltCorrection" => tilt_correction,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplyWarning;
    use crate::merge::MergeOptions;
    use serde_json::json;

    fn apply(kinematics: &mut Kinematics, delta: Value) -> Vec<ApplyWarning> {
        let options = MergeOptions::default();
        let mut ctx = MergeContext::new(&options);
        kinematics.merge(&delta, &mut ctx).unwrap();
        ctx.into_warnings()
    }

    #[test]
    fn test_default_is_cartesian_core() {
        let kinematics = Kinematics::default();
        assert_eq!(kinematics.name(), "cartesian");
        assert_eq!(kinematics.as_core().unwrap().forward_matrix, identity(3));
    }

    #[test]
    fn test_switch_allocates_fresh_variant() {
        let mut kinematics = Kinematics::default();
        apply(&mut kinematics, json!({"forwardMatrix": [[2, 0, 0], [0, 2, 0], [0, 0, 1]]}));
        apply(&mut kinematics, json!({"name": "delta", "diagonal": 215}));

        assert_eq!(kinematics.name(), "delta");
        assert_eq!(kinematics.as_delta().unwrap().diagonal, 215.0);
        let rendered = serde_json::to_value(&kinematics).unwrap();
        assert!(rendered.get("forwardMatrix").is_none());
        assert_eq!(rendered["diagonal"], json!(215.0));
    }

    #[test]
    fn test_switch_between_core_names_resets_fields() {
        let mut kinematics = Kinematics::default();
        apply(&mut kinematics, json!({"forwardMatrix": [[5]]}));
        apply(&mut kinematics, json!({"name": "coreXY"}));
        assert_eq!(kinematics.as_core().unwrap().forward_matrix, identity(3));
    }

    #[test]
    fn test_unknown_discriminant_falls_back() {
        let mut kinematics = Kinematics::default();
        let warnings = apply(&mut kinematics, json!({"name": "warpDrive", "flux": 3}));
        assert_eq!(kinematics.name(), "warpDrive");
        assert!(matches!(kinematics.variant(), KinematicsVariant::Generic(_)));
        assert!(warnings
            .iter()
            .any(|w| matches!(w, ApplyWarning::UnknownDiscriminant { name, .. } if name == "warpDrive")));
        assert!(warnings
            .iter()
            .any(|w| matches!(w, ApplyWarning::UnknownField { field, .. } if field == "flux")));
    }

    #[test]
    fn test_field_of_other_variant_is_ignored() {
        let mut kinematics = Kinematics::new("delta");
        let warnings = apply(&mut kinematics, json!({"forwardMatrix": [[1]]}));
        assert!(kinematics.as_core().is_none());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_non_string_name_is_mismatch() {
        let mut kinematics = Kinematics::default();
        let options = MergeOptions::default();
        let mut ctx = MergeContext::new(&options);
        let err = kinematics.merge(&json!({"name": 3}), &mut ctx).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "name");
    }

    #[test]
    fn test_null_name_resets_to_default() {
        let mut kinematics = Kinematics::default();
        apply(&mut kinematics, json!({"name": "delta", "diagonal": 215}));
        let warnings = apply(&mut kinematics, json!({"name": null}));

        assert!(warnings.is_empty());
        assert_eq!(kinematics, Kinematics::default());
        let rendered = serde_json::to_value(&kinematics).unwrap();
        assert!(rendered.get("diagonal").is_none());
    }

    #[test]
    fn test_null_name_then_fields_merge_into_default() {
        let mut kinematics = Kinematics::new("delta");
        apply(&mut kinematics, json!({"name": null, "forwardMatrix": [[2]]}));
        assert_eq!(kinematics.name(), DEFAULT_KINEMATICS);
        assert_eq!(kinematics.as_core().unwrap().forward_matrix[0][0], 2.0);
    }

    #[test]
    fn test_every_table_entry_resolves() {
        for (name, _) in VARIANT_TABLE {
            assert!(variant_for(name).is_some());
        }
        assert!(variant_for("unknown").is_none());
    }
}
