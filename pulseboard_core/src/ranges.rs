//! Reference ranges for vital-sign fields.
//!
//! The bounds target adult outpatient intake. min/max gate acceptance;
//! the optional normal band only drives highlighting. Weight and height
//! have no normal band and always classify as unknown.

use crate::types::{HeightUnit, RangeKey, RangeSpec, TemperatureUnit, VitalField, VitalUnit, WeightUnit};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached range table keyed by (field, unit) - built once and reused
static RANGE_TABLE: Lazy<HashMap<RangeKey, RangeSpec>> =
    Lazy::new(|| RangeKey::ALL.iter().map(|k| (*k, k.spec())).collect());

/// Get a reference to the cached range table
///
/// Useful for shells that render a reference-range legend. Lookups on a
/// single key should go through [`RangeKey::spec`] instead.
pub fn range_table() -> &'static HashMap<RangeKey, RangeSpec> {
    &RANGE_TABLE
}

impl RangeKey {
    /// Every key the table defines
    pub const ALL: [RangeKey; 12] = [
        RangeKey::Systolic,
        RangeKey::Diastolic,
        RangeKey::HeartRate,
        RangeKey::RespiratoryRate,
        RangeKey::OxygenSaturation,
        RangeKey::PainLevel,
        RangeKey::Temperature(TemperatureUnit::Fahrenheit),
        RangeKey::Temperature(TemperatureUnit::Celsius),
        RangeKey::Weight(WeightUnit::Lb),
        RangeKey::Weight(WeightUnit::Kg),
        RangeKey::Height(HeightUnit::In),
        RangeKey::Height(HeightUnit::Cm),
    ];

    /// The bounds for this key
    ///
    /// Exhaustive by construction; adding a key without bounds fails to
    /// compile.
    pub fn spec(self) -> RangeSpec {
        match self {
            RangeKey::Systolic => RangeSpec {
                min: 50.0,
                max: 250.0,
                normal_min: Some(90.0),
                normal_max: Some(140.0),
                unit: "mmHg",
            },
            RangeKey::Diastolic => RangeSpec {
                min: 20.0,
                max: 150.0,
                normal_min: Some(60.0),
                normal_max: Some(90.0),
                unit: "mmHg",
            },
            RangeKey::HeartRate => RangeSpec {
                min: 30.0,
                max: 250.0,
                normal_min: Some(60.0),
                normal_max: Some(100.0),
                unit: "bpm",
            },
            RangeKey::RespiratoryRate => RangeSpec {
                min: 4.0,
                max: 60.0,
                normal_min: Some(12.0),
                normal_max: Some(20.0),
                unit: "breaths/min",
            },
            RangeKey::OxygenSaturation => RangeSpec {
                min: 50.0,
                max: 100.0,
                normal_min: Some(95.0),
                normal_max: Some(100.0),
                unit: "%",
            },
            RangeKey::PainLevel => RangeSpec {
                min: 0.0,
                max: 10.0,
                normal_min: Some(0.0),
                normal_max: Some(3.0),
                unit: "/10",
            },
            RangeKey::Temperature(TemperatureUnit::Fahrenheit) => RangeSpec {
                min: 90.0,
                max: 110.0,
                normal_min: Some(97.0),
                normal_max: Some(99.5),
                unit: "°F",
            },
            RangeKey::Temperature(TemperatureUnit::Celsius) => RangeSpec {
                min: 32.0,
                max: 43.5,
                normal_min: Some(36.1),
                normal_max: Some(37.5),
                unit: "°C",
            },
            RangeKey::Weight(WeightUnit::Lb) => RangeSpec {
                min: 1.0,
                max: 1500.0,
                normal_min: None,
                normal_max: None,
                unit: "lb",
            },
            RangeKey::Weight(WeightUnit::Kg) => RangeSpec {
                min: 0.5,
                max: 680.0,
                normal_min: None,
                normal_max: None,
                unit: "kg",
            },
            RangeKey::Height(HeightUnit::In) => RangeSpec {
                min: 5.0,
                max: 108.0,
                normal_min: None,
                normal_max: None,
                unit: "in",
            },
            RangeKey::Height(HeightUnit::Cm) => RangeSpec {
                min: 12.0,
                max: 274.0,
                normal_min: None,
                normal_max: None,
                unit: "cm",
            },
        }
    }
}

/// Resolve a field plus optional unit discriminator to a range key
///
/// Temperature, weight and height are unit-qualified; an omitted unit
/// falls back to the US intake default (°F, lb, in). A unit that does
/// not belong to the field resolves to None and the caller treats the
/// lookup as unmapped.
pub fn range_key(field: VitalField, unit: Option<VitalUnit>) -> Option<RangeKey> {
    match field {
        VitalField::Systolic => Some(RangeKey::Systolic),
        VitalField::Diastolic => Some(RangeKey::Diastolic),
        VitalField::HeartRate => Some(RangeKey::HeartRate),
        VitalField::RespiratoryRate => Some(RangeKey::RespiratoryRate),
        VitalField::OxygenSaturation => Some(RangeKey::OxygenSaturation),
        VitalField::PainLevel => Some(RangeKey::PainLevel),
        VitalField::Temperature => match unit {
            None => Some(RangeKey::Temperature(TemperatureUnit::Fahrenheit)),
            Some(VitalUnit::Temperature(u)) => Some(RangeKey::Temperature(u)),
            Some(_) => None,
        },
        VitalField::Weight => match unit {
            None => Some(RangeKey::Weight(WeightUnit::Lb)),
            Some(VitalUnit::Weight(u)) => Some(RangeKey::Weight(u)),
            Some(_) => None,
        },
        VitalField::Height => match unit {
            None => Some(RangeKey::Height(HeightUnit::In)),
            Some(VitalUnit::Height(u)) => Some(RangeKey::Height(u)),
            Some(_) => None,
        },
    }
}
