//! Vitals engine: unit conversion, BMI, classification, validation.
//!
//! Two-tier policy throughout:
//! - Absolute bounds gate what the form accepts at all
//! - The normal band only drives a non-blocking highlight
//!
//! A value outside the normal band but inside the absolute bounds is
//! never an error, only a classification.

use crate::ranges;
use crate::types::{
    BmiCategory, HeightUnit, TemperatureUnit, VitalField, VitalLevel, VitalOutOfRange,
    VitalUnit, VitalsRecord, WeightUnit,
};

const LB_PER_KG: f64 = 0.453592;
const CM_PER_IN: f64 = 2.54;

/// Round to one decimal place, the display precision of the form
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ============================================================================
// Unit Conversion
// ============================================================================

/// Convert a temperature reading to the other unit, rounded to 1 decimal
pub fn convert_temperature(value: f64, from: TemperatureUnit) -> f64 {
    let converted = match from {
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Celsius => value * 9.0 / 5.0 + 32.0,
    };
    round1(converted)
}

/// Convert a weight reading to the other unit, rounded to 1 decimal
pub fn convert_weight(value: f64, from: WeightUnit) -> f64 {
    let converted = match from {
        WeightUnit::Lb => value * LB_PER_KG,
        WeightUnit::Kg => value / LB_PER_KG,
    };
    round1(converted)
}

/// Convert a height reading to the other unit, rounded to 1 decimal
pub fn convert_height(value: f64, from: HeightUnit) -> f64 {
    let converted = match from {
        HeightUnit::In => value * CM_PER_IN,
        HeightUnit::Cm => value / CM_PER_IN,
    };
    round1(converted)
}

// ============================================================================
// BMI
// ============================================================================

/// Body mass index from metric inputs, rounded to 1 decimal
///
/// Returns None for non-positive or non-finite inputs rather than
/// producing a division artifact.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() {
        return None;
    }
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(round1(weight_kg / (height_m * height_m)))
}

/// BMI from a form record, converting from the record's display units
pub fn bmi_for_record(record: &VitalsRecord) -> Option<f64> {
    let weight_kg = match (record.weight, record.weight_unit) {
        (Some(w), WeightUnit::Kg) => w,
        (Some(w), WeightUnit::Lb) => convert_weight(w, WeightUnit::Lb),
        (None, _) => return None,
    };
    let height_cm = match (record.height, record.height_unit) {
        (Some(h), HeightUnit::Cm) => h,
        (Some(h), HeightUnit::In) => convert_height(h, HeightUnit::In),
        (None, _) => return None,
    };
    calculate_bmi(weight_kg, height_cm)
}

/// Categorize a BMI value
///
/// Band edges are strict on the upper bound, so 18.5 is Normal, 25.0 is
/// Overweight and 30.0 is Obese.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Classify a measurement against its normal band
///
/// Unknown when the (field, unit) pair is unmapped or the field has no
/// normal band (weight, height). Comparisons are strict, so a value
/// equal to either band edge is Normal.
pub fn classify(field: VitalField, value: f64, unit: Option<VitalUnit>) -> VitalLevel {
    if !value.is_finite() {
        return VitalLevel::Unknown;
    }

    let Some(key) = ranges::range_key(field, unit) else {
        return VitalLevel::Unknown;
    };
    let spec = key.spec();

    match (spec.normal_min, spec.normal_max) {
        (Some(lo), Some(hi)) => {
            if value < lo {
                VitalLevel::Low
            } else if value > hi {
                VitalLevel::High
            } else {
                VitalLevel::Normal
            }
        }
        _ => VitalLevel::Unknown,
    }
}

/// Classify by the string tokens the presentation shell sends
///
/// Unrecognized field names classify as Unknown. An unrecognized unit
/// token leaves unit-qualified fields unmapped and is ignored elsewhere.
pub fn classify_named(field: &str, value: f64, unit: Option<&str>) -> VitalLevel {
    let Some(field) = VitalField::parse(field) else {
        tracing::debug!("Classify request for unknown field {:?}", field);
        return VitalLevel::Unknown;
    };
    let unit = match resolve_unit_token(field, unit) {
        Ok(unit) => unit,
        Err(()) => return VitalLevel::Unknown,
    };
    classify(field, value, unit)
}

// ============================================================================
// Validation
// ============================================================================

/// Validate a measurement against its absolute bounds
///
/// An absent or NaN value is "nothing entered" and never an error. The
/// error carries a message with the field's bounds for display next to
/// the input.
pub fn validate(
    field: VitalField,
    value: Option<f64>,
    unit: Option<VitalUnit>,
) -> Option<VitalOutOfRange> {
    let value = value?;
    if value.is_nan() {
        return None;
    }

    let key = ranges::range_key(field, unit)?;
    let spec = key.spec();

    if value < spec.min || value > spec.max {
        tracing::debug!(
            "{} rejected: {} outside [{}, {}] {}",
            field.as_str(),
            value,
            spec.min,
            spec.max,
            spec.unit
        );
        return Some(VitalOutOfRange {
            field,
            message: format!(
                "{} must be between {} and {} {}",
                field.label(),
                spec.min,
                spec.max,
                spec.unit
            ),
        });
    }

    None
}

/// Validate by the string tokens the presentation shell sends
///
/// Unknown field names are not rejected; the form may carry inputs this
/// engine does not know about.
pub fn validate_named(
    field: &str,
    value: Option<f64>,
    unit: Option<&str>,
) -> Option<VitalOutOfRange> {
    let field = VitalField::parse(field)?;
    let unit = resolve_unit_token(field, unit).ok()?;
    validate(field, value, unit)
}

/// Validate every entered field of a record with its display units
///
/// Returns one error per out-of-bounds field, in form order.
pub fn validate_record(record: &VitalsRecord) -> Vec<VitalOutOfRange> {
    VitalField::ALL
        .iter()
        .filter_map(|&field| validate(field, record.get(field), record.unit_for(field)))
        .collect()
}

/// Resolve an optional unit token for a field
///
/// Err means the token was unrecognized for a unit-qualified field, so
/// the range lookup cannot succeed.
fn resolve_unit_token(field: VitalField, unit: Option<&str>) -> Result<Option<VitalUnit>, ()> {
    match unit {
        None => Ok(None),
        Some(token) => match VitalUnit::parse(token) {
            Some(unit) => Ok(Some(unit)),
            None => match field {
                VitalField::Temperature | VitalField::Weight | VitalField::Height => Err(()),
                _ => Ok(None),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_conversion() {
        assert_eq!(convert_temperature(98.6, TemperatureUnit::Fahrenheit), 37.0);
        assert_eq!(convert_temperature(37.0, TemperatureUnit::Celsius), 98.6);
        assert_eq!(convert_temperature(32.0, TemperatureUnit::Fahrenheit), 0.0);
    }

    #[test]
    fn test_temperature_roundtrip() {
        // F -> C -> F stays within one rounding step across the
        // physiological range
        for tenths in 950..=1050 {
            let f = tenths as f64 / 10.0;
            let c = convert_temperature(f, TemperatureUnit::Fahrenheit);
            let back = convert_temperature(c, TemperatureUnit::Celsius);
            assert!((back - f).abs() <= 0.101, "{} -> {} -> {}", f, c, back);
        }
    }

    #[test]
    fn test_weight_conversion() {
        assert_eq!(convert_weight(220.0, WeightUnit::Lb), 99.8);
        assert_eq!(convert_weight(100.0, WeightUnit::Kg), 220.5);
    }

    #[test]
    fn test_height_conversion() {
        assert_eq!(convert_height(70.0, HeightUnit::In), 177.8);
        assert_eq!(convert_height(177.8, HeightUnit::Cm), 70.0);
    }

    #[test]
    fn test_bmi() {
        assert_eq!(calculate_bmi(70.0, 175.0), Some(22.9));
        assert_eq!(calculate_bmi(0.0, 175.0), None);
        assert_eq!(calculate_bmi(70.0, 0.0), None);
        assert_eq!(calculate_bmi(-5.0, 175.0), None);
    }

    #[test]
    fn test_bmi_for_record() {
        let record = VitalsRecord {
            weight: Some(154.3),
            weight_unit: WeightUnit::Lb,
            height: Some(68.9),
            height_unit: HeightUnit::In,
            ..Default::default()
        };
        // 154.3 lb -> 70.0 kg, 68.9 in -> 175.0 cm
        assert_eq!(bmi_for_record(&record), Some(22.9));
        assert_eq!(bmi_for_record(&VitalsRecord::default()), None);
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(bmi_category(18.49), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::Normal);
        assert_eq!(bmi_category(24.99), BmiCategory::Normal);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.99), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_classify_heart_rate() {
        assert_eq!(classify(VitalField::HeartRate, 50.0, None), VitalLevel::Low);
        assert_eq!(classify(VitalField::HeartRate, 72.0, None), VitalLevel::Normal);
        assert_eq!(classify(VitalField::HeartRate, 150.0, None), VitalLevel::High);
        // Band edges are inclusive
        assert_eq!(classify(VitalField::HeartRate, 60.0, None), VitalLevel::Normal);
        assert_eq!(classify(VitalField::HeartRate, 100.0, None), VitalLevel::Normal);
    }

    #[test]
    fn test_classify_without_normal_band() {
        assert_eq!(
            classify_named("weight", 500.0, Some("lb")),
            VitalLevel::Unknown
        );
        assert_eq!(
            classify(VitalField::Height, 180.0, Some(HeightUnit::Cm.into())),
            VitalLevel::Unknown
        );
    }

    #[test]
    fn test_classify_named_lenient() {
        assert_eq!(classify_named("heart_rate", 72.0, None), VitalLevel::Normal);
        assert_eq!(classify_named("shoe_size", 11.0, None), VitalLevel::Unknown);
        // Garbage unit on a unit-qualified field leaves it unmapped
        assert_eq!(
            classify_named("temperature", 98.6, Some("furlongs")),
            VitalLevel::Unknown
        );
        // Garbage unit on a unit-independent field is ignored
        assert_eq!(
            classify_named("heart_rate", 72.0, Some("furlongs")),
            VitalLevel::Normal
        );
    }

    #[test]
    fn test_classify_temperature_units() {
        assert_eq!(
            classify_named("temperature", 101.0, Some("f")),
            VitalLevel::High
        );
        assert_eq!(
            classify_named("temperature", 36.8, Some("c")),
            VitalLevel::Normal
        );
        // No unit defaults to Fahrenheit
        assert_eq!(classify_named("temperature", 98.6, None), VitalLevel::Normal);
    }

    #[test]
    fn test_validate_absolute_bounds() {
        let err = validate(VitalField::HeartRate, Some(300.0), None).unwrap();
        assert_eq!(err.field, VitalField::HeartRate);
        assert!(err.message.contains("30"));
        assert!(err.message.contains("250"));
        assert!(err.message.contains("bpm"));

        assert_eq!(validate(VitalField::HeartRate, Some(72.0), None), None);
    }

    #[test]
    fn test_validate_out_of_normal_is_not_an_error() {
        // 150 bpm is High but inside the absolute bounds
        assert_eq!(validate(VitalField::HeartRate, Some(150.0), None), None);
        assert_eq!(
            classify(VitalField::HeartRate, 150.0, None),
            VitalLevel::High
        );
    }

    #[test]
    fn test_validate_absent_and_nan() {
        assert_eq!(validate(VitalField::HeartRate, None, None), None);
        assert_eq!(validate(VitalField::HeartRate, Some(f64::NAN), None), None);
    }

    #[test]
    fn test_validate_named_lenient() {
        assert!(validate_named("favourite_colour", Some(1000.0), None).is_none());
        assert!(validate_named("heart_rate", Some(300.0), None).is_some());
    }

    #[test]
    fn test_validate_pain_level_zero_is_a_reading() {
        // 0 is a real pain score, inside bounds
        assert_eq!(validate(VitalField::PainLevel, Some(0.0), None), None);
        assert_eq!(
            classify(VitalField::PainLevel, 0.0, None),
            VitalLevel::Normal
        );
        assert!(validate(VitalField::PainLevel, Some(11.0), None).is_some());
    }

    #[test]
    fn test_validate_record() {
        let mut record = VitalsRecord {
            heart_rate: Some(300.0),
            temperature: Some(98.6),
            ..Default::default()
        };
        let errors = validate_record(&record);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, VitalField::HeartRate);

        // Validation follows the record's display unit
        record.set(VitalField::HeartRate, Some(72.0));
        record.set(VitalField::Temperature, Some(37.0));
        record.temperature_unit = TemperatureUnit::Celsius;
        assert_eq!(record.get(VitalField::HeartRate), Some(72.0));
        assert!(validate_record(&record).is_empty());
    }
}
