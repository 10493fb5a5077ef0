//! Core domain types for the Pulseboard component library.
//!
//! This module defines the fundamental types used throughout the system:
//! - Vital-sign fields, units, and the intake record
//! - Reference ranges and classification levels
//! - Table state owned by the presentation shell (sort, selection, pagination)

use serde::{Deserialize, Serialize};

// ============================================================================
// Vital Sign Units
// ============================================================================

/// Temperature display unit
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    #[serde(rename = "f")]
    Fahrenheit,
    #[serde(rename = "c")]
    Celsius,
}

impl TemperatureUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "f",
            TemperatureUnit::Celsius => "c",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }
}

/// Weight display unit
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Lb,
    Kg,
}

impl WeightUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            WeightUnit::Lb => "lb",
            WeightUnit::Kg => "kg",
        }
    }
}

/// Height display unit
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    In,
    Cm,
}

impl HeightUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            HeightUnit::In => "in",
            HeightUnit::Cm => "cm",
        }
    }
}

/// Unit discriminator for range lookups on unit-qualified fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VitalUnit {
    Temperature(TemperatureUnit),
    Weight(WeightUnit),
    Height(HeightUnit),
}

impl VitalUnit {
    /// Parse a unit token as sent by the presentation shell
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "f" => Some(VitalUnit::Temperature(TemperatureUnit::Fahrenheit)),
            "c" => Some(VitalUnit::Temperature(TemperatureUnit::Celsius)),
            "lb" => Some(VitalUnit::Weight(WeightUnit::Lb)),
            "kg" => Some(VitalUnit::Weight(WeightUnit::Kg)),
            "in" => Some(VitalUnit::Height(HeightUnit::In)),
            "cm" => Some(VitalUnit::Height(HeightUnit::Cm)),
            _ => None,
        }
    }
}

impl From<TemperatureUnit> for VitalUnit {
    fn from(unit: TemperatureUnit) -> Self {
        VitalUnit::Temperature(unit)
    }
}

impl From<WeightUnit> for VitalUnit {
    fn from(unit: WeightUnit) -> Self {
        VitalUnit::Weight(unit)
    }
}

impl From<HeightUnit> for VitalUnit {
    fn from(unit: HeightUnit) -> Self {
        VitalUnit::Height(unit)
    }
}

// ============================================================================
// Vital Sign Fields and Record
// ============================================================================

/// Physiological field captured on the vitals form
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VitalField {
    Systolic,
    Diastolic,
    HeartRate,
    Temperature,
    RespiratoryRate,
    OxygenSaturation,
    Weight,
    Height,
    PainLevel,
}

impl VitalField {
    /// Every field on the vitals form
    pub const ALL: [VitalField; 9] = [
        VitalField::Systolic,
        VitalField::Diastolic,
        VitalField::HeartRate,
        VitalField::Temperature,
        VitalField::RespiratoryRate,
        VitalField::OxygenSaturation,
        VitalField::Weight,
        VitalField::Height,
        VitalField::PainLevel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VitalField::Systolic => "systolic",
            VitalField::Diastolic => "diastolic",
            VitalField::HeartRate => "heart_rate",
            VitalField::Temperature => "temperature",
            VitalField::RespiratoryRate => "respiratory_rate",
            VitalField::OxygenSaturation => "oxygen_saturation",
            VitalField::Weight => "weight",
            VitalField::Height => "height",
            VitalField::PainLevel => "pain_level",
        }
    }

    /// Parse a field token as sent by the presentation shell
    ///
    /// Unknown tokens return None; callers treat them leniently rather
    /// than rejecting the input.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "systolic" => Some(VitalField::Systolic),
            "diastolic" => Some(VitalField::Diastolic),
            "heart_rate" => Some(VitalField::HeartRate),
            "temperature" => Some(VitalField::Temperature),
            "respiratory_rate" => Some(VitalField::RespiratoryRate),
            "oxygen_saturation" => Some(VitalField::OxygenSaturation),
            "weight" => Some(VitalField::Weight),
            "height" => Some(VitalField::Height),
            "pain_level" => Some(VitalField::PainLevel),
            _ => None,
        }
    }

    /// Human-readable label used in validation messages
    pub fn label(self) -> &'static str {
        match self {
            VitalField::Systolic => "Systolic pressure",
            VitalField::Diastolic => "Diastolic pressure",
            VitalField::HeartRate => "Heart rate",
            VitalField::Temperature => "Temperature",
            VitalField::RespiratoryRate => "Respiratory rate",
            VitalField::OxygenSaturation => "Oxygen saturation",
            VitalField::Weight => "Weight",
            VitalField::Height => "Height",
            VitalField::PainLevel => "Pain level",
        }
    }
}

/// A vitals intake record as edited on the form
///
/// Every measurement is optional; None means the field has not been
/// entered. A recorded value of 0 (plausible for pain level) is a real
/// reading, distinct from unset. The caller owns persistence; this type
/// is mutated field by field on input events.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VitalsRecord {
    pub systolic: Option<f64>,
    pub diastolic: Option<f64>,
    pub heart_rate: Option<f64>,
    pub temperature: Option<f64>,
    pub temperature_unit: TemperatureUnit,
    pub respiratory_rate: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub weight: Option<f64>,
    pub weight_unit: WeightUnit,
    pub height: Option<f64>,
    pub height_unit: HeightUnit,
    pub pain_level: Option<f64>,
}

impl Default for VitalsRecord {
    fn default() -> Self {
        Self {
            systolic: None,
            diastolic: None,
            heart_rate: None,
            temperature: None,
            temperature_unit: TemperatureUnit::Fahrenheit,
            respiratory_rate: None,
            oxygen_saturation: None,
            weight: None,
            weight_unit: WeightUnit::Lb,
            height: None,
            height_unit: HeightUnit::In,
            pain_level: None,
        }
    }
}

impl VitalsRecord {
    /// Read a measurement by field
    pub fn get(&self, field: VitalField) -> Option<f64> {
        match field {
            VitalField::Systolic => self.systolic,
            VitalField::Diastolic => self.diastolic,
            VitalField::HeartRate => self.heart_rate,
            VitalField::Temperature => self.temperature,
            VitalField::RespiratoryRate => self.respiratory_rate,
            VitalField::OxygenSaturation => self.oxygen_saturation,
            VitalField::Weight => self.weight,
            VitalField::Height => self.height,
            VitalField::PainLevel => self.pain_level,
        }
    }

    /// Write a measurement by field (None clears it)
    pub fn set(&mut self, field: VitalField, value: Option<f64>) {
        match field {
            VitalField::Systolic => self.systolic = value,
            VitalField::Diastolic => self.diastolic = value,
            VitalField::HeartRate => self.heart_rate = value,
            VitalField::Temperature => self.temperature = value,
            VitalField::RespiratoryRate => self.respiratory_rate = value,
            VitalField::OxygenSaturation => self.oxygen_saturation = value,
            VitalField::Weight => self.weight = value,
            VitalField::Height => self.height = value,
            VitalField::PainLevel => self.pain_level = value,
        }
    }

    /// The display unit currently selected for a unit-qualified field
    pub fn unit_for(&self, field: VitalField) -> Option<VitalUnit> {
        match field {
            VitalField::Temperature => Some(self.temperature_unit.into()),
            VitalField::Weight => Some(self.weight_unit.into()),
            VitalField::Height => Some(self.height_unit.into()),
            _ => None,
        }
    }
}

// ============================================================================
// Reference Ranges and Classification
// ============================================================================

/// Immutable bounds for one vital-sign field in one unit
///
/// min/max gate what is accepted at all; the normal band only drives a
/// non-blocking highlight. Fields without a normal band (weight, height)
/// classify as Unknown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
    pub normal_min: Option<f64>,
    pub normal_max: Option<f64>,
    pub unit: &'static str,
}

/// Tagged lookup key resolving (field, unit) to a RangeSpec
///
/// Unit-qualified fields carry their unit so the mapping stays exhaustive
/// and unmapped combinations are unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeKey {
    Systolic,
    Diastolic,
    HeartRate,
    RespiratoryRate,
    OxygenSaturation,
    PainLevel,
    Temperature(TemperatureUnit),
    Weight(WeightUnit),
    Height(HeightUnit),
}

/// Classification of a measurement against its normal band
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VitalLevel {
    Low,
    Normal,
    High,
    Unknown,
}

impl VitalLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalLevel::Low => "low",
            VitalLevel::Normal => "normal",
            VitalLevel::High => "high",
            VitalLevel::Unknown => "unknown",
        }
    }
}

/// BMI band per the WHO adult cutoffs
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Validation failure for a value outside its absolute bounds
///
/// Carried as data back to the form, never raised. Values inside the
/// absolute bounds but outside the normal band are not errors.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct VitalOutOfRange {
    pub field: VitalField,
    pub message: String,
}

// ============================================================================
// Table State (owned by the presentation shell)
// ============================================================================

/// Key identifying one table row across renders
pub type RowKey = String;

/// Sort order for a column
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Current sort column and direction
///
/// The engine only computes the next state; the caller sorts the data
/// and feeds it back in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortState {
    pub column_id: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }
}

/// Whether one row or many rows may be selected at once
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    Single,
    Multiple,
}

/// Selected row keys, in selection order
///
/// Order is not semantically significant but is kept stable so renders
/// and tests are deterministic.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionState {
    pub mode: SelectionMode,
    pub keys: Vec<RowKey>,
}

/// Caller-owned pagination state (1-based page)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationState {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}
