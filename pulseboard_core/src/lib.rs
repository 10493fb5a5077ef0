#![forbid(unsafe_code)]

//! Core logic for the Pulseboard healthcare UI component library.
//!
//! This crate provides:
//! - Vitals engine (unit conversion, BMI, classification, validation)
//! - Tabular data engine (virtualized windowing, sort toggle, selection,
//!   pagination)
//! - Debounced coordination for the caller-supplied medication lookup
//! - Configuration and logging infrastructure
//!
//! Everything here is pure computation over caller-owned state; the
//! presentation shell owns I/O, rendering and persistence.

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod ranges;
pub mod vitals;
pub mod columns;
pub mod virtualize;
pub mod sorting;
pub mod selection;
pub mod pagination;
pub mod debounce;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use columns::{Alignment, ColumnAccessor, ColumnSpec, KeySpec};
pub use debounce::{DebouncedLookup, LookupRequest};
pub use pagination::{PageRequest, PageSummary};
pub use ranges::range_table;
pub use sorting::toggle_sort;
pub use virtualize::{VirtualWindow, Virtualizer};
pub use vitals::{
    bmi_category, bmi_for_record, calculate_bmi, classify, classify_named, convert_height,
    convert_temperature, convert_weight, validate, validate_named, validate_record,
};
