//! Form record generator and benchmark utilities for udyam-core.
//!
//! Generates deterministic batches of registration forms, valid or with
//! injected defects, for benchmarking and property-based testing.
use chrono::NaiveDate;

pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_forms};

/// Fixed evaluation date used by every benchmark and generator test.
///
/// Generated dates all fall on or before 28/12/2020.
pub fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap_or_default()
}
