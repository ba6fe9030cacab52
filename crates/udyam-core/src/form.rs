//! The registration form record as submitted, and its field identifiers.
//!
//! [`FormRecord`] holds the raw submitted values. Only fields whose shape the
//! type system can enforce without losing a diagnostic are typed (`hasPan`,
//! `dobType`, `hasGstin`, the consents and turnovers). Everything a rule
//! reports on stays a string so that a bad value becomes a
//! [`FieldDefect`](crate::validation::FieldDefect) rather than a parse error.
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::{DateType, YesNo};

/// One submitted Udyam registration form.
///
/// Serde keys are the wire keys of the form (`adharno`, `ownername`,
/// `aadhaarDeclaration`, ...). Optional keys may be absent or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    /// Aadhaar number, raw.
    #[serde(rename = "adharno")]
    pub aadhaar_number: String,
    /// Name of the entrepreneur as per Aadhaar.
    #[serde(rename = "ownername")]
    pub owner_name: String,
    /// Consent to use the Aadhaar data.
    pub aadhaar_declaration: bool,
    /// Raw organisation type option code; `"0"` is the placeholder.
    pub organization_type: String,
    /// Whether the organisation has a PAN.
    pub has_pan: YesNo,
    /// PAN, raw.
    #[serde(default)]
    pub pan: Option<String>,
    /// Name of the PAN holder.
    #[serde(default)]
    pub pan_name: Option<String>,
    /// Date of birth or incorporation as per PAN, `DD/MM/YYYY`, raw.
    #[serde(default)]
    pub dob: Option<String>,
    /// Which kind of date `dob` is.
    #[serde(default)]
    pub dob_type: Option<DateType>,
    /// Consent to use the PAN data.
    #[serde(default)]
    pub pan_declaration: Option<bool>,
    /// Whether the organisation has a GSTIN.
    #[serde(default)]
    pub has_gstin: Option<YesNo>,
    /// Total turnover (A), in rupees.
    #[serde(default)]
    pub total_turnover_a: Option<f64>,
    /// Total turnover (B), in rupees.
    #[serde(default)]
    pub total_turnover_b: Option<f64>,
}

/// A form field, named by its wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// `adharno`
    AadhaarNumber,
    /// `ownername`
    OwnerName,
    /// `aadhaarDeclaration`
    AadhaarDeclaration,
    /// `organizationType`
    OrganizationType,
    /// `hasPan`
    HasPan,
    /// `pan`
    Pan,
    /// `panName`
    PanName,
    /// `dob`
    Dob,
    /// `dobType`
    DobType,
    /// `panDeclaration`
    PanDeclaration,
    /// `hasGstin`
    HasGstin,
    /// `totalTurnoverA`
    TotalTurnoverA,
    /// `totalTurnoverB`
    TotalTurnoverB,
}

impl Field {
    /// Returns the wire key of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::AadhaarNumber => "adharno",
            Self::OwnerName => "ownername",
            Self::AadhaarDeclaration => "aadhaarDeclaration",
            Self::OrganizationType => "organizationType",
            Self::HasPan => "hasPan",
            Self::Pan => "pan",
            Self::PanName => "panName",
            Self::Dob => "dob",
            Self::DobType => "dobType",
            Self::PanDeclaration => "panDeclaration",
            Self::HasGstin => "hasGstin",
            Self::TotalTurnoverA => "totalTurnoverA",
            Self::TotalTurnoverB => "totalTurnoverB",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Field {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.key())
    }
}

/// The input could not be read as a form at all.
///
/// Parse errors prevent validation from running. They signal a malformed
/// payload (missing required key, wrong JSON type, unknown enum value), not a
/// business-rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error: {message}")]
pub struct ParseError {
    /// Human-readable description, with line and column where available.
    pub message: String,
}

impl ParseError {
    /// Constructs a [`ParseError`] from a message string.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("line {}, column {}: {e}", e.line(), e.column()))
    }
}

/// Parses a JSON document into a [`FormRecord`].
///
/// # Errors
///
/// Returns [`ParseError`] when the JSON is malformed or does not have the
/// shape of a form record.
pub fn parse_form(json: &str) -> Result<FormRecord, ParseError> {
    Ok(serde_json::from_str(json)?)
}

/// Returns `Some(s)` when `s` is present and not blank.
pub(crate) fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}
