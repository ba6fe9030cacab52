//! Standalone PAN-holder check.
//!
//! Validates the PAN details block on its own, before the full form is
//! submitted. No external identity service is consulted; the verdict comes
//! from the same field checks the full-form rules use.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::enums::DateType;
use crate::form::{ParseError, present};
use crate::validation::rules_pan::{pan_date_defect, pan_holder_name_defect, pan_number_defect};
use crate::validation::{ValidationConfig, ValidationOutcome};

/// The PAN details block of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanHolderRequest {
    /// PAN, raw.
    pub pan: String,
    /// Name of the PAN holder.
    pub pan_name: String,
    /// Date of birth or incorporation, `DD/MM/YYYY`, raw.
    pub dob: String,
    /// Which kind of date `dob` is.
    pub dob_type: DateType,
}

/// Parses a JSON document into a [`PanHolderRequest`].
///
/// # Errors
///
/// Returns [`ParseError`] when the JSON is malformed or a key is missing.
pub fn parse_pan_holder(json: &str) -> Result<PanHolderRequest, ParseError> {
    Ok(serde_json::from_str(json)?)
}

/// Checks the PAN number, holder name and date of `request`.
///
/// Defects are reported in the order PAN, name, date, with the same rule
/// ids, kinds and messages as the full-form rules.
pub fn validate_pan_holder(
    request: &PanHolderRequest,
    config: &ValidationConfig,
    today: NaiveDate,
) -> ValidationOutcome {
    let defects = [
        pan_number_defect(present(Some(&request.pan))),
        pan_holder_name_defect(Some(&request.pan_name), config.max_name_len),
        pan_date_defect(present(Some(&request.dob)), today),
    ]
    .into_iter()
    .flatten()
    .collect();
    let outcome = ValidationOutcome::from_defects(defects);
    info!(
        accepted = outcome.is_accepted(),
        defects = outcome.defects().len(),
        "PAN holder validated"
    );
    outcome
}
