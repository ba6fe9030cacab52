//! User-facing defect messages.
//!
//! Clients match on these strings, so they are part of the contract.

pub const AADHAAR_FORMAT: &str = "Aadhaar must be 12 digits and contain only numbers.";
pub const AADHAAR_LEADING_DIGIT: &str = "Aadhaar number cannot start with 0 or 1.";
pub const AADHAAR_CHECKSUM: &str = "Invalid Aadhaar number (checksum failed).";

pub const OWNER_NAME_REQUIRED: &str = "Name of Entrepreneur is required.";
pub const NAME_TOO_LONG: &str = "Name cannot exceed 100 characters.";

pub const AADHAAR_DECLARATION: &str = "You must agree to the Aadhaar declaration.";

pub const ORGANIZATION_TYPE: &str = "Please select a valid type of organisation.";

pub const PAN_REQUIRED: &str =
    "PAN is mandatory for this type of organization. Please select \"Yes\".";
pub const PAN_NUMBER_REQUIRED: &str = "PAN number is required.";
pub const PAN_FORMAT: &str = "Invalid PAN format (e.g., ABCDE1234F).";
pub const PAN_HOLDER_NAME_REQUIRED: &str = "Name of PAN Holder is required.";

pub const DATE_REQUIRED: &str = "DOB or DOI is required.";
pub const DATE_FORMAT: &str = "Date format is DD/MM/YYYY.";
pub const DATE_INVALID: &str = "Invalid date provided.";
pub const DATE_IN_FUTURE: &str = "Date cannot be in the future.";

pub const PAN_DECLARATION: &str = "You must agree to the PAN declaration.";

pub const GSTIN_REQUIRED: &str = "GSTIN is mandatory if turnover exceeds ₹40 Lakhs.";

pub const TURNOVER_NEGATIVE: &str = "Turnover cannot be negative.";

/// Message for an over-long name when the limit is not the default 100.
pub fn name_too_long(max_len: usize) -> String {
    if max_len == crate::predicates::MAX_NAME_LEN {
        NAME_TOO_LONG.to_owned()
    } else {
        format!("Name cannot exceed {max_len} characters.")
    }
}

/// Message for a missing GSTIN, stated in lakhs of rupees.
pub fn gstin_required(threshold: f64) -> String {
    let lakhs = threshold / 100_000.0;
    if lakhs.fract() == 0.0 {
        format!("GSTIN is mandatory if turnover exceeds ₹{lakhs:.0} Lakhs.")
    } else {
        format!("GSTIN is mandatory if turnover exceeds ₹{lakhs} Lakhs.")
    }
}
