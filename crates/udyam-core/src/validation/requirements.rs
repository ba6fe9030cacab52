//! Conditional-field dependencies of the form.
//!
//! Which fields a record must fill in depends on the values of other fields:
//!
//! | trigger | makes required |
//! |---------|----------------|
//! | `organizationType` is not Proprietary | `hasPan` = `yes` |
//! | ... and `hasPan` = `yes` | `pan`, `panName`, `dob`, `panDeclaration` |
//! | `totalTurnoverA` > threshold | `hasGstin` != `no` |
//!
//! Each row is one predicate below. Rules use them as preconditions, and
//! [`required_fields`] folds them into the set of fields a record must carry.
use crate::enums::{OrganizationType, YesNo};
use crate::form::{Field, FormRecord};
use crate::validation::ValidationConfig;

/// Fields that must be filled in when PAN details are required.
pub const PAN_DETAIL_FIELDS: [Field; 4] = [
    Field::Pan,
    Field::PanName,
    Field::Dob,
    Field::PanDeclaration,
];

/// Fields every record must carry.
pub const ALWAYS_REQUIRED_FIELDS: [Field; 4] = [
    Field::AadhaarNumber,
    Field::OwnerName,
    Field::AadhaarDeclaration,
    Field::OrganizationType,
];

/// Parses the record's organisation type code.
pub fn organization_type(record: &FormRecord) -> Option<OrganizationType> {
    OrganizationType::from_code(&record.organization_type)
}

/// The organisation type is known and is not a proprietorship.
pub fn pan_required(record: &FormRecord) -> bool {
    organization_type(record).is_some_and(OrganizationType::requires_pan)
}

/// PAN is required and the applicant has said they have one.
pub fn pan_details_required(record: &FormRecord) -> bool {
    pan_required(record) && record.has_pan == YesNo::Yes
}

/// Turnover (A) is above the GSTIN threshold.
pub fn gstin_required(record: &FormRecord, config: &ValidationConfig) -> bool {
    record
        .total_turnover_a
        .is_some_and(|a| a > config.gstin_turnover_threshold)
}

/// Returns every field this record must fill in, in form order.
pub fn required_fields(record: &FormRecord, config: &ValidationConfig) -> Vec<Field> {
    let mut fields = ALWAYS_REQUIRED_FIELDS.to_vec();
    if pan_required(record) {
        fields.push(Field::HasPan);
    }
    if pan_details_required(record) {
        fields.extend(PAN_DETAIL_FIELDS);
    }
    if gstin_required(record, config) {
        fields.push(Field::HasGstin);
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(org: &str, has_pan: YesNo, turnover_a: Option<f64>) -> FormRecord {
        FormRecord {
            aadhaar_number: "234567890129".to_owned(),
            owner_name: "Test Owner".to_owned(),
            aadhaar_declaration: true,
            organization_type: org.to_owned(),
            has_pan,
            pan: None,
            pan_name: None,
            dob: None,
            dob_type: None,
            pan_declaration: None,
            has_gstin: None,
            total_turnover_a: turnover_a,
            total_turnover_b: None,
        }
    }

    #[test]
    fn proprietary_never_requires_pan() {
        let r = record("1", YesNo::Yes, None);
        assert!(!pan_required(&r));
        assert!(!pan_details_required(&r));
    }

    #[test]
    fn unknown_type_does_not_require_pan() {
        assert!(!pan_required(&record("0", YesNo::No, None)));
        assert!(!pan_required(&record("42", YesNo::No, None)));
    }

    #[test]
    fn company_with_pan_requires_details() {
        let r = record("5", YesNo::Yes, None);
        assert!(pan_required(&r));
        assert!(pan_details_required(&r));
    }

    #[test]
    fn company_without_pan_requires_only_the_answer() {
        let r = record("5", YesNo::No, None);
        assert!(pan_required(&r));
        assert!(!pan_details_required(&r));
    }

    #[test]
    fn gstin_threshold_is_strict() {
        let cfg = ValidationConfig::default();
        assert!(!gstin_required(&record("1", YesNo::No, Some(4_000_000.0)), &cfg));
        assert!(gstin_required(&record("1", YesNo::No, Some(4_000_000.01)), &cfg));
        assert!(!gstin_required(&record("1", YesNo::No, None), &cfg));
    }

    #[test]
    fn gstin_threshold_follows_config() {
        let cfg = ValidationConfig {
            gstin_turnover_threshold: 2_000_000.0,
            ..ValidationConfig::default()
        };
        assert!(gstin_required(&record("1", YesNo::No, Some(3_000_000.0)), &cfg));
    }

    #[test]
    fn required_fields_for_proprietor() {
        let cfg = ValidationConfig::default();
        let fields = required_fields(&record("1", YesNo::No, Some(100.0)), &cfg);
        assert_eq!(fields, ALWAYS_REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn required_fields_for_company_with_pan_and_high_turnover() {
        let cfg = ValidationConfig::default();
        let fields = required_fields(&record("6", YesNo::Yes, Some(9_000_000.0)), &cfg);
        assert_eq!(
            fields,
            vec![
                Field::AadhaarNumber,
                Field::OwnerName,
                Field::AadhaarDeclaration,
                Field::OrganizationType,
                Field::HasPan,
                Field::Pan,
                Field::PanName,
                Field::Dob,
                Field::PanDeclaration,
                Field::HasGstin,
            ]
        );
    }
}
