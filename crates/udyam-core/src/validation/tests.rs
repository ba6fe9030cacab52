#![allow(clippy::expect_used)]

use super::*;
use crate::enums::{DateType, YesNo};
use crate::form::{Field, FormRecord};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).expect("valid date")
}

fn proprietor() -> FormRecord {
    FormRecord {
        aadhaar_number: "234567890129".to_owned(),
        owner_name: "Asha Devi".to_owned(),
        aadhaar_declaration: true,
        organization_type: "1".to_owned(),
        has_pan: YesNo::No,
        pan: None,
        pan_name: None,
        dob: None,
        dob_type: None,
        pan_declaration: None,
        has_gstin: None,
        total_turnover_a: None,
        total_turnover_b: None,
    }
}

fn company() -> FormRecord {
    FormRecord {
        organization_type: "5".to_owned(),
        has_pan: YesNo::Yes,
        pan: Some("ABCDE1234F".to_owned()),
        pan_name: Some("Asha Traders Private Limited".to_owned()),
        dob: Some("01/04/2015".to_owned()),
        dob_type: Some(DateType::Doi),
        pan_declaration: Some(true),
        has_gstin: Some(YesNo::Yes),
        total_turnover_a: Some(5_000_000.0),
        total_turnover_b: Some(0.0),
        ..proprietor()
    }
}

fn check(record: &FormRecord) -> ValidationOutcome {
    validate_form(record, today())
}

fn rules(outcome: &ValidationOutcome) -> Vec<RuleId> {
    outcome.defects().iter().map(|d| d.rule_id).collect()
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[test]
fn rule_codes() {
    assert_eq!(RuleId::AadhaarFormat.code(), "aadhaar-format");
    assert_eq!(RuleId::AadhaarLeadingDigit.code(), "aadhaar-leading-digit");
    assert_eq!(RuleId::AadhaarChecksum.code(), "aadhaar-checksum");
    assert_eq!(RuleId::OwnerName.code(), "owner-name");
    assert_eq!(RuleId::AadhaarDeclaration.code(), "aadhaar-declaration");
    assert_eq!(RuleId::OrganizationType.code(), "organization-type");
    assert_eq!(RuleId::PanRequired.code(), "pan-required");
    assert_eq!(RuleId::PanNumber.code(), "pan-number");
    assert_eq!(RuleId::PanHolderName.code(), "pan-holder-name");
    assert_eq!(RuleId::PanDate.code(), "pan-date");
    assert_eq!(RuleId::PanDeclaration.code(), "pan-declaration");
    assert_eq!(RuleId::GstinRequired.code(), "gstin-required");
    assert_eq!(RuleId::TurnoverNonNegative.code(), "turnover-non-negative");
}

#[test]
fn registry_order_is_fixed() {
    let ids: Vec<_> = build_registry().iter().map(|r| r.id()).collect();
    assert_eq!(
        ids,
        vec![
            RuleId::AadhaarFormat,
            RuleId::AadhaarLeadingDigit,
            RuleId::AadhaarChecksum,
            RuleId::OwnerName,
            RuleId::AadhaarDeclaration,
            RuleId::OrganizationType,
            RuleId::PanRequired,
            RuleId::PanNumber,
            RuleId::PanHolderName,
            RuleId::PanDate,
            RuleId::PanDeclaration,
            RuleId::GstinRequired,
            RuleId::TurnoverNonNegative,
        ]
    );
}

#[test]
fn defect_display() {
    let d = FieldDefect::new(
        RuleId::AadhaarChecksum,
        DefectKind::Checksum,
        Field::AadhaarNumber,
        messages::AADHAAR_CHECKSUM,
    );
    assert_eq!(
        d.to_string(),
        "[E] aadhaar-checksum  adharno: Invalid Aadhaar number (checksum failed)."
    );
}

#[test]
fn defect_serializes_to_client_payload() {
    let d = FieldDefect::new(
        RuleId::PanRequired,
        DefectKind::ConditionalRequirement,
        Field::HasPan,
        messages::PAN_REQUIRED,
    );
    let v = serde_json::to_value(&d).expect("serialize");
    assert_eq!(v["rule"], "pan-required");
    assert_eq!(v["kind"], "conditional_requirement");
    assert_eq!(v["field"], "hasPan");
    assert_eq!(v["message"], messages::PAN_REQUIRED);
}

#[test]
fn outcome_serialization() {
    let accepted = serde_json::to_value(ValidationOutcome::Accepted).expect("serialize");
    assert_eq!(accepted, serde_json::json!({ "status": "accepted" }));

    let rejected = check(&FormRecord {
        aadhaar_declaration: false,
        ..proprietor()
    });
    let v = serde_json::to_value(&rejected).expect("serialize");
    assert_eq!(v["status"], "rejected");
    assert_eq!(v["defects"][0]["field"], "aadhaarDeclaration");
}

#[test]
fn empty_defect_list_is_accepted() {
    assert_eq!(
        ValidationOutcome::from_defects(Vec::new()),
        ValidationOutcome::Accepted
    );
    assert!(ValidationOutcome::Accepted.defects().is_empty());
    assert!(ValidationOutcome::Accepted.into_defects().is_empty());
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn proprietor_without_pan_is_accepted() {
    let outcome = check(&proprietor());
    assert!(outcome.is_accepted(), "{outcome:?}");
}

#[test]
fn company_with_full_pan_details_is_accepted() {
    let outcome = check(&company());
    assert!(outcome.is_accepted(), "{outcome:?}");
}

#[test]
fn every_pan_requiring_type_accepts_full_details() {
    for code in ["2", "3", "4", "5", "6", "7", "8", "9", "10", "11"] {
        let outcome = check(&FormRecord {
            organization_type: code.to_owned(),
            ..company()
        });
        assert!(outcome.is_accepted(), "type {code}: {outcome:?}");
    }
}

#[test]
fn pan_with_digit_in_last_place_is_a_format_defect() {
    let outcome = check(&FormRecord {
        pan: Some("ABCDE12345".to_owned()),
        ..company()
    });
    assert_eq!(rules(&outcome), vec![RuleId::PanNumber]);
    let d = &outcome.defects()[0];
    assert_eq!(d.kind, DefectKind::Format);
    assert!(outcome.contains(Field::Pan, messages::PAN_FORMAT));
}

#[test]
fn iso_date_is_a_temporal_defect() {
    let outcome = check(&FormRecord {
        dob: Some("2023-01-01".to_owned()),
        ..company()
    });
    assert_eq!(rules(&outcome), vec![RuleId::PanDate]);
    assert_eq!(outcome.defects()[0].kind, DefectKind::Temporal);
    assert!(outcome.contains(Field::Dob, messages::DATE_FORMAT));
}

#[test]
fn impossible_date_is_invalid() {
    let outcome = check(&FormRecord {
        dob: Some("31/02/2020".to_owned()),
        ..company()
    });
    assert!(outcome.contains(Field::Dob, messages::DATE_INVALID));
}

#[test]
fn year_zero_is_not_a_calendar_date() {
    for dob in ["01/01/0000", "29/02/0000"] {
        let outcome = check(&FormRecord {
            dob: Some(dob.to_owned()),
            ..company()
        });
        assert_eq!(rules(&outcome), vec![RuleId::PanDate], "{dob}");
        assert!(outcome.contains(Field::Dob, messages::DATE_INVALID), "{dob}");
    }
}

#[test]
fn future_date_is_rejected_but_today_is_allowed() {
    let tomorrow = check(&FormRecord {
        dob: Some("11/03/2026".to_owned()),
        ..company()
    });
    assert!(tomorrow.contains(Field::Dob, messages::DATE_IN_FUTURE));

    let same_day = check(&FormRecord {
        dob: Some("10/03/2026".to_owned()),
        ..company()
    });
    assert!(same_day.is_accepted(), "{same_day:?}");
}

#[test]
fn date_verdict_moves_with_the_evaluation_date() {
    let record = FormRecord {
        dob: Some("11/03/2026".to_owned()),
        ..company()
    };
    let before = validate_form(&record, today());
    let after = validate_form(
        &record,
        NaiveDate::from_ymd_opt(2026, 3, 11).expect("valid date"),
    );
    assert!(!before.is_accepted());
    assert!(after.is_accepted(), "{after:?}");
}

#[test]
fn gstin_threshold_boundary() {
    let at = check(&FormRecord {
        has_gstin: Some(YesNo::No),
        total_turnover_a: Some(4_000_000.0),
        ..proprietor()
    });
    assert!(at.is_accepted(), "{at:?}");

    let above = check(&FormRecord {
        has_gstin: Some(YesNo::No),
        total_turnover_a: Some(4_000_001.0),
        ..proprietor()
    });
    assert_eq!(rules(&above), vec![RuleId::GstinRequired]);
    assert_eq!(above.defects()[0].kind, DefectKind::ConditionalRequirement);
    assert!(above.contains(Field::HasGstin, messages::GSTIN_REQUIRED));
}

#[test]
fn gstin_yes_or_absent_never_triggers() {
    for has_gstin in [Some(YesNo::Yes), None] {
        let outcome = check(&FormRecord {
            has_gstin,
            total_turnover_a: Some(90_000_000.0),
            ..proprietor()
        });
        assert!(outcome.is_accepted(), "{has_gstin:?}: {outcome:?}");
    }
}

#[test]
fn gstin_threshold_follows_config() {
    let record = FormRecord {
        has_gstin: Some(YesNo::No),
        total_turnover_a: Some(3_000_000.0),
        ..proprietor()
    };
    let cfg = ValidationConfig {
        gstin_turnover_threshold: 2_500_000.0,
        ..ValidationConfig::default()
    };
    let outcome = validate(&record, &cfg, today());
    assert!(outcome.contains(
        Field::HasGstin,
        "GSTIN is mandatory if turnover exceeds ₹25 Lakhs."
    ));
    assert!(check(&record).is_accepted());
}

// ---------------------------------------------------------------------------
// Aadhaar
// ---------------------------------------------------------------------------

#[test]
fn short_aadhaar_only_reports_format() {
    let outcome = check(&FormRecord {
        aadhaar_number: "12345".to_owned(),
        ..proprietor()
    });
    assert_eq!(rules(&outcome), vec![RuleId::AadhaarFormat]);
    assert!(outcome.contains(Field::AadhaarNumber, messages::AADHAAR_FORMAT));
}

#[test]
fn all_zeros_fails_leading_digit_and_checksum() {
    let outcome = check(&FormRecord {
        aadhaar_number: "000000000000".to_owned(),
        ..proprietor()
    });
    assert_eq!(
        rules(&outcome),
        vec![RuleId::AadhaarLeadingDigit, RuleId::AadhaarChecksum]
    );
}

#[test]
fn leading_digit_is_checked_regardless_of_checksum() {
    // Both carry a correct check digit.
    for value in ["000000000003", "100000000004"] {
        let outcome = check(&FormRecord {
            aadhaar_number: value.to_owned(),
            ..proprietor()
        });
        assert_eq!(rules(&outcome), vec![RuleId::AadhaarLeadingDigit], "{value}");
        assert!(outcome.contains(Field::AadhaarNumber, messages::AADHAAR_LEADING_DIGIT));
    }
}

#[test]
fn bad_check_digit_is_a_checksum_defect() {
    let outcome = check(&FormRecord {
        aadhaar_number: "234567890121".to_owned(),
        ..proprietor()
    });
    assert_eq!(rules(&outcome), vec![RuleId::AadhaarChecksum]);
    assert_eq!(outcome.defects()[0].kind, DefectKind::Checksum);
}

// ---------------------------------------------------------------------------
// Names and consents
// ---------------------------------------------------------------------------

#[test]
fn blank_owner_name_is_required() {
    let outcome = check(&FormRecord {
        owner_name: "   ".to_owned(),
        ..proprietor()
    });
    assert!(outcome.contains(Field::OwnerName, messages::OWNER_NAME_REQUIRED));
}

#[test]
fn owner_name_length_limit() {
    let at_limit = check(&FormRecord {
        owner_name: "a".repeat(100),
        ..proprietor()
    });
    assert!(at_limit.is_accepted());

    let over = check(&FormRecord {
        owner_name: "a".repeat(101),
        ..proprietor()
    });
    assert!(over.contains(Field::OwnerName, messages::NAME_TOO_LONG));
}

#[test]
fn refused_aadhaar_declaration_is_a_consent_defect() {
    let outcome = check(&FormRecord {
        aadhaar_declaration: false,
        ..proprietor()
    });
    assert_eq!(outcome.by_kind(DefectKind::Consent).count(), 1);
    assert!(outcome.contains(Field::AadhaarDeclaration, messages::AADHAAR_DECLARATION));
}

// ---------------------------------------------------------------------------
// Organisation type and PAN
// ---------------------------------------------------------------------------

#[test]
fn placeholder_type_is_rejected_and_skips_pan_rules() {
    let outcome = check(&FormRecord {
        organization_type: "0".to_owned(),
        has_pan: YesNo::Yes,
        ..proprietor()
    });
    assert_eq!(rules(&outcome), vec![RuleId::OrganizationType]);
    assert!(outcome.contains(Field::OrganizationType, messages::ORGANIZATION_TYPE));
}

#[test]
fn company_answering_no_to_pan() {
    let outcome = check(&FormRecord {
        has_pan: YesNo::No,
        pan: None,
        pan_name: None,
        dob: None,
        pan_declaration: None,
        ..company()
    });
    assert_eq!(rules(&outcome), vec![RuleId::PanRequired]);
    assert!(outcome.contains(Field::HasPan, messages::PAN_REQUIRED));
}

#[test]
fn proprietor_with_pan_yes_needs_no_details() {
    let outcome = check(&FormRecord {
        has_pan: YesNo::Yes,
        ..proprietor()
    });
    assert!(outcome.is_accepted(), "{outcome:?}");
}

#[test]
fn missing_pan_details_are_conditional_requirements() {
    let outcome = check(&FormRecord {
        pan: None,
        pan_name: Some(String::new()),
        dob: Some(" ".to_owned()),
        pan_declaration: None,
        ..company()
    });
    assert_eq!(
        rules(&outcome),
        vec![
            RuleId::PanNumber,
            RuleId::PanHolderName,
            RuleId::PanDate,
            RuleId::PanDeclaration,
        ]
    );
    assert!(outcome.contains(Field::Pan, messages::PAN_NUMBER_REQUIRED));
    assert!(outcome.contains(Field::PanName, messages::PAN_HOLDER_NAME_REQUIRED));
    assert!(outcome.contains(Field::Dob, messages::DATE_REQUIRED));
    assert!(outcome.contains(Field::PanDeclaration, messages::PAN_DECLARATION));
    assert_eq!(
        outcome.by_kind(DefectKind::ConditionalRequirement).count(),
        3
    );
}

#[test]
fn explicit_false_pan_declaration_is_rejected() {
    let outcome = check(&FormRecord {
        pan_declaration: Some(false),
        ..company()
    });
    assert_eq!(rules(&outcome), vec![RuleId::PanDeclaration]);
}

#[test]
fn long_pan_holder_name_is_a_format_defect() {
    let outcome = check(&FormRecord {
        pan_name: Some("x".repeat(101)),
        ..company()
    });
    let d: Vec<_> = outcome.by_rule(RuleId::PanHolderName).collect();
    assert_eq!(d.len(), 1);
    assert_eq!(d[0].kind, DefectKind::Format);
    assert_eq!(d[0].message, messages::NAME_TOO_LONG);
}

// ---------------------------------------------------------------------------
// Turnover
// ---------------------------------------------------------------------------

#[test]
fn negative_turnover_is_reported_per_field() {
    let outcome = check(&FormRecord {
        total_turnover_a: Some(-1.0),
        total_turnover_b: Some(-0.5),
        ..proprietor()
    });
    assert!(outcome.contains(Field::TotalTurnoverA, messages::TURNOVER_NEGATIVE));
    assert!(outcome.contains(Field::TotalTurnoverB, messages::TURNOVER_NEGATIVE));
    assert_eq!(outcome.defects().len(), 2);
}

#[test]
fn non_finite_turnover_is_rejected() {
    for v in [f64::NAN, f64::INFINITY] {
        let outcome = check(&FormRecord {
            total_turnover_b: Some(v),
            ..proprietor()
        });
        assert_eq!(rules(&outcome), vec![RuleId::TurnoverNonNegative], "{v}");
    }
}

#[test]
fn zero_turnover_is_fine() {
    let outcome = check(&FormRecord {
        total_turnover_a: Some(0.0),
        total_turnover_b: Some(0.0),
        ..proprietor()
    });
    assert!(outcome.is_accepted());
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

#[test]
fn all_defects_are_surfaced_in_rule_order() {
    let outcome = check(&FormRecord {
        aadhaar_number: "1234".to_owned(),
        owner_name: String::new(),
        aadhaar_declaration: false,
        organization_type: "3".to_owned(),
        has_pan: YesNo::No,
        has_gstin: Some(YesNo::No),
        total_turnover_a: Some(5_000_000.0),
        total_turnover_b: Some(-10.0),
        ..proprietor()
    });
    assert_eq!(
        rules(&outcome),
        vec![
            RuleId::AadhaarFormat,
            RuleId::OwnerName,
            RuleId::AadhaarDeclaration,
            RuleId::PanRequired,
            RuleId::GstinRequired,
            RuleId::TurnoverNonNegative,
        ]
    );
}

#[test]
fn at_most_one_defect_per_field() {
    let outcome = check(&FormRecord {
        aadhaar_number: "000000000000".to_owned(),
        pan: Some("bad".to_owned()),
        pan_name: Some(String::new()),
        dob: Some("99/99/9999".to_owned()),
        pan_declaration: Some(false),
        ..company()
    });
    for field in [Field::Pan, Field::PanName, Field::Dob, Field::PanDeclaration] {
        assert_eq!(outcome.by_field(field).count(), 1, "{field}");
    }
}

#[test]
fn validate_is_idempotent() {
    let record = FormRecord {
        pan: Some("ABCDE12345".to_owned()),
        total_turnover_b: Some(-1.0),
        ..company()
    };
    assert_eq!(check(&record), check(&record));
}
