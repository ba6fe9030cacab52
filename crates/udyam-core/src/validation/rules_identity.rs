/// Identity rules: Aadhaar number, entrepreneur name and Aadhaar consent.
///
/// Each rule is a zero-sized struct that implements [`FormRule`]. These
/// rules have no preconditions except the leading-digit and checksum
/// checks, which only run once the value has the 12-digit shape.
use crate::check_digits::verhoeff_verify;
use crate::form::Field;
use crate::predicates::{NameDefect, check_name, has_valid_leading_digit, is_aadhaar_shape};
use crate::validation::messages;
use crate::validation::{DefectKind, FieldDefect, FormRule, RuleContext, RuleId};

// ---------------------------------------------------------------------------
// aadhaar-format
// ---------------------------------------------------------------------------

/// `adharno` must be exactly 12 ASCII digits.
pub struct AadhaarFormat;

impl FormRule for AadhaarFormat {
    fn id(&self) -> RuleId {
        RuleId::AadhaarFormat
    }

    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>) {
        if !is_aadhaar_shape(&ctx.record.aadhaar_number) {
            defects.push(FieldDefect::new(
                RuleId::AadhaarFormat,
                DefectKind::Format,
                Field::AadhaarNumber,
                messages::AADHAAR_FORMAT,
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// aadhaar-leading-digit
// ---------------------------------------------------------------------------

/// A 12-digit `adharno` must not start with 0 or 1.
pub struct AadhaarLeadingDigit;

impl FormRule for AadhaarLeadingDigit {
    fn id(&self) -> RuleId {
        RuleId::AadhaarLeadingDigit
    }

    fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        is_aadhaar_shape(&ctx.record.aadhaar_number)
    }

    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>) {
        if !has_valid_leading_digit(&ctx.record.aadhaar_number) {
            defects.push(FieldDefect::new(
                RuleId::AadhaarLeadingDigit,
                DefectKind::Format,
                Field::AadhaarNumber,
                messages::AADHAAR_LEADING_DIGIT,
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// aadhaar-checksum
// ---------------------------------------------------------------------------

/// A 12-digit `adharno` must pass the Verhoeff check.
///
/// Runs independently of the leading-digit rule, so `000000000000` reports
/// both defects.
pub struct AadhaarChecksum;

impl FormRule for AadhaarChecksum {
    fn id(&self) -> RuleId {
        RuleId::AadhaarChecksum
    }

    fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        is_aadhaar_shape(&ctx.record.aadhaar_number)
    }

    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>) {
        if !verhoeff_verify(&ctx.record.aadhaar_number) {
            defects.push(FieldDefect::new(
                RuleId::AadhaarChecksum,
                DefectKind::Checksum,
                Field::AadhaarNumber,
                messages::AADHAAR_CHECKSUM,
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// owner-name
// ---------------------------------------------------------------------------

/// `ownername` must be non-blank and within the name length limit.
pub struct OwnerName;

impl FormRule for OwnerName {
    fn id(&self) -> RuleId {
        RuleId::OwnerName
    }

    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>) {
        let message = match check_name(Some(&ctx.record.owner_name), ctx.config.max_name_len) {
            Ok(()) => return,
            Err(NameDefect::Missing) => messages::OWNER_NAME_REQUIRED.to_owned(),
            Err(NameDefect::TooLong) => messages::name_too_long(ctx.config.max_name_len),
        };
        defects.push(FieldDefect::new(
            RuleId::OwnerName,
            DefectKind::Format,
            Field::OwnerName,
            message,
        ));
    }
}

// ---------------------------------------------------------------------------
// aadhaar-declaration
// ---------------------------------------------------------------------------

/// The Aadhaar declaration must be affirmed.
pub struct AadhaarDeclaration;

impl FormRule for AadhaarDeclaration {
    fn id(&self) -> RuleId {
        RuleId::AadhaarDeclaration
    }

    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>) {
        if !ctx.record.aadhaar_declaration {
            defects.push(FieldDefect::new(
                RuleId::AadhaarDeclaration,
                DefectKind::Consent,
                Field::AadhaarDeclaration,
                messages::AADHAAR_DECLARATION,
            ));
        }
    }
}
