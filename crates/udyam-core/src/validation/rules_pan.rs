/// Organisation type and PAN rules.
///
/// `organization-type` always runs. `pan-required` runs when the type needs
/// a PAN; the four PAN-detail rules run only when, in addition, `hasPan` is
/// `yes` (see [`requirements`]).
///
/// The per-field checks [`pan_number_defect`], [`pan_holder_name_defect`] and
/// [`pan_date_defect`] are shared with the standalone PAN-holder check so
/// that both paths give the same verdict for the same value.
use chrono::NaiveDate;

use crate::enums::YesNo;
use crate::form::{Field, present};
use crate::predicates::{DateDefect, NameDefect, check_form_date, check_name, is_pan_format};
use crate::validation::messages;
use crate::validation::requirements::{self, organization_type, pan_details_required};
use crate::validation::{DefectKind, FieldDefect, FormRule, RuleContext, RuleId};

// ---------------------------------------------------------------------------
// Shared field checks
// ---------------------------------------------------------------------------

/// Checks a PAN value: present, then `AAAAA9999A`.
pub fn pan_number_defect(pan: Option<&str>) -> Option<FieldDefect> {
    let (kind, message) = match pan {
        None => (DefectKind::ConditionalRequirement, messages::PAN_NUMBER_REQUIRED),
        Some(p) if !is_pan_format(p) => (DefectKind::Format, messages::PAN_FORMAT),
        Some(_) => return None,
    };
    Some(FieldDefect::new(RuleId::PanNumber, kind, Field::Pan, message))
}

/// Checks a PAN holder name: present, then within `max_len` characters.
pub fn pan_holder_name_defect(name: Option<&str>, max_len: usize) -> Option<FieldDefect> {
    let (kind, message) = match check_name(name, max_len) {
        Ok(()) => return None,
        Err(NameDefect::Missing) => (
            DefectKind::ConditionalRequirement,
            messages::PAN_HOLDER_NAME_REQUIRED.to_owned(),
        ),
        Err(NameDefect::TooLong) => (DefectKind::Format, messages::name_too_long(max_len)),
    };
    Some(FieldDefect::new(
        RuleId::PanHolderName,
        kind,
        Field::PanName,
        message,
    ))
}

/// Checks a PAN date: present, `DD/MM/YYYY`, a real date, not after `today`.
pub fn pan_date_defect(dob: Option<&str>, today: NaiveDate) -> Option<FieldDefect> {
    let (kind, message) = match dob.map(|d| check_form_date(d, today)) {
        None => (DefectKind::ConditionalRequirement, messages::DATE_REQUIRED),
        Some(Ok(_)) => return None,
        Some(Err(DateDefect::Format)) => (DefectKind::Temporal, messages::DATE_FORMAT),
        Some(Err(DateDefect::NotACalendarDate)) => (DefectKind::Temporal, messages::DATE_INVALID),
        Some(Err(DateDefect::InFuture)) => (DefectKind::Temporal, messages::DATE_IN_FUTURE),
    };
    Some(FieldDefect::new(RuleId::PanDate, kind, Field::Dob, message))
}

// ---------------------------------------------------------------------------
// organization-type
// ---------------------------------------------------------------------------

/// `organizationType` must be one of the codes `1`..`11`; `0` is the
/// drop-down placeholder.
pub struct OrganizationTypeKnown;

impl FormRule for OrganizationTypeKnown {
    fn id(&self) -> RuleId {
        RuleId::OrganizationType
    }

    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>) {
        if organization_type(ctx.record).is_none() {
            defects.push(FieldDefect::new(
                RuleId::OrganizationType,
                DefectKind::Format,
                Field::OrganizationType,
                messages::ORGANIZATION_TYPE,
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// pan-required
// ---------------------------------------------------------------------------

/// Every type except a proprietorship must answer `hasPan` with `yes`.
pub struct PanRequired;

impl FormRule for PanRequired {
    fn id(&self) -> RuleId {
        RuleId::PanRequired
    }

    fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        requirements::pan_required(ctx.record)
    }

    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>) {
        if ctx.record.has_pan == YesNo::No {
            defects.push(FieldDefect::new(
                RuleId::PanRequired,
                DefectKind::ConditionalRequirement,
                Field::HasPan,
                messages::PAN_REQUIRED,
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// pan-number / pan-holder-name / pan-date / pan-declaration
// ---------------------------------------------------------------------------

/// `pan` must be present and well-formed.
pub struct PanNumber;

impl FormRule for PanNumber {
    fn id(&self) -> RuleId {
        RuleId::PanNumber
    }

    fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        pan_details_required(ctx.record)
    }

    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>) {
        defects.extend(pan_number_defect(present(ctx.record.pan.as_ref())));
    }
}

/// `panName` must be present and within the name length limit.
pub struct PanHolderName;

impl FormRule for PanHolderName {
    fn id(&self) -> RuleId {
        RuleId::PanHolderName
    }

    fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        pan_details_required(ctx.record)
    }

    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>) {
        defects.extend(pan_holder_name_defect(
            ctx.record.pan_name.as_deref(),
            ctx.config.max_name_len,
        ));
    }
}

/// `dob` must be a real `DD/MM/YYYY` date no later than the evaluation date.
pub struct PanDate;

impl FormRule for PanDate {
    fn id(&self) -> RuleId {
        RuleId::PanDate
    }

    fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        pan_details_required(ctx.record)
    }

    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>) {
        defects.extend(pan_date_defect(
            present(ctx.record.dob.as_ref()),
            ctx.today,
        ));
    }
}

/// The PAN declaration must be affirmed.
pub struct PanDeclaration;

impl FormRule for PanDeclaration {
    fn id(&self) -> RuleId {
        RuleId::PanDeclaration
    }

    fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        pan_details_required(ctx.record)
    }

    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>) {
        if ctx.record.pan_declaration != Some(true) {
            defects.push(FieldDefect::new(
                RuleId::PanDeclaration,
                DefectKind::Consent,
                Field::PanDeclaration,
                messages::PAN_DECLARATION,
            ));
        }
    }
}
