/// Defect types and rule dispatch for the Udyam form validation engine.
///
/// This module defines [`FieldDefect`], [`DefectKind`], [`RuleId`] and
/// [`ValidationOutcome`], the types that represent every finding produced
/// when a [`FormRecord`] is checked.
///
/// It also defines the [`FormRule`] trait, [`ValidationConfig`],
/// [`build_registry`], and the top-level [`validate`] dispatch function.
/// Rule preconditions (which fields are required for which records) live in
/// [`requirements`] as small pure predicates.
pub mod messages;
pub mod pan_holder;
pub mod requirements;
pub mod rules_gstin;
pub mod rules_identity;
pub mod rules_pan;

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::form::{Field, FormRecord};

#[cfg(test)]
mod tests;

/// The category of a defect.
///
/// Callers can distinguish a malformed value from a missing conditional
/// field or a refused consent without parsing the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectKind {
    /// The value does not have the required shape.
    Format,
    /// The Aadhaar check digit does not match.
    Checksum,
    /// A declaration was not affirmed.
    Consent,
    /// A field that another field's value made mandatory is missing or
    /// answered the wrong way.
    ConditionalRequirement,
    /// A date that is not a real calendar date, or lies in the future.
    Temporal,
}

impl DefectKind {
    /// Returns the `snake_case` name used in serialised output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Checksum => "checksum",
            Self::Consent => "consent",
            Self::ConditionalRequirement => "conditional_requirement",
            Self::Temporal => "temporal",
        }
    }
}

impl fmt::Display for DefectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine-readable identifier for a validation rule.
///
/// [`RuleId::code`] returns the stable kebab-case form used in serialised
/// output (e.g. `"aadhaar-checksum"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    /// `adharno` is exactly 12 ASCII digits.
    AadhaarFormat,
    /// `adharno` does not start with 0 or 1.
    AadhaarLeadingDigit,
    /// `adharno` passes the Verhoeff check.
    AadhaarChecksum,
    /// `ownername` is present and at most 100 characters.
    OwnerName,
    /// `aadhaarDeclaration` is affirmed.
    AadhaarDeclaration,
    /// `organizationType` is one of the known codes.
    OrganizationType,
    /// `hasPan` is `yes` when the organisation type requires a PAN.
    PanRequired,
    /// `pan` is present and well-formed when PAN details are required.
    PanNumber,
    /// `panName` is present and at most 100 characters when PAN details are required.
    PanHolderName,
    /// `dob` is a real, non-future `DD/MM/YYYY` date when PAN details are required.
    PanDate,
    /// `panDeclaration` is affirmed when PAN details are required.
    PanDeclaration,
    /// `hasGstin` is not `no` when turnover exceeds the GSTIN threshold.
    GstinRequired,
    /// Turnover figures are finite and not negative.
    TurnoverNonNegative,
}

impl RuleId {
    /// Returns the stable kebab-case rule code.
    pub fn code(self) -> &'static str {
        match self {
            Self::AadhaarFormat => "aadhaar-format",
            Self::AadhaarLeadingDigit => "aadhaar-leading-digit",
            Self::AadhaarChecksum => "aadhaar-checksum",
            Self::OwnerName => "owner-name",
            Self::AadhaarDeclaration => "aadhaar-declaration",
            Self::OrganizationType => "organization-type",
            Self::PanRequired => "pan-required",
            Self::PanNumber => "pan-number",
            Self::PanHolderName => "pan-holder-name",
            Self::PanDate => "pan-date",
            Self::PanDeclaration => "pan-declaration",
            Self::GstinRequired => "gstin-required",
            Self::TurnoverNonNegative => "turnover-non-negative",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for RuleId {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.code())
    }
}

/// A single finding: one field failed one rule.
///
/// Serialises as `{"rule", "kind", "field", "message"}`, the client-facing
/// error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefect {
    /// The rule that produced this finding.
    #[serde(rename = "rule")]
    pub rule_id: RuleId,
    /// The category of the finding.
    pub kind: DefectKind,
    /// The field the finding is attached to.
    pub field: Field,
    /// The user-facing message.
    pub message: String,
}

impl FieldDefect {
    /// Constructs a new [`FieldDefect`].
    pub fn new(
        rule_id: RuleId,
        kind: DefectKind,
        field: Field,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            kind,
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[E] {}  {}: {}", self.rule_id, self.field, self.message)
    }
}

/// The result of validating one record.
///
/// `Rejected` always carries at least one defect; an empty defect list is
/// represented as `Accepted` (see [`ValidationOutcome::from_defects`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "defects", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Every applicable rule passed.
    Accepted,
    /// One or more rules failed, in rule order.
    Rejected(Vec<FieldDefect>),
}

impl ValidationOutcome {
    /// Builds an outcome from collected defects.
    pub fn from_defects(defects: Vec<FieldDefect>) -> Self {
        if defects.is_empty() {
            Self::Accepted
        } else {
            Self::Rejected(defects)
        }
    }

    /// Returns `true` if the record was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns every defect, in rule order. Empty when accepted.
    pub fn defects(&self) -> &[FieldDefect] {
        match self {
            Self::Accepted => &[],
            Self::Rejected(defects) => defects,
        }
    }

    /// Returns an iterator over the defects attached to `field`.
    pub fn by_field(&self, field: Field) -> impl Iterator<Item = &FieldDefect> {
        self.defects().iter().filter(move |d| d.field == field)
    }

    /// Returns an iterator over the defects of the given kind.
    pub fn by_kind(&self, kind: DefectKind) -> impl Iterator<Item = &FieldDefect> {
        self.defects().iter().filter(move |d| d.kind == kind)
    }

    /// Returns an iterator over the defects produced by `rule`.
    pub fn by_rule(&self, rule: RuleId) -> impl Iterator<Item = &FieldDefect> {
        self.defects().iter().filter(move |d| d.rule_id == rule)
    }

    /// Returns `true` if a defect with exactly this field and message exists.
    pub fn contains(&self, field: Field, message: &str) -> bool {
        self.by_field(field).any(|d| d.message == message)
    }

    /// Consumes the outcome and returns its defects.
    pub fn into_defects(self) -> Vec<FieldDefect> {
        match self {
            Self::Accepted => Vec::new(),
            Self::Rejected(defects) => defects,
        }
    }
}

/// Tunable limits used by the rules.
///
/// # Default
///
/// ```
/// # use udyam_core::ValidationConfig;
/// let cfg = ValidationConfig::default();
/// assert_eq!(cfg.gstin_turnover_threshold, 4_000_000.0);
/// assert_eq!(cfg.max_name_len, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// Turnover (A), in rupees, above which a GSTIN is mandatory.
    /// Default ₹40 lakh.
    pub gstin_turnover_threshold: f64,
    /// Maximum length, in characters, of the owner and PAN-holder names.
    pub max_name_len: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            gstin_turnover_threshold: 4_000_000.0,
            max_name_len: crate::predicates::MAX_NAME_LEN,
        }
    }
}

/// Everything a rule may read during one validation pass.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The record under validation.
    pub record: &'a FormRecord,
    /// Active limits.
    pub config: &'a ValidationConfig,
    /// The evaluation date; PAN dates after it are rejected.
    pub today: NaiveDate,
}

/// A single, stateless validation rule over a [`FormRecord`].
///
/// Rules push zero or more [`FieldDefect`] values into `defects`, and at
/// most one per field. A rule that finds nothing wrong pushes nothing.
///
/// Conditional rules override [`applies`][FormRule::applies]; the dispatch
/// loop in [`validate`] only calls [`check`][FormRule::check] when it holds.
///
/// # Object safety
///
/// The trait is object-safe; the registry stores rules as
/// `Vec<Box<dyn FormRule>>`.
pub trait FormRule {
    /// The unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Returns `true` if the rule is relevant for this record.
    fn applies(&self, _ctx: &RuleContext<'_>) -> bool {
        true
    }

    /// Inspect the record and push any findings into `defects`.
    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>);
}

/// Builds the ordered rule registry.
///
/// The order is fixed and determines the order of defects in an outcome.
pub fn build_registry() -> Vec<Box<dyn FormRule>> {
    use rules_gstin::{GstinRequired, TurnoverNonNegative};
    use rules_identity::{
        AadhaarChecksum, AadhaarDeclaration, AadhaarFormat, AadhaarLeadingDigit, OwnerName,
    };
    use rules_pan::{
        OrganizationTypeKnown, PanDate, PanDeclaration, PanHolderName, PanNumber, PanRequired,
    };

    vec![
        Box::new(AadhaarFormat),
        Box::new(AadhaarLeadingDigit),
        Box::new(AadhaarChecksum),
        Box::new(OwnerName),
        Box::new(AadhaarDeclaration),
        Box::new(OrganizationTypeKnown),
        Box::new(PanRequired),
        Box::new(PanNumber),
        Box::new(PanHolderName),
        Box::new(PanDate),
        Box::new(PanDeclaration),
        Box::new(GstinRequired),
        Box::new(TurnoverNonNegative),
    ]
}

/// Runs every applicable rule against `record` and collects all defects.
///
/// The engine never fails fast: a record with five problems reports five
/// defects. The function is pure given its arguments; the same record,
/// config and date always produce the same outcome.
pub fn validate(
    record: &FormRecord,
    config: &ValidationConfig,
    today: NaiveDate,
) -> ValidationOutcome {
    let ctx = RuleContext {
        record,
        config,
        today,
    };
    let mut defects: Vec<FieldDefect> = Vec::new();
    for rule in &build_registry() {
        let id = rule.id();
        if !rule.applies(&ctx) {
            debug!(rule = id.code(), "rule skipped, precondition not met");
            continue;
        }
        let before = defects.len();
        rule.check(&ctx, &mut defects);
        debug!(
            rule = id.code(),
            defects = defects.len() - before,
            "rule evaluated"
        );
    }
    let outcome = ValidationOutcome::from_defects(defects);
    info!(
        accepted = outcome.is_accepted(),
        defects = outcome.defects().len(),
        "form validated"
    );
    outcome
}

/// [`validate`] with the default [`ValidationConfig`].
pub fn validate_form(record: &FormRecord, today: NaiveDate) -> ValidationOutcome {
    validate(record, &ValidationConfig::default(), today)
}
