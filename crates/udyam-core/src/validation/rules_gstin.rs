/// GSTIN and turnover rules.
use crate::enums::YesNo;
use crate::form::Field;
use crate::validation::messages;
use crate::validation::requirements::gstin_required;
use crate::validation::{DefectKind, FieldDefect, FormRule, RuleContext, RuleId};

/// An applicant who says they have no GSTIN must not report turnover (A)
/// above the threshold. The boundary value itself is allowed.
pub struct GstinRequired;

impl FormRule for GstinRequired {
    fn id(&self) -> RuleId {
        RuleId::GstinRequired
    }

    fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        ctx.record.has_gstin == Some(YesNo::No) && ctx.record.total_turnover_a.is_some()
    }

    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>) {
        if gstin_required(ctx.record, ctx.config) {
            defects.push(FieldDefect::new(
                RuleId::GstinRequired,
                DefectKind::ConditionalRequirement,
                Field::HasGstin,
                messages::gstin_required(ctx.config.gstin_turnover_threshold),
            ));
        }
    }
}

/// Turnover figures, when given, must be finite and not negative.
pub struct TurnoverNonNegative;

impl FormRule for TurnoverNonNegative {
    fn id(&self) -> RuleId {
        RuleId::TurnoverNonNegative
    }

    fn check(&self, ctx: &RuleContext<'_>, defects: &mut Vec<FieldDefect>) {
        let figures = [
            (Field::TotalTurnoverA, ctx.record.total_turnover_a),
            (Field::TotalTurnoverB, ctx.record.total_turnover_b),
        ];
        for (field, value) in figures {
            let Some(v) = value else {
                continue;
            };
            // NaN fails both comparisons.
            if !(v.is_finite() && v >= 0.0) {
                defects.push(FieldDefect::new(
                    RuleId::TurnoverNonNegative,
                    DefectKind::Format,
                    field,
                    messages::TURNOVER_NEGATIVE,
                ));
            }
        }
    }
}
