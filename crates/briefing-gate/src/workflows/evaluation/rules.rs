use super::config::RuleSet;
use super::{CriterionKind, CriterionResult, CriterionStatus};
use crate::workflows::briefing::Briefing;
use chrono::NaiveDate;

/// One criterion's outcome plus the issue it raises when failing.
pub(crate) struct CriterionEvaluation {
    pub kind: CriterionKind,
    pub result: CriterionResult,
    pub issue: Option<String>,
}

fn pass(kind: CriterionKind, score: u32, message: String) -> CriterionEvaluation {
    CriterionEvaluation {
        kind,
        result: CriterionResult {
            status: CriterionStatus::Pass,
            score,
            message,
            required: true,
        },
        issue: None,
    }
}

fn fail(kind: CriterionKind, score: u32, message: String, issue: String) -> CriterionEvaluation {
    CriterionEvaluation {
        kind,
        result: CriterionResult {
            status: CriterionStatus::Fail,
            score,
            message,
            required: true,
        },
        issue: Some(issue),
    }
}

pub(crate) fn evaluate_budget(briefing: &Briefing, rules: &RuleSet) -> CriterionEvaluation {
    let kind = CriterionKind::Budget;
    let required = rules.min_budget;

    match briefing.constraints.budget {
        Some(budget) if budget.min_amount() >= required => pass(
            kind,
            rules.weights.budget,
            format!(
                "Budget confirmed: €{} ≥ €{} required",
                budget.min_amount(),
                required
            ),
        ),
        Some(budget) => fail(
            kind,
            0,
            format!(
                "Budget insufficient: €{} < €{} required",
                budget.min_amount(),
                required
            ),
            "Budget below minimum requirement".to_string(),
        ),
        None => fail(
            kind,
            0,
            "Budget not confirmed or found in briefing".to_string(),
            "No confirmed budget found".to_string(),
        ),
    }
}

/// Whole days from `reference_date` to `deadline`; negative once it has passed.
pub(crate) fn lead_time_days(deadline: NaiveDate, reference_date: NaiveDate) -> i64 {
    (deadline - reference_date).num_days()
}

pub(crate) fn evaluate_timeline(
    briefing: &Briefing,
    rules: &RuleSet,
    reference_date: NaiveDate,
) -> CriterionEvaluation {
    let kind = CriterionKind::Timeline;
    let required = rules.min_lead_time_days;

    match briefing.constraints.proposal_deadline {
        Some(deadline) => {
            let available = lead_time_days(deadline, reference_date);
            if available >= required {
                pass(
                    kind,
                    rules.weights.timeline,
                    format!("Timeline adequate: {available} days ≥ {required} days required"),
                )
            } else {
                fail(
                    kind,
                    0,
                    format!("Timeline insufficient: {available} days < {required} days required"),
                    "Insufficient lead time for deliverables".to_string(),
                )
            }
        }
        None => fail(
            kind,
            0,
            "No proposal deadline specified".to_string(),
            "Missing proposal deadline".to_string(),
        ),
    }
}

pub(crate) fn evaluate_required_fields(
    briefing: &Briefing,
    rules: &RuleSet,
) -> CriterionEvaluation {
    let kind = CriterionKind::RequiredFields;
    let missing: Vec<&'static str> = rules
        .required_fields
        .iter()
        .filter(|field| !briefing.has_field(**field))
        .map(|field| field.label())
        .collect();

    if missing.is_empty() {
        return pass(
            kind,
            rules.weights.required_fields,
            "All required fields present".to_string(),
        );
    }

    let penalty = rules
        .weights
        .missing_field_penalty
        .saturating_mul(u32::try_from(missing.len()).unwrap_or(u32::MAX));
    let score = rules.weights.required_fields.saturating_sub(penalty);
    let listed = missing.join(", ");

    fail(
        kind,
        score,
        format!("Missing fields: {listed}"),
        format!("Missing required information: {listed}"),
    )
}

/// Evaluates every criterion in scoring order: budget, timeline, required fields.
pub(crate) fn evaluate_criteria(
    briefing: &Briefing,
    rules: &RuleSet,
    reference_date: NaiveDate,
) -> Vec<CriterionEvaluation> {
    vec![
        evaluate_budget(briefing, rules),
        evaluate_timeline(briefing, rules, reference_date),
        evaluate_required_fields(briefing, rules),
    ]
}
