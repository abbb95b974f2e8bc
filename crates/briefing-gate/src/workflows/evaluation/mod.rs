//! Go/no-go scoring of an extracted briefing.

mod config;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use config::{CriterionWeights, DecisionThresholds, RuleSet};
pub use policy::DecisionStatus;

use crate::workflows::briefing::Briefing;
use chrono::NaiveDate;
use policy::{decide_status, recommendations_for};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Stateless evaluator that applies a rule set to a briefing.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    rules: RuleSet,
}

impl DecisionEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Scores `briefing` with lead time counted from `reference_date`.
    pub fn evaluate(&self, briefing: &Briefing, reference_date: NaiveDate) -> Decision {
        let evaluations = rules::evaluate_criteria(briefing, &self.rules, reference_date);

        let mut criteria = BTreeMap::new();
        let mut issues = Vec::new();
        let mut score = 0;
        for evaluation in evaluations {
            score += evaluation.result.score;
            if let Some(issue) = evaluation.issue {
                issues.push(issue);
            }
            criteria.insert(evaluation.kind, evaluation.result);
        }

        let critical_pass = [CriterionKind::Budget, CriterionKind::Timeline]
            .iter()
            .all(|kind| {
                criteria
                    .get(kind)
                    .map(|result| result.status == CriterionStatus::Pass)
                    .unwrap_or(false)
            });
        let status = decide_status(critical_pass, score, &self.rules.thresholds);

        info!(
            source_file = %briefing.meta.source_file,
            %status,
            score,
            issues = issues.len(),
            "briefing evaluated"
        );

        Decision {
            status,
            score,
            max_score: self.rules.max_score(),
            criteria,
            issues,
            recommendations: recommendations_for(status),
        }
    }
}

/// Criteria in evaluation order; map keys sort the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    Budget,
    Timeline,
    RequiredFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CriterionStatus {
    Pass,
    Fail,
}

/// Discrete contribution to a decision, kept for transparent review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub status: CriterionStatus,
    pub score: u32,
    pub message: String,
    pub required: bool,
}

/// Verdict plus the itemized trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub status: DecisionStatus,
    pub score: u32,
    pub max_score: u32,
    pub criteria: BTreeMap<CriterionKind, CriterionResult>,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Decision {
    pub fn criterion(&self, kind: CriterionKind) -> Option<&CriterionResult> {
        self.criteria.get(&kind)
    }

    pub fn summary(&self) -> String {
        format!("{} ({}/{})", self.status, self.score, self.max_score)
    }
}
