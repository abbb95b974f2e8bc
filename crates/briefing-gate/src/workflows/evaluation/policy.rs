use super::config::DecisionThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) const CONDITIONAL_RECOMMENDATION: &str = "Review missing information before proceeding";

/// Verdict on whether to answer the brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionStatus {
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "CONDITIONAL")]
    Conditional,
    #[serde(rename = "NO-GO")]
    NoGo,
}

impl DecisionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DecisionStatus::Go => "GO",
            DecisionStatus::Conditional => "CONDITIONAL",
            DecisionStatus::NoGo => "NO-GO",
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Budget and timeline gate every positive outcome; the score only picks
/// between GO and CONDITIONAL once that gate is open.
pub(crate) fn decide_status(
    critical_pass: bool,
    score: u32,
    thresholds: &DecisionThresholds,
) -> DecisionStatus {
    if !critical_pass {
        return DecisionStatus::NoGo;
    }

    if score >= thresholds.go {
        DecisionStatus::Go
    } else if score >= thresholds.conditional {
        DecisionStatus::Conditional
    } else {
        DecisionStatus::NoGo
    }
}

pub(crate) fn recommendations_for(status: DecisionStatus) -> Vec<String> {
    match status {
        DecisionStatus::Conditional => vec![CONDITIONAL_RECOMMENDATION.to_string()],
        DecisionStatus::Go | DecisionStatus::NoGo => Vec::new(),
    }
}
