use crate::workflows::briefing::{BriefingField, Money};
use serde::{Deserialize, Serialize};

/// Go/no-go rule set a briefing is scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub min_budget: Money,
    pub min_lead_time_days: i64,
    pub required_fields: Vec<BriefingField>,
    pub weights: CriterionWeights,
    pub thresholds: DecisionThresholds,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            min_budget: 10_000,
            min_lead_time_days: 10,
            required_fields: vec![
                BriefingField::ResponsiblePerson,
                BriefingField::AdvertiserGroup,
                BriefingField::TargetPersona,
            ],
            weights: CriterionWeights::default(),
            thresholds: DecisionThresholds::default(),
        }
    }
}

impl RuleSet {
    /// Highest score a briefing can reach under these weights.
    pub fn max_score(&self) -> u32 {
        self.weights.budget + self.weights.timeline + self.weights.required_fields
    }
}

/// Points awarded per passing criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriterionWeights {
    pub budget: u32,
    pub timeline: u32,
    pub required_fields: u32,
    pub missing_field_penalty: u32,
}

impl Default for CriterionWeights {
    fn default() -> Self {
        Self {
            budget: 40,
            timeline: 30,
            required_fields: 30,
            missing_field_penalty: 10,
        }
    }
}

/// Score bands applied once both critical criteria pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionThresholds {
    pub go: u32,
    pub conditional: u32,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            go: 80,
            conditional: 60,
        }
    }
}
