use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whole-euro amount.
pub type Money = u64;

/// Structured record extracted from one document's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Briefing {
    pub meta: BriefingMeta,
    pub contact: ContactDetails,
    pub advertiser: AdvertiserDetails,
    pub brief: BriefDetails,
    pub constraints: BriefingConstraints,
}

/// Provenance of the extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingMeta {
    pub source_file: String,
    pub extraction_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub responsible_person: Option<String>,
    pub media_agency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertiserDetails {
    pub advertiser_group: Option<String>,
    pub brand_or_product: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefDetails {
    pub target_persona: Option<String>,
    pub key_messages: Option<String>,
    pub sports_focus: Option<BTreeSet<String>>,
    pub objectives: Option<BTreeSet<String>>,
    pub languages: Option<BTreeSet<String>>,
    pub media_preferences: Option<BTreeSet<String>>,
    pub urgency: Option<Urgency>,
    pub notes: Option<String>,
}

/// Commercial constraints plus the rule constants the briefing was read against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingConstraints {
    pub budget: Option<BudgetRange>,
    pub proposal_deadline: Option<NaiveDate>,
    pub campaign_end: Option<NaiveDate>,
    pub min_budget_required: Money,
    pub min_lead_time_days: i64,
    pub exclusions: Option<BTreeSet<String>>,
    pub preferences: Option<BTreeSet<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

/// Confirmed budget bracket; `min_amount <= max_amount` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBudgetRange")]
pub struct BudgetRange {
    min_amount: Money,
    max_amount: Money,
}

impl BudgetRange {
    /// Builds a range, swapping reversed bounds.
    pub fn new(first: Money, second: Money) -> Self {
        Self {
            min_amount: first.min(second),
            max_amount: first.max(second),
        }
    }

    pub fn single(amount: Money) -> Self {
        Self::new(amount, amount)
    }

    pub fn min_amount(&self) -> Money {
        self.min_amount
    }

    pub fn max_amount(&self) -> Money {
        self.max_amount
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min_amount == self.max_amount {
            write!(f, "{}", self.min_amount)
        } else {
            write!(f, "{}-{}", self.min_amount, self.max_amount)
        }
    }
}

#[derive(Deserialize)]
struct RawBudgetRange {
    min_amount: Money,
    max_amount: Money,
}

impl TryFrom<RawBudgetRange> for BudgetRange {
    type Error = String;

    fn try_from(raw: RawBudgetRange) -> Result<Self, Self::Error> {
        if raw.min_amount > raw.max_amount {
            return Err(format!(
                "budget min_amount {} exceeds max_amount {}",
                raw.min_amount, raw.max_amount
            ));
        }
        Ok(Self {
            min_amount: raw.min_amount,
            max_amount: raw.max_amount,
        })
    }
}

/// Briefing text fields that a rule set may declare mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BriefingField {
    ResponsiblePerson,
    MediaAgency,
    AdvertiserGroup,
    BrandOrProduct,
    TargetPersona,
    KeyMessages,
    Notes,
}

impl BriefingField {
    pub fn label(&self) -> &'static str {
        match self {
            BriefingField::ResponsiblePerson => "responsible person",
            BriefingField::MediaAgency => "media agency",
            BriefingField::AdvertiserGroup => "advertiser group",
            BriefingField::BrandOrProduct => "brand or product",
            BriefingField::TargetPersona => "target persona",
            BriefingField::KeyMessages => "key messages",
            BriefingField::Notes => "notes",
        }
    }
}

impl Briefing {
    pub fn text_field(&self, field: BriefingField) -> Option<&str> {
        let value = match field {
            BriefingField::ResponsiblePerson => &self.contact.responsible_person,
            BriefingField::MediaAgency => &self.contact.media_agency,
            BriefingField::AdvertiserGroup => &self.advertiser.advertiser_group,
            BriefingField::BrandOrProduct => &self.advertiser.brand_or_product,
            BriefingField::TargetPersona => &self.brief.target_persona,
            BriefingField::KeyMessages => &self.brief.key_messages,
            BriefingField::Notes => &self.brief.notes,
        };
        value.as_deref().filter(|text| !text.trim().is_empty())
    }

    pub fn has_field(&self, field: BriefingField) -> bool {
        self.text_field(field).is_some()
    }
}
