//! Field extraction: document text in, structured [`Briefing`] out.

mod document;
pub mod domain;
mod normalizer;
mod parser;
mod patterns;
mod vocabulary;

pub use document::{
    DocumentError, DocumentLimits, DocumentSource, InlineDocument, TextFileDocument,
    DEFAULT_MAX_DOCUMENT_BYTES,
};
pub use domain::{
    AdvertiserDetails, BriefDetails, Briefing, BriefingConstraints, BriefingField, BriefingMeta,
    BudgetRange, ContactDetails, Money, Urgency,
};
pub use normalizer::{join_pages, PAGE_SEPARATOR};

use crate::workflows::evaluation::RuleSet;
use chrono::NaiveDate;
use parser::DateRole;
use patterns::{detect_urgency, field_catalog};
use thiserror::Error;
use tracing::debug;
use vocabulary::vocabularies;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("no extractable content in '{source_file}'")]
    NoExtractableContent { source_file: String },
}

/// Turns raw document text into a [`Briefing`]. Unmatched fields come back
/// absent; only text with nothing in it is an error.
#[derive(Debug, Clone)]
pub struct BriefingExtractor {
    min_budget_required: Money,
    min_lead_time_days: i64,
}

impl BriefingExtractor {
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            min_budget_required: rules.min_budget,
            min_lead_time_days: rules.min_lead_time_days,
        }
    }

    pub fn extract(
        &self,
        text: &str,
        source_file: &str,
        reference_date: NaiveDate,
    ) -> Result<Briefing, ExtractionError> {
        let text = normalizer::strip_invisible(text);
        if text.trim().is_empty() {
            return Err(ExtractionError::NoExtractableContent {
                source_file: source_file.to_string(),
            });
        }
        let text = text.as_str();

        let catalog = field_catalog();
        let vocab = vocabularies();
        let field = |field: BriefingField| catalog.extract(field, text);

        let briefing = Briefing {
            meta: BriefingMeta {
                source_file: source_file.to_string(),
                extraction_date: reference_date,
            },
            contact: ContactDetails {
                responsible_person: field(BriefingField::ResponsiblePerson),
                media_agency: field(BriefingField::MediaAgency),
            },
            advertiser: AdvertiserDetails {
                advertiser_group: field(BriefingField::AdvertiserGroup),
                brand_or_product: field(BriefingField::BrandOrProduct),
            },
            brief: BriefDetails {
                target_persona: field(BriefingField::TargetPersona),
                key_messages: field(BriefingField::KeyMessages),
                sports_focus: vocab.sports.find_all(text),
                objectives: vocab.objectives.find_all(text),
                languages: vocab.languages.find_all(text),
                media_preferences: vocab.media_channels.find_all(text),
                urgency: detect_urgency(text),
                notes: field(BriefingField::Notes),
            },
            constraints: BriefingConstraints {
                budget: parser::parse_budget(text),
                proposal_deadline: parser::parse_date(text, DateRole::Deadline),
                campaign_end: parser::parse_date(text, DateRole::CampaignEnd),
                min_budget_required: self.min_budget_required,
                min_lead_time_days: self.min_lead_time_days,
                exclusions: vocab.exclusions.find_all(text),
                preferences: vocab.preferences.find_all(text),
            },
        };

        debug!(
            source_file,
            chars = text.chars().count(),
            budget = ?briefing.constraints.budget,
            deadline = ?briefing.constraints.proposal_deadline,
            "briefing extracted"
        );

        Ok(briefing)
    }
}
