use chrono::{Duration, NaiveDate};

use crate::workflows::briefing::{
    AdvertiserDetails, BriefDetails, Briefing, BriefingConstraints, BriefingMeta, BudgetRange,
    ContactDetails,
};
use crate::workflows::evaluation::{DecisionEngine, RuleSet};

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date")
}

pub(super) fn days_out(days: i64) -> NaiveDate {
    reference_date() + Duration::days(days)
}

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::new(RuleSet::default())
}

/// Briefing that clears every default rule: 20-25k budget, deadline 30 days
/// out, all three required fields filled.
pub(super) fn complete_briefing() -> Briefing {
    Briefing {
        meta: BriefingMeta {
            source_file: "powerade-brief.pdf".to_string(),
            extraction_date: reference_date(),
        },
        contact: ContactDetails {
            responsible_person: Some("Karolien Van Gaever".to_string()),
            media_agency: Some("GroupM - Essence Mediacom".to_string()),
        },
        advertiser: AdvertiserDetails {
            advertiser_group: Some("Coca-Cola".to_string()),
            brand_or_product: Some("Powerade".to_string()),
        },
        brief: BriefDetails {
            target_persona: Some("18-54 sportifs".to_string()),
            ..BriefDetails::default()
        },
        constraints: BriefingConstraints {
            budget: Some(BudgetRange::new(20_000, 25_000)),
            proposal_deadline: Some(days_out(30)),
            campaign_end: None,
            min_budget_required: 10_000,
            min_lead_time_days: 10,
            exclusions: None,
            preferences: None,
        },
    }
}

pub(super) fn empty_briefing() -> Briefing {
    let mut briefing = complete_briefing();
    briefing.contact = ContactDetails::default();
    briefing.advertiser = AdvertiserDetails::default();
    briefing.brief = BriefDetails::default();
    briefing.constraints.budget = None;
    briefing.constraints.proposal_deadline = None;
    briefing
}
