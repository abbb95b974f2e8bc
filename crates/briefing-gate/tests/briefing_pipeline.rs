use chrono::NaiveDate;
use briefing_gate::workflows::analysis::{AnalysisError, BriefingAnalyzer};
use briefing_gate::workflows::briefing::{
    DocumentError, DocumentLimits, ExtractionError, InlineDocument, TextFileDocument, Urgency,
};
use briefing_gate::workflows::evaluation::{CriterionKind, CriterionStatus, DecisionStatus};
use std::path::PathBuf;

const POWERADE_BRIEF: &str = "Brief média - Powerade
Responsable : Karolien Van Gaever
Agence : GroupM - Essence Mediacom
Annonceur : Coca-Cola
Cible : 18-54 sportifs
Budget : 20-25K
Deadline : 31/03/2025
Sports : padel, running
Langues : français, néerlandais
Urgent, merci de revenir rapidement.";

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid reference date")
}

fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "briefing-gate-{}-{}",
        std::process::id(),
        name
    ));
    std::fs::write(&path, contents).expect("scratch file written");
    path
}

#[test]
fn complete_brief_is_a_go() {
    let analysis = BriefingAnalyzer::default()
        .analyze(POWERADE_BRIEF, "powerade.pdf", reference_date())
        .expect("brief has content");

    let briefing = &analysis.briefing;
    assert_eq!(
        briefing.contact.responsible_person.as_deref(),
        Some("Karolien Van Gaever")
    );
    assert_eq!(briefing.advertiser.advertiser_group.as_deref(), Some("Coca-Cola"));
    assert_eq!(briefing.advertiser.brand_or_product.as_deref(), Some("Powerade"));
    assert_eq!(briefing.brief.target_persona.as_deref(), Some("18-54 sportifs"));
    assert_eq!(briefing.brief.urgency, Some(Urgency::High));

    let budget = briefing.constraints.budget.expect("budget extracted");
    assert_eq!((budget.min_amount(), budget.max_amount()), (20_000, 25_000));
    assert_eq!(
        briefing.constraints.proposal_deadline,
        NaiveDate::from_ymd_opt(2025, 3, 31)
    );
    assert_eq!(briefing.constraints.campaign_end, None);

    let sports: Vec<&str> = briefing
        .brief
        .sports_focus
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();
    assert_eq!(sports, ["padel", "running"]);

    let decision = &analysis.decision;
    assert_eq!(decision.status, DecisionStatus::Go);
    assert_eq!(decision.score, 100);
    assert!(decision.issues.is_empty());
}

#[test]
fn near_deadline_turns_a_strong_brief_into_no_go() {
    let text = POWERADE_BRIEF.replace("31/03/2025", "04/03/2025");

    let analysis = BriefingAnalyzer::default()
        .analyze(&text, "powerade.pdf", reference_date())
        .expect("brief has content");

    let decision = &analysis.decision;
    assert_eq!(decision.status, DecisionStatus::NoGo);
    assert_eq!(decision.score, 70);
    assert_eq!(
        decision
            .criterion(CriterionKind::Timeline)
            .map(|result| result.status),
        Some(CriterionStatus::Fail)
    );
    assert!(decision
        .issues
        .contains(&"Insufficient lead time for deliverables".to_string()));
}

#[test]
fn unrelated_text_yields_an_empty_briefing_and_no_go() {
    let analysis = BriefingAnalyzer::default()
        .analyze("Lorem ipsum dolor sit amet.", "lorem.pdf", reference_date())
        .expect("text is not empty");

    assert_eq!(analysis.briefing.constraints.budget, None);
    assert_eq!(analysis.briefing.constraints.proposal_deadline, None);
    assert_eq!(analysis.briefing.brief.sports_focus, None);
    assert_eq!(analysis.decision.status, DecisionStatus::NoGo);
    assert_eq!(analysis.decision.score, 0);
    assert_eq!(analysis.decision.issues.len(), 3);
}

#[test]
fn age_range_next_to_a_kpi_line_is_not_a_budget() {
    let analysis = BriefingAnalyzer::default()
        .analyze(
            "Cible : 25-34\nKPI : notoriété\nDeadline : 31/03/2025",
            "kpi.pdf",
            reference_date(),
        )
        .expect("text is not empty");

    assert_eq!(analysis.briefing.constraints.budget, None);
    assert_eq!(
        analysis
            .decision
            .criterion(CriterionKind::Budget)
            .map(|result| result.status),
        Some(CriterionStatus::Fail)
    );
    assert_eq!(analysis.decision.status, DecisionStatus::NoGo);
}

#[test]
fn empty_text_is_an_extraction_error() {
    let err = BriefingAnalyzer::default()
        .analyze("", "empty.pdf", reference_date())
        .expect_err("empty text rejected");

    assert!(matches!(err, ExtractionError::NoExtractableContent { .. }));
}

#[test]
fn analysis_is_idempotent() {
    let analyzer = BriefingAnalyzer::default();
    let first = analyzer
        .analyze(POWERADE_BRIEF, "powerade.pdf", reference_date())
        .expect("brief has content");
    let second = analyzer
        .analyze(POWERADE_BRIEF, "powerade.pdf", reference_date())
        .expect("brief has content");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}

#[test]
fn analysis_serializes_for_downstream_consumers() {
    let analysis = BriefingAnalyzer::default()
        .analyze(POWERADE_BRIEF, "powerade.pdf", reference_date())
        .expect("brief has content");
    let value = serde_json::to_value(&analysis).expect("serializes");

    assert_eq!(value["briefing"]["meta"]["source_file"], "powerade.pdf");
    assert_eq!(value["briefing"]["meta"]["extraction_date"], "2025-03-01");
    assert_eq!(value["briefing"]["constraints"]["proposal_deadline"], "2025-03-31");
    assert_eq!(value["decision"]["status"], "GO");
}

#[tokio::test]
async fn multi_page_inline_document_is_analyzed() {
    let pages = POWERADE_BRIEF
        .split_once("Budget")
        .map(|(head, tail)| vec![head.to_string(), format!("Budget{tail}")])
        .expect("brief splits");
    let source = InlineDocument::from_pages("powerade.pdf", pages);

    let analysis = BriefingAnalyzer::default()
        .analyze_source(&source, reference_date())
        .await
        .expect("analysis succeeds");

    assert_eq!(analysis.decision.status, DecisionStatus::Go);
}

#[tokio::test]
async fn text_file_pages_are_read_from_disk() {
    let contents = POWERADE_BRIEF.replacen("Budget", "\u{000c}Budget", 1);
    let path = scratch_file("pages.txt", contents.as_bytes());
    let source = TextFileDocument::new(&path, DocumentLimits::default())
        .with_identifier("powerade.pdf");

    let analysis = BriefingAnalyzer::default()
        .analyze_source(&source, reference_date())
        .await
        .expect("analysis succeeds");
    std::fs::remove_file(&path).ok();

    assert_eq!(analysis.briefing.meta.source_file, "powerade.pdf");
    assert_eq!(analysis.decision.score, 100);
}

#[tokio::test]
async fn oversized_file_is_rejected_before_reading() {
    let path = scratch_file("oversized.txt", POWERADE_BRIEF.as_bytes());
    let source = TextFileDocument::new(&path, DocumentLimits { max_bytes: 16 });

    let err = BriefingAnalyzer::default()
        .analyze_source(&source, reference_date())
        .await
        .expect_err("file is above the limit");
    std::fs::remove_file(&path).ok();

    assert!(matches!(
        err,
        AnalysisError::Document(DocumentError::TooLarge { limit: 16, .. })
    ));
}
