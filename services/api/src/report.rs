use crate::infra::today;
use briefing_gate::config::AppConfig;
use briefing_gate::error::AppError;
use briefing_gate::workflows::analysis::{BriefingAnalysis, BriefingAnalyzer};
use briefing_gate::workflows::briefing::{Briefing, TextFileDocument};
use briefing_gate::workflows::evaluation::{CriterionStatus, Decision};
use chrono::NaiveDate;
use clap::Args;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// UTF-8 text export of the briefing (form feeds separate pages)
    pub(crate) path: PathBuf,
    /// Name to report as the source file (defaults to the file name)
    #[arg(long)]
    pub(crate) source: Option<String>,
    /// Date lead time is counted from (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) reference_date: Option<NaiveDate>,
    /// Print the full analysis as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        path,
        source,
        reference_date,
        json,
    } = args;

    let config = AppConfig::load()?;
    let mut document = TextFileDocument::new(&path, config.documents);
    if let Some(source) = source {
        document = document.with_identifier(source);
    }

    let reference_date = reference_date.unwrap_or_else(today);
    let analysis = BriefingAnalyzer::new(config.rules)
        .analyze_source(&document, reference_date)
        .await?;

    if json {
        print_json(&analysis);
    } else {
        println!("{}", render_analysis(&analysis));
    }
    Ok(())
}

pub(crate) fn run_rules() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    print_json(&config.rules);
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to render JSON: {err}"),
    }
}

pub(crate) fn render_analysis(analysis: &BriefingAnalysis) -> String {
    let mut lines = Vec::new();
    render_briefing(&analysis.briefing, &mut lines);
    lines.push(String::new());
    render_decision(&analysis.decision, &mut lines);
    lines.join("\n")
}

fn render_briefing(briefing: &Briefing, lines: &mut Vec<String>) {
    lines.push(format!(
        "Briefing {} (extracted {})",
        briefing.meta.source_file, briefing.meta.extraction_date
    ));

    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let set = |value: &Option<BTreeSet<String>>| match value {
        Some(items) => items.iter().cloned().collect::<Vec<_>>().join(", "),
        None => "-".to_string(),
    };
    let date = |value: Option<NaiveDate>| value.map(|d| d.to_string()).unwrap_or_else(|| "-".into());

    let constraints = &briefing.constraints;
    let rows = [
        ("Responsible", text(&briefing.contact.responsible_person)),
        ("Media agency", text(&briefing.contact.media_agency)),
        ("Advertiser", text(&briefing.advertiser.advertiser_group)),
        ("Brand", text(&briefing.advertiser.brand_or_product)),
        ("Target persona", text(&briefing.brief.target_persona)),
        ("Key messages", text(&briefing.brief.key_messages)),
        ("Sports", set(&briefing.brief.sports_focus)),
        ("Objectives", set(&briefing.brief.objectives)),
        ("Languages", set(&briefing.brief.languages)),
        ("Media", set(&briefing.brief.media_preferences)),
        (
            "Urgency",
            briefing
                .brief
                .urgency
                .map(|urgency| urgency.label().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        (
            "Budget",
            constraints
                .budget
                .map(|budget| format!("€{budget}"))
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Proposal deadline", date(constraints.proposal_deadline)),
        ("Campaign end", date(constraints.campaign_end)),
        ("Exclusions", set(&constraints.exclusions)),
        ("Preferences", set(&constraints.preferences)),
    ];
    for (label, value) in rows {
        lines.push(format!("  {label:<18} {value}"));
    }
}

fn render_decision(decision: &Decision, lines: &mut Vec<String>) {
    lines.push(format!("Decision: {}", decision.summary()));
    for (kind, result) in &decision.criteria {
        let marker = match result.status {
            CriterionStatus::Pass => "PASS",
            CriterionStatus::Fail => "FAIL",
        };
        lines.push(format!(
            "  [{marker}] {:<16} {:>3}  {}",
            format!("{kind:?}"),
            result.score,
            result.message
        ));
    }
    if !decision.issues.is_empty() {
        lines.push("Issues:".to_string());
        lines.extend(decision.issues.iter().map(|issue| format!("  - {issue}")));
    }
    if !decision.recommendations.is_empty() {
        lines.push("Recommendations:".to_string());
        lines.extend(
            decision
                .recommendations
                .iter()
                .map(|recommendation| format!("  - {recommendation}")),
        );
    }
}
