//! End-to-end pipeline: document text to briefing to decision.

use crate::workflows::briefing::{
    BriefingExtractor, Briefing, DocumentError, DocumentSource, ExtractionError,
};
use crate::workflows::evaluation::{Decision, DecisionEngine, RuleSet};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Structured briefing paired with the decision derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingAnalysis {
    pub briefing: Briefing,
    pub decision: Decision,
}

/// Runs extraction and evaluation against one shared rule set, so the
/// thresholds recorded on the briefing always match the ones scored against.
#[derive(Debug, Clone)]
pub struct BriefingAnalyzer {
    extractor: BriefingExtractor,
    engine: DecisionEngine,
}

impl BriefingAnalyzer {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            extractor: BriefingExtractor::new(&rules),
            engine: DecisionEngine::new(rules),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        self.engine.rules()
    }

    pub fn analyze(
        &self,
        text: &str,
        source_file: &str,
        reference_date: NaiveDate,
    ) -> Result<BriefingAnalysis, ExtractionError> {
        let briefing = self.extractor.extract(text, source_file, reference_date)?;
        let decision = self.engine.evaluate(&briefing, reference_date);
        Ok(BriefingAnalysis { briefing, decision })
    }

    pub async fn analyze_source<S>(
        &self,
        source: &S,
        reference_date: NaiveDate,
    ) -> Result<BriefingAnalysis, AnalysisError>
    where
        S: DocumentSource + Sync,
    {
        let text = source.load_text().await?;
        let analysis = self.analyze(&text, source.identifier(), reference_date)?;
        info!(
            source = source.identifier(),
            decision = %analysis.decision.summary(),
            "document analyzed"
        );
        Ok(analysis)
    }
}

impl Default for BriefingAnalyzer {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::briefing::{DocumentLimits, InlineDocument, TextFileDocument};
    use crate::workflows::evaluation::DecisionStatus;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date")
    }

    #[test]
    fn analysis_keeps_briefing_thresholds_in_step_with_rules() {
        let rules = RuleSet {
            min_budget: 30_000,
            min_lead_time_days: 5,
            ..RuleSet::default()
        };
        let analyzer = BriefingAnalyzer::new(rules);

        let analysis = analyzer
            .analyze("Budget : 20-25K", "brief.txt", reference_date())
            .expect("text is not empty");

        assert_eq!(analysis.briefing.constraints.min_budget_required, 30_000);
        assert_eq!(analysis.briefing.constraints.min_lead_time_days, 5);
        assert_eq!(analysis.decision.status, DecisionStatus::NoGo);
        assert_eq!(analysis.decision.issues[0], "Budget below minimum requirement");
    }

    #[test]
    fn blank_text_is_rejected_before_scoring() {
        let err = BriefingAnalyzer::default()
            .analyze(" \n\t ", "blank.txt", reference_date())
            .expect_err("blank text");
        assert_eq!(
            err,
            ExtractionError::NoExtractableContent {
                source_file: "blank.txt".to_string()
            }
        );
    }

    #[tokio::test]
    async fn inline_source_reports_its_identifier() {
        let source = InlineDocument::from_pages(
            "pages.pdf",
            vec!["Budget : 15K".to_string(), "Merci".to_string()],
        );

        let analysis = BriefingAnalyzer::default()
            .analyze_source(&source, reference_date())
            .await
            .expect("analysis succeeds");

        assert_eq!(analysis.briefing.meta.source_file, "pages.pdf");
        assert_eq!(
            analysis.briefing.constraints.budget.map(|budget| budget.min_amount()),
            Some(15_000)
        );
    }

    #[tokio::test]
    async fn missing_file_surfaces_as_document_error() {
        let source = TextFileDocument::new(
            "/nonexistent/briefing-gate/brief.txt",
            DocumentLimits::default(),
        );

        let err = BriefingAnalyzer::default()
            .analyze_source(&source, reference_date())
            .await
            .expect_err("file is missing");

        assert!(matches!(err, AnalysisError::Document(DocumentError::Io(_))));
    }
}
