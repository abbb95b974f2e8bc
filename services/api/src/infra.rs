use briefing_gate::workflows::briefing::DocumentLimits;
use briefing_gate::workflows::analysis::BriefingAnalyzer;
use chrono::{Local, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared pipeline handed to the briefing routes.
#[derive(Clone)]
pub(crate) struct BriefingState {
    pub(crate) analyzer: Arc<BriefingAnalyzer>,
    pub(crate) limits: DocumentLimits,
}

impl BriefingState {
    pub(crate) fn new(analyzer: BriefingAnalyzer, limits: DocumentLimits) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            limits,
        }
    }
}

/// Wall-clock date; only the CLI and HTTP edges read the clock.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
