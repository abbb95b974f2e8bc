use crate::infra::{deserialize_optional_date, today, AppState, BriefingState};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use briefing_gate::error::AppError;
use briefing_gate::workflows::analysis::BriefingAnalysis;
use briefing_gate::workflows::briefing::{DocumentError, DocumentLimits};
use briefing_gate::workflows::evaluation::RuleSet;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

const INLINE_SOURCE: &str = "inline";
/// Room for the JSON envelope and escaped characters around the text.
const ENVELOPE_SLACK_BYTES: usize = 64 * 1024;

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeBriefingRequest {
    pub(crate) text: String,
    #[serde(default)]
    pub(crate) source_file: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) reference_date: Option<NaiveDate>,
}

/// Twice the document limit plus envelope slack; text over the document limit
/// is rejected by the handler with a 422.
pub(crate) fn request_body_limit(limits: DocumentLimits) -> usize {
    usize::try_from(limits.max_bytes)
        .unwrap_or(usize::MAX)
        .saturating_mul(2)
        .saturating_add(ENVELOPE_SLACK_BYTES)
}

pub(crate) fn with_briefing_routes(state: BriefingState) -> Router {
    let body_limit = request_body_limit(state.limits);
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/briefings/analyze", post(analyze_briefing_endpoint))
        .route("/api/v1/rules", get(rules_endpoint))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn analyze_briefing_endpoint(
    Extension(state): Extension<BriefingState>,
    Json(payload): Json<AnalyzeBriefingRequest>,
) -> Result<Json<BriefingAnalysis>, AppError> {
    let AnalyzeBriefingRequest {
        text,
        source_file,
        reference_date,
    } = payload;

    let size = text.len() as u64;
    if size > state.limits.max_bytes {
        return Err(DocumentError::TooLarge {
            size,
            limit: state.limits.max_bytes,
        }
        .into());
    }

    let source_file = source_file.unwrap_or_else(|| INLINE_SOURCE.to_string());
    let reference_date = reference_date.unwrap_or_else(today);
    let analysis = state
        .analyzer
        .analyze(&text, &source_file, reference_date)?;

    info!(
        %source_file,
        decision = %analysis.decision.summary(),
        "briefing analyzed over http"
    );
    Ok(Json(analysis))
}

pub(crate) async fn rules_endpoint(Extension(state): Extension<BriefingState>) -> Json<RuleSet> {
    Json(state.analyzer.rules().clone())
}
