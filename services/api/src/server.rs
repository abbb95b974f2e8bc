use crate::cli::ServeArgs;
use crate::infra::{AppState, BriefingState};
use crate::routes::with_briefing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use briefing_gate::config::AppConfig;
use briefing_gate::error::AppError;
use briefing_gate::telemetry;
use briefing_gate::workflows::analysis::BriefingAnalyzer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let briefing_state = BriefingState::new(
        BriefingAnalyzer::new(config.rules.clone()),
        config.documents,
    );

    let app = with_briefing_routes(briefing_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        min_budget = config.rules.min_budget,
        min_lead_time_days = config.rules.min_lead_time_days,
        "briefing gate ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
