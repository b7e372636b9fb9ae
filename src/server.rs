use crate::cli::ServeArgs;
use crate::routes::{with_ranking_routes, AppState};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use opportunity_scout::config::AppConfig;
use opportunity_scout::error::AppError;
use opportunity_scout::scoring::PriorityScorer;
use opportunity_scout::telemetry;
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

    let scorer = Arc::new(PriorityScorer::new(config.scoring.clone()));

    let app = with_ranking_routes(scorer)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        popular_keywords = config.scoring.popular_keywords.len(),
        "opportunity scoring service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
