use crate::cli::ServeArgs;
use crate::infra::{build_classifier, AppState};
use crate::routes::with_ad_routes;
use ad_quality::config::AppConfig;
use ad_quality::error::AppError;
use ad_quality::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let classifier = Arc::new(build_classifier(config.scoring.thresholds));
    let report = classifier.update_ad_scores()?;
    if !report.is_clean() {
        for failure in &report.failures {
            warn!(%failure, "seed ad not scored");
        }
    }

    let app = with_ad_routes(classifier)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        public_threshold = config.scoring.thresholds.public(),
        quality_threshold = config.scoring.thresholds.quality(),
        "ad quality service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
