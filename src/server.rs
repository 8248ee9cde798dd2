use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use tradescore::config::AppConfig;
use tradescore::error::AppError;
use tradescore::strategies::{MemoryStrategyRepository, StrategyService};
use tradescore::telemetry;

use crate::cli::ServeArgs;
use crate::routes::{with_strategy_routes, AppState};

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

    let repository = Arc::new(MemoryStrategyRepository::default());
    let strategy_service = Arc::new(StrategyService::new(repository));

    let app = with_strategy_routes(strategy_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "strategy scorecard service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
