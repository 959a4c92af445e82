use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_costing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use landed_cost::config::AppConfig;
use landed_cost::costing::{LandedCostService, TaxPolicy};
use landed_cost::error::AppError;
use landed_cost::telemetry;
use std::sync::atomic::Ordering;
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
    if let Some(rate) = args.tax_rate.take() {
        config.costing.sales_tax_rate = rate;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let policy = TaxPolicy::from(&config.costing);
    let service = Arc::new(LandedCostService::new(policy));

    let app = with_costing_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        sales_tax_rate = policy.sales_tax_rate,
        "landed cost service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
