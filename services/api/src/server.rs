use crate::cli::ServeArgs;
use crate::infra::{seed_cards, AppState, InMemoryAuditTrail, InMemoryCaseBoard};
use crate::routes::with_casework_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use caseflow::config::AppConfig;
use caseflow::error::AppError;
use caseflow::telemetry;
use caseflow::workflows::casework::CaseTriageService;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryCaseBoard::seeded(seed_cards()));
    let audit = Arc::new(InMemoryAuditTrail::default());
    let triage_service = Arc::new(CaseTriageService::new(repository, audit, config.triage));

    let app = with_casework_routes(triage_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "case triage service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
