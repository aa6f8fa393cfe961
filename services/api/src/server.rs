use crate::cli::ServeArgs;
use crate::infra::{ephemeral_service, file_backed_service, AppState};
use crate::routes::with_practice_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use intellihire::config::AppConfig;
use intellihire::error::AppError;
use intellihire::workflows::interview::{
    AnswerGrader, InterviewPracticeService, SessionHistoryStore,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    if args.ephemeral {
        info!("session history kept in memory only");
        serve(&config, Arc::new(ephemeral_service(&config.practice))).await
    } else {
        info!(path = %config.practice.history_path.display(), "session history file");
        serve(&config, Arc::new(file_backed_service(&config.practice))).await
    }
}

async fn serve<S, G>(
    config: &AppConfig,
    service: Arc<InterviewPracticeService<S, G>>,
) -> Result<(), AppError>
where
    S: SessionHistoryStore + 'static,
    G: AnswerGrader + 'static,
{
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_practice_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "interview practice service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
