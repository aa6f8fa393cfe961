use intellihire::config::PracticeConfig;
use intellihire::workflows::interview::{
    InMemoryHistoryStore, InterviewPracticeService, JsonFileHistoryStore,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn file_backed_service(
    practice: &PracticeConfig,
) -> InterviewPracticeService<JsonFileHistoryStore> {
    let store = Arc::new(JsonFileHistoryStore::new(&practice.history_path));
    InterviewPracticeService::new(store, practice.evaluation_config())
}

pub(crate) fn ephemeral_service(
    practice: &PracticeConfig,
) -> InterviewPracticeService<InMemoryHistoryStore> {
    let store = Arc::new(InMemoryHistoryStore::default());
    InterviewPracticeService::new(store, practice.evaluation_config())
}
