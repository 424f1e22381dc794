use deduction_ai::workflows::profiling::CueCategory;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Shared handles the ops endpoints read.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_category(raw: &str) -> Result<CueCategory, String> {
    CueCategory::from_key(raw).ok_or_else(|| {
        let known = CueCategory::ordered()
            .into_iter()
            .map(CueCategory::key)
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown cue category '{raw}' (expected one of: {known})")
    })
}
