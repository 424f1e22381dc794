use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use deduction_ai::error::AppError;
use deduction_ai::workflows::fieldnotes::FieldNoteImporter;
use deduction_ai::workflows::profiling::{
    profiling_router, ConflictFinding, DeductionEngine, ProfileReport, SubjectObservation,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct DeductionReportRequest {
    #[serde(default)]
    pub(crate) observed_cues: Vec<String>,
    #[serde(default)]
    pub(crate) context_tags: Vec<String>,
    #[serde(default)]
    pub(crate) field_notes_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeductionReportResponse {
    pub(crate) data_source: ObservationSource,
    pub(crate) observed_cues: Vec<String>,
    pub(crate) context_tags: Vec<String>,
    pub(crate) manipulation_risk: bool,
    pub(crate) profiles: Vec<ProfileReport>,
    pub(crate) findings: Vec<ConflictFinding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ObservationSource {
    FieldNotes,
    Direct,
}

pub(crate) fn with_deduction_routes(engine: Arc<DeductionEngine>) -> axum::Router {
    profiling_router(engine)
        .route("/health", axum::routing::get(health_endpoint))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/deduction/report",
            axum::routing::post(deduction_report_endpoint),
        )
}

pub(crate) async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(Ordering::Acquire) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let body = state.metrics.render();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
}

pub(crate) async fn deduction_report_endpoint(
    Json(payload): Json<DeductionReportRequest>,
) -> Result<Json<DeductionReportResponse>, AppError> {
    let DeductionReportRequest {
        observed_cues,
        context_tags,
        field_notes_csv,
    } = payload;

    let mut observation = SubjectObservation {
        observed_cues,
        context_tags,
    };

    let data_source = if let Some(csv) = field_notes_csv {
        let reader = Cursor::new(csv.into_bytes());
        let imported = FieldNoteImporter::from_reader(reader)?;
        observation.merge(imported);
        ObservationSource::FieldNotes
    } else {
        ObservationSource::Direct
    };

    let engine = DeductionEngine::standard();
    let assessment = engine.analyze(&observation);

    Ok(Json(DeductionReportResponse {
        data_source,
        observed_cues: observation.observed_cues,
        context_tags: observation.context_tags,
        manipulation_risk: assessment.manipulation_risk(),
        profiles: assessment.profiles,
        findings: assessment.findings,
    }))
}
