use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::analysis::DeductionEngine;
use super::domain::{ConflictFinding, CueCategory, ProfileReport, SubjectObservation};

/// Router builder exposing HTTP endpoints for analysis and catalog browsing.
pub fn profiling_router(engine: Arc<DeductionEngine>) -> Router {
    Router::new()
        .route("/api/v1/deduction/analysis", post(analysis_handler))
        .route("/api/v1/deduction/cues", get(cue_catalog_handler))
        .route("/api/v1/deduction/contexts", get(context_catalog_handler))
        .with_state(engine)
}

/// Serialized assessment returned by the analysis endpoint.
#[derive(Debug, Serialize)]
pub struct AnalysisView {
    pub manipulation_risk: bool,
    pub profiles: Vec<ProfileReport>,
    pub findings: Vec<ConflictFinding>,
}

#[derive(Debug, Serialize)]
pub struct CueCatalogEntry {
    pub category: CueCategory,
    pub category_label: &'static str,
    pub cues: Vec<&'static str>,
}

pub(crate) async fn analysis_handler(
    State(engine): State<Arc<DeductionEngine>>,
    axum::Json(observation): axum::Json<SubjectObservation>,
) -> Response {
    let assessment = engine.analyze(&observation);
    let view = AnalysisView {
        manipulation_risk: assessment.manipulation_risk(),
        profiles: assessment.profiles,
        findings: assessment.findings,
    };

    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn cue_catalog_handler(State(engine): State<Arc<DeductionEngine>>) -> Response {
    let categories: Vec<CueCatalogEntry> = engine
        .library()
        .cues_by_category()
        .into_iter()
        .map(|(category, cues)| CueCatalogEntry {
            category,
            category_label: category.label(),
            cues,
        })
        .collect();

    let payload = json!({
        "categories": categories,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn context_catalog_handler(
    State(engine): State<Arc<DeductionEngine>>,
) -> Response {
    let payload = json!({
        "context_tags": engine.library().context_tags(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
