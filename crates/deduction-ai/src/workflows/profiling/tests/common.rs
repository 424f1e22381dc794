use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::profiling::{
    profiling_router, DeductionEngine, SubjectAssessment, SubjectObservation,
};

pub(super) fn engine() -> DeductionEngine {
    DeductionEngine::standard()
}

pub(super) fn observation(cues: &[&str], tags: &[&str]) -> SubjectObservation {
    SubjectObservation {
        observed_cues: cues.iter().map(|cue| cue.to_string()).collect(),
        context_tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

pub(super) fn analyze(cues: &[&str], tags: &[&str]) -> SubjectAssessment {
    engine().analyze(&observation(cues, tags))
}

pub(super) fn score_for(assessment: &SubjectAssessment, profile: &str) -> Option<i16> {
    assessment
        .profiles
        .iter()
        .find(|report| report.profile == profile)
        .map(|report| report.score)
}

pub(super) fn deduction_router() -> axum::Router {
    profiling_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
