//! Subject profiling workflow.
//!
//! Scores observed behavioral cues into ranked profile reports, applies
//! situational context adjustments, and cross-checks the raw cue set for
//! logically incongruent combinations.

mod analysis;
pub mod domain;
mod library;
pub mod router;

#[cfg(test)]
mod tests;

pub use analysis::DeductionEngine;
pub use domain::{
    ConfidenceTier, ConflictFinding, CueCategory, ProfileReport, SubjectAssessment,
    SubjectObservation, ThreatTier, MANIPULATION_WATCHLIST, PRIORITY_PROFILES,
};
pub use library::{CategoryTable, ContextFilter, CueEntry, CueLibrary, ProfileWeight};
pub use router::profiling_router;
