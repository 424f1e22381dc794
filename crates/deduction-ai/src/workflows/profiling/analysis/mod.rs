pub(crate) mod aggregation;
pub(crate) mod classification;
pub(crate) mod incongruence;

use std::collections::BTreeSet;

use super::domain::{SubjectAssessment, SubjectObservation};
use super::library::CueLibrary;

/// Stateless analyzer applying the cue library to one observation set.
pub struct DeductionEngine {
    library: CueLibrary,
}

impl DeductionEngine {
    pub fn new(library: CueLibrary) -> Self {
        Self { library }
    }

    /// Engine backed by the standard cue library.
    pub fn standard() -> Self {
        Self::new(CueLibrary::standard())
    }

    pub fn library(&self) -> &CueLibrary {
        &self.library
    }

    /// Score, rank, and cross-check a single observation set.
    ///
    /// Unknown cue and context identifiers contribute nothing. Repeated cues
    /// count once; repeated context tags apply per occurrence.
    pub fn analyze(&self, observation: &SubjectObservation) -> SubjectAssessment {
        let observed: BTreeSet<&str> = observation
            .observed_cues
            .iter()
            .map(String::as_str)
            .collect();

        let mut scores = aggregation::score_observed_cues(&self.library, &observed);
        aggregation::apply_context_filters(&self.library, &observation.context_tags, &mut scores);

        SubjectAssessment {
            profiles: classification::rank_profiles(&scores),
            findings: incongruence::detect_conflicts(&observed),
        }
    }
}
