use std::collections::BTreeMap;

use super::super::domain::{ConfidenceTier, ProfileReport, ThreatTier};

/// Rank positive scores into report entries, highest score first.
///
/// Profiles at zero are dropped. Equal scores order by profile name ascending
/// so identical inputs always render identically.
pub(crate) fn rank_profiles(scores: &BTreeMap<&'static str, i16>) -> Vec<ProfileReport> {
    let mut ranked: Vec<ProfileReport> = scores
        .iter()
        .filter(|&(_, &score)| score > 0)
        .map(|(&profile, &score)| report_for(profile, score))
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.profile.cmp(b.profile)));
    ranked
}

fn report_for(profile: &'static str, score: i16) -> ProfileReport {
    let confidence = confidence_for(score);
    let threat = threat_for(score);

    ProfileReport {
        profile,
        score,
        confidence,
        confidence_label: confidence.label(),
        threat,
        threat_label: threat.label(),
    }
}

pub(crate) fn confidence_for(score: i16) -> ConfidenceTier {
    if score >= 20 {
        ConfidenceTier::Critical
    } else if score >= 15 {
        ConfidenceTier::VeryHigh
    } else if score >= 10 {
        ConfidenceTier::High
    } else if score >= 6 {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

pub(crate) fn threat_for(score: i16) -> ThreatTier {
    if score >= 20 {
        ThreatTier::Extreme
    } else if score >= 15 {
        ThreatTier::High
    } else if score >= 10 {
        ThreatTier::Moderate
    } else if score >= 6 {
        ThreatTier::Low
    } else {
        ThreatTier::Normal
    }
}
