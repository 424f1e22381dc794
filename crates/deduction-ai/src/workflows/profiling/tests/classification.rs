use std::collections::BTreeMap;

use super::common::*;

use crate::workflows::profiling::analysis::classification::{
    confidence_for, rank_profiles, threat_for,
};
use crate::workflows::profiling::{ConfidenceTier, ThreatTier};

#[test]
fn confidence_thresholds_match_score_bands() {
    assert_eq!(confidence_for(25), ConfidenceTier::Critical);
    assert_eq!(confidence_for(20), ConfidenceTier::Critical);
    assert_eq!(confidence_for(19), ConfidenceTier::VeryHigh);
    assert_eq!(confidence_for(15), ConfidenceTier::VeryHigh);
    assert_eq!(confidence_for(14), ConfidenceTier::High);
    assert_eq!(confidence_for(10), ConfidenceTier::High);
    assert_eq!(confidence_for(9), ConfidenceTier::Medium);
    assert_eq!(confidence_for(6), ConfidenceTier::Medium);
    assert_eq!(confidence_for(5), ConfidenceTier::Low);
    assert_eq!(confidence_for(1), ConfidenceTier::Low);
}

#[test]
fn threat_thresholds_track_confidence_bands() {
    assert_eq!(threat_for(20), ThreatTier::Extreme);
    assert_eq!(threat_for(16), ThreatTier::High);
    assert_eq!(threat_for(12), ThreatTier::Moderate);
    assert_eq!(threat_for(7), ThreatTier::Low);
    assert_eq!(threat_for(3), ThreatTier::Normal);
}

#[test]
fn ranked_reports_carry_tier_labels() {
    let scores = BTreeMap::from([("Ceiling", 20_i16), ("Middle", 12), ("Floor", 2)]);
    let ranked = rank_profiles(&scores);

    assert_eq!(ranked[0].profile, "Ceiling");
    assert_eq!(ranked[0].confidence_label, "Critical/Certain");
    assert_eq!(ranked[0].threat_label, "Extreme");
    assert_eq!(ranked[1].confidence_label, "High");
    assert_eq!(ranked[1].threat_label, "Moderate");
    assert_eq!(ranked[2].confidence_label, "Low");
    assert_eq!(ranked[2].threat_label, "Normal");
}

#[test]
fn zero_scores_are_dropped() {
    let scores = BTreeMap::from([("Gone", 0_i16), ("Kept", 5)]);
    let ranked = rank_profiles(&scores);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].profile, "Kept");
}

#[test]
fn equal_scores_order_by_profile_name() {
    let scores = BTreeMap::from([("Zulu", 7_i16), ("Alpha", 7), ("Mike", 9)]);
    let ranked: Vec<&str> = rank_profiles(&scores)
        .iter()
        .map(|report| report.profile)
        .collect();

    assert_eq!(ranked, vec!["Mike", "Alpha", "Zulu"]);
}

#[test]
fn tie_break_applies_to_real_observations() {
    let assessment = analyze(&["tactical_nail_cut", "callous_index_finger"], &[]);
    let ranked: Vec<&str> = assessment
        .profiles
        .iter()
        .map(|report| report.profile)
        .collect();

    // Military and Tradesman both land on 7; name order decides.
    assert_eq!(
        ranked,
        vec![
            "Heavy_Tool_User",
            "Military",
            "Tradesman",
            "Security",
            "Blue_Collar"
        ]
    );
}

#[test]
fn exact_twenty_classifies_critical_end_to_end() {
    let assessment = analyze(
        &["neck_pacifying_touch", "partial_shrug", "complaint_language"],
        &[],
    );

    let deception = assessment
        .profiles
        .iter()
        .find(|report| report.profile == "Deception")
        .expect("deception reported");
    assert_eq!(deception.score, 20);
    assert_eq!(deception.confidence, ConfidenceTier::Critical);
    assert_eq!(deception.threat, ThreatTier::Extreme);
}
