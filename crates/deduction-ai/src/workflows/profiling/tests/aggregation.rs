use super::common::*;

use crate::workflows::profiling::{ConfidenceTier, ThreatTier};

#[test]
fn scenario_scores_military_and_security() {
    let assessment = analyze(
        &[
            "inward_watch_face",
            "tactical_nail_cut",
            "peripheral_scanning",
        ],
        &["job_interview"],
    );

    let military = assessment
        .profiles
        .iter()
        .find(|report| report.profile == "Military")
        .expect("military reported");
    assert_eq!(military.score, 16);
    assert_eq!(military.confidence, ConfidenceTier::VeryHigh);
    assert_eq!(military.threat, ThreatTier::High);

    let security = assessment
        .profiles
        .iter()
        .find(|report| report.profile == "Security")
        .expect("security reported");
    assert_eq!(security.score, 14);
    assert_eq!(security.confidence, ConfidenceTier::High);
    assert_eq!(security.threat, ThreatTier::Moderate);

    let ranked: Vec<&str> = assessment
        .profiles
        .iter()
        .map(|report| report.profile)
        .collect();
    assert_eq!(
        ranked,
        vec![
            "Military",
            "Security",
            "Hyper_Vigilance",
            "Tactical",
            "Medical",
            "Blue_Collar"
        ]
    );
}

#[test]
fn duplicate_cues_contribute_once() {
    let assessment = analyze(
        &["inward_watch_face", "inward_watch_face", "inward_watch_face"],
        &[],
    );

    assert_eq!(score_for(&assessment, "Military"), Some(9));
    assert_eq!(score_for(&assessment, "Medical"), Some(7));
}

#[test]
fn unknown_cues_are_ignored() {
    let assessment = analyze(&["__not_a_real_cue__"], &[]);

    assert!(assessment.profiles.is_empty());
    assert!(assessment.findings.is_empty());
}

#[test]
fn context_never_creates_profiles() {
    let negative = analyze(&[], &["job_interview"]);
    assert!(negative.profiles.is_empty());

    let positive = analyze(&[], &["medical_setting"]);
    assert!(positive.profiles.is_empty());
}

#[test]
fn clamping_floors_scores_at_zero() {
    // Anxiety 7 drops to 3 in the interview, then clamps at 0 on the date.
    let assessment = analyze(&["speech_rate_increase"], &["job_interview", "first_date"]);

    assert_eq!(score_for(&assessment, "Anxiety"), None);
    assert_eq!(score_for(&assessment, "Excitement"), Some(6));
}

#[test]
fn repeated_context_tags_apply_per_occurrence() {
    let assessment = analyze(
        &["speech_rate_increase"],
        &["high_temperature", "high_temperature"],
    );

    assert_eq!(score_for(&assessment, "Anxiety"), Some(1));
}

#[test]
fn clamped_profile_recovers_with_later_tag() {
    // Anxiety hits 0 mid-sequence but stays eligible for later adjustments.
    let assessment = analyze(
        &["speech_rate_increase"],
        &["job_interview", "first_date", "medical_setting"],
    );

    assert_eq!(score_for(&assessment, "Anxiety"), Some(4));
    assert_eq!(score_for(&assessment, "Medical"), None);
}

#[test]
fn unknown_context_tags_are_ignored() {
    let assessment = analyze(&["inward_watch_face"], &["__nonsense__"]);

    assert_eq!(score_for(&assessment, "Military"), Some(9));
}

#[test]
fn deception_accumulates_across_categories() {
    let assessment = analyze(
        &["neck_pacifying_touch", "partial_shrug", "complaint_language"],
        &[],
    );

    assert_eq!(score_for(&assessment, "Deception"), Some(20));
}

#[test]
fn analysis_is_deterministic() {
    let observation = observation(
        &[
            "inward_watch_face",
            "past_tense_present_event",
            "spontaneous_corrections",
        ],
        &["formal_event"],
    );
    let engine = engine();

    let first = engine.analyze(&observation);
    let second = engine.analyze(&observation);
    assert_eq!(first, second);
}
