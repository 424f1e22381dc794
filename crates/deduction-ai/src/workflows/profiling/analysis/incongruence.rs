use std::collections::BTreeSet;

use super::super::domain::ConflictFinding;

/// Pairwise contradiction between two observed cues.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IncongruenceRule {
    pub(crate) first_cue: &'static str,
    pub(crate) second_cue: &'static str,
    pub(crate) topic: &'static str,
    pub(crate) detail: &'static str,
}

/// Contradiction patterns checked on every analysis, in emission order.
///
/// Some cues here (expensive_watch, frayed_collar, calm_voice, shaking_hands)
/// carry no weight-table entry; they only matter to these rules.
pub(crate) const INCONGRUENCE_RULES: &[IncongruenceRule] = &[
    IncongruenceRule {
        first_cue: "expensive_watch",
        second_cue: "frayed_collar",
        topic: "STATUS INCONGRUENCE",
        detail: "Subject prioritizes public signaling over private maintenance.",
    },
    IncongruenceRule {
        first_cue: "calm_voice",
        second_cue: "shaking_hands",
        topic: "EMOTIONAL LEAKAGE",
        detail: "Subject is suppressing high adrenaline/rage.",
    },
    IncongruenceRule {
        first_cue: "asymmetric_smile",
        second_cue: "duchenne_smile",
        topic: "EMOTIONAL MASKING",
        detail: "Genuine and fake happiness signals detected simultaneously.",
    },
    IncongruenceRule {
        first_cue: "past_tense_present_event",
        second_cue: "spontaneous_corrections",
        topic: "LINGUISTIC PARADOX",
        detail: "Deceptive distancing co-exists with truth-telling markers.",
    },
    IncongruenceRule {
        first_cue: "hand_steepling",
        second_cue: "ankle_locking",
        topic: "CONFIDENCE-FEAR SPLIT",
        detail: "Displays dominance while body shows defensive retreat.",
    },
    IncongruenceRule {
        first_cue: "flash_fear_eyes",
        second_cue: "lack_of_startle_response",
        topic: "FEAR SUPPRESSION",
        detail: "Micro-fear detected but controlled startle response suggests training or psychopathy.",
    },
];

/// Emit a finding for every rule whose cue pair is fully present.
pub(crate) fn detect_conflicts(observed: &BTreeSet<&str>) -> Vec<ConflictFinding> {
    INCONGRUENCE_RULES
        .iter()
        .filter(|rule| observed.contains(rule.first_cue) && observed.contains(rule.second_cue))
        .map(|rule| ConflictFinding {
            first_cue: rule.first_cue,
            second_cue: rule.second_cue,
            topic: rule.topic,
            detail: rule.detail,
        })
        .collect()
}
