use super::domain::CueCategory;

/// Weight contribution one cue makes toward one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileWeight {
    pub profile: &'static str,
    pub weight: i16,
}

/// One observable cue and its profile contributions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueEntry {
    pub key: &'static str,
    pub weights: Vec<ProfileWeight>,
}

/// Cue entries for a single observation category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    pub category: CueCategory,
    pub entries: Vec<CueEntry>,
}

/// Situational tag with the score adjustments it applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextFilter {
    pub tag: &'static str,
    pub adjustments: Vec<ProfileWeight>,
}

/// Read-only reference data backing every analysis.
#[derive(Debug, Clone)]
pub struct CueLibrary {
    categories: Vec<CategoryTable>,
    context_filters: Vec<ContextFilter>,
}

impl CueLibrary {
    pub fn standard() -> Self {
        Self {
            categories: vec![
                CategoryTable {
                    category: CueCategory::PhysicalMarkers,
                    entries: physical_marker_entries(),
                },
                CategoryTable {
                    category: CueCategory::BehavioralClusters,
                    entries: behavioral_cluster_entries(),
                },
                CategoryTable {
                    category: CueCategory::MicroExpressions,
                    entries: micro_expression_entries(),
                },
                CategoryTable {
                    category: CueCategory::ForensicLinguistics,
                    entries: forensic_linguistic_entries(),
                },
                CategoryTable {
                    category: CueCategory::VocalMarkers,
                    entries: vocal_marker_entries(),
                },
                CategoryTable {
                    category: CueCategory::DarkTriadMarkers,
                    entries: dark_triad_entries(),
                },
            ],
            context_filters: standard_context_filters(),
        }
    }

    pub fn categories(&self) -> &[CategoryTable] {
        &self.categories
    }

    pub fn context_filters(&self) -> &[ContextFilter] {
        &self.context_filters
    }

    /// Cue identifiers grouped by category, in declaration order.
    pub fn cues_by_category(&self) -> Vec<(CueCategory, Vec<&'static str>)> {
        self.categories
            .iter()
            .map(|table| {
                let cues = table.entries.iter().map(|entry| entry.key).collect();
                (table.category, cues)
            })
            .collect()
    }

    /// Context tags accepted by the adjustment step, in declaration order.
    pub fn context_tags(&self) -> Vec<&'static str> {
        self.context_filters
            .iter()
            .map(|filter| filter.tag)
            .collect()
    }

    pub fn context_filter(&self, tag: &str) -> Option<&ContextFilter> {
        self.context_filters.iter().find(|filter| filter.tag == tag)
    }
}

fn cue(key: &'static str, weights: &[(&'static str, i16)]) -> CueEntry {
    CueEntry {
        key,
        weights: weights
            .iter()
            .map(|&(profile, weight)| ProfileWeight { profile, weight })
            .collect(),
    }
}

fn filter(tag: &'static str, adjustments: &[(&'static str, i16)]) -> ContextFilter {
    ContextFilter {
        tag,
        adjustments: adjustments
            .iter()
            .map(|&(profile, weight)| ProfileWeight { profile, weight })
            .collect(),
    }
}

fn physical_marker_entries() -> Vec<CueEntry> {
    vec![
        cue(
            "inward_watch_face",
            &[("Military", 9), ("Medical", 7), ("Tactical", 8)],
        ),
        cue(
            "tactical_nail_cut",
            &[("Military", 7), ("Security", 6), ("Blue_Collar", 4)],
        ),
        cue(
            "callous_index_finger",
            &[("Heavy_Tool_User", 8), ("Tradesman", 7)],
        ),
        cue(
            "writer_bump_middle_finger",
            &[("Academic", 8), ("Journalist", 7), ("Student", 5)],
        ),
        cue(
            "watch_tan_line_empty",
            &[("Financial_Distress", 6), ("Recent_Loss", 5)],
        ),
        cue(
            "pristine_shoes_scruffy_cuffs",
            &[("Aspirational_Status", 8), ("Social_Climber", 7)],
        ),
        cue(
            "nicotine_stains_fingers",
            &[("High_Anxiety", 7), ("Addiction_Prone", 8)],
        ),
        cue(
            "asymmetric_muscle_development",
            &[("Specialized_Labor", 7), ("Sports_Professional", 6)],
        ),
        cue(
            "teeth_grinding_wear",
            &[("Chronic_Stress", 8), ("Sleep_Disorder", 6)],
        ),
        cue(
            "bitten_nails",
            &[("Anxiety_Disorder", 7), ("Nervous_Habit", 8)],
        ),
        cue(
            "ink_stains_specific_fingers",
            &[("Writer", 8), ("Artist", 6), ("Forger", 5)],
        ),
        cue(
            "calloused_knees",
            &[("Religious_Practice", 7), ("Manual_Labor", 5)],
        ),
    ]
}

fn behavioral_cluster_entries() -> Vec<CueEntry> {
    vec![
        cue(
            "peripheral_scanning",
            &[("Hyper_Vigilance", 9), ("Security", 8)],
        ),
        cue(
            "ventral_shielding_low",
            &[("Fear_Response", 8), ("Lying", 6)],
        ),
        cue(
            "ventral_shielding_high",
            &[("Defiance", 7), ("Stubbornness", 8)],
        ),
        cue(
            "feet_pointing_exit",
            &[("Desire_To_Escape", 10), ("Disinterest", 9)],
        ),
        cue(
            "neck_pacifying_touch",
            &[("High_Stress", 9), ("Deception", 6)],
        ),
        cue(
            "micro_expression_contempt",
            &[("Hostility", 10), ("Relationship_Danger", 9)],
        ),
        cue(
            "lack_of_startle_response",
            &[("Psychopathy", 8), ("High_Training", 7)],
        ),
        cue("hand_steepling", &[("Confidence", 8), ("Dominance", 7)]),
        cue(
            "ankle_locking",
            &[("Defensive_Posture", 7), ("Withholding_Info", 8)],
        ),
        cue("ventral_denial", &[("Disagreement", 9), ("Rejection", 8)]),
        cue("eye_blocking", &[("Disbelief", 8), ("Stress", 7)]),
        cue(
            "lip_compression",
            &[("Anger_Suppression", 9), ("Disagreement", 8)],
        ),
    ]
}

fn micro_expression_entries() -> Vec<CueEntry> {
    vec![
        cue(
            "unilateral_lip_curl",
            &[("Contempt", 10), ("Superiority_Complex", 9)],
        ),
        cue(
            "flash_fear_eyes",
            &[("Genuine_Fear", 9), ("Trauma_Trigger", 8)],
        ),
        cue(
            "flash_disgust_nose",
            &[("Moral_Disgust", 8), ("Physical_Repulsion", 7)],
        ),
        cue(
            "asymmetric_smile",
            &[("Fake_Happiness", 9), ("Social_Masking", 8)],
        ),
        cue(
            "eyebrow_flash_surprise",
            &[("Genuine_Surprise", 9), ("Recognition", 7)],
        ),
        cue(
            "duchenne_smile",
            &[("Genuine_Joy", 10), ("Authentic_Pleasure", 9)],
        ),
        cue("partial_shrug", &[("Uncertainty", 7), ("Deception", 8)]),
        cue("nose_wrinkle", &[("Disgust", 9), ("Aversion", 8)]),
        cue("chin_raise", &[("Pride", 7), ("Defiance", 8)]),
    ]
}

fn forensic_linguistic_entries() -> Vec<CueEntry> {
    vec![
        cue(
            "past_tense_present_event",
            &[("Deception", 10), ("Distancing", 9)],
        ),
        cue(
            "excessive_detail_irrelevant",
            &[("Overcompensation", 8), ("Rehearsed_Story", 9)],
        ),
        cue(
            "pronoun_avoidance",
            &[("Deception", 9), ("Denial_Of_Involvement", 8)],
        ),
        cue(
            "verb_tense_inconsistency",
            &[("Fabrication", 9), ("Memory_Construction", 7)],
        ),
        cue(
            "spontaneous_corrections",
            &[("Truth_Telling", 8), ("Genuine_Memory", 7)],
        ),
        cue(
            "admission_lack_memory",
            &[("Honesty", 9), ("Authentic_Recall", 8)],
        ),
        cue(
            "unusual_word_choice",
            &[("Deception", 7), ("Scripted_Response", 8)],
        ),
        cue(
            "denial_before_accusation",
            &[("Guilty_Conscience", 10), ("Preemptive_Defense", 9)],
        ),
        cue(
            "non_contracted_denial",
            &[("Formal_Lying", 9), ("Emphatic_Deception", 8)],
        ),
        cue("complaint_language", &[("Deception", 6), ("Deflection", 7)]),
        cue(
            "negative_statement_excess",
            &[("Deception", 7), ("Emotional_Distress", 6)],
        ),
        cue(
            "minimal_self_reference",
            &[("Deceptive_Distancing", 8), ("Low_Commitment", 7)],
        ),
        cue(
            "shorter_response_length",
            &[("Deception", 7), ("Information_Withholding", 8)],
        ),
        cue(
            "answering_with_question",
            &[("Stalling_Tactic", 8), ("Evasion", 9)],
        ),
        cue(
            "temporal_sequencing_error",
            &[("False_Memory", 8), ("Fabrication", 9)],
        ),
    ]
}

fn vocal_marker_entries() -> Vec<CueEntry> {
    vec![
        cue("voice_pitch_elevation", &[("Stress", 8), ("Deception", 7)]),
        cue("speech_rate_increase", &[("Anxiety", 7), ("Excitement", 6)]),
        cue(
            "speech_rate_decrease",
            &[("Careful_Fabrication", 8), ("Depression", 6)],
        ),
        cue("vocal_tremor", &[("Fear", 9), ("Emotional_Distress", 8)]),
        cue(
            "speech_disfluency",
            &[("Cognitive_Load", 8), ("Deception", 7)],
        ),
        cue(
            "latency_increase",
            &[("Fabrication", 8), ("Cognitive_Processing", 6)],
        ),
    ]
}

fn dark_triad_entries() -> Vec<CueEntry> {
    vec![
        cue(
            "love_bombing_speech",
            &[("Narcissism", 9), ("Manipulator", 8)],
        ),
        cue(
            "superficial_charm",
            &[("Psychopathy", 7), ("Narcissism", 8)],
        ),
        cue(
            "victim_signaling",
            &[("Covert_Narcissism", 8), ("Machiavellianism", 7)],
        ),
        cue(
            "lack_empathy_verbal",
            &[("Psychopathy", 10), ("Antisocial", 9)],
        ),
        cue(
            "grandiose_statements",
            &[("Narcissism", 9), ("Superiority_Complex", 8)],
        ),
        cue(
            "manipulation_language",
            &[("Machiavellianism", 10), ("Dark_Persuasion", 9)],
        ),
        cue(
            "blame_shifting",
            &[("Narcissism", 8), ("Accountability_Avoidance", 7)],
        ),
    ]
}

fn standard_context_filters() -> Vec<ContextFilter> {
    vec![
        filter(
            "high_temperature",
            &[("High_Stress", -5), ("Fear_Response", -4), ("Anxiety", -3)],
        ),
        filter("formal_event", &[("Military", 3), ("High_Status", 2)]),
        filter("medical_setting", &[("Medical", 5), ("Anxiety", 4)]),
        filter("first_date", &[("Anxiety", -3), ("High_Stress", -2)]),
        filter("job_interview", &[("Anxiety", -4), ("High_Stress", -3)]),
        filter("court_setting", &[("Anxiety", -3), ("Deception", 2)]),
        filter(
            "police_interrogation",
            &[("High_Stress", -4), ("Fear_Response", -3)],
        ),
    ]
}
