use super::normalizer::normalize_marker;
use std::collections::HashMap;
use std::sync::OnceLock;

static FIELD_NOTE_ALIAS_MAP: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

pub(crate) fn marker_for_normalized(normalized_label: &str) -> Option<&'static str> {
    field_note_alias_map().get(normalized_label).copied()
}

fn field_note_alias_map() -> &'static HashMap<String, &'static str> {
    FIELD_NOTE_ALIAS_MAP.get_or_init(|| {
        const LABEL_TO_MARKER: &[(&str, &str)] = &[
            // Physical markers
            ("Watch face turned inward", "inward_watch_face"),
            ("Inward facing watch", "inward_watch_face"),
            ("Nails cut short and square", "tactical_nail_cut"),
            ("Tactical nail trim", "tactical_nail_cut"),
            ("Calloused trigger finger", "callous_index_finger"),
            ("Writer's bump", "writer_bump_middle_finger"),
            ("Pale band where a watch was", "watch_tan_line_empty"),
            ("Missing watch tan line", "watch_tan_line_empty"),
            ("Stained smoking fingers", "nicotine_stains_fingers"),
            ("Ground down teeth", "teeth_grinding_wear"),
            ("Chewed nails", "bitten_nails"),
            ("Ink stained fingers", "ink_stains_specific_fingers"),
            ("Prayer callouses", "calloused_knees"),
            // Behavioral clusters
            ("Eyes sweeping the room", "peripheral_scanning"),
            ("Constant room scanning", "peripheral_scanning"),
            ("Feet aimed at the door", "feet_pointing_exit"),
            ("Feet turned to the exit", "feet_pointing_exit"),
            ("Touching the neck", "neck_pacifying_touch"),
            ("Neck rubbing", "neck_pacifying_touch"),
            ("Steepled hands", "hand_steepling"),
            ("Fingertip steeple", "hand_steepling"),
            ("Locked ankles", "ankle_locking"),
            ("No startle reaction", "lack_of_startle_response"),
            ("Flash of contempt", "micro_expression_contempt"),
            // Micro-expressions
            ("One sided smile", "asymmetric_smile"),
            ("Crooked smile", "asymmetric_smile"),
            ("Smile reaching the eyes", "duchenne_smile"),
            ("Eye crinkle smile", "duchenne_smile"),
            ("Half shrug", "partial_shrug"),
            ("Fear flash in the eyes", "flash_fear_eyes"),
            // Forensic linguistics
            ("Past tense slip", "past_tense_present_event"),
            ("Talks about now in past tense", "past_tense_present_event"),
            ("Self corrections while recalling", "spontaneous_corrections"),
            ("Drops personal pronouns", "pronoun_avoidance"),
            ("Answers questions with questions", "answering_with_question"),
            // Vocal markers
            ("Rising vocal pitch", "voice_pitch_elevation"),
            ("Higher pitch than baseline", "voice_pitch_elevation"),
            ("Rapid speech", "speech_rate_increase"),
            ("Trembling voice", "vocal_tremor"),
            // Incongruence-only cues
            ("Luxury wristwatch", "expensive_watch"),
            ("Worn shirt collar", "frayed_collar"),
            ("Steady voice", "calm_voice"),
            ("Trembling hands", "shaking_hands"),
            // Context tags
            ("Formal function", "formal_event"),
            ("Black tie event", "formal_event"),
            ("Hospital visit", "medical_setting"),
            ("Doctor's office", "medical_setting"),
            ("Interview", "job_interview"),
            ("Hiring interview", "job_interview"),
            ("Hot room", "high_temperature"),
            ("Sweltering room", "high_temperature"),
            ("Courtroom", "court_setting"),
            ("Interrogation room", "police_interrogation"),
            ("Date night", "first_date"),
        ];

        LABEL_TO_MARKER
            .iter()
            .map(|(label, marker)| (normalize_marker(label), *marker))
            .collect()
    })
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(label: &str) -> Option<&'static str> {
    marker_for_normalized(&normalize_marker(label))
}
