mod mapping;
mod normalizer;
mod parser;

use crate::workflows::profiling::SubjectObservation;
use std::io::Read;
use std::path::Path;

use parser::FieldNoteRecord;

/// Field-note sheet import failure.
#[derive(Debug, thiserror::Error)]
pub enum FieldNoteImportError {
    #[error("failed to read field notes: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid field note CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Builds a [`SubjectObservation`] from a CSV observation sheet.
///
/// Expected columns: `Marker` (required), `Kind` (optional; `context` marks a
/// context tag), `Noted At` (optional RFC3339 or `YYYY-MM-DD` timestamp).
pub struct FieldNoteImporter;

impl FieldNoteImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<SubjectObservation, FieldNoteImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<SubjectObservation, FieldNoteImportError> {
        let mut records = parser::parse_records(reader)?;
        // Timestamped rows sort chronologically; undated rows keep sheet
        // order at the end.
        records.sort_by_key(|record| (record.noted_at.is_none(), record.noted_at));

        let mut observation = SubjectObservation::default();
        for record in records {
            let marker = resolve_marker(&record);
            if record.is_context {
                observation.context_tags.push(marker);
            } else {
                observation.observed_cues.push(marker);
            }
        }

        Ok(observation)
    }
}

fn resolve_marker(record: &FieldNoteRecord) -> String {
    match mapping::marker_for_normalized(&record.normalized_marker) {
        Some(canonical) => canonical.to_string(),
        None => record.normalized_marker.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    #[test]
    fn parse_datetime_accepts_rfc3339_and_bare_dates() {
        let rfc = parser::parse_datetime_for_tests("2026-03-14T09:30:00Z").expect("parse rfc");
        assert_eq!(
            rfc,
            NaiveDate::from_ymd_opt(2026, 3, 14)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
        );

        let date = parser::parse_datetime_for_tests("2026-03-20").expect("parse date");
        assert_eq!(
            date,
            NaiveDate::from_ymd_opt(2026, 3, 20)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );

        assert!(parser::parse_datetime_for_tests("  ").is_none());
        assert!(parser::parse_datetime_for_tests("last tuesday").is_none());
    }

    #[test]
    fn normalize_marker_strips_noise_and_joins_words() {
        let source = "\u{feff}Watch  Face  Turned  Inward";
        let normalized = normalizer::normalize_for_tests(source);
        assert_eq!(normalized, "watch_face_turned_inward");
    }

    #[test]
    fn field_note_row_detects_context_kind() {
        let records = parser::parse_records(Cursor::new(
            "Marker,Kind,Noted At\nInterview,Context,2026-03-14T09:30:00Z\nSteepled hands,cue,\n",
        ))
        .expect("parse");

        assert_eq!(records.len(), 2);
        assert!(records[0].is_context);
        assert!(records[0].noted_at.is_some());
        assert!(!records[1].is_context);
        assert!(records[1].noted_at.is_none());
    }

    #[test]
    fn importer_resolves_alias_labels() {
        let csv = "Marker,Kind,Noted At\n\
Watch face turned inward,,\n\
Nails cut short and square,,\n";
        let observation =
            FieldNoteImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(
            observation.observed_cues,
            vec!["inward_watch_face", "tactical_nail_cut"]
        );
        assert!(observation.context_tags.is_empty());
    }

    #[test]
    fn importer_routes_context_rows() {
        let csv = "Marker,Kind,Noted At\n\
Eyes sweeping the room,,\n\
Interview,context,\n";
        let observation =
            FieldNoteImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(observation.observed_cues, vec!["peripheral_scanning"]);
        assert_eq!(observation.context_tags, vec!["job_interview"]);
    }

    #[test]
    fn importer_keeps_unknown_markers() {
        let csv = "Marker,Kind,Noted At\nUnusual  Gait,,\n";
        let observation =
            FieldNoteImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(observation.observed_cues, vec!["unusual_gait"]);
    }

    #[test]
    fn importer_orders_rows_by_timestamp() {
        let csv = "Marker,Kind,Noted At\n\
Past tense slip,,2026-03-14T10:00:00Z\n\
Undated marker,,\n\
Steepled hands,,2026-03-14T08:00:00Z\n";
        let observation =
            FieldNoteImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(
            observation.observed_cues,
            vec![
                "hand_steepling",
                "past_tense_present_event",
                "undated_marker"
            ]
        );
    }

    #[test]
    fn from_path_surfaces_io_errors() {
        let error =
            FieldNoteImporter::from_path("./does-not-exist.csv").expect_err("expected io error");

        assert!(matches!(error, FieldNoteImportError::Io(_)));
    }

    #[test]
    fn mapping_recognizes_shorthand_labels() {
        assert_eq!(
            mapping::lookup_for_tests("Watch face turned inward"),
            Some("inward_watch_face")
        );
        assert_eq!(
            mapping::lookup_for_tests("Feet aimed at the door"),
            Some("feet_pointing_exit")
        );
        assert_eq!(
            mapping::lookup_for_tests("Luxury wristwatch"),
            Some("expensive_watch")
        );
        assert_eq!(mapping::lookup_for_tests("Interview"), Some("job_interview"));
        assert_eq!(mapping::lookup_for_tests("Unmapped label"), None);
    }
}
