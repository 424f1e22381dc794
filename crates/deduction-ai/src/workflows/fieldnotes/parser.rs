use super::normalizer::normalize_marker;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct FieldNoteRecord {
    pub(crate) normalized_marker: String,
    pub(crate) is_context: bool,
    pub(crate) noted_at: Option<NaiveDateTime>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<FieldNoteRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<FieldNoteRow>() {
        let row = record?;
        let normalized_marker = normalize_marker(&row.marker);
        if normalized_marker.is_empty() {
            continue;
        }

        records.push(FieldNoteRecord {
            normalized_marker,
            is_context: row.is_context(),
            noted_at: row.noted_timestamp(),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct FieldNoteRow {
    #[serde(rename = "Marker")]
    marker: String,
    #[serde(rename = "Kind", default, deserialize_with = "empty_string_as_none")]
    kind: Option<String>,
    #[serde(rename = "Noted At", default, deserialize_with = "empty_string_as_none")]
    noted_at: Option<String>,
}

impl FieldNoteRow {
    fn is_context(&self) -> bool {
        self.kind
            .as_deref()
            .map(|kind| kind.eq_ignore_ascii_case("context"))
            .unwrap_or(false)
    }

    fn noted_timestamp(&self) -> Option<NaiveDateTime> {
        self.noted_at.as_deref().and_then(parse_datetime)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|text| !text.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|stamp| stamp.naive_utc())
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}
