use std::collections::{BTreeMap, BTreeSet};

use super::super::library::CueLibrary;

/// Sum weight contributions for every observed cue across the category tables.
///
/// Cues absent from every table contribute nothing. The returned map holds the
/// profiles touched here and nothing else; context filters never add entries.
pub(crate) fn score_observed_cues(
    library: &CueLibrary,
    observed: &BTreeSet<&str>,
) -> BTreeMap<&'static str, i16> {
    let mut scores = BTreeMap::new();

    for table in library.categories() {
        for entry in &table.entries {
            if !observed.contains(entry.key) {
                continue;
            }

            for weight in &entry.weights {
                *scores.entry(weight.profile).or_insert(0) += weight.weight;
            }
        }
    }

    scores
}

/// Apply context modifiers in tag order, once per occurrence.
///
/// Only profiles already present in the score map are adjusted, and each
/// adjustment clamps the score back to zero before the next one runs.
/// Tags missing from the filter table are ignored.
pub(crate) fn apply_context_filters(
    library: &CueLibrary,
    context_tags: &[String],
    scores: &mut BTreeMap<&'static str, i16>,
) {
    for tag in context_tags {
        if let Some(filter) = library.context_filter(tag) {
            for adjustment in &filter.adjustments {
                if let Some(score) = scores.get_mut(adjustment.profile) {
                    *score = (*score + adjustment.weight).max(0);
                }
            }
        }
    }
}
