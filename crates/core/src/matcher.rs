//! Condition matcher.
//!
//! Derives which catalog regions are "active" from free-text medical records. Matching is
//! literal: a region is associated with a record when any of its keywords is a substring of
//! the record's lowercase haystack. One heuristic sits on top: a record mentioning "leg"
//! without "thigh", "calf" or "knee" is fanned out to thighs, knees and calves.
//!
//! The result is rebuilt from scratch on every call and the function never fails.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::constants::{
    DEFAULT_SNIPPET_MAX_CHARS, GENERAL_LEG_SNIPPET, LEG_FANOUT_REGIONS, LEG_TERM,
    SNIPPET_ELLIPSIS, SPECIFIC_LEG_TERMS,
};
use crate::records::MedicalRecordRef;

/// Region id to the condition snippets found for it.
///
/// A region is present only if it has at least one snippet; absence means healthy. Snippets
/// keep first-encountered record order and never repeat exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivationMap(BTreeMap<&'static str, Vec<String>>);

impl ActivationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, region_id: &str) -> Option<&[String]> {
        self.0.get(region_id).map(Vec::as_slice)
    }

    /// Snippets for `region_id`, empty when the region is healthy.
    pub fn snippets(&self, region_id: &str) -> &[String] {
        self.get(region_id).unwrap_or(&[])
    }

    pub fn is_active(&self, region_id: &str) -> bool {
        self.0.contains_key(region_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Active region ids in sorted order.
    pub fn region_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        self.0.iter().map(|(id, snippets)| (*id, snippets.as_slice()))
    }

    fn push_unique(&mut self, region_id: &'static str, snippet: &str) {
        let snippets = self.0.entry(region_id).or_default();
        if !snippets.iter().any(|s| s == snippet) {
            snippets.push(snippet.to_owned());
        }
    }
}

/// Matches records against a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionMatcher {
    snippet_max_chars: usize,
}

impl ConditionMatcher {
    pub fn new(snippet_max_chars: usize) -> Self {
        Self { snippet_max_chars }
    }

    pub fn snippet_max_chars(&self) -> usize {
        self.snippet_max_chars
    }

    /// Builds the activation map for `records` over `catalog`.
    pub fn match_records(&self, records: &[MedicalRecordRef], catalog: &Catalog) -> ActivationMap {
        let mut map = ActivationMap::new();

        for record in records {
            let haystack = record.haystack();
            let snippet = self.snippet(record);

            for region in catalog.regions() {
                if region.keywords.iter().any(|k| haystack.contains(k)) {
                    map.push_unique(region.id, &snippet);
                }
            }

            if fans_out_to_legs(&haystack) {
                for region_id in LEG_FANOUT_REGIONS {
                    if let Some(region) = catalog.get(region_id) {
                        map.push_unique(region.id, GENERAL_LEG_SNIPPET);
                    }
                }
            }
        }

        tracing::debug!(
            records = records.len(),
            active_regions = map.len(),
            gender = %catalog.gender(),
            "rebuilt activation map"
        );
        map
    }

    /// The text shown for `record` under a region.
    ///
    /// The summary, cut to the character limit with an ellipsis when longer; the title when
    /// the summary is missing or empty.
    pub fn snippet(&self, record: &MedicalRecordRef) -> String {
        match record.summary.as_deref() {
            Some(summary) if !summary.is_empty() => {
                truncate_with_ellipsis(summary, self.snippet_max_chars)
            }
            _ => record.title.clone(),
        }
    }
}

impl Default for ConditionMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SNIPPET_MAX_CHARS)
    }
}

/// Builds the activation map with the default snippet limit.
pub fn match_records(records: &[MedicalRecordRef], catalog: &Catalog) -> ActivationMap {
    ConditionMatcher::default().match_records(records, catalog)
}

fn fans_out_to_legs(haystack: &str) -> bool {
    haystack.contains(LEG_TERM) && !SPECIFIC_LEG_TERMS.iter().any(|t| haystack.contains(t))
}

fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], SNIPPET_ELLIPSIS),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSet;
    use bodymap_types::Gender;

    fn record(title: &str, summary: &str) -> MedicalRecordRef {
        MedicalRecordRef::new(title).with_summary(summary)
    }

    fn male() -> Catalog {
        Catalog::new(Gender::Male)
    }

    #[test]
    fn test_specific_knee_suppresses_leg_fan_out() {
        let records = vec![record("Sore Knee", "Left leg knee pain after running.")];
        let map = match_records(&records, &male());

        assert_eq!(map.snippets("knees"), ["Left leg knee pain after running."]);
        assert!(!map.is_active("thighs"));
        assert!(!map.is_active("calves"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_generic_leg_fans_out() {
        let records = vec![record("Leg Ache", "General leg soreness.")];
        let map = match_records(&records, &male());

        let ids: Vec<_> = map.region_ids().collect();
        assert_eq!(ids, vec!["calves", "knees", "thighs"]);
        for id in ids {
            assert_eq!(map.snippets(id), [GENERAL_LEG_SNIPPET]);
        }
    }

    #[test]
    fn test_leg_fan_out_is_deduplicated_across_records() {
        let records = vec![
            record("Leg pain", "leg pain at night"),
            record("Leg pain again", "leg pain in the morning"),
        ];
        let map = match_records(&records, &male());

        let ids: Vec<_> = map.region_ids().collect();
        assert_eq!(ids, vec!["calves", "knees", "thighs"]);
        assert_eq!(map.snippets("knees"), [GENERAL_LEG_SNIPPET]);
    }

    #[test]
    fn test_snippet_truncates_long_summary() {
        let long = "Patient reports frequent headaches (Migraine) triggered by stress.";
        let records = vec![record("Occasional Migraines", long)];
        let map = match_records(&records, &male());

        let expected = format!("{}...", &long[..50]);
        assert_eq!(map.snippets("head"), [expected]);
    }

    #[test]
    fn test_snippet_falls_back_to_title() {
        let matcher = ConditionMatcher::default();
        assert_eq!(matcher.snippet(&MedicalRecordRef::new("Asthma review")), "Asthma review");
        assert_eq!(
            matcher.snippet(&MedicalRecordRef::new("Asthma review").with_summary("")),
            "Asthma review"
        );
    }

    #[test]
    fn test_snippet_truncation_respects_char_boundaries() {
        let matcher = ConditionMatcher::new(3);
        let snippet = matcher.snippet(&MedicalRecordRef::new("t").with_summary("ééééé"));
        assert_eq!(snippet, "ééé...");
        let exact = matcher.snippet(&MedicalRecordRef::new("t").with_summary("abc"));
        assert_eq!(exact, "abc");
    }

    #[test]
    fn test_identical_snippets_are_deduplicated_near_duplicates_kept() {
        let records = vec![
            record("Heart check", "Atrial flutter"),
            record("Heart check 2", "Atrial flutter"),
            record("Heart check 3", "atrial flutter"),
        ];
        let map = match_records(&records, &male());
        assert_eq!(map.snippets("heart"), ["Atrial flutter", "atrial flutter"]);
    }

    #[test]
    fn test_snippet_order_follows_records() {
        let records = vec![
            MedicalRecordRef::new("Coronary angiogram"),
            MedicalRecordRef::new("Cardio rehab"),
        ];
        let map = match_records(&records, &male());
        assert_eq!(map.snippets("heart"), ["Coronary angiogram", "Cardio rehab"]);
    }

    #[test]
    fn test_matches_category_and_free_text() {
        let records = vec![
            MedicalRecordRef::new("Follow-up").with_category("Hepatic panel"),
            MedicalRecordRef::new("Note").with_free_text("Suspected DVT in left calf"),
        ];
        let map = match_records(&records, &male());
        assert_eq!(map.snippets("liver"), ["Follow-up"]);
        assert_eq!(map.snippets("veins"), ["Note"]);
        assert_eq!(map.snippets("calves"), ["Note"]);
    }

    #[test]
    fn test_empty_inputs_yield_empty_map() {
        assert!(match_records(&[], &male()).is_empty());
        let blank = vec![MedicalRecordRef::default(), MedicalRecordRef::new("")];
        assert!(match_records(&blank, &male()).is_empty());
    }

    #[test]
    fn test_keyword_shared_by_regions_activates_both() {
        let records = vec![MedicalRecordRef::new("Brain MRI")];
        let map = match_records(&records, &male());
        assert!(map.is_active("head"));
        assert!(map.is_active("brain"));
    }

    #[test]
    fn test_result_is_gender_invariant() {
        let set = CatalogSet::new();
        let records = crate::records::demo_records();
        assert_eq!(
            match_records(&records, set.get(Gender::Male)),
            match_records(&records, set.get(Gender::Female))
        );
    }

    #[test]
    fn test_adding_records_never_removes_activation() {
        let catalog = male();
        let mut records = Vec::new();
        let mut previous = match_records(&records, &catalog);
        let additions = [
            record("Sore Knee", "Left leg knee pain after running."),
            record("Leg Ache", "General leg soreness."),
            MedicalRecordRef::new("Asthma"),
            record("Leg Ache", "General leg soreness."),
            MedicalRecordRef::new("Stroke follow-up").with_category("Neuro"),
        ];

        for addition in additions {
            records.push(addition);
            let next = match_records(&records, &catalog);
            for (id, snippets) in previous.iter() {
                let now = next.snippets(id);
                assert_eq!(&now[..snippets.len()], snippets, "region {id} lost evidence");
            }
            previous = next;
        }
    }

    #[test]
    fn test_every_association_is_keyword_backed_or_leg_fan_out() {
        let catalog = male();
        let matcher = ConditionMatcher::default();
        let records = crate::records::demo_records()
            .into_iter()
            .chain([
                record("Leg Ache", "General leg soreness."),
                MedicalRecordRef::new("Blood panel").with_free_text("thyroid"),
            ])
            .collect::<Vec<_>>();
        let map = matcher.match_records(&records, &catalog);

        for (id, snippets) in map.iter() {
            let region = catalog.get(id).unwrap();
            for snippet in snippets {
                let backed = records.iter().any(|r| {
                    let haystack = r.haystack();
                    matcher.snippet(r) == *snippet
                        && region.keywords.iter().any(|k| haystack.contains(k))
                });
                let fanned = snippet == GENERAL_LEG_SNIPPET && LEG_FANOUT_REGIONS.contains(&id);
                assert!(backed || fanned, "phantom association {id}: {snippet}");
            }
        }
    }

    #[test]
    fn test_demo_records_activate_expected_regions() {
        let map = match_records(&crate::records::demo_records(), &male());
        assert!(map.is_active("head"));
        assert!(map.is_active("heart"));
        assert!(map.is_active("knees"));
        assert!(!map.is_active("thighs"));
    }
}
