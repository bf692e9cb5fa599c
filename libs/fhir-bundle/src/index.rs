//! Entry index: `type -> id -> position` plus `fullUrl -> position`.

use ferrite_models::r5::BundleEntry;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub(crate) struct EntryIndex {
    by_type: HashMap<String, HashMap<String, usize>>,
    by_full_url: HashMap<String, usize>,
}

impl EntryIndex {
    /// Indexes `entries`; on duplicates the earliest entry wins.
    pub(crate) fn build(entries: &[BundleEntry]) -> Self {
        let mut index = Self::default();
        for (position, entry) in entries.iter().enumerate() {
            index.insert(position, entry);
        }

        tracing::debug!(
            entries = entries.len(),
            types = index.by_type.len(),
            full_urls = index.by_full_url.len(),
            "built bundle index"
        );
        index
    }

    /// Records the entry at `position`. Keys already present keep their
    /// earlier position.
    pub(crate) fn insert(&mut self, position: usize, entry: &BundleEntry) {
        if let Some(full_url) = entry.full_url.as_deref() {
            if self.by_full_url.contains_key(full_url) {
                tracing::warn!(full_url, position, "duplicate fullUrl in bundle, keeping first");
            } else {
                self.by_full_url.insert(full_url.to_string(), position);
            }
        }

        let Some(resource) = entry.resource.as_ref() else {
            return;
        };
        let Some(id) = resource.id() else {
            return;
        };
        let resource_type = resource.resource_type();
        let ids = self.by_type.entry(resource_type.to_string()).or_default();
        if ids.contains_key(id) {
            tracing::warn!(
                resource_type,
                id,
                position,
                "duplicate resource identity in bundle, keeping first"
            );
        } else {
            ids.insert(id.to_string(), position);
        }
    }

    pub(crate) fn by_identity(&self, resource_type: &str, id: &str) -> Option<usize> {
        self.by_type.get(resource_type)?.get(id).copied()
    }

    pub(crate) fn by_full_url(&self, full_url: &str) -> Option<usize> {
        self.by_full_url.get(full_url).copied()
    }

    pub(crate) fn has_full_url(&self, full_url: &str) -> bool {
        self.by_full_url.contains_key(full_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrite_models::r5::{Observation, Patient};

    fn entry(resource: impl Into<ferrite_models::AnyResource>, full_url: Option<&str>) -> BundleEntry {
        let entry = BundleEntry::new(resource);
        match full_url {
            Some(url) => entry.with_full_url(url),
            None => entry,
        }
    }

    #[test]
    fn first_entry_wins() {
        let entries = vec![
            entry(Patient::new("a"), Some("urn:uuid:0c3151bd-1cbf-4d64-b04d-cd9187a4c6e0")),
            entry(Patient::new("a"), Some("urn:uuid:0c3151bd-1cbf-4d64-b04d-cd9187a4c6e0")),
        ];
        let index = EntryIndex::build(&entries);
        assert_eq!(index.by_identity("Patient", "a"), Some(0));
        assert_eq!(
            index.by_full_url("urn:uuid:0c3151bd-1cbf-4d64-b04d-cd9187a4c6e0"),
            Some(0)
        );
    }

    #[test]
    fn types_are_separate_namespaces() {
        let mut obs = Observation::default();
        obs.id = Some("a".into());
        let entries = vec![entry(Patient::new("a"), None), entry(obs, None)];
        let index = EntryIndex::build(&entries);
        assert_eq!(index.by_identity("Patient", "a"), Some(0));
        assert_eq!(index.by_identity("Observation", "a"), Some(1));
        assert_eq!(index.by_identity("Encounter", "a"), None);
    }

    #[test]
    fn insert_extends_a_built_index() {
        let entries = vec![entry(Patient::new("a"), None)];
        let mut index = EntryIndex::build(&entries);

        index.insert(1, &entry(Patient::new("b"), Some("urn:oid:1.2.3.4")));
        index.insert(2, &entry(Patient::new("a"), Some("urn:oid:1.2.3.4")));
        assert_eq!(index.by_identity("Patient", "a"), Some(0));
        assert_eq!(index.by_identity("Patient", "b"), Some(1));
        assert_eq!(index.by_full_url("urn:oid:1.2.3.4"), Some(1));
    }

    #[test]
    fn entries_without_resource_or_id_are_skipped() {
        let entries = vec![
            BundleEntry::default(),
            entry(Patient::default(), Some("http://example.org/fhir/Patient/x")),
        ];
        let index = EntryIndex::build(&entries);
        assert_eq!(index.by_type.len(), 0);
        assert!(index.has_full_url("http://example.org/fhir/Patient/x"));
    }
}
