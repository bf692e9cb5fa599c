use crate::contained::ContainedIndex;
use crate::error::{BundleError, Result};
use crate::index::EntryIndex;
use ferrite_models::r5::{
    Bundle, BundleEntry, Condition, Encounter, Observation, Organization, Patient, Practitioner,
};
use ferrite_models::{parse_reference, AnyResource, ReferenceKind, TypedResource};
use std::sync::OnceLock;
use url::Url;

/// A Bundle together with a lazily built index over its entries.
#[derive(Debug)]
pub struct BundleHelper {
    bundle: Bundle,
    index: OnceLock<EntryIndex>,
}

impl BundleHelper {
    pub fn new(bundle: Bundle) -> Self {
        Self {
            bundle,
            index: OnceLock::new(),
        }
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    pub fn into_bundle(self) -> Bundle {
        self.bundle
    }

    /// Appends an entry. A `full_url` already present in the bundle is rejected.
    ///
    /// A built index is extended in place rather than rebuilt.
    pub fn add_entry(
        &mut self,
        resource: impl Into<AnyResource>,
        full_url: Option<&str>,
    ) -> Result<&BundleEntry> {
        if let Some(url) = full_url {
            if self.index().has_full_url(url) {
                return Err(BundleError::DuplicateFullUrl(url.to_string()));
            }
        }

        let mut entry = BundleEntry::new(resource);
        entry.full_url = full_url.map(str::to_string);
        self.bundle.entry.push(entry);

        let position = self.bundle.entry.len() - 1;
        let entry = &self.bundle.entry[position];
        if let Some(index) = self.index.get_mut() {
            index.insert(position, entry);
        }
        Ok(entry)
    }

    pub fn count(&self) -> usize {
        self.bundle.entry.len()
    }

    pub fn entries(&self) -> &[BundleEntry] {
        &self.bundle.entry
    }

    /// Entries matching `predicate`, in bundle order.
    pub fn find_entries<F>(&self, predicate: F) -> Vec<&BundleEntry>
    where
        F: Fn(&BundleEntry) -> bool,
    {
        self.bundle.entry.iter().filter(|e| predicate(e)).collect()
    }

    pub fn get_entry_by_id(&self, resource_type: &str, id: &str) -> Option<&BundleEntry> {
        self.index()
            .by_identity(resource_type, id)
            .map(|position| &self.bundle.entry[position])
    }

    /// The first resource in the bundle with this type and id.
    pub fn get_resource_by_id(&self, resource_type: &str, id: &str) -> Option<&AnyResource> {
        self.get_entry_by_id(resource_type, id)
            .and_then(|entry| entry.resource.as_ref())
    }

    pub fn get_entry_by_full_url(&self, full_url: &str) -> Option<&BundleEntry> {
        self.index()
            .by_full_url(full_url)
            .map(|position| &self.bundle.entry[position])
    }

    /// Finds the entry a reference denotes.
    ///
    /// Anything with a URI scheme (`urn:uuid:`, `urn:oid:`, `http:`, ...)
    /// matches `fullUrl` exactly. `Type/id` matches the resource identity,
    /// falling back to an identical `fullUrl`; a `/_history/vid` suffix also
    /// requires `meta.versionId == vid`. Local `#id` references need a
    /// container and resolve to `None` here; see
    /// [`resolve_in`](Self::resolve_in).
    pub fn resolve_reference(&self, reference: &str) -> Result<Option<&BundleEntry>> {
        if has_scheme(reference) {
            return Ok(self.get_entry_by_full_url(reference));
        }

        let kind = parse_reference(reference).map_err(|source| BundleError::MalformedReference {
            reference: reference.to_string(),
            source,
        })?;

        let entry = match kind {
            ReferenceKind::Absolute(_) | ReferenceKind::Uuid(_) => {
                self.get_entry_by_full_url(reference)
            }
            ReferenceKind::Relative {
                resource_type,
                id,
                version,
            } => self
                .get_entry_by_id(resource_type, id)
                .filter(|entry| version.is_none() || version_of(entry) == version)
                .or_else(|| self.get_entry_by_full_url(reference)),
            ReferenceKind::Contained(_) => None,
        };
        Ok(entry)
    }

    /// Resolves `reference` as seen from `container`: `#id` against its
    /// contained resources, `#` to the container itself, anything else
    /// through the bundle.
    pub fn resolve_in<'a>(
        &'a self,
        container: &'a AnyResource,
        reference: &str,
    ) -> Result<Option<&'a AnyResource>> {
        match reference {
            "#" => Ok(Some(container)),
            local if local.starts_with('#') => Ok(ContainedIndex::new(container).resolve(local)),
            _ => Ok(self
                .resolve_reference(reference)?
                .and_then(|entry| entry.resource.as_ref())),
        }
    }

    /// Resources of `resource_type`, in bundle order.
    pub fn get_resources_by_type(&self, resource_type: &str) -> Vec<&AnyResource> {
        self.resources()
            .filter(|r| r.resource_type() == resource_type)
            .collect()
    }

    /// Typed view of every resource of type `T`, in bundle order.
    pub fn resources_of<T: TypedResource>(&self) -> Vec<&T> {
        self.resources().filter_map(T::from_any).collect()
    }

    pub fn patients(&self) -> Vec<&Patient> {
        self.resources_of()
    }

    pub fn observations(&self) -> Vec<&Observation> {
        self.resources_of()
    }

    pub fn encounters(&self) -> Vec<&Encounter> {
        self.resources_of()
    }

    pub fn conditions(&self) -> Vec<&Condition> {
        self.resources_of()
    }

    pub fn practitioners(&self) -> Vec<&Practitioner> {
        self.resources_of()
    }

    pub fn organizations(&self) -> Vec<&Organization> {
        self.resources_of()
    }

    fn resources(&self) -> impl Iterator<Item = &AnyResource> {
        self.bundle.entry.iter().filter_map(|e| e.resource.as_ref())
    }

    fn index(&self) -> &EntryIndex {
        self.index
            .get_or_init(|| EntryIndex::build(&self.bundle.entry))
    }
}

impl From<Bundle> for BundleHelper {
    fn from(bundle: Bundle) -> Self {
        Self::new(bundle)
    }
}

/// Whether `reference` is a URI rather than a relative `Type/id` path.
fn has_scheme(reference: &str) -> bool {
    reference.starts_with("urn:") || Url::parse(reference).is_ok()
}

fn version_of(entry: &BundleEntry) -> Option<&str> {
    entry
        .resource
        .as_ref()
        .and_then(|r| r.meta())
        .and_then(|m| m.version_id.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrite_models::r5::{BundleType, Meta};

    const UUID: &str = "urn:uuid:61ebe359-bfdc-4613-8bf2-c5e300945f0a";

    fn helper() -> BundleHelper {
        BundleHelper::new(Bundle::new(BundleType::Transaction))
    }

    #[test]
    fn added_entries_are_visible_to_lookups() {
        let mut helper = helper();
        helper.add_entry(Patient::new("a"), None).unwrap();
        assert!(helper.get_resource_by_id("Patient", "a").is_some());
        assert!(helper.get_resource_by_id("Patient", "b").is_none());

        helper.add_entry(Patient::new("b"), None).unwrap();
        assert!(helper.get_resource_by_id("Patient", "b").is_some());
        assert_eq!(helper.count(), 2);
    }

    #[test]
    fn add_entry_extends_a_built_index() {
        let mut helper = helper();
        helper.add_entry(Patient::new("a"), Some(UUID)).unwrap();
        assert!(helper.index.get().is_some());

        helper.add_entry(Patient::new("b"), Some("urn:oid:1.2.3.4")).unwrap();
        assert!(helper.index.get().is_some());
        assert_eq!(helper.index().by_full_url("urn:oid:1.2.3.4"), Some(1));
        assert_eq!(helper.index().by_identity("Patient", "b"), Some(1));
    }

    #[test]
    fn duplicate_full_url_is_rejected() {
        let mut helper = helper();
        helper.add_entry(Patient::new("a"), Some(UUID)).unwrap();
        let err = helper.add_entry(Patient::new("b"), Some(UUID)).unwrap_err();
        assert_eq!(err, BundleError::DuplicateFullUrl(UUID.to_string()));
        assert_eq!(helper.count(), 1);
    }

    #[test]
    fn versioned_reference_matches_meta_version() {
        let mut patient = Patient::new("a");
        patient.meta = Some(Meta {
            version_id: Some("2".into()),
            ..Default::default()
        });
        let mut helper = helper();
        helper.add_entry(patient, None).unwrap();

        assert!(helper.resolve_reference("Patient/a/_history/2").unwrap().is_some());
        assert!(helper.resolve_reference("Patient/a/_history/1").unwrap().is_none());
        assert!(helper.resolve_reference("Patient/a").unwrap().is_some());
    }

    #[test]
    fn relative_full_url_is_a_fallback() {
        let mut helper = helper();
        helper.add_entry(Patient::default(), Some("Patient/1")).unwrap();
        let entry = helper.resolve_reference("Patient/1").unwrap().unwrap();
        assert_eq!(entry.full_url.as_deref(), Some("Patient/1"));
    }

    #[test]
    fn malformed_reference_is_an_error() {
        let err = helper().resolve_reference("Patient123").unwrap_err();
        assert!(matches!(err, BundleError::MalformedReference { .. }));
        assert!(err.to_string().starts_with("cannot resolve reference 'Patient123'"));
    }

    #[test]
    fn local_reference_needs_a_container() {
        let mut patient = Patient::new("p1");
        patient.contained.push(Practitioner::new("dr").into());
        let mut helper = helper();
        helper.add_entry(patient, None).unwrap();

        assert!(helper.resolve_reference("#dr").unwrap().is_none());

        let container = helper.get_resource_by_id("Patient", "p1").unwrap();
        let found = helper.resolve_in(container, "#dr").unwrap().unwrap();
        assert_eq!(found.resource_type(), "Practitioner");
        let itself = helper.resolve_in(container, "#").unwrap().unwrap();
        assert_eq!(itself.id(), Some("p1"));
        let other = helper.resolve_in(container, "Patient/p1").unwrap().unwrap();
        assert_eq!(other.id(), Some("p1"));
    }

    #[test]
    fn find_entries_keeps_order() {
        let mut helper = helper();
        helper.add_entry(Patient::new("a"), Some("urn:uuid:0c3151bd-1cbf-4d64-b04d-cd9187a4c6e0")).unwrap();
        helper.add_entry(Patient::new("b"), None).unwrap();
        helper.add_entry(Patient::new("c"), Some(UUID)).unwrap();

        let with_url = helper.find_entries(|e| e.full_url.is_some());
        let ids: Vec<_> = with_url
            .iter()
            .filter_map(|e| e.resource.as_ref().and_then(AnyResource::id))
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
