//! Lookup table for `#id` references inside one resource.

use ferrite_models::{AnyResource, Resource};
use std::collections::HashMap;

/// Maps the ids of a resource's contained resources to the resources.
///
/// The table borrows from the container; contained resources never point back.
#[derive(Debug)]
pub struct ContainedIndex<'a> {
    by_id: HashMap<&'a str, &'a AnyResource>,
}

impl<'a> ContainedIndex<'a> {
    pub fn new<R: Resource + ?Sized>(container: &'a R) -> Self {
        let mut by_id = HashMap::new();
        for resource in container.contained() {
            if let Some(id) = resource.id() {
                by_id.entry(id).or_insert(resource);
            }
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a AnyResource> {
        self.by_id.get(id).copied()
    }

    /// Resolves a `#id` reference; anything else is `None`.
    pub fn resolve(&self, reference: &str) -> Option<&'a AnyResource> {
        reference.strip_prefix('#').and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrite_models::r5::{Organization, Patient, Practitioner};

    #[test]
    fn resolves_local_ids() {
        let mut patient = Patient::new("p1");
        patient.contained.push(Organization::new("org1", "Acme").into());
        patient.contained.push(Practitioner::new("dr1").into());

        let index = ContainedIndex::new(&patient);
        assert_eq!(index.len(), 2);
        assert_eq!(index.resolve("#org1").map(|r| r.resource_type()), Some("Organization"));
        assert_eq!(index.get("dr1").map(|r| r.resource_type()), Some("Practitioner"));
        assert!(index.resolve("org1").is_none());
        assert!(index.resolve("#missing").is_none());
    }

    #[test]
    fn empty_for_resources_without_contained() {
        let patient = Patient::new("p1");
        let index = ContainedIndex::new(&patient);
        assert!(index.is_empty());
    }
}
