use ferrite_bundle::{BundleError, BundleHelper};
use ferrite_format::from_slice;
use ferrite_models::r5::{Bundle, BundleEntry, BundleType, Observation, Patient};
use ferrite_models::{AnyResource, Resource};

fn patient_bundle() -> Bundle {
    let mut bundle = Bundle::new(BundleType::Collection);
    for i in 0..100 {
        let mut patient = Patient::new(format!("patient-{}", i % 10));
        patient.active = Some(i < 10);
        bundle.entry.push(BundleEntry::new(patient));
    }
    bundle
}

const TRANSACTION: &str = r#"{
    "resourceType": "Bundle",
    "type": "transaction",
    "entry": [
        {
            "fullUrl": "urn:uuid:61ebe359-bfdc-4613-8bf2-c5e300945f0a",
            "resource": {
                "resourceType": "Patient",
                "id": "pat-1",
                "name": [{ "family": "Chalmers", "given": ["Peter"] }]
            },
            "request": { "method": "POST", "url": "Patient" }
        },
        {
            "fullUrl": "urn:uuid:88f151c0-a954-468a-88bd-5ae15c08e059",
            "resource": {
                "resourceType": "Observation",
                "id": "obs-1",
                "status": "final",
                "code": { "text": "heart rate" },
                "subject": { "reference": "urn:uuid:61ebe359-bfdc-4613-8bf2-c5e300945f0a" },
                "valueQuantity": { "value": 72, "unit": "bpm" }
            },
            "request": { "method": "POST", "url": "Observation" }
        },
        {
            "fullUrl": "https://example.org/fhir/Encounter/enc-1",
            "resource": {
                "resourceType": "Encounter",
                "id": "enc-1",
                "status": "completed"
            }
        },
        {
            "fullUrl": "https://example.org/fhir/Practitioner/dr-1",
            "resource": { "resourceType": "Practitioner", "id": "dr-1" }
        }
    ]
}"#;

fn transaction() -> BundleHelper {
    BundleHelper::new(from_slice::<Bundle>(TRANSACTION.as_bytes()).unwrap())
}

#[test]
fn lookup_returns_the_first_matching_entry() {
    let helper = BundleHelper::new(patient_bundle());
    let found = helper.get_resource_by_id("Patient", "patient-5").unwrap();
    let expected = helper.entries()[5].resource.as_ref().unwrap();
    assert!(std::ptr::eq(found, expected));
    assert_eq!(found.downcast_ref::<Patient>().unwrap().active, Some(true));
    assert_eq!(helper.count(), 100);
}

#[test]
fn every_indexed_identity_resolves_to_its_first_entry() {
    let helper = BundleHelper::new(patient_bundle());
    for (position, entry) in helper.entries().iter().enumerate().take(10) {
        let resource = entry.resource.as_ref().unwrap();
        let id = resource.id().unwrap();
        let by_id = helper.get_resource_by_id("Patient", id).unwrap();
        assert!(std::ptr::eq(by_id, resource), "position {position}");

        let by_reference = helper
            .resolve_reference(&format!("Patient/{id}"))
            .unwrap()
            .and_then(|e| e.resource.as_ref())
            .unwrap();
        assert!(std::ptr::eq(by_reference, by_id));
    }
}

#[test]
fn uuid_references_resolve_through_full_url() {
    let helper = transaction();
    let observation = helper.observations()[0];
    let subject = observation
        .subject
        .as_ref()
        .and_then(|s| s.reference.as_deref())
        .unwrap();

    let entry = helper.resolve_reference(subject).unwrap().unwrap();
    assert_eq!(entry.full_url.as_deref(), Some(subject));
    let patient = entry.resource.as_ref().unwrap();
    assert!(std::ptr::eq(
        patient,
        helper.get_resource_by_id("Patient", "pat-1").unwrap()
    ));
}

#[test]
fn absolute_references_match_full_url_exactly() {
    let helper = transaction();
    let entry = helper
        .resolve_reference("https://example.org/fhir/Encounter/enc-1")
        .unwrap()
        .unwrap();
    assert_eq!(entry.resource.as_ref().map(AnyResource::resource_type), Some("Encounter"));

    assert!(helper
        .resolve_reference("https://example.org/fhir/Encounter/enc-1/")
        .unwrap()
        .is_none());
    assert!(helper
        .resolve_reference("urn:uuid:00000000-0000-0000-0000-000000000000")
        .unwrap()
        .is_none());
}

#[test]
fn unknown_targets_are_not_errors() {
    let helper = transaction();
    assert!(helper.resolve_reference("Patient/nope").unwrap().is_none());
    assert!(helper.get_resource_by_id("Condition", "pat-1").is_none());
}

#[test]
fn malformed_references_are_errors() {
    let helper = transaction();
    for reference in ["patient/1", "Patient123", "", "Patient/1/2"] {
        assert!(
            matches!(
                helper.resolve_reference(reference),
                Err(BundleError::MalformedReference { .. })
            ),
            "{reference}"
        );
    }
}

#[test]
fn any_uri_scheme_resolves_through_full_url() {
    let mut helper = BundleHelper::new(Bundle::new(BundleType::Collection));
    helper.add_entry(Patient::new("a"), Some("urn:uuid:patient-1")).unwrap();
    helper.add_entry(Patient::new("b"), Some("urn:oid:1.2.3.4")).unwrap();
    helper.add_entry(Patient::new("c"), Some("ftp://example.org/Patient/c")).unwrap();

    for (reference, id) in [
        ("urn:uuid:patient-1", "a"),
        ("urn:oid:1.2.3.4", "b"),
        ("ftp://example.org/Patient/c", "c"),
    ] {
        let entry = helper.resolve_reference(reference).unwrap().unwrap();
        assert_eq!(entry.resource.as_ref().and_then(AnyResource::id), Some(id));
    }

    assert!(helper.resolve_reference("urn:uuid:patient-2").unwrap().is_none());
    assert!(helper.resolve_reference("urn:oid:1.2.3.5").unwrap().is_none());
}

#[test]
fn duplicate_full_url_is_rejected_after_lookups() {
    let mut helper = transaction();
    assert!(helper.get_resource_by_id("Patient", "pat-1").is_some());

    helper
        .add_entry(Patient::new("pat-2"), Some("urn:oid:2.16.840.1.113883"))
        .unwrap();
    let err = helper
        .add_entry(Patient::new("pat-3"), Some("urn:oid:2.16.840.1.113883"))
        .unwrap_err();
    assert_eq!(
        err,
        BundleError::DuplicateFullUrl("urn:oid:2.16.840.1.113883".to_string())
    );
    assert_eq!(helper.count(), 5);
    assert!(helper.get_resource_by_id("Patient", "pat-2").is_some());
    assert!(helper.get_resource_by_id("Patient", "pat-3").is_none());
}

#[test]
fn bulk_insertion_keeps_every_entry_reachable() {
    let mut helper = BundleHelper::new(Bundle::new(BundleType::Transaction));
    for i in 0..5_000 {
        let full_url = format!("urn:uuid:entry-{i}");
        helper
            .add_entry(Patient::new(format!("p{i}")), Some(full_url.as_str()))
            .unwrap();
    }
    assert_eq!(helper.count(), 5_000);
    for i in [0, 2_500, 4_999] {
        let entry = helper
            .resolve_reference(&format!("urn:uuid:entry-{i}"))
            .unwrap()
            .unwrap();
        let expected = format!("p{i}");
        assert_eq!(
            entry.resource.as_ref().and_then(AnyResource::id),
            Some(expected.as_str())
        );
        assert!(helper.resolve_reference(&format!("Patient/p{i}")).unwrap().is_some());
    }
}

#[test]
fn typed_projections_follow_bundle_order() {
    let helper = transaction();
    assert_eq!(helper.patients().len(), 1);
    assert_eq!(helper.observations().len(), 1);
    assert_eq!(helper.encounters()[0].id.as_deref(), Some("enc-1"));
    assert_eq!(helper.practitioners()[0].id.as_deref(), Some("dr-1"));
    assert!(helper.conditions().is_empty());
    assert!(helper.organizations().is_empty());

    let types: Vec<_> = helper
        .entries()
        .iter()
        .filter_map(|e| e.resource.as_ref().map(AnyResource::resource_type))
        .collect();
    assert_eq!(types, vec!["Patient", "Observation", "Encounter", "Practitioner"]);
    assert_eq!(helper.get_resources_by_type("Observation").len(), 1);
    assert!(helper.get_resources_by_type("Basic").is_empty());
}

#[test]
fn added_entries_are_visible_and_serialize() {
    let mut helper = transaction();
    let mut observation = Observation::default();
    observation.id = Some("obs-2".into());
    helper
        .add_entry(observation, Some("urn:uuid:7f0c3a5e-5a62-4cf3-9a87-1b0cf2c3a7a1"))
        .unwrap();

    assert_eq!(helper.observations().len(), 2);
    assert!(helper
        .resolve_reference("urn:uuid:7f0c3a5e-5a62-4cf3-9a87-1b0cf2c3a7a1")
        .unwrap()
        .is_some());

    let err = helper
        .add_entry(Patient::new("dup"), Some("urn:uuid:61ebe359-bfdc-4613-8bf2-c5e300945f0a"))
        .unwrap_err();
    assert!(matches!(err, BundleError::DuplicateFullUrl(_)));

    let bundle = helper.into_bundle();
    assert!(bundle.is_transaction());
    let json: serde_json::Value = serde_json::from_slice(&ferrite_format::marshal(&bundle).unwrap()).unwrap();
    assert_eq!(json["entry"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["entry"][4]["resource"]["id"], "obs-2");
}

#[test]
fn helper_is_shareable_across_threads() {
    let helper = BundleHelper::new(patient_bundle());
    std::thread::scope(|scope| {
        for i in 0..4 {
            let helper = &helper;
            scope.spawn(move || {
                let id = format!("patient-{i}");
                assert!(helper.get_resource_by_id("Patient", &id).is_some());
            });
        }
    });
}

#[test]
fn decoded_entries_have_no_contained_resources() {
    let helper = transaction();
    let patient = helper.get_resource_by_id("Patient", "pat-1").unwrap();
    assert!(Resource::contained(patient).is_empty());
}
