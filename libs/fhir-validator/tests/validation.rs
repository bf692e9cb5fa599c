use ferrite_models::r5::{
    AnyResource, Bundle, BundleEntry, BundleType, CodeableConcept, HumanName, Observation,
    ObservationValue, Patient, Reference,
};
use ferrite_models::{fhir_element, fhir_resource, TagError};
use ferrite_validator::{
    Error, ErrorKind, Preset, ValidationErrors, Validator, ValidatorConfig,
};

fhir_element! {
    pub struct StrictName : Complex "HumanName" {
        family: Option<String> => "family", "required";
        given: Vec<String> => "given";
    }
}

fhir_resource! {
    pub struct StrictPatient : DomainResource "Patient" {
        name: Vec<StrictName> => "name";
    }
}

fhir_resource! {
    pub struct Task : DomainResource "Task" {
        status: Option<String> => "status", "enum=active|inactive|pending";
        items: Vec<String> => "items", "cardinality=1..3";
    }
}

fhir_resource! {
    pub struct Annotated : DomainResource "Annotated" {
        code: Option<String> => "code", "binding=example";
    }
}

fhir_resource! {
    pub struct Broken : DomainResource "Broken" {
        items: Vec<String> => "items", "cardinality=3..1";
    }
}

fn errors_of(result: Result<(), Error>) -> ValidationErrors {
    match result {
        Err(Error::Invalid(errors)) => errors,
        other => panic!("expected validation errors, got {other:?}"),
    }
}

fn task(status: &str, items: usize) -> Task {
    Task {
        status: Some(status.to_string()),
        items: (0..items).map(|i| format!("item-{i}")).collect(),
        ..Default::default()
    }
}

fn observation_with_subject(reference: &str) -> Observation {
    Observation {
        status: Some("final".into()),
        code: Some(CodeableConcept::from_text("heart rate")),
        subject: Some(Reference::to(reference)),
        ..Default::default()
    }
}

#[test]
fn missing_required_family_is_reported_with_its_path() {
    let patient = StrictPatient {
        name: vec![StrictName {
            family: None,
            given: vec!["Peter".into()],
        }],
        ..Default::default()
    };

    let errors = errors_of(Validator::new().validate(&patient));
    assert_eq!(errors.len(), 1);
    let error = errors.iter().next().unwrap();
    assert_eq!(error.field, "Patient.name[0].family");
    assert_eq!(error.message, "required field is missing");
    assert_eq!(error.kind, ErrorKind::Required);
}

#[test]
fn enum_rejection_names_the_value() {
    let errors = errors_of(Validator::new().validate(&task("invalid", 1)));
    assert_eq!(errors.len(), 1);
    let error = errors.iter().next().unwrap();
    assert!(error.field.ends_with(".status"));
    assert!(error.message.contains("invalid"));
    assert_eq!(
        error.message,
        "invalid enum value 'invalid', must be one of: active|inactive|pending"
    );
}

#[test]
fn cardinality_upper_bound() {
    let errors = errors_of(Validator::new().validate(&task("active", 4)));
    assert_eq!(errors.len(), 1);
    let error = errors.iter().next().unwrap();
    assert_eq!(error.field, "Task.items");
    assert!(error.message.contains('4'));
    assert_eq!(error.kind, ErrorKind::Cardinality);
}

#[test]
fn cardinality_lower_bound_reports_missing_once() {
    let errors = errors_of(Validator::new().validate(&task("active", 0)));
    assert_eq!(errors.len(), 1);
    let error = errors.iter().next().unwrap();
    assert_eq!(error.field, "Task.items");
    assert_eq!(error.message, "required field cannot be empty");
}

#[test]
fn reference_syntax_on_observation_subject() {
    let validator = Validator::new();
    let cases = [
        ("patient/123", Some("invalid resource type")),
        ("Patient123", Some("invalid reference format")),
        ("Patient/123", None),
        ("https://example.org/fhir/Patient/123", None),
    ];

    for (reference, expected) in cases {
        let result = validator.validate(&observation_with_subject(reference));
        match expected {
            None => assert!(result.is_ok(), "{reference}: {result:?}"),
            Some(fragment) => {
                let errors = errors_of(result);
                assert_eq!(errors.len(), 1, "{reference}");
                let error = errors.iter().next().unwrap();
                assert_eq!(error.field, "Observation.subject.reference");
                assert!(error.message.contains(fragment), "{}", error.message);
            }
        }
    }
}

#[test]
fn validation_is_deterministic() {
    let mut patient = Patient::new("p1");
    patient.gender = Some("M".into());
    let mut name = HumanName::new("Doe", ["John"]);
    name.r#use = Some("formal".into());
    patient.name.push(name);
    patient.managing_organization = Some(Reference::to("organization/1"));

    let validator = Validator::new();
    let first = validator.collect(&patient).unwrap();
    let second = validator.collect(&patient).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn traversal_lists_every_violation_in_order() {
    let mut patient = Patient::new("p1");
    patient.gender = Some("M".into());
    let mut name = HumanName::new("Doe", ["John"]);
    name.r#use = Some("formal".into());
    patient.name.push(name);
    patient.managing_organization = Some(Reference::to("organization/1"));

    let errors = Validator::new().collect(&patient).unwrap();
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "Patient.name[0].use",
            "Patient.gender",
            "Patient.managingOrganization.reference",
        ]
    );
}

#[test]
fn contained_resources_are_validated_under_the_container() {
    let mut patient = Patient::new("p1");
    patient
        .contained
        .push(AnyResource::from(Observation::default()));

    let errors = Validator::new().collect(&patient).unwrap();
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["Patient.contained[0].status", "Patient.contained[0].code"]
    );
}

#[test]
fn choice_values_are_validated_under_their_wire_name() {
    let mut observation = observation_with_subject("Patient/1");
    observation.value = Some(ObservationValue::Reference(Reference::to("patient/2")));

    let errors = Validator::new().collect(&observation).unwrap();
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["Observation.valueReference.reference"]);
}

#[test]
fn bundle_entries_are_walked() {
    let mut bundle = Bundle::new(BundleType::Collection);
    bundle.entry.push(BundleEntry::new(Patient::new("ok")));
    bundle.entry.push(BundleEntry::new(Observation::default()));

    let errors = Validator::new().collect(&bundle).unwrap();
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "Bundle.entry[1].resource.status",
            "Bundle.entry[1].resource.code",
        ]
    );
}

#[test]
fn unknown_directives_are_ignored_unless_strict() {
    let record = Annotated {
        code: Some("x".into()),
        ..Default::default()
    };
    assert!(Validator::new().validate(&record).is_ok());

    let strict = Validator::from_config(&ValidatorConfig::preset(Preset::Strict)).unwrap();
    match strict.validate(&record) {
        Err(Error::Metadata(err)) => {
            assert_eq!(err.type_name, "Annotated");
            assert_eq!(err.field, "code");
            assert_eq!(err.source, TagError::UnknownDirective("binding=example".into()));
        }
        other => panic!("expected a metadata error, got {other:?}"),
    }
}

#[test]
fn malformed_metadata_stops_validation() {
    let record = Broken::default();
    let err = Validator::new().validate(&record).unwrap_err();
    assert!(err.errors().is_none());
    assert!(matches!(
        err,
        Error::Metadata(ref e) if e.source == TagError::InvertedCardinality { min: 3, max: 1 }
    ));
}

#[test]
fn max_errors_truncates() {
    let cfg = ValidatorConfig::builder().max_errors(1).build();
    let validator = Validator::from_config(&cfg).unwrap();
    let errors = validator.collect(&Observation::default()).unwrap();
    assert_eq!(errors.len(), 1);
}

#[test]
fn versioned_references_follow_the_preset() {
    let observation = observation_with_subject("Patient/1/_history/2");
    assert!(Validator::new().validate(&observation).is_ok());

    let strict = Validator::from_config(&ValidatorConfig::preset(Preset::Strict)).unwrap();
    let errors = errors_of(strict.validate(&observation));
    assert!(errors
        .iter()
        .next()
        .unwrap()
        .message
        .starts_with("versioned reference not allowed"));
}

#[test]
fn yaml_config_drives_the_validator() {
    let yaml = "references:\n  mode: Off\n";
    let cfg = ValidatorConfig::from_yaml(yaml).unwrap();
    let validator = Validator::from_config(&cfg).unwrap();
    assert!(validator.validate(&observation_with_subject("bogus")).is_ok());
}

#[test]
fn errors_render_as_operation_outcome() {
    let errors = errors_of(Validator::new().validate(&task("invalid", 4)));
    let outcome = errors.to_operation_outcome();
    assert_eq!(outcome.issue.len(), 2);
    assert!(outcome.has_errors());
    assert_eq!(outcome.issue[0].expression, vec!["Task.status".to_string()]);
    assert_eq!(outcome.issue[0].code.as_deref(), Some("code-invalid"));
    assert_eq!(outcome.issue[1].code.as_deref(), Some("structure"));

    assert!(Validator::new().validate(&outcome).is_ok());

    let json: serde_json::Value =
        serde_json::from_slice(&ferrite_format::marshal(&outcome).unwrap()).unwrap();
    assert_eq!(json["resourceType"], "OperationOutcome");
    assert_eq!(json["issue"][0]["severity"], "error");
    assert_eq!(json["issue"][1]["expression"][0], "Task.items");
}

#[test]
fn error_display_lists_each_error() {
    let err = Validator::new().validate(&task("invalid", 1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "1 validation error(s):\n  1. Task.status: invalid enum value 'invalid', must be one of: active|inactive|pending\n"
    );
}

#[test]
fn decoded_resources_validate_like_built_ones() {
    let bytes = br#"{
        "resourceType": "Observation",
        "status": "final",
        "code": { "text": "heart rate" },
        "subject": { "reference": "patient/123" }
    }"#;
    let resource = ferrite_format::unmarshal(bytes).unwrap();
    let errors = Validator::new().collect(&resource).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.iter().next().unwrap().field,
        "Observation.subject.reference"
    );
}

#[test]
fn batch_validation_keeps_input_order() {
    let validator = Validator::new();
    let results = validator.validate_batch(&[task("active", 1), task("invalid", 1)]);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}
