use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ferrite_format::{from_slice, marshal, marshal_summary};
use ferrite_models::r5::{
    Bundle, BundleEntry, BundleType, CodeableConcept, Coding, ContactPoint, HumanName,
    Identifier, Observation, ObservationValue, Patient, Quantity, Reference,
};

fn sample_bundle(size: usize) -> Bundle {
    let mut bundle = Bundle::new(BundleType::Collection);
    for i in 0..size {
        let mut patient = Patient::new(format!("patient-{i}"));
        patient.identifier.push(Identifier::new("http://example.org/mrn", i.to_string()));
        patient.name.push(HumanName::new("Doe", ["Jane"]));
        patient.telecom.push(ContactPoint::new("phone", "555-0100"));
        bundle.entry.push(BundleEntry::new(patient));

        let observation = Observation {
            id: Some(format!("obs-{i}")),
            status: Some("final".into()),
            code: Some(CodeableConcept::from_coding(Coding::new("http://loinc.org", "8867-4"))),
            subject: Some(Reference::to(format!("Patient/patient-{i}"))),
            value: Some(ObservationValue::Quantity(Quantity::new(72, "bpm"))),
            ..Default::default()
        };
        bundle.entry.push(BundleEntry::new(observation));
    }
    bundle
}

fn bench_codec(c: &mut Criterion) {
    let bundle = sample_bundle(100);
    let bytes = marshal(&bundle).expect("bundle encodes");

    c.bench_function("marshal_bundle_200", |b| {
        b.iter(|| marshal(black_box(&bundle)).unwrap())
    });
    c.bench_function("marshal_summary_bundle_200", |b| {
        b.iter(|| marshal_summary(black_box(&bundle)).unwrap())
    });
    c.bench_function("unmarshal_bundle_200", |b| {
        b.iter(|| from_slice::<Bundle>(black_box(&bytes)).unwrap())
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
