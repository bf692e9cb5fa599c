use super::{CodeableConcept, CodeableReference, Extension, Identifier, Period, Quantity, Reference};
use crate::primitives::DateTime;

fhir_resource! {
    /// An interaction during which services are provided to the patient.
    pub struct Encounter : DomainResource "Encounter" {
        /// Identifier(s) by which this encounter is known
        identifier: Vec<Identifier> => "identifier";
        status: Option<String> => "status", "required,enum=planned|in-progress|on-hold|discharged|completed|cancelled|discontinued|entered-in-error|unknown";
        /// Classification of patient encounter context - e.g. Inpatient, outpatient
        class: Vec<CodeableConcept> => "class";
        /// Indicates the urgency of the encounter
        priority: Option<CodeableConcept> => "priority", "summary=false";
        /// Specific type of encounter (e.g. e-mail consultation, surgical day-care, ...)
        r#type: Vec<CodeableConcept> => "type";
        /// Specific type of service
        service_type: Vec<CodeableReference> => "serviceType";
        /// The patient or group related to this encounter
        subject: Option<Reference> => "subject";
        /// The current status of the subject in relation to the Encounter
        subject_status: Option<CodeableConcept> => "subjectStatus", "summary=false";
        /// Episode(s) of care that this encounter should be recorded against
        episode_of_care: Vec<Reference> => "episodeOfCare";
        /// The request that initiated this encounter
        based_on: Vec<Reference> => "basedOn", "summary=false";
        /// The group(s) that are allocated to participate in this encounter
        care_team: Vec<Reference> => "careTeam", "summary=false";
        /// Another Encounter this encounter is part of
        part_of: Option<Reference> => "partOf", "summary=false";
        /// The organization (facility) responsible for this encounter
        service_provider: Option<Reference> => "serviceProvider", "summary=false";
        /// List of participants involved in the encounter
        participant: Vec<EncounterParticipant> => "participant";
        /// The appointment that scheduled this encounter
        appointment: Vec<Reference> => "appointment";
        /// The actual start and end time of the encounter
        actual_period: Option<Period> => "actualPeriod", "summary=false";
        /// The planned start date/time (or admission date) of the encounter
        planned_start_date: Option<DateTime> => "plannedStartDate", "summary=false";
        /// The planned end date/time (or discharge date) of the encounter
        planned_end_date: Option<DateTime> => "plannedEndDate", "summary=false";
        /// Actual quantity of time the encounter lasted (less time absent)
        length: Option<Quantity> => "length", "summary=false";
        /// The list of medical reasons that are expected to be addressed during the episode of care
        reason: Vec<EncounterReason> => "reason";
        /// The list of diagnosis relevant to this encounter
        diagnosis: Vec<EncounterDiagnosis> => "diagnosis";
        /// The set of accounts that may be used for billing for this Encounter
        account: Vec<Reference> => "account", "summary=false";
        /// Diet preferences reported by the patient
        diet_preference: Vec<CodeableConcept> => "dietPreference", "summary=false";
        /// Wheelchair, translator, stretcher, etc
        special_arrangement: Vec<CodeableConcept> => "specialArrangement", "summary=false";
        /// Special courtesies (VIP, board member)
        special_courtesy: Vec<CodeableConcept> => "specialCourtesy", "summary=false";
        /// Details about the admission to a healthcare service
        admission: Option<EncounterAdmission> => "admission", "summary=false";
        /// List of locations where the patient has been
        location: Vec<EncounterLocation> => "location", "summary=false";
    }
}

fhir_element! {
    pub struct EncounterParticipant : Backbone "EncounterParticipant" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Role of participant in encounter
        r#type: Vec<CodeableConcept> => "type";
        /// Period of time during the encounter that the participant participated
        period: Option<Period> => "period";
        /// The individual, device, or service participating in the encounter
        actor: Option<Reference> => "actor";
    }
}

fhir_element! {
    pub struct EncounterReason : Backbone "EncounterReason" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// What the reason value should be used for/as
        r#use: Vec<CodeableConcept> => "use";
        /// Reason the encounter takes place (core or reference)
        value: Vec<CodeableReference> => "value";
    }
}

fhir_element! {
    pub struct EncounterDiagnosis : Backbone "EncounterDiagnosis" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// The diagnosis relevant to the encounter
        condition: Vec<CodeableReference> => "condition";
        /// Role that this diagnosis has within the encounter (e.g. admission, billing, discharge ...)
        r#use: Vec<CodeableConcept> => "use";
    }
}

fhir_element! {
    pub struct EncounterAdmission : Backbone "EncounterAdmission" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Pre-admission identifier
        pre_admission_identifier: Option<Identifier> => "preAdmissionIdentifier";
        /// The location/organization from which the patient came before admission
        origin: Option<Reference> => "origin";
        /// From where patient was admitted (physician referral, transfer)
        admit_source: Option<CodeableConcept> => "admitSource";
        /// Indicates that the patient is being re-admitted
        re_admission: Option<CodeableConcept> => "reAdmission";
        /// Location/organization to which the patient is discharged
        destination: Option<Reference> => "destination";
        /// Category or kind of location after discharge
        discharge_disposition: Option<CodeableConcept> => "dischargeDisposition";
    }
}

fhir_element! {
    pub struct EncounterLocation : Backbone "EncounterLocation" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Location the encounter takes place
        location: Option<Reference> => "location", "required";
        status: Option<String> => "status", "enum=planned|active|reserved|completed";
        /// The physical type of the location (usually the level in the location hierarchy - bed, room, ward, virtual etc.)
        form: Option<CodeableConcept> => "form";
        /// Time period during which the patient was present at the location
        period: Option<Period> => "period";
    }
}
