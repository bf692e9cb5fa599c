use super::{Address, Attachment, CodeableConcept, ContactPoint, Extension, HumanName, Identifier, Period, Reference};
use crate::primitives::{Date, DateTime};

fhir_resource! {
    /// Information about an individual or animal receiving health care services.
    pub struct Patient : DomainResource "Patient" {
        /// An identifier for this patient
        identifier: Vec<Identifier> => "identifier";
        /// Whether this patient's record is in active use
        active: Option<bool> => "active";
        /// A name associated with the patient
        name: Vec<HumanName> => "name";
        /// A contact detail for the individual
        telecom: Vec<ContactPoint> => "telecom", "summary=false";
        gender: Option<String> => "gender", "enum=male|female|other|unknown";
        /// The date of birth for the individual
        birth_date: Option<Date> => "birthDate";
        /// Indicates if the individual is deceased or not
        deceased: Option<PatientDeceased> => "deceased";
        /// An address for the individual
        address: Vec<Address> => "address";
        /// Marital (civil) status of a patient
        marital_status: Option<CodeableConcept> => "maritalStatus", "summary=false";
        /// Whether patient is part of a multiple birth
        multiple_birth: Option<PatientMultipleBirth> => "multipleBirth", "summary=false";
        /// Image of the patient
        photo: Vec<Attachment> => "photo", "summary=false";
        /// A contact party (e.g. guardian, partner, friend) for the patient
        contact: Vec<PatientContact> => "contact", "summary=false";
        /// A language which may be used to communicate with the patient about his or her health
        communication: Vec<PatientCommunication> => "communication", "summary=false";
        /// Patient's nominated primary care provider
        general_practitioner: Vec<Reference> => "generalPractitioner", "summary=false";
        /// Organization that is the custodian of the patient record
        managing_organization: Option<Reference> => "managingOrganization";
        /// Link to a Patient or RelatedPerson resource that concerns the same actual individual
        link: Vec<PatientLink> => "link";
    }
}

fhir_choice! {
    /// Patient.deceased[x]
    pub enum PatientDeceased {
        Boolean(bool) => "Boolean",
        DateTime(DateTime) => "DateTime",
    }
}

fhir_choice! {
    /// Patient.multipleBirth[x]
    pub enum PatientMultipleBirth {
        Boolean(bool) => "Boolean",
        Integer(i32) => "Integer",
    }
}

fhir_element! {
    /// A contact party (e.g. guardian, partner, friend) for the patient.
    pub struct PatientContact : Backbone "PatientContact" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// The kind of relationship
        relationship: Vec<CodeableConcept> => "relationship";
        /// A name associated with the contact person
        name: Option<HumanName> => "name";
        /// Additional names for the contact person
        additional_name: Vec<HumanName> => "additionalName";
        /// A contact detail for the person
        telecom: Vec<ContactPoint> => "telecom";
        /// Address for the contact person
        address: Option<Address> => "address";
        /// Additional addresses for the contact person
        additional_address: Vec<Address> => "additionalAddress";
        gender: Option<String> => "gender", "enum=male|female|other|unknown";
        /// Organization that is associated with the contact
        organization: Option<Reference> => "organization";
        /// The period during which this contact person or organization is valid to be contacted relating to this patient
        period: Option<Period> => "period";
    }
}

fhir_element! {
    /// A language which may be used to communicate with the patient.
    pub struct PatientCommunication : Backbone "PatientCommunication" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// The language which can be used to communicate with the patient about his or her health
        language: Option<CodeableConcept> => "language", "required";
        /// Language preference indicator
        preferred: Option<bool> => "preferred";
    }
}

fhir_element! {
    /// Link to a Patient or RelatedPerson resource that concerns the same actual individual.
    pub struct PatientLink : Backbone "PatientLink" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// The other patient or related person resource that the link refers to
        other: Option<Reference> => "other", "required";
        r#type: Option<String> => "type", "required,enum=replaced-by|replaces|refer|seealso";
    }
}

impl Patient {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// The first name marked `official`, else the first name.
    pub fn official_name(&self) -> Option<&HumanName> {
        self.name
            .iter()
            .find(|n| n.r#use.as_deref() == Some("official"))
            .or_else(|| self.name.first())
    }
}
