use super::{Address, Attachment, CodeableConcept, ContactPoint, Extension, HumanName, Identifier, Period, Reference};
use crate::primitives::{Date, DateTime};

fhir_resource! {
    /// A person with a formal responsibility in the provisioning of healthcare or related services.
    pub struct Practitioner : DomainResource "Practitioner" {
        /// An identifier for the person as this agent
        identifier: Vec<Identifier> => "identifier";
        /// Whether this practitioner's record is in active use
        active: Option<bool> => "active";
        /// The name(s) associated with the practitioner
        name: Vec<HumanName> => "name";
        /// A contact detail for the practitioner (that apply to all roles)
        telecom: Vec<ContactPoint> => "telecom";
        gender: Option<String> => "gender", "enum=male|female|other|unknown";
        /// The date  on which the practitioner was born
        birth_date: Option<Date> => "birthDate";
        /// Indicates if the practitioner is deceased or not
        deceased: Option<PractitionerDeceased> => "deceased";
        /// Address(es) of the practitioner that are not role specific (typically home address)
        address: Vec<Address> => "address";
        /// Image of the person
        photo: Vec<Attachment> => "photo", "summary=false";
        /// Qualifications, certifications, accreditations, licenses, training, etc. pertaining to the provision of care
        qualification: Vec<PractitionerQualification> => "qualification", "summary=false";
        /// A language which may be used to communicate with the practitioner
        communication: Vec<PractitionerCommunication> => "communication", "summary=false";
    }
}

fhir_choice! {
    /// Practitioner.deceased[x]
    pub enum PractitionerDeceased {
        Boolean(bool) => "Boolean",
        DateTime(DateTime) => "DateTime",
    }
}

fhir_element! {
    pub struct PractitionerQualification : Backbone "PractitionerQualification" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// An identifier for this qualification for the practitioner
        identifier: Vec<Identifier> => "identifier";
        /// Coded representation of the qualification
        code: Option<CodeableConcept> => "code", "required";
        /// Period during which the qualification is valid
        period: Option<Period> => "period";
        /// Organization that regulates and issues the qualification
        issuer: Option<Reference> => "issuer";
    }
}

fhir_element! {
    pub struct PractitionerCommunication : Backbone "PractitionerCommunication" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// The language code used to communicate with the practitioner
        language: Option<CodeableConcept> => "language", "required";
        /// Language preference indicator
        preferred: Option<bool> => "preferred";
    }
}

impl Practitioner {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}
