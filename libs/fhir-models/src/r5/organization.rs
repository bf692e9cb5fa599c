use super::{CodeableConcept, ExtendedContactDetail, Extension, Identifier, Period, Reference};

fhir_resource! {
    /// A grouping of people or organizations with a common purpose.
    pub struct Organization : DomainResource "Organization" {
        /// Identifies this organization  across multiple systems
        identifier: Vec<Identifier> => "identifier";
        /// Whether the organization's record is still in active use
        active: Option<bool> => "active";
        /// Kind of organization
        r#type: Vec<CodeableConcept> => "type";
        /// Name used for the organization
        name: Option<String> => "name";
        /// A list of alternate names that the organization is known as, or was known as in the past
        alias: Vec<String> => "alias", "summary=false";
        /// Additional details about the Organization that could be displayed as further information to identify the Organization beyond its name
        description: Option<String> => "description";
        /// Official contact details for the Organization
        contact: Vec<ExtendedContactDetail> => "contact", "summary=false";
        /// The organization of which this organization forms a part
        part_of: Option<Reference> => "partOf";
        /// Technical endpoints providing access to services operated for the organization
        endpoint: Vec<Reference> => "endpoint", "summary=false";
        /// Qualifications, certifications, accreditations, licenses, training, etc. pertaining to the provision of care
        qualification: Vec<OrganizationQualification> => "qualification", "summary=false";
    }
}

fhir_element! {
    pub struct OrganizationQualification : Backbone "OrganizationQualification" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// An identifier for this qualification for the organization
        identifier: Vec<Identifier> => "identifier";
        /// Coded representation of the qualification
        code: Option<CodeableConcept> => "code", "required";
        /// Period during which the qualification is valid
        period: Option<Period> => "period";
        /// Organization that regulates and issues the qualification
        issuer: Option<Reference> => "issuer";
    }
}

impl Organization {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
