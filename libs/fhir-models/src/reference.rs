//! Reference string grammar.
//!
//! A reference takes one of these forms:
//! - relative `Type/id`, optionally versioned as `Type/id/_history/vid`
//! - absolute `http(s)://…` URL
//! - `urn:uuid:<uuid>`, addressing a Bundle entry by `fullUrl`
//! - `#local-id`, addressing a contained resource (`#` alone is the container)

use thiserror::Error;
use url::Url;
use uuid::Uuid;

/// Every resource type name defined by FHIR R5.
pub static RESOURCE_TYPES: phf::Set<&'static str> = phf::phf_set! {
    "Account", "ActivityDefinition", "ActorDefinition", "AdministrableProductDefinition",
    "AdverseEvent", "AllergyIntolerance", "Appointment", "AppointmentResponse",
    "ArtifactAssessment", "AuditEvent", "Basic", "Binary", "BiologicallyDerivedProduct",
    "BiologicallyDerivedProductDispense", "BodyStructure", "Bundle", "CapabilityStatement",
    "CarePlan", "CareTeam", "ChargeItem", "ChargeItemDefinition", "Citation", "Claim",
    "ClaimResponse", "ClinicalImpression", "ClinicalUseDefinition", "CodeSystem",
    "Communication", "CommunicationRequest", "CompartmentDefinition", "Composition",
    "ConceptMap", "Condition", "ConditionDefinition", "Consent", "Contract", "Coverage",
    "CoverageEligibilityRequest", "CoverageEligibilityResponse", "DetectedIssue", "Device",
    "DeviceAssociation", "DeviceDefinition", "DeviceDispense", "DeviceMetric", "DeviceRequest",
    "DeviceUsage", "DiagnosticReport", "DocumentReference", "Encounter", "EncounterHistory",
    "Endpoint", "EnrollmentRequest", "EnrollmentResponse", "EpisodeOfCare", "EventDefinition",
    "Evidence", "EvidenceReport", "EvidenceVariable", "ExampleScenario", "ExplanationOfBenefit",
    "FamilyMemberHistory", "Flag", "FormularyItem", "GenomicStudy", "Goal", "GraphDefinition",
    "Group", "GuidanceResponse", "HealthcareService", "ImagingSelection", "ImagingStudy",
    "Immunization", "ImmunizationEvaluation", "ImmunizationRecommendation",
    "ImplementationGuide", "Ingredient", "InsurancePlan", "InventoryItem", "InventoryReport",
    "Invoice", "Library", "Linkage", "List", "Location", "ManufacturedItemDefinition", "Measure",
    "MeasureReport", "Medication", "MedicationAdministration", "MedicationDispense",
    "MedicationKnowledge", "MedicationRequest", "MedicationStatement",
    "MedicinalProductDefinition", "MessageDefinition", "MessageHeader", "MolecularSequence",
    "NamingSystem", "NutritionIntake", "NutritionOrder", "NutritionProduct", "Observation",
    "ObservationDefinition", "OperationDefinition", "OperationOutcome", "Organization",
    "OrganizationAffiliation", "PackagedProductDefinition", "Parameters", "Patient",
    "PaymentNotice", "PaymentReconciliation", "Permission", "Person", "PlanDefinition",
    "Practitioner", "PractitionerRole", "Procedure", "Provenance", "Questionnaire",
    "QuestionnaireResponse", "RegulatedAuthorization", "RelatedPerson", "RequestOrchestration",
    "Requirements", "ResearchStudy", "ResearchSubject", "RiskAssessment", "Schedule",
    "SearchParameter", "ServiceRequest", "Slot", "Specimen", "SpecimenDefinition",
    "StructureDefinition", "StructureMap", "Subscription", "SubscriptionStatus",
    "SubscriptionTopic", "Substance", "SubstanceDefinition", "SubstanceNucleicAcid",
    "SubstancePolymer", "SubstanceProtein", "SubstanceReferenceInformation",
    "SubstanceSourceMaterial", "SupplyDelivery", "SupplyRequest", "Task",
    "TerminologyCapabilities", "TestPlan", "TestReport", "TestScript", "Transport", "ValueSet",
    "VerificationResult", "VisionPrescription",
};

pub fn is_resource_type(name: &str) -> bool {
    RESOURCE_TYPES.contains(name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceKind<'a> {
    Relative {
        resource_type: &'a str,
        id: &'a str,
        version: Option<&'a str>,
    },
    Absolute(Url),
    Uuid(Uuid),
    /// Id of a contained resource; empty for the containing resource itself.
    Contained(&'a str),
}

impl ReferenceKind<'_> {
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Contained(_))
    }

    /// Whether the reference addresses an entry by `fullUrl`.
    pub fn is_full_url(&self) -> bool {
        matches!(self, Self::Absolute(_) | Self::Uuid(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("reference cannot be empty")]
    Empty,

    #[error("invalid reference format: {0} (expected 'ResourceType/id')")]
    Format(String),

    #[error("invalid resource type in reference: {0}")]
    ResourceType(String),

    #[error("unknown resource type in reference: {0}")]
    UnknownResourceType(String),

    #[error("invalid urn:uuid reference: {0}")]
    Uuid(String),

    #[error("unsupported scheme '{scheme}' in reference: {reference}")]
    UnsupportedScheme { scheme: String, reference: String },

    #[error("versioned reference not allowed: {0}")]
    Versioned(String),

    #[error("contained reference not allowed: {0}")]
    Contained(String),
}

const URN_UUID: &str = "urn:uuid:";

/// Classifies `reference` without consulting any resource catalog.
pub fn parse_reference(reference: &str) -> Result<ReferenceKind<'_>, ReferenceError> {
    if reference.is_empty() {
        return Err(ReferenceError::Empty);
    }

    if let Some(local) = reference.strip_prefix('#') {
        if local.contains('/') || local.chars().any(char::is_whitespace) {
            return Err(ReferenceError::Format(reference.to_string()));
        }
        return Ok(ReferenceKind::Contained(local));
    }

    if let Some(rest) = reference.strip_prefix(URN_UUID) {
        return Uuid::parse_str(rest)
            .map(ReferenceKind::Uuid)
            .map_err(|_| ReferenceError::Uuid(reference.to_string()));
    }

    if let Ok(url) = Url::parse(reference) {
        return match url.scheme() {
            "http" | "https" if url.has_host() => Ok(ReferenceKind::Absolute(url)),
            scheme => Err(ReferenceError::UnsupportedScheme {
                scheme: scheme.to_string(),
                reference: reference.to_string(),
            }),
        };
    }

    parse_relative(reference)
}

fn parse_relative(reference: &str) -> Result<ReferenceKind<'_>, ReferenceError> {
    let format_error = || ReferenceError::Format(reference.to_string());
    let segments: Vec<&str> = reference.split('/').collect();

    let (resource_type, id, version) = match segments.as_slice() {
        [resource_type, id] => (*resource_type, *id, None),
        [resource_type, id, "_history", version] if !version.is_empty() => {
            (*resource_type, *id, Some(*version))
        }
        _ => return Err(format_error()),
    };

    if !is_pascal_case(resource_type) {
        return Err(ReferenceError::ResourceType(resource_type.to_string()));
    }
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return Err(format_error());
    }

    Ok(ReferenceKind::Relative {
        resource_type,
        id,
        version,
    })
}

fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}
