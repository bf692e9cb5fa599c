use super::{Annotation, CodeableConcept, CodeableReference, Extension, Identifier, Period, Quantity, Range, Reference};
use crate::primitives::DateTime;

fhir_resource! {
    /// An action that is being or was performed on an individual or entity.
    pub struct Procedure : DomainResource "Procedure" {
        /// External Identifiers for this procedure
        identifier: Vec<Identifier> => "identifier";
        /// Instantiates FHIR protocol or definition
        instantiates_canonical: Vec<String> => "instantiatesCanonical";
        /// Instantiates external protocol or definition
        instantiates_uri: Vec<String> => "instantiatesUri";
        /// A request for this procedure
        based_on: Vec<Reference> => "basedOn";
        /// Part of referenced event
        part_of: Vec<Reference> => "partOf";
        status: Option<String> => "status", "required,enum=preparation|in-progress|not-done|on-hold|stopped|completed|entered-in-error|unknown";
        /// Reason for current status
        status_reason: Option<CodeableConcept> => "statusReason";
        /// Classification of the procedure
        category: Vec<CodeableConcept> => "category";
        /// Identification of the procedure
        code: Option<CodeableConcept> => "code";
        /// Individual or entity the procedure was performed on
        subject: Option<Reference> => "subject", "required";
        /// Who is the target of the procedure when it is not the subject of record only
        focus: Option<Reference> => "focus";
        /// The Encounter during which this Procedure was created
        encounter: Option<Reference> => "encounter";
        /// When the procedure occurred or is occurring
        occurrence: Option<ProcedureOccurrence> => "occurrence";
        /// When the procedure was first captured in the subject's record
        recorded: Option<DateTime> => "recorded";
        /// Who recorded the procedure
        recorder: Option<Reference> => "recorder";
        /// Reported rather than primary record
        reported: Option<ProcedureReported> => "reported";
        /// Who performed the procedure and what they did
        performer: Vec<ProcedurePerformer> => "performer";
        /// Where the procedure happened
        location: Option<Reference> => "location";
        /// The justification that the procedure was performed
        reason: Vec<CodeableReference> => "reason";
        /// Target body sites
        body_site: Vec<CodeableConcept> => "bodySite";
        /// The result of procedure
        outcome: Option<CodeableConcept> => "outcome";
        /// Any report resulting from the procedure
        report: Vec<Reference> => "report", "summary=false";
        /// Complication following the procedure
        complication: Vec<CodeableReference> => "complication", "summary=false";
        /// Instructions for follow up
        follow_up: Vec<CodeableConcept> => "followUp", "summary=false";
        /// Additional information about the procedure
        note: Vec<Annotation> => "note", "summary=false";
        /// Manipulated, implanted, or removed device
        focal_device: Vec<ProcedureFocalDevice> => "focalDevice", "summary=false";
        /// Items used during procedure
        used: Vec<CodeableReference> => "used", "summary=false";
        /// Extra information relevant to the procedure
        supporting_info: Vec<Reference> => "supportingInfo", "summary=false";
    }
}

fhir_choice! {
    /// Procedure.occurrence[x]
    pub enum ProcedureOccurrence {
        DateTime(DateTime) => "DateTime",
        Period(Period) => "Period",
        String(String) => "String",
        Age(Quantity) => "Age",
        Range(Range) => "Range",
    }
}

fhir_choice! {
    /// Procedure.reported[x]
    pub enum ProcedureReported {
        Boolean(bool) => "Boolean",
        Reference(Reference) => "Reference",
    }
}

fhir_element! {
    pub struct ProcedurePerformer : Backbone "ProcedurePerformer" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Type of performance
        function: Option<CodeableConcept> => "function";
        /// Who performed the procedure
        actor: Option<Reference> => "actor", "required";
        /// Organization the device or practitioner was acting for
        on_behalf_of: Option<Reference> => "onBehalfOf", "summary=false";
        /// When the performer performed the procedure
        period: Option<Period> => "period", "summary=false";
    }
}

fhir_element! {
    pub struct ProcedureFocalDevice : Backbone "ProcedureFocalDevice" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Kind of change to device
        action: Option<CodeableConcept> => "action";
        /// Device that was changed
        manipulated: Option<Reference> => "manipulated", "required";
    }
}
