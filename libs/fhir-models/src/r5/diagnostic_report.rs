use super::{Annotation, Attachment, CodeableConcept, CodeableReference, Extension, Identifier, Period, Reference};
use crate::primitives::{DateTime, Instant};

fhir_resource! {
    /// A Diagnostic report - a combination of request information, atomic results, images, interpretation, as well as formatted reports.
    pub struct DiagnosticReport : DomainResource "DiagnosticReport" {
        /// Business identifier for report
        identifier: Vec<Identifier> => "identifier";
        /// What was requested
        based_on: Vec<Reference> => "basedOn", "summary=false";
        status: Option<String> => "status", "required,enum=registered|partial|preliminary|modified|final|amended|corrected|appended|cancelled|entered-in-error|unknown";
        /// Service category
        category: Vec<CodeableConcept> => "category";
        /// Name/Code for this diagnostic report
        code: Option<CodeableConcept> => "code", "required";
        /// The subject of the report - usually, but not always, the patient
        subject: Option<Reference> => "subject";
        /// Health care event when test ordered
        encounter: Option<Reference> => "encounter";
        /// Clinically relevant time/time-period for report
        effective: Option<DiagnosticReportEffective> => "effective";
        /// DateTime this version was made
        issued: Option<Instant> => "issued";
        /// Responsible Diagnostic Service
        performer: Vec<Reference> => "performer";
        /// Primary result interpreter
        results_interpreter: Vec<Reference> => "resultsInterpreter";
        /// Specimens this report is based on
        specimen: Vec<Reference> => "specimen", "summary=false";
        /// Observations
        result: Vec<Reference> => "result", "summary=false";
        /// Comments about the diagnostic report
        note: Vec<Annotation> => "note", "summary=false";
        /// Reference to full details of an analysis associated with the diagnostic report
        study: Vec<Reference> => "study", "summary=false";
        /// Additional information supporting the diagnostic report
        supporting_info: Vec<DiagnosticReportSupportingInfo> => "supportingInfo", "summary=false";
        /// Key images or data associated with this report
        media: Vec<DiagnosticReportMedia> => "media";
        /// Reference to a Composition resource instance that provides structure for organizing the contents of the DiagnosticReport
        composition: Option<Reference> => "composition", "summary=false";
        /// Clinical conclusion (interpretation) of test results
        conclusion: Option<String> => "conclusion", "summary=false";
        /// Codes for the clinical conclusion of test results
        conclusion_code: Vec<CodeableReference> => "conclusionCode", "summary=false";
        /// Entire report as issued
        presented_form: Vec<Attachment> => "presentedForm", "summary=false";
    }
}

fhir_choice! {
    /// DiagnosticReport.effective[x]
    pub enum DiagnosticReportEffective {
        DateTime(DateTime) => "DateTime",
        Period(Period) => "Period",
    }
}

fhir_element! {
    pub struct DiagnosticReportSupportingInfo : Backbone "DiagnosticReportSupportingInfo" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Supporting information role code
        r#type: Option<CodeableConcept> => "type", "required";
        /// Supporting information reference
        reference: Option<Reference> => "reference", "required";
    }
}

fhir_element! {
    pub struct DiagnosticReportMedia : Backbone "DiagnosticReportMedia" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Comment about the image or data (e.g. explanation)
        comment: Option<String> => "comment", "summary=false";
        /// Reference to the image or data source
        link: Option<Reference> => "link", "required";
    }
}
