use super::{CodeableConcept, Extension};

fhir_resource! {
    /// Information about the success/failure of an action.
    pub struct OperationOutcome : DomainResource "OperationOutcome" {
        /// A single issue associated with the action
        issue: Vec<OperationOutcomeIssue> => "issue", "cardinality=1..*";
    }
}

fhir_element! {
    pub struct OperationOutcomeIssue : Backbone "OperationOutcomeIssue" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        severity: Option<String> => "severity", "required,enum=fatal|error|warning|information|success";
        code: Option<String> => "code", "required,enum=invalid|structure|required|value|invariant|security|login|unknown|expired|forbidden|suppressed|processing|not-supported|duplicate|multiple-matches|not-found|deleted|too-long|code-invalid|extension|too-costly|business-rule|conflict|limited-filter|transient|lock-error|no-store|exception|timeout|incomplete|throttled|informational|success";
        /// Additional details about the error
        details: Option<CodeableConcept> => "details";
        /// Additional diagnostic information about the issue
        diagnostics: Option<String> => "diagnostics";
        /// Deprecated: Path of element(s) related to issue
        location: Vec<String> => "location";
        /// FHIRPath of element(s) related to issue
        expression: Vec<String> => "expression";
    }
}

impl OperationOutcome {
    pub fn from_issues(issues: impl IntoIterator<Item = OperationOutcomeIssue>) -> Self {
        Self {
            issue: issues.into_iter().collect(),
            ..Default::default()
        }
    }

    /// True when any issue is `error` or `fatal`.
    pub fn has_errors(&self) -> bool {
        self.issue
            .iter()
            .any(|i| matches!(i.severity.as_deref(), Some("error" | "fatal")))
    }
}

impl OperationOutcomeIssue {
    pub fn new(severity: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            severity: Some(severity.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: impl Into<String>) -> Self {
        self.diagnostics = Some(diagnostics.into());
        self
    }

    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression.push(expression.into());
        self
    }
}
