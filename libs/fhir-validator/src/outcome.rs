//! Validation errors and their OperationOutcome rendering.

use ferrite_models::r5::{OperationOutcome, OperationOutcomeIssue};
use std::fmt;

/// What kind of constraint an error violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Required,
    Cardinality,
    Enum,
    Reference,
}

impl ErrorKind {
    pub fn issue_code(&self) -> IssueCode {
        match self {
            ErrorKind::Required => IssueCode::Required,
            ErrorKind::Cardinality => IssueCode::Structure,
            ErrorKind::Enum => IssueCode::CodeInvalid,
            ErrorKind::Reference => IssueCode::Value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Fatal,
    Error,
    Warning,
    Information,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "information",
        })
    }
}

/// The subset of `issue-type` codes this validator reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCode {
    Invalid,
    Structure,
    Required,
    Value,
    CodeInvalid,
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Invalid => "invalid",
            Self::Structure => "structure",
            Self::Required => "required",
            Self::Value => "value",
            Self::CodeInvalid => "code-invalid",
        })
    }
}

/// One violated constraint, located by a dotted path such as
/// `Patient.contact[0].telecom[1].value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub kind: ErrorKind,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
        }
    }

    fn to_issue(&self) -> OperationOutcomeIssue {
        OperationOutcomeIssue::new(
            IssueSeverity::Error.to_string(),
            self.kind.issue_code().to_string(),
        )
        .with_diagnostics(self.message.clone())
        .with_expression(self.field.clone())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Ordered list of errors from one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>, kind: ErrorKind) {
        self.push(ValidationError::new(field, message, kind));
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    /// One `error` issue per validation error, with the path as its expression.
    pub fn to_operation_outcome(&self) -> OperationOutcome {
        OperationOutcome::from_issues(self.errors.iter().map(ValidationError::to_issue))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("no validation errors");
        }
        writeln!(f, "{} validation error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
