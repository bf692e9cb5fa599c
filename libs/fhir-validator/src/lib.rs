//! Metadata-driven structural validation for FHIR R5 resources.
//!
//! # Architecture
//!
//! The validator separates configuration, planning, and execution:
//!
//! ```text
//! ValidatorConfig (declarative) → ValidationPlan (executable) → Validator (reusable)
//! ```
//!
//! [`ValidatorConfig`] is serializable and preset-based. It compiles into a
//! [`ValidationPlan`], which a [`Validator`] owns. Each `validate()` call walks
//! the resource tree once, pairing every record's type descriptor with its
//! field values, and applies the annotation rules in a fixed order:
//!
//! 1. required / non-empty
//! 2. cardinality bounds
//! 3. enumeration membership
//! 4. reference syntax (for `Reference` values)
//! 5. recursive descent into composites, backbones, choices and contained resources
//!
//! Every violation is recorded with a dotted path such as
//! `Patient.contact[0].telecom[1].value`; traversal never stops on data errors.
//!
//! # Example
//!
//! ```rust
//! use ferrite_models::r5::{Observation, Reference};
//! use ferrite_validator::Validator;
//!
//! let mut observation = Observation::default();
//! observation.status = Some("final".into());
//! observation.subject = Some(Reference::to("patient/123"));
//!
//! let err = Validator::new().validate(&observation).unwrap_err();
//! let errors = err.errors().unwrap();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.iter().next().unwrap().field, "Observation.code");
//! ```

use serde::{Deserialize, Serialize};

mod error;
mod outcome;
mod plan;
mod steps;
mod validator;

pub use error::{ConfigError, Error};
pub use outcome::{ErrorKind, IssueCode, IssueSeverity, ValidationError, ValidationErrors};
pub use plan::{MetadataPlan, ReferencesPlan, ValidationPlan};
pub use steps::references::{validate_reference, validate_reference_with};
pub use steps::structure::{validate_cardinality, validate_enum, validate_required};
pub use validator::Validator;

// ============================================================================
// Core Config
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
    #[serde(default)]
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub exec: ExecConfig,
    #[serde(default)]
    pub references: ReferencesConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    /// Accepts references to types outside the R5 catalog.
    Lenient,
    Standard,
    /// Rejects unknown annotation directives and versioned references.
    Strict,
}

// ============================================================================
// Metadata Config
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default)]
    pub strict: bool,
}

// ============================================================================
// Execution Config
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<usize>,
}

// ============================================================================
// References Config
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferencesConfig {
    #[serde(default)]
    pub mode: ReferenceMode,
    #[serde(default = "default_true")]
    pub allow_versioned: bool,
    #[serde(default = "default_true")]
    pub require_known_type: bool,
    #[serde(default = "default_true")]
    pub allow_contained: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReferenceMode {
    Off,
    #[default]
    Syntax,
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            mode: ReferenceMode::Syntax,
            allow_versioned: true,
            require_known_type: true,
            allow_contained: true,
        }
    }
}

// ============================================================================
// ValidatorConfig Implementation
// ============================================================================

impl ValidatorConfig {
    pub fn preset(p: Preset) -> Self {
        let mut cfg = Self::defaults();
        cfg.preset = Some(p);

        match p {
            Preset::Lenient => {
                cfg.references.require_known_type = false;
            }
            Preset::Standard => {}
            Preset::Strict => {
                cfg.metadata.strict = true;
                cfg.references.allow_versioned = false;
            }
        }

        cfg
    }

    pub fn defaults() -> Self {
        Self {
            preset: None,
            metadata: MetadataConfig::default(),
            exec: ExecConfig::default(),
            references: ReferencesConfig::default(),
        }
    }

    pub fn compile(&self) -> Result<ValidationPlan, ConfigError> {
        if self.exec.max_errors == Some(0) {
            return Err(ConfigError::InvalidConfig(
                "exec.max_errors must be at least 1".into(),
            ));
        }

        Ok(ValidationPlan {
            metadata: MetadataPlan::from(&self.metadata),
            references: ReferencesPlan::compile(&self.references),
            max_errors: self.exec.max_errors,
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn builder() -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::default()
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct ValidatorConfigBuilder {
    cfg: Option<ValidatorConfig>,
}

impl ValidatorConfigBuilder {
    pub fn preset(mut self, p: Preset) -> Self {
        self.cfg = Some(ValidatorConfig::preset(p));
        self
    }

    pub fn strict_metadata(mut self, strict: bool) -> Self {
        self.cfg().metadata.strict = strict;
        self
    }

    pub fn max_errors(mut self, max: usize) -> Self {
        self.cfg().exec.max_errors = Some(max);
        self
    }

    pub fn reference_mode(mut self, mode: ReferenceMode) -> Self {
        self.cfg().references.mode = mode;
        self
    }

    pub fn allow_versioned_references(mut self, allow: bool) -> Self {
        self.cfg().references.allow_versioned = allow;
        self
    }

    pub fn require_known_type(mut self, require: bool) -> Self {
        self.cfg().references.require_known_type = require;
        self
    }

    pub fn allow_contained_references(mut self, allow: bool) -> Self {
        self.cfg().references.allow_contained = allow;
        self
    }

    pub fn build(self) -> ValidatorConfig {
        self.cfg.unwrap_or_default()
    }

    fn cfg(&mut self) -> &mut ValidatorConfig {
        self.cfg.get_or_insert_with(ValidatorConfig::defaults)
    }
}
