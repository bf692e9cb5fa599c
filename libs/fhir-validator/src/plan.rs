use crate::{MetadataConfig, ReferenceMode, ReferencesConfig};

/// Compiled, immutable form of a [`ValidatorConfig`](crate::ValidatorConfig).
#[derive(Debug, Clone)]
pub struct ValidationPlan {
    pub metadata: MetadataPlan,
    /// Reference syntax checks; `None` when disabled.
    pub references: Option<ReferencesPlan>,
    /// Stop recording after this many errors; `None` lists every violation.
    pub max_errors: Option<usize>,
}

impl Default for ValidationPlan {
    fn default() -> Self {
        Self {
            metadata: MetadataPlan::default(),
            references: Some(ReferencesPlan::default()),
            max_errors: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MetadataPlan {
    /// Unknown annotation directives are programmer errors.
    pub strict: bool,
}

impl From<&MetadataConfig> for MetadataPlan {
    fn from(cfg: &MetadataConfig) -> Self {
        Self { strict: cfg.strict }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencesPlan {
    pub allow_versioned: bool,
    pub require_known_type: bool,
    pub allow_contained: bool,
}

impl Default for ReferencesPlan {
    fn default() -> Self {
        Self {
            allow_versioned: true,
            require_known_type: true,
            allow_contained: true,
        }
    }
}

impl ReferencesPlan {
    pub(crate) fn compile(cfg: &ReferencesConfig) -> Option<Self> {
        match cfg.mode {
            ReferenceMode::Off => None,
            ReferenceMode::Syntax => Some(Self {
                allow_versioned: cfg.allow_versioned,
                require_known_type: cfg.require_known_type,
                allow_contained: cfg.allow_contained,
            }),
        }
    }
}
