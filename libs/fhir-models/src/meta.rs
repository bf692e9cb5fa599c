//! Field annotations.
//!
//! Every field in the catalog carries a comma-separated annotation string:
//!
//! | Directive | Effect |
//! |---|---|
//! | `required` | value must be present and non-empty |
//! | `cardinality=min..max` | bounds on the number of values; `*` = unbounded |
//! | `enum=a\|b\|c` | value (or each element) must match one literal |
//! | `summary=false` | omit from the summary projection |
//!
//! Unknown directives are kept aside so strict consumers can reject them.

use crate::error::TagError;
use std::fmt;

/// Number of values a field may hold. `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    pub min: u32,
    pub max: Option<u32>,
}

impl Cardinality {
    pub const OPTIONAL: Cardinality = Cardinality {
        min: 0,
        max: Some(1),
    };
    pub const REPEATED: Cardinality = Cardinality { min: 0, max: None };

    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub fn is_required(&self) -> bool {
        self.min > 0
    }

    pub fn is_array(&self) -> bool {
        self.max.map_or(true, |m| m > 1)
    }

    pub fn contains(&self, count: usize) -> bool {
        count >= self.min as usize && self.max.map_or(true, |m| count <= m as usize)
    }

    fn parse(value: &str) -> Result<Self, TagError> {
        let malformed = || TagError::MalformedCardinality(value.to_string());
        let (min, max) = value.split_once("..").ok_or_else(malformed)?;
        let min: u32 = min.trim().parse().map_err(|_| malformed())?;
        let max = match max.trim() {
            "*" => None,
            m => Some(m.parse::<u32>().map_err(|_| malformed())?),
        };
        if let Some(max) = max {
            if min > max {
                return Err(TagError::InvertedCardinality { min, max });
            }
        }
        Ok(Self { min, max })
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..{}", self.min, max),
            None => write!(f, "{}..*", self.min),
        }
    }
}

/// Parsed form of a field annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMeta {
    pub required: bool,
    /// Explicit bounds, if the annotation declares them.
    pub cardinality: Option<Cardinality>,
    /// Permitted literals; empty when unconstrained.
    pub enumeration: Vec<String>,
    pub summary: bool,
    /// Directives this parser does not understand.
    pub unknown: Vec<String>,
}

impl Default for FieldMeta {
    fn default() -> Self {
        Self {
            required: false,
            cardinality: None,
            enumeration: Vec::new(),
            summary: true,
            unknown: Vec::new(),
        }
    }
}

impl FieldMeta {
    pub fn parse(tag: &str) -> Result<Self, TagError> {
        let mut meta = FieldMeta::default();

        for directive in tag.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            let (key, value) = match directive.split_once('=') {
                Some((k, v)) => (k.trim(), Some(v.trim())),
                None => (directive, None),
            };

            match (key, value) {
                ("required", None) => meta.required = true,
                ("cardinality", Some(v)) => {
                    let cardinality = Cardinality::parse(v)?;
                    if cardinality.is_required() {
                        meta.required = true;
                    }
                    meta.cardinality = Some(cardinality);
                }
                ("cardinality", None) => {
                    return Err(TagError::MalformedCardinality(String::new()));
                }
                ("enum", v) => {
                    let values: Vec<String> = v
                        .unwrap_or_default()
                        .split('|')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect();
                    if values.is_empty() {
                        return Err(TagError::EmptyEnum);
                    }
                    meta.enumeration = values;
                }
                ("summary", None) | ("summary", Some("true")) => meta.summary = true,
                ("summary", Some("false")) => meta.summary = false,
                ("summary", Some(other)) => {
                    return Err(TagError::MalformedSummary(other.to_string()));
                }
                _ => meta.unknown.push(directive.to_string()),
            }
        }

        Ok(meta)
    }

    pub fn allows(&self, literal: &str) -> bool {
        self.enumeration.is_empty() || self.enumeration.iter().any(|e| e == literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tag_is_optional_and_in_summary() {
        let meta = FieldMeta::parse("").unwrap();
        assert!(!meta.required);
        assert!(meta.summary);
        assert!(meta.cardinality.is_none());
        assert!(meta.enumeration.is_empty());
    }

    #[test]
    fn parses_every_directive() {
        let meta =
            FieldMeta::parse("required, cardinality=1..3, enum=a|b|c, summary=false").unwrap();
        assert!(meta.required);
        assert_eq!(meta.cardinality, Some(Cardinality::new(1, Some(3))));
        assert_eq!(meta.enumeration, vec!["a", "b", "c"]);
        assert!(!meta.summary);
    }

    #[test]
    fn one_to_one_implies_required() {
        let meta = FieldMeta::parse("cardinality=1..1").unwrap();
        assert!(meta.required);
    }

    #[test]
    fn star_means_unbounded() {
        let meta = FieldMeta::parse("cardinality=0..*").unwrap();
        let card = meta.cardinality.unwrap();
        assert_eq!(card.max, None);
        assert!(card.contains(10_000));
        assert_eq!(card.to_string(), "0..*");
    }

    #[test]
    fn unknown_directives_are_kept_aside() {
        let meta = FieldMeta::parse("required,choice=value,binding").unwrap();
        assert!(meta.required);
        assert_eq!(meta.unknown, vec!["choice=value", "binding"]);
    }

    #[test]
    fn malformed_cardinality_is_rejected() {
        for tag in ["cardinality=1-3", "cardinality=a..b", "cardinality=1..", "cardinality"] {
            assert!(
                matches!(FieldMeta::parse(tag), Err(TagError::MalformedCardinality(_))),
                "{tag} should be rejected"
            );
        }
    }

    #[test]
    fn inverted_cardinality_is_rejected() {
        assert_eq!(
            FieldMeta::parse("cardinality=3..1"),
            Err(TagError::InvertedCardinality { min: 3, max: 1 })
        );
    }

    #[test]
    fn empty_enum_is_rejected() {
        assert_eq!(FieldMeta::parse("enum="), Err(TagError::EmptyEnum));
    }

    #[test]
    fn enum_membership_is_case_sensitive() {
        let meta = FieldMeta::parse("enum=active|inactive").unwrap();
        assert!(meta.allows("active"));
        assert!(!meta.allows("Active"));
    }
}
