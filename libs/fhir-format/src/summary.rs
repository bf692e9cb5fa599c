//! Summary projections (`_summary`).

use ferrite_models::descriptor::FieldDescriptor;
use std::fmt;
use std::str::FromStr;

/// Which fields survive encoding.
///
/// Every mode other than [`SummaryMode::Full`] yields a key-subset of the full
/// encoding; values at shared keys are identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SummaryMode {
    /// Every field (`_summary=false`).
    #[default]
    Full,
    /// Only fields marked as summary, at every depth.
    True,
    /// `id`, `meta`, `text` and the mandatory top-level fields.
    Text,
    /// Everything except the top-level narrative.
    Data,
}

impl SummaryMode {
    /// Whether `field` is emitted. `top_level` is true for the fields of a
    /// resource itself, including contained and bundled resources.
    pub fn includes(&self, field: &FieldDescriptor, top_level: bool) -> bool {
        match self {
            SummaryMode::Full => true,
            SummaryMode::True => field.is_summary(),
            SummaryMode::Data => !(top_level && field.json_name == "text"),
            SummaryMode::Text => {
                !top_level
                    || matches!(field.json_name, "id" | "meta" | "text")
                    || field.is_required()
                    || field.cardinality().is_required()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryMode::Full => "false",
            SummaryMode::True => "true",
            SummaryMode::Text => "text",
            SummaryMode::Data => "data",
        }
    }
}

impl fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryMode {
    type Err = String;

    /// Parses the values of the `_summary` search parameter. `count` is not a
    /// projection and is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "false" => Ok(SummaryMode::Full),
            "true" => Ok(SummaryMode::True),
            "text" => Ok(SummaryMode::Text),
            "data" => Ok(SummaryMode::Data),
            other => Err(format!("unsupported summary mode '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrite_models::descriptor::{Shape, ValueKind};
    use ferrite_models::FieldMeta;

    fn field(json_name: &'static str, tag: &str) -> FieldDescriptor {
        FieldDescriptor {
            name: json_name,
            json_name,
            shape: Shape::Single,
            kind: ValueKind::Primitive,
            choices: &[],
            meta: FieldMeta::parse(tag).unwrap(),
        }
    }

    #[test]
    fn true_mode_follows_summary_flag() {
        assert!(SummaryMode::True.includes(&field("gender", ""), true));
        assert!(!SummaryMode::True.includes(&field("telecom", "summary=false"), true));
        assert!(!SummaryMode::True.includes(&field("telecom", "summary=false"), false));
        assert!(SummaryMode::Full.includes(&field("telecom", "summary=false"), true));
    }

    #[test]
    fn text_mode_keeps_narrative_and_mandatory_fields() {
        let mode = SummaryMode::Text;
        assert!(mode.includes(&field("text", "summary=false"), true));
        assert!(mode.includes(&field("id", ""), true));
        assert!(mode.includes(&field("status", "required"), true));
        assert!(mode.includes(&field("issue", "cardinality=1..*"), true));
        assert!(!mode.includes(&field("gender", ""), true));
        assert!(mode.includes(&field("family", ""), false));
    }

    #[test]
    fn data_mode_drops_only_top_level_text() {
        assert!(!SummaryMode::Data.includes(&field("text", "summary=false"), true));
        assert!(SummaryMode::Data.includes(&field("text", ""), false));
        assert!(SummaryMode::Data.includes(&field("photo", "summary=false"), true));
    }

    #[test]
    fn parses_summary_parameter() {
        assert_eq!("true".parse::<SummaryMode>(), Ok(SummaryMode::True));
        assert_eq!("false".parse::<SummaryMode>(), Ok(SummaryMode::Full));
        assert!("count".parse::<SummaryMode>().is_err());
        assert_eq!(SummaryMode::Data.to_string(), "data");
    }
}
