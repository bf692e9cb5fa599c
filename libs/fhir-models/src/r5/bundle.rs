use super::{AnyResource, Extension, Identifier, Signature};
use crate::primitives::Instant;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

fhir_resource! {
    /// A container for a collection of resources.
    pub struct Bundle : Resource "Bundle" {
        /// Persistent identifier for the bundle
        identifier: Option<Identifier> => "identifier";
        r#type: Option<String> => "type", "required,enum=document|message|transaction|transaction-response|batch|batch-response|history|searchset|collection|subscription-notification";
        /// When the bundle was assembled
        timestamp: Option<Instant> => "timestamp";
        /// If search, the total number of matches
        total: Option<u32> => "total";
        /// Links related to this Bundle
        link: Vec<BundleLink> => "link";
        /// Entry in the bundle - will have a resource or information
        entry: Vec<BundleEntry> => "entry";
        /// Digital Signature
        signature: Option<Signature> => "signature";
        /// Issues with the Bundle
        issues: Option<AnyResource> => "issues";
    }
}

fhir_element! {
    pub struct BundleLink : Backbone "BundleLink" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// See http://www.iana.org/assignments/link-relations/link-relations.xhtml#link-relations-1
        relation: Option<String> => "relation", "required";
        /// Reference details for the link
        url: Option<String> => "url", "required";
    }
}

fhir_element! {
    pub struct BundleEntry : Backbone "BundleEntry" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Links related to this entry
        link: Vec<BundleLink> => "link";
        /// URI for resource (e.g. the absolute URL server address, URI for UUID/OID, etc.)
        full_url: Option<String> => "fullUrl";
        /// A resource in the bundle
        resource: Option<AnyResource> => "resource";
        /// Search related information
        search: Option<BundleEntrySearch> => "search";
        /// Additional execution information (transaction/batch/history)
        request: Option<BundleEntryRequest> => "request";
        /// Results of execution (transaction/batch/history)
        response: Option<BundleEntryResponse> => "response";
    }
}

fhir_element! {
    pub struct BundleEntrySearch : Backbone "BundleEntrySearch" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        mode: Option<String> => "mode", "enum=match|include|outcome";
        /// Search ranking (between 0 and 1)
        score: Option<Decimal> => "score";
    }
}

fhir_element! {
    pub struct BundleEntryRequest : Backbone "BundleEntryRequest" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        method: Option<String> => "method", "required,enum=GET|HEAD|POST|PUT|DELETE|PATCH";
        /// URL for HTTP equivalent of this entry
        url: Option<String> => "url", "required";
        /// For managing cache validation
        if_none_match: Option<String> => "ifNoneMatch";
        /// For managing cache currency
        if_modified_since: Option<Instant> => "ifModifiedSince";
        /// For managing update contention
        if_match: Option<String> => "ifMatch";
        /// For conditional creates
        if_none_exist: Option<String> => "ifNoneExist";
    }
}

fhir_element! {
    pub struct BundleEntryResponse : Backbone "BundleEntryResponse" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Status response code (text optional)
        status: Option<String> => "status", "required";
        /// The location (if the operation returns a location)
        location: Option<String> => "location";
        /// The Etag for the resource (if relevant)
        etag: Option<String> => "etag";
        /// Server's date time modified
        last_modified: Option<Instant> => "lastModified";
        /// OperationOutcome with hints and warnings (for batch/transaction)
        outcome: Option<AnyResource> => "outcome";
    }
}

/// Bundle.type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleType {
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
    History,
    Searchset,
    Collection,
    SubscriptionNotification,
}

impl BundleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Message => "message",
            Self::Transaction => "transaction",
            Self::TransactionResponse => "transaction-response",
            Self::Batch => "batch",
            Self::BatchResponse => "batch-response",
            Self::History => "history",
            Self::Searchset => "searchset",
            Self::Collection => "collection",
            Self::SubscriptionNotification => "subscription-notification",
        }
    }
}

impl fmt::Display for BundleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BundleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "document" => Self::Document,
            "message" => Self::Message,
            "transaction" => Self::Transaction,
            "transaction-response" => Self::TransactionResponse,
            "batch" => Self::Batch,
            "batch-response" => Self::BatchResponse,
            "history" => Self::History,
            "searchset" => Self::Searchset,
            "collection" => Self::Collection,
            "subscription-notification" => Self::SubscriptionNotification,
            other => return Err(format!("unknown bundle type '{other}'")),
        })
    }
}

impl Bundle {
    /// Create a new Bundle with minimal required fields
    pub fn new(bundle_type: BundleType) -> Self {
        Self {
            r#type: Some(bundle_type.as_str().to_string()),
            ..Default::default()
        }
    }

    /// The declared type, if it is one of the known codes.
    pub fn bundle_type(&self) -> Option<BundleType> {
        self.r#type.as_deref().and_then(|t| t.parse().ok())
    }

    pub fn is_transaction(&self) -> bool {
        self.bundle_type() == Some(BundleType::Transaction)
    }

    pub fn is_batch(&self) -> bool {
        self.bundle_type() == Some(BundleType::Batch)
    }

    pub fn is_searchset(&self) -> bool {
        self.bundle_type() == Some(BundleType::Searchset)
    }

    pub fn entry_count(&self) -> usize {
        self.entry.len()
    }

    pub fn entries(&self) -> &[BundleEntry] {
        &self.entry
    }

    pub fn add_link(&mut self, relation: impl Into<String>, url: impl Into<String>) {
        self.link.push(BundleLink {
            relation: Some(relation.into()),
            url: Some(url.into()),
            ..Default::default()
        });
    }

    /// The first link with the given relation (`self`, `next`, ...).
    pub fn link(&self, relation: &str) -> Option<&str> {
        self.link
            .iter()
            .find(|l| l.relation.as_deref() == Some(relation))
            .and_then(|l| l.url.as_deref())
    }
}

impl BundleEntry {
    pub fn new(resource: impl Into<AnyResource>) -> Self {
        Self {
            resource: Some(resource.into()),
            ..Default::default()
        }
    }

    pub fn with_full_url(mut self, full_url: impl Into<String>) -> Self {
        self.full_url = Some(full_url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r5::Patient;

    #[test]
    fn bundle_type_codes() {
        let bundle = Bundle::new(BundleType::TransactionResponse);
        assert_eq!(bundle.r#type.as_deref(), Some("transaction-response"));
        assert_eq!(bundle.bundle_type(), Some(BundleType::TransactionResponse));
        assert!("subscription-notification".parse::<BundleType>().is_ok());
        assert!("bogus".parse::<BundleType>().is_err());
    }

    #[test]
    fn is_transaction() {
        let bundle = Bundle::new(BundleType::Transaction);
        assert!(bundle.is_transaction());
        assert!(!bundle.is_batch());
        assert!(!bundle.is_searchset());
    }

    #[test]
    fn unknown_type_code_has_no_bundle_type() {
        let bundle = Bundle {
            r#type: Some("whatever".into()),
            ..Default::default()
        };
        assert_eq!(bundle.bundle_type(), None);
    }

    #[test]
    fn add_link_and_lookup() {
        let mut bundle = Bundle::new(BundleType::Searchset);
        bundle.add_link("self", "http://example.org/fhir/Patient?_id=123");
        assert_eq!(bundle.link.len(), 1);
        assert_eq!(
            bundle.link("self"),
            Some("http://example.org/fhir/Patient?_id=123")
        );
        assert_eq!(bundle.link("next"), None);
    }

    #[test]
    fn entry_builder() {
        let entry = BundleEntry::new(Patient::new("123")).with_full_url("urn:uuid:0c3151bd-1cbf-4d64-b04d-cd9187a4c6e0");
        assert_eq!(entry.resource.as_ref().and_then(AnyResource::id), Some("123"));
        let mut bundle = Bundle::new(BundleType::Collection);
        bundle.entry.push(entry);
        assert_eq!(bundle.entry_count(), 1);
    }
}
