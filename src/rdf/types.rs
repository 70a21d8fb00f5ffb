//! RDF wire types for the flat triple stream
//!
//! The property store keeps every value as a raw marker-wrapped string:
//! URIs as `<...>`, literals as `"..."`. `RdfValue` is the typed view of that
//! encoding, and `Triple` is the unit exchanged with the I/O collaborators.

use crate::error::{SbolError, SbolResult};
use oxrdf::NamedNode;
use std::fmt;

/// A URI or literal in the object position of a triple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfValue {
    /// Named node (IRI)
    Uri(String),
    /// Literal value
    Literal(String),
}

impl RdfValue {
    /// Decode a raw property-store value by its leading marker character.
    ///
    /// `<uri>` decodes to `Uri`; anything else is treated as a literal with
    /// surrounding quotes stripped when present.
    pub fn from_raw(raw: &str) -> Self {
        if raw.starts_with('<') && raw.ends_with('>') && raw.len() >= 2 {
            RdfValue::Uri(raw[1..raw.len() - 1].to_string())
        } else if raw.starts_with('"') && raw.ends_with('"') && raw.len() >= 2 {
            RdfValue::Literal(raw[1..raw.len() - 1].to_string())
        } else {
            RdfValue::Literal(raw.to_string())
        }
    }

    /// Encode into the raw marker-wrapped property-store form
    pub fn to_raw(&self) -> String {
        match self {
            RdfValue::Uri(uri) => format!("<{}>", uri),
            RdfValue::Literal(text) => format!("\"{}\"", text),
        }
    }

    /// The marker-stripped value
    pub fn value(&self) -> &str {
        match self {
            RdfValue::Uri(uri) => uri,
            RdfValue::Literal(text) => text,
        }
    }

    /// Check if this is a URI value
    pub fn is_uri(&self) -> bool {
        matches!(self, RdfValue::Uri(_))
    }

    /// Check if this is a literal value
    pub fn is_literal(&self) -> bool {
        matches!(self, RdfValue::Literal(_))
    }
}

impl fmt::Display for RdfValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_raw())
    }
}

/// RDF triple (subject-predicate-object)
///
/// Subjects and predicates are always IRIs in the SBOL serialization; blank
/// nodes are not part of the on-wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject IRI
    pub subject: String,
    /// Predicate IRI
    pub predicate: String,
    /// Object (IRI or literal)
    pub object: RdfValue,
}

impl Triple {
    /// Create a new triple
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: RdfValue,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> <{}> {} .", self.subject, self.predicate, self.object)
    }
}

/// Validate that a string is a well-formed IRI
pub fn validate_iri(iri: &str) -> SbolResult<()> {
    NamedNode::new(iri)
        .map(|_| ())
        .map_err(|e| SbolError::InvalidArgument(format!("invalid IRI {:?}: {}", iri, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_round_trip() {
        let uri = RdfValue::from_raw("<http://example.org/a>");
        assert_eq!(uri, RdfValue::Uri("http://example.org/a".to_string()));
        assert_eq!(uri.to_raw(), "<http://example.org/a>");

        let lit = RdfValue::from_raw("\"atcg\"");
        assert_eq!(lit, RdfValue::Literal("atcg".to_string()));
        assert_eq!(lit.to_raw(), "\"atcg\"");
    }

    #[test]
    fn test_sentinels_decode_to_empty() {
        assert_eq!(RdfValue::from_raw("<>"), RdfValue::Uri(String::new()));
        assert_eq!(RdfValue::from_raw("\"\""), RdfValue::Literal(String::new()));
    }

    #[test]
    fn test_bare_string_is_literal() {
        let lit = RdfValue::from_raw("plain text");
        assert_eq!(lit, RdfValue::Literal("plain text".to_string()));
    }

    #[test]
    fn test_triple_display() {
        let t = Triple::new(
            "http://example.org/a",
            "http://example.org/b",
            RdfValue::Literal("c".to_string()),
        );
        assert_eq!(
            t.to_string(),
            "<http://example.org/a> <http://example.org/b> \"c\" ."
        );
    }

    #[test]
    fn test_validate_iri() {
        assert!(validate_iri("http://example.org/alice").is_ok());
        assert!(validate_iri("not a uri").is_err());
    }
}
