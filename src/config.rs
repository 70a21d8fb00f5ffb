//! Configuration for URI construction and serialization
//!
//! The original tooling kept these switches in process-global state; here the
//! configuration is an explicit value held by each `Document` and threaded
//! into the operations whose behavior branches on it.

use crate::constants;
use crate::error::{SbolError, SbolResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Output format selected for `Document::write`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SerializationFormat {
    /// Nested SBOL-flavored RDF/XML (.xml) — the interchange default
    RdfXml,
    /// Flat N-Triples (.nt)
    NTriples,
    /// Subject-grouped JSON (.json)
    Json,
}

/// Configuration variables for a `Document`
///
/// `compliant_uris` enables autoconstruction of URIs following the SBOL
/// versioning scheme (`{homespace}/{Class}/{displayId}/{version}`);
/// `typed_uris` controls whether the class name segment is included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The authoritative namespace for objects created by this Document
    pub homespace: String,

    /// Autoconstruct URIs consistent with SBOL's versioning scheme
    pub compliant_uris: bool,

    /// Include the object's class name in SBOL-compliant URIs
    pub typed_uris: bool,

    /// Serialization format used by `Document::write`
    pub format: SerializationFormat,

    /// Run the validator once per write (findings are warnings, never fatal)
    pub validate_on_write: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            homespace: String::new(),
            compliant_uris: true,
            typed_uris: true,
            format: SerializationFormat::RdfXml,
            validate_on_write: true,
        }
    }
}

impl Config {
    /// Create a configuration with the given homespace and all defaults
    pub fn with_homespace(homespace: impl Into<String>) -> Self {
        Self {
            homespace: homespace.into(),
            ..Self::default()
        }
    }

    /// Check whether a homespace has been set
    pub fn has_homespace(&self) -> bool {
        !self.homespace.is_empty()
    }

    /// Construct an SBOL-compliant URI for an object of the given class
    ///
    /// Fails with `Compliance` when compliant URIs are disabled or when no
    /// homespace is set.
    pub fn compliant_uri(
        &self,
        type_uri: &str,
        display_id: &str,
        version: &str,
    ) -> SbolResult<String> {
        if !self.compliant_uris {
            return Err(SbolError::Compliance(
                "SBOL-compliant URIs are disabled in this configuration".to_string(),
            ));
        }
        if !self.has_homespace() {
            return Err(SbolError::Compliance(
                "cannot construct a compliant URI without a homespace".to_string(),
            ));
        }
        let class_name = constants::parse_class_name(type_uri);
        let prefix = self.homespace.trim_end_matches('/');
        if self.typed_uris {
            Ok(format!("{}/{}/{}/{}", prefix, class_name, display_id, version))
        } else {
            Ok(format!("{}/{}/{}", prefix, display_id, version))
        }
    }

    /// Construct a non-compliant URI by prefixing the homespace when one is
    /// set, passing the URI through unchanged otherwise.
    pub fn noncompliant_uri(&self, uri: &str) -> String {
        if self.has_homespace() && !uri.contains("://") {
            format!("{}/{}", self.homespace.trim_end_matches('/'), uri)
        } else {
            uri.to_string()
        }
    }
}

/// Generate a random alphanumeric identifier, used to autoconstruct URIs for
/// anonymous objects.
pub fn random_identifier(len: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SBOL_COMPONENT_DEFINITION;

    #[test]
    fn test_compliant_uri() {
        let cfg = Config::with_homespace("http://examples.org");
        let uri = cfg
            .compliant_uri(SBOL_COMPONENT_DEFINITION, "cd1", "1.0.0")
            .unwrap();
        assert_eq!(uri, "http://examples.org/ComponentDefinition/cd1/1.0.0");
    }

    #[test]
    fn test_untyped_compliant_uri() {
        let mut cfg = Config::with_homespace("http://examples.org/");
        cfg.typed_uris = false;
        let uri = cfg
            .compliant_uri(SBOL_COMPONENT_DEFINITION, "cd1", "1.0.0")
            .unwrap();
        assert_eq!(uri, "http://examples.org/cd1/1.0.0");
    }

    #[test]
    fn test_compliance_disabled() {
        let mut cfg = Config::with_homespace("http://examples.org");
        cfg.compliant_uris = false;
        assert!(cfg
            .compliant_uri(SBOL_COMPONENT_DEFINITION, "cd1", "1.0.0")
            .is_err());
    }

    #[test]
    fn test_missing_homespace() {
        let cfg = Config::default();
        assert!(cfg
            .compliant_uri(SBOL_COMPONENT_DEFINITION, "cd1", "1.0.0")
            .is_err());
    }

    #[test]
    fn test_noncompliant_uri() {
        let cfg = Config::with_homespace("http://examples.org/");
        assert_eq!(cfg.noncompliant_uri("cd1"), "http://examples.org/cd1");
        // Absolute URIs pass through unchanged
        assert_eq!(
            cfg.noncompliant_uri("http://other.org/designs#gfp"),
            "http://other.org/designs#gfp"
        );
        let bare = Config::default();
        assert_eq!(bare.noncompliant_uri("cd1"), "cd1");
    }

    #[test]
    fn test_random_identifier() {
        let a = random_identifier(16);
        let b = random_identifier(16);
        assert_eq!(a.len(), 16);
        assert_ne!(a, b);
    }
}
