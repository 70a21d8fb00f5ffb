//! Namespace and prefix management
//!
//! Handles prefix declarations for the serialized RDF/XML output and compact
//! qualified names for element tags.

use crate::constants;
use indexmap::IndexMap;

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix
    pub prefix: String,
    /// IRI, including the trailing `#` or `/` separator
    pub iri: String,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Namespace manager seeded with the prefixes every SBOL document declares
#[derive(Debug, Clone)]
pub struct NamespaceManager {
    /// Prefix → IRI mappings, in declaration order
    prefixes: IndexMap<String, String>,
    /// Counter for generated prefixes (ns0, ns1, ...)
    generated: usize,
}

impl NamespaceManager {
    /// Create a manager with the core SBOL document prefixes
    pub fn new() -> Self {
        let mut mgr = Self {
            prefixes: IndexMap::new(),
            generated: 0,
        };

        mgr.add_prefix("rdf", constants::RDF_URI);
        mgr.add_prefix("rdfs", constants::RDFS_URI);
        mgr.add_prefix("xsd", constants::XSD_URI);
        mgr.add_prefix("sbol", format!("{}#", constants::SBOL_URI));
        mgr.add_prefix("dcterms", constants::PURL_URI);
        mgr.add_prefix("prov", constants::PROV_URI);
        mgr.add_prefix("so", constants::SO_URI);

        mgr
    }

    /// Add a prefix mapping; an existing binding for the prefix is replaced
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Get the IRI bound to a prefix
    pub fn get_iri(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(|s| s.as_str())
    }

    /// Get the prefix bound to a namespace IRI
    pub fn get_prefix(&self, iri: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|(_, ns)| ns.as_str() == iri)
            .map(|(p, _)| p.as_str())
    }

    /// Check whether a namespace IRI is declared
    pub fn contains_iri(&self, iri: &str) -> bool {
        self.prefixes.values().any(|ns| ns == iri)
    }

    /// Expand a compact IRI (`prefix:local`) to a full IRI
    pub fn expand(&self, compact_iri: &str) -> Option<String> {
        let pos = compact_iri.find(':')?;
        let iri = self.get_iri(&compact_iri[..pos])?;
        Some(format!("{}{}", iri, &compact_iri[pos + 1..]))
    }

    /// Compact a full IRI to `prefix:local` using known prefixes
    pub fn compact(&self, iri: &str) -> Option<String> {
        for (prefix, namespace_iri) in &self.prefixes {
            if let Some(local) = iri.strip_prefix(namespace_iri.as_str()) {
                if !local.is_empty() && !local.contains(['/', '#']) {
                    return Some(format!("{}:{}", prefix, local));
                }
            }
        }
        None
    }

    /// Compact a full IRI, registering a generated `nsN` prefix for its
    /// namespace when no declared prefix covers it. Used while emitting XML so
    /// every element tag has a qualified name.
    pub fn compact_or_register(&mut self, iri: &str) -> String {
        if let Some(qname) = self.compact(iri) {
            return qname;
        }
        let ns = constants::parse_namespace(iri);
        let local = constants::parse_class_name(iri);
        if ns.is_empty() {
            return iri.to_string();
        }
        let prefix = format!("ns{}", self.generated);
        self.generated += 1;
        self.add_prefix(prefix.clone(), ns);
        format!("{}:{}", prefix, local)
    }

    /// All registered namespaces in declaration order
    pub fn namespaces(&self) -> Vec<Namespace> {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| Namespace::new(prefix.clone(), iri.clone()))
            .collect()
    }

    /// All registered namespace IRIs
    pub fn iris(&self) -> Vec<&str> {
        self.prefixes.values().map(|s| s.as_str()).collect()
    }
}

impl Default for NamespaceManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_prefixes() {
        let mgr = NamespaceManager::new();
        assert_eq!(mgr.get_iri("rdf").unwrap(), constants::RDF_URI);
        assert_eq!(mgr.get_iri("sbol").unwrap(), "http://sbols.org/v2#");
        assert!(mgr.contains_iri("http://purl.org/dc/terms/"));
    }

    #[test]
    fn test_expand_and_compact() {
        let mgr = NamespaceManager::new();
        assert_eq!(
            mgr.expand("sbol:Sequence").unwrap(),
            "http://sbols.org/v2#Sequence"
        );
        assert_eq!(
            mgr.compact("http://sbols.org/v2#Sequence").unwrap(),
            "sbol:Sequence"
        );
        assert!(mgr.compact("http://unknown.org/x#Thing").is_none());
    }

    #[test]
    fn test_compact_or_register_generates_prefix() {
        let mut mgr = NamespaceManager::new();
        let qname = mgr.compact_or_register("http://unknown.org/x#Thing");
        assert_eq!(qname, "ns0:Thing");
        assert_eq!(mgr.get_iri("ns0").unwrap(), "http://unknown.org/x#");

        // Second hit on the same namespace reuses the registered prefix
        let qname = mgr.compact_or_register("http://unknown.org/x#Other");
        assert_eq!(qname, "ns0:Other");
    }
}
