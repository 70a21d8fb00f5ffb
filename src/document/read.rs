//! Parse driver: flat triple stream in, ownership forest out
//!
//! The input text is parsed once into a fully-buffered triple stream, then
//! three standalone passes run over an explicit [`ParseState`]:
//!
//! 1. **create** — instantiate an object per `rdf:type` statement, through
//!    the registry when the type is known, as a bare generic object when not.
//! 2. **assign** — route every other statement to its subject: ownership
//!    edges move children out of the pending roots, plain statements append
//!    to the property store, undeclared predicates become extension data.
//! 3. **reconcile** — decide the fate of roots that are not top-level types:
//!    promote those carrying a persistent identity, nest those a parent
//!    references under the inferred annotation property, keep the rest.

use super::Document;
use crate::constants::{
    parse_class_name, parse_namespace, RDF_TYPE, SBOL_PERSISTENT_IDENTITY,
};
use crate::error::{SbolError, SbolResult};
use crate::object::{lookup, registered_top_level, SBOLObject};
use crate::rdf::{self, RdfValue, Triple};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The pending forest under construction: roots keyed by identity
#[derive(Debug, Default)]
pub(crate) struct ParseState {
    pub(crate) pending: IndexMap<String, SBOLObject>,
}

impl ParseState {
    fn find(&self, uri: &str) -> Option<&SBOLObject> {
        self.pending.values().find_map(|root| root.find(uri))
    }

    fn find_mut(&mut self, uri: &str) -> Option<&mut SBOLObject> {
        self.pending.values_mut().find_map(|root| root.find_mut(uri))
    }
}

impl Document {
    /// Replace this document's content with the objects parsed from a file
    pub fn read(&mut self, path: impl AsRef<Path>) -> SbolResult<()> {
        let text = fs::read_to_string(path)?;
        self.read_string(&text)
    }

    /// Replace this document's content with the objects parsed from text
    pub fn read_string(&mut self, text: &str) -> SbolResult<()> {
        self.clear();
        self.append_string(text)
    }

    /// Merge the objects parsed from a file into the existing content
    pub fn append(&mut self, path: impl AsRef<Path>) -> SbolResult<()> {
        let text = fs::read_to_string(path)?;
        self.append_string(&text)
    }

    /// Merge the objects parsed from text into the existing content.
    ///
    /// The format is sniffed from the text: a leading `{` is the JSON form,
    /// an XML declaration or `rdf:RDF` root is RDF/XML, anything else
    /// N-Triples.
    pub fn append_string(&mut self, text: &str) -> SbolResult<()> {
        let trimmed = text.trim_start();
        let looks_like_xml = trimmed.starts_with("<?xml") || trimmed.starts_with("<rdf:RDF");
        let triples = if looks_like_xml {
            for ns in rdf::extract_namespaces(text) {
                if !ns.prefix.is_empty() {
                    self.namespaces.add_prefix(ns.prefix, ns.iri);
                }
            }
            rdf::parse_rdfxml(text)?
        } else if trimmed.starts_with('{') {
            rdf::parse_json(text)?
        } else {
            rdf::parse_ntriples(text)?
        };

        let mut state = ParseState::default();
        pass_create(&mut state, &triples);
        pass_assign(&mut state, &triples)?;
        pass_reconcile(&mut state)?;

        info!(
            roots = state.pending.len(),
            statements = triples.len(),
            "parsed document content"
        );
        for (_, obj) in state.pending {
            self.add(obj)?;
        }
        Ok(())
    }
}

/// Pass 1: one object per distinct `rdf:type` subject.
///
/// Registry hits go through the class factory and then have every scalar
/// slot reset to its sentinel, so constructor defaults cannot masquerade as
/// parsed data. Unknown types survive as bare generic objects tagged with
/// the raw type URI.
pub(crate) fn pass_create(state: &mut ParseState, triples: &[Triple]) {
    for triple in triples {
        if triple.predicate != RDF_TYPE {
            continue;
        }
        let RdfValue::Uri(type_uri) = &triple.object else {
            continue;
        };
        if state.pending.contains_key(&triple.subject) {
            continue;
        }
        let obj = match lookup(type_uri) {
            Some(entry) => {
                let mut obj = (entry.factory)();
                obj.reset_to_sentinels();
                obj.set_identity(&triple.subject);
                obj
            }
            None => {
                debug!(type_uri = %type_uri, subject = %triple.subject,
                       "unregistered type, keeping as generic object");
                SBOLObject::new(type_uri.clone(), triple.subject.clone())
            }
        };
        state.pending.insert(triple.subject.clone(), obj);
    }
}

/// Pass 2: route every non-type statement to its subject.
pub(crate) fn pass_assign(state: &mut ParseState, triples: &[Triple]) -> SbolResult<()> {
    for triple in triples {
        if triple.predicate == RDF_TYPE {
            continue;
        }
        let subject = state.find(&triple.subject).ok_or_else(|| {
            SbolError::Serialization(format!(
                "statement about unknown subject {}",
                triple.subject
            ))
        })?;

        let is_ownership = subject.has_owned(&triple.predicate) && triple.object.is_uri();
        if is_ownership {
            let RdfValue::Uri(child_uri) = &triple.object else {
                unreachable!()
            };
            if child_uri == &triple.subject {
                return Err(SbolError::InvalidArgument(format!(
                    "{} cannot own itself",
                    child_uri
                )));
            }
            let child = match state.pending.shift_remove(child_uri.as_str()) {
                Some(child) => child,
                None if state.find(child_uri).is_some() => {
                    // Second ownership edge to the same object
                    return Err(SbolError::InvalidArgument(format!(
                        "{} is owned more than once",
                        child_uri
                    )));
                }
                None => {
                    return Err(SbolError::Serialization(format!(
                        "ownership property {} references unknown object {}",
                        triple.predicate, child_uri
                    )));
                }
            };
            let parent = state
                .find_mut(&triple.subject)
                .expect("subject located above");
            parent.add_owned(&triple.predicate, child)?;
        } else {
            let raw = triple.object.to_raw();
            let subject = state
                .find_mut(&triple.subject)
                .expect("subject located above");
            // Declared slots and extension predicates take the same path:
            // sentinel-clearing append in input order
            subject.append_raw(&triple.predicate, &raw);
        }
    }
    Ok(())
}

/// Pass 3: reconcile leftover roots whose type is not top-level.
pub(crate) fn pass_reconcile(state: &mut ParseState) -> SbolResult<()> {
    let candidates: Vec<String> = state
        .pending
        .iter()
        .filter(|(_, obj)| !registered_top_level(&obj.rdf_type))
        .map(|(uri, _)| uri.clone())
        .collect();

    for uri in candidates {
        let Some(obj) = state.pending.get(&uri) else {
            continue;
        };

        // A persistent identity marks deliberate top-level data: promote it
        if obj.get_property_value(SBOL_PERSISTENT_IDENTITY).is_ok() {
            debug!(uri = %uri, "promoting annotation object to top level");
            continue;
        }

        // SBOL convention: the nesting property for a class is its namespace
        // plus the class name with a lower-cased first character
        let nesting_property = infer_nesting_property(&obj.rdf_type);
        let owner_uri = state
            .pending
            .values()
            .filter(|root| root.identity() != uri)
            .flat_map(|root| root.find_property_value(&nesting_property, &uri))
            .map(|owner| owner.identity().to_string())
            .next();

        match owner_uri {
            Some(owner_uri) => {
                debug!(uri = %uri, owner = %owner_uri, property = %nesting_property,
                       "nesting annotation object under its referencing parent");
                let child = state
                    .pending
                    .shift_remove(&uri)
                    .expect("candidate still pending");
                match state.find_mut(&owner_uri) {
                    Some(owner) => {
                        convert_reference_to_ownership(owner, &nesting_property, child)?
                    }
                    None => {
                        // The only referrer sat inside the candidate's own
                        // subtree; nesting would orphan both
                        state.pending.insert(uri.clone(), child);
                    }
                }
            }
            None => {
                debug!(uri = %uri, "no referencing parent, keeping as generic top level");
            }
        }
    }
    Ok(())
}

fn infer_nesting_property(type_uri: &str) -> String {
    let class_name = parse_class_name(type_uri);
    let mut chars = class_name.chars();
    let lowered = match chars.next() {
        Some(first) => format!("{}{}", first.to_lowercase(), chars.as_str()),
        None => String::new(),
    };
    format!("{}{}", parse_namespace(type_uri), lowered)
}

/// Replace a dangling `<uri>` reference with real ownership of the object
fn convert_reference_to_ownership(
    owner: &mut SBOLObject,
    property_uri: &str,
    child: SBOLObject,
) -> SbolResult<()> {
    let needle = format!("<{}>", child.identity());
    if let Some(values) = owner.properties.get_mut(property_uri) {
        values.retain(|raw| raw != &needle);
        if values.is_empty() {
            owner.properties.shift_remove(property_uri);
        }
    }
    owner.add_owned(property_uri, child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        SBOL_COMPONENT_DEFINITION, SBOL_DISPLAY_ID, SBOL_ELEMENTS, SBOL_SEQUENCE,
        SBOL_SEQUENCE_ANNOTATION, SBOL_SEQUENCE_ANNOTATIONS,
    };

    fn type_triple(subject: &str, type_uri: &str) -> Triple {
        Triple::new(subject, RDF_TYPE, RdfValue::Uri(type_uri.to_string()))
    }

    #[test]
    fn test_pass_create_resets_defaults() {
        let mut state = ParseState::default();
        pass_create(
            &mut state,
            &[type_triple("http://examples.org/seq1", SBOL_SEQUENCE)],
        );
        let obj = &state.pending["http://examples.org/seq1"];
        assert_eq!(obj.rdf_type, SBOL_SEQUENCE);
        // Schema declared but every slot back to sentinel
        assert!(obj.has_property(SBOL_ELEMENTS));
        assert!(obj.get_property_value(SBOL_ELEMENTS).is_err());
    }

    #[test]
    fn test_pass_create_keeps_unknown_types() {
        let mut state = ParseState::default();
        pass_create(
            &mut state,
            &[type_triple("http://examples.org/w1", "http://myapp.org/ext#Widget")],
        );
        let obj = &state.pending["http://examples.org/w1"];
        assert_eq!(obj.rdf_type, "http://myapp.org/ext#Widget");
    }

    #[test]
    fn test_pass_assign_moves_owned_children() {
        let mut state = ParseState::default();
        let triples = vec![
            type_triple("http://examples.org/cd1", SBOL_COMPONENT_DEFINITION),
            type_triple("http://examples.org/sa1", SBOL_SEQUENCE_ANNOTATION),
            Triple::new(
                "http://examples.org/cd1",
                SBOL_SEQUENCE_ANNOTATIONS,
                RdfValue::Uri("http://examples.org/sa1".to_string()),
            ),
            Triple::new(
                "http://examples.org/sa1",
                SBOL_DISPLAY_ID,
                RdfValue::Literal("sa1".to_string()),
            ),
        ];
        pass_create(&mut state, &triples);
        pass_assign(&mut state, &triples).unwrap();

        assert_eq!(state.pending.len(), 1);
        let cd = &state.pending["http://examples.org/cd1"];
        let sa = cd.find("http://examples.org/sa1").unwrap();
        // Property assigned after the child was nested still lands on it
        assert_eq!(sa.get_property_value(SBOL_DISPLAY_ID).unwrap(), "sa1");
    }

    #[test]
    fn test_pass_assign_rejects_double_ownership() {
        let mut state = ParseState::default();
        let triples = vec![
            type_triple("http://examples.org/cd1", SBOL_COMPONENT_DEFINITION),
            type_triple("http://examples.org/cd2", SBOL_COMPONENT_DEFINITION),
            type_triple("http://examples.org/sa1", SBOL_SEQUENCE_ANNOTATION),
            Triple::new(
                "http://examples.org/cd1",
                SBOL_SEQUENCE_ANNOTATIONS,
                RdfValue::Uri("http://examples.org/sa1".to_string()),
            ),
            Triple::new(
                "http://examples.org/cd2",
                SBOL_SEQUENCE_ANNOTATIONS,
                RdfValue::Uri("http://examples.org/sa1".to_string()),
            ),
        ];
        pass_create(&mut state, &triples);
        let err = pass_assign(&mut state, &triples).unwrap_err();
        assert!(matches!(err, SbolError::InvalidArgument(_)));
    }

    #[test]
    fn test_pass_assign_statement_order_independent() {
        // Ownership edge before the child's own properties, and after
        let forward = vec![
            type_triple("http://examples.org/cd1", SBOL_COMPONENT_DEFINITION),
            type_triple("http://examples.org/sa1", SBOL_SEQUENCE_ANNOTATION),
            Triple::new(
                "http://examples.org/cd1",
                SBOL_SEQUENCE_ANNOTATIONS,
                RdfValue::Uri("http://examples.org/sa1".to_string()),
            ),
            Triple::new(
                "http://examples.org/sa1",
                SBOL_DISPLAY_ID,
                RdfValue::Literal("sa1".to_string()),
            ),
        ];
        let mut reversed = forward.clone();
        reversed[2..].reverse();

        for triples in [forward, reversed] {
            let mut state = ParseState::default();
            pass_create(&mut state, &triples);
            pass_assign(&mut state, &triples).unwrap();
            let cd = &state.pending["http://examples.org/cd1"];
            let sa = cd.find("http://examples.org/sa1").unwrap();
            assert_eq!(sa.get_property_value(SBOL_DISPLAY_ID).unwrap(), "sa1");
        }
    }

    #[test]
    fn test_pass_reconcile_nests_referenced_annotation() {
        let mut state = ParseState::default();
        let triples = vec![
            type_triple("http://examples.org/w1", "http://myapp.org/ext#Widget"),
            type_triple("http://examples.org/cd1", SBOL_COMPONENT_DEFINITION),
            // The parent references the widget under the inferred property
            Triple::new(
                "http://examples.org/cd1",
                "http://myapp.org/ext#widget",
                RdfValue::Uri("http://examples.org/w1".to_string()),
            ),
        ];
        pass_create(&mut state, &triples);
        pass_assign(&mut state, &triples).unwrap();
        assert_eq!(state.pending.len(), 2);

        pass_reconcile(&mut state).unwrap();
        assert_eq!(state.pending.len(), 1);
        let cd = &state.pending["http://examples.org/cd1"];
        // Reference converted to ownership
        assert!(!cd.has_property("http://myapp.org/ext#widget"));
        assert_eq!(cd.owned("http://myapp.org/ext#widget").len(), 1);
    }

    #[test]
    fn test_pass_reconcile_keeps_unreferenced_objects() {
        let mut state = ParseState::default();
        let triples = vec![type_triple(
            "http://examples.org/w1",
            "http://myapp.org/ext#Widget",
        )];
        pass_create(&mut state, &triples);
        pass_assign(&mut state, &triples).unwrap();
        pass_reconcile(&mut state).unwrap();
        // Survives as a generic top level rather than being dropped
        assert!(state.pending.contains_key("http://examples.org/w1"));
    }

    #[test]
    fn test_infer_nesting_property() {
        assert_eq!(
            infer_nesting_property("http://myapp.org/ext#Widget"),
            "http://myapp.org/ext#widget"
        );
        assert_eq!(
            infer_nesting_property(SBOL_SEQUENCE_ANNOTATION),
            "http://sbols.org/v2#sequenceAnnotation"
        );
    }

    #[test]
    fn test_read_string_rdfxml() {
        let text = r#"<?xml version="1.0" encoding="utf-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:sbol="http://sbols.org/v2#">
  <sbol:Sequence rdf:about="http://examples.org/seq1">
    <sbol:elements>atcg</sbol:elements>
  </sbol:Sequence>
</rdf:RDF>"#;
        let mut doc = Document::new();
        doc.read_string(text).unwrap();
        assert_eq!(doc.len(), 1);
        let seq = doc.get("http://examples.org/seq1").unwrap();
        assert_eq!(seq.get_property_value(SBOL_ELEMENTS).unwrap(), "atcg");
    }
}
