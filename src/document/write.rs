//! Serialization: the flattener and the nested RDF/XML writer
//!
//! The flattener produces the flat triple stream the N-Triples and JSON
//! formats (and the round-trip tests) consume. The RDF/XML writer emits the
//! nested interchange form directly from the object tree in one recursive
//! pass; reading the nested form back through the triple parser flattens it
//! again, which is what closes the round-trip.

use super::validator::run_validators;
use super::Document;
use crate::constants::{RDF_TYPE, SBOL_IDENTITY};
use crate::error::SbolResult;
use crate::object::{is_sentinel, SBOLObject};
use crate::rdf::{self, NamespaceManager, RdfValue, Triple};
use crate::config::SerializationFormat;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

impl Document {
    /// Flatten the object forest into a triple stream: one `rdf:type` triple
    /// per object, one triple per stored non-sentinel value (identity slot
    /// skipped), one triple per ownership edge followed by the child's own
    /// triples. Object-local namespaces merge into the document table.
    pub fn flatten(&mut self) -> Vec<Triple> {
        let mut local = Vec::new();
        for obj in self.objects() {
            collect_local_namespaces(obj, &mut local);
        }
        for (prefix, iri) in local {
            self.namespaces.add_prefix(prefix, iri);
        }

        let mut triples = Vec::new();
        for obj in self.objects() {
            flatten_object(obj, &mut triples);
        }
        triples
    }

    /// Serialize to the configured format
    pub fn write_string(&mut self) -> SbolResult<String> {
        match self.config.format {
            SerializationFormat::RdfXml => {
                self.flatten(); // namespace merge side effect
                serialize_rdfxml(self)
            }
            SerializationFormat::NTriples => rdf::serialize_ntriples(&self.flatten()),
            SerializationFormat::Json => rdf::serialize_json(&self.flatten()),
        }
    }

    /// Serialize to a file, running validation once when configured.
    ///
    /// Validation findings are logged and returned, never fatal: the file is
    /// written regardless. Returns the validation summary.
    pub fn write(&mut self, path: impl AsRef<Path>) -> SbolResult<String> {
        let text = self.write_string()?;

        let summary = if self.config.validate_on_write {
            let report = run_validators(self.validators(), &text);
            if !report.valid {
                warn!(summary = %report.summary(), "document failed validation, writing anyway");
            }
            report.summary()
        } else {
            String::new()
        };

        fs::write(path.as_ref(), &text)?;
        info!(path = %path.as_ref().display(), bytes = text.len(), "wrote document");
        Ok(summary)
    }
}

fn collect_local_namespaces(obj: &SBOLObject, out: &mut Vec<(String, String)>) {
    for (prefix, iri) in &obj.namespaces {
        out.push((prefix.clone(), iri.clone()));
    }
    for child in obj.owned_objects.values().flatten() {
        collect_local_namespaces(child, out);
    }
}

fn flatten_object(obj: &SBOLObject, out: &mut Vec<Triple>) {
    let identity = obj.identity();
    out.push(Triple::new(
        identity,
        RDF_TYPE,
        RdfValue::Uri(obj.rdf_type.clone()),
    ));
    for (property_uri, values) in &obj.properties {
        if property_uri == SBOL_IDENTITY {
            continue;
        }
        for raw in values {
            if is_sentinel(raw) {
                continue;
            }
            out.push(Triple::new(identity, property_uri, RdfValue::from_raw(raw)));
        }
    }
    for (property_uri, children) in &obj.owned_objects {
        for child in children {
            out.push(Triple::new(
                identity,
                property_uri,
                RdfValue::Uri(child.identity().to_string()),
            ));
            flatten_object(child, out);
        }
    }
}

/// Emit the nested SBOL-flavored RDF/XML form: every object is an element
/// named by its class, literal properties are text elements, URI properties
/// are `rdf:resource` attributes, and owned children are nested whole inside
/// their ownership property element.
fn serialize_rdfxml(doc: &Document) -> SbolResult<String> {
    // Body first: rendering registers generated prefixes the header needs
    let mut namespaces = doc.namespaces.clone();
    let mut body = String::new();
    for obj in doc.objects() {
        write_element(obj, 1, &mut namespaces, &mut body);
    }

    let mut output = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    output.push_str("<rdf:RDF");
    for ns in namespaces.namespaces() {
        if ns.prefix.is_empty() {
            continue;
        }
        let _ = write!(output, "\n    xmlns:{}=\"{}\"", ns.prefix, escape_attr(&ns.iri));
    }
    output.push_str(">\n");
    output.push_str(&body);
    output.push_str("</rdf:RDF>\n");
    Ok(output)
}

fn write_element(
    obj: &SBOLObject,
    depth: usize,
    namespaces: &mut NamespaceManager,
    out: &mut String,
) {
    let pad = "  ".repeat(depth);
    let class_qname = namespaces.compact_or_register(&obj.rdf_type);
    let _ = writeln!(
        out,
        "{}<{} rdf:about=\"{}\">",
        pad,
        class_qname,
        escape_attr(obj.identity())
    );

    for (property_uri, values) in &obj.properties {
        if property_uri == SBOL_IDENTITY {
            continue;
        }
        let prop_qname = namespaces.compact_or_register(property_uri);
        for raw in values {
            if is_sentinel(raw) {
                continue;
            }
            match RdfValue::from_raw(raw) {
                RdfValue::Uri(uri) => {
                    let _ = writeln!(
                        out,
                        "{}  <{} rdf:resource=\"{}\"/>",
                        pad,
                        prop_qname,
                        escape_attr(&uri)
                    );
                }
                RdfValue::Literal(text) => {
                    let _ = writeln!(
                        out,
                        "{}  <{}>{}</{}>",
                        pad,
                        prop_qname,
                        escape_text(&text),
                        prop_qname
                    );
                }
            }
        }
    }

    for (property_uri, children) in &obj.owned_objects {
        let prop_qname = namespaces.compact_or_register(property_uri);
        for child in children {
            let _ = writeln!(out, "{}  <{}>", pad, prop_qname);
            write_element(child, depth + 2, namespaces, out);
            let _ = writeln!(out, "{}  </{}>", pad, prop_qname);
        }
    }

    let _ = writeln!(out, "{}</{}>", pad, class_qname);
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::constants::{SBOL_ELEMENTS, SBOL_SEQUENCE_ANNOTATIONS};
    use crate::model::{ComponentDefinition, Sequence, SequenceAnnotation};

    fn config() -> Config {
        Config::with_homespace("http://examples.org")
    }

    fn sample_doc() -> Document {
        let mut doc = Document::new();
        let mut cd = ComponentDefinition::new(&config(), "cd1", "1.0.0").unwrap();
        let sa = SequenceAnnotation::new(&config(), "sa1", "1.0.0").unwrap();
        ComponentDefinition::SEQUENCE_ANNOTATIONS.add(&mut cd, sa).unwrap();
        doc.add(cd).unwrap();
        doc.add(Sequence::new(&config(), "seq1", "atcg", "1.0.0").unwrap())
            .unwrap();
        doc
    }

    #[test]
    fn test_flatten_emits_type_and_ownership_triples() {
        let mut doc = sample_doc();
        let triples = doc.flatten();

        let type_count = triples.iter().filter(|t| t.predicate == RDF_TYPE).count();
        assert_eq!(type_count, 3); // cd, nested sa, sequence

        let ownership = triples
            .iter()
            .find(|t| t.predicate == SBOL_SEQUENCE_ANNOTATIONS)
            .unwrap();
        assert!(ownership.object.is_uri());

        // Identity is never serialized as a property
        assert!(!triples
            .iter()
            .any(|t| t.predicate == crate::constants::SBOL_IDENTITY));
    }

    #[test]
    fn test_sentinels_never_serialized() {
        let mut doc = Document::new();
        doc.add(SequenceAnnotation::new(&config(), "sa1", "1.0.0").unwrap())
            .unwrap();
        let triples = doc.flatten();
        assert!(!triples.iter().any(|t| t.object.value().is_empty()));
    }

    #[test]
    fn test_rdfxml_nests_owned_children() {
        let mut doc = sample_doc();
        let xml = doc.write_string().unwrap();

        assert!(xml.contains("xmlns:sbol=\"http://sbols.org/v2#\""));
        // The annotation element sits inside its ownership property element
        let property_pos = xml.find("<sbol:sequenceAnnotation>").unwrap();
        let child_pos = xml.find("<sbol:SequenceAnnotation rdf:about").unwrap();
        let close_pos = xml.find("</sbol:sequenceAnnotation>").unwrap();
        assert!(property_pos < child_pos && child_pos < close_pos);
    }

    #[test]
    fn test_rdfxml_escapes_markup() {
        let mut doc = Document::new();
        let seq = Sequence::new(&config(), "seq1", "a<b&c", "1.0.0").unwrap();
        doc.add(seq).unwrap();
        let xml = doc.write_string().unwrap();
        assert!(xml.contains("a&lt;b&amp;c"));
        assert!(!xml.contains("a<b&c"));
    }

    #[test]
    fn test_unknown_namespace_gets_generated_prefix() {
        let mut doc = Document::new();
        let mut seq = Sequence::new(&config(), "seq1", "atcg", "1.0.0").unwrap();
        seq.set_annotation(
            "http://myapp.org/ext#note",
            &RdfValue::Literal("hello".to_string()),
        );
        doc.add(seq).unwrap();
        let xml = doc.write_string().unwrap();
        assert!(xml.contains("xmlns:ns0=\"http://myapp.org/ext#\""));
        assert!(xml.contains("<ns0:note>hello</ns0:note>"));
    }

    #[test]
    fn test_ntriples_format() {
        let mut doc = sample_doc();
        doc.config.format = SerializationFormat::NTriples;
        let text = doc.write_string().unwrap();
        assert!(text.contains(SBOL_ELEMENTS));
        let reparsed = rdf::parse_ntriples(&text).unwrap();
        assert_eq!(reparsed.len(), doc.flatten().len());
    }

    #[test]
    fn test_write_reports_validation_but_still_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xml");
        let mut doc = sample_doc();
        let summary = doc.write(&path).unwrap();
        assert_eq!(summary, "valid");
        assert!(path.exists());
    }
}
