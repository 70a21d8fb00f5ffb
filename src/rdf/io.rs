//! Flat triple I/O
//!
//! Wraps the external RDF libraries behind the triple-stream contract the
//! parse and write drivers are written against: RDF/XML text in, a buffered
//! `Vec<Triple>` out, and the reverse for the flat output formats.

use super::namespace::Namespace;
use super::types::{RdfValue, Triple};
use crate::error::{SbolError, SbolResult};
use rio_api::formatter::TriplesFormatter;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesFormatter, NTriplesParser};
use rio_xml::RdfXmlParser;
use serde_json::{json, Map, Value};
use std::io::{BufReader, Cursor};
use tracing::warn;

/// Parse RDF/XML text into a fully-buffered triple stream.
///
/// Blank-node statements are not part of the SBOL on-wire contract and are
/// skipped with a warning rather than failing the whole parse.
pub fn parse_rdfxml(input: &str) -> SbolResult<Vec<Triple>> {
    let cursor = Cursor::new(input);
    let reader = BufReader::new(cursor);
    let mut parser = RdfXmlParser::new(reader, None);

    let mut triples = Vec::new();
    let res: Result<(), rio_xml::RdfXmlError> = parser.parse_all(&mut |t| {
        match convert_triple(&t) {
            Some(triple) => triples.push(triple),
            None => warn!(statement = %t, "skipping blank-node statement"),
        }
        Ok(())
    });
    res.map_err(|e| SbolError::Serialization(format!("RDF/XML parse failed: {}", e)))?;

    Ok(triples)
}

/// Parse N-Triples text into a buffered triple stream
pub fn parse_ntriples(input: &str) -> SbolResult<Vec<Triple>> {
    let cursor = Cursor::new(input);
    let reader = BufReader::new(cursor);
    let mut parser = NTriplesParser::new(reader);

    let mut triples = Vec::new();
    let res: Result<(), rio_turtle::TurtleError> = parser.parse_all(&mut |t| {
        match convert_triple(&t) {
            Some(triple) => triples.push(triple),
            None => warn!(statement = %t, "skipping blank-node statement"),
        }
        Ok(())
    });
    res.map_err(|e| SbolError::Serialization(format!("N-Triples parse failed: {}", e)))?;

    Ok(triples)
}

fn convert_triple(t: &rio_api::model::Triple) -> Option<Triple> {
    let subject = match t.subject {
        rio_api::model::Subject::NamedNode(n) => n.iri.to_string(),
        _ => return None,
    };
    let object = match t.object {
        rio_api::model::Term::NamedNode(n) => RdfValue::Uri(n.iri.to_string()),
        rio_api::model::Term::Literal(l) => match l {
            rio_api::model::Literal::Simple { value } => RdfValue::Literal(value.to_string()),
            rio_api::model::Literal::LanguageTaggedString { value, .. } => {
                RdfValue::Literal(value.to_string())
            }
            rio_api::model::Literal::Typed { value, .. } => RdfValue::Literal(value.to_string()),
        },
        _ => return None,
    };
    Some(Triple::new(subject, t.predicate.iri.to_string(), object))
}

/// Serialize a triple stream to N-Triples text, in emission order
pub fn serialize_ntriples(triples: &[Triple]) -> SbolResult<String> {
    let mut output = Vec::new();
    let mut formatter = NTriplesFormatter::new(&mut output);

    for triple in triples {
        let subject = rio_api::model::NamedNode {
            iri: triple.subject.as_str(),
        };
        let predicate = rio_api::model::NamedNode {
            iri: triple.predicate.as_str(),
        };
        let o_node;
        let object = match &triple.object {
            RdfValue::Uri(uri) => {
                o_node = rio_api::model::NamedNode { iri: uri.as_str() };
                rio_api::model::Term::NamedNode(o_node)
            }
            RdfValue::Literal(text) => rio_api::model::Term::Literal(
                rio_api::model::Literal::Simple { value: text.as_str() },
            ),
        };

        let rio_triple = rio_api::model::Triple {
            subject: rio_api::model::Subject::NamedNode(subject),
            predicate,
            object,
        };
        formatter
            .format(&rio_triple)
            .map_err(|e| SbolError::Serialization(e.to_string()))?;
    }

    formatter
        .finish()
        .map_err(|e| SbolError::Serialization(e.to_string()))?;
    String::from_utf8(output).map_err(|e| SbolError::Serialization(e.to_string()))
}

/// Serialize a triple stream to subject-grouped JSON.
///
/// Shape: `{ subject: { predicate: [ {"@id": uri} | {"@value": text} ] } }`,
/// with subjects and predicates in first-seen order.
pub fn serialize_json(triples: &[Triple]) -> SbolResult<String> {
    let mut root = Map::new();

    for triple in triples {
        let subject_entry = root
            .entry(triple.subject.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(predicates) = subject_entry else {
            unreachable!()
        };
        let values = predicates
            .entry(triple.predicate.clone())
            .or_insert_with(|| Value::Array(Vec::new()));
        let Value::Array(list) = values else {
            unreachable!()
        };
        list.push(match &triple.object {
            RdfValue::Uri(uri) => json!({ "@id": uri }),
            RdfValue::Literal(text) => json!({ "@value": text }),
        });
    }

    serde_json::to_string_pretty(&Value::Object(root))
        .map_err(|e| SbolError::Serialization(e.to_string()))
}

/// Parse the subject-grouped JSON form back into a triple stream
pub fn parse_json(input: &str) -> SbolResult<Vec<Triple>> {
    let root: Value = serde_json::from_str(input)
        .map_err(|e| SbolError::Serialization(format!("JSON parse failed: {}", e)))?;
    let Value::Object(subjects) = root else {
        return Err(SbolError::Serialization(
            "expected a JSON object keyed by subject URI".to_string(),
        ));
    };

    let mut triples = Vec::new();
    for (subject, predicates) in subjects {
        let Value::Object(predicates) = predicates else {
            return Err(SbolError::Serialization(format!(
                "subject {} must map to an object keyed by predicate",
                subject
            )));
        };
        for (predicate, values) in predicates {
            let Value::Array(values) = values else {
                return Err(SbolError::Serialization(format!(
                    "predicate {} must map to an array of values",
                    predicate
                )));
            };
            for value in values {
                let object = if let Some(uri) = value.get("@id").and_then(Value::as_str) {
                    RdfValue::Uri(uri.to_string())
                } else if let Some(text) = value.get("@value").and_then(Value::as_str) {
                    RdfValue::Literal(text.to_string())
                } else {
                    return Err(SbolError::Serialization(format!(
                        "value under {} is neither @id nor @value",
                        predicate
                    )));
                };
                triples.push(Triple::new(subject.clone(), predicate.clone(), object));
            }
        }
    }
    Ok(triples)
}

/// Scan RDF/XML text for `xmlns:prefix="iri"` declarations.
///
/// The triple parser does not surface namespace events, but the Document must
/// accumulate the prefixes declared by the input file.
pub fn extract_namespaces(input: &str) -> Vec<Namespace> {
    let mut namespaces = Vec::new();
    let mut rest = input;
    while let Some(pos) = rest.find("xmlns") {
        rest = &rest[pos + "xmlns".len()..];
        let prefix = if let Some(stripped) = rest.strip_prefix(':') {
            let end = match stripped.find('=') {
                Some(e) => e,
                None => break,
            };
            let prefix = stripped[..end].trim().to_string();
            rest = &stripped[end..];
            prefix
        } else if rest.starts_with('=') {
            String::new()
        } else {
            continue;
        };
        let Some(open) = rest.find('"') else { break };
        let after = &rest[open + 1..];
        let Some(close) = after.find('"') else { break };
        namespaces.push(Namespace::new(prefix, &after[..close]));
        rest = &after[close + 1..];
    }
    namespaces
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_RDFXML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:sbol="http://sbols.org/v2#">
  <sbol:Sequence rdf:about="http://examples.org/seq1">
    <sbol:elements>atcg</sbol:elements>
    <sbol:encoding rdf:resource="http://www.chem.qmul.ac.uk/iubmb/misc/naseq.html"/>
  </sbol:Sequence>
</rdf:RDF>"#;

    #[test]
    fn test_parse_rdfxml() {
        let triples = parse_rdfxml(SIMPLE_RDFXML).unwrap();
        assert_eq!(triples.len(), 3); // rdf:type + elements + encoding

        let elements = triples
            .iter()
            .find(|t| t.predicate == "http://sbols.org/v2#elements")
            .unwrap();
        assert_eq!(elements.subject, "http://examples.org/seq1");
        assert_eq!(elements.object, RdfValue::Literal("atcg".to_string()));

        let encoding = triples
            .iter()
            .find(|t| t.predicate == "http://sbols.org/v2#encoding")
            .unwrap();
        assert!(encoding.object.is_uri());
    }

    #[test]
    fn test_ntriples_round_trip() {
        let triples = vec![
            Triple::new(
                "http://example.org/a",
                "http://example.org/p",
                RdfValue::Literal("hello".to_string()),
            ),
            Triple::new(
                "http://example.org/a",
                "http://example.org/q",
                RdfValue::Uri("http://example.org/b".to_string()),
            ),
        ];
        let text = serialize_ntriples(&triples).unwrap();
        let reparsed = parse_ntriples(&text).unwrap();
        assert_eq!(triples, reparsed);
    }

    #[test]
    fn test_json_round_trip() {
        let triples = vec![
            Triple::new(
                "http://example.org/a",
                "http://example.org/p",
                RdfValue::Literal("hello".to_string()),
            ),
            Triple::new(
                "http://example.org/a",
                "http://example.org/p",
                RdfValue::Literal("world".to_string()),
            ),
        ];
        let text = serialize_json(&triples).unwrap();
        let reparsed = parse_json(&text).unwrap();
        assert_eq!(triples, reparsed);
    }

    #[test]
    fn test_json_keeps_first_seen_subject_order() {
        // Alphabetically "a" sorts before "z"; emission order must win
        let triples = vec![
            Triple::new(
                "http://example.org/z",
                "http://example.org/p",
                RdfValue::Literal("first".to_string()),
            ),
            Triple::new(
                "http://example.org/a",
                "http://example.org/p",
                RdfValue::Literal("second".to_string()),
            ),
        ];
        let text = serialize_json(&triples).unwrap();
        let z = text.find("http://example.org/z").unwrap();
        let a = text.find("http://example.org/a").unwrap();
        assert!(z < a);
        assert_eq!(parse_json(&text).unwrap(), triples);
    }

    #[test]
    fn test_extract_namespaces() {
        let namespaces = extract_namespaces(SIMPLE_RDFXML);
        assert!(namespaces
            .iter()
            .any(|ns| ns.prefix == "sbol" && ns.iri == "http://sbols.org/v2#"));
        assert!(namespaces.iter().any(|ns| ns.prefix == "rdf"));
    }
}
