//! Extension data: unknown types, custom properties, registered extension
//! classes, and the reconciliation rules that decide where annotation
//! objects end up

use sbol2::constants::{SBOL_DISPLAY_ID, SBOL_PERSISTENT_IDENTITY};
use sbol2::model::Sequence;
use sbol2::rdf::RdfValue;
use sbol2::{register_extension, Config, Document, SBOLObject};

fn config() -> Config {
    Config::with_homespace("http://examples.org")
}

const UNKNOWN_TYPE_DOC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:sbol="http://sbols.org/v2#"
    xmlns:app="http://myapp.org/ext#">
  <app:Datasheet rdf:about="http://examples.org/ds1">
    <app:transcriptionRate>0.75</app:transcriptionRate>
  </app:Datasheet>
</rdf:RDF>"#;

#[test]
fn unknown_type_survives_round_trip() {
    let mut doc = Document::new();
    doc.read_string(UNKNOWN_TYPE_DOC).unwrap();

    let ds = doc.get("http://examples.org/ds1").unwrap();
    assert_eq!(ds.rdf_type, "http://myapp.org/ext#Datasheet");
    assert_eq!(
        ds.get_property_value("http://myapp.org/ext#transcriptionRate")
            .unwrap(),
        "0.75"
    );

    // Write it back out: type and property intact, prefix redeclared
    let xml = doc.write_string().unwrap();
    assert!(xml.contains("Datasheet"));
    assert!(xml.contains("transcriptionRate>0.75<"));

    let mut reparsed = Document::new();
    reparsed.read_string(&xml).unwrap();
    assert_eq!(
        doc.get("http://examples.org/ds1").unwrap(),
        reparsed.get("http://examples.org/ds1").unwrap()
    );
}

#[test]
fn custom_property_on_builtin_class_survives() {
    let config = config();
    let mut doc = Document::with_config(config.clone());
    let mut seq = Sequence::new(&config, "seq1", "atcg", "1.0.0").unwrap();
    seq.set_annotation(
        "http://myapp.org/ext#note",
        &RdfValue::Literal("validated in vivo".to_string()),
    );
    seq.set_annotation(
        "http://myapp.org/ext#datasheet",
        &RdfValue::Uri("http://examples.org/ds1".to_string()),
    );
    let uri = seq.identity().to_string();
    doc.add(seq).unwrap();

    let xml = doc.write_string().unwrap();
    let mut reparsed = Document::new();
    reparsed.read_string(&xml).unwrap();

    let seq = reparsed.get(&uri).unwrap();
    assert_eq!(
        seq.get_property_value("http://myapp.org/ext#note").unwrap(),
        "validated in vivo"
    );
    // URI-kindedness survives the round-trip
    assert_eq!(
        seq.properties["http://myapp.org/ext#datasheet"],
        vec!["<http://examples.org/ds1>"]
    );
}

#[test]
fn annotation_object_with_persistent_identity_is_promoted() {
    let text = r#"<?xml version="1.0" encoding="utf-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:sbol="http://sbols.org/v2#"
    xmlns:app="http://myapp.org/ext#">
  <app:Datasheet rdf:about="http://examples.org/Datasheet/ds1/1.0.0">
    <sbol:persistentIdentity rdf:resource="http://examples.org/Datasheet/ds1"/>
  </app:Datasheet>
  <sbol:ComponentDefinition rdf:about="http://examples.org/cd1">
    <app:datasheet rdf:resource="http://examples.org/Datasheet/ds1/1.0.0"/>
  </sbol:ComponentDefinition>
</rdf:RDF>"#;

    let mut doc = Document::new();
    doc.read_string(text).unwrap();

    // Despite the matching reference, the persistent identity wins: the
    // datasheet stays top-level and the reference stays a reference
    assert_eq!(doc.len(), 2);
    let ds = doc.get("http://examples.org/Datasheet/ds1/1.0.0").unwrap();
    assert_eq!(
        ds.get_property_value(SBOL_PERSISTENT_IDENTITY).unwrap(),
        "http://examples.org/Datasheet/ds1"
    );
    let cd = doc.get("http://examples.org/cd1").unwrap();
    assert_eq!(
        cd.get_property_value("http://myapp.org/ext#datasheet").unwrap(),
        "http://examples.org/Datasheet/ds1/1.0.0"
    );
}

#[test]
fn annotation_object_without_persistent_identity_is_nested() {
    let text = r#"<?xml version="1.0" encoding="utf-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:sbol="http://sbols.org/v2#"
    xmlns:app="http://myapp.org/ext#">
  <app:Datasheet rdf:about="http://examples.org/ds1">
    <app:rate>0.5</app:rate>
  </app:Datasheet>
  <sbol:ComponentDefinition rdf:about="http://examples.org/cd1">
    <app:datasheet rdf:resource="http://examples.org/ds1"/>
  </sbol:ComponentDefinition>
</rdf:RDF>"#;

    let mut doc = Document::new();
    doc.read_string(text).unwrap();

    // The dangling reference became ownership
    assert_eq!(doc.len(), 1);
    let cd = doc.get("http://examples.org/cd1").unwrap();
    assert!(!cd.has_property("http://myapp.org/ext#datasheet"));
    let nested = cd.find("http://examples.org/ds1").unwrap();
    assert_eq!(
        nested.get_property_value("http://myapp.org/ext#rate").unwrap(),
        "0.5"
    );
}

#[test]
fn registered_extension_class_gets_its_schema_on_parse() {
    fn gadget() -> SBOLObject {
        let mut obj = SBOLObject::new("http://myapp.org/ext#Gizmo", "");
        obj.declare_property(
            "http://myapp.org/ext#rating",
            sbol2::PropertyKind::Literal,
        );
        obj
    }
    register_extension("http://myapp.org/ext#Gizmo", gadget, true);

    let text = r#"<?xml version="1.0" encoding="utf-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:sbol="http://sbols.org/v2#"
    xmlns:app="http://myapp.org/ext#">
  <app:Gizmo rdf:about="http://examples.org/g1"/>
</rdf:RDF>"#;

    let mut doc = Document::new();
    doc.read_string(text).unwrap();

    // Registered as top-level, so reconciliation leaves it at the root,
    // and the factory's declared slot is present as a sentinel
    let gizmo = doc.get("http://examples.org/g1").unwrap();
    assert!(gizmo.has_property("http://myapp.org/ext#rating"));
    assert!(gizmo
        .get_property_value("http://myapp.org/ext#rating")
        .is_err());
}

#[test]
fn display_id_round_trips_through_extension_free_document() {
    let config = config();
    let mut doc = Document::with_config(config.clone());
    let seq = Sequence::new(&config, "seq1", "atcg", "1.0.0").unwrap();
    let uri = seq.identity().to_string();
    doc.add(seq).unwrap();

    let xml = doc.write_string().unwrap();
    let mut reparsed = Document::new();
    reparsed.read_string(&xml).unwrap();
    assert_eq!(
        reparsed
            .get(&uri)
            .unwrap()
            .get_property_value(SBOL_DISPLAY_ID)
            .unwrap(),
        "seq1"
    );
}
