//! URI constants for the SBOL2 data model
//!
//! The URIs defined here determine the appearance of serialized RDF/XML nodes.
//! Class constants name RDF types; property constants name predicates.

/// All SBOL objects are created in the default namespace, unless otherwise specified
pub const DEFAULT_NS: &str = "http://examples.org";

pub const SBOL_URI: &str = "http://sbols.org/v2";
pub const RDF_URI: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_URI: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD_URI: &str = "http://www.w3.org/2001/XMLSchema#";
pub const PURL_URI: &str = "http://purl.org/dc/terms/";
pub const PROV_URI: &str = "http://www.w3.org/ns/prov#";
pub const SO_URI: &str = "http://identifiers.org/so/";

/// Predicate marking an rdf:type statement
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/* URIs for SBOL classes */
pub const SBOL_IDENTIFIED: &str = "http://sbols.org/v2#Identified";
pub const SBOL_TOP_LEVEL: &str = "http://sbols.org/v2#TopLevel";
pub const SBOL_GENERIC_TOP_LEVEL: &str = "http://sbols.org/v2#GenericTopLevel";
pub const SBOL_COMPONENT_DEFINITION: &str = "http://sbols.org/v2#ComponentDefinition";
pub const SBOL_SEQUENCE: &str = "http://sbols.org/v2#Sequence";
pub const SBOL_SEQUENCE_ANNOTATION: &str = "http://sbols.org/v2#SequenceAnnotation";
pub const SBOL_SEQUENCE_CONSTRAINT: &str = "http://sbols.org/v2#SequenceConstraint";
pub const SBOL_COMPONENT: &str = "http://sbols.org/v2#Component";
pub const SBOL_FUNCTIONAL_COMPONENT: &str = "http://sbols.org/v2#FunctionalComponent";
pub const SBOL_MAPS_TO: &str = "http://sbols.org/v2#MapsTo";
pub const SBOL_MODULE_DEFINITION: &str = "http://sbols.org/v2#ModuleDefinition";
pub const SBOL_MODULE: &str = "http://sbols.org/v2#Module";
pub const SBOL_INTERACTION: &str = "http://sbols.org/v2#Interaction";
pub const SBOL_PARTICIPATION: &str = "http://sbols.org/v2#Participation";
pub const SBOL_MODEL: &str = "http://sbols.org/v2#Model";
pub const SBOL_COLLECTION: &str = "http://sbols.org/v2#Collection";
pub const SBOL_LOCATION: &str = "http://sbols.org/v2#Location";
pub const SBOL_RANGE: &str = "http://sbols.org/v2#Range";
pub const SBOL_CUT: &str = "http://sbols.org/v2#Cut";
pub const SBOL_GENERIC_LOCATION: &str = "http://sbols.org/v2#GenericLocation";
pub const UNDEFINED: &str = "http://sbols.org/v2#Undefined";

/* URIs for SBOL properties */
pub const SBOL_IDENTITY: &str = "http://sbols.org/v2#identity";
pub const SBOL_PERSISTENT_IDENTITY: &str = "http://sbols.org/v2#persistentIdentity";
pub const SBOL_VERSION: &str = "http://sbols.org/v2#version";
pub const SBOL_DISPLAY_ID: &str = "http://sbols.org/v2#displayId";
pub const SBOL_NAME: &str = "http://purl.org/dc/terms/title";
pub const SBOL_DESCRIPTION: &str = "http://purl.org/dc/terms/description";
pub const SBOL_WAS_DERIVED_FROM: &str = "http://www.w3.org/ns/prov#wasDerivedFrom";
pub const SBOL_TYPES: &str = "http://sbols.org/v2#type";
pub const SBOL_ROLES: &str = "http://sbols.org/v2#role";
pub const SBOL_START: &str = "http://sbols.org/v2#start";
pub const SBOL_END: &str = "http://sbols.org/v2#end";
pub const SBOL_AT: &str = "http://sbols.org/v2#at";
pub const SBOL_SEQUENCE_ANNOTATIONS: &str = "http://sbols.org/v2#sequenceAnnotation";
pub const SBOL_SEQUENCE_CONSTRAINTS: &str = "http://sbols.org/v2#sequenceConstraint";
pub const SBOL_COMPONENTS: &str = "http://sbols.org/v2#component";
pub const SBOL_COMPONENT_PROPERTY: &str = "http://sbols.org/v2#component";
pub const SBOL_ELEMENTS: &str = "http://sbols.org/v2#elements";
pub const SBOL_ENCODING: &str = "http://sbols.org/v2#encoding";
pub const SBOL_SEQUENCE_PROPERTY: &str = "http://sbols.org/v2#sequence";
pub const SBOL_DEFINITION: &str = "http://sbols.org/v2#definition";
pub const SBOL_ACCESS: &str = "http://sbols.org/v2#access";
pub const SBOL_DIRECTION: &str = "http://sbols.org/v2#direction";
pub const SBOL_MODELS: &str = "http://sbols.org/v2#model";
pub const SBOL_MODULES: &str = "http://sbols.org/v2#module";
pub const SBOL_FUNCTIONAL_COMPONENTS: &str = "http://sbols.org/v2#functionalComponent";
pub const SBOL_INTERACTIONS: &str = "http://sbols.org/v2#interaction";
pub const SBOL_MAPS_TOS: &str = "http://sbols.org/v2#mapsTo";
pub const SBOL_PARTICIPATIONS: &str = "http://sbols.org/v2#participation";
pub const SBOL_PARTICIPANT: &str = "http://sbols.org/v2#participant";
pub const SBOL_LOCAL: &str = "http://sbols.org/v2#local";
pub const SBOL_REMOTE: &str = "http://sbols.org/v2#remote";
pub const SBOL_REFINEMENT: &str = "http://sbols.org/v2#refinement";
pub const SBOL_SOURCE: &str = "http://sbols.org/v2#source";
pub const SBOL_LANGUAGE: &str = "http://sbols.org/v2#language";
pub const SBOL_FRAMEWORK: &str = "http://sbols.org/v2#framework";
pub const SBOL_SUBJECT: &str = "http://sbols.org/v2#subject";
pub const SBOL_OBJECT: &str = "http://sbols.org/v2#object";
pub const SBOL_RESTRICTION: &str = "http://sbols.org/v2#restriction";
pub const SBOL_ORIENTATION: &str = "http://sbols.org/v2#orientation";
pub const SBOL_LOCATIONS: &str = "http://sbols.org/v2#location";
pub const SBOL_MEMBERS: &str = "http://sbols.org/v2#member";

/* SBOL internal ontology terms */
pub const SBOL_ACCESS_PRIVATE: &str = "http://sbols.org/v2#private";
pub const SBOL_ACCESS_PUBLIC: &str = "http://sbols.org/v2#public";
pub const SBOL_DIRECTION_IN: &str = "http://sbols.org/v2#in";
pub const SBOL_DIRECTION_OUT: &str = "http://sbols.org/v2#out";
pub const SBOL_DIRECTION_IN_OUT: &str = "http://sbols.org/v2#inout";
pub const SBOL_DIRECTION_NONE: &str = "http://sbols.org/v2#none";
pub const SBOL_RESTRICTION_PRECEDES: &str = "http://sbols.org/v2#precedes";
pub const SBOL_RESTRICTION_SAME_ORIENTATION_AS: &str = "http://sbols.org/v2#sameOrientationAs";
pub const SBOL_RESTRICTION_OPPOSITE_ORIENTATION_AS: &str =
    "http://sbols.org/v2#oppositeOrientationAs";
pub const SBOL_ORIENTATION_INLINE: &str = "http://sbols.org/v2#inline";
pub const SBOL_ORIENTATION_REVERSE_COMPLEMENT: &str = "http://sbols.org/v2#reverseComplement";
pub const SBOL_ENCODING_IUPAC: &str = "http://www.chem.qmul.ac.uk/iubmb/misc/naseq.html";
pub const SBOL_ENCODING_IUPAC_PROTEIN: &str = "http://www.chem.qmul.ac.uk/iupac/AminoAcid/";
pub const SBOL_ENCODING_SMILES: &str = "http://www.opensmiles.org/opensmiles.html";

/* BioPAX terms indicate macromolecular and molecular types */
pub const BIOPAX_DNA: &str = "http://www.biopax.org/release/biopax-level3.owl#DnaRegion";
pub const BIOPAX_RNA: &str = "http://www.biopax.org/release/biopax-level3.owl#RnaRegion";
pub const BIOPAX_PROTEIN: &str = "http://www.biopax.org/release/biopax-level3.owl#Protein";
pub const BIOPAX_SMALL_MOLECULE: &str =
    "http://www.biopax.org/release/biopax-level3.owl#SmallMolecule";
pub const BIOPAX_COMPLEX: &str = "http://www.biopax.org/release/biopax-level3.owl#Complex";

/* Common Sequence Ontology roles */
pub const SO_MISC: &str = "http://identifiers.org/so/SO:0000001";
pub const SO_PROMOTER: &str = "http://identifiers.org/so/SO:0000167";
pub const SO_RBS: &str = "http://identifiers.org/so/SO:0000139";
pub const SO_CDS: &str = "http://identifiers.org/so/SO:0000316";
pub const SO_TERMINATOR: &str = "http://identifiers.org/so/SO:0000141";
pub const SO_GENE: &str = "http://identifiers.org/so/SO:0000704";

/* Systems Biology Ontology interaction types */
pub const SBO_INTERACTION: &str = "http://identifiers.org/biomodels.sbo/SBO:0000343";
pub const SBO_INHIBITION: &str = "http://identifiers.org/biomodels.sbo/SBO:0000169";
pub const SBO_GENETIC_PRODUCTION: &str = "http://identifiers.org/biomodels.sbo/SBO:0000170";
pub const SBO_STIMULATION: &str = "http://identifiers.org/biomodels.sbo/SBO:0000589";
pub const SBO_NONCOVALENT_BINDING: &str = "http://identifiers.org/biomodels.sbo/SBO:0000177";

/* Participation roles */
pub const SBO_INHIBITOR: &str = "http://identifiers.org/biomodels.sbo/SBO:0000020";
pub const SBO_STIMULATOR: &str = "http://identifiers.org/biomodels.sbo/SBO:0000459";
pub const SBO_REACTANT: &str = "http://identifiers.org/biomodels.sbo/SBO:0000010";
pub const SBO_PRODUCT: &str = "http://identifiers.org/biomodels.sbo/SBO:0000011";

/* Modeling languages and frameworks */
pub const EDAM_SBML: &str = "http://identifiers.org/edam/format_2585";
pub const EDAM_CELLML: &str = "http://identifiers.org/edam/format_3240";
pub const EDAM_BIOPAX: &str = "http://identifiers.org/edam/format_3156";

/// Extract the local class name from a type URI, e.g.
/// `http://sbols.org/v2#ComponentDefinition` -> `ComponentDefinition`.
pub fn parse_class_name(type_uri: &str) -> &str {
    match type_uri.rfind(['#', '/']) {
        Some(pos) => &type_uri[pos + 1..],
        None => type_uri,
    }
}

/// Extract the namespace portion of a type or property URI, including the
/// trailing `#` or `/` separator.
pub fn parse_namespace(uri: &str) -> &str {
    match uri.rfind(['#', '/']) {
        Some(pos) => &uri[..pos + 1],
        None => "",
    }
}

/// Extract the local property name from a predicate URI.
pub fn parse_property_name(property_uri: &str) -> &str {
    parse_class_name(property_uri)
}
