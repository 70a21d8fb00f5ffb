//! RDF support for the SBOL object model
//!
//! This module holds the wire-level pieces the object model is built over:
//! - triple types with the `<...>`/`"..."` marker encoding used by the
//!   property store
//! - namespace/prefix management for serialized output
//! - flat triple I/O against the external RDF parser/serializer libraries

mod io;
mod namespace;
mod types;

pub use io::{
    extract_namespaces, parse_json, parse_ntriples, parse_rdfxml, serialize_json,
    serialize_ntriples,
};
pub use namespace::{Namespace, NamespaceManager};
pub use types::{validate_iri, RdfValue, Triple};
