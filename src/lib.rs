//! SBOL2 data model with nested RDF/XML serialization
//!
//! An object model for synthetic biology designs: a generic property store
//! with typed class views, a Document holding top-level objects by value,
//! and a serialization engine that round-trips the nested SBOL flavor of
//! RDF/XML alongside flat N-Triples and JSON forms.
//!
//! ```no_run
//! use sbol2::{Config, Document, model::{ComponentDefinition, Sequence}};
//!
//! # fn main() -> sbol2::SbolResult<()> {
//! let config = Config::with_homespace("http://examples.org");
//! let mut doc = Document::with_config(config.clone());
//!
//! let cd = ComponentDefinition::new(&config, "pLac", "1.0.0")?;
//! let seq = Sequence::new(&config, "pLac_seq", "aacgatcg", "1.0.0")?;
//! doc.add(cd)?;
//! doc.add(seq)?;
//! doc.write("pLac.xml")?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod model;
pub mod object;
pub mod rdf;

pub use config::{random_identifier, Config, SerializationFormat};
pub use document::{Document, DocumentValidator, NamespaceValidator, ValidationReport};
pub use error::{SbolError, SbolResult};
pub use object::{
    register_extension, PropertyKind, SBOLObject, TextProperty, UriProperty, MANY,
};
