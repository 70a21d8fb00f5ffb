//! Sequence: the literal residue string carried by a design

use super::identified;
use super::SbolClass;
use crate::config::Config;
use crate::constants::{SBOL_ELEMENTS, SBOL_ENCODING, SBOL_ENCODING_IUPAC, SBOL_SEQUENCE};
use crate::error::SbolResult;
use crate::object::{PropertyKind, SBOLObject, TextProperty, UriProperty};

pub struct Sequence;

impl Sequence {
    /// The sequence content, e.g. nucleotide or amino acid codes
    pub const ELEMENTS: TextProperty = TextProperty::new(SBOL_ELEMENTS, 1, 1, &[]);
    /// The alphabet `elements` is written in; IUPAC DNA by default
    pub const ENCODING: UriProperty = UriProperty::new(SBOL_ENCODING, 1, 1, &[]);

    /// Compliant constructor: identity autoconstructed from the homespace
    pub fn new(
        config: &Config,
        display_id: &str,
        elements: &str,
        version: &str,
    ) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare(&mut obj);
        Self::ELEMENTS.set(&mut obj, elements)?;
        Self::ENCODING.set(&mut obj, SBOL_ENCODING_IUPAC)?;
        Ok(obj)
    }

    /// Open-world constructor with an explicit identity URI
    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_ELEMENTS, PropertyKind::Literal);
    obj.declare_property(SBOL_ENCODING, PropertyKind::Uri);
}

impl SbolClass for Sequence {
    const TYPE_URI: &'static str = SBOL_SEQUENCE;
    const IS_TOP_LEVEL: bool = true;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare(&mut obj);
        obj
    }
}
