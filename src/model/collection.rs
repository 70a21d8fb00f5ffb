//! Grouping classes: Collection and the GenericTopLevel carrier

use super::identified;
use super::SbolClass;
use crate::config::Config;
use crate::constants::{
    SBOL_COLLECTION, SBOL_GENERIC_TOP_LEVEL, SBOL_MEMBERS, SBOL_TOP_LEVEL,
};
use crate::error::SbolResult;
use crate::object::{PropertyKind, ReferencedObject, SBOLObject, MANY};

/// An unordered grouping of top-level objects by reference
pub struct Collection;

impl Collection {
    pub const MEMBERS: ReferencedObject =
        ReferencedObject::new(SBOL_MEMBERS, SBOL_TOP_LEVEL, 0, MANY);

    pub fn new(config: &Config, display_id: &str, version: &str) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_collection(&mut obj);
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_collection(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_MEMBERS, PropertyKind::Uri);
}

impl SbolClass for Collection {
    const TYPE_URI: &'static str = SBOL_COLLECTION;
    const IS_TOP_LEVEL: bool = true;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_collection(&mut obj);
        obj
    }
}

/// Top-level carrier for data outside the built-in schema, including
/// annotation objects promoted during parsing
pub struct GenericTopLevel;

impl GenericTopLevel {
    pub fn new(config: &Config, display_id: &str, version: &str) -> SbolResult<SBOLObject> {
        identified::construct(config, Self::TYPE_URI, display_id, version)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

impl SbolClass for GenericTopLevel {
    const TYPE_URI: &'static str = SBOL_GENERIC_TOP_LEVEL;
    const IS_TOP_LEVEL: bool = true;

    fn create() -> SBOLObject {
        identified::base(Self::TYPE_URI, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_members_are_references() {
        let config = Config::with_homespace("http://examples.org");
        let mut coll = Collection::new(&config, "parts", "1.0.0").unwrap();
        Collection::MEMBERS
            .add(&mut coll, "http://examples.org/ComponentDefinition/pLac/1.0.0")
            .unwrap();
        assert_eq!(Collection::MEMBERS.size(&coll), 1);
        // References never become children
        assert_eq!(coll.count_descendants(), 0);
    }
}
