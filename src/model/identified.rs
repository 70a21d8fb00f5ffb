//! Base slots shared by every data model class
//!
//! `Identified` carries the property descriptors for the common slots;
//! `base` and `construct` are the schema constructors the class modules
//! build on.

use super::SbolClass;
use crate::config::Config;
use crate::constants::{
    SBOL_DESCRIPTION, SBOL_DISPLAY_ID, SBOL_NAME, SBOL_PERSISTENT_IDENTITY, SBOL_VERSION,
    SBOL_WAS_DERIVED_FROM,
};
use crate::error::SbolResult;
use crate::object::{
    registered_top_level, rule_display_id, rule_maven_version, PropertyKind, SBOLObject,
    TextProperty, UriProperty, ValidationRule, VersionProperty, MANY,
};

const DISPLAY_ID_RULES: &[ValidationRule] = &[rule_display_id];

/// Property descriptors for the slots every class declares
pub struct Identified;

impl Identified {
    pub const PERSISTENT_IDENTITY: UriProperty =
        UriProperty::new(SBOL_PERSISTENT_IDENTITY, 0, 1, &[]);
    pub const DISPLAY_ID: TextProperty =
        TextProperty::new(SBOL_DISPLAY_ID, 0, 1, DISPLAY_ID_RULES);
    pub const VERSION: VersionProperty = VersionProperty::new(SBOL_VERSION);
    pub const NAME: TextProperty = TextProperty::new(SBOL_NAME, 0, 1, &[]);
    pub const DESCRIPTION: TextProperty = TextProperty::new(SBOL_DESCRIPTION, 0, 1, &[]);
    pub const WAS_DERIVED_FROM: UriProperty =
        UriProperty::new(SBOL_WAS_DERIVED_FROM, 0, MANY, &[]);
}

/// Document-root capability, determined by the type registry
pub struct TopLevel;

impl TopLevel {
    /// Whether instances of this object's RDF type stand at document root
    pub fn describes(obj: &SBOLObject) -> bool {
        registered_top_level(&obj.rdf_type)
    }
}

/// Construct an instance with the shared slots declared. When `uri` is
/// non-empty it doubles as the persistentIdentity default.
pub(crate) fn base(type_uri: &str, uri: &str) -> SBOLObject {
    let mut obj = SBOLObject::new(type_uri, uri);
    obj.declare_property(SBOL_PERSISTENT_IDENTITY, PropertyKind::Uri);
    obj.declare_property(SBOL_DISPLAY_ID, PropertyKind::Literal);
    obj.declare_property(SBOL_VERSION, PropertyKind::Literal);
    obj.declare_property(SBOL_NAME, PropertyKind::Literal);
    obj.declare_property(SBOL_DESCRIPTION, PropertyKind::Literal);
    obj.declare_property(SBOL_WAS_DERIVED_FROM, PropertyKind::Uri);
    if !uri.is_empty() {
        let _ = obj.set_property_value(SBOL_PERSISTENT_IDENTITY, uri);
    }
    obj
}

/// Class-instance constructor. With compliant URIs enabled the identity is
/// `{homespace}/{Class}/{displayId}/{version}` and the displayId, version,
/// and persistentIdentity slots are filled from the URI components; with
/// them disabled the `display_id` argument is taken as a raw local name (or
/// full URI) and only the version slot is stamped.
pub(crate) fn construct(
    config: &Config,
    type_uri: &str,
    display_id: &str,
    version: &str,
) -> SbolResult<SBOLObject> {
    if !config.compliant_uris {
        let identity = config.noncompliant_uri(display_id);
        crate::rdf::validate_iri(&identity)?;
        let mut obj = base(type_uri, &identity);
        if !version.is_empty() {
            rule_maven_version(&obj, version)?;
            obj.set_property_value(SBOL_VERSION, version)?;
        }
        return Ok(obj);
    }

    let identity = config.compliant_uri(type_uri, display_id, version)?;
    let mut obj = base(type_uri, &identity);
    rule_display_id(&obj, display_id)?;
    rule_maven_version(&obj, version)?;

    let suffix = format!("/{}", version);
    let persistent = identity.strip_suffix(suffix.as_str()).unwrap_or(&identity);
    obj.set_property_value(SBOL_PERSISTENT_IDENTITY, persistent)?;
    obj.set_property_value(SBOL_DISPLAY_ID, display_id)?;
    obj.set_property_value(SBOL_VERSION, version)?;
    Ok(obj)
}

/// Schema-and-identity constructor for open-world (non-compliant) URIs
pub(crate) fn with_uri<T: SbolClass>(uri: &str) -> SbolResult<SBOLObject> {
    crate::rdf::validate_iri(uri)?;
    let mut obj = T::create();
    obj.set_identity(uri);
    let _ = obj.set_property_value(SBOL_PERSISTENT_IDENTITY, uri);
    Ok(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SBOL_COMPONENT_DEFINITION;

    #[test]
    fn test_compliant_fills_base_slots() {
        let config = Config::with_homespace("http://examples.org");
        let obj = construct(&config, SBOL_COMPONENT_DEFINITION, "cd1", "1.0.0").unwrap();
        assert_eq!(
            obj.identity(),
            "http://examples.org/ComponentDefinition/cd1/1.0.0"
        );
        assert_eq!(
            Identified::PERSISTENT_IDENTITY.get(&obj).unwrap(),
            "http://examples.org/ComponentDefinition/cd1"
        );
        assert_eq!(Identified::DISPLAY_ID.get(&obj).unwrap(), "cd1");
        assert_eq!(Identified::VERSION.get(&obj).unwrap(), "1.0.0");
        assert!(Identified::NAME.get(&obj).is_err()); // declared, unset
    }

    #[test]
    fn test_compliant_rejects_bad_display_id() {
        let config = Config::with_homespace("http://examples.org");
        assert!(construct(&config, SBOL_COMPONENT_DEFINITION, "9cd", "1.0.0").is_err());
        assert!(construct(&config, SBOL_COMPONENT_DEFINITION, "cd1", "latest").is_err());
    }

    #[test]
    fn test_noncompliant_mode_prefixes_homespace() {
        let mut config = Config::with_homespace("http://examples.org");
        config.compliant_uris = false;
        let obj = construct(&config, SBOL_COMPONENT_DEFINITION, "cd1", "1.0.0").unwrap();
        assert_eq!(obj.identity(), "http://examples.org/cd1");
        assert_eq!(
            Identified::PERSISTENT_IDENTITY.get(&obj).unwrap(),
            "http://examples.org/cd1"
        );
        assert_eq!(Identified::VERSION.get(&obj).unwrap(), "1.0.0");
        // No displayId slot is inferred from a raw local name
        assert!(Identified::DISPLAY_ID.get(&obj).is_err());
    }

    #[test]
    fn test_noncompliant_mode_passes_full_uris_through() {
        let mut config = Config::with_homespace("http://examples.org");
        config.compliant_uris = false;
        let obj =
            construct(&config, SBOL_COMPONENT_DEFINITION, "http://other.org/designs#gfp", "")
                .unwrap();
        assert_eq!(obj.identity(), "http://other.org/designs#gfp");
    }
}
