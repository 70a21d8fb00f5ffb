//! Structural design classes: ComponentDefinition and the instantiation
//! classes that wire definitions together

use super::identified;
use super::SbolClass;
use crate::config::Config;
use crate::constants::{
    BIOPAX_DNA, SBOL_ACCESS, SBOL_ACCESS_PUBLIC, SBOL_COMPONENT, SBOL_COMPONENTS,
    SBOL_COMPONENT_DEFINITION, SBOL_DEFINITION, SBOL_DIRECTION, SBOL_DIRECTION_IN_OUT,
    SBOL_FUNCTIONAL_COMPONENT, SBOL_LOCAL, SBOL_MAPS_TO, SBOL_MAPS_TOS, SBOL_REFINEMENT,
    SBOL_REMOTE, SBOL_ROLES, SBOL_SEQUENCE, SBOL_SEQUENCE_ANNOTATIONS,
    SBOL_SEQUENCE_CONSTRAINTS, SBOL_SEQUENCE_PROPERTY, SBOL_TYPES,
};
use crate::error::SbolResult;
use crate::object::{
    OwnedObject, PropertyKind, ReferencedObject, SBOLObject, UriProperty, MANY,
};

/// A design part: DNA region, protein, small molecule, and so on
pub struct ComponentDefinition;

impl ComponentDefinition {
    /// BioPAX molecular types, at least one required
    pub const TYPES: UriProperty = UriProperty::new(SBOL_TYPES, 1, MANY, &[]);
    /// Sequence Ontology roles (promoter, CDS, ...)
    pub const ROLES: UriProperty = UriProperty::new(SBOL_ROLES, 0, MANY, &[]);
    /// References to the Sequences realizing this definition
    pub const SEQUENCES: ReferencedObject =
        ReferencedObject::new(SBOL_SEQUENCE_PROPERTY, SBOL_SEQUENCE, 0, MANY);
    /// Structural sub-component instantiations
    pub const COMPONENTS: OwnedObject = OwnedObject::new(SBOL_COMPONENTS, 0, MANY);
    /// Positional annotations over the sequence
    pub const SEQUENCE_ANNOTATIONS: OwnedObject =
        OwnedObject::new(SBOL_SEQUENCE_ANNOTATIONS, 0, MANY);
    /// Ordering constraints between sub-components
    pub const SEQUENCE_CONSTRAINTS: OwnedObject =
        OwnedObject::new(SBOL_SEQUENCE_CONSTRAINTS, 0, MANY);

    /// Compliant constructor; the molecular type defaults to DNA
    pub fn new(config: &Config, display_id: &str, version: &str) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_component_definition(&mut obj);
        Self::TYPES.add(&mut obj, BIOPAX_DNA)?;
        Ok(obj)
    }

    /// Open-world constructor with an explicit identity URI
    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_component_definition(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_TYPES, PropertyKind::Uri);
    obj.declare_property(SBOL_ROLES, PropertyKind::Uri);
    obj.declare_property(SBOL_SEQUENCE_PROPERTY, PropertyKind::Uri);
    obj.declare_owned(SBOL_COMPONENTS);
    obj.declare_owned(SBOL_SEQUENCE_ANNOTATIONS);
    obj.declare_owned(SBOL_SEQUENCE_CONSTRAINTS);
}

impl SbolClass for ComponentDefinition {
    const TYPE_URI: &'static str = SBOL_COMPONENT_DEFINITION;
    const IS_TOP_LEVEL: bool = true;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_component_definition(&mut obj);
        obj
    }
}

/// Usage of a ComponentDefinition inside another's structure
pub struct Component;

impl Component {
    /// The definition this instantiation points at
    pub const DEFINITION: ReferencedObject =
        ReferencedObject::new(SBOL_DEFINITION, SBOL_COMPONENT_DEFINITION, 1, 1);
    /// Visibility to MapsTo refinements (public or private)
    pub const ACCESS: UriProperty = UriProperty::new(SBOL_ACCESS, 0, 1, &[]);
    pub const MAPS_TOS: OwnedObject = OwnedObject::new(SBOL_MAPS_TOS, 0, MANY);

    pub fn new(config: &Config, display_id: &str, version: &str) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_component(&mut obj);
        Self::ACCESS.set(&mut obj, SBOL_ACCESS_PUBLIC)?;
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_component(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_DEFINITION, PropertyKind::Uri);
    obj.declare_property(SBOL_ACCESS, PropertyKind::Uri);
    obj.declare_owned(SBOL_MAPS_TOS);
}

impl SbolClass for Component {
    const TYPE_URI: &'static str = SBOL_COMPONENT;
    const IS_TOP_LEVEL: bool = false;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_component(&mut obj);
        obj
    }
}

/// Functional usage of a ComponentDefinition inside a ModuleDefinition
pub struct FunctionalComponent;

impl FunctionalComponent {
    pub const DEFINITION: ReferencedObject =
        ReferencedObject::new(SBOL_DEFINITION, SBOL_COMPONENT_DEFINITION, 1, 1);
    pub const ACCESS: UriProperty = UriProperty::new(SBOL_ACCESS, 0, 1, &[]);
    /// Input/output direction with respect to the enclosing module
    pub const DIRECTION: UriProperty = UriProperty::new(SBOL_DIRECTION, 0, 1, &[]);
    pub const MAPS_TOS: OwnedObject = OwnedObject::new(SBOL_MAPS_TOS, 0, MANY);

    pub fn new(config: &Config, display_id: &str, version: &str) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_functional_component(&mut obj);
        Self::ACCESS.set(&mut obj, SBOL_ACCESS_PUBLIC)?;
        Self::DIRECTION.set(&mut obj, SBOL_DIRECTION_IN_OUT)?;
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_functional_component(obj: &mut SBOLObject) {
    declare_component(obj);
    obj.declare_property(SBOL_DIRECTION, PropertyKind::Uri);
}

impl SbolClass for FunctionalComponent {
    const TYPE_URI: &'static str = SBOL_FUNCTIONAL_COMPONENT;
    const IS_TOP_LEVEL: bool = false;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_functional_component(&mut obj);
        obj
    }
}

/// Identity relation between component instantiations at different
/// levels of a design hierarchy
pub struct MapsTo;

impl MapsTo {
    pub const REFINEMENT: UriProperty = UriProperty::new(SBOL_REFINEMENT, 1, 1, &[]);
    pub const LOCAL: ReferencedObject =
        ReferencedObject::new(SBOL_LOCAL, SBOL_FUNCTIONAL_COMPONENT, 1, 1);
    pub const REMOTE: ReferencedObject =
        ReferencedObject::new(SBOL_REMOTE, SBOL_FUNCTIONAL_COMPONENT, 1, 1);

    pub fn new(config: &Config, display_id: &str, version: &str) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_maps_to(&mut obj);
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_maps_to(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_REFINEMENT, PropertyKind::Uri);
    obj.declare_property(SBOL_LOCAL, PropertyKind::Uri);
    obj.declare_property(SBOL_REMOTE, PropertyKind::Uri);
}

impl SbolClass for MapsTo {
    const TYPE_URI: &'static str = SBOL_MAPS_TO;
    const IS_TOP_LEVEL: bool = false;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_maps_to(&mut obj);
        obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SO_PROMOTER;

    #[test]
    fn test_component_definition_defaults() {
        let config = Config::with_homespace("http://examples.org");
        let mut cd = ComponentDefinition::new(&config, "pLac", "1.0.0").unwrap();
        assert_eq!(
            ComponentDefinition::TYPES.get(&cd).unwrap(),
            BIOPAX_DNA
        );
        ComponentDefinition::ROLES.add(&mut cd, SO_PROMOTER).unwrap();
        assert_eq!(
            ComponentDefinition::ROLES.get_all(&cd).unwrap(),
            vec![SO_PROMOTER]
        );
    }

    #[test]
    fn test_nested_component_ownership() {
        let config = Config::with_homespace("http://examples.org");
        let mut cd = ComponentDefinition::new(&config, "gene", "1.0.0").unwrap();
        let c = Component::new(&config, "promoter_instance", "1.0.0").unwrap();
        let child_uri = c.identity().to_string();
        ComponentDefinition::COMPONENTS.add(&mut cd, c).unwrap();

        let child = ComponentDefinition::COMPONENTS.get(&cd, &child_uri).unwrap();
        assert_eq!(Component::ACCESS.get(child).unwrap(), SBOL_ACCESS_PUBLIC);
    }

    #[test]
    fn test_functional_component_direction_default() {
        let config = Config::with_homespace("http://examples.org");
        let fc = FunctionalComponent::new(&config, "tf", "1.0.0").unwrap();
        assert_eq!(
            FunctionalComponent::DIRECTION.get(&fc).unwrap(),
            SBOL_DIRECTION_IN_OUT
        );
    }
}
