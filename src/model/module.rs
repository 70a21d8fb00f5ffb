//! Functional design classes: ModuleDefinition and the behavior it describes

use super::identified;
use super::SbolClass;
use crate::config::Config;
use crate::constants::{
    EDAM_SBML, SBOL_DEFINITION, SBOL_FRAMEWORK, SBOL_FUNCTIONAL_COMPONENT,
    SBOL_FUNCTIONAL_COMPONENTS, SBOL_INTERACTION, SBOL_INTERACTIONS, SBOL_LANGUAGE,
    SBOL_MAPS_TOS, SBOL_MODEL, SBOL_MODELS, SBOL_MODULE, SBOL_MODULES, SBOL_MODULE_DEFINITION,
    SBOL_PARTICIPANT, SBOL_PARTICIPATION, SBOL_PARTICIPATIONS, SBOL_ROLES, SBOL_SOURCE,
    SBOL_TYPES,
};
use crate::error::SbolResult;
use crate::object::{
    OwnedObject, PropertyKind, ReferencedObject, SBOLObject, UriProperty, MANY,
};

/// A unit of biological function: interactions over functional components
pub struct ModuleDefinition;

impl ModuleDefinition {
    pub const ROLES: UriProperty = UriProperty::new(SBOL_ROLES, 0, MANY, &[]);
    /// Sub-module instantiations
    pub const MODULES: OwnedObject = OwnedObject::new(SBOL_MODULES, 0, MANY);
    pub const FUNCTIONAL_COMPONENTS: OwnedObject =
        OwnedObject::new(SBOL_FUNCTIONAL_COMPONENTS, 0, MANY);
    pub const INTERACTIONS: OwnedObject = OwnedObject::new(SBOL_INTERACTIONS, 0, MANY);
    /// References to quantitative Models of this module's behavior
    pub const MODELS: ReferencedObject =
        ReferencedObject::new(SBOL_MODELS, SBOL_MODEL, 0, MANY);

    pub fn new(config: &Config, display_id: &str, version: &str) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_module_definition(&mut obj);
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_module_definition(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_ROLES, PropertyKind::Uri);
    obj.declare_property(SBOL_MODELS, PropertyKind::Uri);
    obj.declare_owned(SBOL_MODULES);
    obj.declare_owned(SBOL_FUNCTIONAL_COMPONENTS);
    obj.declare_owned(SBOL_INTERACTIONS);
}

impl SbolClass for ModuleDefinition {
    const TYPE_URI: &'static str = SBOL_MODULE_DEFINITION;
    const IS_TOP_LEVEL: bool = true;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_module_definition(&mut obj);
        obj
    }
}

/// Usage of a ModuleDefinition inside another module
pub struct Module;

impl Module {
    pub const DEFINITION: ReferencedObject =
        ReferencedObject::new(SBOL_DEFINITION, SBOL_MODULE_DEFINITION, 1, 1);
    pub const MAPS_TOS: OwnedObject = OwnedObject::new(SBOL_MAPS_TOS, 0, MANY);

    pub fn new(config: &Config, display_id: &str, version: &str) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_module(&mut obj);
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_module(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_DEFINITION, PropertyKind::Uri);
    obj.declare_owned(SBOL_MAPS_TOS);
}

impl SbolClass for Module {
    const TYPE_URI: &'static str = SBOL_MODULE;
    const IS_TOP_LEVEL: bool = false;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_module(&mut obj);
        obj
    }
}

/// A typed relationship among functional components
pub struct Interaction;

impl Interaction {
    /// SBO interaction types, at least one required
    pub const TYPES: UriProperty = UriProperty::new(SBOL_TYPES, 1, MANY, &[]);
    pub const PARTICIPATIONS: OwnedObject = OwnedObject::new(SBOL_PARTICIPATIONS, 0, MANY);

    pub fn new(
        config: &Config,
        display_id: &str,
        interaction_type: &str,
        version: &str,
    ) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_interaction(&mut obj);
        Self::TYPES.add(&mut obj, interaction_type)?;
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_interaction(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_TYPES, PropertyKind::Uri);
    obj.declare_owned(SBOL_PARTICIPATIONS);
}

impl SbolClass for Interaction {
    const TYPE_URI: &'static str = SBOL_INTERACTION;
    const IS_TOP_LEVEL: bool = false;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_interaction(&mut obj);
        obj
    }
}

/// How one functional component participates in an interaction
pub struct Participation;

impl Participation {
    /// SBO participation roles (inhibitor, product, ...)
    pub const ROLES: UriProperty = UriProperty::new(SBOL_ROLES, 0, MANY, &[]);
    pub const PARTICIPANT: ReferencedObject =
        ReferencedObject::new(SBOL_PARTICIPANT, SBOL_FUNCTIONAL_COMPONENT, 1, 1);

    pub fn new(config: &Config, display_id: &str, version: &str) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_participation(&mut obj);
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_participation(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_ROLES, PropertyKind::Uri);
    obj.declare_property(SBOL_PARTICIPANT, PropertyKind::Uri);
}

impl SbolClass for Participation {
    const TYPE_URI: &'static str = SBOL_PARTICIPATION;
    const IS_TOP_LEVEL: bool = false;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_participation(&mut obj);
        obj
    }
}

/// An external quantitative model of a module's behavior
pub struct Model;

impl Model {
    /// Where the model file lives
    pub const SOURCE: UriProperty = UriProperty::new(SBOL_SOURCE, 1, 1, &[]);
    /// EDAM format of the model file; SBML by default
    pub const LANGUAGE: UriProperty = UriProperty::new(SBOL_LANGUAGE, 1, 1, &[]);
    /// SBO modeling framework
    pub const FRAMEWORK: UriProperty = UriProperty::new(SBOL_FRAMEWORK, 1, 1, &[]);

    pub fn new(
        config: &Config,
        display_id: &str,
        source: &str,
        version: &str,
    ) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_model(&mut obj);
        Self::SOURCE.set(&mut obj, source)?;
        Self::LANGUAGE.set(&mut obj, EDAM_SBML)?;
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_model(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_SOURCE, PropertyKind::Uri);
    obj.declare_property(SBOL_LANGUAGE, PropertyKind::Uri);
    obj.declare_property(SBOL_FRAMEWORK, PropertyKind::Uri);
}

impl SbolClass for Model {
    const TYPE_URI: &'static str = SBOL_MODEL;
    const IS_TOP_LEVEL: bool = true;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_model(&mut obj);
        obj
    }
}
