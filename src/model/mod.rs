//! The built-in SBOL2 data model classes
//!
//! Each class is a marker type: its property table is a set of `const`
//! descriptors, its constructors produce schema-initialized `SBOLObject`
//! instances, and `SbolClass` ties the RDF type URI and top-level capability
//! to the marker so the registry and the checked downcast can dispatch on it.

mod annotation;
mod collection;
mod component;
mod identified;
mod module;
mod sequence;

pub use annotation::{Cut, GenericLocation, Range, SequenceAnnotation, SequenceConstraint};
pub use collection::{Collection, GenericTopLevel};
pub use component::{Component, ComponentDefinition, FunctionalComponent, MapsTo};
pub use identified::{Identified, TopLevel};
pub use module::{Interaction, Model, Module, ModuleDefinition, Participation};
pub use sequence::Sequence;

use crate::object::{RegistryEntry, SBOLObject};

/// Capability every data model class implements: the RDF type it serializes
/// as, whether instances stand at document root, and a factory producing a
/// schema-initialized instance with no identity assigned.
pub trait SbolClass {
    const TYPE_URI: &'static str;
    const IS_TOP_LEVEL: bool;

    fn create() -> SBOLObject;
}

fn entry<T: SbolClass>() -> RegistryEntry {
    RegistryEntry {
        type_uri: T::TYPE_URI.to_string(),
        factory: T::create,
        top_level: T::IS_TOP_LEVEL,
    }
}

/// Registry entries for every built-in class
pub(crate) fn builtin_entries() -> Vec<RegistryEntry> {
    vec![
        entry::<ComponentDefinition>(),
        entry::<Sequence>(),
        entry::<SequenceAnnotation>(),
        entry::<SequenceConstraint>(),
        entry::<Range>(),
        entry::<Cut>(),
        entry::<GenericLocation>(),
        entry::<Component>(),
        entry::<FunctionalComponent>(),
        entry::<MapsTo>(),
        entry::<ModuleDefinition>(),
        entry::<Module>(),
        entry::<Interaction>(),
        entry::<Participation>(),
        entry::<Model>(),
        entry::<Collection>(),
        entry::<GenericTopLevel>(),
    ]
}
