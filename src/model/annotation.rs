//! Positional annotation classes: SequenceAnnotation and its Location
//! variants, plus SequenceConstraint

use super::identified;
use super::SbolClass;
use crate::config::Config;
use crate::constants::{
    SBOL_AT, SBOL_COMPONENT, SBOL_COMPONENT_PROPERTY, SBOL_CUT, SBOL_END, SBOL_GENERIC_LOCATION,
    SBOL_LOCATIONS, SBOL_OBJECT, SBOL_ORIENTATION, SBOL_ORIENTATION_INLINE, SBOL_RANGE,
    SBOL_RESTRICTION, SBOL_RESTRICTION_PRECEDES, SBOL_SEQUENCE_ANNOTATION,
    SBOL_SEQUENCE_CONSTRAINT, SBOL_START, SBOL_SUBJECT,
};
use crate::error::SbolResult;
use crate::object::{
    IntProperty, OwnedObject, PropertyKind, ReferencedObject, SBOLObject, UriProperty, MANY,
};

/// Marks a region of interest on a parent definition's sequence
pub struct SequenceAnnotation;

impl SequenceAnnotation {
    /// Where on the sequence the annotation applies; Range, Cut, or
    /// GenericLocation children
    pub const LOCATIONS: OwnedObject = OwnedObject::new(SBOL_LOCATIONS, 0, MANY);
    /// Optional link to the sub-component the region corresponds to
    pub const COMPONENT: ReferencedObject =
        ReferencedObject::new(SBOL_COMPONENT_PROPERTY, SBOL_COMPONENT, 0, 1);

    pub fn new(config: &Config, display_id: &str, version: &str) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_sequence_annotation(&mut obj);
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_sequence_annotation(obj: &mut SBOLObject) {
    obj.declare_owned(SBOL_LOCATIONS);
    obj.declare_property(SBOL_COMPONENT_PROPERTY, PropertyKind::Uri);
}

impl SbolClass for SequenceAnnotation {
    const TYPE_URI: &'static str = SBOL_SEQUENCE_ANNOTATION;
    const IS_TOP_LEVEL: bool = false;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_sequence_annotation(&mut obj);
        obj
    }
}

/// A contiguous region between two inclusive coordinates
pub struct Range;

impl Range {
    pub const START: IntProperty = IntProperty::new(SBOL_START, 1, 1);
    pub const END: IntProperty = IntProperty::new(SBOL_END, 1, 1);
    pub const ORIENTATION: UriProperty = UriProperty::new(SBOL_ORIENTATION, 0, 1, &[]);

    pub fn new(
        config: &Config,
        display_id: &str,
        start: i64,
        end: i64,
        version: &str,
    ) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_range(&mut obj);
        Self::START.set(&mut obj, start)?;
        Self::END.set(&mut obj, end)?;
        Self::ORIENTATION.set(&mut obj, SBOL_ORIENTATION_INLINE)?;
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_range(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_START, PropertyKind::Literal);
    obj.declare_property(SBOL_END, PropertyKind::Literal);
    obj.declare_property(SBOL_ORIENTATION, PropertyKind::Uri);
}

impl SbolClass for Range {
    const TYPE_URI: &'static str = SBOL_RANGE;
    const IS_TOP_LEVEL: bool = false;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_range(&mut obj);
        obj
    }
}

/// A single point between two coordinates
pub struct Cut;

impl Cut {
    pub const AT: IntProperty = IntProperty::new(SBOL_AT, 1, 1);
    pub const ORIENTATION: UriProperty = UriProperty::new(SBOL_ORIENTATION, 0, 1, &[]);

    pub fn new(
        config: &Config,
        display_id: &str,
        at: i64,
        version: &str,
    ) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_cut(&mut obj);
        Self::AT.set(&mut obj, at)?;
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_cut(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_AT, PropertyKind::Literal);
    obj.declare_property(SBOL_ORIENTATION, PropertyKind::Uri);
}

impl SbolClass for Cut {
    const TYPE_URI: &'static str = SBOL_CUT;
    const IS_TOP_LEVEL: bool = false;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_cut(&mut obj);
        obj
    }
}

/// A location with orientation but no coordinates
pub struct GenericLocation;

impl GenericLocation {
    pub const ORIENTATION: UriProperty = UriProperty::new(SBOL_ORIENTATION, 0, 1, &[]);

    pub fn new(config: &Config, display_id: &str, version: &str) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_generic_location(&mut obj);
        Self::ORIENTATION.set(&mut obj, SBOL_ORIENTATION_INLINE)?;
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_generic_location(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_ORIENTATION, PropertyKind::Uri);
}

impl SbolClass for GenericLocation {
    const TYPE_URI: &'static str = SBOL_GENERIC_LOCATION;
    const IS_TOP_LEVEL: bool = false;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_generic_location(&mut obj);
        obj
    }
}

/// An ordering or orientation restriction between two sub-components
pub struct SequenceConstraint;

impl SequenceConstraint {
    pub const SUBJECT: ReferencedObject =
        ReferencedObject::new(SBOL_SUBJECT, SBOL_COMPONENT, 1, 1);
    pub const OBJECT: ReferencedObject =
        ReferencedObject::new(SBOL_OBJECT, SBOL_COMPONENT, 1, 1);
    pub const RESTRICTION: UriProperty = UriProperty::new(SBOL_RESTRICTION, 1, 1, &[]);

    pub fn new(config: &Config, display_id: &str, version: &str) -> SbolResult<SBOLObject> {
        let mut obj = identified::construct(config, Self::TYPE_URI, display_id, version)?;
        declare_sequence_constraint(&mut obj);
        Self::RESTRICTION.set(&mut obj, SBOL_RESTRICTION_PRECEDES)?;
        Ok(obj)
    }

    pub fn with_uri(uri: &str) -> SbolResult<SBOLObject> {
        identified::with_uri::<Self>(uri)
    }
}

fn declare_sequence_constraint(obj: &mut SBOLObject) {
    obj.declare_property(SBOL_SUBJECT, PropertyKind::Uri);
    obj.declare_property(SBOL_OBJECT, PropertyKind::Uri);
    obj.declare_property(SBOL_RESTRICTION, PropertyKind::Uri);
}

impl SbolClass for SequenceConstraint {
    const TYPE_URI: &'static str = SBOL_SEQUENCE_CONSTRAINT;
    const IS_TOP_LEVEL: bool = false;

    fn create() -> SBOLObject {
        let mut obj = identified::base(Self::TYPE_URI, "");
        declare_sequence_constraint(&mut obj);
        obj
    }
}
