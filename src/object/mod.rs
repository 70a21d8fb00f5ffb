//! The generic SBOL object and its property/ownership stores
//!
//! Every typed class in the data model is a view over this one structure: an
//! identity, an RDF type tag, a property store of raw marker-wrapped strings,
//! and an ownership store of child objects held by value. Holding children by
//! value makes composition literal Rust ownership — dropping a parent drops
//! its subtree, and an object can never be owned twice.

mod property;
mod registry;
mod validation;

pub use property::{
    FloatProperty, IntProperty, OwnedObject, ReferencedObject, TextProperty, UriProperty,
    VersionProperty, MANY,
};
pub use registry::{lookup, register_extension, registered_top_level, RegistryEntry};
pub use validation::{
    rule_display_id, rule_identity_is_iri, rule_maven_version, ValidationRule,
};

use crate::constants::{self, SBOL_IDENTITY};
use crate::error::{SbolError, SbolResult};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Whether a property slot holds URI-wrapped or literal-wrapped values.
/// Fixed at declaration; `set` never changes a slot's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Values wrapped `<...>`
    Uri,
    /// Values wrapped `"..."`
    Literal,
}

impl PropertyKind {
    /// The sentinel stored in a declared-but-empty slot
    pub fn sentinel(self) -> &'static str {
        match self {
            PropertyKind::Uri => "<>",
            PropertyKind::Literal => "\"\"",
        }
    }

    /// Wrap a plain value with this kind's markers
    pub fn wrap(self, value: &str) -> String {
        match self {
            PropertyKind::Uri => format!("<{}>", value),
            PropertyKind::Literal => format!("\"{}\"", value),
        }
    }

    /// Infer the kind from a raw stored value
    pub fn of_raw(raw: &str) -> PropertyKind {
        if raw.starts_with('<') {
            PropertyKind::Uri
        } else {
            PropertyKind::Literal
        }
    }
}

pub(crate) fn is_sentinel(raw: &str) -> bool {
    raw == "<>" || raw == "\"\""
}

fn strip_markers(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2
        && ((bytes[0] == b'<' && bytes[bytes.len() - 1] == b'>')
            || (bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"'))
    {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

/// The polymorphic base representation for all SBOL data model classes
#[derive(Debug, Clone, Default)]
pub struct SBOLObject {
    /// RDF type URI used for dispatch and serialization element naming
    pub rdf_type: String,

    /// Property URI → ordered raw values (`<uri>` or `"literal"`).
    /// A declared-but-empty slot holds exactly one sentinel entry.
    pub properties: IndexMap<String, Vec<String>>,

    /// Ownership property URI → owned children, by value
    pub owned_objects: IndexMap<String, Vec<SBOLObject>>,

    /// Local prefix → namespace overrides, merged into the Document table
    /// at serialization time
    pub namespaces: HashMap<String, String>,
}

impl SBOLObject {
    /// Construct a bare generic object with the given RDF type and identity
    pub fn new(type_uri: impl Into<String>, identity: impl Into<String>) -> Self {
        let mut obj = Self {
            rdf_type: type_uri.into(),
            properties: IndexMap::new(),
            owned_objects: IndexMap::new(),
            namespaces: HashMap::new(),
        };
        let identity = identity.into();
        obj.properties
            .insert(SBOL_IDENTITY.to_string(), vec![format!("<{}>", identity)]);
        obj
    }

    /// The object's identity URI; empty when never assigned
    pub fn identity(&self) -> &str {
        self.properties
            .get(SBOL_IDENTITY)
            .and_then(|values| values.first())
            .map(|raw| strip_markers(raw))
            .unwrap_or("")
    }

    /// Reassign the identity URI
    pub fn set_identity(&mut self, uri: &str) {
        self.properties
            .insert(SBOL_IDENTITY.to_string(), vec![format!("<{}>", uri)]);
    }

    /// The local class name of this object's RDF type
    pub fn class_name(&self) -> &str {
        constants::parse_class_name(&self.rdf_type)
    }

    /// Declare a scalar property slot, establishing its sentinel.
    /// Re-declaring an existing slot is a no-op.
    pub fn declare_property(&mut self, property_uri: &str, kind: PropertyKind) {
        self.properties
            .entry(property_uri.to_string())
            .or_insert_with(|| vec![kind.sentinel().to_string()]);
    }

    /// Declare an ownership slot. Re-declaring is a no-op.
    pub fn declare_owned(&mut self, property_uri: &str) {
        self.owned_objects
            .entry(property_uri.to_string())
            .or_default();
    }

    /// Check whether a scalar property slot was declared
    pub fn has_property(&self, property_uri: &str) -> bool {
        self.properties.contains_key(property_uri)
    }

    /// Check whether an ownership slot was declared
    pub fn has_owned(&self, property_uri: &str) -> bool {
        self.owned_objects.contains_key(property_uri)
    }

    /// The declared kind of a property slot, inferred from its first value
    pub fn property_kind(&self, property_uri: &str) -> Option<PropertyKind> {
        self.properties
            .get(property_uri)
            .and_then(|values| values.first())
            .map(|raw| PropertyKind::of_raw(raw))
    }

    /// Get the first value of a property with markers stripped.
    ///
    /// Fails with `TypeMismatch` when the slot was never declared and with
    /// `NotFound` when only the sentinel is present — callers can distinguish
    /// "no such property on this class" from "declared but unset".
    pub fn get_property_value(&self, property_uri: &str) -> SbolResult<String> {
        let values = self.properties.get(property_uri).ok_or_else(|| {
            SbolError::TypeMismatch(format!(
                "{} has no property {}",
                self.class_name(),
                property_uri
            ))
        })?;
        match values.first() {
            Some(raw) if !is_sentinel(raw) => Ok(strip_markers(raw).to_string()),
            _ => Err(SbolError::NotFound(format!(
                "property {} of {} is not set",
                property_uri,
                self.identity()
            ))),
        }
    }

    /// Get all values of a property with markers stripped; a sentinel-only
    /// slot yields an empty list.
    pub fn get_property_values(&self, property_uri: &str) -> SbolResult<Vec<String>> {
        let values = self.properties.get(property_uri).ok_or_else(|| {
            SbolError::TypeMismatch(format!(
                "{} has no property {}",
                self.class_name(),
                property_uri
            ))
        })?;
        Ok(values
            .iter()
            .filter(|raw| !is_sentinel(raw))
            .map(|raw| strip_markers(raw).to_string())
            .collect())
    }

    /// Overwrite the first value of a declared property, re-wrapping per the
    /// slot's existing kind.
    pub fn set_property_value(&mut self, property_uri: &str, value: &str) -> SbolResult<()> {
        let kind = self.property_kind(property_uri).ok_or_else(|| {
            SbolError::TypeMismatch(format!(
                "{} has no property {}",
                self.class_name(),
                property_uri
            ))
        })?;
        let values = self
            .properties
            .get_mut(property_uri)
            .expect("slot checked above");
        if values.is_empty() {
            values.push(kind.wrap(value));
        } else {
            values[0] = kind.wrap(value);
        }
        Ok(())
    }

    /// Append a value to a declared property; the first real value replaces
    /// the sentinel instead of following it.
    pub fn add_property_value(&mut self, property_uri: &str, value: &str) -> SbolResult<()> {
        let kind = self.property_kind(property_uri).ok_or_else(|| {
            SbolError::TypeMismatch(format!(
                "{} has no property {}",
                self.class_name(),
                property_uri
            ))
        })?;
        self.append_raw(property_uri, &kind.wrap(value));
        Ok(())
    }

    /// Append an already-wrapped raw value, declaring the slot when absent.
    /// Used by the parse driver and the annotation API, which accept
    /// properties outside the declared schema.
    pub fn append_raw(&mut self, property_uri: &str, raw: &str) {
        let values = self
            .properties
            .entry(property_uri.to_string())
            .or_default();
        if values.len() == 1 && is_sentinel(&values[0]) {
            values[0] = raw.to_string();
        } else {
            values.push(raw.to_string());
        }
    }

    /// Set a custom annotation value, declaring the slot as the value's kind
    /// when the class schema never mentioned it.
    pub fn set_annotation(&mut self, property_uri: &str, value: &crate::rdf::RdfValue) {
        if !self.has_property(property_uri) {
            self.declare_property(property_uri, PropertyKind::of_raw(&value.to_raw()));
        }
        // set_property_value cannot fail once the slot exists
        let _ = self.set_property_value(property_uri, value.value());
    }

    /// Remove the value at `index`; removing the last value re-establishes
    /// the sentinel, collapsing back to the declared-but-empty state.
    pub fn remove_property_value(&mut self, property_uri: &str, index: usize) -> SbolResult<()> {
        let kind = self.property_kind(property_uri).ok_or_else(|| {
            SbolError::TypeMismatch(format!(
                "{} has no property {}",
                self.class_name(),
                property_uri
            ))
        })?;
        let values = self
            .properties
            .get_mut(property_uri)
            .expect("slot checked above");
        if values.len() == 1 && is_sentinel(&values[0]) {
            return Err(SbolError::NotFound(format!(
                "property {} is not set",
                property_uri
            )));
        }
        if index >= values.len() {
            return Err(SbolError::NotFound(format!(
                "property {} has no value at index {}",
                property_uri, index
            )));
        }
        values.remove(index);
        if values.is_empty() {
            values.push(kind.sentinel().to_string());
        }
        Ok(())
    }

    /// Number of real (non-sentinel) values stored for a property
    pub fn property_size(&self, property_uri: &str) -> usize {
        self.properties
            .get(property_uri)
            .map(|values| values.iter().filter(|raw| !is_sentinel(raw)).count())
            .unwrap_or(0)
    }

    /// URIs of every property this object carries, core and custom alike
    pub fn property_uris(&self) -> Vec<&str> {
        self.properties.keys().map(|uri| uri.as_str()).collect()
    }

    /// Move a child object into an ownership slot, declaring it when absent.
    /// Fails with `DuplicateUri` when the slot already holds that identity.
    pub fn add_owned(&mut self, property_uri: &str, child: SBOLObject) -> SbolResult<()> {
        let slot = self
            .owned_objects
            .entry(property_uri.to_string())
            .or_default();
        if slot.iter().any(|obj| obj.identity() == child.identity()) {
            return Err(SbolError::DuplicateUri(child.identity().to_string()));
        }
        slot.push(child);
        Ok(())
    }

    /// The children stored in an ownership slot
    pub fn owned(&self, property_uri: &str) -> &[SBOLObject] {
        self.owned_objects
            .get(property_uri)
            .map(|slot| slot.as_slice())
            .unwrap_or(&[])
    }

    /// Mutable view of an ownership slot's children
    pub fn owned_mut(&mut self, property_uri: &str) -> &mut Vec<SBOLObject> {
        self.owned_objects
            .entry(property_uri.to_string())
            .or_default()
    }

    /// Move a child out of an ownership slot by identity
    pub fn take_owned(&mut self, property_uri: &str, uri: &str) -> Option<SBOLObject> {
        let slot = self.owned_objects.get_mut(property_uri)?;
        let index = slot.iter().position(|obj| obj.identity() == uri)?;
        Some(slot.remove(index))
    }

    /// Depth-first search of this object and its ownership tree for the
    /// object with the given identity.
    pub fn find(&self, uri: &str) -> Option<&SBOLObject> {
        if self.identity() == uri {
            return Some(self);
        }
        self.owned_objects
            .values()
            .flatten()
            .find_map(|child| child.find(uri))
    }

    /// Mutable counterpart of [`find`](Self::find)
    pub fn find_mut(&mut self, uri: &str) -> Option<&mut SBOLObject> {
        if self.identity() == uri {
            return Some(self);
        }
        self.owned_objects
            .values_mut()
            .flatten()
            .find_map(|child| child.find_mut(uri))
    }

    /// All objects in this ownership tree whose named property contains
    /// `value` (marker-stripped comparison).
    pub fn find_property_value<'a>(
        &'a self,
        property_uri: &str,
        value: &str,
    ) -> Vec<&'a SBOLObject> {
        let mut matches = Vec::new();
        self.collect_property_value(property_uri, value, &mut matches);
        matches
    }

    fn collect_property_value<'a>(
        &'a self,
        property_uri: &str,
        value: &str,
        matches: &mut Vec<&'a SBOLObject>,
    ) {
        if let Some(values) = self.properties.get(property_uri) {
            if values.iter().any(|raw| strip_markers(raw) == value) {
                matches.push(self);
            }
        }
        for child in self.owned_objects.values().flatten() {
            child.collect_property_value(property_uri, value, matches);
        }
    }

    /// All objects in this ownership tree holding a URI-valued property that
    /// points at the given identity — reference edges, not ownership.
    pub fn find_reference<'a>(&'a self, uri: &str) -> Vec<&'a SBOLObject> {
        let needle = format!("<{}>", uri);
        let mut matches = Vec::new();
        self.collect_reference(&needle, &mut matches);
        matches
    }

    fn collect_reference<'a>(&'a self, needle: &str, matches: &mut Vec<&'a SBOLObject>) {
        let referencing = self
            .properties
            .iter()
            .any(|(uri, values)| uri != SBOL_IDENTITY && values.iter().any(|raw| raw == needle));
        if referencing {
            matches.push(self);
        }
        for child in self.owned_objects.values().flatten() {
            child.collect_reference(needle, matches);
        }
    }

    /// Reset every declared scalar slot (identity excepted) back to its
    /// sentinel. The parse driver calls this on freshly-created instances so
    /// constructor defaults never leak into parsed data.
    pub fn reset_to_sentinels(&mut self) {
        for (uri, values) in self.properties.iter_mut() {
            if uri == SBOL_IDENTITY {
                continue;
            }
            let kind = values
                .first()
                .map(|raw| PropertyKind::of_raw(raw))
                .unwrap_or(PropertyKind::Literal);
            *values = vec![kind.sentinel().to_string()];
        }
    }

    /// Number of objects in the ownership tree below this one
    pub fn count_descendants(&self) -> usize {
        self.owned_objects
            .values()
            .flatten()
            .map(|child| 1 + child.count_descendants())
            .sum()
    }

    /// Structural comparison: type, properties (value order significant per
    /// slot), and the full ownership tree. Local namespace overrides do not
    /// participate — they are serialization hints, not data.
    pub fn compare(&self, other: &SBOLObject) -> bool {
        self == other
    }
}

impl PartialEq for SBOLObject {
    fn eq(&self, other: &Self) -> bool {
        self.rdf_type == other.rdf_type
            && self.properties == other.properties
            && self.owned_objects == other.owned_objects
    }
}

impl Eq for SBOLObject {}
