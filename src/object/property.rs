//! Typed property wrappers
//!
//! Each wrapper is a `const` descriptor a class module attaches to a
//! predicate URI: it carries the cardinality bounds and validation rules and
//! operates on any `SBOLObject` that declared the slot. The descriptors own
//! no data, so a class's property table is a handful of constants.

use super::validation::ValidationRule;
use super::SBOLObject;
use crate::config::Config;
use crate::error::{SbolError, SbolResult};
use crate::rdf::validate_iri;

/// Upper cardinality bound for unbounded properties
pub const MANY: u32 = u32::MAX;

fn check_upper(obj: &SBOLObject, uri: &str, upper: u32) -> SbolResult<()> {
    if obj.property_size(uri) as u64 >= upper as u64 {
        return Err(SbolError::InvalidArgument(format!(
            "property {} already holds its maximum of {} values",
            uri, upper
        )));
    }
    Ok(())
}

fn run_rules(
    rules: &[ValidationRule],
    obj: &SBOLObject,
    value: &str,
) -> SbolResult<()> {
    for rule in rules {
        rule(obj, value)?;
    }
    Ok(())
}

/// A literal-valued scalar property
#[derive(Debug, Clone, Copy)]
pub struct TextProperty {
    pub uri: &'static str,
    pub lower: u32,
    pub upper: u32,
    pub rules: &'static [ValidationRule],
}

impl TextProperty {
    pub const fn new(
        uri: &'static str,
        lower: u32,
        upper: u32,
        rules: &'static [ValidationRule],
    ) -> Self {
        Self { uri, lower, upper, rules }
    }

    pub fn get(&self, obj: &SBOLObject) -> SbolResult<String> {
        obj.get_property_value(self.uri)
    }

    pub fn get_all(&self, obj: &SBOLObject) -> SbolResult<Vec<String>> {
        obj.get_property_values(self.uri)
    }

    /// Overwrite the first value after running the validation rules
    pub fn set(&self, obj: &mut SBOLObject, value: &str) -> SbolResult<()> {
        run_rules(self.rules, obj, value)?;
        obj.set_property_value(self.uri, value)
    }

    /// Append a value, enforcing the upper cardinality bound
    pub fn add(&self, obj: &mut SBOLObject, value: &str) -> SbolResult<()> {
        run_rules(self.rules, obj, value)?;
        check_upper(obj, self.uri, self.upper)?;
        obj.add_property_value(self.uri, value)
    }

    pub fn remove(&self, obj: &mut SBOLObject, index: usize) -> SbolResult<()> {
        obj.remove_property_value(self.uri, index)
    }

    pub fn size(&self, obj: &SBOLObject) -> usize {
        obj.property_size(self.uri)
    }
}

/// A URI-valued scalar property; values are checked as IRIs on write
#[derive(Debug, Clone, Copy)]
pub struct UriProperty {
    pub uri: &'static str,
    pub lower: u32,
    pub upper: u32,
    pub rules: &'static [ValidationRule],
}

impl UriProperty {
    pub const fn new(
        uri: &'static str,
        lower: u32,
        upper: u32,
        rules: &'static [ValidationRule],
    ) -> Self {
        Self { uri, lower, upper, rules }
    }

    pub fn get(&self, obj: &SBOLObject) -> SbolResult<String> {
        obj.get_property_value(self.uri)
    }

    pub fn get_all(&self, obj: &SBOLObject) -> SbolResult<Vec<String>> {
        obj.get_property_values(self.uri)
    }

    pub fn set(&self, obj: &mut SBOLObject, value: &str) -> SbolResult<()> {
        validate_iri(value)?;
        run_rules(self.rules, obj, value)?;
        obj.set_property_value(self.uri, value)
    }

    pub fn add(&self, obj: &mut SBOLObject, value: &str) -> SbolResult<()> {
        validate_iri(value)?;
        run_rules(self.rules, obj, value)?;
        check_upper(obj, self.uri, self.upper)?;
        obj.add_property_value(self.uri, value)
    }

    pub fn remove(&self, obj: &mut SBOLObject, index: usize) -> SbolResult<()> {
        obj.remove_property_value(self.uri, index)
    }

    pub fn size(&self, obj: &SBOLObject) -> usize {
        obj.property_size(self.uri)
    }
}

/// An integer property stored as a literal
#[derive(Debug, Clone, Copy)]
pub struct IntProperty {
    pub uri: &'static str,
    pub lower: u32,
    pub upper: u32,
}

impl IntProperty {
    pub const fn new(uri: &'static str, lower: u32, upper: u32) -> Self {
        Self { uri, lower, upper }
    }

    pub fn get(&self, obj: &SBOLObject) -> SbolResult<i64> {
        let text = obj.get_property_value(self.uri)?;
        text.parse().map_err(|_| {
            SbolError::TypeMismatch(format!(
                "property {} holds {:?}, which is not an integer",
                self.uri, text
            ))
        })
    }

    pub fn set(&self, obj: &mut SBOLObject, value: i64) -> SbolResult<()> {
        obj.set_property_value(self.uri, &value.to_string())
    }

    pub fn size(&self, obj: &SBOLObject) -> usize {
        obj.property_size(self.uri)
    }
}

/// A floating-point property stored as a literal
#[derive(Debug, Clone, Copy)]
pub struct FloatProperty {
    pub uri: &'static str,
    pub lower: u32,
    pub upper: u32,
}

impl FloatProperty {
    pub const fn new(uri: &'static str, lower: u32, upper: u32) -> Self {
        Self { uri, lower, upper }
    }

    pub fn get(&self, obj: &SBOLObject) -> SbolResult<f64> {
        let text = obj.get_property_value(self.uri)?;
        text.parse().map_err(|_| {
            SbolError::TypeMismatch(format!(
                "property {} holds {:?}, which is not a number",
                self.uri, text
            ))
        })
    }

    pub fn set(&self, obj: &mut SBOLObject, value: f64) -> SbolResult<()> {
        obj.set_property_value(self.uri, &value.to_string())
    }
}

/// A Maven-style version property with component accessors
#[derive(Debug, Clone, Copy)]
pub struct VersionProperty {
    pub uri: &'static str,
}

impl VersionProperty {
    pub const fn new(uri: &'static str) -> Self {
        Self { uri }
    }

    pub fn get(&self, obj: &SBOLObject) -> SbolResult<String> {
        obj.get_property_value(self.uri)
    }

    pub fn set(&self, obj: &mut SBOLObject, value: &str) -> SbolResult<()> {
        super::validation::rule_maven_version(obj, value)?;
        obj.set_property_value(self.uri, value)
    }

    fn component(&self, obj: &SBOLObject, index: usize) -> SbolResult<u32> {
        let version = self.get(obj)?;
        let numerals = version.split('-').next().unwrap_or("");
        Ok(numerals
            .split('.')
            .nth(index)
            .and_then(|part| part.parse().ok())
            .unwrap_or(0))
    }

    pub fn major(&self, obj: &SBOLObject) -> SbolResult<u32> {
        self.component(obj, 0)
    }

    pub fn minor(&self, obj: &SBOLObject) -> SbolResult<u32> {
        self.component(obj, 1)
    }

    pub fn patch(&self, obj: &SBOLObject) -> SbolResult<u32> {
        self.component(obj, 2)
    }

    /// Bump the major numeral, zeroing minor and patch and dropping any
    /// qualifier
    pub fn increment_major(&self, obj: &mut SBOLObject) -> SbolResult<()> {
        let major = self.major(obj)?;
        self.set(obj, &format!("{}.0.0", major + 1))
    }

    pub fn increment_minor(&self, obj: &mut SBOLObject) -> SbolResult<()> {
        let (major, minor) = (self.major(obj)?, self.minor(obj)?);
        self.set(obj, &format!("{}.{}.0", major, minor + 1))
    }

    pub fn increment_patch(&self, obj: &mut SBOLObject) -> SbolResult<()> {
        let (major, minor, patch) = (self.major(obj)?, self.minor(obj)?, self.patch(obj)?);
        self.set(obj, &format!("{}.{}.{}", major, minor, patch + 1))
    }
}

/// A reference edge: a URI property pointing at another object's identity
/// without owning it.
#[derive(Debug, Clone, Copy)]
pub struct ReferencedObject {
    pub uri: &'static str,
    /// RDF type of the objects this property is meant to reference
    pub reference_type: &'static str,
    pub lower: u32,
    pub upper: u32,
}

impl ReferencedObject {
    pub const fn new(
        uri: &'static str,
        reference_type: &'static str,
        lower: u32,
        upper: u32,
    ) -> Self {
        Self { uri, reference_type, lower, upper }
    }

    pub fn get(&self, obj: &SBOLObject) -> SbolResult<String> {
        obj.get_property_value(self.uri)
    }

    pub fn get_all(&self, obj: &SBOLObject) -> SbolResult<Vec<String>> {
        obj.get_property_values(self.uri)
    }

    pub fn set(&self, obj: &mut SBOLObject, uri: &str) -> SbolResult<()> {
        validate_iri(uri)?;
        obj.set_property_value(self.uri, uri)
    }

    pub fn add(&self, obj: &mut SBOLObject, uri: &str) -> SbolResult<()> {
        validate_iri(uri)?;
        check_upper(obj, self.uri, self.upper)?;
        obj.add_property_value(self.uri, uri)
    }

    /// Set the reference by display id, autoconstructing the target's
    /// compliant URI from the configured homespace and the referenced class.
    pub fn set_reference(
        &self,
        obj: &mut SBOLObject,
        config: &Config,
        display_id: &str,
        version: &str,
    ) -> SbolResult<()> {
        let uri = config.compliant_uri(self.reference_type, display_id, version)?;
        obj.set_property_value(self.uri, &uri)
    }

    pub fn remove(&self, obj: &mut SBOLObject, index: usize) -> SbolResult<()> {
        obj.remove_property_value(self.uri, index)
    }

    pub fn size(&self, obj: &SBOLObject) -> usize {
        obj.property_size(self.uri)
    }
}

/// A composition edge: children held by value in the parent's ownership
/// store. Moving an object in transfers ownership; getting it back out
/// removes it from the tree.
#[derive(Debug, Clone, Copy)]
pub struct OwnedObject {
    pub uri: &'static str,
    pub lower: u32,
    pub upper: u32,
}

impl OwnedObject {
    pub const fn new(uri: &'static str, lower: u32, upper: u32) -> Self {
        Self { uri, lower, upper }
    }

    /// Move a child into the slot. Fails with `DuplicateUri` if the slot
    /// already holds that identity and with `InvalidArgument` when full.
    pub fn add(&self, obj: &mut SBOLObject, child: SBOLObject) -> SbolResult<()> {
        if child.identity().is_empty() {
            return Err(SbolError::InvalidArgument(
                "cannot own an object without an identity".to_string(),
            ));
        }
        if obj.owned(self.uri).len() as u64 >= self.upper as u64 {
            return Err(SbolError::InvalidArgument(format!(
                "ownership property {} already holds its maximum of {} objects",
                self.uri, self.upper
            )));
        }
        obj.add_owned(self.uri, child)
    }

    /// Borrow the child with the given identity
    pub fn get<'a>(&self, obj: &'a SBOLObject, uri: &str) -> SbolResult<&'a SBOLObject> {
        obj.owned(self.uri)
            .iter()
            .find(|child| child.identity() == uri)
            .ok_or_else(|| SbolError::NotFound(uri.to_string()))
    }

    /// Mutably borrow the child with the given identity
    pub fn get_mut<'a>(
        &self,
        obj: &'a mut SBOLObject,
        uri: &str,
    ) -> SbolResult<&'a mut SBOLObject> {
        obj.owned_mut(self.uri)
            .iter_mut()
            .find(|child| child.identity() == uri)
            .ok_or_else(|| SbolError::NotFound(uri.to_string()))
    }

    /// Borrow the sole child of a 0..1 slot
    pub fn first<'a>(&self, obj: &'a SBOLObject) -> SbolResult<&'a SBOLObject> {
        obj.owned(self.uri)
            .first()
            .ok_or_else(|| SbolError::NotFound(format!("property {} owns no objects", self.uri)))
    }

    /// All children in insertion order
    pub fn all<'a>(&self, obj: &'a SBOLObject) -> &'a [SBOLObject] {
        obj.owned(self.uri)
    }

    /// Move the child with the given identity out of the tree
    pub fn remove(&self, obj: &mut SBOLObject, uri: &str) -> SbolResult<SBOLObject> {
        obj.take_owned(self.uri, uri)
            .ok_or_else(|| SbolError::NotFound(uri.to_string()))
    }

    pub fn size(&self, obj: &SBOLObject) -> usize {
        obj.owned(self.uri).len()
    }
}
