//! The Document: a flat index of top-level objects, each the root of an
//! ownership tree
//!
//! The index holds objects by value, so a Document exclusively owns its
//! graph. Containment is the value tree and membership is presence in the
//! index; cross-document sharing happens only through [`Document::copy_from`]
//! deep clones.

mod read;
mod validator;
mod write;

pub use validator::{DocumentValidator, NamespaceValidator, ValidationReport};

use crate::config::Config;
use crate::constants::{SBOL_VERSION, SBOL_WAS_DERIVED_FROM};
use crate::error::{SbolError, SbolResult};
use crate::model::SbolClass;
use crate::object::SBOLObject;
use crate::rdf::{validate_iri, NamespaceManager};
use indexmap::IndexMap;
use oxiri::Iri;
use tracing::debug;

/// Container and entry point for an SBOL object graph
pub struct Document {
    /// Configuration threaded into URI construction and serialization
    pub config: Config,
    /// Prefix table for serialized output
    pub namespaces: NamespaceManager,
    objects: IndexMap<String, SBOLObject>,
    validators: Vec<Box<dyn DocumentValidator>>,
}

impl Document {
    /// An empty document with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// An empty document with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            namespaces: NamespaceManager::new(),
            objects: IndexMap::new(),
            validators: Vec::new(),
        }
    }

    /// Number of top-level objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Total number of objects, including every nested child
    pub fn total_len(&self) -> usize {
        self.objects
            .values()
            .map(|obj| 1 + obj.count_descendants())
            .sum()
    }

    /// Move an object into the top-level index.
    ///
    /// The identity must be a well-formed IRI and unique among the indexed
    /// roots; a collision is `DuplicateUri`.
    pub fn add(&mut self, obj: SBOLObject) -> SbolResult<()> {
        let identity = obj.identity().to_string();
        validate_iri(&identity)?;
        if self.objects.contains_key(&identity) {
            return Err(SbolError::DuplicateUri(identity));
        }
        debug!(uri = %identity, class = obj.class_name(), "adding top-level object");
        self.objects.insert(identity, obj);
        Ok(())
    }

    /// Borrow a top-level object by identity
    pub fn get(&self, uri: &str) -> Option<&SBOLObject> {
        self.objects.get(uri)
    }

    /// Mutably borrow a top-level object by identity
    pub fn get_mut(&mut self, uri: &str) -> Option<&mut SBOLObject> {
        self.objects.get_mut(uri)
    }

    /// Borrow a top-level object checked against an expected class.
    ///
    /// A type disagreement is `TypeMismatch`, never a blind cast.
    pub fn get_as<T: SbolClass>(&self, uri: &str) -> SbolResult<&SBOLObject> {
        let obj = self
            .get(uri)
            .ok_or_else(|| SbolError::NotFound(uri.to_string()))?;
        if obj.rdf_type != T::TYPE_URI {
            return Err(SbolError::TypeMismatch(format!(
                "{} is a {}, not a {}",
                uri,
                obj.class_name(),
                crate::constants::parse_class_name(T::TYPE_URI)
            )));
        }
        Ok(obj)
    }

    /// Mutable counterpart of [`get_as`](Self::get_as)
    pub fn get_as_mut<T: SbolClass>(&mut self, uri: &str) -> SbolResult<&mut SBOLObject> {
        self.get_as::<T>(uri)?;
        Ok(self.objects.get_mut(uri).expect("presence checked above"))
    }

    /// All top-level objects in insertion order
    pub fn objects(&self) -> impl Iterator<Item = &SBOLObject> {
        self.objects.values()
    }

    /// Top-level objects of one RDF type, a computed view over the index
    pub fn objects_of_type<'a>(
        &'a self,
        type_uri: &'a str,
    ) -> impl Iterator<Item = &'a SBOLObject> {
        self.objects
            .values()
            .filter(move |obj| obj.rdf_type == type_uri)
    }

    pub fn component_definitions(&self) -> impl Iterator<Item = &SBOLObject> {
        self.objects_of_type(crate::constants::SBOL_COMPONENT_DEFINITION)
    }

    pub fn sequences(&self) -> impl Iterator<Item = &SBOLObject> {
        self.objects_of_type(crate::constants::SBOL_SEQUENCE)
    }

    pub fn module_definitions(&self) -> impl Iterator<Item = &SBOLObject> {
        self.objects_of_type(crate::constants::SBOL_MODULE_DEFINITION)
    }

    pub fn models(&self) -> impl Iterator<Item = &SBOLObject> {
        self.objects_of_type(crate::constants::SBOL_MODEL)
    }

    pub fn collections(&self) -> impl Iterator<Item = &SBOLObject> {
        self.objects_of_type(crate::constants::SBOL_COLLECTION)
    }

    /// Find an object anywhere in the document, nested children included
    pub fn find(&self, uri: &str) -> Option<&SBOLObject> {
        self.objects.values().find_map(|root| root.find(uri))
    }

    /// Mutable counterpart of [`find`](Self::find)
    pub fn find_mut(&mut self, uri: &str) -> Option<&mut SBOLObject> {
        self.objects.values_mut().find_map(|root| root.find_mut(uri))
    }

    /// All objects anywhere in the document whose property holds `value`
    pub fn find_property_value<'a>(
        &'a self,
        property_uri: &str,
        value: &str,
    ) -> Vec<&'a SBOLObject> {
        self.objects
            .values()
            .flat_map(|root| root.find_property_value(property_uri, value))
            .collect()
    }

    /// All objects anywhere in the document referencing the given identity
    pub fn find_reference<'a>(&'a self, uri: &str) -> Vec<&'a SBOLObject> {
        self.objects
            .values()
            .flat_map(|root| root.find_reference(uri))
            .collect()
    }

    /// Remove an object and drop its entire owned subtree, wherever it sits
    /// in the forest. Referenced objects are untouched. Returns how many
    /// objects were dropped.
    pub fn close(&mut self, uri: &str) -> SbolResult<usize> {
        if let Some(obj) = self.objects.shift_remove(uri) {
            let dropped = 1 + obj.count_descendants();
            debug!(uri = %uri, dropped, "closed top-level object");
            return Ok(dropped);
        }
        for root in self.objects.values_mut() {
            if let Some(obj) = take_nested(root, uri) {
                let dropped = 1 + obj.count_descendants();
                debug!(uri = %uri, dropped, "closed nested object");
                return Ok(dropped);
            }
        }
        Err(SbolError::NotFound(uri.to_string()))
    }

    /// Drop every object; configuration and registered validators survive
    pub fn clear(&mut self) {
        self.objects.clear();
        self.namespaces = NamespaceManager::new();
    }

    /// Deep-copy a top-level object from another document into this one,
    /// rewriting its identity (and its subtree's) into `target_namespace`
    /// and stamping `version`. The copied root records its original
    /// identity under `prov:wasDerivedFrom`. Returns the clone's identity.
    pub fn copy_from(
        &mut self,
        source: &Document,
        uri: &str,
        target_namespace: &str,
        version: &str,
    ) -> SbolResult<String> {
        let original = source
            .get(uri)
            .ok_or_else(|| SbolError::NotFound(uri.to_string()))?;
        validate_iri(target_namespace)?;

        let mut clone = original.clone();
        rewrite_subtree(&mut clone, target_namespace, version)?;
        if clone.has_property(SBOL_WAS_DERIVED_FROM) {
            clone.add_property_value(SBOL_WAS_DERIVED_FROM, uri)?;
        }
        let identity = clone.identity().to_string();
        self.add(clone)?;
        Ok(identity)
    }

    /// Copy within one document, e.g. to stamp a new version
    pub fn copy(
        &mut self,
        uri: &str,
        target_namespace: &str,
        version: &str,
    ) -> SbolResult<String> {
        let original = self
            .get(uri)
            .ok_or_else(|| SbolError::NotFound(uri.to_string()))?;
        validate_iri(target_namespace)?;

        let mut clone = original.clone();
        rewrite_subtree(&mut clone, target_namespace, version)?;
        if clone.has_property(SBOL_WAS_DERIVED_FROM) {
            clone.add_property_value(SBOL_WAS_DERIVED_FROM, uri)?;
        }
        let identity = clone.identity().to_string();
        self.add(clone)?;
        Ok(identity)
    }

    /// Register an external validator run once per `write`
    pub fn add_validator(&mut self, validator: Box<dyn DocumentValidator>) {
        self.validators.push(validator);
    }

    pub(crate) fn validators(&self) -> &[Box<dyn DocumentValidator>] {
        &self.validators
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn take_nested(root: &mut SBOLObject, uri: &str) -> Option<SBOLObject> {
    for slot in root.owned_objects.values_mut() {
        if let Some(index) = slot.iter().position(|child| child.identity() == uri) {
            return Some(slot.remove(index));
        }
        for child in slot.iter_mut() {
            if let Some(found) = take_nested(child, uri) {
                return Some(found);
            }
        }
    }
    None
}

/// Rewrite an ownership tree into a new namespace by structured IRI
/// decomposition: the path component of each identity is grafted onto the
/// target namespace, never substring-substituted.
fn rewrite_subtree(obj: &mut SBOLObject, target_namespace: &str, version: &str) -> SbolResult<()> {
    let new_identity = graft_namespace(obj.identity(), target_namespace)?;
    obj.set_identity(&new_identity);

    if obj.has_property(crate::constants::SBOL_PERSISTENT_IDENTITY) {
        if let Ok(persistent) =
            obj.get_property_value(crate::constants::SBOL_PERSISTENT_IDENTITY)
        {
            let new_persistent = graft_namespace(&persistent, target_namespace)?;
            obj.set_property_value(
                crate::constants::SBOL_PERSISTENT_IDENTITY,
                &new_persistent,
            )?;
            // Compliant identities re-gain the version as their last segment
            if !version.is_empty() && obj.has_property(SBOL_VERSION) {
                obj.set_identity(&format!("{}/{}", new_persistent, version));
                obj.set_property_value(SBOL_VERSION, version)?;
            }
        }
    }

    for slot in obj.owned_objects.values_mut() {
        for child in slot.iter_mut() {
            rewrite_subtree(child, target_namespace, version)?;
        }
    }
    Ok(())
}

fn graft_namespace(uri: &str, target_namespace: &str) -> SbolResult<String> {
    let iri = Iri::parse(uri)
        .map_err(|e| SbolError::InvalidArgument(format!("cannot rewrite {:?}: {}", uri, e)))?;
    let mut grafted = format!("{}{}", target_namespace.trim_end_matches('/'), iri.path());
    // Fragment- and query-addressed identities keep their local name
    if let Some(query) = iri.query() {
        grafted.push('?');
        grafted.push_str(query);
    }
    if let Some(fragment) = iri.fragment() {
        grafted.push('#');
        grafted.push_str(fragment);
    }
    Ok(grafted)
}
