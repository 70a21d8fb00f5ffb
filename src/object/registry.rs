//! Process-wide type registry
//!
//! Maps RDF type URIs to factory functions so the parse driver can
//! instantiate the right class schema for each `rdf:type` statement it sees.
//! The built-in data model classes are seeded on first use; extension crates
//! register their own classes through [`register_extension`].

use super::SBOLObject;
use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

/// One registered class: its RDF type, a factory producing a
/// schema-initialized instance, and whether instances stand at document root.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub type_uri: String,
    pub factory: fn() -> SBOLObject,
    pub top_level: bool,
}

#[derive(Debug, Default)]
struct TypeRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl TypeRegistry {
    fn with_builtins() -> Self {
        let mut registry = Self::default();
        for entry in crate::model::builtin_entries() {
            registry.entries.insert(entry.type_uri.clone(), entry);
        }
        registry
    }
}

static REGISTRY: LazyLock<RwLock<TypeRegistry>> =
    LazyLock::new(|| RwLock::new(TypeRegistry::with_builtins()));

/// Look up the registered entry for an RDF type URI
pub fn lookup(type_uri: &str) -> Option<RegistryEntry> {
    let registry = REGISTRY.read().unwrap_or_else(|e| e.into_inner());
    registry.entries.get(type_uri).cloned()
}

/// Whether a type URI is registered as a top-level class
pub fn registered_top_level(type_uri: &str) -> bool {
    lookup(type_uri).map(|entry| entry.top_level).unwrap_or(false)
}

/// Register an extension class. A later registration for the same type URI
/// replaces the earlier one.
pub fn register_extension(type_uri: &str, factory: fn() -> SBOLObject, top_level: bool) {
    let mut registry = REGISTRY.write().unwrap_or_else(|e| e.into_inner());
    registry.entries.insert(
        type_uri.to_string(),
        RegistryEntry {
            type_uri: type_uri.to_string(),
            factory,
            top_level,
        },
    );
}
