//! Property-level validation rules
//!
//! Rules run inside typed property setters, before the value reaches the
//! store. Each rule sees the object being modified and the candidate value.

use super::SBOLObject;
use crate::error::{SbolError, SbolResult};
use crate::rdf::validate_iri;
use regex::Regex;
use std::sync::LazyLock;

/// A property validation hook: object under modification, candidate value
pub type ValidationRule = fn(&SBOLObject, &str) -> SbolResult<()>;

static DISPLAY_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("display id pattern"));

static MAVEN_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+)*(-[A-Za-z0-9]+(\.[A-Za-z0-9]+)*)?$").expect("version pattern")
});

/// The value must be a well-formed IRI
pub fn rule_identity_is_iri(_obj: &SBOLObject, value: &str) -> SbolResult<()> {
    validate_iri(value)
}

/// Display IDs are restricted to alphanumerics and underscore and must not
/// start with a digit, so they can serve as URI path segments.
pub fn rule_display_id(_obj: &SBOLObject, value: &str) -> SbolResult<()> {
    if DISPLAY_ID_RE.is_match(value) {
        Ok(())
    } else {
        Err(SbolError::InvalidArgument(format!(
            "display id {:?} may contain only alphanumerics and underscore and must not begin with a digit",
            value
        )))
    }
}

/// Versions follow Maven conventions: dot-separated numerals with an
/// optional alphanumeric qualifier.
pub fn rule_maven_version(_obj: &SBOLObject, value: &str) -> SbolResult<()> {
    if MAVEN_VERSION_RE.is_match(value) {
        Ok(())
    } else {
        Err(SbolError::InvalidArgument(format!(
            "version {:?} does not follow Maven versioning",
            value
        )))
    }
}
