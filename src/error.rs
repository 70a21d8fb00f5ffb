//! Error taxonomy for the SBOL data model
//!
//! All operations raise synchronously to the immediate caller; there is no
//! retry or silent swallowing anywhere in the core. `Document::write` is the
//! single exception to fail-fast behavior: validation findings are reported
//! in its return value, never as an error.

use thiserror::Error;

/// Errors raised by the SBOL object model and its serialization engine
#[derive(Error, Debug)]
pub enum SbolError {
    /// Object, property, or index absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness violation on create or add
    #[error("Duplicate URI: {0}")]
    DuplicateUri(String),

    /// Property accessed on a class that never declared it, or an object
    /// assigned where a different capability is expected
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// Operation requires SBOL-compliant URIs, which are disabled
    #[error("Compliance error: {0}")]
    Compliance(String),

    /// Malformed text during the serialize/parse round-trip
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Input file could not be opened
    #[error("File not found: {0}")]
    FileNotFound(#[from] std::io::Error),

    /// General precondition violation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type SbolResult<T> = Result<T, SbolError>;
