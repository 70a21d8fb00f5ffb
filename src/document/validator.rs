//! Validator boundary for serialized output
//!
//! Validators see the serialized text, never the object graph, so an external
//! rule engine can plug in without linking against the data model. `write`
//! runs every registered validator exactly once and reports findings as
//! warnings; validation never blocks the write.

use tracing::warn;

/// Outcome of one validator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub messages: Vec<String>,
}

impl ValidationReport {
    /// A passing report with no findings
    pub fn ok() -> Self {
        Self {
            valid: true,
            messages: Vec::new(),
        }
    }

    /// A failing report with one finding
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            messages: vec![message.into()],
        }
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: ValidationReport) {
        self.valid &= other.valid;
        self.messages.extend(other.messages);
    }

    /// One-line human-readable outcome
    pub fn summary(&self) -> String {
        if self.valid {
            "valid".to_string()
        } else {
            self.messages.join("; ")
        }
    }
}

/// A check over serialized document text
pub trait DocumentValidator {
    fn name(&self) -> &str;
    fn validate(&self, serialized: &str) -> ValidationReport;
}

/// Built-in structural rules: serialized SBOL must declare the SBOL
/// namespace (rule 10101) and the RDF namespace (rule 10102).
pub struct NamespaceValidator;

impl DocumentValidator for NamespaceValidator {
    fn name(&self) -> &str {
        "namespace"
    }

    fn validate(&self, serialized: &str) -> ValidationReport {
        let mut report = ValidationReport::ok();
        if !serialized.contains(crate::constants::SBOL_URI) {
            report.merge(ValidationReport::fail(
                "sbol-10101: output does not declare the SBOL namespace",
            ));
        }
        if !serialized.contains(crate::constants::RDF_URI) {
            report.merge(ValidationReport::fail(
                "sbol-10102: output does not declare the RDF namespace",
            ));
        }
        report
    }
}

/// Run the built-in rules plus every registered validator, logging findings
pub(crate) fn run_validators(
    validators: &[Box<dyn DocumentValidator>],
    serialized: &str,
) -> ValidationReport {
    let mut report = NamespaceValidator.validate(serialized);
    for validator in validators {
        let result = validator.validate(serialized);
        if !result.valid {
            warn!(validator = validator.name(), findings = result.messages.len(),
                  "validation reported findings");
        }
        report.merge(result);
    }
    report
}
