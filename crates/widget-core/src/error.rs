//! # Validation Error Types
//!
//! Typed error handling for the checkout widget validators.
//! All validation entry points return `Result<T, ValidationError>`.
//!
//! A single input can violate several rules at once; every violated rule is
//! collected into one aggregate `ValidationError` rather than reported one at
//! a time, so the caller can surface the complete list to the integrator.

use serde::Serialize;
use thiserror::Error;

/// Classifies a single violated rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Structural or field-level constraint failure (missing field, wrong
    /// type, failed predicate, unrecognized enum value, unknown key)
    Schema,

    /// The notify principal failed the canonical decode/re-encode round trip
    IdentityFormat,
}

/// A single violated rule, annotated with the field path it applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Path of the offending field (e.g., `"domain"`, `"notify.principalId"`,
    /// `"[2].name"`). Empty when the violation applies to the whole input.
    pub path: String,

    /// Violation class
    pub kind: ViolationKind,

    /// Human-readable description of the broken rule
    pub message: String,
}

impl Violation {
    /// Create a schema violation at the given path
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::Schema,
            message: message.into(),
        }
    }

    /// Create an identity-format violation at the given path
    pub fn identity(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::IdentityFormat,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Aggregate validation failure carrying every violated rule for one input
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}", render(.violations))]
pub struct ValidationError {
    /// All violations found, in field order
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Create an error from a non-empty list of violations
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Paths of all violated fields, in report order
    pub fn paths(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.path.as_str()).collect()
    }

    /// True if any violation targets the given field path
    pub fn mentions(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }

    /// True if any violation is an identity-format failure
    pub fn has_identity_violation(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.kind == ViolationKind::IdentityFormat)
    }
}

fn render(violations: &[Violation]) -> String {
    let mut out = format!(
        "validation failed with {} violation{}",
        violations.len(),
        if violations.len() == 1 { "" } else { "s" }
    );
    for violation in violations {
        out.push_str("\n  - ");
        out.push_str(&violation.to_string());
    }
    out
}

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_violation() {
        let err = ValidationError::new(vec![
            Violation::schema("provider", "unrecognized provider"),
            Violation::identity("notify.principalId", "round trip failed"),
        ]);

        let rendered = err.to_string();
        assert!(rendered.contains("2 violations"));
        assert!(rendered.contains("provider: unrecognized provider"));
        assert!(rendered.contains("notify.principalId: round trip failed"));
    }

    #[test]
    fn test_singular_violation_count() {
        let err = ValidationError::new(vec![Violation::schema("domain", "bad")]);
        assert!(err.to_string().contains("1 violation\n"));
    }

    #[test]
    fn test_violation_serializes_for_marshalling() {
        let violation = Violation::identity("notify.principalId", "round trip failed");
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "path": "notify.principalId",
                "kind": "identity_format",
                "message": "round trip failed"
            })
        );
    }

    #[test]
    fn test_path_helpers() {
        let err = ValidationError::new(vec![
            Violation::schema("[0].name", "too short"),
            Violation::identity("notify.principalId", "round trip failed"),
        ]);

        assert_eq!(err.paths(), vec!["[0].name", "notify.principalId"]);
        assert!(err.mentions("[0].name"));
        assert!(!err.mentions("name"));
        assert!(err.has_identity_violation());
    }
}
