//! Error handling for the mapper.

use std::fmt;

/// A single failed rule, recorded during runtime-typed application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    /// Name of the source field the rule reads
    pub field: String,
    /// The value type the destination setter expected
    pub expected: &'static str,
}

impl fmt::Display for RuleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field `{}` expects {}", self.field, self.expected)
    }
}

/// Specialized error type for mapper operations
///
/// The statically typed [`FieldMapper`](crate::FieldMapper) rejects mismatched
/// value types at registration, so it never produces these at execution time.
/// Only the runtime-typed path in [`dynamic`](crate::dynamic) can.
#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    /// A rule's source and destination value types cannot be reconciled
    #[error("incompatible types: field `{field}` cannot be written, destination expects {expected}")]
    IncompatibleTypes {
        /// Name of the source field the rule reads
        field: String,
        /// The value type the destination setter expected
        expected: &'static str,
    },

    /// Every rule failure collected over a single application
    #[error("{} mapping rule(s) failed: {}", .0.len(), format_failures(.0))]
    RuleFailures(Vec<RuleFailure>),
}

fn format_failures(failures: &[RuleFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for mapper operations
pub type Result<T> = std::result::Result<T, MapperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_failures_display() {
        let error = MapperError::RuleFailures(vec![
            RuleFailure {
                field: "id".to_string(),
                expected: "i64",
            },
            RuleFailure {
                field: "title".to_string(),
                expected: "alloc::string::String",
            },
        ]);

        let message = error.to_string();
        assert!(message.starts_with("2 mapping rule(s) failed"));
        assert!(message.contains("field `id` expects i64"));
        assert!(message.contains("field `title` expects alloc::string::String"));
    }
}
