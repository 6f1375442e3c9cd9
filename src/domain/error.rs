//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator.

use thiserror::Error;

/// Errors raised while validating a function descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The descriptor broke one or more validation rules. Every violation
    /// is collected before this is returned — never a partial report.
    #[error("invalid descriptor:\n  {}", .violations.join("\n  "))]
    Invalid { violations: Vec<String> },
}

impl DescriptorError {
    /// The individual rule violations, in descriptor field order.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::Invalid { violations } => violations,
        }
    }
}
