//! # Validation Report — Accumulated Data Findings
//!
//! A report collects every data problem found during a validation pass.
//! Validators never stop at the first finding; independent checks each
//! contribute their own messages and the caller reads them all at once.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered collection of validation error messages.
///
/// A report with no messages means the data conforms. Messages keep the
/// order in which the checks ran, so callers can present them stably.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    messages: Vec<String>,
}

impl ValidationReport {
    /// Create an empty (valid) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one error message.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Append all messages of another report, preserving their order.
    pub fn merge(&mut self, other: ValidationReport) {
        self.messages.extend(other.messages);
    }

    /// Whether the validated data conforms. True exactly when no error
    /// message has been added.
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    /// All error messages, in the order the checks produced them.
    pub fn error_messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of error messages.
    pub fn error_count(&self) -> usize {
        self.messages.len()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}
