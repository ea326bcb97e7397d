//! Text variable validation: the whole value must match the declared
//! regular expression.

use metaform_data::DataElement;
use metaform_metadata::TextVariable;
use regex::Regex;

use crate::error::ValidatorError;
use crate::report::ValidationReport;

/// Validates an atomic value against a [`TextVariable`] definition.
pub struct DataTextVariableValidator<'a> {
    text_variable: &'a TextVariable,
}

impl<'a> DataTextVariableValidator<'a> {
    pub(crate) fn new(text_variable: &'a TextVariable) -> Self {
        Self { text_variable }
    }

    pub(crate) fn validate(&self, data: &DataElement) -> Result<ValidationReport, ValidatorError> {
        let atomic = data
            .as_atomic()
            .ok_or_else(|| ValidatorError::WrongDataKind {
                id: self.text_variable.id.clone(),
                expected: "atomic",
            })?;

        // Anchor the pattern so a substring hit deep inside the value does
        // not count as a match.
        let pattern = &self.text_variable.regular_expression;
        let anchored =
            Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|source| {
                ValidatorError::InvalidPattern {
                    id: self.text_variable.id.clone(),
                    source,
                }
            })?;

        let mut report = ValidationReport::new();
        if !anchored.is_match(&atomic.value) {
            report.add_error(format!(
                "TextVariable with nameInData:{} is NOT valid, \
                 regular expression({}) does not match:{}",
                self.text_variable.name_in_data, pattern, atomic.value
            ));
        }
        Ok(report)
    }
}
