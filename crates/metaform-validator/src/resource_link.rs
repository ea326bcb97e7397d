//! Resource link validation: link data must carry a `streamId` child, which
//! is validated through the well-known `streamIdTextVar` text variable.

use metaform_data::DataElement;
use metaform_metadata::{ElementKind, MetadataElement, MetadataHolder, ResourceLink};

use crate::error::ValidatorError;
use crate::report::ValidationReport;
use crate::text_variable::DataTextVariableValidator;

pub(crate) const STREAM_ID: &str = "streamId";

/// Id of the text variable every schema registers for stream id values.
pub const STREAM_ID_TEXT_VAR_ID: &str = "streamIdTextVar";

/// Validates stream link data against a [`ResourceLink`] definition.
pub struct DataResourceLinkValidator<'a> {
    holder: &'a MetadataHolder,
    link: &'a ResourceLink,
}

impl<'a> DataResourceLinkValidator<'a> {
    pub(crate) fn new(holder: &'a MetadataHolder, link: &'a ResourceLink) -> Self {
        Self { holder, link }
    }

    pub(crate) fn validate(&self, data: &DataElement) -> Result<ValidationReport, ValidatorError> {
        let group = data
            .as_group()
            .ok_or_else(|| ValidatorError::WrongDataKind {
                id: self.link.id.clone(),
                expected: "group",
            })?;

        let mut report = ValidationReport::new();
        if group.name_in_data.is_empty() {
            report.add_error("DataResourceLink must have a nonempty nameInData");
        }

        match group.first_child(STREAM_ID) {
            Err(_) => {
                report.add_error(format!(
                    "DataResourceLink with nameInData:{} must have a streamId as child",
                    group.name_in_data
                ));
            }
            Ok(stream_id) => {
                let text_variable = match self.holder.get_element(STREAM_ID_TEXT_VAR_ID) {
                    Some(MetadataElement::TextVariable(text_variable)) => text_variable,
                    Some(other) => {
                        return Err(ValidatorError::UnexpectedKind {
                            id: STREAM_ID_TEXT_VAR_ID.to_string(),
                            expected: ElementKind::TextVariable,
                            found: other.kind(),
                        })
                    }
                    None => {
                        return Err(ValidatorError::MissingElement {
                            id: STREAM_ID_TEXT_VAR_ID.to_string(),
                        })
                    }
                };
                let validator = DataTextVariableValidator::new(text_variable);
                report.merge(validator.validate(stream_id)?);
            }
        }

        Ok(report)
    }
}
