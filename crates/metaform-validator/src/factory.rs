//! # Validator Factory — Kind Dispatch
//!
//! Resolves an element id through the injected [`MetadataHolder`] and hands
//! back the validator for its kind. Dispatch is a closed exhaustive match
//! over [`metaform_metadata::MetadataElement`]; adding a kind without a
//! validator fails to compile.
//!
//! Factoring is lazy: validators for a group's children are created per
//! occurrence during validation, never eagerly for the whole schema, so a
//! group definition may reference itself without sending construction into
//! a loop.

use metaform_data::DataElement;
use metaform_metadata::{MetadataElement, MetadataHolder};

use crate::collection_variable::DataCollectionVariableValidator;
use crate::error::ValidatorError;
use crate::group::DataGroupValidator;
use crate::record_link::DataRecordLinkValidator;
use crate::record_relation::DataRecordRelationValidator;
use crate::report::ValidationReport;
use crate::resource_link::DataResourceLinkValidator;
use crate::text_variable::DataTextVariableValidator;

/// Creates validators for registered metadata elements.
///
/// Borrows the holder for its whole lifetime; every validator it hands out
/// borrows from the same holder.
pub struct ValidatorFactory<'a> {
    holder: &'a MetadataHolder,
}

impl<'a> ValidatorFactory<'a> {
    /// Create a factory resolving elements through the given holder.
    pub fn new(holder: &'a MetadataHolder) -> Self {
        Self { holder }
    }

    /// Resolve `element_id` and build the validator for its kind.
    ///
    /// Collection items and item collections carry no validator of their
    /// own; asking for one is a schema error.
    pub fn factor(&self, element_id: &str) -> Result<ElementValidator<'a>, ValidatorError> {
        let element =
            self.holder
                .get_element(element_id)
                .ok_or_else(|| ValidatorError::MissingElement {
                    id: element_id.to_string(),
                })?;
        tracing::debug!(element_id, kind = %element.kind(), "factoring validator");

        match element {
            MetadataElement::Group(group) => Ok(ElementValidator::Group(
                DataGroupValidator::new(self.holder, group),
            )),
            MetadataElement::GroupChild(child) => Ok(ElementValidator::Group(
                DataGroupValidator::new(self.holder, &child.group),
            )),
            MetadataElement::TextVariable(variable) => Ok(ElementValidator::TextVariable(
                DataTextVariableValidator::new(variable),
            )),
            MetadataElement::CollectionVariable(variable) => {
                Ok(ElementValidator::CollectionVariable(
                    DataCollectionVariableValidator::new(self.holder, variable),
                ))
            }
            MetadataElement::CollectionVariableChild(child) => {
                Ok(ElementValidator::CollectionVariable(
                    DataCollectionVariableValidator::new_child(self.holder, child),
                ))
            }
            MetadataElement::RecordLink(link) => Ok(ElementValidator::RecordLink(
                DataRecordLinkValidator::new(link),
            )),
            MetadataElement::ResourceLink(link) => Ok(ElementValidator::ResourceLink(
                DataResourceLinkValidator::new(self.holder, link),
            )),
            MetadataElement::RecordRelation(relation) => Ok(ElementValidator::RecordRelation(
                DataRecordRelationValidator::new(self.holder, relation),
            )),
            MetadataElement::CollectionItem(_) | MetadataElement::ItemCollection(_) => {
                Err(ValidatorError::UnsupportedKind {
                    id: element_id.to_string(),
                    kind: element.kind(),
                })
            }
        }
    }
}

/// A validator bound to one metadata element, ready to check data nodes.
pub enum ElementValidator<'a> {
    Group(DataGroupValidator<'a>),
    TextVariable(DataTextVariableValidator<'a>),
    CollectionVariable(DataCollectionVariableValidator<'a>),
    RecordLink(DataRecordLinkValidator<'a>),
    ResourceLink(DataResourceLinkValidator<'a>),
    RecordRelation(DataRecordRelationValidator<'a>),
}

impl ElementValidator<'_> {
    /// Validate one data node against the bound element.
    ///
    /// `Ok` carries every data finding; `Err` means the schema itself is
    /// broken or the node kind violates the element's precondition.
    pub fn validate(&self, data: &DataElement) -> Result<ValidationReport, ValidatorError> {
        let report = match self {
            Self::Group(validator) => validator.validate(data),
            Self::TextVariable(validator) => validator.validate(data),
            Self::CollectionVariable(validator) => validator.validate(data),
            Self::RecordLink(validator) => validator.validate(data),
            Self::ResourceLink(validator) => validator.validate(data),
            Self::RecordRelation(validator) => validator.validate(data),
        }?;
        tracing::debug!(
            valid = report.is_valid(),
            findings = report.error_count(),
            "validation finished"
        );
        Ok(report)
    }
}
