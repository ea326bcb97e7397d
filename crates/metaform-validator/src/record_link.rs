//! Record link validation.
//!
//! Conforming link data is a group holding atomic children: a
//! `linkedRecordType` equal to the type the definition requires, a nonempty
//! `linkedRecordId`, and a `linkedRepeatId` exactly when the definition
//! carries a linked path. A `linkedPath` child never belongs in data; paths
//! live in metadata only.

use metaform_data::DataElement;
use metaform_metadata::RecordLink;

use crate::error::ValidatorError;
use crate::path_copier::LINKED_PATH;
use crate::report::ValidationReport;

pub(crate) const LINKED_RECORD_TYPE: &str = "linkedRecordType";
pub(crate) const LINKED_RECORD_ID: &str = "linkedRecordId";
pub(crate) const LINKED_REPEAT_ID: &str = "linkedRepeatId";

/// Validates link data against a [`RecordLink`] definition.
pub struct DataRecordLinkValidator<'a> {
    link: &'a RecordLink,
}

impl<'a> DataRecordLinkValidator<'a> {
    pub(crate) fn new(link: &'a RecordLink) -> Self {
        Self { link }
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
            report.add_error("DataRecordLink must have a nonempty nameInData");
        }
        let part = format!("DataRecordLink with nameInData:{}", group.name_in_data);

        let record_type = group.first_atomic_value(LINKED_RECORD_TYPE).ok();
        if record_type.map_or(true, str::is_empty) {
            report.add_error(format!("{part} must have a nonempty linkedRecordType as child"));
        }
        if let Some(found) = record_type {
            if found != self.link.linked_record_type {
                report.add_error(format!(
                    "{part} must have a linkedRecordType:{} as child",
                    self.link.linked_record_type
                ));
            }
        }

        let record_id = group.first_atomic_value(LINKED_RECORD_ID).ok();
        if record_id.map_or(true, str::is_empty) {
            report.add_error(format!("{part} must have a nonempty linkedRecordId as child"));
        }

        if group.contains_child_with_name_in_data(LINKED_PATH) {
            report.add_error(format!("{part} must not have a linkedPath as child"));
        }

        if self.link.linked_path.is_some() {
            let repeat_id = group.first_atomic_value(LINKED_REPEAT_ID).ok();
            if repeat_id.map_or(true, str::is_empty) {
                report.add_error(format!(
                    "{part} must have a nonempty linkedRepeatId as child"
                ));
            }
        } else if group.contains_child_with_name_in_data(LINKED_REPEAT_ID) {
            // Kind-agnostic on purpose: even a malformed group child under
            // this name is a linkedRepeatId the data must not carry.
            report.add_error(format!("{part} must not have a linkedRepeatId as child"));
        }

        Ok(report)
    }
}
