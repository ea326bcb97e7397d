//! Record relation validation. Support is presence-only: the data group
//! must carry the declared name and contain a child for the referenced
//! record link and for the referenced data group.

use metaform_data::DataElement;
use metaform_metadata::{MetadataHolder, RecordRelation};

use crate::error::ValidatorError;
use crate::report::ValidationReport;

/// Validates relation data against a [`RecordRelation`] definition.
pub struct DataRecordRelationValidator<'a> {
    holder: &'a MetadataHolder,
    relation: &'a RecordRelation,
}

impl<'a> DataRecordRelationValidator<'a> {
    pub(crate) fn new(holder: &'a MetadataHolder, relation: &'a RecordRelation) -> Self {
        Self { holder, relation }
    }

    pub(crate) fn validate(&self, data: &DataElement) -> Result<ValidationReport, ValidatorError> {
        let group = data
            .as_group()
            .ok_or_else(|| ValidatorError::WrongDataKind {
                id: self.relation.id.clone(),
                expected: "group",
            })?;

        let mut report = ValidationReport::new();
        if group.name_in_data != self.relation.name_in_data {
            report.add_error(format!(
                "DataRecordRelation with nameInData:{} is NOT valid, should have nameInData:{}",
                group.name_in_data, self.relation.name_in_data
            ));
        }

        self.require_child(group, self.relation.ref_record_link_id.as_deref(), &mut report)?;
        self.require_child(
            group,
            self.relation.ref_metadata_group_id.as_deref(),
            &mut report,
        )?;
        Ok(report)
    }

    /// When a reference is declared, the data must contain a child carrying
    /// the referenced element's nameInData.
    fn require_child(
        &self,
        group: &metaform_data::DataGroup,
        reference: Option<&str>,
        report: &mut ValidationReport,
    ) -> Result<(), ValidatorError> {
        let Some(reference_id) = reference else {
            return Ok(());
        };
        let element = self.holder.get_element(reference_id).ok_or_else(|| {
            ValidatorError::MissingElement {
                id: reference_id.to_string(),
            }
        })?;
        if !group.contains_child_with_name_in_data(element.name_in_data()) {
            report.add_error(format!(
                "DataRecordRelation with nameInData:{} must have a {} as child",
                self.relation.name_in_data,
                element.name_in_data()
            ));
        }
        Ok(())
    }
}
