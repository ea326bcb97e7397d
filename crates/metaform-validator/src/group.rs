//! # Group Validation
//!
//! The recursive heart of the engine. A data group is checked against its
//! [`MetadataGroup`] definition on four independent axes: the group's own
//! nameInData, its attributes, the occurrence bounds and repeat ids of every
//! declared child, and the absence of undeclared children. All axes run to
//! completion and accumulate findings; one finding never hides another.
//!
//! Child occurrences are validated recursively through the factory, so a
//! report for a deep tree carries the findings of every level.

use std::collections::BTreeSet;

use metaform_data::{DataAtomic, DataElement, DataGroup};
use metaform_metadata::{MetadataChildReference, MetadataGroup, MetadataHolder};

use crate::error::ValidatorError;
use crate::factory::ValidatorFactory;
use crate::report::ValidationReport;

/// Validates a data group against a [`MetadataGroup`] definition.
pub struct DataGroupValidator<'a> {
    holder: &'a MetadataHolder,
    group: &'a MetadataGroup,
}

impl<'a> DataGroupValidator<'a> {
    pub(crate) fn new(holder: &'a MetadataHolder, group: &'a MetadataGroup) -> Self {
        Self { holder, group }
    }

    pub(crate) fn validate(&self, data: &DataElement) -> Result<ValidationReport, ValidatorError> {
        let data_group = data
            .as_group()
            .ok_or_else(|| ValidatorError::WrongDataKind {
                id: self.group.id.clone(),
                expected: "group",
            })?;

        let mut report = ValidationReport::new();
        if data_group.name_in_data != self.group.name_in_data {
            report.add_error(format!(
                "DataGroup with nameInData:{} is NOT valid, should have nameInData:{}",
                data_group.name_in_data, self.group.name_in_data
            ));
        }
        self.validate_attributes(data_group, &mut report)?;
        self.validate_children(data_group, &mut report)?;
        Ok(report)
    }

    /// Every declared attribute must be present with a permitted value, and
    /// no undeclared attribute may appear.
    fn validate_attributes(
        &self,
        data_group: &DataGroup,
        report: &mut ValidationReport,
    ) -> Result<(), ValidatorError> {
        let factory = ValidatorFactory::new(self.holder);
        let mut declared = BTreeSet::new();

        for reference_id in &self.group.attribute_references {
            let element = self.holder.get_element(reference_id).ok_or_else(|| {
                ValidatorError::MissingElement {
                    id: reference_id.clone(),
                }
            })?;
            let name = element.name_in_data().to_string();
            declared.insert(name.clone());

            match data_group.attributes().get(&name) {
                None => report.add_error(format!(
                    "DataGroup with nameInData:{} is missing attribute:{name}",
                    data_group.name_in_data
                )),
                Some(value) => {
                    // Attribute values are validated as if they were atomic
                    // data for the referenced collection variable.
                    let validator = factory.factor(reference_id)?;
                    let atomic = DataElement::from(DataAtomic::new(name, value.clone()));
                    report.merge(validator.validate(&atomic)?);
                }
            }
        }

        for name in data_group.attributes().keys() {
            if !declared.contains(name) {
                report.add_error(format!(
                    "DataGroup with nameInData:{} has unknown attribute:{name}",
                    data_group.name_in_data
                ));
            }
        }
        Ok(())
    }

    /// Occurrence bounds, repeat id discipline, recursive validation of each
    /// occurrence, and rejection of children no reference declares.
    fn validate_children(
        &self,
        data_group: &DataGroup,
        report: &mut ValidationReport,
    ) -> Result<(), ValidatorError> {
        let factory = ValidatorFactory::new(self.holder);
        let mut declared = BTreeSet::new();

        for reference in &self.group.child_references {
            let element = self
                .holder
                .get_element(&reference.linked_element_id)
                .ok_or_else(|| ValidatorError::MissingElement {
                    id: reference.linked_element_id.clone(),
                })?;
            let name = element.name_in_data();
            declared.insert(name.to_string());

            let occurrences: Vec<&DataElement> = data_group
                .children()
                .iter()
                .filter(|child| child.name_in_data() == name)
                .collect();

            if occurrences.len() < reference.repeat_min {
                report.add_error(format!(
                    "Did not find enough data children with referenceId:{}",
                    reference.linked_element_id
                ));
            } else if !reference.repeat_max.allows(occurrences.len()) {
                report.add_error(format!(
                    "Found too many data children with referenceId:{}",
                    reference.linked_element_id
                ));
            }

            self.validate_repeat_ids(data_group, reference, name, &occurrences, report);

            let validator = factory.factor(&reference.linked_element_id)?;
            for occurrence in occurrences {
                match validator.validate(occurrence) {
                    Ok(child_report) => report.merge(child_report),
                    // A group where an atomic is declared (or the reverse)
                    // is a data finding at this level, not a caller bug.
                    Err(ValidatorError::WrongDataKind { .. }) => report.add_error(format!(
                        "Data child with nameInData:{name} has the wrong node kind"
                    )),
                    Err(error) => return Err(error),
                }
            }
        }

        for child in data_group.children() {
            if !declared.contains(child.name_in_data()) {
                report.add_error(format!(
                    "Data child with nameInData:{} is not specified in metadata",
                    child.name_in_data()
                ));
            }
        }
        Ok(())
    }

    /// Repeatable children carry pairwise distinct nonempty repeat ids;
    /// children that cannot repeat carry none.
    fn validate_repeat_ids(
        &self,
        data_group: &DataGroup,
        reference: &MetadataChildReference,
        name: &str,
        occurrences: &[&DataElement],
        report: &mut ValidationReport,
    ) {
        if reference.repeat_max.repeat_allowed() {
            let mut seen = BTreeSet::new();
            for occurrence in occurrences {
                match occurrence.repeat_id() {
                    Some(repeat_id) if !repeat_id.is_empty() => {
                        if !seen.insert(repeat_id) {
                            report.add_error(format!(
                                "Repeatable child {name} in group {} has duplicate repeatId:{repeat_id}",
                                data_group.name_in_data
                            ));
                        }
                    }
                    _ => report.add_error(format!(
                        "Repeatable child {name} in group {} must have a nonempty repeatId",
                        data_group.name_in_data
                    )),
                }
            }
        } else {
            for occurrence in occurrences {
                if occurrence.repeat_id().is_some() {
                    report.add_error(format!(
                        "Child {name} in group {} must not have a repeatId",
                        data_group.name_in_data
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata;
    use metaform_metadata::RepeatMax;

    fn factor_group(holder: &MetadataHolder) -> crate::factory::ElementValidator<'_> {
        ValidatorFactory::new(holder).factor("testGroupId").unwrap()
    }

    fn one_time_child_setup() -> MetadataHolder {
        let mut holder = MetadataHolder::new();
        let mut group = testdata::test_group();
        testdata::register_time_text_var(&mut holder, "text1");
        group.add_child_reference(MetadataChildReference::required_once("text1Id"));
        holder.add_element(group);
        holder
    }

    #[test]
    fn test_valid_group_with_one_child() {
        let holder = one_time_child_setup();
        let data = testdata::data_group_with_time_child("testGroupNameInData", "10:10");
        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert!(report.is_valid());
    }

    #[test]
    fn test_wrong_group_name_in_data() {
        let holder = one_time_child_setup();
        let data = testdata::data_group_with_time_child("NOT_testGroupNameInData", "10:10");
        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.error_messages()[0],
            "DataGroup with nameInData:NOT_testGroupNameInData is NOT valid, \
             should have nameInData:testGroupNameInData"
        );
    }

    #[test]
    fn test_invalid_child_value_bubbles_up() {
        let holder = one_time_child_setup();
        let data = testdata::data_group_with_time_child("testGroupNameInData", "26:99");
        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert_eq!(report.error_count(), 1);
        assert!(report.error_messages()[0].starts_with("TextVariable with nameInData:"));
    }

    #[test]
    fn test_wrong_child_name_counts_twice() {
        let holder = one_time_child_setup();
        let mut data = DataGroup::new("testGroupNameInData");
        data.add_child(DataAtomic::new("text1NameInDataNOT", "10:10"));

        // One finding for the missing declared child, one for the unknown
        // child that took its place.
        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn test_missing_child() {
        let holder = one_time_child_setup();
        let data = DataGroup::new("testGroupNameInData");
        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.error_messages()[0],
            "Did not find enough data children with referenceId:text1Id"
        );
    }

    #[test]
    fn test_too_many_children() {
        let holder = one_time_child_setup();
        let mut data = DataGroup::new("testGroupNameInData");
        data.add_child(DataAtomic::new("text1NameInData", "10:10"));
        data.add_child(DataAtomic::new("text1NameInData", "11:11"));

        let report = factor_group(&holder).validate(&data.into()).unwrap();
        // Too many occurrences, and both carry no repeat id while sharing a
        // name, which the bound of one makes irrelevant; only the bound
        // finding is reported.
        assert_eq!(
            report.error_messages()[0],
            "Found too many data children with referenceId:text1Id"
        );
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_valid_attribute() {
        let mut holder = MetadataHolder::new();
        let mut group = testdata::test_group();
        testdata::register_time_text_var(&mut holder, "text1");
        group.add_child_reference(MetadataChildReference::required_once("text1Id"));
        testdata::register_choice_attribute(&mut holder, &mut group);
        holder.add_element(group);

        let mut data = testdata::data_group_with_time_child("testGroupNameInData", "10:10");
        data.add_attribute("groupTypeVar", "choice1");
        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert!(report.is_valid());
    }

    #[test]
    fn test_invalid_attribute_value() {
        let mut holder = MetadataHolder::new();
        let mut group = testdata::test_group();
        testdata::register_time_text_var(&mut holder, "text1");
        group.add_child_reference(MetadataChildReference::required_once("text1Id"));
        testdata::register_choice_attribute(&mut holder, &mut group);
        holder.add_element(group);

        let mut data = testdata::data_group_with_time_child("testGroupNameInData", "10:10");
        data.add_attribute("groupTypeVar", "choice1ERROR");
        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_missing_attribute() {
        let mut holder = MetadataHolder::new();
        let mut group = testdata::test_group();
        testdata::register_time_text_var(&mut holder, "text1");
        group.add_child_reference(MetadataChildReference::required_once("text1Id"));
        testdata::register_choice_attribute(&mut holder, &mut group);
        holder.add_element(group);

        let data = testdata::data_group_with_time_child("testGroupNameInData", "10:10");
        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.error_messages()[0],
            "DataGroup with nameInData:testGroupNameInData is missing attribute:groupTypeVar"
        );
    }

    #[test]
    fn test_unknown_attribute() {
        let holder = one_time_child_setup();
        let mut data = testdata::data_group_with_time_child("testGroupNameInData", "10:10");
        data.add_attribute("groupTypeVar", "choice1");

        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.error_messages()[0],
            "DataGroup with nameInData:testGroupNameInData has unknown attribute:groupTypeVar"
        );
    }

    fn repeatable_child_setup() -> MetadataHolder {
        let mut holder = MetadataHolder::new();
        let mut group = testdata::test_group();
        testdata::register_time_text_var(&mut holder, "text1");
        group.add_child_reference(MetadataChildReference::new(
            "text1Id",
            1,
            RepeatMax::Bounded(3),
        ));
        holder.add_element(group);
        holder
    }

    #[test]
    fn test_repeatable_children_with_distinct_repeat_ids() {
        let holder = repeatable_child_setup();
        let mut data = DataGroup::new("testGroupNameInData");
        data.add_child(DataAtomic::with_repeat_id("text1NameInData", "10:10", "one"));
        data.add_child(DataAtomic::with_repeat_id("text1NameInData", "11:11", "two"));

        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert!(report.is_valid());
    }

    #[test]
    fn test_repeatable_child_missing_repeat_id() {
        let holder = repeatable_child_setup();
        let mut data = DataGroup::new("testGroupNameInData");
        data.add_child(DataAtomic::new("text1NameInData", "10:10"));

        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.error_messages()[0],
            "Repeatable child text1NameInData in group testGroupNameInData \
             must have a nonempty repeatId"
        );
    }

    #[test]
    fn test_repeatable_child_empty_repeat_id() {
        let holder = repeatable_child_setup();
        let mut data = DataGroup::new("testGroupNameInData");
        data.add_child(DataAtomic::with_repeat_id("text1NameInData", "10:10", ""));

        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_repeatable_child_duplicate_repeat_id() {
        let holder = repeatable_child_setup();
        let mut data = DataGroup::new("testGroupNameInData");
        data.add_child(DataAtomic::with_repeat_id("text1NameInData", "10:10", "one"));
        data.add_child(DataAtomic::with_repeat_id("text1NameInData", "11:11", "one"));

        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.error_messages()[0],
            "Repeatable child text1NameInData in group testGroupNameInData \
             has duplicate repeatId:one"
        );
    }

    #[test]
    fn test_repeat_id_where_not_expected() {
        let holder = one_time_child_setup();
        let mut data = DataGroup::new("testGroupNameInData");
        data.add_child(DataAtomic::with_repeat_id("text1NameInData", "10:10", "1"));

        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.error_messages()[0],
            "Child text1NameInData in group testGroupNameInData must not have a repeatId"
        );
    }

    #[test]
    fn test_nested_group_findings_bubble_up() {
        let mut holder = MetadataHolder::new();
        testdata::register_time_text_var(&mut holder, "text1");
        let mut child_group = MetadataGroup::new("childGroupId", "childGroupNameInData", "t", "dt");
        child_group.add_child_reference(MetadataChildReference::required_once("text1Id"));
        holder.add_element(child_group);
        let mut group = testdata::test_group();
        group.add_child_reference(MetadataChildReference::required_once("childGroupId"));
        holder.add_element(group);

        let mut inner = DataGroup::new("childGroupNameInData");
        inner.add_child(DataAtomic::new("text1NameInData", "99:99"));
        let mut data = DataGroup::new("testGroupNameInData");
        data.add_child(inner);

        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert_eq!(report.error_count(), 1);
        assert!(report.error_messages()[0].starts_with("TextVariable with nameInData:"));
    }

    #[test]
    fn test_atomic_where_group_declared_is_a_finding() {
        let mut holder = MetadataHolder::new();
        let child_group = MetadataGroup::new("childGroupId", "childGroupNameInData", "t", "dt");
        holder.add_element(child_group);
        let mut group = testdata::test_group();
        group.add_child_reference(MetadataChildReference::required_once("childGroupId"));
        holder.add_element(group);

        let mut data = DataGroup::new("testGroupNameInData");
        data.add_child(DataAtomic::new("childGroupNameInData", "not a group"));

        let report = factor_group(&holder).validate(&data.into()).unwrap();
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.error_messages()[0],
            "Data child with nameInData:childGroupNameInData has the wrong node kind"
        );
    }

    #[test]
    fn test_unresolved_child_reference_is_schema_error() {
        let mut holder = MetadataHolder::new();
        let mut group = testdata::test_group();
        group.add_child_reference(MetadataChildReference::required_once("missingId"));
        holder.add_element(group);

        let data = DataGroup::new("testGroupNameInData");
        assert!(matches!(
            factor_group(&holder).validate(&data.into()),
            Err(ValidatorError::MissingElement { .. })
        ));
    }

    #[test]
    fn test_atomic_top_level_data_is_precondition_failure() {
        let holder = one_time_child_setup();
        let data = DataElement::from(DataAtomic::new("testGroupNameInData", "x"));
        assert!(matches!(
            factor_group(&holder).validate(&data),
            Err(ValidatorError::WrongDataKind { expected: "group", .. })
        ));
    }
}
