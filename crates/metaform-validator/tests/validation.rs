//! End-to-end validation of a small schema: a group with a constrained
//! attribute, a clock-value text child, and a record link child.

use metaform_data::{DataAtomic, DataElement, DataGroup};
use metaform_metadata::{
    CollectionItem, CollectionVariable, ItemCollection, MetadataChildReference, MetadataGroup,
    MetadataHolder, RecordLink, RepeatMax,
};
use metaform_validator::{ValidationReport, ValidatorError, ValidatorFactory};

const TIME_REGEX: &str = "((^(([0-1][0-9])|([2][0-3])):[0-5][0-9]$)|^$){1}";

fn build_schema() -> MetadataHolder {
    let mut holder = MetadataHolder::new();

    holder.add_element(metaform_metadata::TextVariable::new(
        "startTimeId",
        "startTime",
        "startTimeText",
        "startTimeDefText",
        TIME_REGEX,
    ));

    holder.add_element(CollectionItem::new("choice1Id", "choice1", "t", "dt"));
    holder.add_element(CollectionItem::new("choice2Id", "choice2", "t", "dt"));
    let mut collection = ItemCollection::new("choiceCollectionId", "choiceCollection", "t", "dt");
    collection.add_item_reference("choice1Id");
    collection.add_item_reference("choice2Id");
    holder.add_element(collection);
    holder.add_element(CollectionVariable::new(
        "typeVarId",
        "type",
        "t",
        "dt",
        "choiceCollectionId",
    ));

    holder.add_element(RecordLink::new(
        "placeLinkId",
        "placeLink",
        "t",
        "dt",
        "place",
    ));

    let mut group = MetadataGroup::new("eventGroupId", "event", "eventText", "eventDefText");
    group.add_attribute_reference("typeVarId");
    group.add_child_reference(MetadataChildReference::new(
        "startTimeId",
        1,
        RepeatMax::Bounded(2),
    ));
    group.add_child_reference(MetadataChildReference::new(
        "placeLinkId",
        0,
        RepeatMax::Bounded(1),
    ));
    holder.add_element(group);
    holder
}

fn validate(holder: &MetadataHolder, data: DataGroup) -> Result<ValidationReport, ValidatorError> {
    ValidatorFactory::new(holder)
        .factor("eventGroupId")
        .and_then(|validator| validator.validate(&DataElement::from(data)))
}

fn conforming_event() -> DataGroup {
    let mut event = DataGroup::new("event");
    event.add_attribute("type", "choice1");
    event.add_child(DataAtomic::with_repeat_id("startTime", "10:30", "0"));
    let mut link = DataGroup::new("placeLink");
    link.add_child(DataAtomic::new("linkedRecordType", "place"));
    link.add_child(DataAtomic::new("linkedRecordId", "place:0001"));
    event.add_child(link);
    event
}

#[test]
fn conforming_record_is_valid() {
    let holder = build_schema();
    let report = validate(&holder, conforming_event()).unwrap();
    assert!(report.is_valid(), "unexpected findings: {report}");
}

#[test]
fn link_child_is_optional() {
    let holder = build_schema();
    let mut event = DataGroup::new("event");
    event.add_attribute("type", "choice2");
    event.add_child(DataAtomic::with_repeat_id("startTime", "23:59", "0"));
    assert!(validate(&holder, event).unwrap().is_valid());
}

#[test]
fn all_findings_accumulate_in_one_pass() {
    let holder = build_schema();
    let mut event = DataGroup::new("event");
    event.add_attribute("type", "choice3");
    event.add_child(DataAtomic::with_repeat_id("startTime", "25:99", "0"));
    event.add_child(DataAtomic::new("endTime", "11:00"));

    let report = validate(&holder, event).unwrap();
    let messages = report.error_messages();
    assert_eq!(messages.len(), 3);
    // Attribute findings come before child findings, unknown children last.
    assert!(messages[0].contains("not a valid value for collectionVariable"));
    assert!(messages[1].starts_with("TextVariable with nameInData:startTime"));
    assert_eq!(
        messages[2],
        "Data child with nameInData:endTime is not specified in metadata"
    );
}

#[test]
fn repeated_times_need_distinct_repeat_ids() {
    let holder = build_schema();
    let mut event = DataGroup::new("event");
    event.add_attribute("type", "choice1");
    event.add_child(DataAtomic::with_repeat_id("startTime", "08:00", "0"));
    event.add_child(DataAtomic::with_repeat_id("startTime", "09:00", "0"));

    let report = validate(&holder, event).unwrap();
    assert_eq!(report.error_count(), 1);
    assert!(report.error_messages()[0].contains("duplicate repeatId:0"));
}

#[test]
fn link_findings_carry_through_the_group() {
    let holder = build_schema();
    let mut event = DataGroup::new("event");
    event.add_attribute("type", "choice1");
    event.add_child(DataAtomic::with_repeat_id("startTime", "10:30", "0"));
    let mut link = DataGroup::new("placeLink");
    link.add_child(DataAtomic::new("linkedRecordType", "person"));
    link.add_child(DataAtomic::new("linkedRecordId", "place:0001"));
    event.add_child(link);

    let report = validate(&holder, event).unwrap();
    assert_eq!(report.error_count(), 1);
    assert_eq!(
        report.error_messages()[0],
        "DataRecordLink with nameInData:placeLink must have a linkedRecordType:place as child"
    );
}

#[test]
fn schema_gap_is_an_error_not_a_finding() {
    let mut holder = build_schema();
    let mut group = MetadataGroup::new("brokenGroupId", "broken", "t", "dt");
    group.add_child_reference(MetadataChildReference::required_once("neverRegisteredId"));
    holder.add_element(group);

    let result = ValidatorFactory::new(&holder)
        .factor("brokenGroupId")
        .and_then(|validator| validator.validate(&DataElement::from(DataGroup::new("broken"))));
    assert!(matches!(
        result,
        Err(ValidatorError::MissingElement { ref id }) if id == "neverRegisteredId"
    ));
}
