//! Shared schema and data fixtures for validator tests.

use metaform_data::{DataAtomic, DataGroup};
use metaform_metadata::{
    CollectionItem, CollectionVariable, ItemCollection, MetadataGroup, MetadataHolder,
    TextVariable,
};

/// Matches hh:mm clock values and the empty string.
pub(crate) const TIME_REGEX: &str = "((^(([0-1][0-9])|([2][0-3])):[0-5][0-9]$)|^$){1}";

pub(crate) fn test_group() -> MetadataGroup {
    MetadataGroup::new(
        "testGroupId",
        "testGroupNameInData",
        "testGroupText",
        "testGroupDefText",
    )
}

/// Register a clock-value text variable under `<prefix>Id` with
/// `<prefix>NameInData`.
pub(crate) fn register_time_text_var(holder: &mut MetadataHolder, prefix: &str) -> String {
    let id = format!("{prefix}Id");
    holder.add_element(TextVariable::new(
        &id,
        format!("{prefix}NameInData"),
        format!("{prefix}Text"),
        format!("{prefix}DefText"),
        TIME_REGEX,
    ));
    id
}

/// Register a `groupTypeVar` attribute on the group, drawing values from a
/// two-item collection of `choice1` and `choice2`.
pub(crate) fn register_choice_attribute(holder: &mut MetadataHolder, group: &mut MetadataGroup) {
    holder.add_element(CollectionItem::new("choice1Id", "choice1", "t", "dt"));
    holder.add_element(CollectionItem::new("choice2Id", "choice2", "t", "dt"));
    let mut collection = ItemCollection::new("choiceCollectionId", "choiceCollection", "t", "dt");
    collection.add_item_reference("choice1Id");
    collection.add_item_reference("choice2Id");
    holder.add_element(collection);
    holder.add_element(CollectionVariable::new(
        "groupTypeVarId",
        "groupTypeVar",
        "t",
        "dt",
        "choiceCollectionId",
    ));
    group.add_attribute_reference("groupTypeVarId");
}

/// A data group with a single `text1NameInData` atomic child.
pub(crate) fn data_group_with_time_child(name_in_data: &str, value: &str) -> DataGroup {
    let mut group = DataGroup::new(name_in_data);
    group.add_child(DataAtomic::new("text1NameInData", value));
    group
}
