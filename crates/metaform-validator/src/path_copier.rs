//! # Path Copier
//!
//! Produces an independent deep copy of a `linkedPath` description so that
//! converted metadata can carry its own path tree without sharing structure
//! with the source definition.
//!
//! A path group holds an atomic `nameInData` child, an optional atomic
//! `repeatId`, an optional `attributes` group whose `attribute` subgroups
//! hold atomic name and value parts, and an optional nested `linkedPath`
//! describing the next step.

use metaform_data::{DataAtomic, DataElement, DataGroup};

pub(crate) const LINKED_PATH: &str = "linkedPath";
const NAME_IN_DATA: &str = "nameInData";
const REPEAT_ID: &str = "repeatId";
const ATTRIBUTES: &str = "attributes";
const ATTRIBUTE: &str = "attribute";

/// Deep-copy a linked path description. `None` stays `None`; the copy shares
/// no structure with the source.
pub fn copy_path(path: Option<&DataGroup>) -> Option<DataGroup> {
    path.map(copy_step)
}

fn copy_step(source: &DataGroup) -> DataGroup {
    let mut copy = DataGroup::new(LINKED_PATH);
    if let Ok(name) = source.first_atomic_value(NAME_IN_DATA) {
        copy.add_child(DataAtomic::new(NAME_IN_DATA, name));
    }
    if let Ok(repeat_id) = source.first_atomic_value(REPEAT_ID) {
        copy.add_child(DataAtomic::new(REPEAT_ID, repeat_id));
    }
    if let Ok(attributes) = source.first_group(ATTRIBUTES) {
        copy.add_child(copy_attributes(attributes));
    }
    if let Ok(nested) = source.first_group(LINKED_PATH) {
        copy.add_child(copy_step(nested));
    }
    copy
}

fn copy_attributes(source: &DataGroup) -> DataGroup {
    let mut attributes = DataGroup::new(ATTRIBUTES);
    for attribute in source.children() {
        if let DataElement::Group(attribute_group) = attribute {
            let mut copy = DataGroup::new(ATTRIBUTE);
            for part in attribute_group.children() {
                if let DataElement::Atomic(atomic) = part {
                    copy.add_child(DataAtomic::new(&atomic.name_in_data, &atomic.value));
                }
            }
            attributes.add_child(copy);
        }
    }
    attributes
}
