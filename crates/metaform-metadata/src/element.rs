//! # Metadata Elements
//!
//! One struct per schema-definition kind and the closed [`MetadataElement`]
//! enum that unifies them. Every element carries the four common fields: a
//! unique id, the nameInData that conforming data nodes must carry, and the
//! two text ids pointing at its human-readable label and definition.

use serde::{Deserialize, Serialize};
use std::fmt;

use metaform_data::DataGroup;

use crate::child_reference::MetadataChildReference;

/// An atomic variable constrained by a regular expression.
///
/// A conforming data value must fully match `regular_expression` (anchored
/// match, not substring search).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextVariable {
    pub id: String,
    pub name_in_data: String,
    pub text_id: String,
    pub def_text_id: String,
    /// Pattern the whole value string must match.
    pub regular_expression: String,
}

impl TextVariable {
    pub fn new(
        id: impl Into<String>,
        name_in_data: impl Into<String>,
        text_id: impl Into<String>,
        def_text_id: impl Into<String>,
        regular_expression: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name_in_data: name_in_data.into(),
            text_id: text_id.into(),
            def_text_id: def_text_id.into(),
            regular_expression: regular_expression.into(),
        }
    }
}

/// One allowed value of an item collection. The `name_in_data` is the value
/// a conforming data string must equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    pub id: String,
    pub name_in_data: String,
    pub text_id: String,
    pub def_text_id: String,
}

impl CollectionItem {
    pub fn new(
        id: impl Into<String>,
        name_in_data: impl Into<String>,
        text_id: impl Into<String>,
        def_text_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name_in_data: name_in_data.into(),
            text_id: text_id.into(),
            def_text_id: def_text_id.into(),
        }
    }
}

/// An ordered set of [`CollectionItem`] references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCollection {
    pub id: String,
    pub name_in_data: String,
    pub text_id: String,
    pub def_text_id: String,
    /// Ids of the member collection items, in declaration order.
    #[serde(default)]
    pub item_references: Vec<String>,
}

impl ItemCollection {
    pub fn new(
        id: impl Into<String>,
        name_in_data: impl Into<String>,
        text_id: impl Into<String>,
        def_text_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name_in_data: name_in_data.into(),
            text_id: text_id.into(),
            def_text_id: def_text_id.into(),
            item_references: Vec::new(),
        }
    }

    /// Append a reference to a collection item.
    pub fn add_item_reference(&mut self, item_id: impl Into<String>) {
        self.item_references.push(item_id.into());
    }
}

/// A variable whose permitted values are drawn from an item collection.
///
/// An optional parent collection variable widens the permitted set by
/// inheritance; an optional final value collapses it to a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionVariable {
    pub id: String,
    pub name_in_data: String,
    pub text_id: String,
    pub def_text_id: String,
    /// Id of the item collection the permitted values come from.
    pub item_collection_id: String,
    /// Id of a parent collection variable whose permitted values are
    /// inherited in addition to this variable's own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_parent_id: Option<String>,
    /// When set, the only permitted value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_value: Option<String>,
}

impl CollectionVariable {
    pub fn new(
        id: impl Into<String>,
        name_in_data: impl Into<String>,
        text_id: impl Into<String>,
        def_text_id: impl Into<String>,
        item_collection_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name_in_data: name_in_data.into(),
            text_id: text_id.into(),
            def_text_id: def_text_id.into(),
            item_collection_id: item_collection_id.into(),
            ref_parent_id: None,
            final_value: None,
        }
    }

    /// Declare a parent collection variable to inherit permitted values from.
    pub fn set_ref_parent_id(&mut self, ref_parent_id: impl Into<String>) {
        self.ref_parent_id = Some(ref_parent_id.into());
    }

    /// Collapse the permitted set to a single final value.
    pub fn set_final_value(&mut self, final_value: impl Into<String>) {
        self.final_value = Some(final_value.into());
    }
}

/// A collection variable scoped under a broader parent collection variable,
/// used when an attribute's permitted values are a subset inherited from a
/// wider definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionVariableChild {
    /// The variable's own definition.
    pub variable: CollectionVariable,
    /// Id of the parent collection variable this child is scoped under.
    pub ref_parent_id: String,
}

impl CollectionVariableChild {
    pub fn new(variable: CollectionVariable, ref_parent_id: impl Into<String>) -> Self {
        Self {
            variable,
            ref_parent_id: ref_parent_id.into(),
        }
    }
}

/// A link from one record into another record of a required type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordLink {
    pub id: String,
    pub name_in_data: String,
    pub text_id: String,
    pub def_text_id: String,
    /// Record type that conforming link data must point at.
    pub linked_record_type: String,
    /// Optional description of where inside the target record the link
    /// points, shaped as a nested `linkedPath` group. When present,
    /// conforming data must carry a `linkedRepeatId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_path: Option<DataGroup>,
}

impl RecordLink {
    pub fn new(
        id: impl Into<String>,
        name_in_data: impl Into<String>,
        text_id: impl Into<String>,
        def_text_id: impl Into<String>,
        linked_record_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name_in_data: name_in_data.into(),
            text_id: text_id.into(),
            def_text_id: def_text_id.into(),
            linked_record_type: linked_record_type.into(),
            linked_path: None,
        }
    }

    /// Attach a linked path description.
    pub fn set_linked_path(&mut self, linked_path: DataGroup) {
        self.linked_path = Some(linked_path);
    }
}

/// A link to a binary stream stored alongside a record. Conforming data
/// carries a `streamId` child validated as a text variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLink {
    pub id: String,
    pub name_in_data: String,
    pub text_id: String,
    pub def_text_id: String,
}

impl ResourceLink {
    pub fn new(
        id: impl Into<String>,
        name_in_data: impl Into<String>,
        text_id: impl Into<String>,
        def_text_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name_in_data: name_in_data.into(),
            text_id: text_id.into(),
            def_text_id: def_text_id.into(),
        }
    }
}

/// A relation between records: a record link plus a group holding the
/// relation's own data. Validation support is minimal (presence only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRelation {
    pub id: String,
    pub name_in_data: String,
    pub text_id: String,
    pub def_text_id: String,
    /// Id of the record link definition describing the related record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_record_link_id: Option<String>,
    /// Id of the group definition describing the relation's own data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_metadata_group_id: Option<String>,
}

impl RecordRelation {
    pub fn new(
        id: impl Into<String>,
        name_in_data: impl Into<String>,
        text_id: impl Into<String>,
        def_text_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name_in_data: name_in_data.into(),
            text_id: text_id.into(),
            def_text_id: def_text_id.into(),
            ref_record_link_id: None,
            ref_metadata_group_id: None,
        }
    }
}

/// A group definition: the children a conforming group may contain and the
/// attributes it must carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataGroup {
    pub id: String,
    pub name_in_data: String,
    pub text_id: String,
    pub def_text_id: String,
    /// Ids of collection variables that must appear as attributes.
    #[serde(default)]
    pub attribute_references: Vec<String>,
    /// Declared children, in declaration order.
    #[serde(default)]
    pub child_references: Vec<MetadataChildReference>,
}

impl MetadataGroup {
    pub fn new(
        id: impl Into<String>,
        name_in_data: impl Into<String>,
        text_id: impl Into<String>,
        def_text_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name_in_data: name_in_data.into(),
            text_id: text_id.into(),
            def_text_id: def_text_id.into(),
            attribute_references: Vec::new(),
            child_references: Vec::new(),
        }
    }

    /// Declare that conforming groups must carry an attribute whose values
    /// are drawn from the given collection variable.
    pub fn add_attribute_reference(&mut self, collection_variable_id: impl Into<String>) {
        self.attribute_references.push(collection_variable_id.into());
    }

    /// Declare a child reference.
    pub fn add_child_reference(&mut self, child_reference: MetadataChildReference) {
        self.child_references.push(child_reference);
    }
}

/// A group definition scoped under a broader parent group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataGroupChild {
    /// The group's own definition.
    pub group: MetadataGroup,
    /// Id of the parent group this child is scoped under.
    pub ref_parent_id: String,
}

impl MetadataGroupChild {
    pub fn new(group: MetadataGroup, ref_parent_id: impl Into<String>) -> Self {
        Self {
            group,
            ref_parent_id: ref_parent_id.into(),
        }
    }
}

/// Kind tag for a metadata element, used in error messages and dispatch
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    TextVariable,
    CollectionItem,
    ItemCollection,
    CollectionVariable,
    CollectionVariableChild,
    RecordLink,
    ResourceLink,
    RecordRelation,
    Group,
    GroupChild,
}

impl ElementKind {
    /// Stable camelCase identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextVariable => "textVariable",
            Self::CollectionItem => "collectionItem",
            Self::ItemCollection => "itemCollection",
            Self::CollectionVariable => "collectionVariable",
            Self::CollectionVariableChild => "collectionVariableChild",
            Self::RecordLink => "recordLink",
            Self::ResourceLink => "resourceLink",
            Self::RecordRelation => "recordRelation",
            Self::Group => "group",
            Self::GroupChild => "groupChild",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of a schema: any of the element kinds, addressable by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum MetadataElement {
    TextVariable(TextVariable),
    CollectionItem(CollectionItem),
    ItemCollection(ItemCollection),
    CollectionVariable(CollectionVariable),
    CollectionVariableChild(CollectionVariableChild),
    RecordLink(RecordLink),
    ResourceLink(ResourceLink),
    RecordRelation(RecordRelation),
    Group(MetadataGroup),
    GroupChild(MetadataGroupChild),
}

impl MetadataElement {
    /// The unique id this element is registered under.
    pub fn id(&self) -> &str {
        match self {
            Self::TextVariable(e) => &e.id,
            Self::CollectionItem(e) => &e.id,
            Self::ItemCollection(e) => &e.id,
            Self::CollectionVariable(e) => &e.id,
            Self::CollectionVariableChild(e) => &e.variable.id,
            Self::RecordLink(e) => &e.id,
            Self::ResourceLink(e) => &e.id,
            Self::RecordRelation(e) => &e.id,
            Self::Group(e) => &e.id,
            Self::GroupChild(e) => &e.group.id,
        }
    }

    /// The nameInData conforming data nodes must carry.
    pub fn name_in_data(&self) -> &str {
        match self {
            Self::TextVariable(e) => &e.name_in_data,
            Self::CollectionItem(e) => &e.name_in_data,
            Self::ItemCollection(e) => &e.name_in_data,
            Self::CollectionVariable(e) => &e.name_in_data,
            Self::CollectionVariableChild(e) => &e.variable.name_in_data,
            Self::RecordLink(e) => &e.name_in_data,
            Self::ResourceLink(e) => &e.name_in_data,
            Self::RecordRelation(e) => &e.name_in_data,
            Self::Group(e) => &e.name_in_data,
            Self::GroupChild(e) => &e.group.name_in_data,
        }
    }

    /// The kind tag of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::TextVariable(_) => ElementKind::TextVariable,
            Self::CollectionItem(_) => ElementKind::CollectionItem,
            Self::ItemCollection(_) => ElementKind::ItemCollection,
            Self::CollectionVariable(_) => ElementKind::CollectionVariable,
            Self::CollectionVariableChild(_) => ElementKind::CollectionVariableChild,
            Self::RecordLink(_) => ElementKind::RecordLink,
            Self::ResourceLink(_) => ElementKind::ResourceLink,
            Self::RecordRelation(_) => ElementKind::RecordRelation,
            Self::Group(_) => ElementKind::Group,
            Self::GroupChild(_) => ElementKind::GroupChild,
        }
    }
}

impl From<TextVariable> for MetadataElement {
    fn from(e: TextVariable) -> Self {
        Self::TextVariable(e)
    }
}

impl From<CollectionItem> for MetadataElement {
    fn from(e: CollectionItem) -> Self {
        Self::CollectionItem(e)
    }
}

impl From<ItemCollection> for MetadataElement {
    fn from(e: ItemCollection) -> Self {
        Self::ItemCollection(e)
    }
}

impl From<CollectionVariable> for MetadataElement {
    fn from(e: CollectionVariable) -> Self {
        Self::CollectionVariable(e)
    }
}

impl From<CollectionVariableChild> for MetadataElement {
    fn from(e: CollectionVariableChild) -> Self {
        Self::CollectionVariableChild(e)
    }
}

impl From<RecordLink> for MetadataElement {
    fn from(e: RecordLink) -> Self {
        Self::RecordLink(e)
    }
}

impl From<ResourceLink> for MetadataElement {
    fn from(e: ResourceLink) -> Self {
        Self::ResourceLink(e)
    }
}

impl From<RecordRelation> for MetadataElement {
    fn from(e: RecordRelation) -> Self {
        Self::RecordRelation(e)
    }
}

impl From<MetadataGroup> for MetadataElement {
    fn from(e: MetadataGroup) -> Self {
        Self::Group(e)
    }
}

impl From<MetadataGroupChild> for MetadataElement {
    fn from(e: MetadataGroupChild) -> Self {
        Self::GroupChild(e)
    }
}
