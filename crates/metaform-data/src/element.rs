//! # Data Elements
//!
//! The two node kinds of the record tree, and the closed enum that unifies
//! them. Group children are stored in insertion order; attributes are stored
//! sorted by name so that iteration is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// An atomic leaf value: a name, a string value, and an optional repeat id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataAtomic {
    /// The logical field name this node carries.
    pub name_in_data: String,
    /// The value, always a string at the data level.
    pub value: String,
    /// Discriminator between sibling occurrences sharing the same name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_id: Option<String>,
}

impl DataAtomic {
    /// Create an atomic value without a repeat id.
    pub fn new(name_in_data: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name_in_data: name_in_data.into(),
            value: value.into(),
            repeat_id: None,
        }
    }

    /// Create an atomic value carrying a repeat id.
    pub fn with_repeat_id(
        name_in_data: impl Into<String>,
        value: impl Into<String>,
        repeat_id: impl Into<String>,
    ) -> Self {
        Self {
            name_in_data: name_in_data.into(),
            value: value.into(),
            repeat_id: Some(repeat_id.into()),
        }
    }

    /// Set or replace the repeat id.
    pub fn set_repeat_id(&mut self, repeat_id: impl Into<String>) {
        self.repeat_id = Some(repeat_id.into());
    }
}

/// A named group: attributes plus an ordered list of child nodes.
///
/// Children may repeat under the same name; the group itself places no
/// restriction on that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataGroup {
    /// The logical field name this node carries.
    pub name_in_data: String,
    /// Discriminator between sibling occurrences sharing the same name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_id: Option<String>,
    /// Named attribute-value pairs, sorted by attribute name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// Child nodes in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DataElement>,
}

impl DataGroup {
    /// Create an empty group.
    pub fn new(name_in_data: impl Into<String>) -> Self {
        Self {
            name_in_data: name_in_data.into(),
            repeat_id: None,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set or replace the repeat id.
    pub fn set_repeat_id(&mut self, repeat_id: impl Into<String>) {
        self.repeat_id = Some(repeat_id.into());
    }

    /// Add an attribute, replacing any previous value under the same name.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Append a child node.
    pub fn add_child(&mut self, child: impl Into<DataElement>) {
        self.children.push(child.into());
    }

    /// All children in insertion order.
    pub fn children(&self) -> &[DataElement] {
        &self.children
    }

    /// All attributes, sorted by name.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Whether any child (of either kind) carries the given name.
    pub fn contains_child_with_name_in_data(&self, name_in_data: &str) -> bool {
        self.children
            .iter()
            .any(|child| child.name_in_data() == name_in_data)
    }

    /// Value of the first atomic child with the given name.
    ///
    /// A group child with the same name does not satisfy the lookup.
    pub fn first_atomic_value(&self, name_in_data: &str) -> Result<&str, DataError> {
        self.children
            .iter()
            .find_map(|child| match child {
                DataElement::Atomic(atomic) if atomic.name_in_data == name_in_data => {
                    Some(atomic.value.as_str())
                }
                _ => None,
            })
            .ok_or_else(|| DataError::missing(name_in_data))
    }

    /// First group child with the given name.
    pub fn first_group(&self, name_in_data: &str) -> Result<&DataGroup, DataError> {
        self.children
            .iter()
            .find_map(|child| match child {
                DataElement::Group(group) if group.name_in_data == name_in_data => Some(group),
                _ => None,
            })
            .ok_or_else(|| DataError::missing(name_in_data))
    }

    /// First child of either kind with the given name.
    pub fn first_child(&self, name_in_data: &str) -> Result<&DataElement, DataError> {
        self.children
            .iter()
            .find(|child| child.name_in_data() == name_in_data)
            .ok_or_else(|| DataError::missing(name_in_data))
    }
}

/// A node of the record tree: atomic value or group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataElement {
    /// An atomic leaf value.
    Atomic(DataAtomic),
    /// A group of child nodes.
    Group(DataGroup),
}

impl DataElement {
    /// The logical field name this node carries.
    pub fn name_in_data(&self) -> &str {
        match self {
            Self::Atomic(atomic) => &atomic.name_in_data,
            Self::Group(group) => &group.name_in_data,
        }
    }

    /// The repeat id, when one is set.
    pub fn repeat_id(&self) -> Option<&str> {
        match self {
            Self::Atomic(atomic) => atomic.repeat_id.as_deref(),
            Self::Group(group) => group.repeat_id.as_deref(),
        }
    }

    /// Borrow the group payload, when this node is a group.
    pub fn as_group(&self) -> Option<&DataGroup> {
        match self {
            Self::Group(group) => Some(group),
            Self::Atomic(_) => None,
        }
    }

    /// Borrow the atomic payload, when this node is atomic.
    pub fn as_atomic(&self) -> Option<&DataAtomic> {
        match self {
            Self::Atomic(atomic) => Some(atomic),
            Self::Group(_) => None,
        }
    }
}

impl From<DataAtomic> for DataElement {
    fn from(atomic: DataAtomic) -> Self {
        Self::Atomic(atomic)
    }
}

impl From<DataGroup> for DataElement {
    fn from(group: DataGroup) -> Self {
        Self::Group(group)
    }
}
