//! Child references: how a group declares its permitted children.

use serde::{Deserialize, Serialize};

/// Upper bound on occurrences of a declared child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RepeatMax {
    /// At most this many occurrences.
    Bounded(usize),
    /// Any number of occurrences.
    Unbounded,
}

impl RepeatMax {
    /// Whether `count` occurrences stay within the bound.
    pub fn allows(&self, count: usize) -> bool {
        match self {
            Self::Bounded(max) => count <= *max,
            Self::Unbounded => true,
        }
    }

    /// Whether more than one occurrence is permitted. Repeated occurrences
    /// must carry distinct repeat ids; single occurrences must carry none.
    pub fn repeat_allowed(&self) -> bool {
        match self {
            Self::Bounded(max) => *max > 1,
            Self::Unbounded => true,
        }
    }
}

/// A group's declaration that children of a given element id may or must
/// occur, with occurrence bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataChildReference {
    /// Id of the referenced metadata element.
    pub linked_element_id: String,
    /// Minimum number of occurrences.
    pub repeat_min: usize,
    /// Maximum number of occurrences.
    pub repeat_max: RepeatMax,
}

impl MetadataChildReference {
    /// Declare a child reference with the given occurrence bounds.
    pub fn new(
        linked_element_id: impl Into<String>,
        repeat_min: usize,
        repeat_max: RepeatMax,
    ) -> Self {
        Self {
            linked_element_id: linked_element_id.into(),
            repeat_min,
            repeat_max,
        }
    }

    /// Declare a child that must occur exactly once.
    pub fn required_once(linked_element_id: impl Into<String>) -> Self {
        Self::new(linked_element_id, 1, RepeatMax::Bounded(1))
    }

    /// Declare a child that must occur at least once with no upper bound.
    pub fn unlimited(linked_element_id: impl Into<String>) -> Self {
        Self::new(linked_element_id, 1, RepeatMax::Unbounded)
    }
}
