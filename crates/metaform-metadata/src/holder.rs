//! # Metadata Holder — the Element Registry
//!
//! Maps element ids to their definitions. A schema loader populates the
//! holder once; every validator resolution afterwards is a read. Adding an
//! element under an id that is already registered replaces the previous
//! definition.
//!
//! ## Concurrency Discipline
//!
//! All writes complete before the first concurrent read begins. Once frozen
//! behind `&MetadataHolder` or `Arc<MetadataHolder>`, any number of
//! validation calls may resolve elements in parallel without coordination;
//! nothing in this crate or in `metaform-validator` mutates a holder after
//! construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::element::MetadataElement;

/// Registry of all metadata elements of a schema, keyed by element id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataHolder {
    elements: HashMap<String, MetadataElement>,
}

impl MetadataHolder {
    /// Create an empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element under its own id, replacing any previous element
    /// registered under that id.
    pub fn add_element(&mut self, element: impl Into<MetadataElement>) {
        let element = element.into();
        self.elements.insert(element.id().to_string(), element);
    }

    /// Resolve an element by id.
    pub fn get_element(&self, element_id: &str) -> Option<&MetadataElement> {
        self.elements.get(element_id)
    }

    /// Whether an element is registered under the given id.
    pub fn contains_element(&self, element_id: &str) -> bool {
        self.elements.contains_key(element_id)
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the holder is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromIterator<MetadataElement> for MetadataHolder {
    fn from_iter<I: IntoIterator<Item = MetadataElement>>(iter: I) -> Self {
        let mut holder = Self::new();
        for element in iter {
            holder.add_element(element);
        }
        holder
    }
}
