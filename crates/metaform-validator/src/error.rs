//! # Validator Errors — Schema-Integrity Failures
//!
//! Errors in this module signal a broken or incomplete schema, never bad
//! data. Data-shaped problems are collected as messages in a
//! [`crate::ValidationReport`] and are not represented here.

use metaform_metadata::ElementKind;
use thiserror::Error;

/// Fatal failure while resolving or dispatching schema elements.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// A referenced element id is not registered in the metadata holder.
    #[error("no metadata element is registered for id {id:?}")]
    MissingElement {
        /// The id that failed to resolve.
        id: String,
    },

    /// The element exists but its kind has no validator (collection items
    /// and item collections are only ever referenced, never validated
    /// directly).
    #[error("metadata element {id:?} of kind {kind} cannot be validated directly")]
    UnsupportedKind {
        /// Id of the element handed to the factory.
        id: String,
        /// The kind that has no validator.
        kind: ElementKind,
    },

    /// A reference resolved to an element of the wrong kind, e.g. an item
    /// collection id pointing at a text variable.
    #[error("metadata element {id:?} is a {found}, expected a {expected}")]
    UnexpectedKind {
        /// Id of the wrongly-referenced element.
        id: String,
        /// The kind the reference requires.
        expected: ElementKind,
        /// The kind actually registered under the id.
        found: ElementKind,
    },

    /// The parent chain of a collection variable loops back on itself.
    #[error("cycle detected in collection inheritance chain at element {id:?}")]
    InheritanceCycle {
        /// The first id encountered twice while walking the chain.
        id: String,
    },

    /// A text variable declares a pattern the regex engine rejects.
    #[error("text variable {id:?} has an invalid regular expression")]
    InvalidPattern {
        /// Id of the text variable.
        id: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// The caller handed a node of the wrong kind for the schema element,
    /// e.g. an atomic value where a group is required. A precondition
    /// failure of the caller, not a data finding.
    #[error("element {id:?} requires a data {expected}")]
    WrongDataKind {
        /// Id of the schema element being validated against.
        id: String,
        /// The node kind the element requires ("group" or "atomic").
        expected: &'static str,
    },
}
