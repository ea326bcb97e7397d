//! # metaform-metadata — Schema Definitions and Registry
//!
//! The typed schema side of metaform. A record format is described by
//! metadata elements — groups, text variables, collection variables, links —
//! each addressable by a unique id. The [`MetadataHolder`] registry maps ids
//! to elements and is the single resolution point for every reference a
//! schema makes (child references, attribute references, collection item
//! references, parent ids).
//!
//! ## Key Design Principles
//!
//! 1. **One closed enum of element kinds.** [`MetadataElement`] has one
//!    variant per kind and every dispatch over it is an exhaustive `match`.
//!    Adding a kind forces every consumer to handle it at compile time.
//!
//! 2. **Elements are plain data.** No behavior lives here beyond accessors;
//!    validation semantics belong to `metaform-validator`.
//!
//! 3. **Build once, then freeze.** The registry is populated by a schema
//!    loader before any validation begins and is read-only afterwards; shared
//!    references (`&MetadataHolder`, `Arc<MetadataHolder>`) may then serve any
//!    number of concurrent validation calls.

pub mod child_reference;
pub mod element;
pub mod holder;

pub use child_reference::{MetadataChildReference, RepeatMax};
pub use element::{
    CollectionItem, CollectionVariable, CollectionVariableChild, ElementKind, ItemCollection,
    MetadataElement, MetadataGroup, MetadataGroupChild, RecordLink, RecordRelation, ResourceLink,
    TextVariable,
};
pub use holder::MetadataHolder;
