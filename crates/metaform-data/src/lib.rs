//! # metaform-data — Generic Hierarchical Record Format
//!
//! The self-describing tree that every metaform record is made of. A node is
//! either an atomic value (a name plus a string value) or a group (a name, a
//! set of named attributes, and an ordered list of child nodes). Both kinds
//! may carry a repeat id that distinguishes sibling occurrences sharing the
//! same name.
//!
//! ## Crate Policy
//!
//! - This is the leaf of the workspace DAG; it depends on nothing internal.
//! - Containers never enforce schema rules. Whether a repeated child is legal,
//!   whether an attribute is declared, whether a value matches its constraint
//!   — all of that is the validator's concern. The data crate only stores and
//!   looks up.
//! - All public types derive `Debug`, `Clone`, `PartialEq` and implement
//!   `Serialize`/`Deserialize` with camelCase wire names.

pub mod element;
pub mod error;

pub use element::{DataAtomic, DataElement, DataGroup};
pub use error::DataError;
