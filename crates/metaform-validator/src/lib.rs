//! # metaform-validator — Metadata-Driven Record Validation
//!
//! Validates hierarchical data records against registered metadata
//! definitions. Callers resolve an element id through a
//! [`ValidatorFactory`] backed by a [`metaform_metadata::MetadataHolder`]
//! and run the returned [`ElementValidator`] over a data node; the outcome
//! is a [`ValidationReport`] listing every data finding at once.
//!
//! ## Key Design Principles
//!
//! 1. **Two error classes, never mixed.** A broken schema (unresolvable id,
//!    unvalidatable kind, cyclic inheritance) surfaces as a
//!    [`ValidatorError`]; a nonconforming record only ever adds messages to
//!    the report. Callers can always tell "fix the schema" from "fix the
//!    data".
//! 2. **Accumulate everything.** Validation never stops at the first
//!    finding. Independent checks contribute independently, so one pass
//!    over a record reports every problem in it.
//! 3. **Closed dispatch.** The factory matches exhaustively over the
//!    element kinds; a schema kind without a validator is a compile error,
//!    not a runtime surprise.

pub mod error;
pub mod factory;
pub mod report;

mod collection_variable;
mod group;
mod path_copier;
mod record_link;
mod record_relation;
mod resource_link;
mod text_variable;

#[cfg(test)]
mod testdata;

pub use collection_variable::DataCollectionVariableValidator;
pub use error::ValidatorError;
pub use factory::{ElementValidator, ValidatorFactory};
pub use group::DataGroupValidator;
pub use path_copier::copy_path;
pub use record_link::DataRecordLinkValidator;
pub use record_relation::DataRecordRelationValidator;
pub use report::ValidationReport;
pub use resource_link::{DataResourceLinkValidator, STREAM_ID_TEXT_VAR_ID};
pub use text_variable::DataTextVariableValidator;
