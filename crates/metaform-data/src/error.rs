//! Error type for data-tree lookups.

use thiserror::Error;

/// Error raised by the first-child lookup accessors on [`crate::DataGroup`].
///
/// Lookup failures are programming or caller errors, not validation findings;
/// validators that need to report a missing child as a data problem check
/// with `contains_child_with_name_in_data` first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// No child with the requested name (and kind) exists in the group.
    #[error("requested child {name_in_data:?} does not exist")]
    MissingChild {
        /// The name that was looked up.
        name_in_data: String,
    },
}

impl DataError {
    pub(crate) fn missing(name_in_data: &str) -> Self {
        Self::MissingChild {
            name_in_data: name_in_data.to_string(),
        }
    }
}
