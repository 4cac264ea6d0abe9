//! Engine error taxonomy.
//!
//! Overview-path parse defects are absorbed locally (fields default to
//! zero), so only page classification, report-path extraction, and merger
//! preconditions surface here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No uploaded image contained the given page keyword.
    #[error("{0} page not found")]
    PageNotFound(String),

    /// A report-table label sat at the edge of the token list, leaving one
    /// of its side values with no token to read. Usually means a
    /// structurally different page was matched.
    #[error("no adjacent value token for label {label:?}")]
    MissingNeighbor { label: String },

    /// A report-table label's neighbor text did not parse as the expected
    /// numeric type.
    #[error("could not parse value {value:?} next to label {label:?}")]
    ValueParse { label: String, value: String },

    /// The overview merger was invoked with zero records; a caller defect,
    /// not a user-recoverable condition.
    #[error("no overview records to merge")]
    NoRecords,
}
