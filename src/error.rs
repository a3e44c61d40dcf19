//! Error types for the incentive dashboard.
//!
//! The aggregation engine itself is total and never fails. Errors only come
//! from configuration loading, entry validation and the entry stores.

use thiserror::Error;

/// The main error type for the incentive dashboard.
///
/// # Example
///
/// ```
/// use incentive_dashboard::error::DashboardError;
///
/// let error = DashboardError::EntryNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Entry not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An entry payload failed validation.
    #[error("Invalid entry field '{field}': {message}")]
    InvalidEntry {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No entry exists with the given id.
    #[error("Entry not found: {id}")]
    EntryNotFound {
        /// The id that was requested.
        id: i64,
    },

    /// The local store could not read or write its file.
    #[error("Store I/O error on '{path}': {message}")]
    StoreIo {
        /// The file the store was working with.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// Stored data could not be encoded or decoded.
    #[error("Store serialization error: {message}")]
    StoreSerialization {
        /// A description of the serialization failure.
        message: String,
    },

    /// The remote table store rejected or failed a request.
    #[error("Remote store error: {message}")]
    RemoteStore {
        /// A description of the remote failure.
        message: String,
    },
}

/// A type alias for Results that return DashboardError.
pub type DashboardResult<T> = Result<T, DashboardError>;

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::RemoteStore {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::StoreSerialization {
            message: err.to_string(),
        }
    }
}
