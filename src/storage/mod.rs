//! Storage-layer error classification.
//!
//! Callers branch on the [`ErrorCode`] of a [`StorageError`] while keeping the
//! underlying driver error around for logging.

use std::error::Error as StdError;
use std::fmt;

/// Boxed underlying cause of a storage failure.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Stable code identifying a class of storage failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A001
    UnknownSql,
    /// A011
    NoRecordFound,
    /// A012
    RecordExists,
}

impl ErrorCode {
    /// Wire form of the code, e.g. "A012".
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnknownSql => "A001",
            ErrorCode::NoRecordFound => "A011",
            ErrorCode::RecordExists => "A012",
        }
    }

    /// Human-readable description of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnknownSql => "unknown sql error returned",
            ErrorCode::NoRecordFound => "record does not exist",
            ErrorCode::RecordExists => "record already exists",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// StorageError wraps a storage failure with its classification.
///
/// Displays as `Code <A012>: record already exists`.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Any failure not classified below.
    #[error("Code <{}>: {}", ErrorCode::UnknownSql, ErrorCode::UnknownSql.description())]
    UnknownSql(#[source] BoxError),

    /// The queried record does not exist.
    #[error("Code <{}>: {}", ErrorCode::NoRecordFound, ErrorCode::NoRecordFound.description())]
    NoRecordFound(#[source] BoxError),

    /// A uniqueness constraint rejected the write.
    #[error("Code <{}>: {}", ErrorCode::RecordExists, ErrorCode::RecordExists.description())]
    RecordExists(#[source] BoxError),
}

impl StorageError {
    /// Wraps `cause` under `code`.
    pub fn new(code: ErrorCode, cause: impl Into<BoxError>) -> Self {
        let cause = cause.into();
        match code {
            ErrorCode::UnknownSql => StorageError::UnknownSql(cause),
            ErrorCode::NoRecordFound => StorageError::NoRecordFound(cause),
            ErrorCode::RecordExists => StorageError::RecordExists(cause),
        }
    }

    /// Classification of this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            StorageError::UnknownSql(_) => ErrorCode::UnknownSql,
            StorageError::NoRecordFound(_) => ErrorCode::NoRecordFound,
            StorageError::RecordExists(_) => ErrorCode::RecordExists,
        }
    }

    /// The original error, for diagnostics.
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        match self {
            StorageError::UnknownSql(cause)
            | StorageError::NoRecordFound(cause)
            | StorageError::RecordExists(cause) => cause.as_ref(),
        }
    }

    /// Unwraps the original error.
    pub fn into_cause(self) -> BoxError {
        match self {
            StorageError::UnknownSql(cause)
            | StorageError::NoRecordFound(cause)
            | StorageError::RecordExists(cause) => cause,
        }
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        let code = match &err {
            sqlx::Error::RowNotFound => ErrorCode::NoRecordFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => ErrorCode::RecordExists,
            _ => ErrorCode::UnknownSql,
        };
        StorageError::new(code, err)
    }
}

#[cfg(test)]
mod tests;
