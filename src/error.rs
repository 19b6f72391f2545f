//! Failure taxonomy for the ledger store. Every store operation either commits
//! a single statement or reports one of two kinds of failure; nothing is
//! retried at this layer.

use std::error::Error as StdError;

use rusqlite::ErrorCode;
use thiserror::Error;

/// Boxed cause for failures that do not originate from a SQL statement, such
/// as a missing home directory or an unwritable data folder.
pub type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached, or failed for a reason other than a
    /// rejected constraint.
    #[error("store unavailable: {context}")]
    StoreUnavailable {
        context: String,
        #[source]
        source: BoxedCause,
    },

    /// A foreign-key, not-null or check constraint rejected a write.
    #[error("constraint violation: {context}")]
    ConstraintViolation {
        context: String,
        #[source]
        source: rusqlite::Error,
    },
}

/// Coarse classification for callers that only branch on the failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    StoreUnavailable,
    ConstraintViolation,
}

impl StoreError {
    /// Sort a SQLite error into one of the two store failure kinds.
    pub fn from_sqlite(context: impl Into<String>, source: rusqlite::Error) -> Self {
        let context = context.into();
        if matches!(
            source.sqlite_error_code(),
            Some(ErrorCode::ConstraintViolation)
        ) {
            StoreError::ConstraintViolation { context, source }
        } else {
            StoreError::StoreUnavailable {
                context,
                source: Box::new(source),
            }
        }
    }

    /// Wrap a non-SQL failure hit while bringing the store up.
    pub fn unavailable(context: impl Into<String>, source: impl Into<BoxedCause>) -> Self {
        StoreError::StoreUnavailable {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::StoreUnavailable { .. } => StoreErrorKind::StoreUnavailable,
            StoreError::ConstraintViolation { .. } => StoreErrorKind::ConstraintViolation,
        }
    }
}

/// `anyhow::Context`-style adapter so query helpers can attach a message to a
/// raw `rusqlite` result in one call.
pub trait StoreResultExt<T> {
    fn store_context(self, context: &str) -> Result<T, StoreError>;
}

impl<T> StoreResultExt<T> for rusqlite::Result<T> {
    fn store_context(self, context: &str) -> Result<T, StoreError> {
        self.map_err(|err| StoreError::from_sqlite(context, err))
    }
}
