//! Error types for ledger operations.

use thiserror::Error;

/// Error returned by ledger key construction and storage operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A key component is not representable in the composite key encoding.
    #[error("invalid key component {component:?}: {reason}")]
    InvalidKey {
        /// The offending component, as supplied by the caller.
        component: String,
        /// Why the component was rejected.
        reason: &'static str,
    },

    /// Commit-time conflict: another transaction committed first.
    #[error("transaction conflict: a concurrent transaction committed first")]
    Conflict,

    /// The underlying storage backend failed.
    #[error("storage backend failure: {message}")]
    Backend {
        /// Backend-provided description of the failure.
        message: String,
    },
}

impl LedgerError {
    /// Creates a backend failure error.
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LedgerError::InvalidKey {
            component: "act\u{0}ive".to_string(),
            reason: "contains the key delimiter",
        };
        assert!(format!("{err}").contains("invalid key component"));

        let err = LedgerError::Conflict;
        assert!(format!("{err}").contains("conflict"));

        let err = LedgerError::backend("disk on fire");
        assert!(format!("{err}").contains("disk on fire"));
    }
}
