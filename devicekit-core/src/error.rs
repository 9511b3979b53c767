//! Error taxonomy for registry operations.
//!
//! Every error aborts the current operation with no partial effect; the
//! enclosing transaction (owned by the caller) scopes all writes, and the
//! core performs no internal retries.

use devicekit_ledger::LedgerError;
use thiserror::Error;

use crate::device::DeviceState;

/// Error returned by registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A required field was empty.
    #[error("missing required field: {field}")]
    Validation {
        /// Name of the empty field.
        field: &'static str,
    },

    /// The identifier is already present in some lifecycle partition.
    #[error("device {identifier} already exists in {state} state")]
    Conflict {
        /// The colliding identifier.
        identifier: String,
        /// The partition it was found under.
        state: DeviceState,
    },

    /// The record is absent from the partition the operation requires.
    #[error("device {identifier} not found in {required} state")]
    NotFound {
        /// The identifier that was looked up.
        identifier: String,
        /// The required source partition.
        required: DeviceState,
    },

    /// A stored record failed to encode or decode. Never silently skipped.
    #[error("device record serialization failed while {context}: {source}")]
    Serialization {
        /// What was being encoded or decoded.
        context: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Key construction or the underlying store failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
