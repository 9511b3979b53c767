//! Transactional key-value ledger contract for DeviceKit.
//!
//! This crate defines the thin contract DeviceKit requires from whatever
//! transactional store it runs against:
//!
//! * [`CompositeKey`] — deterministic, boundary-preserving key construction
//!   from an object type plus an ordered tuple of attributes.
//! * [`LedgerTransaction`] — get/put/delete plus key-ordered prefix scans,
//!   all scoped to one externally managed transaction.
//! * [`LedgerScan`] — a scan cursor that yields records in key order and is
//!   released deterministically when dropped, on every exit path.
//!
//! The store itself (consensus, durability, conflict detection between
//! concurrent transactions) lives outside this crate. [`MemoryLedger`] is a
//! reference implementation with snapshot-at-begin reads, buffered writes
//! published atomically on commit, and coarse optimistic conflict detection.
//! It is intended for tests and embedders that need no durability.

mod error;
mod key;
pub mod memory;
mod transaction;

pub use error::{LedgerError, LedgerResult};
pub use key::CompositeKey;
pub use memory::{MemoryLedger, MemoryTransaction};
pub use transaction::{LedgerScan, LedgerTransaction, ScanItem};
