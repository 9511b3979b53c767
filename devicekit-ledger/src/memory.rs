//! In-memory reference ledger with snapshot isolation.
//!
//! Not durable and not a database: [`MemoryLedger`] exists so the registry
//! core can be exercised end to end without a real transactional store.
//! Its semantics deliberately mirror the contract the core requires from a
//! production backend:
//!
//! * reads see a snapshot taken when the transaction began;
//! * writes are buffered and published atomically on [`MemoryTransaction::commit`];
//! * a transaction dropped without committing changes nothing;
//! * two transactions that both write race at commit; the loser fails with
//!   [`LedgerError::Conflict`] (coarse optimistic concurrency control).

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{Arc, Mutex};

use crate::error::{LedgerError, LedgerResult};
use crate::key::CompositeKey;
use crate::transaction::{LedgerScan, LedgerTransaction};

/// Committed ledger contents plus a commit counter for conflict detection.
#[derive(Debug, Default)]
struct Shared {
    records: BTreeMap<String, Vec<u8>>,
    version: u64,
}

/// Shared in-memory ledger. Cheap to clone; clones refer to the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    shared: Arc<Mutex<Shared>>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a transaction over a snapshot of the current contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger lock is poisoned.
    pub fn begin(&self) -> LedgerResult<MemoryTransaction> {
        let shared = self.lock()?;
        Ok(MemoryTransaction {
            ledger: Arc::clone(&self.shared),
            view: shared.records.clone(),
            base_version: shared.version,
            dirty: false,
        })
    }

    /// Returns the number of committed records.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger lock is poisoned.
    pub fn len(&self) -> LedgerResult<usize> {
        Ok(self.lock()?.records.len())
    }

    /// Returns `true` if no records have been committed.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger lock is poisoned.
    pub fn is_empty(&self) -> LedgerResult<bool> {
        Ok(self.lock()?.records.is_empty())
    }

    fn lock(&self) -> LedgerResult<std::sync::MutexGuard<'_, Shared>> {
        self.shared
            .lock()
            .map_err(|e| LedgerError::backend(format!("ledger lock poisoned: {e}")))
    }
}

/// An in-progress transaction against a [`MemoryLedger`].
///
/// Reads (including scans) observe the begin-time snapshot overlaid with
/// this transaction's own writes. Nothing is visible to other transactions
/// until [`MemoryTransaction::commit`] succeeds.
#[derive(Debug)]
pub struct MemoryTransaction {
    ledger: Arc<Mutex<Shared>>,
    view: BTreeMap<String, Vec<u8>>,
    base_version: u64,
    dirty: bool,
}

impl MemoryTransaction {
    /// Atomically publishes this transaction's writes.
    ///
    /// A read-only transaction always commits. A writing transaction
    /// commits only if no other transaction committed since this one began.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Conflict`] if a concurrent transaction
    /// committed first, or a backend error if the ledger lock is poisoned.
    pub fn commit(self) -> LedgerResult<()> {
        if !self.dirty {
            return Ok(());
        }
        let mut shared = self
            .ledger
            .lock()
            .map_err(|e| LedgerError::backend(format!("ledger lock poisoned: {e}")))?;
        if shared.version != self.base_version {
            return Err(LedgerError::Conflict);
        }
        shared.records = self.view;
        shared.version += 1;
        Ok(())
    }
}

impl LedgerTransaction for MemoryTransaction {
    fn get(&self, key: &CompositeKey) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.view.get(key.as_str()).cloned())
    }

    fn put(&mut self, key: &CompositeKey, value: &[u8]) -> LedgerResult<()> {
        self.view.insert(key.as_str().to_string(), value.to_vec());
        self.dirty = true;
        Ok(())
    }

    fn delete(&mut self, key: &CompositeKey) -> LedgerResult<()> {
        self.view.remove(key.as_str());
        self.dirty = true;
        Ok(())
    }

    fn scan_prefix(&self, object_type: &str, attributes: &[&str]) -> LedgerResult<LedgerScan<'_>> {
        let prefix = CompositeKey::prefix(object_type, attributes)?;
        let range = self
            .view
            .range((Bound::Included(prefix.clone()), Bound::Unbounded));
        let iter = range
            .take_while(move |(key, _)| key.starts_with(&prefix))
            .map(|(key, value)| Ok((CompositeKey::from_encoded(key.clone()), value.clone())));
        Ok(LedgerScan::new(iter))
    }
}
