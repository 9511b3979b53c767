//! The transaction contract the registry core operates against.

use crate::error::LedgerResult;
use crate::key::CompositeKey;

/// One record yielded by a prefix scan: the full key and the stored bytes.
pub type ScanItem = (CompositeKey, Vec<u8>);

/// A key-ordered cursor over one prefix of the keyspace.
///
/// Items arrive in lexicographic key order. The underlying cursor is
/// released when the scan is dropped, so early returns partway through
/// iteration (a decode failure in the caller, say) never leak a live
/// cursor against the store.
pub struct LedgerScan<'a> {
    inner: Box<dyn Iterator<Item = LedgerResult<ScanItem>> + 'a>,
}

impl<'a> LedgerScan<'a> {
    /// Wraps a backend iterator into a scan cursor.
    pub fn new(inner: impl Iterator<Item = LedgerResult<ScanItem>> + 'a) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Iterator for LedgerScan<'_> {
    type Item = LedgerResult<ScanItem>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl std::fmt::Debug for LedgerScan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerScan").finish_non_exhaustive()
    }
}

/// Operations available inside one externally managed transaction.
///
/// Implementations must provide snapshot-consistent reads within the
/// transaction and all-or-nothing visibility of its writes. The registry
/// core never opens, commits, or retries transactions itself; it operates
/// on a handle injected by the caller, one logical operation per
/// transaction.
pub trait LedgerTransaction {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    fn get(&self, key: &CompositeKey) -> LedgerResult<Option<Vec<u8>>>;

    /// Writes `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    fn put(&mut self, key: &CompositeKey, value: &[u8]) -> LedgerResult<()>;

    /// Removes the value stored under `key`. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend delete fails.
    fn delete(&mut self, key: &CompositeKey) -> LedgerResult<()>;

    /// Opens a key-ordered cursor over every record whose key matches the
    /// given object type and leading attributes.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is not a valid key fragment or the
    /// backend cannot open a cursor.
    fn scan_prefix(&self, object_type: &str, attributes: &[&str]) -> LedgerResult<LedgerScan<'_>>;
}
