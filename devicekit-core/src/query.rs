//! Per-partition device listing.

use devicekit_ledger::LedgerTransaction;

use crate::device::{Device, DeviceState};
use crate::error::RegistryResult;
use crate::store::DeviceStore;

/// Lists every device currently in the given lifecycle partition.
///
/// Records come back in the store's key order, which is lexicographic by
/// identifier, not insertion order. A stored value that fails to decode
/// aborts the query with an error rather than being skipped.
///
/// # Errors
///
/// Returns an error if the scan cannot be opened, a ledger read fails, or
/// any stored record fails to decode.
pub fn devices_by_state<L: LedgerTransaction>(
    tx: &mut L,
    state: DeviceState,
) -> RegistryResult<Vec<Device>> {
    DeviceStore::new(tx).scan(state)
}

#[cfg(test)]
mod tests {
    use devicekit_ledger::{LedgerTransaction as _, MemoryLedger};

    use super::*;
    use crate::error::RegistryError;
    use crate::lifecycle::block;
    use crate::registrar::register;

    #[test]
    fn query_returns_only_the_requested_partition() {
        let ledger = MemoryLedger::new();
        let mut tx = ledger.begin().unwrap();
        register(&mut tx, "10.0.0.1", "S1", "Sensor").unwrap();
        register(&mut tx, "10.0.0.2", "S2", "Sensor").unwrap();
        block(&mut tx, "10.0.0.1").unwrap();

        let active = devices_by_state(&mut tx, DeviceState::Active).unwrap();
        assert_eq!(active.len(), 1);
        assert!(active.iter().all(|d| d.state == DeviceState::Active));
        assert_eq!(active[0].identifier, "10.0.0.2");

        let blocked = devices_by_state(&mut tx, DeviceState::Blocked).unwrap();
        assert_eq!(blocked.len(), 1);
        assert_eq!(blocked[0].identifier, "10.0.0.1");

        assert!(devices_by_state(&mut tx, DeviceState::Deleted).unwrap().is_empty());
    }

    #[test]
    fn query_orders_by_identifier() {
        let ledger = MemoryLedger::new();
        let mut tx = ledger.begin().unwrap();
        register(&mut tx, "192.168.0.2", "B", "Sensor").unwrap();
        register(&mut tx, "192.168.0.10", "C", "Sensor").unwrap();
        register(&mut tx, "192.168.0.1", "A", "Sensor").unwrap();

        let devices = devices_by_state(&mut tx, DeviceState::Active).unwrap();
        let ids: Vec<&str> = devices.iter().map(|d| d.identifier.as_str()).collect();
        // Lexicographic by identifier, not insertion order.
        assert_eq!(ids, vec!["192.168.0.1", "192.168.0.10", "192.168.0.2"]);
    }

    #[test]
    fn undecodable_record_fails_the_query() {
        let ledger = MemoryLedger::new();
        let mut tx = ledger.begin().unwrap();
        register(&mut tx, "10.0.0.1", "S1", "Sensor").unwrap();

        let key = crate::keys::device_key(DeviceState::Active, "10.0.0.2").unwrap();
        tx.put(&key, b"\xff\xfe").unwrap();

        let err = devices_by_state(&mut tx, DeviceState::Active).unwrap_err();
        assert!(matches!(err, RegistryError::Serialization { .. }));
    }
}
