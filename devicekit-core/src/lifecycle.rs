//! The transition engine: atomic moves between lifecycle partitions.
//!
//! The underlying store offers only independent put/delete, not an atomic
//! rename, so each transition is two operations inside the caller's single
//! transaction: write the record under the destination partition, remove it
//! from the source. All-or-nothing visibility comes from the transaction
//! boundary; no intermediate state where both or neither copy exists is
//! ever observable outside it.

use devicekit_ledger::LedgerTransaction;
use tracing::info;

use crate::device::{Device, DeviceState};
use crate::error::{RegistryError, RegistryResult};
use crate::store::DeviceStore;

/// Moves a device from `Active` to `Blocked`.
///
/// # Errors
///
/// * [`RegistryError::NotFound`] if the identifier has no record in the
///   active partition (including identifiers already blocked or deleted).
/// * Ledger or serialization errors from the underlying store.
pub fn block<L: LedgerTransaction>(tx: &mut L, identifier: &str) -> RegistryResult<Device> {
    transition(tx, identifier, DeviceState::Active, DeviceState::Blocked)
}

/// Moves a device from `Blocked` to `Deleted`, the terminal partition.
///
/// Only blocked devices can be deleted; there is no transition out of
/// `Deleted`, and the record is retained there rather than purged.
///
/// # Errors
///
/// * [`RegistryError::NotFound`] if the identifier has no record in the
///   blocked partition.
/// * Ledger or serialization errors from the underlying store.
pub fn delete_device<L: LedgerTransaction>(tx: &mut L, identifier: &str) -> RegistryResult<Device> {
    transition(tx, identifier, DeviceState::Blocked, DeviceState::Deleted)
}

fn transition<L: LedgerTransaction>(
    tx: &mut L,
    identifier: &str,
    from: DeviceState,
    to: DeviceState,
) -> RegistryResult<Device> {
    let mut store = DeviceStore::new(tx);

    let device = store
        .get(from, identifier)?
        .ok_or_else(|| RegistryError::NotFound {
            identifier: identifier.to_string(),
            required: from,
        })?;

    let moved = device.with_state(to);
    store.put(&moved)?;
    store.delete(from, identifier)?;

    info!(identifier, from = from.as_str(), to = to.as_str(), "device moved");
    Ok(moved)
}

#[cfg(test)]
mod tests {
    use devicekit_ledger::MemoryLedger;

    use super::*;
    use crate::registrar::register;

    #[test]
    fn block_moves_active_to_blocked() {
        let ledger = MemoryLedger::new();
        let mut tx = ledger.begin().unwrap();
        register(&mut tx, "10.0.0.1", "S1", "Sensor").unwrap();

        let moved = block(&mut tx, "10.0.0.1").unwrap();
        assert_eq!(moved.state, DeviceState::Blocked);

        let store = DeviceStore::new(&mut tx);
        assert!(!store.exists(DeviceState::Active, "10.0.0.1").unwrap());
        let stored = store.get(DeviceState::Blocked, "10.0.0.1").unwrap().unwrap();
        assert_eq!(stored.state, DeviceState::Blocked);
        assert_eq!(stored.name, "S1");
    }

    #[test]
    fn block_requires_active() {
        let ledger = MemoryLedger::new();
        let mut tx = ledger.begin().unwrap();

        let err = block(&mut tx, "10.0.0.9").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::NotFound {
                required: DeviceState::Active,
                ..
            }
        ));
    }

    #[test]
    fn delete_requires_blocked() {
        let ledger = MemoryLedger::new();
        let mut tx = ledger.begin().unwrap();
        register(&mut tx, "10.0.0.1", "S1", "Sensor").unwrap();

        // Active but not blocked: delete must refuse.
        let err = delete_device(&mut tx, "10.0.0.1").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::NotFound {
                required: DeviceState::Blocked,
                ..
            }
        ));
    }

    #[test]
    fn deleted_is_terminal() {
        let ledger = MemoryLedger::new();
        let mut tx = ledger.begin().unwrap();
        register(&mut tx, "10.0.0.1", "S1", "Sensor").unwrap();
        block(&mut tx, "10.0.0.1").unwrap();
        delete_device(&mut tx, "10.0.0.1").unwrap();

        assert!(matches!(
            block(&mut tx, "10.0.0.1").unwrap_err(),
            RegistryError::NotFound {
                required: DeviceState::Active,
                ..
            }
        ));
        assert!(matches!(
            delete_device(&mut tx, "10.0.0.1").unwrap_err(),
            RegistryError::NotFound {
                required: DeviceState::Blocked,
                ..
            }
        ));
    }

    #[test]
    fn corrupt_source_record_surfaces_decode_error() {
        use devicekit_ledger::LedgerTransaction as _;

        let ledger = MemoryLedger::new();
        let mut tx = ledger.begin().unwrap();

        let key = crate::keys::device_key(DeviceState::Active, "10.0.0.1").unwrap();
        tx.put(&key, b"{ not a device }").unwrap();

        let err = block(&mut tx, "10.0.0.1").unwrap_err();
        assert!(matches!(err, RegistryError::Serialization { .. }));

        // The corrupt record was not moved.
        let store = DeviceStore::new(&mut tx);
        assert!(!store.exists(DeviceState::Blocked, "10.0.0.1").unwrap());
    }
}
