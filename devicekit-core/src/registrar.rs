//! Device registration with global uniqueness enforcement.

use devicekit_ledger::LedgerTransaction;
use tracing::debug;

use crate::device::{Device, DeviceState};
use crate::error::{RegistryError, RegistryResult};
use crate::store::DeviceStore;

/// Registers a new device in the `Active` partition.
///
/// The identifier must be unique across *all* lifecycle partitions, not
/// just the active one: a blocked or deleted device permanently reserves
/// its identifier. All three fields are required.
///
/// # Errors
///
/// * [`RegistryError::Validation`] if any field is empty.
/// * [`RegistryError::Conflict`] if the identifier already exists in any
///   partition, naming the partition it was found under.
/// * Ledger or serialization errors from the underlying store.
pub fn register<L: LedgerTransaction>(
    tx: &mut L,
    identifier: &str,
    name: &str,
    device_type: &str,
) -> RegistryResult<Device> {
    for (field, value) in [
        ("identifier", identifier),
        ("name", name),
        ("device_type", device_type),
    ] {
        if value.is_empty() {
            return Err(RegistryError::Validation { field });
        }
    }

    let mut store = DeviceStore::new(tx);

    // Global uniqueness: every partition must be checked, or a blocked or
    // deleted record could be shadowed by a fresh registration.
    for state in DeviceState::ALL {
        if store.exists(state, identifier)? {
            return Err(RegistryError::Conflict {
                identifier: identifier.to_string(),
                state,
            });
        }
    }

    let device = Device::new(identifier, name, device_type);
    store.put(&device)?;
    debug!(identifier, name, device_type, "registered device");
    Ok(device)
}
