//! Key construction for the device keyspace.
//!
//! Every device record lives under `device/<state>/<identifier>`. The state
//! attribute comes first so that one lifecycle partition occupies one
//! contiguous, prefix-scannable key range, and so that keys for distinct
//! partitions can never collide regardless of identifier contents.

use devicekit_ledger::CompositeKey;

use crate::device::DeviceState;
use crate::error::RegistryResult;

/// Object type namespacing all device records in the shared store.
pub(crate) const DEVICE_NAMESPACE: &str = "device";

/// Builds the storage key for a device in the given lifecycle partition.
///
/// # Errors
///
/// Returns an error if the identifier cannot be encoded as a key component
/// (it contains `U+0000`).
pub fn device_key(state: DeviceState, identifier: &str) -> RegistryResult<CompositeKey> {
    Ok(CompositeKey::new(
        DEVICE_NAMESPACE,
        &[state.as_str(), identifier],
    )?)
}
