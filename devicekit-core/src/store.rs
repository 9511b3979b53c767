//! Transaction-scoped accessor over the device keyspace.

use devicekit_ledger::LedgerTransaction;

use crate::device::{Device, DeviceState};
use crate::error::RegistryResult;
use crate::keys::{device_key, DEVICE_NAMESPACE};

/// Thin record accessor bound to one ledger transaction.
///
/// Holds no state beyond the borrowed transaction handle; construct one per
/// operation and let it go out of scope with the transaction.
#[derive(Debug)]
pub struct DeviceStore<'a, L: LedgerTransaction> {
    tx: &'a mut L,
}

impl<'a, L: LedgerTransaction> DeviceStore<'a, L> {
    /// Binds an accessor to the caller's transaction.
    pub fn new(tx: &'a mut L) -> Self {
        Self { tx }
    }

    /// Returns `true` if a record exists for `identifier` in `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if key construction or the ledger read fails.
    pub fn exists(&self, state: DeviceState, identifier: &str) -> RegistryResult<bool> {
        let key = device_key(state, identifier)?;
        Ok(self.tx.get(&key)?.is_some())
    }

    /// Reads the record for `identifier` in `state`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger read fails or the stored bytes do not
    /// decode as a device record.
    pub fn get(&self, state: DeviceState, identifier: &str) -> RegistryResult<Option<Device>> {
        let key = device_key(state, identifier)?;
        self.tx.get(&key)?.map(|bytes| Device::decode(&bytes)).transpose()
    }

    /// Upserts `device` under the partition named by its `state` field,
    /// keeping the stored partition and the field in lockstep.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the ledger write fails.
    pub fn put(&mut self, device: &Device) -> RegistryResult<()> {
        let key = device_key(device.state, &device.identifier)?;
        let bytes = device.encode()?;
        self.tx.put(&key, &bytes)?;
        Ok(())
    }

    /// Removes the record for `identifier` from `state`. Tolerates absence;
    /// callers confirm presence first where the bookkeeping requires it.
    ///
    /// # Errors
    ///
    /// Returns an error if key construction or the ledger delete fails.
    pub fn delete(&mut self, state: DeviceState, identifier: &str) -> RegistryResult<()> {
        let key = device_key(state, identifier)?;
        self.tx.delete(&key)?;
        Ok(())
    }

    /// Reads every record in one lifecycle partition, in identifier
    /// (key) order.
    ///
    /// Any record that fails to decode aborts the scan with an error; the
    /// cursor is released by the early return.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan cannot be opened, a ledger read fails,
    /// or any stored value fails to decode.
    pub fn scan(&self, state: DeviceState) -> RegistryResult<Vec<Device>> {
        let mut devices = Vec::new();
        for item in self.tx.scan_prefix(DEVICE_NAMESPACE, &[state.as_str()])? {
            let (_, bytes) = item?;
            devices.push(Device::decode(&bytes)?);
        }
        Ok(devices)
    }
}
