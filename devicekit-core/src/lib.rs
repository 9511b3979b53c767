//! Device lifecycle registry over a transactional ledger.
//!
//! DeviceKit maintains a registry of identified devices whose membership
//! passes through a strict one-directional lifecycle:
//!
//! ```text
//! active --block--> blocked --delete--> deleted (terminal)
//! ```
//!
//! Each lifecycle state owns one partition of the keyspace, addressed via
//! composite keys (`device/<state>/<identifier>`). A device identifier is
//! unique across *all* partitions at once, and every state transition is a
//! "move": write the record under the destination partition, remove it from
//! the source, both inside the caller's single transaction. A deleted
//! device is never physically purged; `deleted` is a terminal partition.
//!
//! # Operations
//!
//! One public operation per transaction, each a stateless function over an
//! injected [`LedgerTransaction`] handle:
//!
//! * [`seed`] — first-time population with the fixed seed set
//! * [`register`] — create a device, enforcing global uniqueness
//! * [`devices_by_state`] — list one partition in identifier order
//! * [`block`] — move active → blocked
//! * [`delete_device`] — move blocked → deleted
//!
//! # Example
//!
//! ```
//! use devicekit_core::{block, register, devices_by_state, DeviceState};
//! use devicekit_ledger::MemoryLedger;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ledger = MemoryLedger::new();
//!
//! let mut tx = ledger.begin()?;
//! register(&mut tx, "10.0.0.1", "Sensor1", "Sensor")?;
//! tx.commit()?;
//!
//! let mut tx = ledger.begin()?;
//! let moved = block(&mut tx, "10.0.0.1")?;
//! assert_eq!(moved.state, DeviceState::Blocked);
//! tx.commit()?;
//!
//! let mut tx = ledger.begin()?;
//! assert!(devices_by_state(&mut tx, DeviceState::Active)?.is_empty());
//! # Ok(())
//! # }
//! ```

pub use devicekit_ledger::LedgerTransaction;

mod bootstrap;
mod device;
mod error;
mod keys;
mod lifecycle;
mod query;
mod registrar;
mod store;

pub use bootstrap::{seed, SEED_DEVICES};
pub use device::{Device, DeviceState};
pub use error::{RegistryError, RegistryResult};
pub use keys::device_key;
pub use lifecycle::{block, delete_device};
pub use query::devices_by_state;
pub use registrar::register;
pub use store::DeviceStore;
