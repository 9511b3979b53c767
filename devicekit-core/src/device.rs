//! The device record and its lifecycle states.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{RegistryError, RegistryResult};

/// Lifecycle state of a registered device.
///
/// Each state names one partition of the keyspace. Transitions are
/// one-directional (`Active` → `Blocked` → `Deleted`) and `Deleted` is
/// terminal; there is deliberately no unblock and no resurrection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeviceState {
    /// Registered and in good standing.
    Active,
    /// Quarantined; no longer active but still tracked.
    Blocked,
    /// Terminal. The record is retained, never physically purged.
    Deleted,
}

impl DeviceState {
    /// All states, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Blocked, Self::Deleted];

    /// The partition name used in composite keys and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Blocked => "blocked",
            Self::Deleted => "deleted",
        }
    }
}

/// A registered device.
///
/// `name` and `device_type` are immutable after creation; only `state`
/// changes, and only via a partition move performed by the transition
/// engine. The `state` field always equals the partition the record is
/// stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Opaque unique token, unique across all lifecycle states at once.
    /// Historically an IP address; no IP semantics are enforced.
    pub identifier: String,
    /// Display name.
    pub name: String,
    /// Free-form classification, e.g. "Sensor" or "Controller".
    pub device_type: String,
    /// Current lifecycle state.
    pub state: DeviceState,
}

impl Device {
    /// Creates a freshly registered device in the `Active` state.
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        device_type: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            device_type: device_type.into(),
            state: DeviceState::Active,
        }
    }

    /// Returns a copy of this device placed in `state`.
    #[must_use]
    pub fn with_state(&self, state: DeviceState) -> Self {
        Self {
            state,
            ..self.clone()
        }
    }

    /// Encodes the record to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Serialization`] if encoding fails.
    pub fn encode(&self) -> RegistryResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|source| RegistryError::Serialization {
            context: format!("encoding device {}", self.identifier),
            source,
        })
    }

    /// Decodes a record from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Serialization`] if the bytes are not a
    /// valid device record.
    pub fn decode(bytes: &[u8]) -> RegistryResult<Self> {
        serde_json::from_slice(bytes).map_err(|source| RegistryError::Serialization {
            context: "decoding device record".to_string(),
            source,
        })
    }
}
