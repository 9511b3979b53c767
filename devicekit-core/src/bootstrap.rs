//! First-time population of the registry.

use devicekit_ledger::LedgerTransaction;
use tracing::info;

use crate::device::{Device, DeviceState};
use crate::error::{RegistryError, RegistryResult};
use crate::store::DeviceStore;

/// The fixed initial device population: `(identifier, name, device_type)`.
pub const SEED_DEVICES: [(&str, &str, &str); 20] = [
    ("192.168.0.1", "TempSensor-A1", "Sensor"),
    ("192.168.0.2", "PressureSensor-B2", "Sensor"),
    ("192.168.0.3", "ValveController-C3", "Controller"),
    ("192.168.0.4", "FlowMeter-D4", "Meter"),
    ("192.168.0.5", "HumiditySensor-E5", "Sensor"),
    ("192.168.0.6", "GasDetector-F6", "Detector"),
    ("192.168.0.7", "VibrationSensor-G7", "Sensor"),
    ("192.168.0.8", "PumpController-H8", "Controller"),
    ("192.168.0.9", "Actuator-I9", "Actuator"),
    ("192.168.0.10", "Motor-J10", "Motor"),
    ("192.168.0.11", "PLC-K11", "Controller"),
    ("192.168.0.12", "Camera-L12", "Sensor"),
    ("192.168.0.13", "RFIDReader-M13", "Reader"),
    ("192.168.0.14", "ThermalSensor-N14", "Sensor"),
    ("192.168.0.15", "UltrasonicSensor-O15", "Sensor"),
    ("192.168.0.16", "RoboticArm-P16", "Actuator"),
    ("192.168.0.17", "ControlPanel-Q17", "Panel"),
    ("192.168.0.18", "Breaker-R18", "Switch"),
    ("192.168.0.19", "LaserSensor-S19", "Sensor"),
    ("192.168.0.20", "InfraredSensor-T20", "Sensor"),
];

/// Seeds the registry with [`SEED_DEVICES`], all in the `Active` state.
///
/// Intended for first-time initialization only. Re-seeding is refused: if
/// any seed identifier already exists in any lifecycle partition, nothing
/// is written and the call fails with a conflict naming it. This keeps
/// seeding under the same uniqueness rule the registrar enforces instead
/// of silently overwriting live records.
///
/// # Errors
///
/// * [`RegistryError::Conflict`] if any seed identifier is already present
///   in any partition.
/// * Ledger or serialization errors from the underlying store.
pub fn seed<L: LedgerTransaction>(tx: &mut L) -> RegistryResult<Vec<Device>> {
    let mut store = DeviceStore::new(tx);

    for (identifier, _, _) in SEED_DEVICES {
        for state in DeviceState::ALL {
            if store.exists(state, identifier)? {
                return Err(RegistryError::Conflict {
                    identifier: identifier.to_string(),
                    state,
                });
            }
        }
    }

    let mut devices = Vec::with_capacity(SEED_DEVICES.len());
    for (identifier, name, device_type) in SEED_DEVICES {
        let device = Device::new(identifier, name, device_type);
        store.put(&device)?;
        devices.push(device);
    }

    info!(count = devices.len(), "seeded initial device population");
    Ok(devices)
}
