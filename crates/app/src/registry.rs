//! Device registry — the fixed fleet, built once at startup.

use indexmap::IndexMap;

use homelink_domain::error::RegistryError;
use homelink_domain::id::DeviceId;

use crate::devices::Appliance;
use crate::ports::HardwareOutput;

/// Insertion-ordered mapping from device id to appliance.
///
/// Populated once at process start and read-only thereafter; device
/// membership is static configuration, not a runtime CRUD surface.
#[derive(Debug)]
pub struct DeviceRegistry<H> {
    devices: IndexMap<DeviceId, Appliance<H>>,
}

impl<H: HardwareOutput + Clone + Send + Sync + 'static> DeviceRegistry<H> {
    /// Build the registry from the fleet, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateDevice`] if two appliances share
    /// an id.
    pub fn new(fleet: impl IntoIterator<Item = Appliance<H>>) -> Result<Self, RegistryError> {
        let mut devices = IndexMap::new();
        for appliance in fleet {
            let id = appliance.id().clone();
            if devices.insert(id.clone(), appliance).is_some() {
                return Err(RegistryError::DuplicateDevice(id));
            }
        }
        Ok(Self { devices })
    }

    /// Look up a device by exact id match.
    #[must_use]
    pub fn get(&self, id: &DeviceId) -> Option<&Appliance<H>> {
        self.devices.get(id)
    }

    /// Iterate all devices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Appliance<H>> {
        self.devices.values()
    }

    /// Number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the registry holds no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::{Light, Oven, Switch};
    use crate::testing::RecordingHardware;
    use std::sync::Arc;

    fn fleet(hardware: &Arc<RecordingHardware>) -> Vec<Appliance<Arc<RecordingHardware>>> {
        vec![
            Switch::new("sw1", 0, Arc::clone(hardware)).into(),
            Switch::new("sw2", 1, Arc::clone(hardware)).into(),
            Oven::new("ov1").into(),
            Light::new("lh1", 0, Arc::clone(hardware)).into(),
        ]
    }

    #[test]
    fn should_preserve_insertion_order() {
        let hardware = Arc::new(RecordingHardware::default());
        let registry = DeviceRegistry::new(fleet(&hardware)).unwrap();

        let ids: Vec<_> = registry.iter().map(|d| d.id().to_string()).collect();
        assert_eq!(ids, vec!["sw1", "sw2", "ov1", "lh1"]);
    }

    #[test]
    fn should_find_device_by_exact_id() {
        let hardware = Arc::new(RecordingHardware::default());
        let registry = DeviceRegistry::new(fleet(&hardware)).unwrap();

        assert!(registry.get(&DeviceId::from("ov1")).is_some());
        assert!(registry.get(&DeviceId::from("ov2")).is_none());
        assert!(registry.get(&DeviceId::from("OV1")).is_none());
    }

    #[test]
    fn should_reject_duplicate_ids() {
        let hardware = Arc::new(RecordingHardware::default());
        let fleet: Vec<Appliance<Arc<RecordingHardware>>> = vec![
            Switch::new("sw1", 0, Arc::clone(&hardware)).into(),
            Switch::new("sw1", 1, Arc::clone(&hardware)).into(),
        ];

        let err = DeviceRegistry::new(fleet).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateDevice(id) if id.as_str() == "sw1"));
    }

    #[test]
    fn should_report_len_and_emptiness() {
        let hardware = Arc::new(RecordingHardware::default());
        let registry = DeviceRegistry::new(fleet(&hardware)).unwrap();
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());

        let empty: DeviceRegistry<Arc<RecordingHardware>> =
            DeviceRegistry::new(Vec::new()).unwrap();
        assert!(empty.is_empty());
    }
}
