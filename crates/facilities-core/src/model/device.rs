// ── Device domain types ──

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::node_id::NodeId;

/// Bucket name for devices without a usable `deviceType`.
pub const UNKNOWN_DEVICE_TYPE: &str = "Unknown";

/// A leaf entity inside a `devices` collection.
///
/// Identity comes from `id` or `serialNumber`. Telemetry (temperature,
/// humidity, battery, valve opening, ...) is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,

    /// Raw `isOnline`. Any JSON value is accepted; only the online predicates
    /// interpret it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_online: Option<Value>,

    #[serde(flatten)]
    pub telemetry: Map<String, Value>,
}

impl Device {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn of_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }

    pub fn online(mut self, is_online: bool) -> Self {
        self.is_online = Some(Value::Bool(is_online));
        self
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    pub fn with_telemetry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.telemetry.insert(key.into(), value.into());
        self
    }

    /// Stable key for selection: `id`, else `serialNumber`, else `device-{name}`.
    pub fn key(&self) -> String {
        if let Some(id) = self.id.as_ref().filter(|id| !id.is_blank()) {
            return id.to_string();
        }
        if let Some(serial) = self.serial_number.as_deref().filter(|s| !s.is_empty()) {
            return serial.to_owned();
        }
        format!("device-{}", self.name.as_deref().unwrap_or_default())
    }

    /// Grouping bucket: `deviceType`, or [`UNKNOWN_DEVICE_TYPE`] when missing or empty.
    pub fn type_label(&self) -> &str {
        self.device_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(UNKNOWN_DEVICE_TYPE)
    }

    /// Online status as shown in the devices table: anything but an explicit
    /// `false` counts as online.
    pub fn is_considered_online_for_display(&self) -> bool {
        !matches!(self.is_online, Some(Value::Bool(false)))
    }

    /// Online status as counted on building cards: only the boolean `true`
    /// counts, not `"true"` or `1`.
    pub fn is_considered_online_for_counting(&self) -> bool {
        matches!(self.is_online, Some(Value::Bool(true)))
    }

    /// Raw telemetry field.
    pub fn telemetry_value(&self, key: &str) -> Option<&Value> {
        self.telemetry.get(key).filter(|v| !v.is_null())
    }

    /// LoRaWAN DevEUI, falling back to the serial number.
    pub fn dev_eui(&self) -> Option<&str> {
        self.telemetry
            .get("devEUI")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .or_else(|| self.serial_number.as_deref().filter(|s| !s.is_empty()))
    }
}

impl AsRef<Device> for Device {
    fn as_ref(&self) -> &Device {
        self
    }
}

/// A device annotated with where it sits in the hierarchy.
///
/// Serializes as the device's own fields plus `buildingId`, `buildingName`,
/// and `locationPath`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatedDevice {
    #[serde(flatten)]
    pub device: Device,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_id: Option<NodeId>,

    pub building_name: String,

    /// Ancestor names joined with [`LOCATION_SEPARATOR`].
    pub location_path: String,
}

/// Separator between names in a location path.
pub const LOCATION_SEPARATOR: &str = " > ";

impl LocatedDevice {
    pub fn key(&self) -> String {
        self.device.key()
    }

    pub fn type_label(&self) -> &str {
        self.device.type_label()
    }
}

impl AsRef<Device> for LocatedDevice {
    fn as_ref(&self) -> &Device {
        &self.device
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_camel_case_and_keeps_telemetry() {
        let device: Device = serde_json::from_value(json!({
            "id": "d1",
            "serialNumber": "SN-1",
            "name": "Vicki",
            "deviceType": "Thermostat",
            "isOnline": false,
            "temperature": 21.5,
            "openWindow": true,
        }))
        .unwrap();

        assert_eq!(device.serial_number.as_deref(), Some("SN-1"));
        assert_eq!(device.is_online, Some(json!(false)));
        assert_eq!(device.telemetry_value("temperature"), Some(&json!(21.5)));
        assert_eq!(device.telemetry_value("openWindow"), Some(&json!(true)));
        assert_eq!(device.telemetry_value("humidity"), None);
    }

    #[test]
    fn online_predicates_diverge_on_unspecified() {
        let unspecified = Device::new("d1");
        assert!(unspecified.is_considered_online_for_display());
        assert!(!unspecified.is_considered_online_for_counting());

        let online = Device::new("d2").online(true);
        assert!(online.is_considered_online_for_display());
        assert!(online.is_considered_online_for_counting());

        let offline = Device::new("d3").online(false);
        assert!(!offline.is_considered_online_for_display());
        assert!(!offline.is_considered_online_for_counting());
    }

    #[test]
    fn non_boolean_online_loads_and_only_displays_online() {
        for raw in [json!("true"), json!(1), json!("false"), json!(0)] {
            let device: Device =
                serde_json::from_value(json!({ "id": "d1", "isOnline": raw.clone() })).unwrap();
            assert_eq!(device.is_online.as_ref(), Some(&raw));
            assert!(device.is_considered_online_for_display(), "{raw} displays online");
            assert!(!device.is_considered_online_for_counting(), "{raw} is not counted");
        }

        let null: Device = serde_json::from_value(json!({ "id": "d1", "isOnline": null })).unwrap();
        assert!(null.is_considered_online_for_display());
        assert!(!null.is_considered_online_for_counting());
    }

    #[test]
    fn key_prefers_id_then_serial_then_name() {
        assert_eq!(Device::new("d1").with_serial("SN").key(), "d1");
        assert_eq!(Device::new("").with_serial("SN").key(), "SN");
        assert_eq!(Device::default().named("Valve").key(), "device-Valve");
        assert_eq!(Device::new(17_i64).key(), "17");
    }

    #[test]
    fn type_label_defaults_to_unknown() {
        assert_eq!(Device::new("d1").type_label(), "Unknown");
        assert_eq!(Device::new("d1").of_type("").type_label(), "Unknown");
        assert_eq!(Device::new("d1").of_type("Valve").type_label(), "Valve");
    }

    #[test]
    fn dev_eui_falls_back_to_serial() {
        let with_eui = Device::new("d1")
            .with_serial("SN")
            .with_telemetry("devEUI", "70B3D5");
        assert_eq!(with_eui.dev_eui(), Some("70B3D5"));
        assert_eq!(Device::new("d2").with_serial("SN").dev_eui(), Some("SN"));
        assert_eq!(Device::new("d3").dev_eui(), None);
    }

    #[test]
    fn located_device_serializes_added_fields() {
        let located = LocatedDevice {
            device: Device::new("d1").of_type("Thermostat").online(true),
            building_id: Some("b1".into()),
            building_name: "HQ".into(),
            location_path: "HQ > Floor 1".into(),
        };
        assert_eq!(
            serde_json::to_value(&located).unwrap(),
            json!({
                "id": "d1",
                "deviceType": "Thermostat",
                "isOnline": true,
                "buildingId": "b1",
                "buildingName": "HQ",
                "locationPath": "HQ > Floor 1",
            })
        );
    }
}
