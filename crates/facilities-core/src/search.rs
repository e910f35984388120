// ── Device search and filter predicates ──
//
// Applied to the flattened device list without re-fetching.

use crate::model::{Device, LocatedDevice};

/// Devices whose name, serial number, type, or location path contain `term`,
/// ignoring case. A blank term matches everything. Input order is kept.
pub fn filter_devices<'a>(devices: &'a [LocatedDevice], term: &str) -> Vec<&'a LocatedDevice> {
    let filter = DeviceFilter::search(term);
    devices.iter().filter(|d| filter.matches(d)).collect()
}

fn matches_term(located: &LocatedDevice, needle: &str) -> bool {
    let device: &Device = &located.device;
    [
        device.name.as_deref(),
        device.serial_number.as_deref(),
        device.device_type.as_deref(),
        Some(located.location_path.as_str()),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Filter predicate for located devices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceFilter {
    All,
    /// Online by the display rule: anything but an explicit `false`.
    Online,
    Offline,
    /// Exact type label, `"Unknown"` included.
    ByType(String),
    /// Lowercased search needle.
    Search(String),
}

impl DeviceFilter {
    /// Search filter for a raw user term. Blank terms become [`DeviceFilter::All`].
    pub fn search(term: &str) -> Self {
        if term.trim().is_empty() {
            Self::All
        } else {
            Self::Search(term.to_lowercase())
        }
    }

    pub fn matches(&self, device: &LocatedDevice) -> bool {
        match self {
            Self::All => true,
            Self::Online => device.device.is_considered_online_for_display(),
            Self::Offline => !device.device.is_considered_online_for_display(),
            Self::ByType(label) => device.type_label() == label,
            Self::Search(needle) => matches_term(device, needle),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::HierarchyNode;
    use crate::transform::extract_all_devices;

    fn fixture() -> Vec<LocatedDevice> {
        extract_all_devices(&[
            HierarchyNode::new("b1", "Vitosha Tower").with_floors(vec![
                HierarchyNode::new("f1", "Floor 1").with_devices(vec![
                    Device::new("d1")
                        .named("Kitchen Thermostat")
                        .of_type("Thermostat")
                        .with_serial("SN-AAA")
                        .online(true),
                    Device::new("d2").named("Main Valve").of_type("Valve").online(false),
                ]),
            ]),
            HierarchyNode::new("b2", "Lozenets House").with_devices(vec![
                Device::new("d3").with_serial("sn-bbb"),
            ]),
        ])
    }

    fn keys(devices: &[&LocatedDevice]) -> Vec<String> {
        devices.iter().map(|d| d.key()).collect()
    }

    #[test]
    fn blank_term_returns_everything() {
        let devices = fixture();
        assert_eq!(filter_devices(&devices, "").len(), 3);
        assert_eq!(filter_devices(&devices, "   ").len(), 3);
    }

    #[test]
    fn matches_each_searchable_field_case_insensitively() {
        let devices = fixture();
        assert_eq!(keys(&filter_devices(&devices, "KITCHEN")), vec!["d1"]);
        assert_eq!(keys(&filter_devices(&devices, "SN-")), vec!["d1", "d3"]);
        assert_eq!(keys(&filter_devices(&devices, "valve")), vec!["d2"]);
        assert_eq!(keys(&filter_devices(&devices, "floor 1")), vec!["d1", "d2"]);
        assert_eq!(keys(&filter_devices(&devices, "lozenets")), vec!["d3"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_devices(&fixture(), "boiler").is_empty());
    }

    #[test]
    fn online_filters_use_display_rule() {
        let devices = fixture();
        let online: Vec<String> = devices
            .iter()
            .filter(|d| DeviceFilter::Online.matches(d))
            .map(LocatedDevice::key)
            .collect();
        // d3 has no isOnline and is shown as online.
        assert_eq!(online, vec!["d1", "d3"]);
        assert!(DeviceFilter::Offline.matches(&devices[1]));
    }

    #[test]
    fn by_type_includes_unknown_bucket() {
        let devices = fixture();
        assert!(DeviceFilter::ByType("Unknown".into()).matches(&devices[2]));
        assert!(!DeviceFilter::ByType("Valve".into()).matches(&devices[0]));
    }

    #[test]
    fn search_constructor() {
        assert_eq!(DeviceFilter::search(" "), DeviceFilter::All);
        assert_eq!(DeviceFilter::search("HQ"), DeviceFilter::Search("hq".into()));
    }
}
