// ── Device grouping ──

use indexmap::IndexMap;

use crate::model::Device;

/// Devices bucketed by type label, buckets in first-seen order.
pub type DeviceGroups<T> = IndexMap<String, Vec<T>>;

/// Partition `devices` by [`Device::type_label`], keeping input order inside
/// each bucket. The map imposes no meaningful key order; use
/// [`sorted_group_keys`] for display.
pub fn group_by_type<T>(devices: &[T]) -> DeviceGroups<T>
where
    T: AsRef<Device> + Clone,
{
    let mut groups: DeviceGroups<T> = IndexMap::new();
    for item in devices {
        groups
            .entry(item.as_ref().type_label().to_owned())
            .or_default()
            .push(item.clone());
    }
    groups
}

/// Bucket keys in lexicographic order.
pub fn sorted_group_keys<T>(groups: &DeviceGroups<T>) -> Vec<&str> {
    let mut keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
