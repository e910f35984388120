//! Device command handlers.

use std::time::Duration;

use serde::Serialize;
use tabled::Tabled;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use facilities_api::is_truthy;
use facilities_config::Config;
use facilities_core::{
    Debouncer, Device, DeviceFilter, GroupSelection, LocatedDevice, Selection, Snapshot,
    filter_devices, group_by_type, sorted_group_keys,
};

use crate::cli::{DeviceListArgs, DeviceSearchArgs, DevicesArgs, DevicesCommand, OutputFormat};
use crate::error::CliError;
use crate::output::{self, OutputOpts};

use super::util::{self, NOT_AVAILABLE};

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "")]
    selected: &'static str,
    #[tabled(rename = "Device name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Target t°")]
    target: String,
    #[tabled(rename = "Measured t°")]
    measured: String,
    #[tabled(rename = "Humidity")]
    humidity: String,
    #[tabled(rename = "Valve opening")]
    valve: String,
    #[tabled(rename = "Battery")]
    battery: String,
    #[tabled(rename = "Open Window")]
    open_window: String,
    #[tabled(rename = "DevEUI")]
    dev_eui: String,
    #[tabled(rename = "Location")]
    location: String,
}

impl DeviceRow {
    fn of(located: &LocatedDevice, selection: &Selection, color: bool) -> Self {
        let d = &located.device;
        Self {
            selected: if selection.contains(&located.key()) { "[x]" } else { "[ ]" },
            name: d
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.into()),
            status: output::status_label(d.is_considered_online_for_display(), color),
            target: reading(d, "targetTemperature", "°C"),
            measured: reading(d, "temperature", "°C"),
            humidity: reading(d, "humidity", "%"),
            valve: reading(d, "valveOpening", "%"),
            battery: reading(d, "battery", " V"),
            open_window: open_window(d).into(),
            dev_eui: d.dev_eui().unwrap_or(NOT_AVAILABLE).into(),
            location: located.location_path.clone(),
        }
    }
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Type")]
    device_type: String,
    #[tabled(rename = "Devices")]
    devices: usize,
    #[tabled(rename = "Online")]
    online: usize,
}

/// Per-type totals for `devices groups`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupSummary {
    device_type: String,
    devices: usize,
    online: usize,
}

impl From<&GroupSummary> for GroupRow {
    fn from(g: &GroupSummary) -> Self {
        Self {
            device_type: g.device_type.clone(),
            devices: g.devices,
            online: g.online,
        }
    }
}

// ── Telemetry formatting ────────────────────────────────────────────

/// Telemetry value with its unit, or "N/A".
fn reading(device: &Device, key: &str, unit: &str) -> String {
    device
        .telemetry_value(key)
        .map_or_else(|| NOT_AVAILABLE.into(), |v| format!("{}{unit}", util::scalar(v)))
}

fn open_window(device: &Device) -> &'static str {
    match device.telemetry_value("openWindow") {
        None => NOT_AVAILABLE,
        Some(v) if is_truthy(v) => "Detected",
        Some(_) => "Not detected",
    }
}

fn group_marker(state: GroupSelection) -> &'static str {
    match state {
        GroupSelection::All => "[x]",
        GroupSelection::Some => "[-]",
        GroupSelection::None => "[ ]",
    }
}

// ── Rendering ───────────────────────────────────────────────────────

/// One titled table per device type, types in lexicographic order.
fn grouped_tables(devices: &[&LocatedDevice], selection: &Selection, color: bool) -> String {
    if devices.is_empty() {
        return "No devices found.".into();
    }

    let groups = group_by_type(devices);
    let mut sections = Vec::new();
    for key in sorted_group_keys(&groups) {
        let group = &groups[key];
        let keys: Vec<String> = group.iter().map(|d| d.key()).collect();
        let marker = group_marker(selection.group_state(keys.iter().map(String::as_str)));
        let title = output::heading(&format!("{marker} {key} ({})", group.len()), color);
        let rows: Vec<DeviceRow> = group
            .iter()
            .map(|d| DeviceRow::of(d, selection, color))
            .collect();
        sections.push(format!("{title}\n{}", output::render_table(&rows)));
    }
    if !selection.is_empty() {
        sections.push(selection.summary());
    }
    sections.join("\n\n")
}

fn render_devices(
    devices: &[&LocatedDevice],
    selection: &Selection,
    out: &OutputOpts,
) -> Result<String, CliError> {
    if out.format == OutputFormat::Table {
        return Ok(grouped_tables(devices, selection, out.color));
    }
    output::render_list(
        out.format,
        devices,
        |d| DeviceRow::of(d, selection, out.color),
        |d| d.key(),
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    snapshot: &Snapshot,
    args: DevicesArgs,
    out: &OutputOpts,
    cfg: &Config,
) -> Result<(), CliError> {
    match args.command {
        DevicesCommand::List(list_args) => list(snapshot, &list_args, out),
        DevicesCommand::Groups => groups(snapshot, out),
        DevicesCommand::Search(search_args) => search(snapshot, &search_args, out, cfg).await,
    }
}

fn list(snapshot: &Snapshot, args: &DeviceListArgs, out: &OutputOpts) -> Result<(), CliError> {
    let mut devices = filter_devices(snapshot.devices(), args.search.as_deref().unwrap_or_default());

    let mut filters = Vec::new();
    if let Some(ref device_type) = args.device_type {
        filters.push(DeviceFilter::ByType(device_type.clone()));
    }
    if args.online {
        filters.push(DeviceFilter::Online);
    } else if args.offline {
        filters.push(DeviceFilter::Offline);
    }
    devices.retain(|d| filters.iter().all(|f| f.matches(d)));

    let mut selection = Selection::new();
    selection.set_all(args.select.iter().cloned(), true);
    for device_type in &args.select_type {
        if let Some(group) = snapshot.device_groups().get(device_type) {
            selection.set_all(group.iter().map(LocatedDevice::key), true);
        }
    }

    debug!(
        total = snapshot.devices().len(),
        shown = devices.len(),
        selected = selection.len(),
        "devices filtered"
    );
    let rendered = render_devices(&devices, &selection, out)?;
    output::print_output(&rendered, out.quiet);
    Ok(())
}

fn groups(snapshot: &Snapshot, out: &OutputOpts) -> Result<(), CliError> {
    let groups = snapshot.device_groups();
    let summaries: Vec<GroupSummary> = sorted_group_keys(groups)
        .into_iter()
        .map(|key| {
            let members = &groups[key];
            GroupSummary {
                device_type: key.to_owned(),
                devices: members.len(),
                online: members
                    .iter()
                    .filter(|d| d.device.is_considered_online_for_display())
                    .count(),
            }
        })
        .collect();

    let rendered = output::render_list(
        out.format,
        &summaries,
        |g| GroupRow::from(g),
        |g| format!("{}\t{}", g.device_type, g.devices),
    )?;
    output::print_output(&rendered, out.quiet);
    Ok(())
}

/// Read terms from stdin and print matches for each term once typing settles.
async fn search(
    snapshot: &Snapshot,
    args: &DeviceSearchArgs,
    out: &OutputOpts,
    cfg: &Config,
) -> Result<(), CliError> {
    let period = args
        .debounce_ms
        .map_or_else(|| cfg.defaults.search_debounce(), Duration::from_millis);
    let mut debouncer = Debouncer::new(period);
    let input = debouncer.handle();
    debouncer.close();

    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if !input.push(line) {
                break;
            }
        }
        Ok::<(), std::io::Error>(())
    });

    let selection = Selection::new();
    while let Some(term) = debouncer.next().await {
        let matches = filter_devices(snapshot.devices(), &term);
        debug!(term = %term, matches = matches.len(), "search settled");
        if out.format == OutputFormat::Table {
            let noun = if matches.len() == 1 { "device" } else { "devices" };
            output::print_output(
                &output::heading(&format!("Search \"{term}\": {} {noun}", matches.len()), out.color),
                out.quiet,
            );
        }
        let rendered = render_devices(&matches, &selection, out)?;
        output::print_output(&rendered, out.quiet);
    }

    reader.await.map_err(std::io::Error::other)??;
    Ok(())
}

#[cfg(test)]
mod tests {
    use facilities_core::{HierarchyNode, extract_all_devices};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn thermostat() -> Device {
        Device::new("d1")
            .named("Kitchen")
            .of_type("Thermostat")
            .with_serial("SN-1")
            .with_telemetry("temperature", 21.5)
            .with_telemetry("targetTemperature", 22)
            .with_telemetry("battery", 3.6)
            .with_telemetry("openWindow", false)
    }

    #[test]
    fn readings_use_units_and_placeholders() {
        let d = thermostat();
        assert_eq!(reading(&d, "temperature", "°C"), "21.5°C");
        assert_eq!(reading(&d, "targetTemperature", "°C"), "22°C");
        assert_eq!(reading(&d, "battery", " V"), "3.6 V");
        assert_eq!(reading(&d, "humidity", "%"), "N/A");
        assert_eq!(open_window(&d), "Not detected");
        assert_eq!(open_window(&Device::new("x")), "N/A");
        assert_eq!(
            open_window(&Device::new("y").with_telemetry("openWindow", json!(1))),
            "Detected"
        );
        for falsy in [json!(0), json!(0.0), json!(""), json!(false)] {
            let d = Device::new("z").with_telemetry("openWindow", falsy.clone());
            assert_eq!(open_window(&d), "Not detected", "{falsy}");
        }
    }

    #[test]
    fn row_falls_back_to_serial_for_dev_eui() {
        let located = extract_all_devices(&[
            HierarchyNode::new("b1", "HQ").with_devices(vec![thermostat(), Device::new("d2")])
        ]);
        let mut selection = Selection::new();
        selection.toggle("d1", true);

        let row = DeviceRow::of(&located[0], &selection, false);
        assert_eq!(row.selected, "[x]");
        assert_eq!(row.dev_eui, "SN-1");
        assert_eq!(row.status, "Online");
        assert_eq!(row.location, "HQ");

        let bare = DeviceRow::of(&located[1], &selection, false);
        assert_eq!(bare.name, "N/A");
        assert_eq!(bare.dev_eui, "N/A");
    }

    #[test]
    fn grouped_tables_sorted_with_markers() {
        let located = extract_all_devices(&[HierarchyNode::new("b1", "HQ").with_devices(vec![
            Device::new("v1").of_type("Valve"),
            thermostat(),
            Device::new("u1"),
        ])]);
        let refs: Vec<&LocatedDevice> = located.iter().collect();
        let mut selection = Selection::new();
        selection.toggle("v1", true);

        let text = grouped_tables(&refs, &selection, false);
        let thermostat_at = text.find("[ ] Thermostat (1)").unwrap_or(usize::MAX);
        let unknown_at = text.find("[ ] Unknown (1)").unwrap_or(usize::MAX);
        let valve_at = text.find("[x] Valve (1)").unwrap_or(usize::MAX);
        assert!(thermostat_at < unknown_at && unknown_at < valve_at, "{text}");
        assert!(text.ends_with("1 device selected"));
    }

    #[test]
    fn empty_list_message() {
        assert_eq!(grouped_tables(&[], &Selection::new(), false), "No devices found.");
    }
}
