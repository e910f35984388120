//! Shared helpers for command handlers.

use facilities_core::{Building, Snapshot};

use crate::error::CliError;

/// Placeholder for values a record does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// Resolve a building id via snapshot lookup.
pub fn resolve_building<'a>(snapshot: &'a Snapshot, id: &str) -> Result<&'a Building, CliError> {
    snapshot.building(id).ok_or_else(|| CliError::NotFound {
        resource_type: "building".into(),
        identifier: id.into(),
        list_command: "buildings list".into(),
    })
}

/// `"-"` for missing optional text in detail views.
pub fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

/// Display form of a JSON scalar: strings unquoted, everything else as JSON.
pub fn scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
