// ── Loading the buildings document ──
//
// Turns a normalized payload into the typed hierarchy and pushes it into
// the store. Any `DataSource` works: HTTP for the dashboard, files offline.

use std::sync::Arc;

use facilities_api::{BuildingsPayload, DataSource};
use tracing::{info, warn};

use super::DashboardStore;
use super::snapshot::Snapshot;
use crate::error::CoreError;
use crate::model::Building;

/// Deserialize every building of `payload`.
///
/// A building that does not have the expected shape fails the whole load
/// with its position in the document.
pub fn buildings_from_payload(payload: BuildingsPayload) -> Result<Vec<Building>, CoreError> {
    payload
        .buildings
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| {
                warn!(index, error = %e, "malformed building node");
                CoreError::invalid_document(format!("building #{index}: {e}"))
            })
        })
        .collect()
}

/// Fetch from `source` and convert.
pub async fn load_buildings(source: &impl DataSource) -> Result<Vec<Building>, CoreError> {
    let payload = source.fetch().await?;
    let buildings = buildings_from_payload(payload)?;
    info!(
        source = %source.describe(),
        buildings = buildings.len(),
        "buildings document loaded"
    );
    Ok(buildings)
}

impl DashboardStore {
    /// Re-fetch from `source` and swap in the result. On failure the
    /// current snapshot stays in place.
    pub async fn refresh(&self, source: &impl DataSource) -> Result<Arc<Snapshot>, CoreError> {
        let buildings = load_buildings(source).await?;
        Ok(self.replace(buildings))
    }
}
