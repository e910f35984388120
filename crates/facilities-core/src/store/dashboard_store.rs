// ── Central dashboard store ──
//
// Readers grab the current snapshot without locking. Writers swap in a
// complete replacement and bump the version watched by subscribers.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::watch;
use tracing::debug;

use super::snapshot::Snapshot;
use crate::model::Building;

/// Shared holder of the current [`Snapshot`].
pub struct DashboardStore {
    current: ArcSwap<Snapshot>,
    version: watch::Sender<u64>,
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardStore {
    pub fn new() -> Self {
        let (version, _) = watch::channel(0u64);
        Self {
            current: ArcSwap::from_pointee(Snapshot::default()),
            version,
        }
    }

    /// Current snapshot. Cheap; holds no lock.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    /// Replace the document with a freshly fetched one.
    ///
    /// The version bump and the swap happen under the watch lock, so
    /// concurrent writers publish distinct, increasing versions.
    pub fn replace(&self, buildings: Vec<Building>) -> Arc<Snapshot> {
        let mut snapshot = Arc::default();
        self.version.send_modify(|version| {
            *version += 1;
            snapshot = Arc::new(Snapshot::new(*version, buildings));
            self.current.store(Arc::clone(&snapshot));
        });
        debug!(
            version = snapshot.version(),
            buildings = snapshot.buildings().len(),
            "store snapshot replaced"
        );
        snapshot
    }

    /// Receiver that observes every version bump.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }
}
