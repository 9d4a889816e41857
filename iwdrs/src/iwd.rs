use crate::Result;
use crate::backend::{DbusBackend, WirelessBackend};
use crate::models::{Network, ScanError};
use crate::scan::{ordered_networks, trigger_scan};
use crate::topology::Snapshot;

/// High-level interface to the iwd daemon.
///
/// Provides methods for snapshotting the object graph, triggering scans,
/// and listing a station's visible networks. Generic over the transport so
/// the same walking logic runs against any `WirelessBackend`; `Iwd::new()`
/// picks the system-bus implementation.
#[derive(Clone)]
pub struct Iwd<B: WirelessBackend = DbusBackend> {
    backend: B,
}

impl Iwd<DbusBackend> {
    /// Creates a new `Iwd` connected to the system D-Bus.
    pub async fn new() -> Result<Self> {
        Ok(Self {
            backend: DbusBackend::new().await?,
        })
    }
}

impl<B: WirelessBackend> Iwd<B> {
    /// Wraps a specific backend implementation.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// The backend driving this instance.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetches a one-time snapshot of the daemon's object graph.
    pub async fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot::from_objects(self.backend.managed_objects().await?))
    }

    /// Requests a scan on the device at `device_path`.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::AlreadyInProgress` when the daemon is mid-scan;
    /// existing results stay valid in that case. Any other rejection comes
    /// back as `ScanError::Failed`.
    pub async fn trigger_scan(&self, device_path: &str) -> std::result::Result<(), ScanError> {
        trigger_scan(&self.backend, device_path).await
    }

    /// Lists the ranked networks visible to the station at `station_path`,
    /// strongest first, in the daemon's own ordering.
    pub async fn ordered_networks(
        &self,
        snapshot: &Snapshot,
        station_path: &str,
    ) -> Result<Vec<Network>> {
        ordered_networks(&self.backend, snapshot, station_path).await
    }
}
