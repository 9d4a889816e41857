//! Scan triggering and ranked network retrieval.
//!
//! Scans are fire and forget: the daemon is asked to refresh, then listing
//! proceeds against whatever the daemon currently reports. Waiting for a
//! scan to finish is deliberately left to callers who want it.

use log::warn;

use crate::Result;
use crate::backend::WirelessBackend;
use crate::models::{Network, ScanError};
use crate::topology::Snapshot;

/// Requests a scan on the device at `device_path`.
///
/// `ScanError::AlreadyInProgress` means the daemon is mid-scan and the
/// existing results remain valid.
pub(crate) async fn trigger_scan<B: WirelessBackend>(
    backend: &B,
    device_path: &str,
) -> std::result::Result<(), ScanError> {
    backend.trigger_scan(device_path).await
}

/// Ranked networks for the station at `station_path`, resolved against the
/// snapshot's flat object map.
///
/// The daemon's ordering is preserved untouched. Pairs whose path cannot
/// be resolved in the snapshot are dropped with a warning; the daemon
/// keeps ranked results consistent with the object graph, so a miss only
/// happens when the graph changed between calls.
pub(crate) async fn ordered_networks<B: WirelessBackend>(
    backend: &B,
    snapshot: &Snapshot,
    station_path: &str,
) -> Result<Vec<Network>> {
    let pairs = backend.ordered_networks(station_path).await?;
    let mut networks = Vec::with_capacity(pairs.len());
    for (path, signal) in pairs {
        match snapshot.network(&path, signal) {
            Some(network) => networks.push(network),
            None => warn!("station {station_path} reported unknown network {path}, skipping"),
        }
    }
    Ok(networks)
}
