//! A Rust library for querying the iwd wireless daemon via D-Bus.
//!
//! iwd exports its state as a flat object graph through the standard
//! ObjectManager interface. This crate fetches that graph, folds it into a
//! path tree, and walks the wireless hierarchy inside it:
//!
//! - Listing adapters and the devices they host
//! - Triggering scans on station-mode devices
//! - Listing a station's visible networks in the daemon's own ranking
//!
//! # Example
//!
//! ```no_run
//! use iwdrs::Iwd;
//!
//! # async fn example() -> iwdrs::Result<()> {
//! let iwd = Iwd::new().await?;
//! let snapshot = iwd.snapshot().await?;
//!
//! for adapter in snapshot.adapters()? {
//!     for device in adapter.devices.iter().filter(|d| d.is_station()) {
//!         let networks = iwd.ordered_networks(&snapshot, &device.path).await?;
//!         for net in &networks {
//!             println!("{} ({} dBm, {})", net.name, net.signal_dbm(), net.security);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Operations return `Result<T, IwdError>`. Scan triggering has its own
//! `ScanError` so the daemon's benign "already in progress" rejection stays
//! distinguishable from real failures.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade for logging. To
//! see log output, add a logging implementation like `env_logger`.

// Internal implementation modules
mod constants;
mod proxies;
mod scan;
mod utils;

// Public API modules
pub mod backend;
pub mod iwd;
pub mod models;
pub mod object_tree;
pub mod topology;

// Re-exported public API
pub use backend::{DbusBackend, WirelessBackend};
pub use iwd::Iwd;
pub use models::{
    Adapter, Device, DeviceRole, IwdError, Network, NetworkSecurity, ObjectMap, PropertyBag,
    PropertyValue, ScanError, classify_scan_error,
};
pub use object_tree::ObjectNode;
pub use topology::Snapshot;

/// A specialized `Result` type for daemon queries.
pub type Result<T> = std::result::Result<T, IwdError>;
