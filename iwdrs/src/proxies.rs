//! D-Bus proxy traits for iwd interfaces.
//!
//! These traits define the iwd D-Bus API surface used by this crate.
//! The `zbus::proxy` macro generates proxy implementations that handle
//! D-Bus communication automatically.
//!
//! # iwd D-Bus Structure
//!
//! - `/` - Standard ObjectManager enumerating everything below
//! - `/net/connman/iwd/{phy}` - Adapter objects
//! - `/net/connman/iwd/{phy}/{dev}` - Device objects; a station-mode device
//!   also exposes `net.connman.iwd.Station` on this path
//! - Network objects under each device, referenced by `GetOrderedNetworks`

use std::collections::HashMap;
use zbus::{Result, proxy};
use zvariant::{OwnedObjectPath, OwnedValue};

/// Reply shape of `GetManagedObjects`: path to interface to property to
/// value.
pub type RawObjects = HashMap<OwnedObjectPath, HashMap<String, HashMap<String, OwnedValue>>>;

/// Proxy for the standard object manager iwd exposes at the root path.
///
/// One call returns the daemon's whole object graph with all properties,
/// which avoids a property round-trip per object.
#[proxy(
    interface = "org.freedesktop.DBus.ObjectManager",
    default_service = "net.connman.iwd",
    default_path = "/"
)]
pub trait ObjectManager {
    /// Returns every exported object with its interfaces and properties.
    fn get_managed_objects(&self) -> Result<RawObjects>;
}

/// Proxy for a device's station-mode interface.
///
/// Present on a device object only while the device operates in client
/// (station) mode; there is no fixed path, callers supply the device path.
#[proxy(
    interface = "net.connman.iwd.Station",
    default_service = "net.connman.iwd"
)]
pub trait Station {
    /// Requests a fresh scan. The daemon rejects the call while another
    /// scan is underway.
    fn scan(&self) -> Result<()>;

    /// Networks visible to this station as (path, signal) pairs, ranked
    /// strongest first by the daemon. Signal is in hundredths of a dBm.
    fn get_ordered_networks(&self) -> Result<Vec<(OwnedObjectPath, i16)>>;
}
