use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::constants::{error_name, signal};

/// A property value carried in an object's interface bag.
///
/// iwd property dictionaries are heterogeneous variants; this union covers
/// the kinds the wireless hierarchy actually uses. Values of other kinds
/// are dropped during conversion, so consumers see them as absent rather
/// than failing on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// A plain string, e.g. a network name or security type.
    Text(String),
    /// A boolean, e.g. `Powered` or `Connected`.
    Bool(bool),
    /// Any integer width the daemon uses, widened to `i64`.
    Int(i64),
    /// A D-Bus object path.
    Path(String),
    /// An array of object paths.
    PathList(Vec<String>),
    /// An array of strings, e.g. `SupportedModes`.
    TextList(Vec<String>),
}

impl PropertyValue {
    /// The string payload, if this is a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean payload, if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is an `Int` value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The object path payload, if this is a `Path` value.
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Self::Path(p) => Some(p),
            _ => None,
        }
    }
}

/// Property name to value mapping for one interface on one object.
pub type PropertyBag = HashMap<String, PropertyValue>;

/// Flat snapshot of the daemon's object graph: path to interfaces to
/// properties, exactly as `GetManagedObjects` reports it.
pub type ObjectMap = HashMap<String, HashMap<String, PropertyBag>>;

/// Security class of a network, as iwd's `Type` property reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkSecurity {
    /// No authentication.
    Open,
    /// WPA/WPA2/WPA3 pre-shared key.
    Psk,
    /// WPA Enterprise (802.1X).
    Eap8021x,
    /// Legacy WEP.
    Wep,
    /// A classification this crate does not recognize, passed through
    /// verbatim.
    Other(String),
}

impl From<&str> for NetworkSecurity {
    fn from(value: &str) -> Self {
        match value {
            "open" => Self::Open,
            "psk" => Self::Psk,
            "8021x" => Self::Eap8021x,
            "wep" => Self::Wep,
            v => Self::Other(v.to_string()),
        }
    }
}

impl Display for NetworkSecurity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Psk => write!(f, "psk"),
            Self::Eap8021x => write!(f, "8021x"),
            Self::Wep => write!(f, "wep"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Operating role a device currently exposes.
///
/// iwd declares the role as an extra interface on the device object; a
/// device carries at most one role at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceRole {
    /// Client mode; the device can scan and connect.
    Station,
    /// The device is acting as an access point.
    AccessPoint,
    /// The device is part of an ad-hoc network.
    AdHoc,
}

impl Display for DeviceRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Station => write!(f, "station"),
            Self::AccessPoint => write!(f, "ap"),
            Self::AdHoc => write!(f, "ad-hoc"),
        }
    }
}

/// Represents a network discovered by a station-mode device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    /// Object path of the network within the daemon's namespace.
    pub path: String,
    /// Network SSID (name).
    pub name: String,
    /// Whether the station is currently connected to this network.
    pub connected: bool,
    /// Security classification.
    pub security: NetworkSecurity,
    /// Signal strength in hundredths of a dBm, as ranked by the daemon.
    pub signal: i16,
}

impl Network {
    /// Signal strength in whole dBm (truncated toward zero).
    pub fn signal_dbm(&self) -> i16 {
        self.signal / signal::HUNDREDTHS_PER_DBM
    }
}

/// Represents a logical network interface hosted on an adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Object path of the device.
    pub path: String,
    /// Interface name (e.g., "wlan0").
    pub name: Option<String>,
    /// Hardware address.
    pub address: Option<String>,
    /// Whether the interface is up.
    pub powered: Option<bool>,
    /// Current operating role, if the device declares one.
    pub role: Option<DeviceRole>,
}

impl Device {
    /// Whether the device is in client (station) mode and can scan.
    pub fn is_station(&self) -> bool {
        self.role == Some(DeviceRole::Station)
    }
}

/// Represents a physical wireless radio managed by the daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adapter {
    /// Object path of the adapter.
    pub path: String,
    /// Adapter name (e.g., "phy0").
    pub name: Option<String>,
    /// Hardware model.
    pub model: Option<String>,
    /// Hardware vendor.
    pub vendor: Option<String>,
    /// Whether the radio is powered.
    pub powered: Option<bool>,
    /// Devices hosted on this adapter, in path order.
    pub devices: Vec<Device>,
}

/// Errors that can occur while querying the daemon.
#[derive(Debug, Error)]
pub enum IwdError {
    /// A D-Bus communication error occurred.
    #[error("D-Bus error: {0}")]
    Dbus(#[from] zbus::Error),

    /// The daemon's namespace root was absent from the object graph.
    #[error("no objects found under {0} (is iwd running?)")]
    NamespaceMissing(String),
}

/// Errors that can occur when requesting a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The daemon rejected the request because a scan is already underway.
    /// Existing results stay valid, so callers usually treat this as a
    /// notice rather than a failure.
    #[error("scan already in progress")]
    AlreadyInProgress,

    /// The scan request failed outright.
    #[error("scan request failed: {0}")]
    Failed(zbus::Error),
}

/// Converts a scan rejection into a `ScanError`.
///
/// Maps the daemon's "in progress" and "busy" replies to `AlreadyInProgress`
/// and everything else to `Failed`.
pub fn classify_scan_error(err: zbus::Error) -> ScanError {
    match &err {
        zbus::Error::MethodError(name, _, _) if is_scan_rejection(name.as_str()) => {
            ScanError::AlreadyInProgress
        }
        _ => ScanError::Failed(err),
    }
}

fn is_scan_rejection(name: &str) -> bool {
    name == error_name::IN_PROGRESS || name == error_name::BUSY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_value_accessors() {
        assert_eq!(PropertyValue::Text("wlan0".into()).as_str(), Some("wlan0"));
        assert_eq!(PropertyValue::Bool(true).as_bool(), Some(true));
        assert_eq!(PropertyValue::Int(-42).as_int(), Some(-42));
        assert_eq!(PropertyValue::Path("/net".into()).as_path(), Some("/net"));
    }

    #[test]
    fn test_property_value_accessors_reject_other_kinds() {
        assert_eq!(PropertyValue::Bool(true).as_str(), None);
        assert_eq!(PropertyValue::Text("yes".into()).as_bool(), None);
        assert_eq!(PropertyValue::Path("/net".into()).as_str(), None);
        assert_eq!(PropertyValue::Text("/net".into()).as_path(), None);
    }

    #[test]
    fn test_network_security_from_str() {
        assert_eq!(NetworkSecurity::from("open"), NetworkSecurity::Open);
        assert_eq!(NetworkSecurity::from("psk"), NetworkSecurity::Psk);
        assert_eq!(NetworkSecurity::from("8021x"), NetworkSecurity::Eap8021x);
        assert_eq!(NetworkSecurity::from("wep"), NetworkSecurity::Wep);
        assert_eq!(
            NetworkSecurity::from("owe"),
            NetworkSecurity::Other("owe".into())
        );
    }

    #[test]
    fn test_network_security_display_round_trips() {
        for raw in ["open", "psk", "8021x", "wep", "owe"] {
            assert_eq!(NetworkSecurity::from(raw).to_string(), raw);
        }
    }

    #[test]
    fn test_signal_dbm_truncates_hundredths() {
        let net = |signal| Network {
            path: "/net/connman/iwd/phy0/1/x_psk".into(),
            name: "x".into(),
            connected: false,
            security: NetworkSecurity::Psk,
            signal,
        };
        assert_eq!(net(8500).signal_dbm(), 85);
        assert_eq!(net(-8500).signal_dbm(), -85);
        assert_eq!(net(-8599).signal_dbm(), -85);
        assert_eq!(net(-99).signal_dbm(), 0);
    }

    #[test]
    fn test_device_is_station() {
        let device = |role| Device {
            path: "/net/connman/iwd/phy0/1".into(),
            name: Some("wlan0".into()),
            address: None,
            powered: None,
            role,
        };
        assert!(device(Some(DeviceRole::Station)).is_station());
        assert!(!device(Some(DeviceRole::AccessPoint)).is_station());
        assert!(!device(None).is_station());
    }

    #[test]
    fn test_scan_rejection_names() {
        assert!(is_scan_rejection("net.connman.iwd.InProgress"));
        assert!(is_scan_rejection("net.connman.iwd.Busy"));
        assert!(!is_scan_rejection("net.connman.iwd.Failed"));
        assert!(!is_scan_rejection("org.freedesktop.DBus.Error.UnknownMethod"));
    }

    #[test]
    fn test_classify_scan_error_other_failures() {
        let err = classify_scan_error(zbus::Error::InvalidReply);
        assert!(matches!(err, ScanError::Failed(_)));
    }
}
