//! Transport seam between the hierarchy logic and the daemon.
//!
//! The rest of the crate needs three daemon capabilities: enumerate the
//! object graph, trigger a scan on a device, and fetch a station's ranked
//! network list. `WirelessBackend` captures exactly that surface.
//! `DbusBackend` implements it over the system bus; tests drive the same
//! code paths with in-memory implementations.

use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use zbus::Connection;
use zvariant::{OwnedValue, Value};

use crate::Result;
use crate::constants::service;
use crate::models::{ObjectMap, PropertyBag, PropertyValue, ScanError, classify_scan_error};
use crate::proxies::{ObjectManagerProxy, RawObjects, StationProxy};

/// Daemon operations the wireless hierarchy logic depends on.
#[async_trait]
pub trait WirelessBackend: Send + Sync {
    /// Snapshot of every object the daemon currently exports.
    async fn managed_objects(&self) -> Result<ObjectMap>;

    /// Requests a scan on the station at `device_path`.
    async fn trigger_scan(&self, device_path: &str) -> std::result::Result<(), ScanError>;

    /// Ranked (network path, signal) pairs for the station at
    /// `station_path`, strongest first, signal in hundredths of a dBm.
    async fn ordered_networks(&self, station_path: &str) -> Result<Vec<(String, i16)>>;
}

/// `WirelessBackend` over the system D-Bus.
#[derive(Clone)]
pub struct DbusBackend {
    conn: Connection,
}

impl DbusBackend {
    /// Connects to the system bus.
    pub async fn new() -> Result<Self> {
        debug!("connecting to {} on the system bus", service::NAME);
        let conn = Connection::system().await?;
        Ok(Self { conn })
    }

    /// Wraps an existing bus connection, e.g. a session bus in tests.
    pub fn with_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl WirelessBackend for DbusBackend {
    async fn managed_objects(&self) -> Result<ObjectMap> {
        let manager = ObjectManagerProxy::new(&self.conn).await?;
        let raw = manager.get_managed_objects().await?;
        debug!("daemon exports {} objects", raw.len());
        Ok(convert_objects(raw))
    }

    async fn trigger_scan(&self, device_path: &str) -> std::result::Result<(), ScanError> {
        let station = StationProxy::builder(&self.conn)
            .path(device_path.to_owned())
            .map_err(classify_scan_error)?
            .build()
            .await
            .map_err(classify_scan_error)?;
        station.scan().await.map_err(classify_scan_error)
    }

    async fn ordered_networks(&self, station_path: &str) -> Result<Vec<(String, i16)>> {
        let station = StationProxy::builder(&self.conn)
            .path(station_path.to_owned())?
            .build()
            .await?;
        let pairs = station.get_ordered_networks().await?;
        Ok(pairs
            .into_iter()
            .map(|(path, signal)| (path.to_string(), signal))
            .collect())
    }
}

/// Converts the raw `GetManagedObjects` reply into the crate's property
/// model. Values of kinds the model does not carry are dropped.
fn convert_objects(raw: RawObjects) -> ObjectMap {
    let mut objects = ObjectMap::new();
    for (path, interfaces) in raw {
        let mut bags = HashMap::new();
        for (name, properties) in interfaces {
            let mut bag = PropertyBag::new();
            for (key, value) in properties {
                if let Some(converted) = property_value(&value) {
                    bag.insert(key, converted);
                }
            }
            bags.insert(name, bag);
        }
        objects.insert(path.to_string(), bags);
    }
    objects
}

fn property_value(value: &OwnedValue) -> Option<PropertyValue> {
    match &**value {
        Value::Str(s) => Some(PropertyValue::Text(s.as_str().to_owned())),
        Value::Bool(b) => Some(PropertyValue::Bool(*b)),
        Value::U8(n) => Some(PropertyValue::Int(i64::from(*n))),
        Value::I16(n) => Some(PropertyValue::Int(i64::from(*n))),
        Value::U16(n) => Some(PropertyValue::Int(i64::from(*n))),
        Value::I32(n) => Some(PropertyValue::Int(i64::from(*n))),
        Value::U32(n) => Some(PropertyValue::Int(i64::from(*n))),
        Value::I64(n) => Some(PropertyValue::Int(*n)),
        Value::U64(n) => i64::try_from(*n).ok().map(PropertyValue::Int),
        Value::ObjectPath(p) => Some(PropertyValue::Path(p.to_string())),
        Value::Array(array) => array_value(array),
        _ => None,
    }
}

fn array_value(array: &zvariant::Array<'_>) -> Option<PropertyValue> {
    let mut paths = Vec::new();
    let mut texts = Vec::new();
    for element in array.iter() {
        match element {
            Value::ObjectPath(p) => paths.push(p.to_string()),
            Value::Str(s) => texts.push(s.as_str().to_owned()),
            _ => return None,
        }
    }
    if !paths.is_empty() && texts.is_empty() {
        Some(PropertyValue::PathList(paths))
    } else if !texts.is_empty() && paths.is_empty() {
        Some(PropertyValue::TextList(texts))
    } else {
        // Empty or mixed arrays carry nothing usable.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zvariant::{ObjectPath, OwnedObjectPath};

    fn owned(value: Value<'_>) -> OwnedValue {
        OwnedValue::try_from(value).unwrap()
    }

    #[test]
    fn test_property_value_scalars() {
        assert_eq!(
            property_value(&owned(Value::from("HomeWifi"))),
            Some(PropertyValue::Text("HomeWifi".into()))
        );
        assert_eq!(
            property_value(&owned(Value::from(true))),
            Some(PropertyValue::Bool(true))
        );
        assert_eq!(
            property_value(&owned(Value::from(4200u32))),
            Some(PropertyValue::Int(4200))
        );
        assert_eq!(
            property_value(&owned(Value::from(-8500i16))),
            Some(PropertyValue::Int(-8500))
        );
    }

    #[test]
    fn test_property_value_object_path() {
        let path = ObjectPath::try_from("/net/connman/iwd/phy0").unwrap();
        assert_eq!(
            property_value(&owned(Value::from(path))),
            Some(PropertyValue::Path("/net/connman/iwd/phy0".into()))
        );
    }

    #[test]
    fn test_property_value_string_array() {
        let value = owned(Value::from(vec!["ap", "station"]));
        assert_eq!(
            property_value(&value),
            Some(PropertyValue::TextList(vec!["ap".into(), "station".into()]))
        );
    }

    #[test]
    fn test_property_value_path_array() {
        let paths = vec![
            ObjectPath::try_from("/net/connman/iwd/phy0").unwrap(),
            ObjectPath::try_from("/net/connman/iwd/phy1").unwrap(),
        ];
        assert_eq!(
            property_value(&owned(Value::from(paths))),
            Some(PropertyValue::PathList(vec![
                "/net/connman/iwd/phy0".into(),
                "/net/connman/iwd/phy1".into(),
            ]))
        );
    }

    #[test]
    fn test_property_value_unsupported_kinds_dropped() {
        assert_eq!(property_value(&owned(Value::from(3.5f64))), None);
        assert_eq!(property_value(&owned(Value::from(u64::MAX))), None);
        assert_eq!(property_value(&owned(Value::from(vec![1u32, 2u32]))), None);
        assert_eq!(property_value(&owned(Value::from(Vec::<String>::new()))), None);
    }

    #[test]
    fn test_convert_objects_shape() {
        let mut properties = HashMap::new();
        properties.insert("Name".to_string(), owned(Value::from("wlan0")));
        properties.insert("Powered".to_string(), owned(Value::from(true)));
        let mut interfaces = HashMap::new();
        interfaces.insert("net.connman.iwd.Device".to_string(), properties);
        let mut raw = RawObjects::new();
        raw.insert(
            OwnedObjectPath::try_from("/net/connman/iwd/phy0/1").unwrap(),
            interfaces,
        );

        let objects = convert_objects(raw);
        let bag = &objects["/net/connman/iwd/phy0/1"]["net.connman.iwd.Device"];
        assert_eq!(bag.get("Name"), Some(&PropertyValue::Text("wlan0".into())));
        assert_eq!(bag.get("Powered"), Some(&PropertyValue::Bool(true)));
    }
}
