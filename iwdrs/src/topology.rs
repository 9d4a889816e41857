//! Wireless hierarchy discovered from an object snapshot.
//!
//! Projects the object tree onto the domain shape: adapters under the
//! daemon's namespace root, devices under adapters, and the role each
//! device declares. Everything here reads one snapshot; nothing talks to
//! the bus.

use log::debug;

use crate::Result;
use crate::constants::{interface, service};
use crate::models::{
    Adapter, Device, DeviceRole, IwdError, Network, NetworkSecurity, ObjectMap, PropertyBag,
    PropertyValue,
};
use crate::object_tree::ObjectNode;
use crate::utils::interface_leaf;

/// One-time snapshot of the daemon's exported objects.
///
/// Keeps both views the crate needs: the tree for hierarchy walks, and the
/// original flat map for exact-path lookups. Network objects are resolved
/// against the flat map, never the tree.
#[derive(Debug, Clone)]
pub struct Snapshot {
    objects: ObjectMap,
    tree: ObjectNode,
}

impl Snapshot {
    /// Builds the tree view over a flat object map.
    pub fn from_objects(objects: ObjectMap) -> Self {
        let tree = ObjectNode::build(&objects);
        Self { objects, tree }
    }

    /// The flat path-to-interfaces map as fetched.
    pub fn objects(&self) -> &ObjectMap {
        &self.objects
    }

    /// Root of the hierarchical view.
    pub fn tree(&self) -> &ObjectNode {
        &self.tree
    }

    /// Adapters with their devices, in path order.
    ///
    /// Children of the namespace root without the Adapter interface, and
    /// children of an adapter without the Device interface, are skipped
    /// silently; iwd exports other object kinds alongside the wireless
    /// hierarchy. An absent namespace root means the daemon is not running
    /// or exports nothing, which no caller can work around, so that case
    /// is an error rather than an empty list.
    pub fn adapters(&self) -> Result<Vec<Adapter>> {
        let root = self
            .tree
            .descend(service::ROOT_PATH)
            .ok_or_else(|| IwdError::NamespaceMissing(service::ROOT_PATH.to_string()))?;

        let mut adapters = Vec::new();
        for (path, node) in root.children() {
            let Some(properties) = node.interface(interface::ADAPTER) else {
                debug!("skipping {path}: no adapter interface");
                continue;
            };
            let mut adapter = adapter_from(path, properties);
            for (device_path, device_node) in node.children() {
                let Some(device_properties) = device_node.interface(interface::DEVICE) else {
                    debug!("skipping {device_path}: no device interface");
                    continue;
                };
                adapter.devices.push(device_from(
                    device_path,
                    device_properties,
                    device_role(device_node),
                ));
            }
            adapters.push(adapter);
        }
        Ok(adapters)
    }

    /// Resolves one ranked (path, signal) pair against the flat map.
    ///
    /// Returns `None` when the path is absent from the snapshot or its
    /// Network bag lacks a usable name or type. The daemon keeps ranked
    /// results consistent with the object graph, so callers treat `None`
    /// as a skippable oddity.
    pub fn network(&self, path: &str, signal: i16) -> Option<Network> {
        let properties = self.objects.get(path)?.get(interface::NETWORK)?;
        let name = properties.get("Name")?.as_str()?.to_owned();
        let security = NetworkSecurity::from(properties.get("Type")?.as_str()?);
        let connected = properties
            .get("Connected")
            .and_then(PropertyValue::as_bool)
            .unwrap_or(false);
        Some(Network {
            path: path.to_owned(),
            name,
            connected,
            security,
            signal,
        })
    }
}

/// Role interface declared by a device node, if any.
///
/// Matches on the final name component, the way iwd distinguishes role
/// interfaces from the base Device interface on the same object.
fn device_role(node: &ObjectNode) -> Option<DeviceRole> {
    node.interfaces()
        .keys()
        .find_map(|name| match interface_leaf(name) {
            "Station" => Some(DeviceRole::Station),
            "AccessPoint" => Some(DeviceRole::AccessPoint),
            "AdHoc" => Some(DeviceRole::AdHoc),
            _ => None,
        })
}

fn adapter_from(path: &str, properties: &PropertyBag) -> Adapter {
    Adapter {
        path: path.to_owned(),
        name: text(properties, "Name"),
        model: text(properties, "Model"),
        vendor: text(properties, "Vendor"),
        powered: flag(properties, "Powered"),
        devices: Vec::new(),
    }
}

fn device_from(path: &str, properties: &PropertyBag, role: Option<DeviceRole>) -> Device {
    Device {
        path: path.to_owned(),
        name: text(properties, "Name"),
        address: text(properties, "Address"),
        powered: flag(properties, "Powered"),
        role,
    }
}

fn text(properties: &PropertyBag, key: &str) -> Option<String> {
    properties
        .get(key)
        .and_then(PropertyValue::as_str)
        .map(str::to_owned)
}

fn flag(properties: &PropertyBag, key: &str) -> Option<bool> {
    properties.get(key).and_then(PropertyValue::as_bool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_with_interfaces(names: &[&str]) -> ObjectNode {
        let mut objects = ObjectMap::new();
        objects.insert(
            "/dev".to_string(),
            names
                .iter()
                .map(|n| (n.to_string(), PropertyBag::new()))
                .collect(),
        );
        ObjectNode::build(&objects)
            .descend("/dev")
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_device_role_from_leaf_name() {
        let station = node_with_interfaces(&["net.connman.iwd.Device", "net.connman.iwd.Station"]);
        assert_eq!(device_role(&station), Some(DeviceRole::Station));

        let ap = node_with_interfaces(&["net.connman.iwd.Device", "net.connman.iwd.AccessPoint"]);
        assert_eq!(device_role(&ap), Some(DeviceRole::AccessPoint));

        let adhoc = node_with_interfaces(&["net.connman.iwd.Device", "net.connman.iwd.AdHoc"]);
        assert_eq!(device_role(&adhoc), Some(DeviceRole::AdHoc));
    }

    #[test]
    fn test_device_role_absent_without_role_interface() {
        let bare = node_with_interfaces(&["net.connman.iwd.Device"]);
        assert_eq!(device_role(&bare), None);
    }

    #[test]
    fn test_bag_readers_ignore_wrong_kinds() {
        let mut bag = PropertyBag::new();
        bag.insert("Name".to_string(), PropertyValue::Text("phy0".into()));
        bag.insert("Powered".to_string(), PropertyValue::Text("yes".into()));

        assert_eq!(text(&bag, "Name"), Some("phy0".to_string()));
        assert_eq!(flag(&bag, "Powered"), None);
        assert_eq!(text(&bag, "Model"), None);
    }
}
