//! Hierarchical view of the daemon's flat object namespace.
//!
//! `GetManagedObjects` reports a flat mapping of object paths to interface
//! bundles, but walking the wireless hierarchy (adapter, then device, then
//! role) needs parent/child structure. This module folds the flat map into
//! a tree of path segments where every node carries the interfaces declared
//! at exactly its own path.

use std::collections::{BTreeMap, HashMap};

use crate::models::{ObjectMap, PropertyBag};
use crate::utils::path_prefixes;

/// One node in the object hierarchy.
///
/// Children are keyed by the full path of the child object rather than the
/// trailing segment, so lookups can reuse path strings from other daemon
/// replies unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectNode {
    interfaces: HashMap<String, PropertyBag>,
    children: BTreeMap<String, ObjectNode>,
}

impl ObjectNode {
    /// Folds a flat path-to-interfaces map into a tree rooted above `/`.
    ///
    /// Intermediate nodes are created on demand, so two paths sharing a
    /// prefix end up under one ancestor no matter which order the map
    /// iterates in. A node whose path never appears as a key in the input
    /// keeps an empty interface bag; that is a normal shape, not an error.
    /// Interface bags are merged per interface name, a later bag for a
    /// name replacing an earlier one without touching the rest.
    pub fn build(objects: &ObjectMap) -> ObjectNode {
        let mut root = ObjectNode::default();
        for (path, interfaces) in objects {
            let mut node = &mut root;
            for prefix in path_prefixes(path) {
                node = node.children.entry(prefix).or_default();
            }
            for (name, properties) in interfaces {
                node.interfaces.insert(name.clone(), properties.clone());
            }
        }
        root
    }

    /// Follows the cumulative prefixes of `path` down from this node.
    ///
    /// Returns `None` as soon as any prefix has no node.
    pub fn descend(&self, path: &str) -> Option<&ObjectNode> {
        let mut node = self;
        for prefix in path_prefixes(path) {
            node = node.children.get(&prefix)?;
        }
        Some(node)
    }

    /// Interfaces declared by the object at exactly this node's path.
    pub fn interfaces(&self) -> &HashMap<String, PropertyBag> {
        &self.interfaces
    }

    /// Child nodes keyed by full child path, in path order.
    pub fn children(&self) -> &BTreeMap<String, ObjectNode> {
        &self.children
    }

    /// Property bag for one declared interface, if present.
    pub fn interface(&self, name: &str) -> Option<&PropertyBag> {
        self.interfaces.get(name)
    }

    /// Whether this node's object declares the named interface.
    pub fn has_interface(&self, name: &str) -> bool {
        self.interfaces.contains_key(name)
    }
}
