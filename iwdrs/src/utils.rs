//! String helpers for object paths and interface names.

/// Cumulative prefixes of a slash-delimited object path, shortest first.
///
/// `/net/connman/iwd/phy0` yields `/net`, `/net/connman`, `/net/connman/iwd`,
/// `/net/connman/iwd/phy0`. The daemon only hands out well-formed absolute
/// paths, so no validation happens here.
pub(crate) fn path_prefixes(path: &str) -> Vec<String> {
    let segments: Vec<&str> = path.split('/').collect();
    (1..segments.len())
        .map(|end| segments[..=end].join("/"))
        .collect()
}

/// Final dot-separated component of a D-Bus interface name.
///
/// `net.connman.iwd.Station` yields `Station`. A name without dots yields
/// itself.
pub(crate) fn interface_leaf(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}
