//! Constants for iwd D-Bus interface values.
//!
//! These constants correspond to the names used by iwd's D-Bus API: the
//! well-known service, the object namespace root, interface names, and the
//! error names the daemon replies with.

/// iwd service identity and object namespace.
pub mod service {
    /// Well-known name the daemon claims on the system bus.
    pub const NAME: &str = "net.connman.iwd";

    /// Namespace root every daemon object lives under.
    pub const ROOT_PATH: &str = "/net/connman/iwd";
}

/// iwd interface names carrying domain meaning.
pub mod interface {
    pub const ADAPTER: &str = "net.connman.iwd.Adapter";
    pub const DEVICE: &str = "net.connman.iwd.Device";
    pub const NETWORK: &str = "net.connman.iwd.Network";
}

/// D-Bus error names iwd replies with when it rejects a call.
pub mod error_name {
    /// An equivalent operation is already underway.
    pub const IN_PROGRESS: &str = "net.connman.iwd.InProgress";

    /// The object is busy with a conflicting operation.
    pub const BUSY: &str = "net.connman.iwd.Busy";
}

/// Signal strength conversion.
pub mod signal {
    /// The daemon reports signal strength in hundredths of a dBm.
    pub const HUNDREDTHS_PER_DBM: i16 = 100;
}
