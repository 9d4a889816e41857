//! Record formatting for the two output modes.

use std::io::Write;

use iwdrs::Network;

/// What gets printed per network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Connection marker and name, signal in dBm, security type.
    Full,
    /// Network name only, one per line.
    SsidOnly,
}

/// Writes one network record to `out`.
///
/// Full mode prints three lines per network. The first starts with `>` for
/// the connected network and a space otherwise, keeping names aligned. The
/// second is the signal in whole dBm, the third the security type.
pub fn write_network<W: Write>(
    out: &mut W,
    mode: OutputMode,
    network: &Network,
) -> std::io::Result<()> {
    match mode {
        OutputMode::Full => {
            let marker = if network.connected { '>' } else { ' ' };
            writeln!(out, "{marker}{}", network.name)?;
            writeln!(out, "{} dBm", network.signal_dbm())?;
            writeln!(out, "{}", network.security)
        }
        OutputMode::SsidOnly => writeln!(out, "{}", network.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iwdrs::NetworkSecurity;

    fn network(name: &str, connected: bool, signal: i16, security: NetworkSecurity) -> Network {
        Network {
            path: format!("/net/connman/iwd/phy0/1/{name}_psk"),
            name: name.to_string(),
            connected,
            security,
            signal,
        }
    }

    fn rendered(mode: OutputMode, net: &Network) -> String {
        let mut out = Vec::new();
        write_network(&mut out, mode, net).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_full_record_unconnected() {
        let net = network("HomeWifi", false, 8500, NetworkSecurity::Psk);
        assert_eq!(rendered(OutputMode::Full, &net), " HomeWifi\n85 dBm\npsk\n");
    }

    #[test]
    fn test_full_record_connected_marker() {
        let net = network("HomeWifi", true, 8500, NetworkSecurity::Psk);
        assert_eq!(rendered(OutputMode::Full, &net), ">HomeWifi\n85 dBm\npsk\n");
    }

    #[test]
    fn test_full_record_truncates_signal() {
        let net = network("Cafe", false, -8765, NetworkSecurity::Open);
        assert_eq!(rendered(OutputMode::Full, &net), " Cafe\n-87 dBm\nopen\n");
    }

    #[test]
    fn test_full_record_unrecognized_security_verbatim() {
        let net = network("Lab", false, -5000, NetworkSecurity::Other("owe".into()));
        assert_eq!(rendered(OutputMode::Full, &net), " Lab\n-50 dBm\nowe\n");
    }

    #[test]
    fn test_ssid_record_name_only() {
        let net = network("HomeWifi", true, 8500, NetworkSecurity::Psk);
        assert_eq!(rendered(OutputMode::SsidOnly, &net), "HomeWifi\n");
    }
}
