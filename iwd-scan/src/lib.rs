//! Lists Wi-Fi networks visible to the iwd daemon.
//!
//! Walks the daemon's adapter/device hierarchy, triggers a scan on every
//! station-mode device, and prints one record per network in the daemon's
//! own ranking. Records go to standard output; progress lines go to the
//! diagnostics stream so the record stream stays clean.

pub mod report;

use anyhow::Context;
use clap::Parser;
use log::warn;
use std::io::Write;

use iwdrs::{Iwd, ScanError, WirelessBackend};

use crate::report::{OutputMode, write_network};

/// Historical interface: one optional positional token. The literal `ssid`
/// selects names-only output; anything else falls back to the full listing
/// with a warning rather than an error, so existing callers keep working.
#[derive(Parser, Debug)]
#[command(name = "iwd-scan")]
#[command(version)]
#[command(about = "List Wi-Fi networks visible to the iwd daemon")]
struct Args {
    /// Print only network names (pass the literal `ssid`)
    #[arg(value_name = "MODE")]
    mode: Vec<String>,
}

impl Args {
    fn output_mode(&self) -> OutputMode {
        match self.mode.as_slice() {
            [] => OutputMode::Full,
            [only] if only == "ssid" => OutputMode::SsidOnly,
            other => {
                warn!("ignoring unrecognized arguments {other:?}, running a full scan");
                OutputMode::Full
            }
        }
    }
}

/// Entry point for the binary: system bus, real stdio.
pub async fn run() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let iwd = Iwd::new()
        .await
        .context("could not connect to the system bus")?;

    let mut out = std::io::stdout().lock();
    let mut diag = std::io::stderr().lock();
    run_with(&iwd, args.output_mode(), &mut out, &mut diag).await
}

/// Walks the wireless hierarchy and writes network records to `out`.
///
/// `diag` receives the scan announcements, per-station headers, and
/// non-fatal failure notices. Only two conditions abort the walk: the
/// object graph cannot be fetched at all, or the daemon's namespace root
/// is missing from it. Scan rejections and per-station listing failures
/// are reported on `diag` and the walk continues.
pub async fn run_with<B, O, E>(
    iwd: &Iwd<B>,
    mode: OutputMode,
    out: &mut O,
    diag: &mut E,
) -> anyhow::Result<()>
where
    B: WirelessBackend,
    O: Write,
    E: Write,
{
    let snapshot = iwd
        .snapshot()
        .await
        .context("could not enumerate iwd objects")?;
    let adapters = snapshot
        .adapters()
        .context("no wireless hierarchy found")?;

    for adapter in &adapters {
        for device in &adapter.devices {
            if !device.is_station() {
                continue;
            }

            if mode == OutputMode::Full {
                writeln!(diag, "Scanning: [ {} ]", device.path)?;
                match iwd.trigger_scan(&device.path).await {
                    Ok(()) => {}
                    Err(ScanError::AlreadyInProgress) => {
                        writeln!(diag, "Scan already in progress; using existing results")?;
                    }
                    Err(e) => {
                        writeln!(diag, "Scan failed on {}: {e}", device.path)?;
                        writeln!(diag, "Using existing results")?;
                    }
                }
            }

            writeln!(diag, "Networks:")?;
            match iwd.ordered_networks(&snapshot, &device.path).await {
                Ok(networks) => {
                    for network in &networks {
                        write_network(out, mode, network)?;
                    }
                }
                Err(e) => {
                    writeln!(diag, "Could not list networks on {}: {e}", device.path)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_no_argument_selects_full_mode() {
        assert_eq!(parsed(&["iwd-scan"]).output_mode(), OutputMode::Full);
    }

    #[test]
    fn test_ssid_argument_selects_names_only() {
        assert_eq!(parsed(&["iwd-scan", "ssid"]).output_mode(), OutputMode::SsidOnly);
    }

    #[test]
    fn test_other_argument_falls_back_to_full_mode() {
        assert_eq!(parsed(&["iwd-scan", "verbose"]).output_mode(), OutputMode::Full);
    }

    #[test]
    fn test_multiple_arguments_fall_back_to_full_mode() {
        assert_eq!(
            parsed(&["iwd-scan", "ssid", "extra"]).output_mode(),
            OutputMode::Full
        );
    }
}
