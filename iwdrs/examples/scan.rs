use iwdrs::Iwd;

#[tokio::main]
async fn main() -> iwdrs::Result<()> {
    let iwd = Iwd::new().await?;
    let snapshot = iwd.snapshot().await?;

    for adapter in snapshot.adapters()? {
        for device in adapter.devices.iter().filter(|d| d.is_station()) {
            println!("Scanning on {}...", device.name.as_deref().unwrap_or(&device.path));
            if let Err(e) = iwd.trigger_scan(&device.path).await {
                println!("  scan not started: {e}");
            }

            for net in iwd.ordered_networks(&snapshot, &device.path).await? {
                let marker = if net.connected { ">" } else { " " };
                println!("{marker}{:30} {:>4} dBm  {}", net.name, net.signal_dbm(), net.security);
            }
        }
    }

    Ok(())
}
