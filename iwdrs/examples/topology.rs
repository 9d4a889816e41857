use iwdrs::Iwd;

#[tokio::main]
async fn main() -> iwdrs::Result<()> {
    let iwd = Iwd::new().await?;
    let snapshot = iwd.snapshot().await?;

    for adapter in snapshot.adapters()? {
        println!(
            "{} ({} {})",
            adapter.name.as_deref().unwrap_or(&adapter.path),
            adapter.vendor.as_deref().unwrap_or("unknown vendor"),
            adapter.model.as_deref().unwrap_or("unknown model"),
        );

        for device in &adapter.devices {
            let role = match device.role {
                Some(role) => role.to_string(),
                None => "no role".to_string(),
            };
            println!(
                "  {} [{role}] {}",
                device.name.as_deref().unwrap_or(&device.path),
                device.address.as_deref().unwrap_or(""),
            );
        }
    }

    Ok(())
}
