#[tokio::main]
async fn main() -> anyhow::Result<()> {
    iwd_scan::run().await
}
