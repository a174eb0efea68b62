#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mailcraft_app::run().await
}
