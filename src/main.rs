#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shelfcheck::run().await
}
