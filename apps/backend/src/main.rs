#[tokio::main]
async fn main() -> anyhow::Result<()> {
    zetamac_backend::run().await
}
