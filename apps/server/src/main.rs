#[tokio::main]
async fn main() -> anyhow::Result<()> {
    engstudy_server::run().await
}
