#[tokio::main]
async fn main() -> anyhow::Result<()> {
    word_recall_backend::run().await
}
