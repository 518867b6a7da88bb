#[tokio::main]
async fn main() -> anyhow::Result<()> {
    todo_server_lib::run().await
}
