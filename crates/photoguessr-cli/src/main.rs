mod command;
mod record;
mod util;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    command::run().await
}
