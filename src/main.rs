use log::{error, info};

#[tokio::main]
async fn main() -> gifbot::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("gifbot=info,serenity=warn"),
    )
    .init();
    info!("Starting gifbot {}", env!("CARGO_PKG_VERSION"));

    gifbot::run()
        .await
        .inspect(|_| info!("Bot shut down successfully"))
        .inspect_err(|e| error!("Bot stopped with an error: {}", e))
}
