pub mod config;
pub mod discord;
pub mod error;
pub mod event_loop;
pub mod giphy;
pub mod responder;
pub mod types;

#[cfg(test)]
mod testing;

use log::{info, warn};

use config::Config;
use discord::Connection;
use error::Result;
use event_loop::EventLoop;
use giphy::GiphyClient;
use responder::Responder;

/// Run the bot until Ctrl-C or until the Discord connection stops.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    let giphy = GiphyClient::new(config.giphy_api_key, config.giphy_api_url);

    let Connection {
        mut events,
        sink,
        shard_manager,
        mut task,
    } = discord::connect(&config.discord_token).await?;

    let mut event_loop = EventLoop::new(Responder::new(giphy, sink));

    tokio::select! {
        () = event_loop.run(&mut events) => {
            warn!("Event loop stopped");
        }
        result = &mut task => {
            result??;
            warn!("Discord client stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
            shard_manager.shutdown_all().await;
        }
    }

    Ok(())
}
