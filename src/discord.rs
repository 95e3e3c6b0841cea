//! Discord transport: gateway connection, event translation and message sending.

use std::error::Error as StdError;
use std::sync::Arc;

use log::{debug, info, warn};
use poise::serenity_prelude::{
    self as serenity, ClientBuilder, CreateMessage, FullEvent, GatewayIntents, Http,
    MessageType, ShardManager,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::responder::MessageSink;
use crate::types::{IncomingMessage, OutgoingMessage, TransportEvent};

type EventResult = std::result::Result<(), Box<dyn StdError + Send + Sync>>;

const EVENT_CHANNEL_CAPACITY: usize = 256;

struct Data {
    events: mpsc::Sender<TransportEvent>,
}

/// A running gateway connection.
pub struct Connection {
    /// Translated gateway events, in arrival order.
    pub events: mpsc::Receiver<TransportEvent>,
    pub sink: DiscordSink,
    pub shard_manager: Arc<ShardManager>,
    /// Background connection management; resolves when the client stops.
    pub task: JoinHandle<std::result::Result<(), serenity::Error>>,
}

/// Posts replies through the Discord HTTP API.
#[derive(Clone)]
pub struct DiscordSink {
    http: Arc<Http>,
}

impl MessageSink for DiscordSink {
    async fn send(&self, message: OutgoingMessage) -> Result<()> {
        let builder = CreateMessage::new().content(message.text);
        message
            .channel_id
            .send_message(&self.http, builder)
            .await?;
        Ok(())
    }
}

/// Connect to the gateway and start connection management in the background.
pub async fn connect(token: &str) -> Result<Connection> {
    let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

    debug!("Setting up gateway intents");
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    debug!("Building framework");
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            event_handler: |ctx, event, _framework, data| Box::pin(event_handler(ctx, event, data)),
            ..Default::default()
        })
        .setup(move |_ctx, ready, _framework| {
            info!("Connected to Discord as {}", ready.user.name);
            Box::pin(async move { Ok(Data { events: tx }) })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    let sink = DiscordSink {
        http: client.http.clone(),
    };
    let shard_manager = client.shard_manager.clone();

    info!("Starting Discord client");
    let task = tokio::spawn(async move { client.start().await });

    Ok(Connection {
        events: rx,
        sink,
        shard_manager,
        task,
    })
}

fn translate(event: &FullEvent) -> Option<TransportEvent> {
    match event {
        FullEvent::Ready { data_about_bot } => Some(TransportEvent::Ready {
            bot_user_id: data_about_bot.user.id,
        }),
        FullEvent::Message { new_message } if new_message.author.bot => None,
        FullEvent::Message { new_message }
            if matches!(
                new_message.kind,
                MessageType::Regular | MessageType::InlineReply
            ) =>
        {
            Some(TransportEvent::Message(IncomingMessage {
                text: new_message.content.clone(),
                channel_id: new_message.channel_id,
                sender_tag: new_message.author.tag(),
            }))
        }
        other => Some(TransportEvent::Other {
            kind: other.snake_case_name(),
        }),
    }
}

async fn event_handler(
    _ctx: &serenity::Context,
    event: &FullEvent,
    data: &Data,
) -> EventResult {
    let Some(event) = translate(event) else {
        return Ok(());
    };

    if data.events.send(event).await.is_err() {
        warn!("Event loop has stopped, dropping gateway event");
    }
    Ok(())
}
