//! Sequential consumer of transport events.

use log::{debug, info};
use poise::serenity_prelude::UserId;
use tokio::sync::mpsc;

use crate::giphy::ImageSearch;
use crate::responder::{MessageSink, Responder};
use crate::types::{IncomingMessage, TransportEvent};

/// The mention string that addresses the bot, including the trailing space.
pub fn address_tag(bot_user_id: UserId) -> String {
    format!("<@{bot_user_id}> ")
}

/// Remove the first occurrence of `tag` from `text`, or `None` if the text does
/// not address the bot.
pub fn strip_address_tag(text: &str, tag: &str) -> Option<String> {
    text.contains(tag).then(|| text.replacen(tag, "", 1))
}

pub struct EventLoop<S, M> {
    responder: Responder<S, M>,
    address_tag: Option<String>,
}

impl<S, M> EventLoop<S, M>
where
    S: ImageSearch,
    M: MessageSink,
{
    pub fn new(responder: Responder<S, M>) -> Self {
        Self {
            responder,
            address_tag: None,
        }
    }

    /// Handle events one at a time until the sending side is dropped.
    pub async fn run(&mut self, events: &mut mpsc::Receiver<TransportEvent>) {
        while let Some(event) = events.recv().await {
            self.handle_event(event).await;
        }
        info!("Event channel closed, leaving event loop");
    }

    pub async fn handle_event(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::Ready { bot_user_id } => {
                info!("Bot is ready as user {}", bot_user_id);
                self.address_tag = Some(address_tag(bot_user_id));
            }
            TransportEvent::Message(message) => self.handle_message(message).await,
            TransportEvent::Other { kind } => debug!("Event received: {}", kind),
        }
    }

    async fn handle_message(&mut self, message: IncomingMessage) {
        let Some(tag) = self.address_tag.as_deref() else {
            debug!("Ignoring message received before ready");
            return;
        };
        let Some(text) = strip_address_tag(&message.text, tag) else {
            return;
        };

        info!(
            "Received message from {} in channel {}: {}",
            message.sender_tag, message.channel_id, text
        );

        // Both handlers see every addressed message.
        self.responder
            .respond_with_image(&text, message.channel_id)
            .await;
        self.responder
            .respond_with_help(&text, message.channel_id)
            .await;
    }
}
