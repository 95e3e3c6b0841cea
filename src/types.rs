//! Message and event types shared between the transport and the bot core.

use poise::serenity_prelude::{ChannelId, UserId};

/// A plain text message received from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub text: String,
    pub channel_id: ChannelId,
    /// Human readable author tag, only used for logging.
    pub sender_tag: String,
}

/// A text message to post to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    pub channel_id: ChannelId,
}

impl OutgoingMessage {
    pub fn new(text: impl Into<String>, channel_id: ChannelId) -> Self {
        Self {
            text: text.into(),
            channel_id,
        }
    }
}

/// Events handed from the background connection task to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// The connection is up and the bot's own account is known.
    Ready { bot_user_id: UserId },
    /// A plain text message from a non-bot author.
    Message(IncomingMessage),
    /// Any other gateway event.
    Other { kind: &'static str },
}
