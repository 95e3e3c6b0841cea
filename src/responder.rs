//! Maps addressed messages to replies.

mod query;

use std::future::Future;

use log::{debug, error, info, warn};
use poise::serenity_prelude::ChannelId;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Result;
use crate::giphy::ImageSearch;
use crate::types::OutgoingMessage;

pub use query::{ImageQuery, SelectionMode, select_result};

pub const HELP_MESSAGE: &str = "Mention me followed by a search term to get a GIF, \
    e.g. `@gifbot cats`. I reply with the top result; start the search with `random` \
    to get a random pick from the top results instead.";

/// Destination for replies.
pub trait MessageSink {
    fn send(&self, message: OutgoingMessage) -> impl Future<Output = Result<()>> + Send;
}

pub struct Responder<S, M> {
    search: S,
    sink: M,
    rng: StdRng,
}

impl<S, M> Responder<S, M>
where
    S: ImageSearch,
    M: MessageSink,
{
    pub fn new(search: S, sink: M) -> Self {
        Self::with_rng(search, sink, StdRng::from_rng(&mut rand::rng()))
    }

    pub fn with_rng(search: S, sink: M, rng: StdRng) -> Self {
        Self { search, sink, rng }
    }

    /// Reply with the help text if the message is exactly `help`.
    pub async fn respond_with_help(&self, text: &str, channel_id: ChannelId) {
        if !text.eq_ignore_ascii_case("help") {
            return;
        }
        self.deliver(OutgoingMessage::new(HELP_MESSAGE, channel_id))
            .await;
    }

    /// Search for the message text and reply with a preview URL.
    ///
    /// Search failures are logged and produce no reply. An empty result set
    /// produces a "no results" reply.
    pub async fn respond_with_image(&mut self, text: &str, channel_id: ChannelId) {
        let query = ImageQuery::parse(text);
        debug!("Image query '{}' ({:?})", query.encoded, query.mode);

        let response = match self.search.search(&query.encoded).await {
            Ok(response) => response,
            Err(e) if e.is_decode() => {
                warn!(
                    "Discarding malformed search response for '{}': {}",
                    query.encoded, e
                );
                return;
            }
            Err(e) => {
                error!("Search for '{}' failed: {}", query.encoded, e);
                return;
            }
        };

        let results = response.results();
        let reply = match select_result(&results, query.mode, &mut self.rng) {
            None => {
                info!("No results for '{}'", query.encoded);
                format!("No GIFs found for \"{}\".", query.display())
            }
            Some(result) if result.preview_url.is_empty() => {
                warn!("Result {} has no preview URL, not replying", result.id);
                return;
            }
            Some(result) => result.preview_url.clone(),
        };

        self.deliver(OutgoingMessage::new(reply, channel_id)).await;
    }

    async fn deliver(&self, message: OutgoingMessage) {
        let channel_id = message.channel_id;
        let text = message.text.clone();
        match self.sink.send(message).await {
            Ok(()) => info!("Replied in channel {}: {}", channel_id, text),
            Err(e) => error!("Failed to send reply to channel {}: {}", channel_id, e),
        }
    }
}
