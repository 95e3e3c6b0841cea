//! In-memory fakes for the search and messaging seams.

use std::sync::{Arc, Mutex};

use poise::serenity_prelude as serenity;
use reqwest::StatusCode;

use crate::error::{BotError, Result};
use crate::giphy::{Gif, ImageSearch, SearchResponse};
use crate::responder::MessageSink;
use crate::types::OutgoingMessage;

#[derive(Debug, Clone)]
enum Outcome {
    Previews(Vec<String>),
    Malformed,
    Unavailable,
}

/// Search backend that answers every query with the same canned outcome.
#[derive(Debug, Clone)]
pub struct FakeSearch {
    outcome: Outcome,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeSearch {
    fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            queries: Arc::default(),
        }
    }

    pub fn with_previews(previews: &[&str]) -> Self {
        Self::new(Outcome::Previews(
            previews.iter().map(ToString::to_string).collect(),
        ))
    }

    pub fn empty() -> Self {
        Self::with_previews(&[])
    }

    pub fn malformed() -> Self {
        Self::new(Outcome::Malformed)
    }

    pub fn unavailable() -> Self {
        Self::new(Outcome::Unavailable)
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("queries lock").clone()
    }
}

impl ImageSearch for FakeSearch {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        self.queries
            .lock()
            .expect("queries lock")
            .push(query.to_string());

        match &self.outcome {
            Outcome::Previews(previews) => {
                let mut response = SearchResponse::default();
                for (i, preview) in previews.iter().enumerate() {
                    let mut gif = Gif {
                        id: i.to_string(),
                        url: format!("https://giphy.com/gifs/{i}"),
                        ..Gif::default()
                    };
                    gif.images.fixed_height_downsampled.url = preview.clone();
                    response.data.push(gif);
                }
                response.pagination.total_count = previews.len() as u64;
                Ok(response)
            }
            Outcome::Malformed => Err(serde_json::from_str::<SearchResponse>("{\"data\": [")
                .expect_err("truncated JSON must not decode")
                .into()),
            Outcome::Unavailable => Err(BotError::GiphyApi {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: "upstream unavailable".to_string(),
            }),
        }
    }
}

/// Sink that records delivered messages, or rejects every send.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    sent: Arc<Mutex<Vec<OutgoingMessage>>>,
    attempts: Arc<Mutex<usize>>,
    failing: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().expect("sent lock").clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().expect("attempts lock")
    }
}

impl MessageSink for RecordingSink {
    async fn send(&self, message: OutgoingMessage) -> Result<()> {
        *self.attempts.lock().expect("attempts lock") += 1;
        if self.failing {
            return Err(serenity::Error::Other("sink rejected message").into());
        }
        self.sent.lock().expect("sent lock").push(message);
        Ok(())
    }
}
